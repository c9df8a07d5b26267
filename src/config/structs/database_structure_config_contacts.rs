use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigContacts {
    pub table_name: String,
    pub column_id: String,
    pub column_name: String,
    pub column_email: String,
    pub column_message: String,
    pub column_submitted_at: String,
    pub column_status: String,
    pub column_origin: String
}
