use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigVisits {
    pub table_name: String,
    pub column_id: String,
    pub column_origin: String,
    pub column_signature: String,
    pub column_observed_at: String,
    pub column_path: String
}
