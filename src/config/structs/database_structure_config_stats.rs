use serde::{
    Deserialize,
    Serialize
};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseStructureConfigStats {
    pub table_name: String,
    pub column_id: String,
    pub column_total_visitors: String,
    pub column_last_updated: String
}
