use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProjectConfig {
    pub name: String,
    pub description: String,
    pub technologies: Vec<String>,
    pub github: String,
    pub status: String
}
