use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct SkillGroupConfig {
    pub category: String,
    pub items: Vec<String>
}
