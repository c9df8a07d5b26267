use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct ProfileConfig {
    pub app_name: String,
    pub owner: String,
    pub role: String,
    pub email: String,
    pub github: String,
    pub location: String,
    pub education: String,
    pub specialization: String,
    pub experience: String,
    pub certifications: u64,
    pub tagline: String
}
