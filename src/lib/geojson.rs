use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The GeoJSON shape the filter emits. Kept features ride along as
/// raw JSON values so their content stays untouched.
#[derive(Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Entity {
    FeatureCollection { name: String, features: Vec<Value> },
}

impl Entity {
    pub fn name(&self) -> &str {
        match self {
            Entity::FeatureCollection { name, .. } => name,
        }
    }

    pub fn features(&self) -> &[Value] {
        match self {
            Entity::FeatureCollection { features, .. } => features,
        }
    }
}
