use serde::{Deserialize, Serialize};

/// Where the merged records file is written.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DestinationConfig {
    #[serde(default)]
    pub file: String,
}
