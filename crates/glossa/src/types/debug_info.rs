use serde::{Deserialize, Serialize};

/// Provenance of a phrase, shown by the debug overlay.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebugInfo {
    pub group_name: String,
    pub phrase_key: String,
}

impl DebugInfo {
    pub fn new(group_name: impl Into<String>, phrase_key: impl Into<String>) -> Self {
        Self {
            group_name: group_name.into(),
            phrase_key: phrase_key.into(),
        }
    }
}
