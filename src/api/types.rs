use serde::{Deserialize, Serialize};

/// A project as returned by the backend's listing endpoint.
///
/// Read-only on the client: `id` is assigned by the backend and unique
/// within any collection the listing call returns. `key` and `access` are
/// optional on the wire; older backend rows omit them.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Project {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub key: Option<String>,
    #[serde(default)]
    pub access: Option<String>,
}

impl Project {
    /// Short label for list rendering: the key when present, else the id.
    pub fn label(&self) -> String {
        match &self.key {
            Some(key) => format!("[{}] {}", key, self.name),
            None => format!("[#{}] {}", self.id, self.name),
        }
    }
}
