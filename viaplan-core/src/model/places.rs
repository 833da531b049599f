use serde::{Deserialize, Serialize};

/// A named location usable as a graph node
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Place {
    /// Display name, unique within the place set
    pub name: String,
    /// Name of the region sub-list the place was configured under
    pub region: String,
}

impl Place {
    pub fn new(name: impl Into<String>, region: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            region: region.into(),
        }
    }
}
