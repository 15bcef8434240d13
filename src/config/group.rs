//! Group definitions as written in configuration.

use heapless::{String, Vec};
use serde::Deserialize;

use crate::error::Result;
use crate::group::{GroupDef, MAX_COMPONENTS};

/// One `[groups.<name>]` table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct GroupConfig {
    /// Component labels in order. May be omitted for rotational groups,
    /// which then default to `w, x, y, z`.
    #[serde(default)]
    pub components: Vec<String<16>, MAX_COMPONENTS>,

    /// Whether the components form a `[w, x, y, z]` quaternion.
    #[serde(default)]
    pub rotational: bool,
}

impl GroupConfig {
    /// Convert to a group definition named `name`.
    pub fn to_def(&self, name: &str) -> Result<GroupDef> {
        if self.rotational && self.components.is_empty() {
            return GroupDef::rotational(name);
        }
        let labels: Vec<&str, MAX_COMPONENTS> =
            self.components.iter().map(|label| label.as_str()).collect();
        GroupDef::with_labels(name, &labels, self.rotational)
    }
}
