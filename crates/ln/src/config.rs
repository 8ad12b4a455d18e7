use serde::{Deserialize, Serialize};

use crate::facade::TagPolicy;
use crate::level::Priority;

/// Application-owned logging settings, handed to [`crate::Ln::from_config`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LnConfig {
    pub min_level: Priority,
    pub tag: TagPolicy,
}
