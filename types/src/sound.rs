//! Host sound asset identifiers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a host sound asset. Opaque to the core; only compared for
/// equality (the pulse sound is exempted from volume attenuation by id).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoundId(String);

impl SoundId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SoundId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SoundId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}
