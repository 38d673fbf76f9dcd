//! Data-driven entity classification.
//!
//! The host registers each entity-type tag it knows about, together with the
//! capability flags the ability cares about. Sessions resolve classification
//! and per-type behavior from this table instead of probing host type
//! hierarchies, which keeps the logic testable in isolation.

use hashbrown::HashMap;

/// Coarse category used to pick a default highlight color when no explicit
/// per-type override exists. Precedence: boss > monster > passive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    Boss,
    Monster,
    Passive,
}

/// Capability flags for one entity type.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TypeFlags {
    /// Type can be tamed by a player (ownership decides the tamed color).
    pub tameable: bool,
    /// Type is a projectile (excluded when `ignore-projectiles` is set).
    pub projectile: bool,
    pub boss: bool,
    pub monster: bool,
}

/// Lookup table keyed by entity-type tag, resolved once per scan.
///
/// Unregistered tags get default (all-false) flags and classify as passive.
#[derive(Debug, Clone, Default)]
pub struct ClassificationTable {
    types: HashMap<String, TypeFlags>,
}

impl ClassificationTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the flags for a type tag.
    pub fn register(&mut self, tag: impl Into<String>, flags: TypeFlags) {
        self.types.insert(tag.into(), flags);
    }

    /// Whether the tag was registered by the host. Config overrides for
    /// unknown tags are dropped at load.
    pub fn is_known(&self, tag: &str) -> bool {
        self.types.contains_key(tag)
    }

    pub fn flags(&self, tag: &str) -> TypeFlags {
        self.types.get(tag).copied().unwrap_or_default()
    }

    pub fn classify(&self, tag: &str) -> Classification {
        let flags = self.flags(tag);
        if flags.boss {
            Classification::Boss
        } else if flags.monster {
            Classification::Monster
        } else {
            Classification::Passive
        }
    }
}
