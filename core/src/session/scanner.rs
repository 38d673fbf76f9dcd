//! Candidate enumeration around an active player.

use crate::capability::{EntitySnapshot, World};
use crate::classify::ClassificationTable;
use crate::config::EffectConfig;

/// Enumerates and pre-filters entities around a viewer.
///
/// Each `find` call reflects live world state; results are a finite,
/// non-restartable sequence and are never cached across ticks.
pub struct ProximityScanner<'a> {
    config: &'a EffectConfig,
    table: &'a ClassificationTable,
}

impl<'a> ProximityScanner<'a> {
    pub fn new(config: &'a EffectConfig, table: &'a ClassificationTable) -> Self {
        Self { config, table }
    }

    pub fn find(
        &self,
        world: &dyn World,
        viewer_id: i64,
        radius: f64,
    ) -> impl Iterator<Item = EntitySnapshot> + '_ {
        world
            .nearby_entities(viewer_id, radius)
            .into_iter()
            .filter(|entity| self.applies_to(entity))
    }

    /// Exclusion predicate: entities already glowing for everyone, types on
    /// the ignore list, and projectiles when configured to ignore them.
    pub fn applies_to(&self, entity: &EntitySnapshot) -> bool {
        if entity.has_universal_glow {
            return false;
        }
        if self
            .config
            .ignored_types
            .iter()
            .any(|tag| tag == &entity.type_tag)
        {
            return false;
        }
        if self.config.ignore_projectiles && self.table.flags(&entity.type_tag).projectile {
            return false;
        }
        true
    }
}
