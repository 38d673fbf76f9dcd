//! Snapshot and exact restoration of the player state a session mutates.

use listen_types::{StatusEffect, StatusKind};

use crate::capability::World;
use crate::config::FreezeConfig;

/// Captured at session start: the walk speed and the two status-effect slots
/// the ability may touch. Restored bit-identically at stop, including "slot
/// was empty".
#[derive(Debug, Clone, PartialEq)]
pub struct EffectCapture {
    walk_speed: f32,
    jump_effect: Option<StatusEffect>,
    speed_effect: Option<StatusEffect>,
}

impl EffectCapture {
    pub fn capture(world: &dyn World, player_id: i64) -> Self {
        Self {
            walk_speed: world.walk_speed(player_id),
            jump_effect: world.status_effect(player_id, StatusKind::Jump),
            speed_effect: world.status_effect(player_id, StatusKind::Speed),
        }
    }

    /// Put back exactly what was captured. Slots that held no effect end up
    /// empty. In sound-only mode the speed slot was never touched by the
    /// session and is left alone here as well.
    pub fn restore(
        &self,
        world: &dyn World,
        player_id: i64,
        freeze: &FreezeConfig,
        sound_only: bool,
    ) {
        if freeze.enabled {
            world.set_walk_speed(player_id, self.walk_speed);
            if freeze.prevent_jump {
                world.remove_status_effect(player_id, StatusKind::Jump);
                if let Some(effect) = self.jump_effect {
                    world.apply_status_effect(player_id, effect);
                }
            }
        }
        if !sound_only {
            world.remove_status_effect(player_id, StatusKind::Speed);
            if let Some(effect) = self.speed_effect {
                world.apply_status_effect(player_id, effect);
            }
        }
    }
}
