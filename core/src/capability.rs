//! Host capability seams.
//!
//! Every side effect the core performs goes through one of these traits; the
//! embedding host provides the implementations and tests provide recording
//! fakes. All calls are fire-and-forget — nothing here returns a failure the
//! core is expected to handle, and nothing may block with unbounded latency.

use listen_types::{HighlightColor, SoundId, StatusEffect, StatusKind};

/// Point-in-time view of a nearby entity. Produced fresh on every scan; the
/// core never caches snapshots across ticks.
#[derive(Debug, Clone, PartialEq)]
pub struct EntitySnapshot {
    pub id: i64,
    /// Display name; also the team-entry key for player entities.
    pub name: String,
    /// Host entity-type tag, the key into the classification table.
    pub type_tag: String,
    pub is_player: bool,
    /// Owning player id when the entity is tamed.
    pub owner_id: Option<i64>,
    /// The entity already glows for every observer (host-level effect).
    /// Viewer-scoped highlighting must not fight that state.
    pub has_universal_glow: bool,
}

/// Viewer-scoped outline rendering.
///
/// Treated as a black box: the core keeps its own record of applied
/// highlights rather than trusting `is_glowing` for idempotence.
pub trait Highlight: Send + Sync {
    fn set_glowing(&self, entity_id: i64, color: HighlightColor, viewer_id: i64);
    fn clear_glowing(&self, entity_id: i64, viewer_id: i64);
    fn is_glowing(&self, entity_id: i64, viewer_id: i64) -> bool;
}

/// Team visibility groupings.
pub trait Teams: Send + Sync {
    /// Name of the team whose entry list contains `entry`, if any.
    fn team_of(&self, entry: &str) -> Option<String>;
    fn remove_entry(&self, team: &str, entry: &str);
    fn add_entry(&self, team: &str, entry: &str);
}

/// Player and world access.
pub trait World: Send + Sync {
    /// Whether the player currently holds the trigger pose.
    fn is_pose_held(&self, player_id: i64) -> bool;
    fn has_permission(&self, player_id: i64, node: &str) -> bool;

    fn walk_speed(&self, player_id: i64) -> f32;
    fn set_walk_speed(&self, player_id: i64, speed: f32);

    /// Current value of a status-effect slot, `None` when empty.
    fn status_effect(&self, player_id: i64, kind: StatusKind) -> Option<StatusEffect>;
    fn apply_status_effect(&self, player_id: i64, effect: StatusEffect);
    fn remove_status_effect(&self, player_id: i64, kind: StatusKind);

    /// Entities within a bounding radius of the player, excluding the player.
    fn nearby_entities(&self, viewer_id: i64, radius: f64) -> Vec<EntitySnapshot>;
    fn distance(&self, viewer_id: i64, entity_id: i64) -> f64;

    /// Play a sound at the player's location; `global` makes it audible to
    /// the whole world rather than the player alone.
    fn play_sound(&self, player_id: i64, sound: &SoundId, volume: f32, pitch: f32, global: bool);

    /// Assert or retract the constant red danger vignette for one viewer.
    fn set_danger_overlay(&self, player_id: i64, enabled: bool);
}
