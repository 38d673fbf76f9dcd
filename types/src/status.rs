//! Status-effect slot values captured and restored around a session.

use serde::{Deserialize, Serialize};

/// The two status-effect slots the ability touches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StatusKind {
    /// Jump-impairment slot, blocked while the freeze effect holds.
    Jump,
    /// Speed-boost slot, pulsed by the heartbeat's breathing motion.
    Speed,
}

/// A single status-effect slot value.
///
/// Compared field-for-field when verifying that a session restored exactly
/// what it captured, so every field derives `Eq`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEffect {
    pub kind: StatusKind,
    /// Magnitude tier; negative tiers invert the effect (a strongly negative
    /// jump tier pins the player to the ground).
    pub amplifier: i32,
    pub duration_ticks: i32,
}

impl StatusEffect {
    pub fn new(kind: StatusKind, amplifier: i32, duration_ticks: i32) -> Self {
        Self {
            kind,
            amplifier,
            duration_ticks,
        }
    }
}
