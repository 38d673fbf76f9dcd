//! Outgoing-audio volume attenuation.

use std::sync::Arc;

use listen_types::SoundId;

use crate::config::EffectConfig;
use crate::registry::SessionRegistry;

/// Volume written onto attenuated events.
pub const ATTENUATED_VOLUME: f32 = 0.1;

/// A positional/custom sound event about to be sent to one player. The
/// interception point exposes the sound identity and gives the core write
/// access to the volume field; delivery itself is never blocked or delayed.
#[derive(Debug, Clone, PartialEq)]
pub struct SoundEvent {
    /// Player the event is destined for.
    pub target_id: i64,
    pub sound: SoundId,
    pub volume: f32,
}

/// Stateless volume filter for players with an open sense session.
///
/// Runs on the outgoing-audio path, concurrently with session ticks; it only
/// takes the registry's read side.
pub struct AudioAttenuationFilter {
    registry: Arc<SessionRegistry>,
}

impl AudioAttenuationFilter {
    pub fn new(registry: Arc<SessionRegistry>) -> Self {
        Self { registry }
    }

    /// Rewrite the event's volume when the target is mid-session. The pulse
    /// sound itself stays at full volume — it is the one thing the player is
    /// supposed to hear clearly.
    pub fn apply(&self, config: &EffectConfig, event: &mut SoundEvent) {
        if !config.heartbeat.reduce_sound_volume {
            return;
        }
        if !self.registry.is_active(event.target_id) {
            return;
        }
        if config.heartbeat.enabled && event.sound == config.heartbeat.sound {
            return;
        }
        event.volume = ATTENUATED_VOLUME;
    }
}
