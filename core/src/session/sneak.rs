//! The per-player session state machine.

use std::sync::Arc;

use listen_types::{HighlightColor, StatusEffect, StatusKind};
use rand::Rng;

use crate::capability::{Highlight, Teams, World};
use crate::classify::{Classification, ClassificationTable};
use crate::config::EffectConfig;

use super::{EffectCapture, HeartbeatPulse, HighlightState, ProximityScanner, PulseEvent};

/// Buffer added to the configured maximum radius when scanning, so an entity
/// drifting just past its effective radius is still visited once more and
/// has its highlight cleared.
const SCAN_RADIUS_BUFFER: f64 = 5.0;

/// Breathing-motion pulse: a tier-0 boost for half a second.
const PULSE_BOOST: StatusEffect = StatusEffect {
    kind: StatusKind::Speed,
    amplifier: 0,
    duration_ticks: 10,
};

/// Near-permanent jump impairment applied while frozen.
const JUMP_BLOCK: StatusEffect = StatusEffect {
    kind: StatusKind::Jump,
    amplifier: -10,
    duration_ticks: i32::MAX,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Tick loop running.
    Active,
    /// Torn down and due for removal from the registry.
    Terminated,
}

/// What the scheduler should do with the session after a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Stopped,
}

/// The live detection/effect context for one player holding the trigger
/// pose. Exactly one exists per player at a time; lifecycle is start →
/// repeated ticks → stop. The configuration is captured at start and stays
/// fixed for the session's whole life (reload stops all sessions first).
pub struct SneakSession {
    player_id: i64,
    config: Arc<EffectConfig>,
    table: Arc<ClassificationTable>,
    world: Arc<dyn World>,
    highlight_api: Arc<dyn Highlight>,
    teams: Arc<dyn Teams>,
    capture: EffectCapture,
    highlights: HighlightState,
    pulse: HeartbeatPulse,
    /// Latched at start: heartbeat enabled with the sound-only flag set.
    sound_only: bool,
    state: SessionState,
}

impl SneakSession {
    /// Open a session: capture the player state the ability will mutate,
    /// then apply the entry effects.
    pub fn start(
        player_id: i64,
        config: Arc<EffectConfig>,
        table: Arc<ClassificationTable>,
        world: Arc<dyn World>,
        highlight_api: Arc<dyn Highlight>,
        teams: Arc<dyn Teams>,
    ) -> Self {
        let capture = EffectCapture::capture(&*world, player_id);
        let sound_only = config.heartbeat.enabled && config.heartbeat.sound_only;

        if !sound_only {
            // The pulse re-applies this slot; a lingering boost would mask it.
            world.remove_status_effect(player_id, StatusKind::Speed);
        }
        if config.freeze.enabled {
            world.set_walk_speed(player_id, config.freeze.walk_speed);
            if config.freeze.prevent_jump {
                world.remove_status_effect(player_id, StatusKind::Jump);
                world.apply_status_effect(player_id, JUMP_BLOCK);
            }
        }

        tracing::debug!(player = player_id, "sense session opened");

        Self {
            player_id,
            highlights: HighlightState::new(player_id),
            pulse: HeartbeatPulse::new(),
            sound_only,
            state: SessionState::Active,
            capture,
            config,
            table,
            world,
            highlight_api,
            teams,
        }
    }

    pub fn player_id(&self) -> i64 {
        self.player_id
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlights.highlighted_count()
    }

    /// One scheduler tick: detect pose release, refresh highlights from live
    /// world state, then drive the constant indicator and the pulse.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state == SessionState::Terminated {
            return TickOutcome::Stopped;
        }
        if !self.world.is_pose_held(self.player_id) {
            self.stop();
            return TickOutcome::Stopped;
        }

        let scan_radius = self.config.maximum_radius + SCAN_RADIUS_BUFFER;
        let scanner = ProximityScanner::new(&self.config, &self.table);
        let candidates: Vec<_> = scanner
            .find(&*self.world, self.player_id, scan_radius)
            .collect();

        for entity in candidates {
            let effective = self.config.effective_radius(&entity.type_tag);
            if self.world.distance(self.player_id, entity.id) > effective {
                // Drifted out of its own range; drop any highlight we own.
                self.highlights
                    .clear(&*self.highlight_api, &*self.teams, entity.id);
                continue;
            }
            if self.highlights.is_highlighted(entity.id) {
                continue;
            }
            if self.table.flags(&entity.type_tag).tameable
                && entity.owner_id == Some(self.player_id)
            {
                self.highlights.apply(
                    &*self.highlight_api,
                    &entity,
                    self.config.default_colors.tamed,
                );
                continue;
            }
            if entity.is_player
                && let Some(team) = self.teams.team_of(&entity.name)
            {
                self.highlights.record_prior_team(&entity.name, &team);
            }
            let color = self
                .config
                .override_color(&entity.type_tag)
                .unwrap_or_else(|| self.classification_color(&entity.type_tag));
            self.highlights.apply(&*self.highlight_api, &entity, color);
        }

        if self.config.danger_indicator {
            self.world.set_danger_overlay(self.player_id, true);
        }
        if self.config.heartbeat.enabled {
            self.advance_pulse();
        }

        TickOutcome::Continue
    }

    /// Tear down every effect this session applied: clear owned highlights
    /// (with team fix-up), retract the danger indicator, restore captured
    /// player state. Idempotent; the reload and disconnect paths call it
    /// directly, the tick calls it on pose release.
    pub fn stop(&mut self) {
        if self.state == SessionState::Terminated {
            return;
        }
        self.state = SessionState::Terminated;

        self.highlights
            .clear_all(&*self.highlight_api, &*self.teams);
        if self.config.danger_indicator {
            self.world.set_danger_overlay(self.player_id, false);
        }
        self.capture
            .restore(&*self.world, self.player_id, &self.config.freeze, self.sound_only);

        tracing::debug!(player = self.player_id, "sense session closed");
    }

    fn classification_color(&self, type_tag: &str) -> HighlightColor {
        match self.table.classify(type_tag) {
            Classification::Boss => self.config.default_colors.boss,
            Classification::Monster => self.config.default_colors.monster,
            Classification::Passive => self.config.default_colors.passive,
        }
    }

    fn advance_pulse(&mut self) {
        match self.pulse.advance() {
            Some(PulseEvent::Onset) => self.play_pulse(true),
            Some(PulseEvent::Offset) => self.play_pulse(false),
            None => {}
        }
    }

    /// `inhale` carries the visual half of the beat; the exhale is audio
    /// only. Sound-only mode suppresses the visual but keeps the timing.
    fn play_pulse(&self, inhale: bool) {
        if inhale && !self.sound_only {
            self.world.apply_status_effect(self.player_id, PULSE_BOOST);
        }
        // Randomized pitch keeps the repeating sample from feeling mechanical.
        let pitch = rand::thread_rng().gen_range(-1.0_f32..1.0);
        self.world.play_sound(
            self.player_id,
            &self.config.heartbeat.sound,
            1.0,
            pitch,
            self.config.heartbeat.sound_global,
        );
    }
}
