//! Heartbeat pulse timing.
//!
//! Pure counter state machine, one instance per session: a silent ramp up to
//! `PULSE_FREQUENCY`, an onset, a sustain window, then an offset that resets
//! the counter. The session decides what an onset/offset sounds and looks
//! like; this module only keeps time.

/// Ticks from cycle start to the onset.
pub const PULSE_FREQUENCY: u32 = 32;

/// Last count inside the sustain window; the offset fires on the first count
/// beyond it (frequency + frequency/3, so count 43 with the default 32).
pub const PULSE_SUSTAIN: u32 = PULSE_FREQUENCY + PULSE_FREQUENCY / 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PulseEvent {
    /// Start of the audible/visible beat.
    Onset,
    /// End of the sustain window; the counter has been reset.
    Offset,
}

#[derive(Debug, Default)]
pub struct HeartbeatPulse {
    count: u32,
}

impl HeartbeatPulse {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance one tick. Emits `Onset` exactly once per cycle at
    /// `PULSE_FREQUENCY`, `Offset` exactly once on the first count past
    /// `PULSE_SUSTAIN`, and nothing otherwise.
    pub fn advance(&mut self) -> Option<PulseEvent> {
        self.count += 1;
        if self.count < PULSE_FREQUENCY {
            return None;
        }
        if self.count == PULSE_FREQUENCY {
            return Some(PulseEvent::Onset);
        }
        if self.count > PULSE_SUSTAIN {
            self.count = 0;
            return Some(PulseEvent::Offset);
        }
        None
    }

    pub fn count(&self) -> u32 {
        self.count
    }
}
