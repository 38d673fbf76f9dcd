//! Per-player session machinery.
//!
//! A session is the live detection/effect context bound to one player while
//! the trigger pose is held:
//! - **capture** — snapshot and exact restoration of mutated player state
//! - **highlight** — owned record of viewer-scoped outlines
//! - **pulse** — heartbeat timing state machine
//! - **scanner** — candidate enumeration and pre-filtering
//! - **sneak** — the session state machine orchestrating the above per tick

mod capture;
mod highlight;
mod pulse;
mod scanner;
mod sneak;


pub use capture::EffectCapture;
pub use highlight::HighlightState;
pub use pulse::{HeartbeatPulse, PulseEvent, PULSE_FREQUENCY, PULSE_SUSTAIN};
pub use scanner::ProximityScanner;
pub use sneak::{SessionState, SneakSession, TickOutcome};
