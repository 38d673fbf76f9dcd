pub mod audio;
pub mod capability;
pub mod classify;
pub mod command;
pub mod config;
pub mod registry;
pub mod service;
pub mod session;

#[cfg(test)]
pub(crate) mod testutil;

// Re-exports for convenience
pub use audio::{ATTENUATED_VOLUME, AudioAttenuationFilter, SoundEvent};
pub use capability::{EntitySnapshot, Highlight, Teams, World};
pub use classify::{Classification, ClassificationTable, TypeFlags};
pub use command::{CommandSender, RELOAD_PERMISSION, handle_command};
pub use config::{ConfigError, EffectConfig};
pub use registry::SessionRegistry;
pub use service::ListenService;
pub use session::{SneakSession, TickOutcome};
