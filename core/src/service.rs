//! Embedding surface.
//!
//! The host wires its event sources and scheduler to one `ListenService`:
//! pose changes and disconnects come in as method calls, a fixed-period
//! scheduler drives `tick_all` (one tick ≈ 1/20 s), and the outgoing-audio
//! interception point routes events through `filter_sound`. The service owns
//! the live configuration and the session registry; reload and shutdown tear
//! every session down synchronously so no partial state is ever observable.

use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use crate::audio::{AudioAttenuationFilter, SoundEvent};
use crate::capability::{Highlight, Teams, World};
use crate::classify::ClassificationTable;
use crate::config::{ConfigError, EffectConfig};
use crate::registry::SessionRegistry;
use crate::session::SneakSession;

pub struct ListenService {
    config: RwLock<Arc<EffectConfig>>,
    config_path: PathBuf,
    table: Arc<ClassificationTable>,
    registry: Arc<SessionRegistry>,
    world: Arc<dyn World>,
    highlight: Arc<dyn Highlight>,
    teams: Arc<dyn Teams>,
    filter: AudioAttenuationFilter,
}

impl ListenService {
    pub fn new(
        config: EffectConfig,
        config_path: PathBuf,
        table: ClassificationTable,
        world: Arc<dyn World>,
        highlight: Arc<dyn Highlight>,
        teams: Arc<dyn Teams>,
    ) -> Self {
        let registry = Arc::new(SessionRegistry::new());
        Self {
            config: RwLock::new(Arc::new(config)),
            config_path,
            table: Arc::new(table),
            filter: AudioAttenuationFilter::new(Arc::clone(&registry)),
            registry,
            world,
            highlight,
            teams,
        }
    }

    /// Current configuration snapshot.
    pub fn config(&self) -> Arc<EffectConfig> {
        Arc::clone(&self.config.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Pose-change event. A held pose opens a session (subject to the
    /// required permission and the one-session-per-player rule). Release is
    /// deliberately not handled here: the next tick detects it, giving at
    /// most one tick period of latency.
    pub fn pose_changed(&self, player_id: i64, held: bool) {
        if !held {
            return;
        }
        let config = self.config();
        if let Some(node) = &config.required_permission
            && !self.world.has_permission(player_id, node)
        {
            return;
        }
        self.registry.start_with(player_id, || {
            SneakSession::start(
                player_id,
                Arc::clone(&config),
                Arc::clone(&self.table),
                Arc::clone(&self.world),
                Arc::clone(&self.highlight),
                Arc::clone(&self.teams),
            )
        });
    }

    /// Force-stop on disconnect, as if the pose were released, so no
    /// captured effect leaks onto the departed player's persisted state.
    pub fn player_disconnected(&self, player_id: i64) {
        if let Some(mut session) = self.registry.remove(player_id) {
            session.stop();
            tracing::info!(player = player_id, "session force-stopped on disconnect");
        }
    }

    /// Scheduler hook: tick every open session, dropping the ones that
    /// stopped themselves on pose release.
    pub fn tick_all(&self) {
        self.registry.tick_all();
    }

    /// Stop every session, then swap in a freshly loaded configuration.
    /// Sessions are torn down before the load is even attempted, so no
    /// partial state survives either way; the old configuration stays in
    /// place when the load fails.
    pub fn reload(&self) -> Result<(), ConfigError> {
        self.stop_all();
        let config = EffectConfig::load(&self.config_path, &self.table)?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(config);
        tracing::info!("configuration reloaded");
        Ok(())
    }

    /// Synchronous teardown of every open session.
    pub fn shutdown(&self) {
        self.stop_all();
    }

    fn stop_all(&self) {
        let mut sessions = self.registry.drain();
        for session in &mut sessions {
            session.stop();
        }
        if !sessions.is_empty() {
            tracing::info!(count = sessions.len(), "stopped all sense sessions");
        }
    }

    /// Outgoing-audio interception hook.
    pub fn filter_sound(&self, event: &mut SoundEvent) {
        let config = self.config();
        self.filter.apply(&config, event);
    }
}
