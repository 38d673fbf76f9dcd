//! Ability configuration loading.
//!
//! The configuration is a single TOML file. Loading follows the degrade-and-
//! continue rule: an override entry with an unknown entity type or an
//! unparseable color is logged and skipped (falling back to "no override"),
//! a missing `entities` table means "no overrides", and defaults cover every
//! absent section. Nothing in here aborts the load short of an unreadable or
//! syntactically broken file.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use listen_types::{HighlightColor, SoundId};
use serde::Deserialize;

use crate::classify::ClassificationTable;

/// Volume attenuation and pulse parameters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct HeartbeatConfig {
    pub enabled: bool,
    /// The pulse sound; also the one sound exempted from volume attenuation.
    pub sound: SoundId,
    /// Suppress the visual half of the pulse (audio timing is unchanged).
    pub sound_only: bool,
    /// Play the pulse at the player's location for everyone, not player-only.
    pub sound_global: bool,
    pub reduce_sound_volume: bool,
}

impl Default for HeartbeatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            sound: SoundId::new("ambient.heartbeat"),
            sound_only: false,
            sound_global: false,
            reduce_sound_volume: true,
        }
    }
}

/// Movement impairment applied while the pose is held.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FreezeConfig {
    pub enabled: bool,
    pub walk_speed: f32,
    pub prevent_jump: bool,
}

impl Default for FreezeConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            walk_speed: 0.05,
            prevent_jump: true,
        }
    }
}

/// User-facing reply strings for the admin command.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct Messages {
    pub no_permission: String,
    pub reload: String,
    pub invalid: String,
}

impl Default for Messages {
    fn default() -> Self {
        Self {
            no_permission: "You don't have permission to do that.".to_string(),
            reload: "Configuration reloaded.".to_string(),
            invalid: "Invalid usage, try: /listenmode reload".to_string(),
        }
    }
}

/// Default highlight colors per classification.
#[derive(Debug, Clone, PartialEq)]
pub struct DefaultColors {
    pub tamed: HighlightColor,
    pub boss: HighlightColor,
    pub monster: HighlightColor,
    pub passive: HighlightColor,
}

/// Per-type detection override.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TypeOverride {
    /// `None` means "use the classification default".
    pub color: HighlightColor,
    pub radius: f64,
}

/// Resolved, validated ability configuration. Read-only to sessions; each
/// session captures the `Arc` it was created with for its whole life.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectConfig {
    pub maximum_radius: f64,
    /// Permission node a player needs for the pose to open a session.
    pub required_permission: Option<String>,
    /// Constant red vignette asserted while a session is active.
    pub danger_indicator: bool,
    pub ignored_types: Vec<String>,
    pub ignore_projectiles: bool,
    pub default_colors: DefaultColors,
    pub freeze: FreezeConfig,
    pub heartbeat: HeartbeatConfig,
    pub messages: Messages,
    overrides: HashMap<String, TypeOverride>,
}

impl Default for EffectConfig {
    fn default() -> Self {
        Self::from_raw(RawConfig::default(), &ClassificationTable::default())
    }
}

impl EffectConfig {
    /// Load and validate a config file. Per-entry anomalies degrade to a
    /// logged skip; only an unreadable or unparseable file is an error.
    pub fn load(path: &Path, table: &ClassificationTable) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let raw: RawConfig = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_raw(raw, table))
    }

    /// Parse config from TOML text (embedding hosts that keep their own
    /// config storage feed the section through here).
    pub fn from_toml_str(
        contents: &str,
        table: &ClassificationTable,
    ) -> Result<Self, toml::de::Error> {
        let raw: RawConfig = toml::from_str(contents)?;
        Ok(Self::from_raw(raw, table))
    }

    fn from_raw(raw: RawConfig, table: &ClassificationTable) -> Self {
        let mut overrides = HashMap::new();
        for (tag, entry) in raw.entities {
            if !table.is_known(&tag) {
                tracing::warn!(entity = %tag, "unknown entity type in overrides, skipping entry");
                continue;
            }
            let color = match entry.color {
                Some(ref value) => value.parse::<HighlightColor>().unwrap_or_else(|e| {
                    tracing::warn!(entity = %tag, error = %e, "unparseable override color, using NONE");
                    HighlightColor::None
                }),
                None => HighlightColor::None,
            };
            let radius = entry.radius.unwrap_or(raw.maximum_radius);
            // An override that changes nothing is dropped at load.
            if color.is_none() && radius == raw.maximum_radius {
                continue;
            }
            overrides.insert(tag, TypeOverride { color, radius });
        }

        Self {
            maximum_radius: raw.maximum_radius,
            required_permission: raw.required_permission,
            danger_indicator: raw.danger_indicator,
            ignored_types: raw.ignored_types,
            ignore_projectiles: raw.ignore_projectiles,
            default_colors: DefaultColors {
                tamed: parse_default_color(&raw.default_colors.tamed, "tamed"),
                boss: parse_default_color(&raw.default_colors.boss, "boss"),
                monster: parse_default_color(&raw.default_colors.monster, "monster"),
                passive: parse_default_color(&raw.default_colors.passive, "passive"),
            },
            freeze: raw.freeze_effect,
            heartbeat: raw.heart_beat_effect,
            messages: raw.messages,
            overrides,
        }
    }

    /// Detection radius for a type: its override if configured, else the
    /// global maximum.
    pub fn effective_radius(&self, type_tag: &str) -> f64 {
        self.overrides
            .get(type_tag)
            .map(|o| o.radius)
            .unwrap_or(self.maximum_radius)
    }

    /// Explicit override color for a type, if one is configured and not NONE.
    pub fn override_color(&self, type_tag: &str) -> Option<HighlightColor> {
        self.overrides
            .get(type_tag)
            .map(|o| o.color)
            .filter(|color| !color.is_none())
    }

    /// Number of surviving override entries (post skip/drop rules).
    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    /// Default on-disk location for hosts that don't supply a path.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("listenmode").join("config.toml"))
    }
}

fn parse_default_color(value: &str, slot: &str) -> HighlightColor {
    value.parse::<HighlightColor>().unwrap_or_else(|e| {
        tracing::warn!(slot, error = %e, "unparseable default color, using WHITE");
        HighlightColor::White
    })
}

// ─────────────────────────────────────────────────────────────────────────────
// Raw file format
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct RawConfig {
    maximum_radius: f64,
    required_permission: Option<String>,
    danger_indicator: bool,
    ignored_types: Vec<String>,
    ignore_projectiles: bool,
    default_colors: RawDefaultColors,
    freeze_effect: FreezeConfig,
    heart_beat_effect: HeartbeatConfig,
    entities: HashMap<String, RawOverride>,
    messages: Messages,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            maximum_radius: 20.0,
            required_permission: None,
            danger_indicator: true,
            ignored_types: Vec::new(),
            ignore_projectiles: true,
            default_colors: RawDefaultColors::default(),
            freeze_effect: FreezeConfig::default(),
            heart_beat_effect: HeartbeatConfig::default(),
            entities: HashMap::new(),
            messages: Messages::default(),
        }
    }
}

/// Colors arrive as free-form strings so one bad value degrades to a logged
/// fallback instead of failing the whole parse.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct RawDefaultColors {
    tamed: String,
    boss: String,
    monster: String,
    passive: String,
}

impl Default for RawDefaultColors {
    fn default() -> Self {
        Self {
            tamed: "GREEN".to_string(),
            boss: "DARK_RED".to_string(),
            monster: "RED".to_string(),
            passive: "WHITE".to_string(),
        }
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
struct RawOverride {
    color: Option<String>,
    radius: Option<f64>,
}

/// Errors that can occur while loading a config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}
