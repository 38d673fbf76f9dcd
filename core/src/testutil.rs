//! Recording fakes for the host capabilities, shared across test modules.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use listen_types::{HighlightColor, SoundId, StatusEffect, StatusKind};

use crate::capability::{EntitySnapshot, Highlight, Teams, World};
use crate::classify::{ClassificationTable, TypeFlags};
use crate::config::EffectConfig;

/// One recorded `set_glowing` / `clear_glowing` call.
#[derive(Debug, Clone, PartialEq)]
pub enum GlowCall {
    Set {
        entity_id: i64,
        color: HighlightColor,
        viewer_id: i64,
    },
    Clear {
        entity_id: i64,
        viewer_id: i64,
    },
}

#[derive(Debug, Default)]
pub struct FakeHighlight {
    pub calls: Mutex<Vec<GlowCall>>,
    glowing: Mutex<HashSet<(i64, i64)>>,
}

impl FakeHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_call_count(&self) -> usize {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .filter(|call| matches!(call, GlowCall::Set { .. }))
            .count()
    }

    pub fn glowing_pairs(&self) -> HashSet<(i64, i64)> {
        self.glowing.lock().unwrap().clone()
    }
}

impl Highlight for FakeHighlight {
    fn set_glowing(&self, entity_id: i64, color: HighlightColor, viewer_id: i64) {
        self.calls.lock().unwrap().push(GlowCall::Set {
            entity_id,
            color,
            viewer_id,
        });
        self.glowing.lock().unwrap().insert((entity_id, viewer_id));
    }

    fn clear_glowing(&self, entity_id: i64, viewer_id: i64) {
        self.calls.lock().unwrap().push(GlowCall::Clear {
            entity_id,
            viewer_id,
        });
        self.glowing.lock().unwrap().remove(&(entity_id, viewer_id));
    }

    fn is_glowing(&self, entity_id: i64, viewer_id: i64) -> bool {
        self.glowing.lock().unwrap().contains(&(entity_id, viewer_id))
    }
}

/// One recorded team mutation.
#[derive(Debug, Clone, PartialEq)]
pub enum TeamOp {
    Remove { team: String, entry: String },
    Add { team: String, entry: String },
}

#[derive(Debug, Default)]
pub struct FakeTeams {
    /// entry name -> team name
    pub memberships: Mutex<HashMap<String, String>>,
    pub ops: Mutex<Vec<TeamOp>>,
}

impl FakeTeams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_member(self, entry: &str, team: &str) -> Self {
        self.memberships
            .lock()
            .unwrap()
            .insert(entry.to_string(), team.to_string());
        self
    }

    pub fn recorded_ops(&self) -> Vec<TeamOp> {
        self.ops.lock().unwrap().clone()
    }
}

impl Teams for FakeTeams {
    fn team_of(&self, entry: &str) -> Option<String> {
        self.memberships.lock().unwrap().get(entry).cloned()
    }

    fn remove_entry(&self, team: &str, entry: &str) {
        self.ops.lock().unwrap().push(TeamOp::Remove {
            team: team.to_string(),
            entry: entry.to_string(),
        });
    }

    fn add_entry(&self, team: &str, entry: &str) {
        self.ops.lock().unwrap().push(TeamOp::Add {
            team: team.to_string(),
            entry: entry.to_string(),
        });
    }
}

/// One recorded `play_sound` call.
#[derive(Debug, Clone, PartialEq)]
pub struct PlayedSound {
    pub player_id: i64,
    pub sound: SoundId,
    pub volume: f32,
    pub pitch: f32,
    pub global: bool,
}

/// Recording world fake. Entities are placed with `put_entity` at a distance
/// from every viewer (the tests only ever scan from one viewer at a time).
#[derive(Debug, Default)]
pub struct FakeWorld {
    pub posing: Mutex<HashSet<i64>>,
    pub permissions: Mutex<HashSet<(i64, String)>>,
    pub walk_speeds: Mutex<HashMap<i64, f32>>,
    pub effects: Mutex<HashMap<(i64, StatusKind), StatusEffect>>,
    entities: Mutex<Vec<(EntitySnapshot, f64)>>,
    pub sounds: Mutex<Vec<PlayedSound>>,
    pub danger: Mutex<HashMap<i64, bool>>,
}

impl FakeWorld {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_posing(&self, player_id: i64, posing: bool) {
        let mut set = self.posing.lock().unwrap();
        if posing {
            set.insert(player_id);
        } else {
            set.remove(&player_id);
        }
    }

    pub fn grant_permission(&self, player_id: i64, node: &str) {
        self.permissions
            .lock()
            .unwrap()
            .insert((player_id, node.to_string()));
    }

    pub fn set_walk_speed_raw(&self, player_id: i64, speed: f32) {
        self.walk_speeds.lock().unwrap().insert(player_id, speed);
    }

    pub fn set_effect_raw(&self, player_id: i64, effect: StatusEffect) {
        self.effects
            .lock()
            .unwrap()
            .insert((player_id, effect.kind), effect);
    }

    /// Place an entity at the given distance from any viewer.
    pub fn put_entity(&self, entity: EntitySnapshot, distance: f64) {
        let mut entities = self.entities.lock().unwrap();
        entities.retain(|(e, _)| e.id != entity.id);
        entities.push((entity, distance));
    }

    pub fn move_entity(&self, entity_id: i64, distance: f64) {
        let mut entities = self.entities.lock().unwrap();
        if let Some(slot) = entities.iter_mut().find(|(e, _)| e.id == entity_id) {
            slot.1 = distance;
        }
    }

    pub fn remove_entity(&self, entity_id: i64) {
        self.entities.lock().unwrap().retain(|(e, _)| e.id != entity_id);
    }

    pub fn played_sounds(&self) -> Vec<PlayedSound> {
        self.sounds.lock().unwrap().clone()
    }

    pub fn danger_overlay(&self, player_id: i64) -> Option<bool> {
        self.danger.lock().unwrap().get(&player_id).copied()
    }
}

impl World for FakeWorld {
    fn is_pose_held(&self, player_id: i64) -> bool {
        self.posing.lock().unwrap().contains(&player_id)
    }

    fn has_permission(&self, player_id: i64, node: &str) -> bool {
        self.permissions
            .lock()
            .unwrap()
            .contains(&(player_id, node.to_string()))
    }

    fn walk_speed(&self, player_id: i64) -> f32 {
        self.walk_speeds
            .lock()
            .unwrap()
            .get(&player_id)
            .copied()
            .unwrap_or(0.2)
    }

    fn set_walk_speed(&self, player_id: i64, speed: f32) {
        self.walk_speeds.lock().unwrap().insert(player_id, speed);
    }

    fn status_effect(&self, player_id: i64, kind: StatusKind) -> Option<StatusEffect> {
        self.effects.lock().unwrap().get(&(player_id, kind)).copied()
    }

    fn apply_status_effect(&self, player_id: i64, effect: StatusEffect) {
        self.effects
            .lock()
            .unwrap()
            .insert((player_id, effect.kind), effect);
    }

    fn remove_status_effect(&self, player_id: i64, kind: StatusKind) {
        self.effects.lock().unwrap().remove(&(player_id, kind));
    }

    fn nearby_entities(&self, _viewer_id: i64, radius: f64) -> Vec<EntitySnapshot> {
        self.entities
            .lock()
            .unwrap()
            .iter()
            .filter(|(_, distance)| *distance <= radius)
            .map(|(entity, _)| entity.clone())
            .collect()
    }

    fn distance(&self, _viewer_id: i64, entity_id: i64) -> f64 {
        self.entities
            .lock()
            .unwrap()
            .iter()
            .find(|(e, _)| e.id == entity_id)
            .map(|(_, distance)| *distance)
            .unwrap_or(f64::INFINITY)
    }

    fn play_sound(&self, player_id: i64, sound: &SoundId, volume: f32, pitch: f32, global: bool) {
        self.sounds.lock().unwrap().push(PlayedSound {
            player_id,
            sound: sound.clone(),
            volume,
            pitch,
            global,
        });
    }

    fn set_danger_overlay(&self, player_id: i64, enabled: bool) {
        self.danger.lock().unwrap().insert(player_id, enabled);
    }
}

/// Entity snapshot with the fields most tests leave at their defaults.
pub fn make_entity(id: i64, type_tag: &str) -> EntitySnapshot {
    EntitySnapshot {
        id,
        name: format!("entity-{id}"),
        type_tag: type_tag.to_string(),
        is_player: false,
        owner_id: None,
        has_universal_glow: false,
    }
}

pub fn make_player_entity(id: i64, name: &str) -> EntitySnapshot {
    EntitySnapshot {
        id,
        name: name.to_string(),
        type_tag: "PLAYER".to_string(),
        is_player: true,
        owner_id: None,
        has_universal_glow: false,
    }
}

/// Classification table covering the tags the tests use.
pub fn make_table() -> ClassificationTable {
    let mut table = ClassificationTable::new();
    table.register("PLAYER", TypeFlags::default());
    table.register(
        "WOLF",
        TypeFlags {
            tameable: true,
            monster: false,
            ..TypeFlags::default()
        },
    );
    table.register(
        "ZOMBIE",
        TypeFlags {
            monster: true,
            ..TypeFlags::default()
        },
    );
    table.register(
        "DRAGON",
        TypeFlags {
            boss: true,
            ..TypeFlags::default()
        },
    );
    table.register(
        "ARROW",
        TypeFlags {
            projectile: true,
            ..TypeFlags::default()
        },
    );
    table.register("SHEEP", TypeFlags::default());
    table
}

/// Config with defaults that keep tests deterministic; tweak fields per test.
pub fn make_config() -> EffectConfig {
    EffectConfig::from_toml_str(
        r#"
maximum-radius = 20.0

[default-colors]
tamed = "GREEN"
boss = "DARK_RED"
monster = "RED"
passive = "WHITE"

[heart-beat-effect]
sound = "ambient.heartbeat"
"#,
        &make_table(),
    )
    .expect("test config parses")
}
