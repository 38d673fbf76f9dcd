//! Owned record of viewer-scoped highlights.
//!
//! The underlying highlight capability is a black box and must not be
//! assumed idempotent, so this keeps its own (entity, viewer) record: applies
//! re-trigger nothing when the pair is already recorded, and everything the
//! session created can be cleared on stop without querying the capability.

use hashbrown::HashMap;

use listen_types::HighlightColor;

use crate::capability::{EntitySnapshot, Highlight, Teams};

#[derive(Debug, Clone)]
struct HighlightRecord {
    name: String,
    is_player: bool,
}

/// Highlights owned by one session (one fixed viewer).
#[derive(Debug)]
pub struct HighlightState {
    viewer_id: i64,
    highlighted: HashMap<i64, HighlightRecord>,
    /// Prior team membership of highlighted players, keyed by entry name,
    /// for the visibility fix-up on clear.
    prior_teams: HashMap<String, String>,
}

impl HighlightState {
    pub fn new(viewer_id: i64) -> Self {
        Self {
            viewer_id,
            highlighted: HashMap::new(),
            prior_teams: HashMap::new(),
        }
    }

    pub fn is_highlighted(&self, entity_id: i64) -> bool {
        self.highlighted.contains_key(&entity_id)
    }

    pub fn highlighted_count(&self) -> usize {
        self.highlighted.len()
    }

    /// Remember which team a player entity was on before highlighting, so
    /// `clear` can refresh its membership.
    pub fn record_prior_team(&mut self, entity_name: &str, team: &str) {
        self.prior_teams
            .insert(entity_name.to_string(), team.to_string());
    }

    /// Apply a highlight. No-op when the entity is already recorded for this
    /// viewer, regardless of color.
    pub fn apply(&mut self, api: &dyn Highlight, entity: &EntitySnapshot, color: HighlightColor) {
        if self.highlighted.contains_key(&entity.id) {
            return;
        }
        api.set_glowing(entity.id, color, self.viewer_id);
        self.highlighted.insert(
            entity.id,
            HighlightRecord {
                name: entity.name.clone(),
                is_player: entity.is_player,
            },
        );
    }

    /// Clear a highlight. No-op when not recorded. For player entities with
    /// a recorded prior team, membership is removed and re-added — the
    /// host's way of refreshing viewer-scoped appearance — and the team
    /// record dropped.
    pub fn clear(&mut self, api: &dyn Highlight, teams: &dyn Teams, entity_id: i64) {
        let Some(record) = self.highlighted.remove(&entity_id) else {
            return;
        };
        api.clear_glowing(entity_id, self.viewer_id);
        if record.is_player
            && let Some(team) = self.prior_teams.remove(&record.name)
        {
            teams.remove_entry(&team, &record.name);
            teams.add_entry(&team, &record.name);
        }
    }

    /// Clear every highlight this session applied.
    pub fn clear_all(&mut self, api: &dyn Highlight, teams: &dyn Teams) {
        let ids: Vec<i64> = self.highlighted.keys().copied().collect();
        for entity_id in ids {
            self.clear(api, teams, entity_id);
        }
    }
}
