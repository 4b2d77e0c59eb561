//! Star pool and scoring
//!
//! Stars are never destroyed. Collecting one disables it and bumps the score;
//! when the last active star goes, the whole pool drops in again from the top
//! and a bomb is spawned.

use glam::Vec2;

use super::bombs;
use super::body::Body;
use super::state::{GameEvent, GameState};
use crate::consts::{SCORE_FILL, SCORE_FONT_SIZE, SCORE_TEXT_X, SCORE_TEXT_Y, STAR_POINTS};

/// A collectible star
#[derive(Debug, Clone)]
pub struct Star {
    pub body: Body,
    /// Column the star drops back into when the pool respawns
    pub home_x: f32,
}

/// Fixed-size pool with an explicit active counter
#[derive(Debug, Clone)]
pub struct StarPool {
    stars: Vec<Star>,
    active: usize,
}

impl StarPool {
    pub fn new(stars: Vec<Star>) -> Self {
        let active = stars.iter().filter(|s| s.body.enabled).count();
        Self { stars, active }
    }

    pub fn len(&self) -> usize {
        self.stars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.is_empty()
    }

    /// Number of stars still in play
    pub fn count_active(&self) -> usize {
        self.active
    }

    pub fn get(&self, index: usize) -> Option<&Star> {
        self.stars.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Star> {
        self.stars.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Star> {
        self.stars.iter_mut()
    }

    /// Take a star out of play. Returns false if it was already inactive.
    pub fn deactivate(&mut self, index: usize) -> bool {
        match self.stars.get_mut(index) {
            Some(star) if star.body.enabled => {
                star.body.disable(true);
                self.active -= 1;
                true
            }
            _ => false,
        }
    }

    /// Put every star back at the top of its column
    pub fn respawn_all(&mut self) {
        for star in &mut self.stars {
            star.body.enable_at(star.home_x, 0.0);
        }
        self.active = self.stars.len();
    }
}

/// The on-screen score label
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreText {
    pub pos: Vec2,
    pub font_size: u32,
    pub fill: &'static str,
    text: String,
}

impl ScoreText {
    pub fn new(pos: Vec2) -> Self {
        Self {
            pos,
            font_size: SCORE_FONT_SIZE,
            fill: SCORE_FILL,
            text: format_score(0),
        }
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Score value plus its label, always in sync
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBoard {
    value: u64,
    text: ScoreText,
}

impl Default for ScoreBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreBoard {
    pub fn new() -> Self {
        Self {
            value: 0,
            text: ScoreText::new(Vec2::new(SCORE_TEXT_X, SCORE_TEXT_Y)),
        }
    }

    pub fn value(&self) -> u64 {
        self.value
    }

    pub fn text(&self) -> &ScoreText {
        &self.text
    }

    /// Add points and refresh the label. Returns the new score.
    pub fn add(&mut self, points: u64) -> u64 {
        self.value += points;
        self.text.set_text(format_score(self.value));
        self.value
    }
}

pub fn format_score(score: u64) -> String {
    format!("Score: {}", score)
}

/// Overlap handler for player and star.
///
/// Returns false (and changes nothing) if the star was already collected.
pub fn collect_star(state: &mut GameState, index: usize) -> bool {
    if !state.stars.deactivate(index) {
        return false;
    }

    let score = state.score.add(STAR_POINTS);
    log::debug!("Star {} collected, score {}", index, score);
    state.emit(GameEvent::StarCollected { star: index, score });

    if state.stars.count_active() == 0 {
        state.stars.respawn_all();
        log::info!("All stars collected, respawning {}", state.stars.len());
        state.emit(GameEvent::StarsRespawned);

        let player_x = state.player.body.pos.x;
        bombs::spawn_bomb(state, player_x);
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::settings::WorldConfig;
    use proptest::prelude::*;

    fn new_game(seed: u64) -> GameState {
        GameState::new(seed, WorldConfig::default(), &AssetCatalog::builtin()).unwrap()
    }

    #[test]
    fn test_score_text_starts_at_zero() {
        let board = ScoreBoard::new();
        assert_eq!(board.value(), 0);
        assert_eq!(board.text().text(), "Score: 0");
        assert_eq!(board.text().pos, Vec2::new(16.0, 16.0));
        assert_eq!(board.text().font_size, 32);
        assert_eq!(board.text().fill, "#000");
    }

    #[test]
    fn test_collect_adds_ten() {
        let mut state = new_game(3);
        assert!(collect_star(&mut state, 4));
        assert_eq!(state.score.value(), 10);
        assert_eq!(state.score.text().text(), "Score: 10");
        assert_eq!(state.stars.count_active(), 11);

        let star = state.stars.get(4).unwrap();
        assert!(!star.body.enabled);
        assert!(!star.body.visible);
        assert_eq!(
            state.drain_events(),
            vec![GameEvent::StarCollected { star: 4, score: 10 }]
        );
    }

    #[test]
    fn test_collect_inactive_star_is_ignored() {
        let mut state = new_game(3);
        assert!(collect_star(&mut state, 0));
        assert!(!collect_star(&mut state, 0));
        assert!(!collect_star(&mut state, 99));
        assert_eq!(state.score.value(), 10);
        assert_eq!(state.stars.count_active(), 11);
    }

    #[test]
    fn test_eleven_stars_no_bomb() {
        let mut state = new_game(5);
        for i in 0..11 {
            collect_star(&mut state, i);
        }
        assert_eq!(state.score.value(), 110);
        assert_eq!(state.stars.count_active(), 1);
        assert!(state.bombs.is_empty());
    }

    #[test]
    fn test_out_of_order_collection_fires_once() {
        let mut state = new_game(5);
        for i in [11, 0, 5, 3, 9, 1, 7, 2, 10, 4, 8] {
            collect_star(&mut state, i);
            assert!(state.bombs.is_empty());
        }
        collect_star(&mut state, 6);
        assert_eq!(state.bombs.len(), 1);
        assert_eq!(state.stars.count_active(), 12);
    }

    #[test]
    fn test_last_star_respawns_pool() {
        let mut state = new_game(5);
        // Let stars fall for a bit so the reset is observable
        for star in state.stars.iter_mut() {
            star.body.pos.y = 200.0;
            star.body.vel.y = 50.0;
        }
        for i in 0..12 {
            collect_star(&mut state, i);
        }
        assert_eq!(state.stars.count_active(), 12);
        for star in state.stars.iter() {
            assert!(star.body.enabled && star.body.visible);
            assert_eq!(star.body.pos, Vec2::new(star.home_x, 0.0));
            assert_eq!(star.body.vel, Vec2::ZERO);
        }
        let events = state.drain_events();
        assert!(events.contains(&GameEvent::StarsRespawned));
    }

    proptest! {
        #[test]
        fn prop_active_count_stays_in_range(
            seed in any::<u64>(),
            picks in proptest::collection::vec(0usize..12, 0..60),
        ) {
            let mut state = new_game(seed);
            let mut collected = 0u64;
            for index in picks {
                if collect_star(&mut state, index) {
                    collected += 1;
                }
                let active = state.stars.count_active();
                prop_assert!(active >= 1 && active <= 12);
                let enabled = state.stars.iter().filter(|s| s.body.enabled).count();
                prop_assert_eq!(active, enabled);
            }
            prop_assert_eq!(state.score.value(), collected * 10);
            prop_assert_eq!(state.bombs.len() as u64, collected / 12);
        }
    }
}
