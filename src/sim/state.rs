//! Game state and core simulation types
//!
//! One `GameState` holds the whole session. It is built once at scene start
//! and only mutated by `tick` and the contact handlers it dispatches.

use glam::Vec2;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::anim::{AnimationRegistry, Animator};
use super::body::Body;
use super::bombs::BombField;
use super::motion::MotionOutcome;
use super::stars::{ScoreBoard, StarPool};
use super::world::{self, CollisionRule};
use crate::assets::{AssetCatalog, AssetError};
use crate::settings::WorldConfig;

/// Current phase of the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    /// Active gameplay
    Running,
    /// A bomb was hit; terminal
    GameOver,
}

/// Things that happened during a tick, drained by the host
#[derive(Debug, Clone, PartialEq)]
pub enum GameEvent {
    StarCollected { star: usize, score: u64 },
    /// The whole pool came back after the last star was collected
    StarsRespawned,
    BombSpawned { id: u32, x: f32, velocity_x: f32 },
    GameOver { score: u64, bomb: u32 },
}

/// The player sprite
#[derive(Debug, Clone)]
pub struct Player {
    pub body: Body,
    pub animator: Animator,
    /// Packed 0xRRGGBB tint, if any
    pub tint: Option<u32>,
}

/// A static platform (ground or ledge)
#[derive(Debug, Clone)]
pub struct Platform {
    pub body: Body,
}

/// Non-physical background image
#[derive(Debug, Clone, PartialEq)]
pub struct Backdrop {
    pub asset: &'static str,
    pub pos: Vec2,
    pub size: Vec2,
}

/// Complete session state (deterministic for a given seed and input stream)
#[derive(Debug, Clone)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub world: WorldConfig,
    pub backdrop: Backdrop,
    pub platforms: Vec<Platform>,
    pub player: Player,
    pub stars: StarPool,
    pub score: ScoreBoard,
    pub bombs: BombField,
    pub anims: AnimationRegistry,
    /// Collision rules in registration order
    pub rules: Vec<CollisionRule>,
    pub phase: GamePhase,
    /// Physics integration halted (set on game over)
    pub physics_paused: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
    /// Result of the last input-to-motion step
    pub last_motion: Option<MotionOutcome>,
    /// Events since the host last drained them
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Build the level from the catalog's assets
    pub fn new(seed: u64, world: WorldConfig, catalog: &AssetCatalog) -> Result<Self, AssetError> {
        let mut rng = Pcg32::seed_from_u64(seed);
        let scene = world::build(catalog, &mut rng)?;

        log::info!(
            "World built: {} platforms, {} stars, seed {}",
            scene.platforms.len(),
            scene.stars.len(),
            seed
        );

        Ok(Self {
            seed,
            rng,
            world,
            backdrop: scene.backdrop,
            platforms: scene.platforms,
            player: scene.player,
            stars: scene.stars,
            score: ScoreBoard::new(),
            bombs: scene.bombs,
            anims: scene.anims,
            rules: scene.rules,
            phase: GamePhase::Running,
            physics_paused: false,
            time_ticks: 0,
            last_motion: None,
            events: Vec::new(),
        })
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Take all pending events
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    pub(crate) fn emit(&mut self, event: GameEvent) {
        self.events.push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    #[test]
    fn test_new_session() {
        let state = GameState::new(1, WorldConfig::default(), &AssetCatalog::builtin()).unwrap();
        assert_eq!(state.phase, GamePhase::Running);
        assert!(!state.physics_paused);
        assert_eq!(state.score.value(), 0);
        assert_eq!(state.score.text().text(), "Score: 0");
        assert_eq!(state.stars.count_active(), 12);
        assert!(state.bombs.is_empty());
        assert_eq!(state.platforms.len(), 4);
        assert!(state.events.is_empty());
    }

    #[test]
    fn test_missing_asset_fails_build() {
        let mut catalog = AssetCatalog::new();
        catalog.insert(assets::Asset::image(assets::SKY, "sky.png", 800, 600));
        let err = GameState::new(1, WorldConfig::default(), &catalog).unwrap_err();
        assert_eq!(err, AssetError::Missing("ground".to_string()));
    }

    #[test]
    fn test_drain_events_empties_queue() {
        let mut state =
            GameState::new(1, WorldConfig::default(), &AssetCatalog::builtin()).unwrap();
        state.emit(GameEvent::StarsRespawned);
        assert_eq!(state.drain_events(), vec![GameEvent::StarsRespawned]);
        assert!(state.drain_events().is_empty());
    }
}
