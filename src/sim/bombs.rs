//! Bomb hazards
//!
//! Bombs spawn on the far half of the world from the player, ignore gravity,
//! bounce elastically off everything, and are never removed. Touching one
//! ends the run.

use glam::Vec2;
use rand::Rng;

use super::anim::AnimKey;
use super::body::Body;
use super::state::{GameEvent, GamePhase, GameState};
use crate::consts::*;
use crate::settings::WorldConfig;

/// A bomb entity
#[derive(Debug, Clone)]
pub struct Bomb {
    pub id: u32,
    pub body: Body,
}

/// All bombs spawned this session (sorted by id)
#[derive(Debug, Clone)]
pub struct BombField {
    bombs: Vec<Bomb>,
    body_size: Vec2,
    next_id: u32,
}

impl BombField {
    pub fn new(body_size: Vec2) -> Self {
        Self {
            bombs: Vec::new(),
            body_size,
            next_id: 1,
        }
    }

    pub fn len(&self) -> usize {
        self.bombs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bombs.is_empty()
    }

    pub fn body_size(&self) -> Vec2 {
        self.body_size
    }

    pub fn iter(&self) -> impl Iterator<Item = &Bomb> {
        self.bombs.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Bomb> {
        self.bombs.iter_mut()
    }

    pub fn get(&self, id: u32) -> Option<&Bomb> {
        self.bombs.iter().find(|b| b.id == id)
    }

    /// Add a bomb at `(x, BOMB_SPAWN_Y)` moving with `velocity_x`
    fn spawn(&mut self, x: f32, velocity_x: f32) -> u32 {
        let id = self.next_id;
        self.next_id += 1;

        let mut body = Body::dynamic(Vec2::new(x, BOMB_SPAWN_Y), self.body_size);
        body.set_bounce(BOMB_BOUNCE);
        body.set_collide_world_bounds(true);
        body.allow_gravity = false;
        body.set_velocity(velocity_x, BOMB_DRIFT_Y);

        self.bombs.push(Bomb { id, body });
        id
    }
}

/// Pick a spawn x on the opposite half of the world from `player_x`.
///
/// Integer positions, inclusive on both ends, like the rest of the level's
/// random draws.
pub fn spawn_x<R: Rng + ?Sized>(player_x: f32, world: &WorldConfig, rng: &mut R) -> f32 {
    let mid = world.midpoint_x().round() as i32;
    let width = world.bounds().x.round() as i32;

    let x = if player_x < world.midpoint_x() {
        rng.random_range(mid..=width)
    } else {
        rng.random_range(0..=mid)
    };
    x as f32
}

/// Spawn one bomb away from the player. Returns its id.
pub fn spawn_bomb(state: &mut GameState, player_x: f32) -> u32 {
    let x = spawn_x(player_x, &state.world, &mut state.rng);
    let velocity_x = state
        .rng
        .random_range(-BOMB_MAX_SPEED_X..=BOMB_MAX_SPEED_X) as f32;

    let id = state.bombs.spawn(x, velocity_x);
    log::info!(
        "Bomb {} spawned at x={} (player at x={}), vx={}",
        id,
        x,
        player_x,
        velocity_x
    );
    state.emit(GameEvent::BombSpawned { id, x, velocity_x });
    id
}

/// Contact handler for player and bomb: freeze the world and end the run
pub fn hit_bomb(state: &mut GameState, bomb_id: u32) {
    if state.phase == GamePhase::GameOver {
        return;
    }

    state.physics_paused = true;
    state.player.tint = Some(GAME_OVER_TINT);
    state.player.animator.play(&state.anims, AnimKey::Turn, false);
    state.phase = GamePhase::GameOver;

    let score = state.score.value();
    log::info!("Player hit bomb {} - game over, score {}", bomb_id, score);
    state.emit(GameEvent::GameOver {
        score,
        bomb: bomb_id,
    });
}
