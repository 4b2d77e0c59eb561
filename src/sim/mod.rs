//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only
//! - Seeded RNG only
//! - Stable iteration order (pool index, bomb ID)
//! - No rendering or platform dependencies

pub mod anim;
pub mod body;
pub mod bombs;
pub mod motion;
pub mod physics;
pub mod stars;
pub mod state;
pub mod tick;
pub mod world;

pub use anim::{AnimKey, AnimationRegistry, Animator, Clip};
pub use body::{Body, Touching};
pub use bombs::{Bomb, BombField, hit_bomb, spawn_bomb, spawn_x};
pub use motion::{MotionBranch, MotionOutcome, apply_input};
pub use stars::{ScoreBoard, ScoreText, Star, StarPool, collect_star};
pub use state::{Backdrop, GameEvent, GamePhase, GameState, Platform, Player};
pub use tick::{Contact, TickInput, tick};
pub use world::{BodyGroup, CollisionRule, ContactHandler, Response};
