//! Star Hop - A single-level star collecting platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (arcade physics, stars, bombs, game state)
//! - `renderer`: WebGPU rendering pipeline
//! - `assets`: Named image and sprite sheet catalog
//! - `settings`: World configuration and persisted preferences

pub mod assets;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use assets::{AssetCatalog, AssetError};
pub use settings::{Settings, SettingsError, WorldConfig};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep (one tick per 60 Hz frame)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 5;

    /// World dimensions (y grows downward)
    pub const WORLD_WIDTH: f32 = 800.0;
    pub const WORLD_HEIGHT: f32 = 600.0;
    /// World gravity, pixels/s² downward
    pub const WORLD_GRAVITY: f32 = 300.0;

    /// Player spawn point (sprite centre)
    pub const PLAYER_SPAWN_X: f32 = 100.0;
    pub const PLAYER_SPAWN_Y: f32 = 450.0;
    pub const PLAYER_BOUNCE: f32 = 0.2;
    /// Extra gravity on the player body, on top of world gravity
    pub const PLAYER_EXTRA_GRAVITY: f32 = 300.0;
    /// Horizontal run speed
    pub const PLAYER_RUN_SPEED: f32 = 160.0;
    /// Vertical velocity applied on jump (negative is up)
    pub const PLAYER_JUMP_VELOCITY: f32 = -490.0;

    /// Star pool layout
    pub const STAR_COUNT: usize = 12;
    pub const STAR_START_X: f32 = 12.0;
    pub const STAR_STEP_X: f32 = 70.0;
    pub const STAR_BOUNCE_MIN: f32 = 0.4;
    pub const STAR_BOUNCE_MAX: f32 = 0.8;
    /// Points per collected star
    pub const STAR_POINTS: u64 = 10;

    /// Bomb spawn parameters
    pub const BOMB_SPAWN_Y: f32 = 16.0;
    pub const BOMB_MAX_SPEED_X: i32 = 200;
    pub const BOMB_DRIFT_Y: f32 = 20.0;
    pub const BOMB_BOUNCE: f32 = 1.0;

    /// Player tint once a bomb is hit
    pub const GAME_OVER_TINT: u32 = 0xff0000;

    /// Score text placement and style
    pub const SCORE_TEXT_X: f32 = 16.0;
    pub const SCORE_TEXT_Y: f32 = 16.0;
    pub const SCORE_FONT_SIZE: u32 = 32;
    pub const SCORE_FILL: &str = "#000";
}

/// Convert a packed 0xRRGGBB tint into a linear RGBA color
#[inline]
pub fn tint_to_rgba(tint: u32) -> [f32; 4] {
    let r = ((tint >> 16) & 0xff) as f32 / 255.0;
    let g = ((tint >> 8) & 0xff) as f32 / 255.0;
    let b = (tint & 0xff) as f32 / 255.0;
    [r, g, b, 1.0]
}
