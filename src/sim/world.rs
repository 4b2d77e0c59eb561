//! World builder
//!
//! Lays out the fixed level (backdrop, ground plus three ledges, player,
//! star pool) and declares which body groups collide or overlap.

use glam::Vec2;
use rand::Rng;

use super::anim::{AnimationRegistry, Animator};
use super::body::Body;
use super::bombs::BombField;
use super::stars::{Star, StarPool};
use super::state::{Backdrop, Platform, Player};
use crate::assets::{self, AssetCatalog, AssetError};
use crate::consts::*;

/// Platform placement: (centre x, centre y, scale)
pub const PLATFORM_LAYOUT: [(f32, f32, f32); 4] = [
    // Ground, scaled to span the world
    (400.0, 568.0, 2.0),
    (600.0, 400.0, 1.0),
    (50.0, 250.0, 1.0),
    (750.0, 220.0, 1.0),
];

/// Body categories used by collision rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyGroup {
    Player,
    Platforms,
    Stars,
    Bombs,
}

/// How a rule responds to contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// Physical separation
    Collide,
    /// Detection only, bodies pass through each other
    Overlap,
}

/// Gameplay handler invoked for a detected contact
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactHandler {
    CollectStar,
    HitBomb,
}

/// A pairwise collision rule between two groups
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CollisionRule {
    pub a: BodyGroup,
    pub b: BodyGroup,
    pub response: Response,
    pub handler: Option<ContactHandler>,
}

impl CollisionRule {
    const fn collide(a: BodyGroup, b: BodyGroup) -> Self {
        Self {
            a,
            b,
            response: Response::Collide,
            handler: None,
        }
    }
}

/// The level's rules, in the order they are resolved each tick
pub fn collision_rules() -> Vec<CollisionRule> {
    use BodyGroup::*;

    vec![
        CollisionRule::collide(Player, Platforms),
        CollisionRule::collide(Stars, Platforms),
        CollisionRule::collide(Bombs, Platforms),
        CollisionRule {
            a: Player,
            b: Stars,
            response: Response::Overlap,
            handler: Some(ContactHandler::CollectStar),
        },
        CollisionRule {
            a: Player,
            b: Bombs,
            response: Response::Collide,
            handler: Some(ContactHandler::HitBomb),
        },
    ]
}

/// Everything the builder produces
#[derive(Debug, Clone)]
pub struct Scene {
    pub backdrop: Backdrop,
    pub platforms: Vec<Platform>,
    pub player: Player,
    pub stars: StarPool,
    pub bombs: BombField,
    pub anims: AnimationRegistry,
    pub rules: Vec<CollisionRule>,
}

/// Build the level. Fails only if an asset is missing from the catalog.
pub fn build<R: Rng + ?Sized>(catalog: &AssetCatalog, rng: &mut R) -> Result<Scene, AssetError> {
    let sky = catalog.get(assets::SKY)?;
    let backdrop = Backdrop {
        asset: assets::SKY,
        pos: Vec2::new(WORLD_WIDTH, WORLD_HEIGHT) / 2.0,
        size: sky.frame_size(),
    };

    let platforms = build_platforms(catalog)?;
    let player = build_player(catalog)?;
    let stars = build_stars(catalog, rng)?;
    let bombs = BombField::new(catalog.get(assets::BOMB)?.frame_size());

    Ok(Scene {
        backdrop,
        platforms,
        player,
        stars,
        bombs,
        anims: AnimationRegistry::player(),
        rules: collision_rules(),
    })
}

pub fn build_platforms(catalog: &AssetCatalog) -> Result<Vec<Platform>, AssetError> {
    let size = catalog.get(assets::GROUND)?.frame_size();
    Ok(PLATFORM_LAYOUT
        .iter()
        .map(|&(x, y, scale)| Platform {
            body: Body::fixed(Vec2::new(x, y), size).with_scale(scale),
        })
        .collect())
}

pub fn build_player(catalog: &AssetCatalog) -> Result<Player, AssetError> {
    let size = catalog.get(assets::DUDE)?.frame_size();
    let mut body = Body::dynamic(Vec2::new(PLAYER_SPAWN_X, PLAYER_SPAWN_Y), size);
    body.set_bounce(PLAYER_BOUNCE);
    body.set_collide_world_bounds(true);
    body.set_gravity_y(PLAYER_EXTRA_GRAVITY);

    Ok(Player {
        body,
        animator: Animator::new(),
        tint: None,
    })
}

/// Twelve stars spaced along the top, each with its own vertical bounce
pub fn build_stars<R: Rng + ?Sized>(
    catalog: &AssetCatalog,
    rng: &mut R,
) -> Result<StarPool, AssetError> {
    let size = catalog.get(assets::STAR)?.frame_size();
    let stars = (0..STAR_COUNT)
        .map(|i| {
            let x = STAR_START_X + STAR_STEP_X * i as f32;
            let mut body = Body::dynamic(Vec2::new(x, 0.0), size);
            body.set_bounce_y(rng.random_range(STAR_BOUNCE_MIN..STAR_BOUNCE_MAX));
            Star { body, home_x: x }
        })
        .collect();
    Ok(StarPool::new(stars))
}
