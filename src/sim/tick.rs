//! Fixed timestep simulation tick
//!
//! Phases, in order: physics integration, rule resolution (which queues
//! contacts), contact dispatch, then input-to-motion mapping.

use super::bombs;
use super::body::Body;
use super::motion;
use super::physics::{
    constrain_to_bounds, integrate, overlaps, separate_dynamic, separate_from_static,
};
use super::stars;
use super::state::GameState;
use super::world::{BodyGroup, CollisionRule, ContactHandler, Response};

/// Held keys for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    pub up: bool,
}

/// A detected contact waiting for its handler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contact {
    pub handler: ContactHandler,
    /// Star pool index or bomb id, depending on the handler
    pub target: u32,
}

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, dt: f32) {
    // Nothing runs after game over
    if state.is_game_over() {
        return;
    }

    state.time_ticks += 1;

    if !state.physics_paused {
        let contacts = step_physics(state, dt);
        dispatch_contacts(state, &contacts);
        if state.is_game_over() {
            return;
        }
    }

    let outcome = motion::apply_input(&mut state.player, &state.anims, input);
    state.last_motion = Some(outcome);
    state.player.animator.advance(&state.anims, dt);
}

/// Integrate every body, then resolve the rule table in order.
///
/// Returns contacts that need a gameplay handler, in detection order.
pub fn step_physics(state: &mut GameState, dt: f32) -> Vec<Contact> {
    let gravity = state.world.gravity();
    let bounds = state.world.bounds();

    integrate(&mut state.player.body, gravity, dt);
    constrain_to_bounds(&mut state.player.body, bounds);
    for star in state.stars.iter_mut() {
        integrate(&mut star.body, gravity, dt);
        constrain_to_bounds(&mut star.body, bounds);
    }
    for bomb in state.bombs.iter_mut() {
        integrate(&mut bomb.body, gravity, dt);
        constrain_to_bounds(&mut bomb.body, bounds);
    }

    let mut contacts = Vec::new();
    for i in 0..state.rules.len() {
        let rule = state.rules[i];
        resolve_rule(state, rule, &mut contacts);
    }
    contacts
}

fn resolve_rule(state: &mut GameState, rule: CollisionRule, contacts: &mut Vec<Contact>) {
    use BodyGroup::*;

    let mut queue = |target: u32| {
        if let Some(handler) = rule.handler {
            contacts.push(Contact { handler, target });
        }
    };

    match (rule.a, rule.b) {
        (Player, Platforms) => {
            for platform in &state.platforms {
                if touch(rule.response, &mut state.player.body, &platform.body) {
                    queue(0);
                }
            }
        }
        (Stars, Platforms) => {
            for star in state.stars.iter_mut() {
                for platform in &state.platforms {
                    touch(rule.response, &mut star.body, &platform.body);
                }
            }
        }
        (Bombs, Platforms) => {
            for bomb in state.bombs.iter_mut() {
                for platform in &state.platforms {
                    touch(rule.response, &mut bomb.body, &platform.body);
                }
            }
        }
        (Player, Stars) => {
            for (index, star) in state.stars.iter_mut().enumerate() {
                if touch_dynamic(rule.response, &mut state.player.body, &mut star.body) {
                    queue(index as u32);
                }
            }
        }
        (Player, Bombs) => {
            for bomb in state.bombs.iter_mut() {
                if touch_dynamic(rule.response, &mut state.player.body, &mut bomb.body) {
                    queue(bomb.id);
                }
            }
        }
        (a, b) => log::debug!("No resolver for {:?} <-> {:?}", a, b),
    }
}

/// Moving body against a platform
fn touch(response: Response, body: &mut Body, wall: &Body) -> bool {
    match response {
        Response::Collide => separate_from_static(body, wall),
        Response::Overlap => overlaps(body, wall),
    }
}

/// Two moving bodies
fn touch_dynamic(response: Response, a: &mut Body, b: &mut Body) -> bool {
    match response {
        Response::Collide => separate_dynamic(a, b),
        Response::Overlap => overlaps(a, b),
    }
}

/// Run handlers for queued contacts, stopping once the run is over
pub fn dispatch_contacts(state: &mut GameState, contacts: &[Contact]) {
    for contact in contacts {
        if state.is_game_over() {
            log::debug!("Dropping {:?} after game over", contact);
            break;
        }
        match contact.handler {
            ContactHandler::CollectStar => {
                stars::collect_star(state, contact.target as usize);
            }
            ContactHandler::HitBomb => bombs::hit_bomb(state, contact.target),
        }
    }
}
