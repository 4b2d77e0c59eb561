//! Shape generation for 2D primitives
//!
//! All coordinates are world space (y down); the pipeline maps them to NDC.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Body, GameState, Player};
use crate::tint_to_rgba;

/// Generate vertices for a filled axis-aligned rectangle
pub fn rect(center: Vec2, half: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let min = center - half;
    let max = center + half;

    vec![
        Vertex::new(min.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Generate vertices for a rectangle outline
pub fn rect_outline(center: Vec2, half: Vec2, thickness: f32, color: [f32; 4]) -> Vec<Vertex> {
    let t = thickness / 2.0;
    let mut vertices = Vec::with_capacity(24);
    // Top, bottom, left, right edges
    vertices.extend(rect(center - Vec2::new(0.0, half.y), Vec2::new(half.x, t), color));
    vertices.extend(rect(center + Vec2::new(0.0, half.y), Vec2::new(half.x, t), color));
    vertices.extend(rect(center - Vec2::new(half.x, 0.0), Vec2::new(t, half.y), color));
    vertices.extend(rect(center + Vec2::new(half.x, 0.0), Vec2::new(t, half.y), color));
    vertices
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Generate vertices for a diamond filling the given half extents
pub fn diamond(center: Vec2, half: Vec2, color: [f32; 4]) -> Vec<Vertex> {
    let top = Vec2::new(center.x, center.y - half.y);
    let bottom = Vec2::new(center.x, center.y + half.y);
    let left = Vec2::new(center.x - half.x, center.y);
    let right = Vec2::new(center.x + half.x, center.y);

    vec![
        Vertex::new(top.x, top.y, color),
        Vertex::new(right.x, right.y, color),
        Vertex::new(left.x, left.y, color),
        Vertex::new(left.x, left.y, color),
        Vertex::new(right.x, right.y, color),
        Vertex::new(bottom.x, bottom.y, color),
    ]
}

/// Horizontal offset of the face marker for a sprite sheet frame.
///
/// Frames 0-3 face left, 4 faces the camera, 5-8 face right.
pub fn facing_offset(frame: u32) -> f32 {
    match frame {
        0..=3 => -1.0,
        4 => 0.0,
        _ => 1.0,
    }
}

/// Player quad with a face marker that follows the animation frame
pub fn player_sprite(player: &Player) -> Vec<Vertex> {
    let body = &player.body;
    let color = player.tint.map(tint_to_rgba).unwrap_or(colors::PLAYER);
    let frame = player.animator.current_frame();

    let mut vertices = rect(body.pos, body.half, color);

    // Running frames bob the face up and down
    let bob = if frame != 4 && frame % 2 == 1 { 2.0 } else { 0.0 };
    let face = body.pos
        + Vec2::new(
            facing_offset(frame) * body.half.x * 0.4,
            -body.half.y * 0.5 + bob,
        );
    vertices.extend(rect(face, body.half * Vec2::new(0.35, 0.2), colors::PLAYER_FACE));
    vertices
}

fn debug_outline(body: &Body, vertices: &mut Vec<Vertex>) {
    vertices.extend(rect_outline(body.pos, body.half, 1.0, colors::DEBUG_OUTLINE));
}

/// Build every vertex for one frame, back to front
pub fn build_scene(state: &GameState, debug_bodies: bool) -> Vec<Vertex> {
    let mut vertices = Vec::new();

    let backdrop = &state.backdrop;
    vertices.extend(rect(
        backdrop.pos,
        backdrop.size / 2.0,
        colors::for_asset(backdrop.asset),
    ));

    for platform in &state.platforms {
        vertices.extend(rect(platform.body.pos, platform.body.half, colors::GROUND));
    }

    for star in state.stars.iter().filter(|s| s.body.visible) {
        vertices.extend(diamond(star.body.pos, star.body.half, colors::STAR));
    }

    for bomb in state.bombs.iter() {
        vertices.extend(circle(bomb.body.pos, bomb.body.half.x, colors::BOMB, 12));
    }

    vertices.extend(player_sprite(&state.player));

    if debug_bodies {
        debug_outline(&state.player.body, &mut vertices);
        for platform in &state.platforms {
            debug_outline(&platform.body, &mut vertices);
        }
        for star in state.stars.iter().filter(|s| s.body.enabled) {
            debug_outline(&star.body, &mut vertices);
        }
        for bomb in state.bombs.iter() {
            debug_outline(&bomb.body, &mut vertices);
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::settings::WorldConfig;
    use crate::sim::collect_star;

    fn new_game() -> GameState {
        GameState::new(8, WorldConfig::default(), &AssetCatalog::builtin()).unwrap()
    }

    #[test]
    fn test_rect_is_two_triangles() {
        let vertices = rect(Vec2::new(10.0, 10.0), Vec2::new(5.0, 2.0), colors::STAR);
        assert_eq!(vertices.len(), 6);
        assert_eq!(vertices[0].position, [5.0, 8.0]);
        assert_eq!(vertices[5].position, [15.0, 12.0]);
    }

    #[test]
    fn test_facing_offset() {
        assert_eq!(facing_offset(2), -1.0);
        assert_eq!(facing_offset(4), 0.0);
        assert_eq!(facing_offset(7), 1.0);
    }

    #[test]
    fn test_collected_star_not_drawn() {
        let mut state = new_game();
        let full = build_scene(&state, false).len();
        collect_star(&mut state, 0);
        assert_eq!(build_scene(&state, false).len(), full - 6);
    }

    #[test]
    fn test_game_over_tint_colors_player() {
        let mut state = new_game();
        state.player.tint = Some(0xff0000);
        let vertices = player_sprite(&state.player);
        assert_eq!(vertices[0].color, [1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_debug_outlines_add_vertices() {
        let state = new_game();
        assert!(build_scene(&state, true).len() > build_scene(&state, false).len());
    }
}
