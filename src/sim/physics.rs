//! Arcade physics: gravity, integration, world bounds and box separation
//!
//! Everything is axis-aligned. Separation always resolves along the axis of
//! least penetration and reflects the velocity on that axis by the body's bounce.

use glam::Vec2;

use super::body::{Body, Touching};

/// Apply gravity and advance position by one step.
///
/// Clears touching flags first so they only describe contacts from this step.
pub fn integrate(body: &mut Body, world_gravity: Vec2, dt: f32) {
    if !body.enabled || body.immovable {
        return;
    }
    body.touching = Touching::default();

    if body.allow_gravity {
        body.vel += (world_gravity + body.gravity) * dt;
    }
    body.pos += body.vel * dt;
}

/// Keep a body inside `[0, bounds]`, reflecting velocity off the edge.
///
/// Returns true if the body hit an edge.
pub fn constrain_to_bounds(body: &mut Body, bounds: Vec2) -> bool {
    if !body.enabled || !body.collide_world_bounds {
        return false;
    }

    let mut hit = false;

    if body.left() < 0.0 {
        body.pos.x = body.half.x;
        body.vel.x = -body.vel.x * body.bounce.x;
        hit = true;
    } else if body.right() > bounds.x {
        body.pos.x = bounds.x - body.half.x;
        body.vel.x = -body.vel.x * body.bounce.x;
        hit = true;
    }

    if body.top() < 0.0 {
        body.pos.y = body.half.y;
        body.vel.y = -body.vel.y * body.bounce.y;
        hit = true;
    } else if body.bottom() > bounds.y {
        body.pos.y = bounds.y - body.half.y;
        body.vel.y = -body.vel.y * body.bounce.y;
        hit = true;
    }

    hit
}

/// Check whether two enabled bodies overlap (no response)
pub fn overlaps(a: &Body, b: &Body) -> bool {
    a.enabled && b.enabled && a.intersects(b)
}

/// Push a moving body out of an immovable one.
///
/// Returns true if they were in contact.
pub fn separate_from_static(body: &mut Body, wall: &Body) -> bool {
    if !overlaps(body, wall) {
        return false;
    }
    let overlap = body.overlap(wall);

    if overlap.y <= overlap.x {
        if body.pos.y < wall.pos.y {
            // Landed on top
            body.pos.y -= overlap.y;
            body.touching.down = true;
            if body.vel.y > 0.0 {
                body.vel.y = -body.vel.y * body.bounce.y;
            }
        } else {
            body.pos.y += overlap.y;
            body.touching.up = true;
            if body.vel.y < 0.0 {
                body.vel.y = -body.vel.y * body.bounce.y;
            }
        }
    } else if body.pos.x < wall.pos.x {
        body.pos.x -= overlap.x;
        body.touching.right = true;
        if body.vel.x > 0.0 {
            body.vel.x = -body.vel.x * body.bounce.x;
        }
    } else {
        body.pos.x += overlap.x;
        body.touching.left = true;
        if body.vel.x < 0.0 {
            body.vel.x = -body.vel.x * body.bounce.x;
        }
    }

    true
}

/// Separate two moving bodies, splitting the overlap evenly.
///
/// Normal velocities are exchanged, each scaled by the receiving body's bounce.
/// Returns true if they were in contact.
pub fn separate_dynamic(a: &mut Body, b: &mut Body) -> bool {
    if !overlaps(a, b) {
        return false;
    }
    let overlap = a.overlap(b);

    if overlap.y <= overlap.x {
        let shift = overlap.y / 2.0;
        let (va, vb) = (a.vel.y, b.vel.y);
        if a.pos.y < b.pos.y {
            a.pos.y -= shift;
            b.pos.y += shift;
            a.touching.down = true;
            b.touching.up = true;
        } else {
            a.pos.y += shift;
            b.pos.y -= shift;
            a.touching.up = true;
            b.touching.down = true;
        }
        a.vel.y = vb * a.bounce.y;
        b.vel.y = va * b.bounce.y;
    } else {
        let shift = overlap.x / 2.0;
        let (va, vb) = (a.vel.x, b.vel.x);
        if a.pos.x < b.pos.x {
            a.pos.x -= shift;
            b.pos.x += shift;
            a.touching.right = true;
            b.touching.left = true;
        } else {
            a.pos.x += shift;
            b.pos.x -= shift;
            a.touching.left = true;
            b.touching.right = true;
        }
        a.vel.x = vb * a.bounce.x;
        b.vel.x = va * b.bounce.x;
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::SIM_DT;

    fn ground() -> Body {
        Body::fixed(Vec2::new(400.0, 568.0), Vec2::new(400.0, 32.0)).with_scale(2.0)
    }

    #[test]
    fn test_gravity_accelerates_downward() {
        let mut body = Body::dynamic(Vec2::new(100.0, 100.0), Vec2::new(10.0, 10.0));
        body.set_gravity_y(300.0);
        integrate(&mut body, Vec2::new(0.0, 300.0), SIM_DT);
        assert!((body.vel.y - 10.0).abs() < 0.001);
        assert!(body.pos.y > 100.0);
    }

    #[test]
    fn test_no_gravity_keeps_velocity() {
        let mut body = Body::dynamic(Vec2::new(100.0, 100.0), Vec2::new(14.0, 14.0));
        body.allow_gravity = false;
        body.set_velocity(120.0, 20.0);
        integrate(&mut body, Vec2::new(0.0, 300.0), SIM_DT);
        assert_eq!(body.vel, Vec2::new(120.0, 20.0));
        assert!((body.pos.x - 102.0).abs() < 0.001);
    }

    #[test]
    fn test_static_and_disabled_bodies_do_not_move() {
        let mut wall = ground();
        integrate(&mut wall, Vec2::new(0.0, 300.0), SIM_DT);
        assert_eq!(wall.pos, Vec2::new(400.0, 568.0));

        let mut star = Body::dynamic(Vec2::new(12.0, 0.0), Vec2::new(24.0, 22.0));
        star.disable(true);
        integrate(&mut star, Vec2::new(0.0, 300.0), SIM_DT);
        assert_eq!(star.pos, Vec2::new(12.0, 0.0));
    }

    #[test]
    fn test_world_bounds_elastic_bounce() {
        let mut bomb = Body::dynamic(Vec2::new(795.0, 300.0), Vec2::new(14.0, 14.0));
        bomb.set_bounce(1.0);
        bomb.set_collide_world_bounds(true);
        bomb.set_velocity(150.0, 20.0);

        assert!(constrain_to_bounds(&mut bomb, Vec2::new(800.0, 600.0)));
        assert_eq!(bomb.right(), 800.0);
        assert_eq!(bomb.vel.x, -150.0);
        assert_eq!(bomb.vel.y, 20.0);
    }

    #[test]
    fn test_world_bounds_ignored_when_disabled() {
        let mut body = Body::dynamic(Vec2::new(-50.0, 300.0), Vec2::new(10.0, 10.0));
        assert!(!constrain_to_bounds(&mut body, Vec2::new(800.0, 600.0)));
        assert_eq!(body.pos.x, -50.0);
    }

    #[test]
    fn test_landing_sets_touching_down() {
        let wall = ground();
        // Feet 2px into the ground, falling
        let mut player = Body::dynamic(Vec2::new(100.0, 514.0), Vec2::new(32.0, 48.0));
        player.set_bounce(0.2);
        player.set_velocity(0.0, 100.0);

        assert!(separate_from_static(&mut player, &wall));
        assert_eq!(player.bottom(), wall.top());
        assert!(player.touching.down);
        assert!((player.vel.y - (-20.0)).abs() < 0.001);
    }

    #[test]
    fn test_side_hit_stops_horizontal() {
        let ledge = Body::fixed(Vec2::new(600.0, 400.0), Vec2::new(400.0, 32.0));
        // Running right into the ledge's left face
        let mut player = Body::dynamic(Vec2::new(386.0, 400.0), Vec2::new(32.0, 48.0));
        player.set_velocity(160.0, 0.0);

        assert!(separate_from_static(&mut player, &ledge));
        assert_eq!(player.right(), ledge.left());
        assert!(player.touching.right);
        assert!(!player.touching.down);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_resting_body_stays_grounded() {
        let wall = ground();
        let mut player = Body::dynamic(Vec2::new(100.0, 512.0), Vec2::new(32.0, 48.0));
        player.set_bounce(0.2);
        player.set_gravity_y(300.0);

        for _ in 0..120 {
            integrate(&mut player, Vec2::new(0.0, 300.0), SIM_DT);
            separate_from_static(&mut player, &wall);
            assert!(player.touching.down);
            assert!(player.bottom() <= wall.top() + 0.001);
        }
    }

    #[test]
    fn test_dynamic_separation_exchanges_velocity() {
        let mut a = Body::dynamic(Vec2::new(100.0, 100.0), Vec2::new(20.0, 20.0));
        let mut b = Body::dynamic(Vec2::new(118.0, 100.0), Vec2::new(20.0, 20.0));
        a.set_bounce(1.0);
        b.set_bounce(1.0);
        a.set_velocity(50.0, 0.0);
        b.set_velocity(-30.0, 0.0);

        assert!(separate_dynamic(&mut a, &mut b));
        assert_eq!(a.vel.x, -30.0);
        assert_eq!(b.vel.x, 50.0);
        assert!(!a.intersects(&b));
        assert!(a.touching.right && b.touching.left);
    }

    #[test]
    fn test_overlap_requires_enabled() {
        let a = Body::dynamic(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let mut b = Body::dynamic(Vec2::new(5.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(overlaps(&a, &b));
        b.disable(true);
        assert!(!overlaps(&a, &b));
    }
}
