//! Axis-aligned arcade bodies
//!
//! A body is a box anchored at its centre:
//! - pos: centre in world space (y grows downward)
//! - half: half extents
//! - vel, bounce, gravity flags for the integrator

use glam::Vec2;

/// Which sides of a body touched another body during the last step
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Touching {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Touching {
    pub fn none(&self) -> bool {
        !(self.up || self.down || self.left || self.right)
    }
}

/// A physics body
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub pos: Vec2,
    pub half: Vec2,
    pub vel: Vec2,
    /// Fraction of velocity kept when reflecting off a surface, per axis
    pub bounce: Vec2,
    /// Whether world gravity (and `gravity`) applies
    pub allow_gravity: bool,
    /// Extra per-body gravity, added to the world's
    pub gravity: Vec2,
    pub collide_world_bounds: bool,
    /// Static bodies never move and are never pushed
    pub immovable: bool,
    /// Disabled bodies take no part in integration or collision
    pub enabled: bool,
    pub visible: bool,
    pub touching: Touching,
}

impl Body {
    /// A moving body of the given size, centred at `pos`
    pub fn dynamic(pos: Vec2, size: Vec2) -> Self {
        Self {
            pos,
            half: size / 2.0,
            vel: Vec2::ZERO,
            bounce: Vec2::ZERO,
            allow_gravity: true,
            gravity: Vec2::ZERO,
            collide_world_bounds: false,
            immovable: false,
            enabled: true,
            visible: true,
            touching: Touching::default(),
        }
    }

    /// An immovable body of the given size, centred at `pos`
    pub fn fixed(pos: Vec2, size: Vec2) -> Self {
        Self {
            allow_gravity: false,
            immovable: true,
            ..Self::dynamic(pos, size)
        }
    }

    /// Scale the body around its centre
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.half *= scale;
        self
    }

    pub fn set_bounce(&mut self, bounce: f32) {
        self.bounce = Vec2::splat(bounce);
    }

    pub fn set_bounce_y(&mut self, bounce: f32) {
        self.bounce.y = bounce;
    }

    pub fn set_velocity(&mut self, x: f32, y: f32) {
        self.vel = Vec2::new(x, y);
    }

    pub fn set_velocity_x(&mut self, x: f32) {
        self.vel.x = x;
    }

    pub fn set_velocity_y(&mut self, y: f32) {
        self.vel.y = y;
    }

    pub fn set_gravity_y(&mut self, y: f32) {
        self.gravity.y = y;
    }

    pub fn set_collide_world_bounds(&mut self, collide: bool) {
        self.collide_world_bounds = collide;
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        self.half * 2.0
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.half.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.half.x
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y - self.half.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.half.y
    }

    /// Strict box intersection (shared edges do not count)
    pub fn intersects(&self, other: &Body) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Penetration depth on each axis (non-positive when apart)
    pub fn overlap(&self, other: &Body) -> Vec2 {
        Vec2::new(
            self.right().min(other.right()) - self.left().max(other.left()),
            self.bottom().min(other.bottom()) - self.top().max(other.top()),
        )
    }

    /// Remove the body from simulation (and rendering when `hide`)
    pub fn disable(&mut self, hide: bool) {
        self.enabled = false;
        if hide {
            self.visible = false;
        }
        self.touching = Touching::default();
    }

    /// Reset to `(x, y)` at rest and put the body back into simulation
    pub fn enable_at(&mut self, x: f32, y: f32) {
        self.pos = Vec2::new(x, y);
        self.vel = Vec2::ZERO;
        self.enabled = true;
        self.visible = true;
        self.touching = Touching::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let body = Body::dynamic(Vec2::new(100.0, 50.0), Vec2::new(32.0, 48.0));
        assert_eq!(body.left(), 84.0);
        assert_eq!(body.right(), 116.0);
        assert_eq!(body.top(), 26.0);
        assert_eq!(body.bottom(), 74.0);
    }

    #[test]
    fn test_scaled_ground_spans_world() {
        let ground = Body::fixed(Vec2::new(400.0, 568.0), Vec2::new(400.0, 32.0)).with_scale(2.0);
        assert_eq!(ground.left(), 0.0);
        assert_eq!(ground.right(), 800.0);
        assert_eq!(ground.top(), 536.0);
        assert!(ground.immovable);
        assert!(!ground.allow_gravity);
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Body::dynamic(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0));
        let b = Body::dynamic(Vec2::new(10.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(!a.intersects(&b));

        let c = Body::dynamic(Vec2::new(9.0, 0.0), Vec2::new(10.0, 10.0));
        assert!(a.intersects(&c));
        assert_eq!(a.overlap(&c), Vec2::new(1.0, 10.0));
    }

    #[test]
    fn test_disable_then_enable_resets() {
        let mut body = Body::dynamic(Vec2::new(12.0, 300.0), Vec2::new(24.0, 22.0));
        body.set_velocity(5.0, 80.0);
        body.touching.down = true;

        body.disable(true);
        assert!(!body.enabled);
        assert!(!body.visible);
        assert!(body.touching.none());

        body.enable_at(12.0, 0.0);
        assert!(body.enabled && body.visible);
        assert_eq!(body.pos, Vec2::new(12.0, 0.0));
        assert_eq!(body.vel, Vec2::ZERO);
    }
}
