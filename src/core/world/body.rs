//=========================================================================
// Arcade Body
//=========================================================================
//
// Axis-aligned physics body attached to every sprite.
//
// Integration per tick (semi-implicit Euler, y grows downward):
//   velocity += gravity * dt        (clamped to ±max_velocity)
//   position += velocity * dt
//   if collide_world_bounds: clamp rect into bounds, reflect by bounce
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;

//=== Internal Dependencies ===============================================

use super::Rect;

//=== Blocked =============================================================

/// Sides that touched the world bounds during the last step.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Blocked {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl Blocked {
    pub fn any(&self) -> bool {
        self.up || self.down || self.left || self.right
    }
}

//=== Body ================================================================

/// Default per-axis speed cap, in units per second.
pub const DEFAULT_MAX_VELOCITY: f32 = 10_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    pub velocity: Vec2,

    /// Constant acceleration in units/s². Positive `y` pulls down.
    pub gravity: Vec2,

    /// Fraction of velocity kept (and reversed) when hitting the bounds.
    pub bounce: Vec2,

    pub max_velocity: Vec2,

    /// Keep the body inside the world rectangle.
    pub collide_world_bounds: bool,

    pub blocked: Blocked,
}

impl Default for Body {
    fn default() -> Self {
        Self {
            velocity: Vec2::ZERO,
            gravity: Vec2::ZERO,
            bounce: Vec2::ZERO,
            max_velocity: Vec2::splat(DEFAULT_MAX_VELOCITY),
            collide_world_bounds: false,
            blocked: Blocked::default(),
        }
    }
}

impl Body {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advances the body by `dt` seconds, moving `position` (top-left of a
    /// rectangle of `size`).
    pub fn step(&mut self, position: &mut Vec2, size: Vec2, dt: f32, bounds: &Rect) {
        self.blocked = Blocked::default();

        self.velocity += self.gravity * dt;
        self.velocity = self.velocity.clamp(-self.max_velocity, self.max_velocity);

        *position += self.velocity * dt;

        if self.collide_world_bounds {
            self.clamp_to(position, size, bounds);
        }
    }

    fn clamp_to(&mut self, position: &mut Vec2, size: Vec2, bounds: &Rect) {
        if position.x < bounds.x {
            position.x = bounds.x;
            self.velocity.x *= -self.bounce.x;
            self.blocked.left = true;
        } else if position.x + size.x > bounds.right() {
            position.x = bounds.right() - size.x;
            self.velocity.x *= -self.bounce.x;
            self.blocked.right = true;
        }

        if position.y < bounds.y {
            position.y = bounds.y;
            self.velocity.y *= -self.bounce.y;
            self.blocked.up = true;
        } else if position.y + size.y > bounds.bottom() {
            position.y = bounds.bottom() - size.y;
            self.velocity.y *= -self.bounce.y;
            self.blocked.down = true;
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
