//=========================================================================
// World
//=========================================================================
//
// Sprite storage and the per-tick physics step.
//
// The world owns every sprite created by the running state. It is cleared
// when the state manager switches states.
//
//=========================================================================

//=== External Dependencies ===============================================

use glam::Vec2;
use log::debug;

//=== Module Declarations =================================================

mod body;
mod sprite;

//=== Public API ==========================================================

pub use body::{Blocked, Body, DEFAULT_MAX_VELOCITY};
pub use sprite::{Sprite, SpriteId};

//=== Rect ================================================================

/// Axis-aligned rectangle, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }
}

//=== World ===============================================================

pub struct World {
    bounds: Rect,
    sprites: Vec<Sprite>,
    next_id: u32,
}

impl World {
    /// Creates an empty world whose bounds match the viewport.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            bounds: Rect::new(0.0, 0.0, width as f32, height as f32),
            sprites: Vec::new(),
            next_id: 0,
        }
    }

    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Adds a sprite with a default body and returns its handle.
    pub fn add_sprite(&mut self, key: impl Into<String>, position: Vec2, size: Vec2) -> SpriteId {
        let id = SpriteId(self.next_id);
        self.next_id += 1;

        let key = key.into();
        debug!("Added {} {:?} at ({}, {})", id, key, position.x, position.y);

        self.sprites.push(Sprite {
            id,
            key,
            position,
            size,
            body: Body::new(),
        });
        id
    }

    pub fn sprite(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    pub fn sprite_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.iter_mut().find(|s| s.id == id)
    }

    /// Sprites in creation order.
    pub fn sprites(&self) -> &[Sprite] {
        &self.sprites
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }

    /// Removes every sprite. Ids keep counting up.
    pub fn clear(&mut self) {
        if !self.sprites.is_empty() {
            debug!("Clearing {} sprites from world", self.sprites.len());
        }
        self.sprites.clear();
    }

    /// Integrates every body by `dt` seconds.
    pub fn step(&mut self, dt: f32) {
        let bounds = self.bounds;
        for sprite in &mut self.sprites {
            let size = sprite.size;
            sprite.body.step(&mut sprite.position, size, dt, &bounds);
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_match_viewport() {
        let world = World::new(400, 490);
        let bounds = world.bounds();
        assert_eq!(bounds, Rect::new(0.0, 0.0, 400.0, 490.0));
        assert_eq!(bounds.right(), 400.0);
        assert_eq!(bounds.bottom(), 490.0);
    }

    #[test]
    fn add_and_lookup() {
        let mut world = World::new(400, 490);
        let id = world.add_sprite("horse", Vec2::new(20.0, 20.0), Vec2::new(32.0, 28.0));

        let sprite = world.sprite(id).unwrap();
        assert_eq!(sprite.key, "horse");
        assert_eq!((sprite.x(), sprite.y()), (20.0, 20.0));
        assert_eq!(sprite.body, Body::new());
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn ids_are_not_reused_after_clear() {
        let mut world = World::new(400, 490);
        let first = world.add_sprite("a", Vec2::ZERO, Vec2::ONE);
        world.clear();
        let second = world.add_sprite("b", Vec2::ZERO, Vec2::ONE);

        assert_ne!(first, second);
        assert!(world.sprite(first).is_none());
        assert_eq!(world.len(), 1);
    }

    #[test]
    fn step_moves_only_bodies_with_gravity() {
        let mut world = World::new(400, 490);
        let still = world.add_sprite("still", Vec2::new(10.0, 10.0), Vec2::ONE);
        let falling = world.add_sprite("falling", Vec2::new(20.0, 20.0), Vec2::ONE);
        world.sprite_mut(falling).unwrap().body.gravity.y = 1000.0;

        world.step(1.0 / 60.0);

        assert_eq!(world.sprite(still).unwrap().position, Vec2::new(10.0, 10.0));
        assert!(world.sprite(falling).unwrap().y() > 20.0);
    }

    #[test]
    fn step_uses_world_bounds() {
        let mut world = World::new(100, 100);
        let id = world.add_sprite("box", Vec2::new(0.0, 95.0), Vec2::new(10.0, 10.0));
        world.sprite_mut(id).unwrap().body.collide_world_bounds = true;

        world.step(1.0 / 60.0);

        let sprite = world.sprite(id).unwrap();
        assert_eq!(sprite.y(), 90.0);
        assert!(sprite.body.blocked.down);
    }
}
