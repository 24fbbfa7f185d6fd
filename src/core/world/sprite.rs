//=========================================================================
// Sprite
//=========================================================================

use std::fmt;

use glam::Vec2;

use super::Body;

/// Stable handle to a sprite in the [`super::World`].
///
/// Ids are never reused, so a handle from a cleared world will not alias a
/// newer sprite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SpriteId(pub(crate) u32);

impl fmt::Display for SpriteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "sprite#{}", self.0)
    }
}

/// Textured rectangle anchored at its top-left corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    pub id: SpriteId,
    /// Cache key of the texture this sprite draws.
    pub key: String,
    pub position: Vec2,
    pub size: Vec2,
    pub body: Body,
}

impl Sprite {
    pub fn x(&self) -> f32 {
        self.position.x
    }

    pub fn y(&self) -> f32 {
        self.position.y
    }
}
