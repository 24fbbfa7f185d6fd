//=========================================================================
// Asset Cache
//=========================================================================

use std::collections::HashMap;

use log::debug;

//=== Texture =============================================================

/// Decoded image in straight-alpha RGBA8, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl Texture {
    /// Size in pixels as `(width, height)`.
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

//=== Cache ===============================================================

/// Decoded textures by key.
#[derive(Debug, Default)]
pub struct Cache {
    textures: HashMap<String, Texture>,
}

impl Cache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a texture, replacing any previous one under the same key.
    pub fn insert(&mut self, key: impl Into<String>, texture: Texture) {
        let key = key.into();
        if self.textures.insert(key.clone(), texture).is_some() {
            debug!("Texture {:?} replaced in cache", key);
        }
    }

    pub fn texture(&self, key: &str) -> Option<&Texture> {
        self.textures.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.textures.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texture(width: u32, height: u32) -> Texture {
        Texture {
            width,
            height,
            pixels: vec![0; (width * height * 4) as usize],
        }
    }

    #[test]
    fn new_cache_is_empty() {
        let cache = Cache::new();
        assert!(cache.is_empty());
        assert!(!cache.contains("horse"));
        assert!(cache.texture("horse").is_none());
    }

    #[test]
    fn insert_then_lookup() {
        let mut cache = Cache::new();
        cache.insert("horse", texture(4, 2));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.texture("horse").map(Texture::size), Some((4, 2)));
    }

    #[test]
    fn insert_replaces_same_key() {
        let mut cache = Cache::new();
        cache.insert("horse", texture(4, 2));
        cache.insert("horse", texture(8, 8));

        assert_eq!(cache.len(), 1);
        assert_eq!(cache.texture("horse").map(Texture::size), Some((8, 8)));
    }
}
