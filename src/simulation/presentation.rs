//! Opaque presentation tags carried by each body
//!
//! The simulation never reads these; they are set once after load by
//! whatever draws the bodies and handed back through `System::bodies`.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::warn;

/// Handle to a texture owned by the renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureHandle(pub u32);

impl TextureHandle {
    /// No texture was available
    pub const MISSING: TextureHandle = TextureHandle(u32::MAX);

    pub fn is_missing(&self) -> bool {
        *self == Self::MISSING
    }
}

/// RGB path color, components in [0, 1)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color(pub [f32; 3]);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PresentationTags {
    pub color: Color,
    pub texture: TextureHandle,
}

impl Default for PresentationTags {
    fn default() -> Self {
        Self {
            color: Color::default(),
            texture: TextureHandle::MISSING,
        }
    }
}

/// Supplies one tag set per call
pub trait TagSource {
    fn next_tags(&mut self) -> PresentationTags;
}

/// Seeded random colors and textures.
///
/// Colors are redrawn until their components sum to at least 0.5 so paths
/// stay visible on a black background.
#[derive(Debug, Clone)]
pub struct RandomTags {
    rng: ChaCha8Rng,
    textures: Vec<TextureHandle>,
    warned: bool,
}

impl RandomTags {
    pub fn new(seed: u64, textures: Vec<TextureHandle>) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            textures,
            warned: false,
        }
    }

    /// Handles `0..count`, as a renderer that loaded `count` textures would hand out
    pub fn with_texture_count(seed: u64, count: u32) -> Self {
        Self::new(seed, (0..count).map(TextureHandle).collect())
    }

    fn pick_color(&mut self) -> Color {
        let mut c = [0.0f32; 3];
        while c[0] + c[1] + c[2] < 0.5 {
            c = [self.rng.gen(), self.rng.gen(), self.rng.gen()];
        }
        Color(c)
    }

    fn pick_texture(&mut self) -> TextureHandle {
        if self.textures.is_empty() {
            if !self.warned {
                warn!("no textures available, bodies will be untextured");
                self.warned = true;
            }
            return TextureHandle::MISSING;
        }
        let i = self.rng.gen_range(0..self.textures.len());
        self.textures[i]
    }
}

impl TagSource for RandomTags {
    fn next_tags(&mut self) -> PresentationTags {
        let color = self.pick_color();
        let texture = self.pick_texture();
        PresentationTags { color, texture }
    }
}
