/// RGBA pixels and the packed texture buffer handed to image consumers

use bytemuck::{Pod, Zeroable};

/// A straight-alpha RGBA color
///
/// Field order is the byte order: `repr(C)` keeps r, g, b, a contiguous with no
/// padding so a pixel slice can be viewed directly as raw bitmap bytes.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    /// Marker for pixels outside the planet disc
    pub const TRANSPARENT: Pixel = Pixel::rgba(0, 0, 0, 0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel { r, g, b, a }
    }

    /// Fully opaque color
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Pixel::rgba(r, g, b, 255)
    }

    pub fn is_transparent(&self) -> bool {
        *self == Pixel::TRANSPARENT
    }

    pub fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Pack pixels into a contiguous byte stream of r, g, b, a quadruples
///
/// No padding and no row alignment: the result is exactly `4 * pixels.len()`
/// bytes long.
pub fn encode(pixels: &[Pixel]) -> Vec<u8> {
    bytemuck::cast_slice(pixels).to_vec()
}

/// A square texture, row-major with x varying fastest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextureBuffer {
    side: u32,
    pixels: Vec<Pixel>,
}

impl TextureBuffer {
    /// Wrap a fully populated pixel grid
    ///
    /// Only the generator builds textures, and it always fills `side * side` pixels.
    pub(crate) fn from_pixels(side: u32, pixels: Vec<Pixel>) -> Self {
        debug_assert_eq!(pixels.len(), side as usize * side as usize);
        TextureBuffer { side, pixels }
    }

    pub fn side(&self) -> u32 {
        self.side
    }

    pub fn pixels(&self) -> &[Pixel] {
        &self.pixels
    }

    /// Get the pixel at `(x, y)`, or `None` outside the texture
    pub fn pixel(&self, x: u32, y: u32) -> Option<Pixel> {
        if x >= self.side || y >= self.side {
            return None;
        }
        self.pixels
            .get(y as usize * self.side as usize + x as usize)
            .copied()
    }

    /// Borrow the pixel data as raw bytes without copying
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.pixels)
    }

    /// Copy the pixel data out as an owned byte buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        encode(&self.pixels)
    }

    /// Number of pixels inside the planet disc
    pub fn opaque_count(&self) -> usize {
        self.pixels.iter().filter(|p| !p.is_transparent()).count()
    }
}
