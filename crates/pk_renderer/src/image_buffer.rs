use crate::color::{convert_to_rgba, Rgba8};
use pk_math::Vector4;

/// Resolved frame: one RGBA color in [0, 1] per pixel, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Vector4>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with transparent black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Vector4::ZERO; width as usize * height as usize],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        x as usize + y as usize * self.width as usize
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Vector4 {
        self.pixels[self.index(x, y)]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Vector4) {
        let index = self.index(x, y);
        self.pixels[index] = color;
    }

    /// Convert every pixel to 8-bit RGBA.
    pub fn to_rgba8(&self) -> Vec<Rgba8> {
        self.pixels.iter().copied().map(convert_to_rgba).collect()
    }

    /// Convert to packed RGBA bytes (for display or saving).
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_rgba8()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut image = ImageBuffer::new(3, 2);
        assert_eq!(image.pixels.len(), 6);

        image.set(2, 1, Vector4::ONE);
        assert_eq!(image.get(2, 1), Vector4::ONE);
        assert_eq!(image.pixels[5], Vector4::ONE);
        assert_eq!(image.get(0, 0), Vector4::ZERO);
    }

    #[test]
    fn test_to_rgba_bytes() {
        let mut image = ImageBuffer::new(2, 1);
        image.set(1, 0, Vector4::new(1.0, 0.0, 1.0, 1.0));

        let bytes = image.to_rgba_bytes();
        assert_eq!(bytes, vec![0, 0, 0, 0, 255, 0, 255, 255]);
    }
}
