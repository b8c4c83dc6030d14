//! Software surface: an owned pixel buffer implementing the canvas traits.
//!
//! `Surface` is the concrete backing store the canvas layer is usually
//! parameterized over in practice: a row-major grid of packed pixel values
//! plus one scalar of draw-color state. Each cell occupies a full `u32`
//! regardless of format; narrower formats use the low-order bits.

use crate::canvas::{Canvas, Drawable};
use crate::error::{Error, Result};
use crate::format::{PixelFormat, PixelValue};

/// An owned, row-major pixel buffer with a fixed format.
///
/// # Bounds
///
/// `pixel` and `set_pixel` index the buffer directly and panic on
/// out-of-range coordinates. The canvas layer deliberately performs no
/// clipping, so callers drawing near the edges own that contract.
#[derive(Debug, Clone)]
pub struct Surface {
    /// Width in pixels.
    width: u32,
    /// Height in pixels.
    height: u32,
    /// Channel layout of each packed cell.
    format: PixelFormat,
    /// Packed pixel values, row-major, one `u32` cell per pixel.
    pixels: Vec<u32>,
    /// Current draw color as a packed value.
    draw_color: PixelValue,
}

impl Surface {
    /// Create a surface with every cell zeroed.
    ///
    /// The draw color starts as the format's packed opaque black.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if width or height is zero.
    ///
    /// # Example
    ///
    /// ```
    /// use pincel::format::PixelFormat;
    /// use pincel::surface::Surface;
    ///
    /// let s = Surface::new(800, 600, PixelFormat::Argb8888).unwrap();
    /// assert_eq!(s.pitch(), 3200);
    /// ```
    pub fn new(width: u32, height: u32, format: PixelFormat) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }

        let size = (width as usize) * (height as usize);
        let draw_color = format.pack(crate::color::Rgba::BLACK);

        Ok(Self {
            width,
            height,
            format,
            pixels: vec![0; size],
            draw_color,
        })
    }

    /// Row stride in bytes.
    ///
    /// Cells are stored one `u32` per pixel with no row padding, so this
    /// is always `width * 4` regardless of the format's nominal depth.
    #[must_use]
    pub const fn pitch(&self) -> usize {
        (self.width as usize) * 4
    }

    /// Total number of pixels.
    #[must_use]
    pub const fn pixel_count(&self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    /// Raw packed cells, row-major.
    #[must_use]
    pub fn pixels(&self) -> &[u32] {
        &self.pixels
    }

    /// Raw packed cells, mutable.
    pub fn pixels_mut(&mut self) -> &mut [u32] {
        &mut self.pixels
    }

    /// Unpack the whole surface to tightly-packed RGBA8 bytes.
    ///
    /// Useful for encoders that expect 8-bit-per-channel data, whatever
    /// the surface's own format.
    #[must_use]
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixel_count() * 4);
        for &value in &self.pixels {
            bytes.extend_from_slice(&self.format.unpack(value).to_array());
        }
        bytes
    }

    #[inline]
    fn index(&self, x: i32, y: i32) -> usize {
        debug_assert!(
            x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height,
            "pixel ({x}, {y}) outside {}x{} surface",
            self.width,
            self.height
        );
        (y as usize) * (self.width as usize) + (x as usize)
    }
}

impl Drawable for Surface {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn format(&self) -> PixelFormat {
        self.format
    }

    fn pixel(&self, x: i32, y: i32) -> PixelValue {
        self.pixels[self.index(x, y)]
    }

    fn set_pixel(&mut self, x: i32, y: i32, value: PixelValue) {
        let idx = self.index(x, y);
        self.pixels[idx] = value;
    }
}

impl Canvas for Surface {
    fn draw_color(&self) -> PixelValue {
        self.draw_color
    }

    fn set_draw_color_value(&mut self, value: PixelValue) {
        self.draw_color = value;
    }
}
