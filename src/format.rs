//! Pixel formats and packed pixel values.
//!
//! A [`PixelValue`] is the packed integer a surface actually stores; the
//! [`PixelFormat`] describes the channel layout used to convert between
//! [`Rgba`] and that packed form. Formats with fewer than 8 bits per channel
//! truncate low-order bits on packing (no dithering, no rounding).

use crate::color::Rgba;

/// A packed integer encoding of a color under a specific [`PixelFormat`].
///
/// Always carried as a `u32`; formats narrower than 32 bits occupy the
/// low-order bits.
pub type PixelValue = u32;

/// Channel layout of a packed pixel value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PixelFormat {
    /// 32-bit, alpha in the high byte: `0xAARRGGBB`.
    #[default]
    Argb8888,
    /// 32-bit, red in the high byte: `0xRRGGBBAA`.
    Rgba8888,
    /// 32-bit, alpha in the high byte, blue next: `0xAABBGGRR`.
    Abgr8888,
    /// 16-bit, no alpha: 5 bits red, 6 bits green, 5 bits blue.
    Rgb565,
}

impl PixelFormat {
    /// Pack a color into a pixel value under this format.
    ///
    /// Lossy for formats with fewer than 8 bits per channel; low-order
    /// channel bits are truncated.
    #[must_use]
    pub const fn pack(self, color: Rgba) -> PixelValue {
        let Rgba { r, g, b, a } = color;
        match self {
            Self::Argb8888 => {
                ((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32)
            }
            Self::Rgba8888 => {
                ((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32)
            }
            Self::Abgr8888 => {
                ((a as u32) << 24) | ((b as u32) << 16) | ((g as u32) << 8) | (r as u32)
            }
            Self::Rgb565 => {
                (((r as u32) >> 3) << 11) | (((g as u32) >> 2) << 5) | ((b as u32) >> 3)
            }
        }
    }

    /// Unpack a pixel value into a color under this format.
    ///
    /// For [`PixelFormat::Rgb565`] the truncated low-order bits come back as
    /// zero and alpha is fully opaque.
    #[must_use]
    pub const fn unpack(self, value: PixelValue) -> Rgba {
        match self {
            Self::Argb8888 => Rgba::new(
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
                (value >> 24) as u8,
            ),
            Self::Rgba8888 => Rgba::new(
                (value >> 24) as u8,
                (value >> 16) as u8,
                (value >> 8) as u8,
                value as u8,
            ),
            Self::Abgr8888 => Rgba::new(
                value as u8,
                (value >> 8) as u8,
                (value >> 16) as u8,
                (value >> 24) as u8,
            ),
            Self::Rgb565 => Rgba::new(
                (((value >> 11) & 0x1f) << 3) as u8,
                (((value >> 5) & 0x3f) << 2) as u8,
                ((value & 0x1f) << 3) as u8,
                255,
            ),
        }
    }

    /// Bits per packed pixel.
    #[must_use]
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            Self::Argb8888 | Self::Rgba8888 | Self::Abgr8888 => 32,
            Self::Rgb565 => 16,
        }
    }

    /// Bytes per packed pixel.
    #[must_use]
    pub const fn bytes_per_pixel(self) -> u32 {
        self.bits_per_pixel() / 8
    }

    /// Whether packing then unpacking preserves every 8-bit channel exactly.
    #[must_use]
    pub const fn is_lossless(self) -> bool {
        matches!(self, Self::Argb8888 | Self::Rgba8888 | Self::Abgr8888)
    }
}
