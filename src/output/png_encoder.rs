//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate. The surface is unpacked
//! to RGBA8 before encoding, so any pixel format encodes the same way.

use crate::canvas::Drawable;
use crate::error::Result;
use crate::surface::Surface;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// PNG encoder for surface output.
pub struct PngEncoder;

impl PngEncoder {
    /// Write a surface to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(surface: &Surface, path: P) -> Result<()> {
        let file = File::create(path)?;
        let writer = BufWriter::new(file);

        let mut encoder = png::Encoder::new(writer, surface.width(), surface.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        writer.write_image_data(&surface.to_rgba_bytes())?;

        Ok(())
    }

    /// Encode a surface to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(surface: &Surface) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();

        {
            let mut encoder = png::Encoder::new(&mut buffer, surface.width(), surface.height());
            encoder.set_color(png::ColorType::Rgba);
            encoder.set_depth(png::BitDepth::Eight);

            let mut writer = encoder.write_header()?;
            writer.write_image_data(&surface.to_rgba_bytes())?;
        }

        Ok(buffer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::Canvas;
    use crate::color::Rgba;
    use crate::format::PixelFormat;

    #[test]
    fn test_png_to_bytes() {
        let mut s = Surface::new(10, 10, PixelFormat::Argb8888).unwrap();
        s.set_draw_color(Rgba::RED);
        s.clear();

        let bytes = PngEncoder::to_bytes(&s).unwrap();
        // PNG magic bytes
        assert_eq!(&bytes[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    }

    #[test]
    fn test_png_write_to_file() {
        let mut s = Surface::new(4, 4, PixelFormat::Rgb565).unwrap();
        s.set_draw_color(Rgba::BLUE);
        s.clear();

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        PngEncoder::write_to_file(&s, &path).unwrap();
        assert!(path.metadata().unwrap().len() > 8);
    }
}
