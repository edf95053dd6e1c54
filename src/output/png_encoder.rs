//! PNG output encoder.
//!
//! Pure Rust PNG encoding using the `png` crate.

use crate::error::Result;
use crate::framebuffer::Framebuffer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// PNG encoder for framebuffer output.
pub struct PngEncoder;

impl PngEncoder {
    /// Encode a framebuffer as 8-bit RGBA PNG into any writer.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding or the underlying write fails.
    pub fn encode<W: Write>(fb: &Framebuffer, writer: W) -> Result<()> {
        let mut encoder = png::Encoder::new(writer, fb.width(), fb.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);

        let mut writer = encoder.write_header()?;
        // Use compact pixels to handle stride padding
        writer.write_image_data(&fb.to_compact_pixels())?;
        writer.finish()?;

        Ok(())
    }

    /// Write a framebuffer to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn write_to_file<P: AsRef<Path>>(fb: &Framebuffer, path: P) -> Result<()> {
        let path = path.as_ref();
        crate::time_scope!(Output, "write png");
        let file = File::create(path)?;
        Self::encode(fb, BufWriter::new(file))?;
        crate::raster_info!(Output, "wrote {}x{} PNG to {}", fb.width(), fb.height(), path.display());
        if crate::debug::enabled_for(crate::debug::Level::Debug) {
            let (min, max, mean) = fb.luminance_stats();
            crate::raster_debug!(
                Output,
                "luminance min={min:.1} max={max:.1} mean={mean:.1} ({:?})",
                Framebuffer::backend()
            );
        }
        Ok(())
    }

    /// Encode a framebuffer to PNG bytes.
    ///
    /// # Errors
    ///
    /// Returns an error if PNG encoding fails.
    pub fn to_bytes(fb: &Framebuffer) -> Result<Vec<u8>> {
        let mut buffer = Vec::new();
        Self::encode(fb, &mut buffer)?;
        Ok(buffer)
    }
}
