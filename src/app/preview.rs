// RetinaLens - app/preview.rs
//
// Local preview of the selected image, shown immediately on selection and
// independent of the network outcome.
//
// The decoded pixels are held until the first frame that draws them, at
// which point they are uploaded as an egui texture. Dropping a
// `PreviewImage` (on replacement or Clear) drops its `TextureHandle`,
// which releases the GPU texture.

use crate::util::error::PreviewError;

/// Decoded preview of the currently selected image.
pub struct PreviewImage {
    filename: String,
    size: [usize; 2],
    /// Pixels pending texture upload; taken on first draw.
    pixels: Option<egui::ColorImage>,
    texture: Option<egui::TextureHandle>,
}

impl std::fmt::Debug for PreviewImage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreviewImage")
            .field("filename", &self.filename)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}

impl PreviewImage {
    /// Decode the selected file's bytes into preview pixels.
    ///
    /// Accepts whatever the `image` crate can decode of the formats the
    /// upload surface admits (PNG, JPEG).
    pub fn from_bytes(filename: &str, bytes: &[u8]) -> Result<Self, PreviewError> {
        let decoded = image::load_from_memory(bytes).map_err(|source| PreviewError::Decode {
            filename: filename.to_string(),
            source,
        })?;

        let size = [decoded.width() as usize, decoded.height() as usize];
        let rgba = decoded.to_rgba8();
        let pixels = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_flat_samples().as_slice());

        Ok(Self {
            filename: filename.to_string(),
            size,
            pixels: Some(pixels),
            texture: None,
        })
    }

    /// Name of the previewed file.
    pub fn filename(&self) -> &str {
        &self.filename
    }

    /// Pixel dimensions of the decoded image.
    pub fn size(&self) -> [usize; 2] {
        self.size
    }

    /// The preview texture, uploading the pixels on first use.
    ///
    /// Returns `None` only in the (unreachable in practice) case where the
    /// pixels were consumed without a texture being created.
    pub fn texture(&mut self, ctx: &egui::Context) -> Option<&egui::TextureHandle> {
        if self.texture.is_none() {
            if let Some(pixels) = self.pixels.take() {
                self.texture = Some(ctx.load_texture(
                    self.filename.clone(),
                    pixels,
                    egui::TextureOptions::LINEAR,
                ));
            }
        }
        self.texture.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = image::RgbaImage::from_pixel(width, height, image::Rgba([120, 20, 20, 255]));
        let mut bytes = Vec::new();
        img.write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
        bytes
    }

    #[test]
    fn decodes_png_bytes_into_a_preview() {
        let preview = PreviewImage::from_bytes("fundus.png", &png_bytes(4, 3)).unwrap();
        assert_eq!(preview.filename(), "fundus.png");
        assert_eq!(preview.size(), [4, 3]);
    }

    #[test]
    fn garbage_bytes_produce_a_decode_error() {
        let err = PreviewImage::from_bytes("broken.jpg", b"definitely not an image").unwrap_err();
        assert!(err.to_string().contains("broken.jpg"));
    }
}
