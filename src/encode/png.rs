use std::path::Path;

use crate::foundation::error::{VmError, VmResult};
use crate::render::image::ImageBuffer;

/// Write `img` as an 8-bit RGB PNG. Pixel values are identical to the PPM output.
pub fn write_png(img: &ImageBuffer, path: &Path) -> VmResult<()> {
    image::save_buffer_with_format(
        path,
        &img.to_rgb8(),
        img.width(),
        img.height(),
        image::ColorType::Rgb8,
        image::ImageFormat::Png,
    )
    .map_err(|e| VmError::emit(format!("write png '{}': {e}", path.display())))
}

/// Convert to an `image` crate buffer.
pub fn to_rgb_image(img: &ImageBuffer) -> VmResult<image::RgbImage> {
    image::RgbImage::from_raw(img.width(), img.height(), img.to_rgb8())
        .ok_or_else(|| VmError::emit("pixel buffer size does not match dimensions"))
}
