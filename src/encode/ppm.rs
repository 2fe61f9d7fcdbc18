use std::fmt::Write as _;
use std::io::Write;

use crate::foundation::error::{VmError, VmResult};
use crate::render::image::ImageBuffer;

/// Maximum channel value written in the header.
pub const PPM_MAX_VALUE: u8 = 255;

/// Render `img` as ASCII PPM (`P3`).
///
/// Three header lines (`P3`, `width height`, `255`) followed by one line per row holding
/// `width` space-separated `r g b` triples.
pub fn encode_ppm(img: &ImageBuffer) -> String {
    // "255 255 255 " is the widest triple.
    let mut out = String::with_capacity(16 + img.pixels().len() * 12);
    let _ = writeln!(out, "P3\n{} {}\n{}", img.width(), img.height(), PPM_MAX_VALUE);
    for row in img.rows() {
        for (i, c) in row.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{} {} {}", c.r, c.g, c.b);
        }
        out.push('\n');
    }
    out
}

/// Stream `img` as ASCII PPM into `w`.
pub fn write_ppm<W: Write>(img: &ImageBuffer, mut w: W) -> VmResult<()> {
    w.write_all(encode_ppm(img).as_bytes())
        .and_then(|()| w.flush())
        .map_err(|e| VmError::emit(format!("write ppm: {e}")))
}
