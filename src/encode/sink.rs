use std::ffi::OsString;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::encode::png::write_png;
use crate::encode::ppm::write_ppm;
use crate::foundation::error::{VmError, VmResult};
use crate::render::image::ImageBuffer;

/// Output encodings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// ASCII portable pixmap (`P3`).
    Ppm,
    /// PNG, RGB8.
    Png,
}

impl ImageFormat {
    /// Pick a format from a file extension; anything but `.png` maps to PPM.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("png") => Self::Png,
            _ => Self::Ppm,
        }
    }
}

/// Consumer of finished images.
pub trait ImageSink {
    /// Emit one image. Errors are [`VmError::Emit`].
    fn emit(&mut self, img: &ImageBuffer) -> VmResult<()>;
}

/// PPM writer over any byte stream.
#[derive(Debug)]
pub struct PpmSink<W: Write> {
    out: W,
}

impl<W: Write> PpmSink<W> {
    /// Wrap a writer.
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Recover the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> ImageSink for PpmSink<W> {
    fn emit(&mut self, img: &ImageBuffer) -> VmResult<()> {
        write_ppm(img, &mut self.out)
    }
}

/// Sibling of `path` that output is staged in before it replaces `path`.
fn staging_path(path: &Path) -> VmResult<PathBuf> {
    let name = path
        .file_name()
        .ok_or_else(|| VmError::emit(format!("output '{}' has no file name", path.display())))?;
    let mut staged = OsString::from(".");
    staged.push(name);
    staged.push(".partial");
    Ok(path.with_file_name(staged))
}

/// Run `write` against a staging file and rename it over `path` on success.
///
/// On any failure the staging file is removed and `path` is left as it was.
fn replace_file(path: &Path, write: impl FnOnce(&Path) -> VmResult<()>) -> VmResult<()> {
    let staged = staging_path(path)?;
    let result = write(&staged).and_then(|()| {
        std::fs::rename(&staged, path).map_err(|e| {
            VmError::emit(format!("move output into '{}': {e}", path.display()))
        })
    });
    if result.is_err() {
        let _ = std::fs::remove_file(&staged);
    }
    result
}

/// PPM file writer. Each emit replaces the file as a whole.
#[derive(Debug, Clone)]
pub struct PpmFileSink {
    path: PathBuf,
}

impl PpmFileSink {
    /// Target `path`; the file is written on [`ImageSink::emit`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for PpmFileSink {
    fn emit(&mut self, img: &ImageBuffer) -> VmResult<()> {
        replace_file(&self.path, |staged| {
            let f = File::create(staged).map_err(|e| {
                VmError::emit(format!("open output '{}': {e}", staged.display()))
            })?;
            let mut out = BufWriter::new(f);
            write_ppm(img, &mut out)?;
            out.flush()
                .map_err(|e| VmError::emit(format!("flush '{}': {e}", staged.display())))
        })
    }
}

/// PNG file writer. Each emit replaces the file as a whole.
#[derive(Debug, Clone)]
pub struct PngSink {
    path: PathBuf,
}

impl PngSink {
    /// Target `path`; the file is written on [`ImageSink::emit`].
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ImageSink for PngSink {
    fn emit(&mut self, img: &ImageBuffer) -> VmResult<()> {
        replace_file(&self.path, |staged| write_png(img, staged))
    }
}

/// In-memory sink for tests and debugging.
#[derive(Debug, Default)]
pub struct InMemorySink {
    images: Vec<ImageBuffer>,
}

impl InMemorySink {
    /// Create an empty sink.
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured images in emit order.
    pub fn images(&self) -> &[ImageBuffer] {
        &self.images
    }
}

impl ImageSink for InMemorySink {
    fn emit(&mut self, img: &ImageBuffer) -> VmResult<()> {
        self.images.push(img.clone());
        Ok(())
    }
}

/// Open a file sink for `path` in `format`.
///
/// Nothing touches the filesystem until the first emit.
pub fn file_sink(path: &Path, format: ImageFormat) -> VmResult<Box<dyn ImageSink>> {
    staging_path(path)?;
    Ok(match format {
        ImageFormat::Ppm => Box::new(PpmFileSink::new(path)),
        ImageFormat::Png => Box::new(PngSink::new(path)),
    })
}
