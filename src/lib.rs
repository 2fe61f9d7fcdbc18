//! shapevm is a small script-driven 2D scene-graph interpreter and rasterizer.
//!
//! A line-oriented script declares circles, rectangles, triangles and named groups. The
//! interpreter builds a retained scene graph from it and rasterizes that graph into a fixed-size
//! RGB buffer, which is then emitted as ASCII PPM (or PNG).
//!
//! # Pipeline overview
//!
//! 1. **Lex**: each non-blank, non-comment line becomes whitespace-separated tokens
//! 2. **Parse**: `script text -> Program` (ordered [`Instruction`]s, tokens kept verbatim)
//! 3. **Execute**: `Program -> SceneGraph` in a [`Session`], tracking open groups on a stack
//! 4. **Render**: each `render` instruction repaints the root components in document order
//! 5. **Emit**: `ImageBuffer -> P3 text` ([`encode_ppm`]) or PNG ([`write_png`])
//!
//! # Script language
//!
//! ```text
//! canvas <width> <height>
//! circle <name> <cx> <cy> <radius> <color>
//! rectangle|rect <name> <x> <y> <width> <height> <color>
//! triangle <name> <x1> <y1> <x2> <y2> <x3> <y3> <color>
//! group <name>
//! end
//! render
//! ```
//!
//! `<color>` is one of `red green blue yellow cyan magenta white black` or an `r,g,b` triple.
//! Lines starting with `#` or `//` are comments.
//!
//! # Errors
//!
//! Fatal conditions surface as [`VmError`]. Recoverable ones (too few parameters, unmatched
//! `end`, a `canvas` that disagrees with the session size, groups left open) are logged through
//! `tracing` and collected as [`Diagnostic`]s; execution continues.
//!
//! ```
//! let img = shapevm::run_script("circle c1 5 5 3 red\nrender\n", 10, 10).unwrap();
//! assert_eq!(img.get(5, 5), Some(shapevm::Color::rgb(255, 0, 0)));
//! assert_eq!(img.get(0, 0), Some(shapevm::Color::WHITE));
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod render;
mod scene;
mod script;
mod vm;

pub use encode::png::{to_rgb_image, write_png};
pub use encode::ppm::{PPM_MAX_VALUE, encode_ppm, write_ppm};
pub use encode::sink::{
    ImageFormat, ImageSink, InMemorySink, PngSink, PpmFileSink, PpmSink, file_sink,
};
pub use foundation::alloc_track::AllocStats;
pub use foundation::color::{NAMED_COLORS, named_color, parse_color};
pub use foundation::core::{
    Canvas, Color, DEFAULT_HEIGHT, DEFAULT_WIDTH, Point, parse_int_lenient,
};
pub use foundation::error::{VmError, VmResult};
pub use foundation::geom::{PixelWindow, circle_contains, rect_contains, triangle_contains};
pub use render::image::ImageBuffer;
pub use render::raster::{fill_shape, render_scene};
pub use scene::component::{
    Circle, Component, Extent, Group, INITIAL_CAPACITY, Rectangle, Shape, Triangle,
};
pub use scene::graph::{GroupStack, SceneGraph};
pub use script::ast::{Instruction, InstructionKind, Program};
pub use script::lexer::{MAX_LINE_LEN, MAX_TOKENS};
pub use script::parser::parse_script;
pub use vm::diagnostics::Diagnostic;
pub use vm::session::{RunReport, RunStats, Session, SessionOpts, run_script};
