use serde::Serialize;

use crate::foundation::alloc_track::{AllocMeter, AllocStats};
use crate::foundation::color::parse_color;
use crate::foundation::core::{Canvas, Color, Point, parse_int_lenient};
use crate::foundation::error::{VmError, VmResult};
use crate::render::image::ImageBuffer;
use crate::render::raster::render_scene;
use crate::scene::component::Component;
use crate::scene::graph::SceneGraph;
use crate::script::ast::{Instruction, InstructionKind, Program};
use crate::script::parser::parse_script;
use crate::vm::diagnostics::Diagnostic;

/// Session configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionOpts {
    /// Fixed image dimensions for the whole session.
    pub canvas: Canvas,
    /// Initial color of every pixel.
    pub background: Color,
}

impl Default for SessionOpts {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            background: Color::WHITE,
        }
    }
}

/// Counters describing one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RunStats {
    /// Instructions executed.
    pub instructions: usize,
    /// Components in the scene graph, groups included.
    pub components: usize,
    /// `render` instructions executed.
    pub render_passes: usize,
    /// Pixel writes across all render passes.
    pub pixels_painted: usize,
    /// Allocator activity during the run (zeros unless built with `alloc-track`).
    pub alloc: AllocStats,
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunReport {
    /// Final image.
    pub image: ImageBuffer,
    /// Scene graph as left by the program.
    pub scene: SceneGraph,
    /// Recovered conditions in the order they occurred.
    pub diagnostics: Vec<Diagnostic>,
    /// Run counters.
    pub stats: RunStats,
}

/// One interpreter session: program, scene graph and image buffer.
///
/// Programs are append-only: [`Session::load`] appends parsed instructions and
/// [`Session::execute`] runs every instruction not yet executed, strictly in order.
#[derive(Debug)]
pub struct Session {
    opts: SessionOpts,
    program: Program,
    cursor: usize,
    scene: SceneGraph,
    image: ImageBuffer,
    diagnostics: Vec<Diagnostic>,
    stats: RunStats,
}

impl Session {
    /// Create a session with a blank image.
    pub fn new(opts: SessionOpts) -> VmResult<Self> {
        Ok(Self {
            opts,
            program: Program::new(),
            cursor: 0,
            scene: SceneGraph::new(),
            image: ImageBuffer::new(opts.canvas, opts.background)?,
            diagnostics: Vec::new(),
            stats: RunStats::default(),
        })
    }

    /// Parse, execute and finish `script` in a fresh session.
    pub fn run(opts: SessionOpts, script: &str) -> VmResult<RunReport> {
        let meter = AllocMeter::start();
        let mut session = Self::new(opts)?;
        session.load(script)?;
        session.execute()?;
        let mut report = session.finish();
        report.stats.alloc = meter.finish();
        Ok(report)
    }

    /// Session configuration.
    pub fn opts(&self) -> SessionOpts {
        self.opts
    }

    /// Instructions loaded so far.
    pub fn program(&self) -> &Program {
        &self.program
    }

    /// Current scene graph.
    pub fn scene(&self) -> &SceneGraph {
        &self.scene
    }

    /// Current image.
    pub fn image(&self) -> &ImageBuffer {
        &self.image
    }

    /// Recovered conditions so far.
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Parse `script` and append its instructions to the program.
    ///
    /// On failure nothing is appended.
    pub fn load(&mut self, script: &str) -> VmResult<()> {
        let parsed = parse_script(script)?;
        let before = self.program.len();
        for ins in parsed.into_instructions() {
            let line = ins.line;
            if let Err(e) = self.program.try_push(ins) {
                self.program.truncate(before);
                return Err(VmError::parse(line, format!("append instruction: {e}")));
            }
        }
        Ok(())
    }

    /// Execute every pending instruction in program order.
    ///
    /// Fatal errors stop execution immediately; recovered conditions are recorded and logged.
    #[tracing::instrument(skip_all, fields(pending = self.program.len() - self.cursor))]
    pub fn execute(&mut self) -> VmResult<()> {
        let program = std::mem::take(&mut self.program);
        let result = self.execute_from(&program);
        self.program = program;
        result
    }

    fn execute_from(&mut self, program: &Program) -> VmResult<()> {
        while let Some(ins) = program.instructions().get(self.cursor) {
            self.cursor += 1;
            self.step(ins)?;
            self.stats.instructions += 1;
        }
        Ok(())
    }

    fn step(&mut self, ins: &Instruction) -> VmResult<()> {
        if ins.params.len() < ins.kind.min_params() {
            self.note(Diagnostic::MalformedInstruction {
                line: ins.line,
                keyword: ins.keyword().to_owned(),
                expected: ins.kind.min_params(),
                found: ins.params.len(),
            });
            return Ok(());
        }

        let int = |idx: usize| parse_int_lenient(ins.param(idx).unwrap_or_default());
        let name = ins.param(1).unwrap_or_default();

        match ins.kind {
            InstructionKind::Canvas => {
                let (w, h) = (int(1), int(2));
                let c = self.opts.canvas;
                if w > 0 && h > 0 && (w as u32 != c.width || h as u32 != c.height) {
                    self.note(Diagnostic::CanvasMismatch {
                        line: ins.line,
                        requested_width: w,
                        requested_height: h,
                        actual: c,
                    });
                }
            }
            InstructionKind::Circle => {
                let color = parse_color(ins.param(5).unwrap_or_default());
                let c = Component::circle(name, Point::new(int(2), int(3)), int(4), color)?;
                self.attach(ins, c)?;
            }
            InstructionKind::Rectangle => {
                let color = parse_color(ins.param(6).unwrap_or_default());
                let r = Component::rectangle(
                    name,
                    Point::new(int(2), int(3)),
                    int(4),
                    int(5),
                    color,
                )?;
                self.attach(ins, r)?;
            }
            InstructionKind::Triangle => {
                let color = parse_color(ins.param(8).unwrap_or_default());
                let t = Component::triangle(
                    name,
                    Point::new(int(2), int(3)),
                    Point::new(int(4), int(5)),
                    Point::new(int(6), int(7)),
                    color,
                )?;
                self.attach(ins, t)?;
            }
            InstructionKind::GroupStart => {
                let g = Component::group(name)?;
                self.scene
                    .open_group(g)
                    .map_err(|e| VmError::attach(ins.line, e.to_string()))?;
                tracing::trace!(
                    line = ins.line,
                    name,
                    depth = self.scene.stack().depth(),
                    "group opened"
                );
            }
            InstructionKind::GroupEnd => match self.scene.close_group() {
                Some(closed) => tracing::trace!(line = ins.line, name = %closed, "group closed"),
                None => self.note(Diagnostic::UnmatchedGroupEnd { line: ins.line }),
            },
            InstructionKind::Render => {
                self.stats.pixels_painted += render_scene(&self.scene, &mut self.image);
                self.stats.render_passes += 1;
            }
        }
        Ok(())
    }

    fn attach(&mut self, ins: &Instruction, component: Component) -> VmResult<()> {
        self.scene
            .attach(component)
            .map(|_| ())
            .map_err(|e| VmError::attach(ins.line, e.to_string()))
    }

    fn note(&mut self, diag: Diagnostic) {
        diag.log();
        self.diagnostics.push(diag);
    }

    /// End the session, reporting any group left open, and hand back its results.
    pub fn finish(mut self) -> RunReport {
        let open: Vec<String> = self
            .scene
            .open_groups()
            .into_iter()
            .map(str::to_owned)
            .collect();
        for (i, name) in open.into_iter().enumerate() {
            self.note(Diagnostic::UnclosedGroup { name, depth: i + 1 });
        }

        self.stats.components = self.scene.node_count();
        RunReport {
            image: self.image,
            scene: self.scene,
            diagnostics: self.diagnostics,
            stats: self.stats,
        }
    }
}

/// Run `script` on a fresh `width` x `height` white canvas and return the final image.
pub fn run_script(script: &str, width: u32, height: u32) -> VmResult<ImageBuffer> {
    let opts = SessionOpts {
        canvas: Canvas::new(width, height)?,
        background: Color::WHITE,
    };
    Session::run(opts, script).map(|r| r.image)
}

#[cfg(test)]
#[path = "../../tests/unit/vm/session.rs"]
mod tests;
