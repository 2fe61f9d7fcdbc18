use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};
use shapevm::ImageSink as _;

#[derive(Parser, Debug)]
#[command(name = "shapevm", version)]
struct Cli {
    /// Log skipped lines and render passes (debug level).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a script and write the resulting image.
    Render(RenderArgs),
    /// Print the parsed program or the executed scene graph as JSON.
    Dump(DumpArgs),
}

#[derive(Parser, Debug)]
struct CanvasArgs {
    /// Image width in pixels.
    #[arg(long, default_value_t = shapevm::DEFAULT_WIDTH)]
    width: u32,

    /// Image height in pixels.
    #[arg(long, default_value_t = shapevm::DEFAULT_HEIGHT)]
    height: u32,

    /// Reject scripts larger than this many bytes.
    #[arg(long, default_value_t = 10 * 1024)]
    max_script_bytes: u64,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input script.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output image path.
    #[arg(long, default_value = "output.ppm")]
    out: PathBuf,

    /// Output format; inferred from the `--out` extension when omitted.
    #[arg(long, value_enum)]
    format: Option<FormatChoice>,

    /// Print run statistics to stderr.
    #[arg(long)]
    stats: bool,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Parser, Debug)]
struct DumpArgs {
    /// Input script.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// What to print.
    #[arg(long, value_enum, default_value_t = DumpWhat::Program)]
    what: DumpWhat,

    #[command(flatten)]
    canvas: CanvasArgs,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum FormatChoice {
    Ppm,
    Png,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DumpWhat {
    Program,
    Scene,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Dump(args) => cmd_dump(args),
    }
}

fn init_tracing(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn read_script(path: &Path, max_bytes: u64) -> anyhow::Result<String> {
    let meta =
        std::fs::metadata(path).with_context(|| format!("stat script '{}'", path.display()))?;
    if meta.len() == 0 || meta.len() > max_bytes {
        anyhow::bail!(
            "invalid script size {} bytes for '{}' (allowed 1..={max_bytes})",
            meta.len(),
            path.display()
        );
    }
    std::fs::read_to_string(path).with_context(|| format!("read script '{}'", path.display()))
}

fn session_opts(args: &CanvasArgs) -> anyhow::Result<shapevm::SessionOpts> {
    Ok(shapevm::SessionOpts {
        canvas: shapevm::Canvas::new(args.width, args.height)?,
        background: shapevm::Color::WHITE,
    })
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let script = read_script(&args.in_path, args.canvas.max_script_bytes)?;
    let opts = session_opts(&args.canvas)?;

    let report = shapevm::Session::run(opts, &script)
        .with_context(|| format!("run script '{}'", args.in_path.display()))?;

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    let format = match args.format {
        Some(FormatChoice::Ppm) => shapevm::ImageFormat::Ppm,
        Some(FormatChoice::Png) => shapevm::ImageFormat::Png,
        None => shapevm::ImageFormat::from_path(&args.out),
    };
    let mut sink = shapevm::file_sink(&args.out, format)?;
    sink.emit(&report.image)
        .with_context(|| format!("write image '{}'", args.out.display()))?;

    if args.stats {
        print_stats(&report);
    }
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn print_stats(report: &shapevm::RunReport) {
    let s = &report.stats;
    eprintln!("run statistics:");
    eprintln!("  instructions:   {}", s.instructions);
    eprintln!("  components:     {}", s.components);
    eprintln!("  render passes:  {}", s.render_passes);
    eprintln!("  pixels painted: {}", s.pixels_painted);
    eprintln!("  diagnostics:    {}", report.diagnostics.len());
    if s.alloc.tracked {
        eprintln!("  allocations:    {}", s.alloc.allocations);
        eprintln!("  deallocations:  {}", s.alloc.deallocations);
        eprintln!("  reallocations:  {}", s.alloc.reallocations);
        eprintln!("  net bytes:      {}", s.alloc.net_bytes());
    } else {
        eprintln!("  allocations:    (build with --features alloc-track)");
    }
}

fn cmd_dump(args: DumpArgs) -> anyhow::Result<()> {
    let script = read_script(&args.in_path, args.canvas.max_script_bytes)?;

    let json = match args.what {
        DumpWhat::Program => {
            let program = shapevm::parse_script(&script)
                .with_context(|| format!("parse script '{}'", args.in_path.display()))?;
            serde_json::to_string_pretty(&program)
        }
        DumpWhat::Scene => {
            let report = shapevm::Session::run(session_opts(&args.canvas)?, &script)
                .with_context(|| format!("run script '{}'", args.in_path.display()))?;
            serde_json::to_string_pretty(&report.scene)
        }
    }
    .context("serialize dump")?;

    println!("{json}");
    Ok(())
}
