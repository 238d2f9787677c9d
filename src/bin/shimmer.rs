use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Args, Parser, Subcommand};
use shimmer::{
    Canvas, ColorDef, Compositor, Direction, DriverStatus, Fps, FrameIndex, FrameRGBA,
    RenderDecision, Rgba8Premul, SharedController, ShimmerConfig, ShimmerEffect, load_child,
    over_color_in_place, skeleton_child,
};

#[derive(Parser, Debug)]
#[command(name = "shimmer", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the sweep at one progress value as a PNG.
    Frame(FrameArgs),
    /// Render consecutive frames of the running sweep as numbered PNGs.
    Sequence(SequenceArgs),
}

#[derive(Args, Debug)]
struct SceneArgs {
    /// Child visual (PNG, JPEG or SVG). Defaults to a built-in list-row skeleton.
    #[arg(long = "in")]
    in_path: Option<PathBuf>,

    /// Effect configuration JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the configured travel direction (ltr, rtl, ttb, btt).
    #[arg(long)]
    direction: Option<Direction>,

    /// Canvas for SVG and skeleton children, as WIDTHxHEIGHT.
    #[arg(long, default_value = "320x96", value_parser = parse_size)]
    size: Canvas,

    /// Color the output is flattened onto.
    #[arg(long, default_value = "#FFFFFF", value_parser = parse_color)]
    background: Rgba8Premul,
}

#[derive(Args, Debug)]
struct FrameArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Sweep progress in [0, 1].
    #[arg(long, default_value_t = 0.5)]
    progress: f64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Args, Debug)]
struct SequenceArgs {
    #[command(flatten)]
    scene: SceneArgs,

    /// Output directory for frame_NNNNN.png files.
    #[arg(long)]
    out_dir: PathBuf,

    /// Host frame rate.
    #[arg(long, default_value_t = 30)]
    fps: u32,

    /// Frame count. Defaults to one full pass.
    #[arg(long)]
    frames: Option<u64>,

    /// Stack this many lanes driven by one shared controller.
    #[arg(long, value_parser = clap::value_parser!(u32).range(1..=64))]
    shared_lanes: Option<u32>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Sequence(args) => cmd_sequence(args),
    }
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_size(s: &str) -> Result<Canvas, String> {
    let (w, h) = s
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got \"{s}\""))?;
    let w = w.trim().parse::<u32>().map_err(|e| format!("width: {e}"))?;
    let h = h.trim().parse::<u32>().map_err(|e| format!("height: {e}"))?;
    Canvas::new(w, h).map_err(|e| e.to_string())
}

fn parse_color(s: &str) -> Result<Rgba8Premul, String> {
    ColorDef::from_hex(s)
        .and_then(ColorDef::to_rgba8_premul)
        .map_err(|e| e.to_string())
}

impl SceneArgs {
    fn load_config(&self) -> anyhow::Result<ShimmerConfig> {
        let mut cfg = match &self.config {
            Some(path) => ShimmerConfig::from_path(path)?,
            None => ShimmerConfig::default(),
        };
        if let Some(direction) = self.direction {
            cfg.direction = direction;
        }
        Ok(cfg)
    }

    fn load_child(&self) -> anyhow::Result<FrameRGBA> {
        let child = match &self.in_path {
            Some(path) => load_child(path, self.size)?,
            None => skeleton_child(self.size)?,
        };
        Ok(child)
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    anyhow::ensure!(
        (0.0..=1.0).contains(&args.progress),
        "--progress must be within [0, 1], got {}",
        args.progress
    );
    let cfg = args.scene.load_config()?;
    let child = args.scene.load_child()?;
    let effect = ShimmerEffect::new(cfg)?;
    let mut compositor = Compositor::cpu();

    let frame = match effect.render_decision() {
        RenderDecision::Plain => child,
        RenderDecision::Shimmer { .. } => compositor.paint(
            &child,
            effect.gradient(),
            effect.config().direction,
            args.progress,
        )?,
    };

    write_png(&args.out, frame, args.scene.background)?;
    tracing::info!(out = %args.out.display(), progress = args.progress, "wrote frame");
    Ok(())
}

fn cmd_sequence(args: SequenceArgs) -> anyhow::Result<()> {
    let cfg = args.scene.load_config()?;
    let child = args.scene.load_child()?;
    let fps = Fps::new(args.fps, 1)?;
    let dt = fps.frame_duration();
    let period = cfg.driver_config()?.period();
    let frames = args.frames.unwrap_or_else(|| fps.frames_for(period));

    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;
    let mut compositor = Compositor::cpu();

    match args.shared_lanes {
        None => {
            let mut effect = ShimmerEffect::new(cfg)?;
            for i in 0..frames {
                let frame = effect.paint(&mut compositor, &child)?.into_owned();
                let out = frame_path(&args.out_dir, FrameIndex(i));
                write_png(&out, frame, args.scene.background)?;
                let passes = effect.passes();
                effect.tick(dt);
                if effect.passes() != passes {
                    let exhausted = effect.status() == Some(DriverStatus::Completed);
                    log_completion(i, effect.passes(), exhausted);
                }
            }
        }
        Some(lanes) => {
            let enabled = cfg.is_enabled();
            let controller = SharedController::new(cfg.driver_config()?);
            let lane_cfg = cfg.without_timing();
            let mut effects = (0..lanes)
                .map(|_| ShimmerEffect::with_controller(lane_cfg.clone(), &controller))
                .collect::<Result<Vec<_>, _>>()?;
            if enabled {
                controller.start();
            }
            for i in 0..frames {
                let rows = effects
                    .iter()
                    .map(|fx| fx.paint(&mut compositor, &child).map(|f| f.into_owned()))
                    .collect::<Result<Vec<_>, _>>()?;
                let frame = FrameRGBA::stack_vertical(&rows)?;
                let out = frame_path(&args.out_dir, FrameIndex(i));
                write_png(&out, frame, args.scene.background)?;
                let outcome = controller.tick(dt);
                if outcome.completed {
                    log_completion(i, controller.passes(), !outcome.restarted);
                }
                for fx in &mut effects {
                    fx.tick(dt);
                }
            }
        }
    }

    tracing::info!(out_dir = %args.out_dir.display(), frames, "wrote sequence");
    Ok(())
}

fn log_completion(frame: u64, passes: u32, exhausted: bool) {
    if exhausted {
        tracing::info!(frame, passes, "loop limit reached");
    } else {
        tracing::info!(frame, passes, "pass completed");
    }
}

fn frame_path(dir: &Path, idx: FrameIndex) -> PathBuf {
    dir.join(format!("frame_{:05}.png", idx.0))
}

fn write_png(out: &Path, mut frame: FrameRGBA, background: Rgba8Premul) -> anyhow::Result<()> {
    if let Some(parent) = out.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    over_color_in_place(&mut frame.data, background.to_array())?;

    image::save_buffer_with_format(
        out,
        &frame.to_straight_rgba8(),
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", out.display()))?;
    tracing::debug!(out = %out.display(), "wrote png");
    Ok(())
}
