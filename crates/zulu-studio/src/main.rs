mod app;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use zulu_engine::device::GpuInit;
use zulu_engine::logging::{init_logging, LoggingConfig};
use zulu_engine::text::FontSystem;
use zulu_engine::window::{Runtime, RuntimeConfig};
use zulu_face::{zone_options, ClockController, SystemClock, TzDatabase, WallClock};

use crate::app::ClockApp;

/// Fonts tried in order when `--font` is not given.
const SYSTEM_FONTS: &[&str] = &[
    "/usr/share/fonts/TTF/DejaVuSans.ttf",
    "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/dejavu/DejaVuSans.ttf",
    "/usr/share/fonts/noto/NotoSans-Regular.ttf",
    "/usr/share/fonts/truetype/noto/NotoSans-Regular.ttf",
    "/System/Library/Fonts/Supplemental/Arial.ttf",
    "C:\\Windows\\Fonts\\arial.ttf",
];

#[derive(Parser)]
#[command(name = "zulu", version, about = "Analog 24-hour clock with military world-time letters")]
struct Args {
    #[arg(long, help = "Start in <ZONE> instead of the host timezone, e.g. Europe/Paris.")]
    zone: Option<String>,

    #[arg(long, help = "Print every known zone with its current UTC offset and exit.")]
    list_zones: bool,

    #[arg(long, help = "Render labels with the TrueType font at <FONT>.")]
    font: Option<PathBuf>,

    #[arg(long, help = "Log filter in env_logger syntax, e.g. \"debug\" or \"zulu_face=debug\".")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(LoggingConfig { env_filter: args.log.clone(), ..LoggingConfig::default() });

    let zones = TzDatabase::new();
    let clock = SystemClock::new();

    if args.list_zones {
        for option in zone_options(&zones, clock.now()) {
            println!("{:<32} {}", option.name, option.offset_label());
        }
        return Ok(());
    }

    let controller = match args.zone.as_deref() {
        Some(name) => ClockController::with_zone(&zones, clock, name)?,
        None => ClockController::new(&zones, clock),
    };

    let fonts = load_fonts(args.font.as_deref())?;
    let title = controller.status(controller.now()).title();

    Runtime::run(
        RuntimeConfig { title, ..RuntimeConfig::default() },
        GpuInit::default(),
        ClockApp::new(controller, fonts),
    )
}

/// Loads the label font. An explicit path must load; otherwise the first
/// readable system font is used and a missing font only disables labels.
fn load_fonts(explicit: Option<&Path>) -> Result<FontSystem> {
    let mut fonts = FontSystem::new();

    if let Some(path) = explicit {
        let bytes = std::fs::read(path)
            .with_context(|| format!("failed to read font {}", path.display()))?;
        fonts
            .load_font(&bytes)
            .with_context(|| format!("failed to parse font {}", path.display()))?;
        log::info!("font: {}", path.display());
        return Ok(fonts);
    }

    let found = SYSTEM_FONTS
        .iter()
        .find_map(|p| std::fs::read(p).ok().map(|bytes| (*p, bytes)));

    match found {
        Some((path, bytes)) => match fonts.load_font(&bytes) {
            Ok(_) => log::info!("font: {path}"),
            Err(e) => log::warn!("font {path} unusable ({e}); labels disabled"),
        },
        None => log::warn!("no system font found; labels disabled (use --font)"),
    }

    Ok(fonts)
}
