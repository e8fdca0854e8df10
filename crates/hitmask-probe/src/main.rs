use anyhow::{Context, Result, bail};
use hitmask::coords::Vec2;
use hitmask::logging::{LoggingConfig, init_logging};
use hitmask::{AlphaMask, MaskPlane};

/// Widest the ASCII preview gets; taller images are downsampled to match.
const PREVIEW_COLS: u32 = 64;

fn main() -> Result<()> {
    init_logging(LoggingConfig {
        env_filter: Some("info".into()),
        ..LoggingConfig::default()
    });

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() {
        usage();
        return Ok(());
    }

    // Plain args: path first, then an optional bare threshold, then points.
    let path = &args[0];
    let mut threshold: u8 = 128;
    let mut points: Vec<Vec2> = Vec::new();

    for arg in &args[1..] {
        if let Some(p) = parse_point(arg) {
            points.push(p);
        } else if let Ok(t) = arg.parse::<u8>() {
            threshold = t;
        } else {
            bail!("unrecognized argument {arg:?} (expected a threshold 0-255 or a point X,Y)");
        }
    }

    let img = image::open(path).with_context(|| format!("opening {path}"))?;
    log::info!("loaded {path}");

    let mut mask = AlphaMask::new(threshold);
    mask.feed(&img)
        .with_context(|| format!("building mask from {path}"))?;

    let plane = mask
        .plane()
        .context("mask empty after a successful feed")?;
    report(&plane, threshold);
    preview(&plane);

    if points.is_empty() {
        println!("  (no points given — pass X,Y pairs to probe them)");
        println!();
    }
    for p in points {
        let verdict = if mask.hit_test(p) { "HIT " } else { "miss" };
        println!("  ({:>8.2}, {:>8.2})  {}", p.x, p.y, verdict);
    }

    Ok(())
}

fn usage() {
    println!();
    println!("  hitmask-probe IMAGE [THRESHOLD] [X,Y ...]");
    println!();
    println!("  Builds an alpha occupancy mask from IMAGE (threshold 128 unless");
    println!("  given) and answers hit tests for each X,Y point.");
    println!();
    println!("  Example:  hitmask-probe sprite.png 64 10,10 0.5,99.9");
    println!();
}

fn parse_point(arg: &str) -> Option<Vec2> {
    let (x, y) = arg.split_once(',')?;
    Some(Vec2::new(
        x.trim().parse().ok()?,
        y.trim().parse().ok()?,
    ))
}

fn report(plane: &MaskPlane, threshold: u8) {
    let total = plane.width() as usize * plane.height() as usize;
    let solid = plane.solid_count();
    let coverage = 100.0 * solid as f64 / total as f64;
    log::info!(
        "{}x{} mask, threshold {threshold}: {solid}/{total} solid ({coverage:.1}% coverage)",
        plane.width(),
        plane.height(),
    );
}

/// Downsampled occupancy render: `#` solid, `.` transparent.
///
/// A preview cell is solid when the pixel at its top-left corner is; good
/// enough to eyeball the silhouette.
fn preview(plane: &MaskPlane) {
    let step = plane.width().div_ceil(PREVIEW_COLS).max(1);

    println!();
    let mut y = 0;
    while y < plane.height() {
        print!("  ");
        let mut x = 0;
        while x < plane.width() {
            print!("{}", if plane.solid(x, y) { '#' } else { '.' });
            x += step;
        }
        println!();
        y += step;
    }
    println!();
}
