// File: crates/wto-winrate/src/main.rs
// Summary: Renders the win-rate figure to PNG and SVG under an output directory.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use wto_winrate::{render_options, win_rate_figure};

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let out_dir = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("target/out"));
    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("creating output directory {}", out_dir.display()))?;

    let chart = win_rate_figure();
    let opts = render_options();

    let png = out_dir.join("wto_winrate.png");
    chart
        .render_to_png(&opts, &png)
        .with_context(|| format!("rendering {}", png.display()))?;
    info!(path = %png.display(), "wrote PNG");

    let svg = out_dir.join("wto_winrate.svg");
    chart
        .render_to_svg(&opts, &svg)
        .with_context(|| format!("rendering {}", svg.display()))?;
    info!(path = %svg.display(), "wrote SVG");

    Ok(())
}
