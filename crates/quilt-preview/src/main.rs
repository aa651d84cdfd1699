//! Renders a nine-slice or tiled mesh for a sprite PNG and writes the result
//! to an output PNG. Handy for eyeballing border values before wiring a
//! sprite into a real renderer.
//!
//! ```text
//! quilt-preview --sprite panel.png --border 8,8,8,8 --width 300 --height 120
//! quilt-preview --sprite wing.png --border 5,0,5,0 --mode tiled --out pair.png
//! ```

mod raster;

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, ValueEnum};

use quilt_mesh::color::Rgba;
use quilt_mesh::components::{MeshSource, SlicedImage, TiledImage};
use quilt_mesh::coords::{Border, Rect};
use quilt_mesh::logging::{LoggingConfig, init_logging};
use quilt_mesh::mesh::MeshBuffer;
use quilt_mesh::sprite::SpriteMetrics;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum Mode {
    /// 3×3 grid with fixed corners.
    Sliced,
    /// One tile and its horizontal mirror.
    Tiled,
}

#[derive(Debug, Parser)]
#[command(name = "quilt-preview", about = "Render a 9-slice or tiled sprite mesh to a PNG")]
struct Args {
    /// Sprite image (PNG).
    #[arg(long)]
    sprite: PathBuf,

    /// Border insets in source pixels: left,bottom,right,top.
    #[arg(long, value_parser = parse_border)]
    border: Border,

    /// Output width in local units (1 unit = 1 output pixel).
    #[arg(long)]
    width: f32,

    /// Output height in local units.
    #[arg(long)]
    height: f32,

    #[arg(long, value_enum, default_value_t = Mode::Sliced)]
    mode: Mode,

    /// Also fill the center cell (sliced mode).
    #[arg(long)]
    fill_center: bool,

    /// Pixels-per-unit scale of the sprite.
    #[arg(long, default_value_t = 1.0)]
    ppu: f32,

    /// Vertex tint as RRGGBB or RRGGBBAA hex.
    #[arg(long, value_parser = parse_tint)]
    tint: Option<Rgba>,

    #[arg(long, default_value = "preview.png")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    init_logging(LoggingConfig::default());
    let args = Args::parse();

    anyhow::ensure!(args.width > 0.0 && args.height > 0.0, "output size must be positive");

    let texture = image::open(&args.sprite)
        .with_context(|| format!("failed to load sprite {}", args.sprite.display()))?
        .to_rgba8();

    let metrics =
        SpriteMetrics::full_texture(texture.width(), texture.height(), args.border, args.ppu);
    let tint = args.tint.unwrap_or(Rgba::WHITE);

    // Tiled mode mirrors around x = 0, so center the view on it; sliced mode
    // draws from the origin.
    let view = match args.mode {
        Mode::Sliced => Rect::new(0.0, 0.0, args.width, args.height),
        Mode::Tiled => Rect::new(-args.width / 2.0, 0.0, args.width, args.height),
    };

    let mut mesh = MeshBuffer::new();
    match args.mode {
        Mode::Sliced => {
            let component = SlicedImage { fill_center: args.fill_center, tint, ..SlicedImage::default() };
            component.populate_mesh(&metrics, view, &mut mesh);
        }
        Mode::Tiled => {
            let component = TiledImage { tint, ..TiledImage::default() };
            component.populate_mesh(&metrics, view, &mut mesh);
        }
    }

    let out_w = args.width.ceil() as u32;
    let out_h = args.height.ceil() as u32;
    let rendered = raster::rasterize(&mesh, view, out_w, out_h, &texture);

    rendered
        .save(&args.out)
        .with_context(|| format!("failed to write {}", args.out.display()))?;

    log::info!(
        "wrote {} ({}x{}, {} vertices, {} triangles)",
        args.out.display(),
        out_w,
        out_h,
        mesh.vertex_count(),
        mesh.indices().len() / 3
    );
    Ok(())
}

fn parse_border(s: &str) -> Result<Border, String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 4 {
        return Err("expected four comma-separated values: left,bottom,right,top".into());
    }
    let mut v = [0.0f32; 4];
    for (slot, part) in v.iter_mut().zip(&parts) {
        *slot = part
            .trim()
            .parse::<f32>()
            .map_err(|_| format!("invalid border value '{part}'"))?;
        if *slot < 0.0 {
            return Err(format!("border value '{part}' must be non-negative"));
        }
    }
    Ok(Border::new(v[0], v[1], v[2], v[3]))
}

fn parse_tint(s: &str) -> Result<Rgba, String> {
    let hex = s.trim_start_matches('#');
    if !hex.is_ascii() {
        return Err("expected RRGGBB or RRGGBBAA hex".into());
    }
    let components = match hex.len() {
        6 => [&hex[0..2], &hex[2..4], &hex[4..6], "ff"],
        8 => [&hex[0..2], &hex[2..4], &hex[4..6], &hex[6..8]],
        _ => return Err("expected RRGGBB or RRGGBBAA hex".into()),
    };
    let mut v = [0u8; 4];
    for (slot, part) in v.iter_mut().zip(components) {
        *slot =
            u8::from_str_radix(part, 16).map_err(|_| format!("invalid hex component '{part}'"))?;
    }
    Ok(Rgba::from(v))
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── arg parsing ───────────────────────────────────────────────────────

    #[test]
    fn border_parses_four_components() {
        assert_eq!(parse_border("1,2,3,4").unwrap(), Border::new(1.0, 2.0, 3.0, 4.0));
        assert_eq!(parse_border(" 8 , 8 , 8 , 8 ").unwrap(), Border::uniform(8.0));
    }

    #[test]
    fn border_rejects_bad_input() {
        assert!(parse_border("1,2,3").is_err());
        assert!(parse_border("1,2,x,4").is_err());
        assert!(parse_border("1,2,-3,4").is_err());
    }

    #[test]
    fn tint_parses_hex_with_optional_alpha() {
        assert_eq!(parse_tint("ff00ff").unwrap(), Rgba::new(255, 0, 255, 255));
        assert_eq!(parse_tint("#11223344").unwrap(), Rgba::new(0x11, 0x22, 0x33, 0x44));
    }

    #[test]
    fn tint_rejects_odd_lengths() {
        assert!(parse_tint("fff").is_err());
        assert!(parse_tint("gggggg").is_err());
    }
}
