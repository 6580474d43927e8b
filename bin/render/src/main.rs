//! Print or render the swatch strip for an HSL color.
//!
//! ```text
//! tonestrip-render <hue> <saturation> <lightness> [--out FILE] [--font FILE] [--json]
//! tonestrip-render "hsl(155, 100%, 0%)" --out strip.png
//! ```
//!
//! The PNG shows the strip twice, on a light and on a dark backdrop. Swatches
//! that fail the 4.5:1 threshold get a black and/or white corner marker.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use image::{Rgba, RgbaImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;
use rusttype::{Font, Scale};
use tonestrip::{Failures, Hsl, Rgb, Strip, Swatch};
use tracing_subscriber::EnvFilter;

const SWATCH_WIDTH: u32 = 120;
const SWATCH_HEIGHT: u32 = 120;
const MARGIN: u32 = 20;
const MARKER: u32 = 14;

const LIGHT_BACKDROP: Rgba<u8> = Rgba([245, 245, 245, 255]);
const DARK_BACKDROP: Rgba<u8> = Rgba([24, 24, 24, 255]);

const USAGE: &str = "usage: tonestrip-render <hue> <saturation> <lightness> \
                     [--out FILE] [--font FILE] [--json]";

#[derive(Debug)]
struct Options {
    color: Hsl,
    out: Option<PathBuf>,
    font: Option<PathBuf>,
    json: bool,
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Options> {
    let mut out: Option<PathBuf> = None;
    let mut font: Option<PathBuf> = None;
    let mut json = false;
    let mut components = vec![];

    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--out" | "-o" => {
                out = Some(args.next().context("--out needs a file name")?.into());
            }
            "--font" => {
                font = Some(args.next().context("--font needs a file name")?.into());
            }
            "--json" => json = true,
            "--help" | "-h" => bail!(USAGE),
            _ => components.push(arg),
        }
    }

    let color = match components.as_slice() {
        [single] => single.parse::<Hsl>()?,
        [hue, saturation, lightness] => Hsl::parse(hue, saturation, lightness)?,
        _ => bail!(USAGE),
    };

    Ok(Options {
        color,
        out,
        font,
        json,
    })
}

fn to_pixel(rgb: Rgb) -> Rgba<u8> {
    Rgba([rgb.red, rgb.green, rgb.blue, 255])
}

fn print_table(strip: &Strip) {
    println!(
        "{:<10} {:<8} {:>9} {:>9}  fails",
        "swatch", "hex", "on black", "on white"
    );
    for swatch in strip {
        let failures = swatch.failures();
        let mut fails = vec![];
        if failures.contains(Failures::BLACK_TEXT) {
            fails.push("black");
        }
        if failures.contains(Failures::WHITE_TEXT) {
            fails.push("white");
        }
        println!(
            "{:<10} {:<8} {:>7.1}:1 {:>7.1}:1  {}",
            swatch.label(),
            swatch.hex,
            swatch.against_black.ratio,
            swatch.against_white.ratio,
            fails.join(" "),
        );
    }
}

fn line_height(font: &Font, scale: Scale) -> f32 {
    let v_metrics = font.v_metrics(scale);
    v_metrics.ascent - v_metrics.descent + v_metrics.line_gap
}

fn draw_captions(img: &mut RgbaImage, font: &Font, swatch: &Swatch, x: i32, y: i32) {
    let scale = Scale::uniform(SWATCH_HEIGHT as f32 / 8.0);
    let lines = [
        swatch.label(),
        swatch.hex.clone(),
        format!("{:.1}:1", swatch.against_black.ratio),
        format!("{:.1}:1", swatch.against_white.ratio),
    ];
    // The two ratio lines are drawn in the text color they were measured for.
    let colors = [
        None,
        None,
        Some(to_pixel(Rgb::BLACK)),
        Some(to_pixel(Rgb::WHITE)),
    ];

    // Captions use whichever of black or white reads better.
    let default = if swatch.against_black.ratio >= swatch.against_white.ratio {
        to_pixel(Rgb::BLACK)
    } else {
        to_pixel(Rgb::WHITE)
    };

    let height = line_height(font, scale);
    let mut offset = MARKER as f32;
    for (text, color) in lines.iter().zip(colors) {
        draw_text_mut(
            img,
            color.unwrap_or(default),
            x + 6,
            y + offset.round() as i32,
            scale,
            font,
            text,
        );
        offset += height;
    }
}

fn draw_strip(img: &mut RgbaImage, strip: &Strip, font: Option<&Font>, top: u32) {
    for (i, swatch) in strip.iter().enumerate() {
        let x = (MARGIN + i as u32 * SWATCH_WIDTH) as i32;
        let y = top as i32;

        draw_filled_rect_mut(
            img,
            Rect::at(x, y).of_size(SWATCH_WIDTH, SWATCH_HEIGHT),
            to_pixel(swatch.rgb),
        );

        let failures = swatch.failures();
        if failures.contains(Failures::BLACK_TEXT) {
            draw_filled_rect_mut(
                img,
                Rect::at(x, y).of_size(MARKER, MARKER),
                to_pixel(Rgb::BLACK),
            );
        }
        if failures.contains(Failures::WHITE_TEXT) {
            draw_filled_rect_mut(
                img,
                Rect::at(x + (SWATCH_WIDTH - MARKER) as i32, y).of_size(MARKER, MARKER),
                to_pixel(Rgb::WHITE),
            );
        }

        if let Some(font) = font {
            draw_captions(img, font, swatch, x, y);
        }
    }
}

fn render(strip: &Strip, font: Option<&Font>, path: &Path) -> Result<()> {
    let width = MARGIN * 2 + SWATCH_WIDTH * strip.len() as u32;
    let band = MARGIN * 2 + SWATCH_HEIGHT;

    let mut img = RgbaImage::new(width, band * 2);
    draw_filled_rect_mut(&mut img, Rect::at(0, 0).of_size(width, band), LIGHT_BACKDROP);
    draw_filled_rect_mut(
        &mut img,
        Rect::at(0, band as i32).of_size(width, band),
        DARK_BACKDROP,
    );

    draw_strip(&mut img, strip, font, MARGIN);
    draw_strip(&mut img, strip, font, band + MARGIN);

    img.save(path)
        .with_context(|| format!("could not write image to {}", path.display()))?;
    tracing::info!(path = %path.display(), "rendered strip");

    Ok(())
}

fn load_font(path: &Path) -> Result<Font<'static>> {
    let data = std::fs::read(path)
        .with_context(|| format!("could not read font {}", path.display()))?;
    Font::try_from_vec(data).with_context(|| format!("{} is not a usable font", path.display()))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let options = parse_args(std::env::args().skip(1))?;
    let strip = options.color.strip();
    let collapsed = strip.iter().filter(|s| s.lightness >= 100.0).count();
    if collapsed > 1 {
        tracing::info!(
            collapsed,
            "several steps reach full lightness and render as white"
        );
    }

    if options.json {
        println!("{}", serde_json::to_string_pretty(&strip)?);
    } else {
        print_table(&strip);
    }

    if let Some(out) = &options.out {
        let font = options.font.as_deref().map(load_font).transpose()?;
        if font.is_none() {
            tracing::warn!("no --font given, rendering swatches without captions");
        }
        render(&strip, font.as_ref(), out)?;
    }

    Ok(())
}
