//! Welcome banner (STUDENT MARKS) with a vertical colour gradient.
//! Uses figlet's bundled standard font; colours are crossterm ANSI commands.

use crossterm::Command;
use crossterm::style::{Color, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::fmt::Write;

const TITLE: &str = "STUDENT MARKS";

/// Chalkboard green (#2e8b57).
const CHALK_GREEN: (u8, u8, u8) = (0x2e, 0x8b, 0x57);
/// Highlighter yellow (#f5d547).
const MARKER_YELLOW: (u8, u8, u8) = (0xf5, 0xd5, 0x47);

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// Renders the title as ASCII art. Falls back to the plain title if the font
/// cannot be loaded.
fn render_title() -> String {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert(TITLE).map(|figure| figure.to_string()))
        .unwrap_or_else(|| TITLE.to_string())
}

/// Builds the banner: title art with a gradient from chalk green to marker
/// yellow, then the version line. Written through the console like any other text.
pub fn render_welcome() -> String {
    let art = render_title();
    let lines: Vec<&str> = art.lines().filter(|l| !l.trim().is_empty()).collect();
    let total = lines.len().max(1);
    let mut out = String::new();

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(CHALK_GREEN, MARKER_YELLOW, t);
        let _ = SetForegroundColor(Color::Rgb { r, g, b }).write_ansi(&mut out);
        out.push_str(line);
        let _ = ResetColor.write_ansi(&mut out);
        out.push('\n');
    }

    let _ = write!(out, "v{}", env!("CARGO_PKG_VERSION"));
    out
}
