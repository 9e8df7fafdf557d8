//! Welcome banner: "NICHE NAV" in FIGlet with a red-to-orange gradient.

use super::palette::{ORANGE_600, RED_600};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use figlet_rs::FIGfont;
use std::io::{self, Write};

/// Linear interpolation between two RGB colors. `t` in [0.0, 1.0].
fn lerp_rgb(a: (u8, u8, u8), b: (u8, u8, u8), t: f64) -> (u8, u8, u8) {
    let r = (f64::from(a.0) * (1.0 - t) + f64::from(b.0) * t).round() as u8;
    let g = (f64::from(a.1) * (1.0 - t) + f64::from(b.1) * t).round() as u8;
    let bl = (f64::from(a.2) * (1.0 - t) + f64::from(b.2) * t).round() as u8;
    (r, g, bl)
}

/// FIGlet art for the banner, or the plain title if the font cannot render it.
fn banner_lines() -> Vec<String> {
    FIGfont::standard()
        .ok()
        .and_then(|font| font.convert("NICHE NAV").map(|figure| figure.to_string()))
        .map(|art| art.lines().map(str::to_string).collect())
        .unwrap_or_else(|| vec!["NICHE NAV".to_string()])
}

/// Writes the welcome banner with a vertical gradient, then the version line.
/// Drawn at the top of every form screen, after the screen is cleared.
pub fn render_welcome<W: Write>(out: &mut W) -> io::Result<()> {
    let lines = banner_lines();
    let total = lines.len().max(1);

    for (i, line) in lines.iter().enumerate() {
        let t = if total <= 1 {
            1.0
        } else {
            i as f64 / (total - 1) as f64
        };
        let (r, g, b) = lerp_rgb(RED_600, ORANGE_600, t);
        queue!(
            out,
            SetForegroundColor(Color::Rgb { r, g, b }),
            Print(line),
            Print("\r\n"),
            ResetColor,
        )?;
    }

    let version = env!("CARGO_PKG_VERSION");
    let (r, g, b) = ORANGE_600;
    queue!(
        out,
        SetForegroundColor(Color::Rgb { r, g, b }),
        Print(format!("NicheNavigator AI v{}\r\n", version)),
        ResetColor,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp_endpoints() {
        assert_eq!(lerp_rgb(RED_600, ORANGE_600, 0.0), RED_600);
        assert_eq!(lerp_rgb(RED_600, ORANGE_600, 1.0), ORANGE_600);
    }

    #[test]
    fn test_banner_has_lines() {
        assert!(!banner_lines().is_empty());
    }

    #[test]
    fn test_render_welcome_ends_with_version_line() {
        let mut buf = Vec::new();
        render_welcome(&mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains(&format!("NicheNavigator AI v{}", env!("CARGO_PKG_VERSION"))));
        assert!(text.lines().count() > 1);
    }
}
