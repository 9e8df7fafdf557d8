//! Dashboard. Renders an `AnalysisResult` as a colored terminal report.
//!
//! Pure rendering onto any `io::Write`: no fetching, no mutation. Bars keep the
//! order the model returned (no resorting).

use super::palette;
use crate::domain::{AnalysisResult, Competitor, Difficulty, ImpactLevel, Recommendation};
use crossterm::queue;
use crossterm::style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor};
use std::io::{self, Write};

/// Width of the label column in the bar chart.
const LABEL_WIDTH: usize = 18;

/// One bar of the "average views" chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartRow {
    pub label: String,
    pub value: f64,
    pub bar_len: usize,
    pub color: Color,
}

/// Build chart rows in input order. The longest bar spans `bar_width` cells.
/// Negative or non-finite values draw an empty bar.
pub fn chart_rows(competitors: &[Competitor], bar_width: usize) -> Vec<ChartRow> {
    let max = competitors
        .iter()
        .map(|c| plottable(c.avg_views_per_video))
        .fold(0.0_f64, f64::max);

    competitors
        .iter()
        .enumerate()
        .map(|(idx, c)| {
            let value = plottable(c.avg_views_per_video);
            let bar_len = if max > 0.0 {
                ((value / max) * bar_width as f64).round() as usize
            } else {
                0
            };
            ChartRow {
                label: c.name.clone(),
                value: c.avg_views_per_video,
                bar_len,
                color: if idx % 2 == 0 {
                    palette::RED
                } else {
                    palette::ORANGE
                },
            }
        })
        .collect()
}

fn plottable(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Axis label: value in thousands with a "k" suffix ("120k", "1.5k").
pub fn format_k(value: f64) -> String {
    let k = value / 1000.0;
    if k.fract() == 0.0 {
        format!("{}k", k as i64)
    } else {
        let s = format!("{:.2}", k);
        format!("{}k", s.trim_end_matches('0').trim_end_matches('.'))
    }
}

/// Rounded value with comma thousands separators ("120,000").
pub fn format_thousands(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let rounded = value.round() as i64;
    let digits = rounded.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if rounded < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Left stripe of a recommendation tile.
pub fn impact_stripe_color(level: ImpactLevel) -> Color {
    match level {
        ImpactLevel::High => palette::EMERALD,
        ImpactLevel::Medium => palette::YELLOW,
        ImpactLevel::Low => palette::BLUE,
    }
}

/// "{impact} Priority" label.
pub fn impact_label_color(level: ImpactLevel) -> Color {
    match level {
        ImpactLevel::High => palette::EMERALD_LIGHT,
        _ => palette::YELLOW_LIGHT,
    }
}

pub fn difficulty_badge_color(difficulty: Difficulty) -> Color {
    match difficulty {
        Difficulty::Easy => palette::EMERALD_LIGHT,
        Difficulty::Moderate => palette::YELLOW_LIGHT,
        Difficulty::Hard => palette::RED_LIGHT,
    }
}

/// Greedy word wrap. Words longer than `width` get their own line.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if needed > width && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut s: String = text.chars().take(width.saturating_sub(1)).collect();
    s.push('…');
    s
}

fn heading<W: Write>(out: &mut W, icon: &str, icon_color: Color, title: &str) -> io::Result<()> {
    queue!(
        out,
        Print("\r\n"),
        SetForegroundColor(icon_color),
        Print(icon),
        Print(" "),
        SetForegroundColor(palette::TEXT),
        SetAttribute(Attribute::Bold),
        Print(title),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\r\n"),
    )
}

fn paragraph<W: Write>(
    out: &mut W,
    indent: &str,
    text: &str,
    color: Color,
    width: usize,
) -> io::Result<()> {
    for line in wrap(text, width.saturating_sub(indent.len())) {
        queue!(
            out,
            Print(indent),
            SetForegroundColor(color),
            Print(line),
            ResetColor,
            Print("\r\n"),
        )?;
    }
    Ok(())
}

fn label<W: Write>(out: &mut W, indent: &str, text: &str) -> io::Result<()> {
    queue!(
        out,
        Print(indent),
        SetForegroundColor(palette::DIM),
        SetAttribute(Attribute::Bold),
        Print(text.to_uppercase()),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\r\n"),
    )
}

/// "Analysis Report" header with the reset hint.
pub fn render_report_header<W: Write>(out: &mut W, width: usize) -> io::Result<()> {
    queue!(
        out,
        SetForegroundColor(palette::TEXT_SOFT),
        SetAttribute(Attribute::Bold),
        Print("Analysis Report"),
        SetAttribute(Attribute::Reset),
        SetForegroundColor(palette::MUTED),
        Print("   (choose \"Analyze Another\" below to start over)"),
        ResetColor,
        Print("\r\n"),
        SetForegroundColor(palette::DIM),
        Print("─".repeat(width)),
        ResetColor,
        Print("\r\n"),
    )
}

/// Render the whole dashboard for `data`, `width` columns wide.
pub fn render<W: Write>(out: &mut W, data: &AnalysisResult, width: usize) -> io::Result<()> {
    let width = width.max(40);

    // Niche identity
    heading(out, "◎", palette::RED, "Niche Identification")?;
    queue!(
        out,
        Print("  "),
        SetForegroundColor(palette::ORANGE),
        SetAttribute(Attribute::Bold),
        Print(&data.niche),
        SetAttribute(Attribute::Reset),
        ResetColor,
        Print("\r\n"),
    )?;
    paragraph(out, "  ", &data.channel_overview, palette::MUTED, width)?;
    paragraph(
        out,
        "  ",
        &format!("Target Audience: {}", data.target_audience),
        palette::DIM,
        width,
    )?;

    heading(out, "↗", palette::EMERALD, "Winning Patterns")?;
    for pattern in &data.winning_patterns {
        queue!(out, Print("  "), SetForegroundColor(palette::EMERALD), Print("✔ "), ResetColor)?;
        let lines = wrap(pattern, width.saturating_sub(4));
        for (i, line) in lines.iter().enumerate() {
            if i > 0 {
                queue!(out, Print("    "))?;
            }
            queue!(
                out,
                SetForegroundColor(palette::TEXT_SOFT),
                Print(line),
                ResetColor,
                Print("\r\n"),
            )?;
        }
        if lines.is_empty() {
            queue!(out, Print("\r\n"))?;
        }
    }

    heading(out, "★", palette::YELLOW, "Competitor Landscape")?;
    render_chart(out, &data.competitors, width)?;
    for competitor in &data.competitors {
        render_competitor(out, competitor, width)?;
    }

    heading(out, "⚡", palette::YELLOW_LIGHT, "Strategic Action Plan")?;
    for rec in &data.recommendations {
        render_recommendation(out, rec, width)?;
    }

    queue!(out, Print("\r\n"))?;
    out.flush()
}

fn render_chart<W: Write>(out: &mut W, competitors: &[Competitor], width: usize) -> io::Result<()> {
    // label + space + bar + space + value
    let bar_width = width.saturating_sub(LABEL_WIDTH + 16).max(10);
    let rows = chart_rows(competitors, bar_width);

    queue!(
        out,
        SetForegroundColor(palette::MUTED),
        Print("  Average Views per Video (Estimated)\r\n\r\n"),
        ResetColor,
    )?;
    for row in &rows {
        queue!(
            out,
            Print("  "),
            SetForegroundColor(palette::MUTED),
            Print(format!("{:<w$}", truncate(&row.label, LABEL_WIDTH), w = LABEL_WIDTH)),
            Print(" "),
            SetForegroundColor(row.color),
            Print("█".repeat(row.bar_len)),
            Print(" "),
            SetForegroundColor(palette::EMERALD_LIGHT),
            Print(format_thousands(row.value)),
            ResetColor,
            Print("\r\n"),
        )?;
    }

    let max = competitors
        .iter()
        .map(|c| plottable(c.avg_views_per_video))
        .fold(0.0_f64, f64::max);
    let mid = format_k(max / 2.0);
    let end = format_k(max);
    let half = bar_width / 2;
    let gap_left = half.saturating_sub(1 + mid.len() / 2).max(1);
    let gap_right = bar_width
        .saturating_sub(1 + gap_left + mid.len() + end.len())
        .max(1);
    queue!(
        out,
        Print(" ".repeat(LABEL_WIDTH + 3)),
        SetForegroundColor(palette::DIM),
        Print("0"),
        Print(" ".repeat(gap_left)),
        Print(mid),
        Print(" ".repeat(gap_right)),
        Print(end),
        ResetColor,
        Print("\r\n"),
    )
}

fn render_competitor<W: Write>(out: &mut W, c: &Competitor, width: usize) -> io::Result<()> {
    let inner = width.saturating_sub(4);
    queue!(
        out,
        Print("\r\n  "),
        SetForegroundColor(palette::TEXT),
        SetAttribute(Attribute::Bold),
        Print(&c.name),
        SetAttribute(Attribute::Reset),
        Print("  "),
        SetForegroundColor(palette::MUTED),
        Print(format!("[{} subs]", c.estimated_subscribers)),
        ResetColor,
        Print("\r\n"),
    )?;
    label(out, "    ", "Top Strength")?;
    paragraph(out, "    ", &c.strength, palette::TEXT_SOFT, inner)?;
    label(out, "    ", "Top Performer")?;
    paragraph(out, "    ", &format!("\"{}\"", c.top_video_title), palette::RED_PALE, inner)?;
    paragraph(out, "    ", &c.why_it_works, palette::MUTED, inner)
}

fn render_recommendation<W: Write>(
    out: &mut W,
    rec: &Recommendation,
    width: usize,
) -> io::Result<()> {
    let stripe = impact_stripe_color(rec.impact_level);
    let inner = width.saturating_sub(4);
    queue!(
        out,
        Print("\r\n"),
        SetForegroundColor(stripe),
        Print("  ▌ "),
        SetForegroundColor(palette::TEXT),
        SetAttribute(Attribute::Bold),
        Print(&rec.title),
        SetAttribute(Attribute::Reset),
        Print("  "),
        SetForegroundColor(difficulty_badge_color(rec.difficulty)),
        Print(format!("[{}]", rec.difficulty.as_str().to_uppercase())),
        ResetColor,
        Print("\r\n"),
    )?;
    for line in wrap(&rec.description, inner) {
        queue!(
            out,
            SetForegroundColor(stripe),
            Print("  ▌ "),
            SetForegroundColor(palette::MUTED),
            Print(line),
            ResetColor,
            Print("\r\n"),
        )?;
    }
    queue!(
        out,
        SetForegroundColor(stripe),
        Print("  ▌ "),
        SetForegroundColor(palette::DIM),
        Print("Impact: "),
        SetForegroundColor(impact_label_color(rec.impact_level)),
        Print(format!("{} Priority", rec.impact_level)),
        ResetColor,
        Print("\r\n"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::sample_analysis;

    fn rendered(data: &AnalysisResult) -> String {
        let mut buf = Vec::new();
        render(&mut buf, data, 100).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_chart_keeps_input_order_and_values() {
        let data = sample_analysis();
        let rows = chart_rows(&data.competitors, 40);
        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![120000.0, 95000.0, 60000.0]);
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Pixel Archive", "Cartridge Club", "Bit Legends"]);
    }

    #[test]
    fn test_chart_does_not_resort() {
        let mut data = sample_analysis();
        data.competitors.reverse();
        let rows = chart_rows(&data.competitors, 40);
        let values: Vec<f64> = rows.iter().map(|r| r.value).collect();
        assert_eq!(values, vec![60000.0, 95000.0, 120000.0]);
        assert_eq!(rows[2].bar_len, 40);
        assert_eq!(rows[0].bar_len, 20);
    }

    #[test]
    fn test_chart_alternates_colors() {
        let rows = chart_rows(&sample_analysis().competitors, 40);
        assert_eq!(rows[0].color, palette::RED);
        assert_eq!(rows[1].color, palette::ORANGE);
        assert_eq!(rows[2].color, palette::RED);
    }

    #[test]
    fn test_chart_degenerate_values() {
        let mut data = sample_analysis();
        data.competitors[0].avg_views_per_video = 0.0;
        data.competitors[1].avg_views_per_video = f64::NAN;
        data.competitors[2].avg_views_per_video = -5.0;
        let rows = chart_rows(&data.competitors, 40);
        assert!(rows.iter().all(|r| r.bar_len == 0));
        assert!(chart_rows(&[], 40).is_empty());
    }

    #[test]
    fn test_format_k() {
        assert_eq!(format_k(120000.0), "120k");
        assert_eq!(format_k(95000.0), "95k");
        assert_eq!(format_k(1500.0), "1.5k");
        assert_eq!(format_k(0.0), "0k");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(120000.0), "120,000");
        assert_eq!(format_thousands(1234567.4), "1,234,567");
        assert_eq!(format_thousands(999.0), "999");
        assert_eq!(format_thousands(-1200.0), "-1,200");
    }

    #[test]
    fn test_colors() {
        assert_eq!(impact_stripe_color(ImpactLevel::High), palette::EMERALD);
        assert_eq!(impact_stripe_color(ImpactLevel::Medium), palette::YELLOW);
        assert_eq!(impact_stripe_color(ImpactLevel::Low), palette::BLUE);
        assert_eq!(impact_label_color(ImpactLevel::Low), palette::YELLOW_LIGHT);
        assert_eq!(difficulty_badge_color(Difficulty::Hard), palette::RED_LIGHT);
    }

    #[test]
    fn test_render_shows_exactly_the_given_content() {
        let data = sample_analysis();
        let text = rendered(&data);

        assert!(text.contains("Retro Gaming"));
        assert!(text.contains("Target Audience:"));
        assert!(text.contains("Longform retrospectives"));
        assert_eq!(text.matches(" subs]").count(), data.competitors.len());
        assert_eq!(text.matches(" Priority").count(), data.recommendations.len());
        assert_eq!(text.matches("✔ ").count(), data.winning_patterns.len());
        for c in &data.competitors {
            assert!(text.contains(&c.name));
        }
        assert!(text.contains("120,000"));
        assert!(text.contains("[MODERATE]"));
    }

    #[test]
    fn test_render_empty_lists() {
        let mut data = sample_analysis();
        data.competitors.clear();
        data.winning_patterns.clear();
        data.recommendations.clear();
        let text = rendered(&data);
        assert!(text.contains("Competitor Landscape"));
        assert_eq!(text.matches(" Priority").count(), 0);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap("a bb ccc", 4), vec!["a bb", "ccc"]);
        assert_eq!(wrap("", 10), Vec::<String>::new());
        assert_eq!(wrap("longword", 3), vec!["longword"]);
    }
}
