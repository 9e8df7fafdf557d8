//! Input form. Title, URL prompt with presets, error panel and feature blurbs.

use super::palette;
use crate::domain::DomainError;
use crossterm::queue;
use crossterm::style::{Attribute, Print, ResetColor, SetAttribute, SetForegroundColor};
use inquire::{InquireError, Select, Text};
use std::fmt;
use std::io::{self, Write};

pub const URL_PLACEHOLDER: &str = "Paste YouTube Channel or Video URL...";

/// A literal shortcut that pre-fills the URL field. Not validated.
#[derive(Debug, PartialEq, Eq)]
pub struct Preset {
    pub label: &'static str,
    pub url: &'static str,
}

pub const PRESETS: [Preset; 2] = [
    Preset {
        label: "Sample Channel",
        url: "https://www.youtube.com/channel/UCZiMbBhKff7TunQTACvOywA",
    },
    Preset {
        label: "Lofi Girl",
        url: "https://www.youtube.com/watch?v=jfKfPfyJRdk",
    },
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Competitor Recon",
        "Instantly find top creators in your niche and see what they're doing right.",
    ),
    (
        "Content Gaps",
        "Identify high-demand topics that your competitors are missing.",
    ),
    (
        "Growth Strategy",
        "Get an actionable checklist to improve your thumbnails, titles, and hooks.",
    ),
];

#[derive(Debug, PartialEq, Eq)]
pub enum FormChoice {
    EnterUrl,
    Preset(&'static Preset),
    Quit,
}

impl fmt::Display for FormChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormChoice::EnterUrl => f.write_str("Analyze a URL"),
            FormChoice::Preset(p) => write!(f, "try: {}", p.label),
            FormChoice::Quit => f.write_str("Quit"),
        }
    }
}

pub fn choices() -> Vec<FormChoice> {
    let mut options = vec![FormChoice::EnterUrl];
    options.extend(PRESETS.iter().map(FormChoice::Preset));
    options.push(FormChoice::Quit);
    options
}

/// Render the form screen. The error panel shows when `error` is set; the
/// feature blurbs only when no request is outstanding.
pub fn render<W: Write>(out: &mut W, is_loading: bool, error: Option<&str>) -> io::Result<()> {
    queue!(
        out,
        Print("\r\n"),
        SetForegroundColor(palette::ORANGE),
        SetAttribute(Attribute::Bold),
        Print("NicheNavigator AI"),
        SetAttribute(Attribute::Reset),
        Print("\r\n"),
        SetForegroundColor(palette::MUTED),
        Print(
            "Uncover hidden opportunities, analyze competitors, and dominate your YouTube niche with AI-driven insights."
        ),
        ResetColor,
        Print("\r\n\r\n"),
    )?;

    if let Some(message) = error {
        queue!(
            out,
            SetForegroundColor(palette::RED_PALE),
            Print("  ⚠ "),
            Print(message),
            ResetColor,
            Print("\r\n\r\n"),
        )?;
    }

    if !is_loading {
        for (title, blurb) in FEATURES {
            queue!(
                out,
                SetForegroundColor(palette::TEXT_SOFT),
                SetAttribute(Attribute::Bold),
                Print(format!("  {}", title)),
                SetAttribute(Attribute::Reset),
                SetForegroundColor(palette::DIM),
                Print(format!("  {}", blurb)),
                ResetColor,
                Print("\r\n"),
            )?;
        }
        queue!(out, Print("\r\n"))?;
    }
    out.flush()
}

/// What the URL prompt resolved to.
#[derive(Debug, PartialEq, Eq)]
pub enum UrlOutcome {
    Submit(String),
    /// Esc: back to the menu.
    Back,
    /// Ctrl-C: end the session.
    Quit,
}

/// Map the menu answer. Esc and Ctrl-C both end the session (`None`).
pub fn on_choice_prompt(
    answer: Result<FormChoice, InquireError>,
) -> Result<Option<FormChoice>, DomainError> {
    match answer {
        Ok(choice) => Ok(Some(choice)),
        Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(None),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Map the URL answer.
pub fn on_url_prompt(answer: Result<String, InquireError>) -> Result<UrlOutcome, DomainError> {
    match answer {
        Ok(url) => Ok(UrlOutcome::Submit(url)),
        Err(InquireError::OperationCanceled) => Ok(UrlOutcome::Back),
        Err(InquireError::OperationInterrupted) => Ok(UrlOutcome::Quit),
        Err(e) => Err(DomainError::Ui(e.to_string())),
    }
}

/// Ask what to analyze. `None` when the user cancels.
pub fn prompt_choice() -> Result<Option<FormChoice>, DomainError> {
    on_choice_prompt(Select::new("What would you like to analyze?", choices()).prompt())
}

/// Prompt for the URL, pre-filled with `initial` when a preset was picked.
pub fn prompt_url(initial: Option<&str>) -> Result<UrlOutcome, DomainError> {
    let mut prompt = Text::new("YouTube URL:").with_placeholder(URL_PLACEHOLDER);
    if let Some(url) = initial {
        prompt = prompt.with_initial_value(url);
    }
    on_url_prompt(prompt.prompt())
}
