//! Implements InputPort. Inquire-based session loop.
//!
//! Form → spinner while the request is outstanding → dashboard → "Analyze Another".

use super::{banner, dashboard, form, palette, progress};
use crate::domain::{DomainError, View};
use crate::ports::InputPort;
use crate::usecases::AnalysisService;
use async_trait::async_trait;
use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use inquire::ui::{Attributes, Color, RenderConfig, StyleSheet, Styled};
use inquire::{InquireError, Select};
use std::io::{self, Write, stdout};
use std::sync::Arc;

const ANALYZE_ANOTHER: &str = "Analyze Another";
const QUIT: &str = "Quit";

/// Applies the red/orange theme to every inquire prompt.
pub fn apply_theme() {
    let accent = |c: crossterm::style::Color| match c {
        crossterm::style::Color::Rgb { r, g, b } => Color::Rgb { r, g, b },
        _ => Color::LightRed,
    };
    let mut config = RenderConfig::default();
    config.prompt_prefix = Styled::new("▶").with_fg(accent(palette::RED));
    config.highlighted_option_prefix = Styled::new("➤").with_fg(accent(palette::ORANGE));
    config.answer = StyleSheet::new()
        .with_fg(accent(palette::ORANGE))
        .with_attr(Attributes::BOLD);
    config.placeholder = StyleSheet::new().with_fg(accent(palette::DIM));
    inquire::set_global_render_config(config);
}

fn terminal_width() -> usize {
    crossterm::terminal::size()
        .map(|(w, _)| usize::from(w))
        .unwrap_or(100)
        .clamp(60, 120)
}

fn ui_err(e: io::Error) -> DomainError {
    DomainError::Ui(e.to_string())
}

/// Clear the terminal and move to the top-left corner.
fn clear<W: Write>(out: &mut W) -> io::Result<()> {
    queue!(out, Clear(ClearType::All), MoveTo(0, 0))
}

/// A fresh form screen: clear, banner, then the form itself.
pub fn render_form_screen<W: Write>(
    out: &mut W,
    is_loading: bool,
    error: Option<&str>,
) -> io::Result<()> {
    clear(out)?;
    banner::render_welcome(out)?;
    form::render(out, is_loading, error)
}

/// TUI adapter. Inquire prompts and crossterm rendering.
pub struct TuiInputPort {
    service: Arc<AnalysisService>,
}

impl TuiInputPort {
    pub fn new(service: Arc<AnalysisService>) -> Self {
        Self { service }
    }

    /// One pass over the form. Returns false when the user quits.
    async fn form_step(
        &self,
        is_loading: bool,
        error: Option<String>,
    ) -> Result<bool, DomainError> {
        let mut out = stdout();
        render_form_screen(&mut out, is_loading, error.as_deref()).map_err(ui_err)?;
        out.flush().map_err(ui_err)?;

        let initial = match form::prompt_choice()? {
            None | Some(form::FormChoice::Quit) => return Ok(false),
            Some(form::FormChoice::EnterUrl) => None,
            Some(form::FormChoice::Preset(preset)) => Some(preset.url),
        };
        let url = match form::prompt_url(initial)? {
            form::UrlOutcome::Submit(url) => url,
            form::UrlOutcome::Back => return Ok(true),
            form::UrlOutcome::Quit => return Ok(false),
        };
        if url.trim().is_empty() {
            return Ok(true);
        }

        // Form stays up without blurbs or prompt while the request is outstanding.
        render_form_screen(&mut out, true, None).map_err(ui_err)?;
        out.flush().map_err(ui_err)?;
        let spinner = progress::analysis_spinner(url.trim());
        let outcome = self.service.submit(&url).await;
        progress::finish(spinner, outcome);
        Ok(true)
    }

    /// Show the report. Returns false when the user quits.
    fn dashboard_step(&self) -> Result<bool, DomainError> {
        let state = self.service.snapshot();
        let View::Dashboard(result) = state.view() else {
            return Ok(true);
        };

        let mut out = stdout();
        let width = terminal_width();
        clear(&mut out).map_err(ui_err)?;
        dashboard::render_report_header(&mut out, width).map_err(ui_err)?;
        dashboard::render(&mut out, result, width).map_err(ui_err)?;
        out.flush().map_err(ui_err)?;

        match Select::new("Next:", vec![ANALYZE_ANOTHER, QUIT]).prompt() {
            Ok(ANALYZE_ANOTHER) => {
                self.service.reset();
                Ok(true)
            }
            Ok(_) => Ok(false),
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => Ok(false),
            Err(e) => Err(DomainError::Ui(e.to_string())),
        }
    }
}

#[async_trait]
impl InputPort for TuiInputPort {
    async fn run(&self) -> Result<(), DomainError> {
        loop {
            let state = self.service.snapshot();
            let keep_going = match state.view() {
                View::Dashboard(_) => self.dashboard_step()?,
                View::Form { is_loading, error } => {
                    let error = error.map(str::to_string);
                    self.form_step(is_loading, error).await?
                }
            };
            if !keep_going {
                return Ok(());
            }
        }
    }
}
