pub mod banner;
pub mod dashboard;
pub mod form;
pub mod palette;
pub mod progress;
pub mod tui;

/// Applies the theme for all subsequent inquire prompts. The banner is drawn
/// by each form screen. Call once at startup (e.g. in main after tracing init).
pub fn init_ui() {
    tui::apply_theme();
}
