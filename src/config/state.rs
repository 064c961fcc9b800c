// src/config/state.rs
use super::options::AppOptions;

/// View state proper: form fields, the inline error, panel flags.
/// One record so transitions stay inspectable; nothing here survives
/// the session.
#[derive(Clone, Debug)]
pub struct GuiState {
    // Per-mode form fields. Switching tabs leaves the others untouched.
    pub url: String,
    pub keywords: String,
    pub bulk_urls: String,
    pub sitemap_url: String,

    /// Display name of the last accepted CSV upload ("" = none).
    pub uploaded_file_name: String,

    /// Inline error message; cleared at the start of every trigger.
    pub error: Option<String>,

    /// Detail panel expansion, independent of analysis status.
    pub expanded_technical: bool,
    pub expanded_recommendations: bool,

    /// Active tab index into router::FORMS
    pub current_form_index: usize,

    pub last_browse_dir: String,
    pub window_w: u32,
    pub window_h: u32,
}

impl Default for GuiState {
    fn default() -> Self {
        Self {
            url: s!(),
            keywords: s!(),
            bulk_urls: s!(),
            sitemap_url: s!(),
            uploaded_file_name: s!(),
            error: None,
            expanded_technical: true,
            expanded_recommendations: false,
            current_form_index: 0,
            last_browse_dir: s!(),
            window_w: 1100,
            window_h: 760,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub options: AppOptions,
    pub gui: GuiState,
}
