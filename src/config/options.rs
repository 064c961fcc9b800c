// src/config/options.rs
use std::ffi::OsString;
use std::path::{Path, PathBuf};

use super::consts::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppOptions {
    pub audit: AuditOptions,
    pub export: ExportOptions,
}

impl Default for AppOptions {
    fn default() -> Self {
        Self {
            audit: AuditOptions::default(),
            export: ExportOptions::default(),
        }
    }
}

/// Which of the three input forms is active.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AuditMode {
    Single,
    Bulk,
    Sitemap,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisDepth {
    #[default]
    Basic,
    Advanced,
    Technical,
}

impl AnalysisDepth {
    pub const ALL: &'static [Self] = &[Self::Basic, Self::Advanced, Self::Technical];
    pub fn label(&self) -> &'static str {
        match self {
            Self::Basic => "Basic Analysis",
            Self::Advanced => "Advanced Analysis",
            Self::Technical => "Technical SEO",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Language {
    #[default]
    English,
    Spanish,
    French,
}

impl Language {
    pub const ALL: &'static [Self] = &[Self::English, Self::Spanish, Self::French];
    pub fn label(&self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum AnalysisType {
    #[default]
    Full,
    Quick,
}

impl AnalysisType {
    pub const ALL: &'static [Self] = &[Self::Full, Self::Quick];
    pub fn label(&self) -> &'static str {
        match self {
            Self::Full => "Full Analysis",
            Self::Quick => "Quick Scan",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrawlDepth {
    #[default]
    HomepageOnly,
    DirectLinks,
    Deep,
}

impl CrawlDepth {
    pub const ALL: &'static [Self] = &[Self::HomepageOnly, Self::DirectLinks, Self::Deep];
    pub fn label(&self) -> &'static str {
        match self {
            Self::HomepageOnly => "Level 1 (Homepage only)",
            Self::DirectLinks => "Level 2 (Homepage + Direct Links)",
            Self::Deep => "Level 3 (Deep Crawl)",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum CrawlSpeed {
    #[default]
    Normal,
    Slow,
    Fast,
}

impl CrawlSpeed {
    pub const ALL: &'static [Self] = &[Self::Normal, Self::Slow, Self::Fast];
    pub fn label(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Slow => "Slow (Server Friendly)",
            Self::Fast => "Fast (High Performance)",
        }
    }
}

/// Audit knobs beyond the raw form fields. All tabs keep their selections
/// independently; only the active mode's knobs go into a request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuditOptions {
    pub mode: AuditMode,
    pub depth: AnalysisDepth,
    pub language: Language,
    pub analysis_type: AnalysisType,
    pub crawl_depth: CrawlDepth,
    pub crawl_speed: CrawlSpeed,
}

impl Default for AuditOptions {
    fn default() -> Self {
        Self {
            mode: AuditMode::Single,
            depth: AnalysisDepth::default(),
            language: Language::default(),
            analysis_type: AnalysisType::default(),
            crawl_depth: CrawlDepth::default(),
            crawl_speed: CrawlSpeed::default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Pdf,
}

impl ExportFormat {
    pub fn ext(&self) -> &'static str {
        match self { ExportFormat::Csv => "csv", ExportFormat::Pdf => "pdf" }
    }
    pub fn label(&self) -> &'static str {
        match self { ExportFormat::Csv => "CSV", ExportFormat::Pdf => "PDF" }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExportOptions {
    pub format: ExportFormat,
    out_path: OutputPath,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            format: ExportFormat::Csv,
            out_path: OutputPath::default(),
        }
    }
}

impl ExportOptions {
    pub fn out_path(&self) -> PathBuf {
        let mut path = self.out_path.dir.clone();
        let stem = self.out_path.file_stem.to_string_lossy();
        let ext = self.format.ext();
        path.push(join!(stem, ".", ext));
        path
    }

    /// Parse GUI text into dir + stem. Ignores pasted extension; format controls it.
    pub fn set_path(&mut self, text: &str) {
        let s = text.trim();
        let p = Path::new(s);
        if let Some(parent) = p.parent() {
            self.out_path.dir = parent.to_path_buf();
        }
        if let Some(stem) = p.file_stem() {
            self.out_path.file_stem = stem.to_os_string();
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutputPath {
    dir: PathBuf,
    file_stem: OsString, // without extension
}

impl Default for OutputPath {
    fn default() -> Self {
        Self {
            dir: PathBuf::from(DEFAULT_OUT_DIR),
            file_stem: OsString::from(DEFAULT_REPORT_STEM),
        }
    }
}
