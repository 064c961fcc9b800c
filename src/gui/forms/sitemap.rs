// src/gui/forms/sitemap.rs
use eframe::egui;

use crate::audit::{AuditRequest, ValidationError};
use crate::config::options::{AuditMode, CrawlDepth, CrawlSpeed};
use crate::config::state::AppState;

use super::{combo, Form, FormEvent};

pub struct SitemapForm;
pub static FORM: SitemapForm = SitemapForm;

impl Form for SitemapForm {
    fn kind(&self) -> AuditMode { AuditMode::Sitemap }
    fn title(&self) -> &'static str { "Sitemap" }
    fn subtitle(&self) -> &'static str { "XML sitemap scan" }

    fn draw(&self, ui: &mut egui::Ui, state: &mut AppState) -> FormEvent {
        ui.label("Sitemap URL");
        ui.add(
            egui::TextEdit::singleline(&mut state.gui.sitemap_url)
                .hint_text("https://example.com/sitemap.xml")
                .desired_width(f32::INFINITY),
        );

        ui.add_space(6.0);
        ui.horizontal(|ui| {
            combo(
                ui,
                "crawl-depth",
                "Crawl Depth",
                &mut state.options.audit.crawl_depth,
                CrawlDepth::ALL,
                CrawlDepth::label,
            );
            ui.add_space(12.0);
            combo(
                ui,
                "crawl-speed",
                "Crawl Speed",
                &mut state.options.audit.crawl_speed,
                CrawlSpeed::ALL,
                CrawlSpeed::label,
            );
        });

        FormEvent::None
    }

    fn validate(&self, state: &AppState) -> Result<(), ValidationError> {
        if state.gui.sitemap_url.is_empty() {
            return Err(ValidationError::MissingSitemapUrl);
        }
        Ok(())
    }

    fn request(&self, state: &AppState) -> AuditRequest {
        AuditRequest::Sitemap {
            sitemap_url: state.gui.sitemap_url.clone(),
            crawl_depth: state.options.audit.crawl_depth,
            crawl_speed: state.options.audit.crawl_speed,
        }
    }
}
