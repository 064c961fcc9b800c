// src/gui/components/details.rs
use eframe::egui::{self, Color32, RichText};

use crate::gui::app::App;

const TECHNICAL: &[(&str, &[&str])] = &[
    ("Meta Information", &[
        "Title Tag: Optimize your title length (currently 45 characters)",
        "Meta Description: Add more relevant keywords",
        "Canonical URL: Properly implemented",
    ]),
    ("Content Analysis", &[
        "Content Length: 1,200 words (Good)",
        "Keyword Density: Primary keyword appears 12 times (2.1%)",
        "Readability Score: 65/100 (Intermediate)",
    ]),
    ("Technical Factors", &[
        "Page Load Speed: 2.3s (Desktop), 3.1s (Mobile)",
        "Mobile Responsiveness: Fully Responsive",
        "SSL Certificate: Valid and Secure",
    ]),
];

const HIGH_PRIORITY: &[&str] = &[
    "Optimize meta description with target keywords",
    "Add alt text to 3 missing images",
    "Improve mobile page load speed",
];

const OPPORTUNITIES: &[&str] = &[
    "Add more internal links to related content",
    "Implement schema markup for better rich snippets",
    "Consider adding FAQ section for featured snippets",
];

/// Collapsible section header. Each panel carries its own flag, so one
/// toggling never moves the other.
fn section(
    ui: &mut egui::Ui,
    title: &str,
    open: &mut bool,
    body: impl FnOnce(&mut egui::Ui),
) {
    let arrow = if *open { "⏷" } else { "⏵" };
    if ui
        .selectable_label(false, RichText::new(format!("{arrow} {title}")).strong())
        .clicked()
    {
        *open = !*open;
        logd!("UI: section '{}' {}", title, if *open { "expanded" } else { "collapsed" });
    }
    if *open {
        ui.indent(title, body);
    }
}

fn bullet_group(ui: &mut egui::Ui, heading: &str, lines: &[&str], color: Option<Color32>) {
    match color {
        Some(c) => { ui.label(RichText::new(heading).color(c).strong()); }
        None => { ui.strong(heading); }
    }
    for line in lines {
        ui.weak(format!("• {line}"));
    }
    ui.add_space(4.0);
}

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.group(|ui| {
        ui.set_width(ui.available_width());
        ui.strong("Analysis Details");
        ui.weak("Comprehensive SEO analysis results");
        ui.separator();

        section(ui, "Technical SEO", &mut app.state.gui.expanded_technical, |ui| {
            for (heading, lines) in TECHNICAL {
                bullet_group(ui, heading, lines, None);
            }
        });

        ui.add_space(4.0);

        section(
            ui,
            "Recommendations",
            &mut app.state.gui.expanded_recommendations,
            |ui| {
                bullet_group(
                    ui,
                    "High Priority",
                    HIGH_PRIORITY,
                    Some(Color32::from_rgb(202, 138, 4)),
                );
                bullet_group(
                    ui,
                    "Opportunities",
                    OPPORTUNITIES,
                    Some(Color32::from_rgb(59, 130, 246)),
                );
            },
        );
    });
}
