use super::palette;
use cataract_core::{ResultView, ResultsRegion, present::DetailRow};
use eframe::egui::{self, RichText};

pub(super) fn render_results_panel(ui: &mut egui::Ui, results: &ResultsRegion) {
    ui.heading("Analysis Results");
    ui.add_space(12.0);
    match results {
        ResultsRegion::Placeholder => render_placeholder(ui),
        ResultsRegion::Result(view) => {
            render_card(ui, view);
            ui.add_space(12.0);
            render_details(ui, view);
            ui.add_space(12.0);
            render_disclaimer(ui);
        }
    }
}

fn render_placeholder(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(32.0);
        ui.label(RichText::new("👁").size(48.0).color(palette::BLUE_400));
        ui.add_space(12.0);
        ui.label(RichText::new("No Image Analyzed").size(18.0).strong());
        ui.label(
            RichText::new("Upload an eye image to check for potential cataract symptoms")
                .color(palette::GRAY_500),
        );
        ui.add_space(32.0);
    });
}

fn render_card(ui: &mut egui::Ui, view: &ResultView) {
    let (fill, mut border) = palette::card(view.theme);
    if view.pulse {
        // Slow breathing border on detections.
        let t = ui.input(|i| i.time) as f32;
        let strength = 0.5 + 0.5 * (t * std::f32::consts::PI).sin();
        border = border.lerp_to_gamma(palette::tone(view.theme.tone()), strength);
        ui.ctx().request_repaint();
    }
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(1.5, border))
        .corner_radius(egui::CornerRadius::same(12))
        .inner_margin(egui::Margin::same(16))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(palette::glyph(view.theme.icon()))
                        .size(28.0)
                        .color(palette::tone(view.theme.tone())),
                );
                ui.vertical(|ui| {
                    ui.label(RichText::new(view.title).size(18.0).strong());
                    ui.label(&view.description);
                });
            });
        });
}

fn render_details(ui: &mut egui::Ui, view: &ResultView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.label(RichText::new("Detailed Analysis").strong());
        ui.add_space(6.0);
        for row in &view.details {
            render_detail_row(ui, row);
            ui.add_space(8.0);
        }
    });
}

fn render_detail_row(ui: &mut egui::Ui, row: &DetailRow) {
    ui.horizontal(|ui| {
        ui.label(
            RichText::new(palette::glyph(row.icon))
                .size(18.0)
                .color(palette::tone(row.icon_tone)),
        );
        ui.vertical(|ui| {
            ui.label(RichText::new(row.title).strong());
            ui.horizontal_wrapped(|ui| {
                ui.label(
                    RichText::new(&row.value)
                        .strong()
                        .color(palette::tone_text(row.value_tone)),
                );
                ui.label(RichText::new("|").color(palette::GRAY_300));
                ui.label(RichText::new(row.description).small().color(palette::GRAY_500));
            });
        });
    });
}

fn render_disclaimer(ui: &mut egui::Ui) {
    egui::Frame::new()
        .fill(palette::YELLOW_50)
        .stroke(egui::Stroke::new(1.0, palette::YELLOW_400))
        .inner_margin(egui::Margin::same(12))
        .show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                ui.label(RichText::new("❗").color(palette::YELLOW_400));
                ui.label(
                    RichText::new("Disclaimer:")
                        .strong()
                        .color(palette::YELLOW_700),
                );
                ui.label(
                    RichText::new(
                        "This tool provides preliminary information only and is not a \
                         substitute for professional medical advice. Always consult an eye \
                         care specialist for diagnosis.",
                    )
                    .small()
                    .color(palette::YELLOW_700),
                );
            });
        });
}
