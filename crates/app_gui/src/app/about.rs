//! Static page content: header, information cards and footer.

use super::palette;
use eframe::egui::{self, Color32, RichText};

const SYMPTOMS: &[&str] = &[
    "Clouded or blurred vision",
    "Difficulty with night vision",
    "Sensitivity to light and glare",
    "Fading or yellowing of colors",
];

pub(super) fn header(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add_space(8.0);
        ui.label(
            RichText::new("CataractEye")
                .size(32.0)
                .strong()
                .color(palette::BLUE_800),
        );
        ui.label("A simple tool to help detect potential cataract symptoms from eye images.");
        ui.label(
            RichText::new(
                "This is for educational purposes only. Always consult an ophthalmologist.",
            )
            .small()
            .color(palette::GRAY_500),
        );
    });
}

pub(super) fn about_section(ui: &mut egui::Ui) {
    ui.heading("About Cataracts");
    ui.add_space(8.0);
    ui.columns(3, |cols| {
        info_card(&mut cols[0], Color32::from_rgb(0xef, 0xf6, 0xff), "ℹ", "What are Cataracts?", |ui| {
            ui.label(
                "A cataract is a clouding of the eye's natural lens, which lies behind the \
                 iris and the pupil. It's the most common cause of vision loss in people \
                 over 40.",
            );
        });
        info_card(&mut cols[1], Color32::from_rgb(0xf0, 0xfd, 0xf4), "☰", "Common Symptoms", |ui| {
            for symptom in SYMPTOMS {
                ui.label(format!("✔ {symptom}"));
            }
        });
        info_card(&mut cols[2], Color32::from_rgb(0xfa, 0xf5, 0xff), "⚕", "When to See a Doctor", |ui| {
            ui.label(
                "If you experience any vision changes like blurred vision, glare, or \
                 difficulty seeing at night, schedule an appointment with an \
                 ophthalmologist for a comprehensive eye exam.",
            );
        });
    });
}

fn info_card(
    ui: &mut egui::Ui,
    fill: Color32,
    icon: &str,
    title: &str,
    body: impl FnOnce(&mut egui::Ui),
) {
    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::same(14))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(RichText::new(icon).size(22.0));
            ui.label(RichText::new(title).strong());
            ui.add_space(4.0);
            body(ui);
        });
}

pub(super) fn footer(ui: &mut egui::Ui, version: &str) {
    ui.vertical_centered(|ui| {
        ui.label(
            RichText::new("This is a demonstration tool for educational purposes only")
                .small()
                .color(palette::GRAY_500),
        );
        ui.label(
            RichText::new(format!("© 2024 CataractEye · v{version}"))
                .small()
                .color(palette::GRAY_500),
        );
    });
}
