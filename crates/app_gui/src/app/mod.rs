//! Main window. Every frame draws the [`View`] produced by the core session;
//! the only state kept here is the preview texture and transient UI flags.

mod about;
mod palette;
mod results;
mod upload;

use cataract_core::{AppConfig, Session, SimulatedAnalyzer, View};
use eframe::{App, Frame, egui};
use std::time::Instant;

pub struct UiApp {
    session: Session,
    analyzer: SimulatedAnalyzer,
    /// Texture of the current preview, keyed by the session's image id.
    preview_texture: Option<(u64, egui::TextureHandle)>,
    /// Message of the last rejected upload, shown until dismissed.
    rejection: Option<String>,
    drop_hover: bool,
    app_version: &'static str,
}

impl UiApp {
    pub fn new(config: AppConfig) -> Self {
        tracing::info!(
            "Starting with preview box {}x{}, analysis delay {} ms",
            config.preview.max_width,
            config.preview.max_height,
            config.analysis_delay_ms
        );
        Self {
            session: Session::new(config),
            analyzer: SimulatedAnalyzer::from_entropy(),
            preview_texture: None,
            rejection: None,
            drop_hover: false,
            app_version: env!("CATARACT_EYE_VERSION"),
        }
    }

    fn analyze(&mut self) {
        if let Err(e) = self.session.start_analysis(Instant::now()) {
            tracing::warn!("Analyze ignored: {e}");
        }
    }

    fn remove_image(&mut self) {
        self.session.reset();
        self.preview_texture = None;
    }

    fn preview_texture(&mut self, ctx: &egui::Context, image_id: u64) -> Option<egui::TextureId> {
        if let Some((id, tex)) = &self.preview_texture
            && *id == image_id
        {
            return Some(tex.id());
        }
        let color = palette::color_image(self.session.preview_pixels()?);
        let tex = ctx.load_texture(
            format!("preview:{image_id}"),
            color,
            egui::TextureOptions::LINEAR,
        );
        let id = tex.id();
        self.preview_texture = Some((image_id, tex));
        Some(id)
    }

    fn render_main(&mut self, ui: &mut egui::Ui, view: &View) {
        about::header(ui);
        ui.add_space(16.0);
        ui.columns(2, |cols| {
            egui::Frame::group(cols[0].style()).show(&mut cols[0], |ui| {
                self.render_upload_panel(ui, view);
            });
            egui::Frame::group(cols[1].style()).show(&mut cols[1], |ui| {
                results::render_results_panel(ui, &view.results);
            });
        });
        ui.add_space(24.0);
        about::about_section(ui);
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        self.handle_dropped_files(ctx);

        let now = Instant::now();
        self.session.poll(now, &mut self.analyzer);
        if let Some(remaining) = self.session.time_until_due(now) {
            ctx.request_repaint_after(remaining);
        }

        let view = self.session.view();

        egui::TopBottomPanel::bottom("footer").show(ctx, |ui| {
            about::footer(ui, self.app_version);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false; 2])
                .show(ui, |ui| self.render_main(ui, &view));
        });

        self.render_rejection(ctx);
    }
}
