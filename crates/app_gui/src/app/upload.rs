//! Upload panel: drop zone, file picker, preview with overlay and controls.

use super::{UiApp, palette};
use anyhow::{Context, Result};
use cataract_core::{Overlay, PreviewView, UploadedImage, View, ViewState, select_single};
use eframe::egui::{self, Color32, RichText};
use rfd::FileDialog;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "bmp", "webp"];

impl UiApp {
    pub(super) fn render_upload_panel(&mut self, ui: &mut egui::Ui, view: &View) {
        ui.heading("Upload Eye Image");
        ui.label("Upload a clear photo of the eye (preferably with flash in a dark room)");
        ui.add_space(12.0);

        if view.upload_visible {
            self.render_drop_zone(ui);
        }
        if let Some(preview) = &view.preview {
            self.render_preview(ui, preview, view.overlay.as_ref());
        }
    }

    fn render_drop_zone(&mut self, ui: &mut egui::Ui) {
        let border = if self.drop_hover {
            palette::BLUE_400
        } else {
            palette::GRAY_300
        };
        let max_mb = self.session.config().max_upload_bytes / (1024 * 1024);
        egui::Frame::new()
            .stroke(egui::Stroke::new(2.0, border))
            .corner_radius(egui::CornerRadius::same(12))
            .inner_margin(egui::Margin::same(24))
            .show(ui, |ui| {
                ui.set_width(ui.available_width());
                ui.vertical_centered(|ui| {
                    ui.label(RichText::new("☁").size(48.0).color(palette::BLUE_400));
                    ui.label("Drag & drop your image here or click to browse");
                    ui.label(
                        RichText::new(format!("Supported formats: JPG, PNG (Max {max_mb}MB)"))
                            .small()
                            .color(palette::GRAY_500),
                    );
                    ui.add_space(8.0);
                    if ui.button("Select Image").clicked() {
                        self.pick_file();
                    }
                });
            });
    }

    fn render_preview(&mut self, ui: &mut egui::Ui, preview: &PreviewView, overlay: Option<&Overlay>) {
        let size = egui::vec2(preview.dims.width as f32, preview.dims.height as f32);
        ui.vertical_centered(|ui| {
            let (resp, painter) = ui.allocate_painter(size, egui::Sense::hover());
            let rect = resp.rect;
            match self.preview_texture(ui.ctx(), preview.image_id) {
                Some(id) => {
                    let uv = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
                    painter.image(id, rect, uv, Color32::WHITE);
                }
                None => {
                    painter.rect_filled(rect, 4.0, Color32::from_gray(40));
                }
            }
            if let Some(o) = overlay {
                let [cx, cy] = o.center();
                painter.circle_stroke(
                    rect.min + egui::vec2(cx, cy),
                    o.diameter / 2.0,
                    egui::Stroke::new(3.0, palette::rgba(o.color)),
                );
            }
            resp.on_hover_text(&preview.name);

            ui.add_space(12.0);
            ui.horizontal(|ui| {
                let analyze = &preview.analyze;
                let button = egui::Button::new(format!("🔍 {}", analyze.label));
                if ui.add_enabled(analyze.enabled, button).clicked() {
                    self.analyze();
                }
                if analyze.busy {
                    ui.spinner();
                }
                if ui.button("✖ Remove").clicked() {
                    self.remove_image();
                }
            });
        });
    }

    fn pick_file(&mut self) {
        let Some(path) = FileDialog::new()
            .add_filter("Images", IMAGE_EXTENSIONS)
            .pick_file()
        else {
            return;
        };
        match UploadedImage::from_path(&path) {
            Ok(upload) => self.accept_upload(upload),
            Err(e) => self.reject(format!("{e:#}")),
        }
    }

    /// Drops only count while the upload affordance is showing.
    pub(super) fn handle_dropped_files(&mut self, ctx: &egui::Context) {
        let (hovering, dropped) = ctx.input(|i| {
            (
                !i.raw.hovered_files.is_empty(),
                i.raw.dropped_files.clone(),
            )
        });
        let accepting = self.session.state() == ViewState::Idle;
        self.drop_hover = hovering && accepting;
        if dropped.is_empty() || !accepting {
            return;
        }
        let upload = select_single(dropped)
            .map_err(anyhow::Error::from)
            .and_then(|file| upload_from_dropped(&file));
        match upload {
            Ok(upload) => self.accept_upload(upload),
            Err(e) => self.reject(format!("{e:#}")),
        }
    }

    fn accept_upload(&mut self, upload: UploadedImage) {
        if let Err(e) = self.session.upload(upload) {
            self.reject(e.to_string());
        }
    }

    fn reject(&mut self, message: String) {
        tracing::warn!("Upload rejected: {message}");
        self.rejection = Some(message);
    }

    pub(super) fn render_rejection(&mut self, ctx: &egui::Context) {
        let Some(message) = &self.rejection else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new("Upload rejected")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_TOP, [0.0, 80.0])
            .show(ctx, |ui| {
                ui.label(message);
                ui.add_space(8.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed {
            self.rejection = None;
        }
    }
}

/// Builds an upload from a dropped file. Web drops carry bytes, native drops
/// carry a path.
fn upload_from_dropped(file: &egui::DroppedFile) -> Result<UploadedImage> {
    let mime = Some(file.mime.as_str()).filter(|m| !m.is_empty());
    let bytes = match (&file.bytes, &file.path) {
        (Some(bytes), _) => bytes.to_vec(),
        (None, Some(path)) => {
            std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?
        }
        (None, None) => anyhow::bail!("The dropped item is not a file"),
    };
    let name = if file.name.is_empty() {
        file.path
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "dropped image".to_string())
    } else {
        file.name.clone()
    };
    Ok(UploadedImage::new(name, mime, bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn web_drop_uses_bytes_and_reported_mime() -> Result<()> {
        let file = egui::DroppedFile {
            name: "eye.bin".to_string(),
            mime: "image/png".to_string(),
            bytes: Some(Arc::from(vec![1u8, 2, 3])),
            ..Default::default()
        };
        let upload = upload_from_dropped(&file)?;
        assert_eq!(upload.name, "eye.bin");
        assert_eq!(upload.mime, "image/png");
        assert_eq!(upload.bytes, vec![1, 2, 3]);
        Ok(())
    }

    #[test]
    fn drop_without_bytes_or_path_is_an_error() {
        let file = egui::DroppedFile::default();
        assert!(upload_from_dropped(&file).is_err());
    }

    #[test]
    fn missing_mime_falls_back_to_extension() -> Result<()> {
        let file = egui::DroppedFile {
            name: "eye.jpeg".to_string(),
            bytes: Some(Arc::from(Vec::<u8>::new())),
            ..Default::default()
        };
        assert_eq!(upload_from_dropped(&file)?.mime, "image/jpeg");
        Ok(())
    }
}
