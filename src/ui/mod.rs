//! User interface components and rendering logic for the infinite canvas.
//!
//! # Module Organization
//!
//! - `state` - The main [`CanvasApp`] and its transient canvas state
//! - `canvas` - Pointer handling: drag panning, glide, hover and click
//! - `rendering` - Drawing the background and item replicas

mod canvas;
mod rendering;
mod state;

#[cfg(test)]
mod tests;

pub use state::{CanvasApp, CanvasState};

use crate::constants::{DIALOG_PREVIEW_HEIGHT, DIALOG_WIDTH};
use eframe::egui;

/// Storage key under which preferences are persisted.
pub(crate) const APP_STATE_KEY: &str = "app_state";

impl eframe::App for CanvasApp {
    /// Persist UI preferences between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string(APP_STATE_KEY, json);
            }
            Err(err) => {
                log::error!("Failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.show(ctx);
    }
}

impl CanvasApp {
    /// Lays out one frame: toolbar, canvas and, when open, the detail dialog.
    ///
    /// Split from [`eframe::App::update`] so frames can be driven headless.
    pub fn show(&mut self, ctx: &egui::Context) {
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        self.handle_dialog_keys(ctx);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default()
            .frame(egui::Frame::NONE)
            .show(ctx, |ui| {
                self.draw_canvas(ui);
            });

        self.draw_item_dialog(ctx);
    }

    /// Escape dismisses the detail dialog.
    fn handle_dialog_keys(&mut self, ctx: &egui::Context) {
        if self.plane.interaction().dialog().open
            && ctx.input(|i| i.key_pressed(egui::Key::Escape))
        {
            self.plane.close_dialog();
        }
    }

    /// Draws the toolbar with view controls and a status read-out.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            if ui.button("Recenter").clicked() {
                self.plane.recenter();
            }

            ui.separator();

            ui.checkbox(&mut self.config.momentum, "Momentum");
            ui.checkbox(&mut self.dark_mode, "Dark mode");

            ui.separator();

            let offset = self.plane.offset();
            ui.label(format!("Offset: ({:.0}, {:.0})", offset.x, offset.y));
            ui.label(format!(
                "Items: {}  Raised: {}",
                self.plane.items().len(),
                self.plane.interaction().front_len()
            ));
        });
    }

    /// Shows the detail dialog for the last activated item.
    fn draw_item_dialog(&mut self, ctx: &egui::Context) {
        let Some(item) = self.plane.dialog_item().cloned() else {
            return;
        };

        let mut open = true;
        let assets = &mut self.assets;
        egui::Window::new(item.label.as_str())
            .id(egui::Id::new("item_detail_dialog"))
            .open(&mut open)
            .collapsible(false)
            .resizable(false)
            .default_width(DIALOG_WIDTH)
            .anchor(egui::Align2::CENTER_CENTER, egui::vec2(0.0, 0.0))
            .show(ctx, |ui| {
                ui.label(format!("Type: {}", item.kind.name()));
                ui.label(format!(
                    "Size: {} x {}",
                    item.size.0.round() as i64,
                    item.size.1.round() as i64
                ));
                ui.label(format!("Source: {}", item.source));
                if let Some(color) = &item.color {
                    ui.label(format!("Color: {color}"));
                }

                ui.add_space(8.0);
                match assets.texture(ctx, &item.source) {
                    Some(texture) => {
                        ui.add(
                            egui::Image::new(texture)
                                .max_height(DIALOG_PREVIEW_HEIGHT)
                                .max_width(ui.available_width())
                                .corner_radius(6.0),
                        );
                    }
                    None => {
                        ui.weak("Image not available");
                    }
                }
            });

        if !open {
            self.plane.close_dialog();
        }
    }
}
