//! Canvas interaction functionality.
//!
//! This module turns egui pointer input into plane operations: primary-button
//! drags pan the plane, clicks activate the top-most replica, and hovering
//! tracks the replica under the cursor.

use super::state::CanvasApp;
use eframe::egui;

impl CanvasApp {
    /// Allocates the canvas, handles its input and paints it.
    ///
    /// # Arguments
    ///
    /// * `ui` - The egui UI to draw into; the canvas fills the available space
    pub fn draw_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) =
            ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
        let (dt, now) = ui.input(|i| (i.stable_dt, i.time));

        self.handle_canvas_drag(&response, dt, now);
        self.handle_glide(ui, dt);
        self.handle_item_hover(ui, &response);
        self.handle_item_click(&response);

        self.render_canvas(ui.ctx(), &painter, response.rect);
    }

    /// Converts a screen position to plane space (relative to the canvas origin).
    pub fn screen_to_plane(&self, canvas_rect: egui::Rect, screen_pos: egui::Pos2) -> egui::Pos2 {
        (screen_pos - canvas_rect.min).to_pos2()
    }

    /// Pans the plane while the primary button drags, and wraps on release.
    ///
    /// # Arguments
    ///
    /// * `response` - The response from the canvas widget
    /// * `dt` - Frame time in seconds, used for release velocity
    /// * `now` - Input time in seconds, used to spot a pointer held still before release
    pub fn handle_canvas_drag(&mut self, response: &egui::Response, dt: f32, now: f64) {
        let dragging = response.dragged_by(egui::PointerButton::Primary);
        if dragging {
            if !self.canvas.is_dragging {
                self.canvas.is_dragging = true;
                self.plane.begin_drag();
            }
            self.plane.drag(response.drag_delta(), dt, now);
        }

        if self.canvas.is_dragging && (response.drag_stopped() || !dragging) {
            self.canvas.is_dragging = false;
            if self.plane.release_drag(self.config.momentum, now) {
                log::debug!("Glide started");
            }
        }
    }

    /// Advances a released drag's glide and keeps frames coming while it moves.
    fn handle_glide(&mut self, ui: &egui::Ui, dt: f32) {
        if self.canvas.is_dragging {
            return;
        }
        if self.plane.advance_glide(dt) {
            ui.ctx().request_repaint();
        }
    }

    /// Tracks the replica under the pointer and sets the cursor accordingly.
    fn handle_item_hover(&mut self, ui: &egui::Ui, response: &egui::Response) {
        let hit = response
            .hover_pos()
            .and_then(|pos| self.plane.hit_test(self.screen_to_plane(response.rect, pos)));

        match hit {
            Some(key) => self.plane.on_item_hover(key.item, key.replica),
            None => self.plane.on_item_unhover(),
        }

        if self.canvas.is_dragging {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grabbing);
        } else if hit.is_some() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        } else if response.hovered() {
            ui.ctx().set_cursor_icon(egui::CursorIcon::Grab);
        }
    }

    /// Activates the top-most replica under a primary click.
    fn handle_item_click(&mut self, response: &egui::Response) {
        if !response.clicked() {
            return;
        }
        let Some(pos) = response.interact_pointer_pos() else {
            return;
        };
        if let Some(key) = self.plane.hit_test(self.screen_to_plane(response.rect, pos)) {
            self.plane.on_item_activate(key.item, key.replica);
        }
    }
}
