//! Canvas rendering functionality for the background and item replicas.
//!
//! Items are painted in the plane's draw order, so hovered replicas land on top
//! of raised ones, which in turn cover the base layer.

use super::state::CanvasApp;
use crate::constants::{
    DOT_RADIUS, DOT_SPACING, HOVER_SHADOW_BLUR, ITEM_BORDER_WIDTH, ITEM_CORNER_RADIUS,
    ITEM_TOP_SHADE_HEIGHT, SELECTION_RING_WIDTH,
};
use crate::types::Item;
use eframe::egui;
use eframe::epaint::StrokeKind;

/// Colour of the selection ring.
const SELECTION_RING_COLOR: egui::Color32 = egui::Color32::from_rgb(59, 130, 246);

/// How a single replica should be decorated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ItemDecoration {
    /// Draw the selection ring
    pub selected: bool,
    /// Draw the hover shadow
    pub hovered: bool,
}

impl CanvasApp {
    /// Renders the background and every visible replica.
    ///
    /// # Arguments
    ///
    /// * `ctx` - The egui context, used to upload textures on first use
    /// * `painter` - The egui painter for drawing operations
    /// * `canvas_rect` - The screen-space rectangle of the canvas area
    pub fn render_canvas(
        &mut self,
        ctx: &egui::Context,
        painter: &egui::Painter,
        canvas_rect: egui::Rect,
    ) {
        self.draw_background(painter, canvas_rect);

        let viewport = egui::Rect::from_min_size(egui::Pos2::ZERO, canvas_rect.size());
        let origin = canvas_rect.min.to_vec2();
        let selected = self.plane.interaction().selected();
        let hovered = self.plane.interaction().hovered();

        for placed in self.plane.draw_order(viewport) {
            let texture = self.assets.texture(ctx, &placed.item.source);
            let decoration = ItemDecoration {
                selected: selected == Some(placed.key),
                hovered: hovered == Some(placed.key),
            };
            draw_item(
                painter,
                placed.item,
                placed.rect.translate(origin),
                texture,
                decoration,
            );
        }
    }

    /// Fills the canvas and draws the static dot pattern behind the plane.
    ///
    /// The dots do not move with the offset.
    pub fn draw_background(&self, painter: &egui::Painter, canvas_rect: egui::Rect) {
        let (fill, dot) = if self.dark_mode {
            (egui::Color32::from_gray(24), egui::Color32::from_gray(60))
        } else {
            (
                egui::Color32::from_rgb(243, 244, 246),
                egui::Color32::from_rgb(209, 213, 219),
            )
        };
        painter.rect_filled(canvas_rect, 0.0, fill);

        let mut y = canvas_rect.min.y + DOT_SPACING * 0.5;
        while y < canvas_rect.max.y {
            let mut x = canvas_rect.min.x + DOT_SPACING * 0.5;
            while x < canvas_rect.max.x {
                painter.circle_filled(egui::pos2(x, y), DOT_RADIUS, dot);
                x += DOT_SPACING;
            }
            y += DOT_SPACING;
        }
    }
}

/// Draws one item replica at `rect` (screen space).
///
/// With a texture the image is cropped to cover the frame; without one a
/// placeholder fill and the label are shown instead.
pub fn draw_item(
    painter: &egui::Painter,
    item: &Item,
    rect: egui::Rect,
    texture: Option<(egui::TextureId, egui::Vec2)>,
    decoration: ItemDecoration,
) {
    if decoration.hovered {
        let shadow = egui::epaint::Shadow {
            offset: [0, 12],
            blur: HOVER_SHADOW_BLUR,
            spread: 0,
            color: egui::Color32::from_black_alpha(110),
        };
        painter.add(shadow.as_shape(rect, ITEM_CORNER_RADIUS));
    }

    let tint = item.color.as_deref().and_then(parse_color_tag);
    match texture {
        Some((id, size)) => {
            let uv = cover_uv(size, rect.size());
            let shape = egui::epaint::RectShape::filled(
                rect,
                ITEM_CORNER_RADIUS,
                tint.unwrap_or(egui::Color32::WHITE),
            )
            .with_texture(id, uv);
            painter.add(shape);
        }
        None => {
            let fill = tint.unwrap_or_else(|| placeholder_color(&item.source));
            painter.rect_filled(rect, ITEM_CORNER_RADIUS, fill);
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                &item.label,
                egui::FontId::proportional(14.0),
                egui::Color32::from_gray(30),
            );
        }
    }

    draw_top_shade(painter, rect);

    painter.rect_stroke(
        rect,
        ITEM_CORNER_RADIUS,
        egui::Stroke::new(ITEM_BORDER_WIDTH, egui::Color32::BLACK),
        StrokeKind::Inside,
    );

    if decoration.selected {
        painter.rect_stroke(
            rect,
            ITEM_CORNER_RADIUS,
            egui::Stroke::new(SELECTION_RING_WIDTH, SELECTION_RING_COLOR),
            StrokeKind::Outside,
        );
    }
}

/// Soft darkening gradient along the top edge of an item.
fn draw_top_shade(painter: &egui::Painter, rect: egui::Rect) {
    let bottom = (rect.min.y + ITEM_TOP_SHADE_HEIGHT).min(rect.max.y);
    let shade = egui::Rect::from_min_max(rect.min, egui::pos2(rect.max.x, bottom));
    let top = egui::Color32::from_black_alpha(26);

    let mut mesh = egui::Mesh::default();
    mesh.colored_vertex(shade.left_top(), top);
    mesh.colored_vertex(shade.right_top(), top);
    mesh.colored_vertex(shade.left_bottom(), egui::Color32::TRANSPARENT);
    mesh.colored_vertex(shade.right_bottom(), egui::Color32::TRANSPARENT);
    mesh.add_triangle(0, 1, 2);
    mesh.add_triangle(1, 3, 2);
    painter.add(egui::Shape::mesh(mesh));
}

/// UV rectangle that crops a texture of `texture_size` to fill `target_size`
/// while keeping its aspect ratio, centred on both axes.
pub fn cover_uv(texture_size: egui::Vec2, target_size: egui::Vec2) -> egui::Rect {
    let full = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
    if texture_size.x <= 0.0 || texture_size.y <= 0.0 || target_size.x <= 0.0 || target_size.y <= 0.0
    {
        return full;
    }
    let texture_aspect = texture_size.x / texture_size.y;
    let target_aspect = target_size.x / target_size.y;
    if texture_aspect > target_aspect {
        let w = target_aspect / texture_aspect;
        let x0 = (1.0 - w) * 0.5;
        egui::Rect::from_min_max(egui::pos2(x0, 0.0), egui::pos2(x0 + w, 1.0))
    } else {
        let h = texture_aspect / target_aspect;
        let y0 = (1.0 - h) * 0.5;
        egui::Rect::from_min_max(egui::pos2(0.0, y0), egui::pos2(1.0, y0 + h))
    }
}

/// Parses a `#rrggbb` colour tag.
pub fn parse_color_tag(tag: &str) -> Option<egui::Color32> {
    egui::Color32::from_hex(tag).ok()
}

/// Stable pastel colour for items whose asset is not available.
pub fn placeholder_color(source: &str) -> egui::Color32 {
    // FNV-1a
    let hash = source
        .bytes()
        .fold(0x811c_9dc5_u32, |h, b| (h ^ u32::from(b)).wrapping_mul(0x0100_0193));
    let hue = (hash % 360) as f32 / 360.0;
    egui::ecolor::Hsva::new(hue, 0.35, 0.9, 1.0).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: egui::Rect, b: egui::Rect) -> bool {
        (a.min - b.min).length() < 1e-5 && (a.max - b.max).length() < 1e-5
    }

    #[test]
    fn cover_uv_crops_wide_textures_horizontally() {
        let uv = cover_uv(egui::vec2(200.0, 100.0), egui::vec2(100.0, 100.0));
        assert!(approx(
            uv,
            egui::Rect::from_min_max(egui::pos2(0.25, 0.0), egui::pos2(0.75, 1.0))
        ));
    }

    #[test]
    fn cover_uv_crops_tall_textures_vertically() {
        let uv = cover_uv(egui::vec2(100.0, 400.0), egui::vec2(100.0, 200.0));
        assert!(approx(
            uv,
            egui::Rect::from_min_max(egui::pos2(0.0, 0.25), egui::pos2(1.0, 0.75))
        ));
    }

    #[test]
    fn cover_uv_degenerate_sizes_use_full_texture() {
        let full = egui::Rect::from_min_max(egui::Pos2::ZERO, egui::pos2(1.0, 1.0));
        assert_eq!(cover_uv(egui::Vec2::ZERO, egui::vec2(10.0, 10.0)), full);
        assert_eq!(cover_uv(egui::vec2(10.0, 10.0), egui::vec2(0.0, 10.0)), full);
    }

    #[test]
    fn color_tags_parse_hex() {
        assert_eq!(
            parse_color_tag("#ff8000"),
            Some(egui::Color32::from_rgb(255, 128, 0))
        );
        assert_eq!(parse_color_tag("orange"), None);
    }

    #[test]
    fn placeholder_colors_are_stable_per_source() {
        assert_eq!(placeholder_color("cabin.jpg"), placeholder_color("cabin.jpg"));
        assert_ne!(placeholder_color("cabin.jpg"), placeholder_color("china.jpg"));
    }
}
