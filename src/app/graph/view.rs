use eframe::egui::{self, Align2, Color32, FontId, Sense, Stroke, Ui, Vec2};

use super::super::ViewModel;
use super::super::render_utils::{blend_color, dim_color, draw_canvas_background};

impl ViewModel {
    pub(in crate::app) fn draw_graph(&mut self, ui: &mut Ui) {
        let (rect, response) = ui.allocate_exact_size(ui.available_size(), Sense::click());
        let painter = ui.painter_at(rect);

        draw_canvas_background(&painter, rect);

        if self.layout_dirty || (rect.size() - self.canvas_size).length() > 1.0 {
            self.rebuild_bubbles(rect.size());
        }

        if self.bubbles.is_empty() {
            painter.text(
                rect.center(),
                Align2::CENTER_CENTER,
                "No interests yet. Add one from the panel, or chat with Romy.",
                FontId::proportional(14.0),
                Color32::from_gray(180),
            );
            return;
        }

        let hovered = self.hovered_bubble(ui, rect);
        if hovered.is_some() {
            ui.output_mut(|output| {
                output.cursor_icon = egui::CursorIcon::PointingHand;
            });
        }
        let hovered_index = hovered.map(|(index, _distance)| index);

        let selection_active = self.controller.selected_id().is_some();
        let selected_ring = Color32::from_rgb(245, 206, 93);

        for (index, bubble) in self.bubbles.iter().enumerate() {
            let center = rect.left_top() + bubble.pos + Vec2::splat(bubble.size * 0.5);
            let radius = bubble.size * 0.5;

            let is_selected = self.controller.is_selected(&bubble.id);
            let is_hovered = hovered_index == Some(index);

            let fill = if is_hovered {
                blend_color(bubble.color, Color32::WHITE, 0.18)
            } else if selection_active && !is_selected {
                dim_color(bubble.color, 0.72)
            } else {
                bubble.color
            };

            painter.circle_filled(center, radius, fill);

            let stroke = if is_selected {
                Stroke::new(2.5, selected_ring)
            } else if bubble.from_conversation {
                Stroke::new(1.4, Color32::from_rgba_unmultiplied(102, 178, 255, 200))
            } else {
                Stroke::new(1.0, Color32::from_rgba_unmultiplied(15, 15, 15, 160))
            };
            painter.circle_stroke(center, radius, stroke);

            painter.text(
                center,
                Align2::CENTER_CENTER,
                &bubble.label,
                FontId::proportional((radius * 0.28).clamp(11.0, 18.0)),
                Color32::from_gray(24),
            );
        }

        if response.clicked() {
            let clicked = hovered_index
                .and_then(|index| self.bubbles.get(index).map(|bubble| bubble.id.clone()));
            self.apply_bubble_selection(clicked);
        }
    }
}
