use eframe::egui::{Rect, Ui, Vec2};

use super::super::ViewModel;

impl ViewModel {
    /// Bubble under the pointer; the nearest center wins where bubbles
    /// overlap.
    pub(in crate::app) fn hovered_bubble(&self, ui: &Ui, rect: Rect) -> Option<(usize, f32)> {
        let pointer = ui.input(|input| input.pointer.hover_pos())?;
        if !rect.contains(pointer) {
            return None;
        }

        self.bubbles
            .iter()
            .enumerate()
            .filter_map(|(index, bubble)| {
                let center = rect.left_top() + bubble.pos + Vec2::splat(bubble.size * 0.5);
                let distance = center.distance(pointer);
                (distance <= bubble.size * 0.5).then_some((index, distance))
            })
            .min_by(|a, b| a.1.total_cmp(&b.1))
    }

    /// Clicking a bubble selects it through the controller; clicking empty
    /// canvas drops the selection without an event.
    pub(in crate::app) fn apply_bubble_selection(&mut self, clicked: Option<String>) {
        match clicked {
            Some(id) => {
                if let Some(event) = self.controller.select(&self.interests, &id) {
                    self.dispatch(event);
                }
            }
            None => self.controller.clear_selection(),
        }
    }
}
