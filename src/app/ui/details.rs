use eframe::egui::{self, RichText, Ui};

use crate::profile::{MAX_LEVEL, MIN_LEVEL};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_details(&mut self, ui: &mut Ui) {
        ui.heading("Interest Details");
        ui.add_space(6.0);

        let Some(selected_id) = self.controller.selected_id().map(str::to_owned) else {
            ui.label("Select a bubble from the canvas or the list.");
            return;
        };

        let Some(interest) = self
            .interests
            .iter()
            .find(|interest| interest.id == selected_id)
            .cloned()
        else {
            ui.label("The selected interest no longer exists.");
            return;
        };

        ui.label(RichText::new(&interest.name).strong());
        ui.small(&interest.id);
        if interest.from_conversation {
            ui.label("Discovered during your conversation with Romy.");
        }
        ui.add_space(6.0);

        let mut level = interest.level;
        let slider = ui.add(egui::Slider::new(&mut level, MIN_LEVEL..=MAX_LEVEL).text("Importance"));
        if slider.changed()
            && let Some(event) = self.controller.update_level(&self.interests, &interest.id, level)
        {
            self.dispatch(event);
        }

        ui.add_space(8.0);
        ui.label(RichText::new("Related interests").strong());
        if interest.related_interests.is_empty() {
            ui.label("None recorded.");
        } else {
            let mut filter_target = None;
            for related in &interest.related_interests {
                if ui.link(related).clicked() {
                    filter_target = Some(related.clone());
                }
            }
            if let Some(target) = filter_target {
                self.open_recommendations_for(target);
            }
        }

        ui.separator();
        if ui
            .button(format!("View picks for {}", interest.name))
            .clicked()
        {
            self.open_recommendations_for(interest.name.clone());
        }

        ui.add_space(12.0);
        if ui.button("Remove interest").clicked()
            && let Some(event) = self.controller.remove_interest(&self.interests, &interest.id)
        {
            self.dispatch(event);
        }
    }
}
