use eframe::egui::{self, Align, Layout, RichText, Ui};

use crate::recommend::{self, RecommendationKind};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_recommendations(&mut self, ui: &mut Ui) {
        match &self.interest_filter {
            Some(interest) => ui.heading(format!("Recommendations for {interest}")),
            None => ui.heading("Recommended for You"),
        };
        ui.add_space(4.0);

        ui.horizontal(|ui| {
            ui.selectable_value(&mut self.kind_filter, None, "All");
            for kind in RecommendationKind::ALL {
                ui.selectable_value(&mut self.kind_filter, Some(kind), kind.plural_label());
            }

            ui.separator();
            ui.label("Search");
            ui.text_edit_singleline(&mut self.search);

            if let Some(interest) = self.interest_filter.clone() {
                ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                    if ui.button(format!("{interest} ✕")).clicked() {
                        self.interest_filter = None;
                    }
                });
            }
        });

        ui.separator();

        let base = match &self.interest_filter {
            Some(interest) => recommend::filter_by_interest(&self.recommendations, interest),
            None => self.recommendations.iter().collect(),
        };
        let narrowed = recommend::filter_by_kind(base, self.kind_filter);
        let visible = recommend::fuzzy_rank(narrowed, &self.search);

        let mut clicked_tag = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for pick in &visible {
                    egui::Frame::group(ui.style()).show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(RichText::new(&pick.title).strong());
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.small(pick.kind.label());
                            });
                        });

                        ui.label(&pick.description);
                        ui.small(format!("at {}", pick.location));
                        if let Some(date) = &pick.date {
                            ui.small(date);
                        }
                        if let Some(count) = pick.member_count {
                            ui.small(format!("{count} members"));
                        }

                        ui.horizontal_wrapped(|ui| {
                            for tag in &pick.tags {
                                if ui.small_button(tag).clicked() {
                                    clicked_tag = Some(tag.clone());
                                }
                            }
                        });
                    });
                    ui.add_space(6.0);
                }

                if visible.is_empty() {
                    ui.label(
                        "No picks match the current filters. Try updating your interests in your profile.",
                    );
                }
            });

        if let Some(tag) = clicked_tag {
            self.interest_filter = Some(tag);
        }
    }
}
