use eframe::egui::{self, Align, Key, Layout, Ui};

use super::super::ViewModel;

impl ViewModel {
    pub(in crate::app) fn draw_interest_controls(&mut self, ui: &mut Ui) {
        ui.heading("Your Interests");
        ui.separator();
        ui.add_space(4.0);

        if self.controller.add_form_open() {
            let mut submitted = false;
            let mut cancelled = false;

            ui.horizontal(|ui| {
                let response = ui.text_edit_singleline(self.controller.draft_name());
                let entered = response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));
                submitted = ui.button("Add").clicked() || entered;
                cancelled = ui.button("Cancel").clicked();
            });

            if submitted {
                let name = self.controller.draft_name().clone();
                // A rejected (blank) name keeps the form open, silently.
                if let Some(event) = self.controller.add_interest(&name) {
                    self.dispatch(event);
                    self.controller.close_add_form();
                }
            }
            if cancelled {
                self.controller.close_add_form();
            }
        } else if ui.button("Add interest").clicked() {
            self.controller.open_add_form();
        }

        ui.add_space(8.0);

        let mut selected_id = None;
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for interest in &self.interests {
                    let is_selected = self.controller.is_selected(&interest.id);

                    let clicked = ui
                        .horizontal(|ui| {
                            let clicked =
                                ui.selectable_label(is_selected, &interest.name).clicked();
                            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                                ui.label(format!("lvl {}", interest.level));
                                if interest.from_conversation {
                                    ui.small("chat");
                                }
                            });
                            clicked
                        })
                        .inner;

                    if clicked {
                        selected_id = Some(interest.id.clone());
                    }
                }

                if self.interests.is_empty() {
                    ui.label("Nothing here yet.");
                }
            });

        if let Some(id) = selected_id
            && let Some(event) = self.controller.select(&self.interests, &id)
        {
            self.dispatch(event);
        }
    }
}
