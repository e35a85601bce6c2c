use std::time::Duration;

use eframe::egui::{self, Key, RichText, Ui};

use crate::chat::{self, Utterance};
use crate::util::tag_key;

use super::super::{Page, ViewModel};

impl ViewModel {
    pub(in crate::app) fn draw_chat(&mut self, ui: &mut Ui) {
        ui.heading("Let's find your community");
        ui.label("Romy will help discover your interests and find local communities that match them.");
        ui.add_space(8.0);

        // Keep polling the widget channel while the script is playing.
        if self.chat_rx.is_some() {
            ui.ctx().request_repaint_after(Duration::from_millis(400));
        }

        let transcript_height = (ui.available_height() - 180.0).max(120.0);
        egui::ScrollArea::vertical()
            .stick_to_bottom(true)
            .max_height(transcript_height)
            .auto_shrink([false, false])
            .show(ui, |ui| {
                for utterance in &self.transcript {
                    ui.horizontal(|ui| {
                        ui.label(RichText::new(utterance.speaker.label()).strong());
                        ui.small(utterance.at.format("%H:%M").to_string());
                    });
                    ui.label(&utterance.text);
                    ui.add_space(4.0);
                }

                if self.transcript.is_empty() {
                    ui.label("Romy is getting ready...");
                }
            });

        ui.separator();

        let mut send = false;
        ui.horizontal(|ui| {
            let response = ui.text_edit_singleline(&mut self.chat_draft);
            let entered = response.lost_focus() && ui.input(|input| input.key_pressed(Key::Enter));
            send = ui.button("Send").clicked() || entered;
        });
        if send {
            let text = self.chat_draft.trim().to_owned();
            if !text.is_empty() {
                self.transcript.push(Utterance::user(&text));
            }
            self.chat_draft.clear();
        }

        ui.add_space(8.0);
        ui.label("Topics Romy picked up:");

        let mut added = None;
        ui.horizontal_wrapped(|ui| {
            for topic in chat::SUGGESTED_TOPICS {
                let already_known = self
                    .interests
                    .iter()
                    .any(|interest| tag_key(&interest.name) == tag_key(topic));

                if ui
                    .add_enabled(!already_known, egui::Button::new(topic))
                    .clicked()
                {
                    added = Some(topic);
                }
            }
        });
        if let Some(topic) = added
            && let Some(event) = self.controller.add_interest_from_chat(topic)
        {
            self.dispatch(event);
        }

        ui.add_space(10.0);
        if ui.button("Finish conversation").clicked() {
            self.page = Page::Profile;
        }
    }
}
