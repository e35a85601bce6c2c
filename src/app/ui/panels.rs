use eframe::egui::{self, Align, Context, Layout, RichText, Vec2};

use crate::chat;
use crate::profile::{InterestController, Profile};
use crate::recommend::Recommendation;
use crate::util::initials;

use super::super::{Page, ViewModel};

impl ViewModel {
    pub(in crate::app) fn new(
        profile: Profile,
        recommendations: Vec<Recommendation>,
        layout_seed: u64,
    ) -> Self {
        Self {
            display_name: profile.display_name,
            location: profile.location,
            interests: profile.interests,
            controller: InterestController::default(),
            page: Page::Chat,
            layout_seed,
            layout_revision: 0,
            layout_dirty: true,
            canvas_size: Vec2::ZERO,
            bubbles: Vec::new(),
            recommendations,
            kind_filter: None,
            interest_filter: None,
            search: String::new(),
            transcript: Vec::new(),
            chat_rx: Some(chat::spawn_scripted_assistant()),
            chat_draft: String::new(),
        }
    }

    pub(in crate::app) fn show(&mut self, ctx: &Context) {
        egui::TopBottomPanel::top("top_bar")
            .resizable(false)
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    ui.heading("CommunityBrain");
                    ui.separator();

                    ui.label(RichText::new(initials(&self.display_name)).strong());
                    ui.label(&self.display_name);
                    if !self.location.is_empty() {
                        ui.small(&self.location);
                    }
                    ui.separator();

                    ui.selectable_value(&mut self.page, Page::Chat, "Chat");
                    ui.selectable_value(&mut self.page, Page::Profile, "Profile");
                    ui.selectable_value(&mut self.page, Page::Recommendations, "Recommendations");

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(format!("picks: {}", self.recommendations.len()));
                        ui.label(format!("interests: {}", self.interests.len()));
                    });
                });
            });

        match self.page {
            Page::Chat => {
                egui::CentralPanel::default().show(ctx, |ui| self.draw_chat(ui));
            }
            Page::Profile => {
                egui::SidePanel::left("interests")
                    .resizable(true)
                    .default_width(280.0)
                    .show(ctx, |ui| self.draw_interest_controls(ui));

                egui::SidePanel::right("details")
                    .resizable(true)
                    .default_width(320.0)
                    .show(ctx, |ui| self.draw_details(ui));

                egui::CentralPanel::default().show(ctx, |ui| self.draw_graph(ui));
            }
            Page::Recommendations => {
                egui::CentralPanel::default().show(ctx, |ui| self.draw_recommendations(ui));
            }
        }
    }
}
