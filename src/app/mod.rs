use std::path::Path;
use std::sync::mpsc::{Receiver, TryRecvError};

use eframe::egui::{self, Color32, Context, Vec2};

use crate::chat::Utterance;
use crate::profile::{self, Interest, InterestController, InterestEvent};
use crate::recommend::{self, Recommendation, RecommendationKind};

mod graph;
mod render_utils;
mod ui;

pub struct CommunityBrainApp {
    profile_path: Option<String>,
    layout_seed: u64,
    state: AppState,
}

enum AppState {
    Ready(Box<ViewModel>),
    Error(String),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Page {
    Chat,
    Profile,
    Recommendations,
}

struct ViewModel {
    display_name: String,
    location: String,
    /// Source of truth for the interest set; changed only by applying
    /// controller events in [`ViewModel::dispatch`].
    interests: Vec<Interest>,
    controller: InterestController,
    page: Page,

    layout_seed: u64,
    layout_revision: u64,
    layout_dirty: bool,
    canvas_size: Vec2,
    bubbles: Vec<BubbleNode>,

    recommendations: Vec<Recommendation>,
    kind_filter: Option<RecommendationKind>,
    interest_filter: Option<String>,
    search: String,

    transcript: Vec<Utterance>,
    chat_rx: Option<Receiver<Utterance>>,
    chat_draft: String,
}

/// Render state for one interest on the canvas. `pos` is the bounding-box
/// origin in canvas space, `size` the diameter.
struct BubbleNode {
    id: String,
    label: String,
    pos: Vec2,
    size: f32,
    color: Color32,
    from_conversation: bool,
}

impl CommunityBrainApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        profile_path: Option<String>,
        layout_seed: u64,
    ) -> Self {
        let state = Self::load_state(profile_path.as_deref(), layout_seed);
        Self {
            profile_path,
            layout_seed,
            state,
        }
    }

    fn load_state(profile_path: Option<&str>, layout_seed: u64) -> AppState {
        match load_view_model(profile_path, layout_seed) {
            Ok(model) => AppState::Ready(Box::new(model)),
            Err(error) => AppState::Error(format!("{error:#}")),
        }
    }
}

fn load_view_model(profile_path: Option<&str>, layout_seed: u64) -> anyhow::Result<ViewModel> {
    let profile = match profile_path {
        Some(path) => profile::load_profile(Path::new(path))?,
        None => profile::sample_profile()?,
    };
    let recommendations = recommend::sample_recommendations()?;

    tracing::info!(
        interests = profile.interests.len(),
        picks = recommendations.len(),
        "profile loaded"
    );

    Ok(ViewModel::new(profile, recommendations, layout_seed))
}

impl eframe::App for CommunityBrainApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        let mut retry_requested = false;

        match &mut self.state {
            AppState::Ready(model) => {
                model.drain_chat();
                model.show(ctx);
            }
            AppState::Error(error) => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    ui.heading("Failed to load your profile");
                    ui.add_space(6.0);
                    ui.label(error.as_str());
                    ui.add_space(10.0);
                    if ui.button("Retry").clicked() {
                        retry_requested = true;
                    }
                });
            }
        }

        if retry_requested {
            self.state = Self::load_state(self.profile_path.as_deref(), self.layout_seed);
        }
    }
}

impl ViewModel {
    /// Applies a controller event to the authoritative collection and
    /// keeps the canvas in step: add/remove rescatter the whole layout,
    /// a level change resizes its one bubble in place.
    fn dispatch(&mut self, event: InterestEvent) {
        tracing::debug!(?event, "applying interest event");
        profile::apply_event(&mut self.interests, &event);

        match &event {
            InterestEvent::Selected { .. } => {}
            InterestEvent::LevelUpdated { interest } => self.refresh_bubble(interest),
            InterestEvent::Added { .. } => self.mark_layout_dirty(),
            InterestEvent::Removed { id } => {
                if self.controller.is_selected(id) {
                    self.controller.clear_selection();
                }
                self.mark_layout_dirty();
            }
        }
    }

    fn open_recommendations_for(&mut self, interest: String) {
        self.interest_filter = Some(interest);
        self.page = Page::Recommendations;
    }

    fn drain_chat(&mut self) {
        if let Some(rx) = self.chat_rx.take() {
            loop {
                match rx.try_recv() {
                    Ok(utterance) => self.transcript.push(utterance),
                    Err(TryRecvError::Empty) => {
                        self.chat_rx = Some(rx);
                        break;
                    }
                    Err(TryRecvError::Disconnected) => {
                        tracing::debug!("assistant script finished");
                        break;
                    }
                }
            }
        }
    }
}
