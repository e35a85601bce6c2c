use eframe::egui::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::layout;
use crate::profile::{self, Interest};
use crate::util::mix_seed;

use super::super::render_utils::hsl_color;
use super::super::{BubbleNode, ViewModel};

impl ViewModel {
    pub(in crate::app) fn mark_layout_dirty(&mut self) {
        self.layout_revision = self.layout_revision.wrapping_add(1);
        self.layout_dirty = true;
    }

    /// Full scatter-and-relax over the current interest set. Runs when the
    /// set changes or the canvas is resized, never per frame. Seeding from
    /// the session seed and the revision keeps a given revision
    /// reproducible.
    pub(in crate::app) fn rebuild_bubbles(&mut self, canvas: Vec2) {
        let sizes = self
            .interests
            .iter()
            .map(|interest| profile::bubble_size(interest.level))
            .collect::<Vec<_>>();

        let mut rng = ChaCha8Rng::seed_from_u64(mix_seed(self.layout_seed, self.layout_revision));
        let positions = layout::bubble_layout(&sizes, canvas, &mut rng);

        self.bubbles = self
            .interests
            .iter()
            .zip(positions)
            .zip(sizes)
            .map(|((interest, pos), size)| BubbleNode {
                id: interest.id.clone(),
                label: interest.name.clone(),
                pos,
                size,
                color: hsl_color(profile::bubble_color(&interest.name, interest.level)),
                from_conversation: interest.from_conversation,
            })
            .collect();

        self.canvas_size = canvas;
        self.layout_dirty = false;
        tracing::debug!(bubbles = self.bubbles.len(), "bubble layout recomputed");
    }

    /// A level change resizes one bubble around its own center; the rest
    /// of the canvas stays put.
    pub(in crate::app) fn refresh_bubble(&mut self, interest: &Interest) {
        let Some(bubble) = self
            .bubbles
            .iter_mut()
            .find(|bubble| bubble.id == interest.id)
        else {
            return;
        };

        let center = bubble.pos + Vec2::splat(bubble.size * 0.5);
        let size = profile::bubble_size(interest.level);

        bubble.pos = layout::clamp_to_canvas(center - Vec2::splat(size * 0.5), size, self.canvas_size);
        bubble.size = size;
        bubble.color = hsl_color(profile::bubble_color(&interest.name, interest.level));
        bubble.label = interest.name.clone();
    }
}
