mod controller;
mod interest;
mod load;

pub use controller::{InterestController, InterestEvent, apply_event};
pub use interest::{Hsl, Interest, MAX_LEVEL, MIN_LEVEL, bubble_color, bubble_size};
pub use load::{Profile, load_profile, sample_profile};
