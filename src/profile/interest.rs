use serde::Deserialize;
use uuid::Uuid;

pub const MIN_LEVEL: u8 = 1;
pub const MAX_LEVEL: u8 = 5;
pub const DEFAULT_LEVEL: u8 = 3;

/// A topic the user cares about, ranked 1..=5. `related_interests` are
/// free-text labels shown alongside the bubble; they do not reference
/// other interests and play no part in layout.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Interest {
    #[serde(default = "generated_id")]
    pub id: String,
    pub name: String,
    pub level: u8,
    #[serde(default, rename = "relatedInterests")]
    pub related_interests: Vec<String>,
    #[serde(default, rename = "fromConversation")]
    pub from_conversation: bool,
}

impl Interest {
    pub fn named(name: &str) -> Self {
        Self {
            id: generated_id(),
            name: name.to_owned(),
            level: DEFAULT_LEVEL,
            related_interests: Vec::new(),
            from_conversation: false,
        }
    }
}

pub(super) fn generated_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn level_in_range(level: u8) -> bool {
    (MIN_LEVEL..=MAX_LEVEL).contains(&level)
}

/// Bubble diameter in canvas units for an importance level.
pub fn bubble_size(level: u8) -> f32 {
    60.0 + 15.0 * level as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: f32,
    pub saturation: f32,
    pub lightness: f32,
}

/// Warm hue picked from the first character of the name; higher levels get
/// more saturated, slightly darker bubbles. Same `(name, level)` always
/// yields the same color.
pub fn bubble_color(name: &str, level: u8) -> Hsl {
    let code = name.chars().next().map(|c| c as u32).unwrap_or(0);

    Hsl {
        hue: 10.0 + (code % 61) as f32,
        saturation: (62.0 + 8.0 * level as f32).min(100.0),
        lightness: (70.0 - 5.0 * level as f32).max(45.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_size_grows_with_level() {
        assert_eq!(bubble_size(1), 75.0);
        assert_eq!(bubble_size(5), 135.0);

        for level in MIN_LEVEL..MAX_LEVEL {
            assert!(bubble_size(level) < bubble_size(level + 1));
        }
    }

    #[test]
    fn bubble_color_is_deterministic() {
        assert_eq!(bubble_color("Photography", 4), bubble_color("Photography", 4));
    }

    #[test]
    fn bubble_hue_stays_in_warm_band() {
        for name in ["Photography", "yoga", "Ökologie", "42 things", ""] {
            let color = bubble_color(name, 3);
            assert!(color.hue >= 10.0 && color.hue <= 70.0, "hue {}", color.hue);
        }
    }

    #[test]
    fn bubble_saturation_caps_and_lightness_floors() {
        for level in MIN_LEVEL..=MAX_LEVEL {
            let color = bubble_color("Cooking", level);
            assert!(color.saturation <= 100.0);
            assert!(color.lightness >= 45.0);
        }

        let weak = bubble_color("Cooking", MIN_LEVEL);
        let strong = bubble_color("Cooking", MAX_LEVEL);
        assert!(strong.saturation > weak.saturation);
        assert!(strong.lightness < weak.lightness);
    }

    #[test]
    fn named_interest_uses_defaults() {
        let interest = Interest::named("Chess");
        assert!(!interest.id.is_empty());
        assert_eq!(interest.level, DEFAULT_LEVEL);
        assert!(interest.related_interests.is_empty());
        assert!(!interest.from_conversation);
    }
}
