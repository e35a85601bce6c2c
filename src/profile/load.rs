use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};
use serde::Deserialize;

use super::interest::{self, Interest, MAX_LEVEL, MIN_LEVEL};

/// Mock profile shipped with the binary; stands in for a backend.
const SAMPLE_PROFILE: &str = include_str!("../../assets/profile.json");

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub interests: Vec<Interest>,
}

pub fn sample_profile() -> Result<Profile> {
    parse_profile(SAMPLE_PROFILE).context("failed to parse the built-in sample profile")
}

pub fn load_profile(path: &Path) -> Result<Profile> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read profile from {}", path.display()))?;
    parse_profile(&raw).with_context(|| format!("failed to parse profile {}", path.display()))
}

fn parse_profile(raw: &str) -> Result<Profile> {
    let mut profile: Profile = serde_json::from_str(raw).context("invalid profile JSON")?;

    if profile.display_name.trim().is_empty() {
        return Err(anyhow!("profile is missing a display name"));
    }

    normalize_interests(&mut profile.interests);
    Ok(profile)
}

/// Documents are hand-edited; repair what can be repaired instead of
/// rejecting the whole file. Unnamed entries are dropped, levels clamped
/// into range, and colliding ids regenerated.
fn normalize_interests(interests: &mut Vec<Interest>) {
    interests.retain(|interest| !interest.name.trim().is_empty());

    let mut seen = HashSet::new();
    for entry in interests.iter_mut() {
        entry.name = entry.name.trim().to_owned();
        entry.level = entry.level.clamp(MIN_LEVEL, MAX_LEVEL);

        if entry.id.trim().is_empty() || !seen.insert(entry.id.clone()) {
            entry.id = interest::generated_id();
            seen.insert(entry.id.clone());
        }
    }
}
