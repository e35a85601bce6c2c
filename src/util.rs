use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Case-insensitive key for matching interest names against tags.
pub fn tag_key(tag: &str) -> String {
    tag.trim().to_lowercase()
}

pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn mix_seed(base: u64, revision: u64) -> u64 {
    let mut hasher = DefaultHasher::new();
    base.hash(&mut hasher);
    revision.hash(&mut hasher);
    hasher.finish()
}
