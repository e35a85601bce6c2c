use anyhow::{Context, Result};
use fuzzy_matcher::FuzzyMatcher;
use fuzzy_matcher::skim::SkimMatcherV2;
use serde::Deserialize;

use crate::util::tag_key;

/// Mock community picks shipped with the binary; stands in for a backend.
const SAMPLE_RECOMMENDATIONS: &str = include_str!("../assets/recommendations.json");

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RecommendationKind {
    Group,
    Event,
    Volunteer,
}

impl RecommendationKind {
    pub const ALL: [Self; 3] = [Self::Group, Self::Event, Self::Volunteer];

    pub fn label(self) -> &'static str {
        match self {
            Self::Group => "Group",
            Self::Event => "Event",
            Self::Volunteer => "Volunteer",
        }
    }

    pub fn plural_label(self) -> &'static str {
        match self {
            Self::Group => "Groups",
            Self::Event => "Events",
            Self::Volunteer => "Volunteer",
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct Recommendation {
    pub id: u32,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
    pub description: String,
    pub location: String,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default, rename = "memberCount")]
    pub member_count: Option<u32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Recommendation {
    pub fn has_tag(&self, interest: &str) -> bool {
        let wanted = tag_key(interest);
        self.tags.iter().any(|tag| tag_key(tag) == wanted)
    }
}

pub fn sample_recommendations() -> Result<Vec<Recommendation>> {
    serde_json::from_str(SAMPLE_RECOMMENDATIONS)
        .context("failed to parse the built-in recommendations")
}

pub fn filter_by_kind(
    recommendations: Vec<&Recommendation>,
    kind: Option<RecommendationKind>,
) -> Vec<&Recommendation> {
    match kind {
        None => recommendations,
        Some(kind) => recommendations
            .into_iter()
            .filter(|recommendation| recommendation.kind == kind)
            .collect(),
    }
}

/// Picks tagged with the interest. An interest nothing is tagged with
/// falls back to the full list rather than an empty page.
pub fn filter_by_interest<'a>(
    recommendations: &'a [Recommendation],
    interest: &str,
) -> Vec<&'a Recommendation> {
    let matched = recommendations
        .iter()
        .filter(|recommendation| recommendation.has_tag(interest))
        .collect::<Vec<_>>();

    if matched.is_empty() {
        recommendations.iter().collect()
    } else {
        matched
    }
}

/// Fuzzy-ranks picks by title and tags, best match first. A blank query
/// keeps the incoming order.
pub fn fuzzy_rank<'a>(
    recommendations: Vec<&'a Recommendation>,
    query: &str,
) -> Vec<&'a Recommendation> {
    let query = query.trim();
    if query.is_empty() {
        return recommendations;
    }

    let matcher = SkimMatcherV2::default();
    let mut ranked = recommendations
        .into_iter()
        .filter_map(|recommendation| {
            let haystack = format!("{} {}", recommendation.title, recommendation.tags.join(" "));
            matcher
                .fuzzy_match(&haystack, query)
                .or_else(|| matcher.fuzzy_match(&haystack.to_ascii_lowercase(), &query.to_ascii_lowercase()))
                .map(|score| (score, recommendation))
        })
        .collect::<Vec<_>>();

    ranked.sort_by(|a, b| b.0.cmp(&a.0));
    ranked.into_iter().map(|(_score, rec)| rec).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks() -> Vec<Recommendation> {
        sample_recommendations().unwrap()
    }

    #[test]
    fn sample_recommendations_parse() {
        let picks = picks();
        assert_eq!(picks.len(), 5);
        assert!(picks.iter().all(|pick| !pick.tags.is_empty()));
    }

    #[test]
    fn kind_filter_narrows_the_list() {
        let picks = picks();

        let groups = filter_by_kind(picks.iter().collect(), Some(RecommendationKind::Group));
        assert!(!groups.is_empty());
        assert!(groups.iter().all(|pick| pick.kind == RecommendationKind::Group));

        assert_eq!(filter_by_kind(picks.iter().collect(), None).len(), picks.len());
    }

    #[test]
    fn interest_filter_matches_tags_case_insensitively() {
        let picks = picks();

        let hits = filter_by_interest(&picks, "photography");
        assert!(hits.iter().all(|pick| pick.has_tag("Photography")));
        assert!(hits.len() < picks.len());
    }

    #[test]
    fn unmatched_interest_falls_back_to_everything() {
        let picks = picks();
        assert_eq!(filter_by_interest(&picks, "Spelunking").len(), picks.len());
    }

    #[test]
    fn fuzzy_rank_surfaces_the_best_match_first() {
        let picks = picks();
        let everything = picks.iter().collect::<Vec<_>>();

        let ranked = fuzzy_rank(everything.clone(), "photo");
        assert!(!ranked.is_empty());
        assert!(ranked[0].title.contains("Photography"));

        assert_eq!(fuzzy_rank(everything, "  ").len(), picks.len());
    }
}
