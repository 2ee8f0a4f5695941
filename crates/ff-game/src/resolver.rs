//! Resolving typed names to tap targets with fuzzy matching.

use strsim::jaro_winkler;

use crate::area::Scene;
use crate::ports::Target;

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.8;

/// Every name a target answers to, lowercased.
pub fn aliases(scene: &Scene, target: &Target) -> Vec<String> {
    let mut names = match target {
        Target::Npc(npc) => vec![npc.as_str().to_string(), plain(npc.def().name)],
        Target::Item(key) => {
            let mut names = vec![key.clone()];
            if let Some(item) = scene.item(key) {
                names.push(item.kind.name().to_string());
            }
            names
        }
        Target::Prop(name) => vec![name.to_string(), name.replace('-', " ")],
    };
    for name in &mut names {
        *name = name.to_lowercase();
    }
    names.dedup();
    names
}

/// A display name with emoji and stray punctuation stripped.
fn plain(name: &str) -> String {
    name.chars()
        .filter(|c| c.is_alphanumeric() || *c == ' ' || *c == '\'')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Resolve a typed name to a target in the scene using exact or fuzzy matching.
pub fn resolve_target(scene: &Scene, input: &str) -> Option<Target> {
    let input_lower = input.trim().to_lowercase();

    // Exact match first (case-insensitive)
    for (target, _) in scene.targets() {
        if aliases(scene, &target).contains(&input_lower) {
            return Some(target);
        }
    }

    fuzzy_match(scene, &input_lower, FUZZY_THRESHOLD)
        .into_iter()
        .next()
        .map(|(target, _)| target)
}

/// Targets whose names are similar to `input`, best first.
pub fn fuzzy_match(scene: &Scene, input: &str, threshold: f64) -> Vec<(Target, f64)> {
    let input_lower = input.to_lowercase();
    let mut matches: Vec<(Target, f64)> = scene
        .targets()
        .into_iter()
        .filter_map(|(target, _)| {
            let score = aliases(scene, &target)
                .iter()
                .map(|name| jaro_winkler(&input_lower, name))
                .fold(0.0, f64::max);
            (score >= threshold).then_some((target, score))
        })
        .collect();

    matches.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    matches
}

/// Names in the scene that start with or contain `partial`, for hints.
pub fn suggest(scene: &Scene, partial: &str, limit: usize) -> Vec<String> {
    let partial_lower = partial.to_lowercase();
    let mut suggestions: Vec<(String, f64)> = scene
        .targets()
        .into_iter()
        .filter_map(|(target, _)| {
            let name = aliases(scene, &target).pop()?;
            let score = if name.starts_with(&partial_lower) {
                2.0
            } else if name.contains(&partial_lower) {
                1.0
            } else {
                jaro_winkler(&partial_lower, &name)
            };
            (score >= 0.6).then_some((name, score))
        })
        .collect();

    suggestions.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));
    suggestions
        .into_iter()
        .take(limit)
        .map(|(name, _)| name)
        .collect()
}
