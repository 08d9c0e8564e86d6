//! Canned collaborator documents.

use serde_json::json;

/// A `career_paths` document with one path per image description.
#[must_use]
pub fn paths_document(image_descriptions: &[&str]) -> String {
    let paths: Vec<_> = image_descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| {
            json!({
                "what_if": format!("What if you became path {}?", i + 1),
                "narrative": format!("Narrative for path {}.", i + 1),
                "image_description": description,
            })
        })
        .collect();
    json!({ "career_paths": paths }).to_string()
}

/// A detail document carrying `text` under `input`.
#[must_use]
pub fn detail_document(text: &str) -> String {
    json!({ "input": text }).to_string()
}

/// A `timelines` document with one step per image description.
#[must_use]
pub fn timeline_document(image_descriptions: &[&str]) -> String {
    let steps: Vec<_> = image_descriptions
        .iter()
        .enumerate()
        .map(|(i, description)| {
            json!({
                "step": format!("Step {}", i + 1),
                "description": format!("Description of step {}.", i + 1),
                "duration": format!("{} months", i + 1),
                "resources": ["Coursera", "GitHub"],
                "image_description": description,
            })
        })
        .collect();
    json!({ "timelines": steps }).to_string()
}
