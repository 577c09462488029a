//! Style presets offered by the gallery's style switcher.
//!
//! Presets ship as an embedded JSON document so the list can change
//! without touching the view code.

use anyhow::Context;
use selectable::{AnySelectableStyle, SelectableStyleConfig};
use serde::Deserialize;

const PRESETS_JSON: &str = include_str!("../static/styles.json");

#[derive(Clone, Debug, Deserialize)]
pub struct StylePreset {
    pub label: String,
    pub style: SelectableStyleConfig,
}

pub fn parse_presets(json: &str) -> anyhow::Result<Vec<StylePreset>> {
    serde_json::from_str(json).context("parse style presets")
}

/// Builds every preset, logging and skipping the invalid ones.
///
/// Never returns an empty list: the default style is used as a fallback.
pub fn build_presets(presets: Vec<StylePreset>) -> Vec<(String, AnySelectableStyle)> {
    let mut styles: Vec<_> = presets
        .into_iter()
        .filter_map(|preset| match preset.style.build() {
            Ok(style) => Some((preset.label, style)),
            Err(err) => {
                log::error!("Skipping style preset {}: {:?}", preset.label, err);
                None
            }
        })
        .collect();

    if styles.is_empty() {
        styles.push(("Default".to_string(), AnySelectableStyle::default()));
    }
    styles
}

/// One-line summary of the loaded presets for the startup log.
pub fn describe(presets: &[(String, AnySelectableStyle)]) -> String {
    let labels: Vec<&str> = presets.iter().map(|(label, _)| label.as_str()).collect();
    format!("{} style presets: {}", presets.len(), labels.join(", "))
}

pub fn load_presets() -> Vec<(String, AnySelectableStyle)> {
    let presets = parse_presets(PRESETS_JSON).unwrap_or_else(|err| {
        log::error!("Failed to load style presets: {:?}", err);
        Vec::new()
    });
    build_presets(presets)
}
