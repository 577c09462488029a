//! Declarative style configuration.
//!
//! Lets a host describe the active style as JSON, e.g.
//! `{"kind":"border","color":"#22c55e","width":2}` or
//! `{"kind":"class","class":"chip","selected_class":"chip--active"}`.

use super::{AnySelectableStyle, ClassSelectableStyle, DefaultSelectableStyle};
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SelectableStyleConfig {
    Border {
        #[serde(default = "default_color")]
        color: String,
        #[serde(default = "default_width")]
        width: u32,
    },
    Class {
        #[serde(default = "default_class")]
        class: String,
        #[serde(default = "default_selected_class")]
        selected_class: String,
    },
}

fn default_color() -> String {
    DefaultSelectableStyle::DEFAULT_COLOR.to_string()
}

fn default_width() -> u32 {
    1
}

fn default_class() -> String {
    ClassSelectableStyle::default().class
}

fn default_selected_class() -> String {
    ClassSelectableStyle::default().selected_class
}

impl Default for SelectableStyleConfig {
    fn default() -> Self {
        Self::Border {
            color: default_color(),
            width: default_width(),
        }
    }
}

impl SelectableStyleConfig {
    /// Parses a configuration document. Values are checked by [`Self::build`].
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        serde_json::from_str(json).context("parse selectable style config")
    }

    /// Validates the configuration and builds the strategy it describes.
    pub fn build(&self) -> anyhow::Result<AnySelectableStyle> {
        match self {
            Self::Border { color, width } => {
                let color = color.trim();
                if color.is_empty() {
                    bail!("border color is empty");
                }
                if color.eq_ignore_ascii_case("transparent") {
                    bail!("border color must be visible, got \"{}\"", color);
                }
                if *width == 0 {
                    bail!("border width must be at least 1px");
                }
                Ok(AnySelectableStyle::new(DefaultSelectableStyle::new(
                    color, *width,
                )))
            }
            Self::Class {
                class,
                selected_class,
            } => {
                if class.trim().is_empty() || selected_class.trim().is_empty() {
                    bail!("class style needs both `class` and `selected_class`");
                }
                Ok(AnySelectableStyle::new(ClassSelectableStyle::new(
                    class.trim(),
                    selected_class.trim(),
                )))
            }
        }
    }
}
