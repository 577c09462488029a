//! Style strategies for selectable items.
//!
//! A strategy maps a [`SelectableConfiguration`] (the already clickable
//! child plus its selected flag) to the view that ends up in the tree.
//! Strategies are stored in context as [`AnySelectableStyle`], see
//! [`context`].

pub mod config;
pub mod context;

use leptos::prelude::*;
use std::fmt;
use std::sync::Arc;

pub use config::SelectableStyleConfig;
pub use context::{
    selectable_style, use_selectable_style, SelectableStyleContext,
    SelectableStyleProvider,
};

/// Input of a style strategy. Rebuilt on every render of the item.
pub struct SelectableConfiguration {
    /// The decorated child, already carrying the tap handler.
    pub view: AnyView,
    pub is_selected: bool,
}

/// Rendering strategy for the selected/unselected presentation.
///
/// `make_body` must be free of side effects; it runs every time the
/// selection or the ambient style changes.
pub trait SelectableStyle: Send + Sync + 'static {
    type Body: IntoView + 'static;

    fn make_body(&self, configuration: SelectableConfiguration) -> Self::Body;
}

/// Type-erased [`SelectableStyle`], the value held by the context slot.
#[derive(Clone)]
pub struct AnySelectableStyle {
    name: &'static str,
    make_body: Arc<dyn Fn(SelectableConfiguration) -> AnyView + Send + Sync>,
}

impl AnySelectableStyle {
    /// Erases the concrete type of `style`.
    pub fn new<S: SelectableStyle>(style: S) -> Self {
        Self {
            name: std::any::type_name::<S>(),
            make_body: Arc::new(move |configuration| style.make_body(configuration).into_any()),
        }
    }

    /// Wraps a closure as a style strategy.
    pub fn from_fn<F>(name: &'static str, make_body: F) -> Self
    where
        F: Fn(SelectableConfiguration) -> AnyView + Send + Sync + 'static,
    {
        Self {
            name,
            make_body: Arc::new(make_body),
        }
    }

    /// Type name of the wrapped strategy, or the name given to `from_fn`.
    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl SelectableStyle for AnySelectableStyle {
    type Body = AnyView;

    fn make_body(&self, configuration: SelectableConfiguration) -> AnyView {
        (self.make_body)(configuration)
    }
}

impl Default for AnySelectableStyle {
    fn default() -> Self {
        Self::new(DefaultSelectableStyle::default())
    }
}

impl fmt::Debug for AnySelectableStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("AnySelectableStyle").field(&self.name).finish()
    }
}

/// Border drawn around a selected item.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Border {
    pub color: String,
    pub width: u32,
}

impl Border {
    /// Inline CSS for the border.
    ///
    /// Drawn as an inset outline so toggling it never moves the layout.
    pub fn css(&self) -> String {
        format!(
            "outline: {w}px solid {c}; outline-offset: -{w}px;",
            w = self.width,
            c = self.color
        )
    }
}

/// Renders the child unchanged, bordered only while selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DefaultSelectableStyle {
    pub color: String,
    pub width: u32,
}

impl DefaultSelectableStyle {
    pub const DEFAULT_COLOR: &'static str = "#3b82f6";

    /// Border of `width` pixels in any CSS color.
    pub fn new(color: impl Into<String>, width: u32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }

    /// `None` means no border attribute at all, not a transparent one.
    pub fn border(&self, is_selected: bool) -> Option<Border> {
        is_selected.then(|| Border {
            color: self.color.clone(),
            width: self.width,
        })
    }
}

impl Default for DefaultSelectableStyle {
    fn default() -> Self {
        Self::new(Self::DEFAULT_COLOR, 1)
    }
}

impl SelectableStyle for DefaultSelectableStyle {
    type Body = AnyView;

    fn make_body(&self, configuration: SelectableConfiguration) -> AnyView {
        let style = self.border(configuration.is_selected).map(|b| b.css());
        view! {
            <div class="selectable" style=style>
                {configuration.view}
            </div>
        }
        .into_any()
    }
}

/// BEM class strategy: `selectable` always, `selectable--selected` while
/// selected. The host stylesheet decides what selection looks like.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClassSelectableStyle {
    pub class: String,
    pub selected_class: String,
}

impl ClassSelectableStyle {
    /// `selected_class` is added on top of `class` while selected.
    pub fn new(class: impl Into<String>, selected_class: impl Into<String>) -> Self {
        Self {
            class: class.into(),
            selected_class: selected_class.into(),
        }
    }

    /// Class attribute for an item in the given state.
    pub fn class_for(&self, is_selected: bool) -> String {
        if is_selected {
            format!("{} {}", self.class, self.selected_class)
        } else {
            self.class.clone()
        }
    }
}

impl Default for ClassSelectableStyle {
    fn default() -> Self {
        Self::new("selectable", "selectable--selected")
    }
}

impl SelectableStyle for ClassSelectableStyle {
    type Body = AnyView;

    fn make_body(&self, configuration: SelectableConfiguration) -> AnyView {
        view! {
            <div class=self.class_for(configuration.is_selected)>
                {configuration.view}
            </div>
        }
        .into_any()
    }
}
