//! Selectable view decoration for Leptos.
//!
//! Any view can join a single-select, optional single-select or
//! multi-select group. The selection state is a caller-owned [`RwSignal`]
//! and the visual treatment of selected/unselected items is a pluggable
//! [`SelectableStyle`] provided through context.
//!
//! ```rust,ignore
//! let selected = RwSignal::new("b");
//! view! {
//!     {["a", "b", "c"].into_iter().map(|id| {
//!         selectable(move || view! { <span>{id}</span> }, selected, id)
//!     }).collect_view()}
//! }
//! ```
//!
//! [`RwSignal`]: leptos::prelude::RwSignal

pub mod modifier;
pub mod policy;
pub mod style;

pub use modifier::{
    selectable, selectable_optional, selectable_set, selectable_with, Selectable,
    SelectableOptional, SelectableSet,
};
pub use policy::{Multi, Optional, Required, SelectionPolicy};
pub use style::{
    selectable_style, use_selectable_style, AnySelectableStyle, Border,
    ClassSelectableStyle, DefaultSelectableStyle, SelectableConfiguration, SelectableStyle,
    SelectableStyleConfig, SelectableStyleContext, SelectableStyleProvider,
};
