//! Selection modifiers.
//!
//! One generic decorator, [`selectable_with`], parameterized by a
//! [`SelectionPolicy`]; [`selectable`], [`selectable_optional`] and
//! [`selectable_set`] bind it to the three built-in policies.

use crate::policy::{Multi, Optional, Required, SelectionPolicy};
use crate::style::{use_selectable_style, SelectableConfiguration, SelectableStyle};
use leptos::prelude::*;
use std::collections::HashSet;
use std::hash::Hash;

/// Decorates `children` as the group member `id` of `selection`.
///
/// The ambient style renders the result and re-renders it whenever the
/// selection or the style changes. Clicking the item applies
/// `P::select` to the bound state.
pub fn selectable_with<P, Id, C, V>(
    children: C,
    selection: RwSignal<P::State>,
    id: Id,
) -> impl IntoView
where
    P: SelectionPolicy<Id> + 'static,
    Id: Clone + Send + Sync + 'static,
    C: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    let style = use_selectable_style();
    let on_tap = tap_handler::<P, Id>(selection, id.clone());

    move || {
        let is_selected = selection.with(|state| P::is_selected(state, &id));
        let aria_selected = if is_selected { "true" } else { "false" };
        let on_tap = on_tap.clone();
        // Signals read by the child must not re-render the whole item.
        let child = untrack(|| children());
        let view = view! {
            <div
                class="selectable__item"
                role="option"
                aria-selected=aria_selected
                on:click=move |_| on_tap()
            >
                {child}
            </div>
        }
        .into_any();

        style.with(|style| {
            style.make_body(SelectableConfiguration {
                view,
                is_selected,
            })
        })
    }
}

/// Click handler that applies `P::select` for `id` to the bound state.
fn tap_handler<P, Id>(
    selection: RwSignal<P::State>,
    id: Id,
) -> impl Fn() + Clone + Send + Sync + 'static
where
    P: SelectionPolicy<Id> + 'static,
    Id: Clone + Send + Sync + 'static,
{
    move || tap::<P, Id>(selection, &id)
}

/// Applies the policy's `select` to the bound state.
pub(crate) fn tap<P, Id>(selection: RwSignal<P::State>, id: &Id)
where
    P: SelectionPolicy<Id>,
{
    selection.update(|state| P::select(state, id));
    log::debug!(
        "{} selection tapped, item selected: {}",
        P::NAME,
        selection.with_untracked(|state| P::is_selected(state, id))
    );
}

/// Exactly one of the group is selected; tapping selects `id`.
pub fn selectable<Id, C, V>(children: C, selection: RwSignal<Id>, id: Id) -> impl IntoView
where
    Id: PartialEq + Clone + Send + Sync + 'static,
    C: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    selectable_with::<Required, Id, C, V>(children, selection, id)
}

/// At most one of the group is selected; tapping the selected item clears it.
pub fn selectable_optional<Id, C, V>(
    children: C,
    selection: RwSignal<Option<Id>>,
    id: Id,
) -> impl IntoView
where
    Id: PartialEq + Clone + Send + Sync + 'static,
    C: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    selectable_with::<Optional, Id, C, V>(children, selection, id)
}

/// Any subset of the group is selected; tapping toggles `id`.
pub fn selectable_set<Id, C, V>(
    children: C,
    selection: RwSignal<HashSet<Id>>,
    id: Id,
) -> impl IntoView
where
    Id: Eq + Hash + Clone + Send + Sync + 'static,
    C: Fn() -> V + Send + Sync + 'static,
    V: IntoView + 'static,
{
    selectable_with::<Multi, Id, C, V>(children, selection, id)
}

/// Component form of [`selectable`].
#[component]
pub fn Selectable<Id: PartialEq + Clone + Send + Sync + 'static>(
    /// Group state, always holding one id
    selection: RwSignal<Id>,
    /// This item's id
    id: Id,
    children: ChildrenFn,
) -> impl IntoView {
    selectable(move || children(), selection, id)
}

/// Component form of [`selectable_optional`].
#[component]
pub fn SelectableOptional<Id: PartialEq + Clone + Send + Sync + 'static>(
    /// Group state, `None` when nothing is selected
    selection: RwSignal<Option<Id>>,
    /// This item's id
    id: Id,
    children: ChildrenFn,
) -> impl IntoView {
    selectable_optional(move || children(), selection, id)
}

/// Component form of [`selectable_set`].
#[component]
pub fn SelectableSet<Id: Eq + Hash + Clone + Send + Sync + 'static>(
    /// Ids currently selected
    selection: RwSignal<HashSet<Id>>,
    /// This item's id
    id: Id,
    children: ChildrenFn,
) -> impl IntoView {
    selectable_set(move || children(), selection, id)
}
