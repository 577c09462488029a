//! Ambient style slot.
//!
//! The active [`AnySelectableStyle`] travels down the view tree through
//! Leptos context. An override applies to the views created inside it and
//! nowhere else; lookups fall back to [`DefaultSelectableStyle`] when no
//! override encloses them.
//!
//! [`DefaultSelectableStyle`]: super::DefaultSelectableStyle

use super::AnySelectableStyle;
use leptos::prelude::*;
use leptos::tachys::reactive_graph::OwnedView;

/// Context value carrying the style for a subtree.
#[derive(Clone, Copy, Debug)]
pub struct SelectableStyleContext(pub Signal<AnySelectableStyle>);

/// Runs `f` in a child reactive owner that provides `style`.
///
/// The owner is returned with the value: everything `f` created is disposed
/// once it is dropped.
pub(crate) fn scoped<T>(style: Signal<AnySelectableStyle>, f: impl FnOnce() -> T) -> (T, Owner) {
    log::debug!(
        "selectable style override: {}",
        style.with_untracked(|s| s.name())
    );

    let owner = Owner::current()
        .map(|parent| parent.child())
        .unwrap_or_else(Owner::new);
    let value = owner.with(|| {
        provide_context(SelectableStyleContext(style));
        f()
    });
    (value, owner)
}

/// Nearest enclosing style, or the default one.
pub fn use_selectable_style() -> Signal<AnySelectableStyle> {
    use_context::<SelectableStyleContext>()
        .map(|ctx| ctx.0)
        .unwrap_or_else(|| Signal::stored(AnySelectableStyle::default()))
}

/// Applies `style` to every selectable item rendered by `children`.
///
/// Views created after this call still see the enclosing style. The
/// returned view owns the reactive state created by `children`.
pub fn selectable_style<V>(
    style: impl Into<Signal<AnySelectableStyle>>,
    children: impl FnOnce() -> V,
) -> impl IntoView
where
    V: IntoView + 'static,
{
    let (view, owner) = scoped(style.into(), children);
    OwnedView::new_with_owner(view, owner)
}

/// Component form of [`selectable_style`].
#[component]
pub fn SelectableStyleProvider(
    /// Style for the wrapped subtree (a plain style or a signal of one)
    #[prop(into)]
    style: Signal<AnySelectableStyle>,
    children: Children,
) -> impl IntoView {
    selectable_style(style, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::ClassSelectableStyle;

    fn current_name() -> &'static str {
        use_selectable_style().with_untracked(|s| s.name())
    }

    fn stored(style: AnySelectableStyle) -> Signal<AnySelectableStyle> {
        Signal::stored(style)
    }

    #[test]
    fn test_default_when_never_overridden() {
        let owner = Owner::new();
        owner.set();

        assert!(current_name().ends_with("DefaultSelectableStyle"));
    }

    #[test]
    fn test_nearest_override_wins() {
        let owner = Owner::new();
        owner.set();

        let outer = stored(AnySelectableStyle::from_fn("outer", |c| c.view));
        let inner = stored(AnySelectableStyle::from_fn("inner", |c| c.view));

        let ((outer_seen, inner_seen, after_inner), _scope) = scoped(outer, || {
            let outer_seen = current_name();
            let (inner_seen, _inner_scope) = scoped(inner, current_name);
            (outer_seen, inner_seen, current_name())
        });

        assert_eq!(outer_seen, "outer");
        assert_eq!(inner_seen, "inner");
        assert_eq!(after_inner, "outer");
    }

    #[test]
    fn test_override_does_not_leak_to_siblings() {
        let owner = Owner::new();
        owner.set();

        let (name, _scope) = scoped(
            stored(AnySelectableStyle::new(ClassSelectableStyle::default())),
            current_name,
        );

        assert!(name.ends_with("ClassSelectableStyle"));
        assert!(current_name().ends_with("DefaultSelectableStyle"));
    }

    #[test]
    fn test_style_signal_switches_in_place() {
        let owner = Owner::new();
        owner.set();

        let active = RwSignal::new(AnySelectableStyle::default());
        let (seen, _scope) = scoped(active.into(), use_selectable_style);
        assert!(seen.with_untracked(|s| s.name()).ends_with("DefaultSelectableStyle"));

        active.set(AnySelectableStyle::from_fn("switched", |c| c.view));
        assert_eq!(seen.with_untracked(|s| s.name()), "switched");
    }

    #[test]
    fn test_state_created_in_scope_outlives_the_call() {
        let owner = Owner::new();
        owner.set();

        let (count, scope) = scoped(stored(AnySelectableStyle::default()), || RwSignal::new(1));
        assert_eq!(count.try_get_untracked(), Some(1));

        drop(scope);
        assert_eq!(count.try_get_untracked(), None);
    }

    #[test]
    fn test_selectable_style_keeps_subtree_state() {
        let owner = Owner::new();
        owner.set();

        let html = selectable_style(AnySelectableStyle::default(), || {
            let label = RwSignal::new("kept");
            move || label.get()
        })
        .to_html();

        assert!(html.contains("kept"));
    }
}
