//! Selection policies: how a group's state answers "is this item selected"
//! and how it changes when an item is tapped.

use std::collections::HashSet;
use std::hash::Hash;

/// Shape of a selection group's state plus its toggle rule.
///
/// `Id` equality must stay stable for as long as the item is mounted.
pub trait SelectionPolicy<Id> {
    /// Caller-owned state bound through an `RwSignal`.
    type State: Send + Sync + 'static;

    /// Short name used in log output.
    const NAME: &'static str;

    /// Whether `id` is selected in `state`. Pure.
    fn is_selected(state: &Self::State, id: &Id) -> bool;

    /// Applies a tap on `id` to `state`.
    fn select(state: &mut Self::State, id: &Id);
}

/// Exactly one item is always selected.
#[derive(Clone, Copy, Debug, Default)]
pub struct Required;

impl<Id> SelectionPolicy<Id> for Required
where
    Id: PartialEq + Clone + Send + Sync + 'static,
{
    type State = Id;

    const NAME: &'static str = "required";

    fn is_selected(state: &Id, id: &Id) -> bool {
        state == id
    }

    // Writes even when `id` is already selected.
    fn select(state: &mut Id, id: &Id) {
        *state = id.clone();
    }
}

/// Zero or one item selected; tapping the selected item clears it.
#[derive(Clone, Copy, Debug, Default)]
pub struct Optional;

impl<Id> SelectionPolicy<Id> for Optional
where
    Id: PartialEq + Clone + Send + Sync + 'static,
{
    type State = Option<Id>;

    const NAME: &'static str = "optional";

    fn is_selected(state: &Option<Id>, id: &Id) -> bool {
        state.as_ref() == Some(id)
    }

    fn select(state: &mut Option<Id>, id: &Id) {
        if state.as_ref() == Some(id) {
            *state = None;
        } else {
            *state = Some(id.clone());
        }
    }
}

/// Any number of items selected; tapping toggles membership.
#[derive(Clone, Copy, Debug, Default)]
pub struct Multi;

impl<Id> SelectionPolicy<Id> for Multi
where
    Id: Eq + Hash + Clone + Send + Sync + 'static,
{
    type State = HashSet<Id>;

    const NAME: &'static str = "multi";

    fn is_selected(state: &HashSet<Id>, id: &Id) -> bool {
        state.contains(id)
    }

    fn select(state: &mut HashSet<Id>, id: &Id) {
        if !state.remove(id) {
            state.insert(id.clone());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tap<P: SelectionPolicy<Id>, Id>(state: &mut P::State, id: Id) {
        P::select(state, &id);
    }

    #[test]
    fn test_required_last_write_wins() {
        let mut state = "b";
        tap::<Required, _>(&mut state, "a");
        tap::<Required, _>(&mut state, "c");
        assert_eq!(state, "c");
    }

    #[test]
    fn test_required_reselect_keeps_selection() {
        let mut state = 2;
        tap::<Required, _>(&mut state, 2);
        assert_eq!(state, 2);
        assert!(Required::is_selected(&state, &2));
    }

    #[test]
    fn test_required_group_scenario() {
        let ids = ["A", "B", "C"];
        let mut state = "B";
        tap::<Required, _>(&mut state, "A");

        assert_eq!(state, "A");
        let selected: Vec<_> = ids
            .iter()
            .filter(|id| Required::is_selected(&state, *id))
            .collect();
        assert_eq!(selected, vec![&"A"]);
    }

    #[test]
    fn test_optional_toggle_is_its_own_inverse() {
        let mut state: Option<&str> = None;
        tap::<Optional, _>(&mut state, "X");
        assert_eq!(state, Some("X"));
        tap::<Optional, _>(&mut state, "X");
        assert_eq!(state, None);
    }

    #[test]
    fn test_optional_switches_between_items() {
        let mut state = Some(1);
        tap::<Optional, _>(&mut state, 2);
        assert_eq!(state, Some(2));
        assert!(!Optional::is_selected(&state, &1));
        assert!(Optional::is_selected(&state, &2));
    }

    #[test]
    fn test_multi_toggle_scenario() {
        let mut state: HashSet<&str> = HashSet::new();

        tap::<Multi, _>(&mut state, "A");
        assert_eq!(state, HashSet::from(["A"]));
        tap::<Multi, _>(&mut state, "B");
        assert_eq!(state, HashSet::from(["A", "B"]));
        tap::<Multi, _>(&mut state, "A");
        assert_eq!(state, HashSet::from(["B"]));
    }

    #[test]
    fn test_multi_double_tap_restores_set() {
        let before = HashSet::from([1, 3]);
        for id in [1, 2, 3] {
            let mut state = before.clone();
            tap::<Multi, _>(&mut state, id);
            tap::<Multi, _>(&mut state, id);
            assert_eq!(state, before);
        }
    }

    #[test]
    fn test_is_selected_is_pure() {
        let state = HashSet::from(["A"]);
        for _ in 0..3 {
            assert!(Multi::is_selected(&state, &"A"));
            assert!(!Multi::is_selected(&state, &"B"));
        }
        assert_eq!(state, HashSet::from(["A"]));
    }
}
