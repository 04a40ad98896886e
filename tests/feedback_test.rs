mod common;

use common::{delegate, state};
use streamsync::{cmd::Cmd, data::Category};

#[test]
fn stale_timer_does_not_clear_a_newer_message() {
    let (mut delegate, _receiver) = delegate();
    let mut state = state();

    // Two messages in quick succession; only the second's timer counts.
    delegate.command(&mut state, Cmd::SyncSelected);
    let first = state.feedback.as_ref().unwrap().generation;
    delegate.command(&mut state, Cmd::SyncSelected);
    let second = state.feedback.as_ref().unwrap().generation;
    assert_ne!(first, second);

    delegate.command(&mut state, Cmd::HideFeedback(first));
    assert!(state.feedback.is_some(), "stale timer must be ignored");

    delegate.command(&mut state, Cmd::HideFeedback(second));
    assert!(state.feedback.is_none());
}

#[test]
fn at_most_one_message_is_visible() {
    let (mut delegate, _receiver) = delegate();
    let mut state = state();

    delegate.command(&mut state, Cmd::SyncSelected);
    delegate.command(&mut state, Cmd::SyncSelected);

    // The state holds a single slot; the second message replaced the first.
    assert_eq!(state.feedback.as_ref().unwrap().generation, 2);
}

#[test]
fn accordion_toggle_twice_restores_the_original_state() {
    let (mut delegate, _receiver) = delegate();
    let mut state = state();
    assert!(!state.library.shelf(Category::Albums).open);

    delegate.command(&mut state, Cmd::ToggleShelf(Category::Albums));
    assert!(state.library.shelf(Category::Albums).open);
    assert_eq!(state.library.shelf(Category::Albums).icon_rotation(), 180.0);

    delegate.command(&mut state, Cmd::ToggleShelf(Category::Albums));
    assert!(!state.library.shelf(Category::Albums).open);
    assert_eq!(state.library.shelf(Category::Albums).icon_rotation(), 0.0);
}
