// Host-side tests for console history recall semantics.

use portfolio_core::History;

fn seeded() -> History {
    let mut history = History::new();
    history.push("a");
    history.push("b");
    history.push("c");
    history
}

#[test]
fn consecutive_duplicates_collapse() {
    let mut history = History::new();
    history.push("atoms 2000");
    history.push("atoms 2000");
    assert_eq!(history.len(), 1);
    history.push("clear");
    history.push("atoms 2000");
    assert_eq!(history.len(), 3);
}

#[test]
fn non_consecutive_duplicates_are_kept() {
    let mut history = History::new();
    history.push("a");
    history.push("b");
    history.push("a");
    assert_eq!(history.entries().join(" "), "a b a");
}

#[test]
fn recall_previous_walks_back_and_parks_at_oldest() {
    let mut history = seeded();
    assert_eq!(history.recall_previous(), Some("c"));
    assert_eq!(history.recall_previous(), Some("b"));
    assert_eq!(history.recall_previous(), Some("a"));
    assert_eq!(history.recall_previous(), Some("a"));
}

#[test]
fn recall_next_walks_forward_then_clears() {
    let mut history = seeded();
    history.recall_previous();
    history.recall_previous();
    history.recall_previous(); // at "a"
    assert_eq!(history.recall_next(), Some("b"));
    assert_eq!(history.recall_next(), Some("c"));
    // Past the newest entry: empty input, recall mode off.
    assert_eq!(history.recall_next(), Some(""));
    assert_eq!(history.recall_next(), None);
    // Recall restarts from the newest entry.
    assert_eq!(history.recall_previous(), Some("c"));
}

#[test]
fn recall_next_without_recalling_does_nothing() {
    let mut history = seeded();
    assert_eq!(history.recall_next(), None);
}

#[test]
fn push_resets_the_recall_cursor() {
    let mut history = seeded();
    history.recall_previous();
    history.recall_previous(); // at "b"
    history.push("d");
    assert_eq!(history.recall_previous(), Some("d"));
}

#[test]
fn recall_on_empty_history_is_inert() {
    let mut history = History::new();
    assert_eq!(history.recall_previous(), None);
    assert_eq!(history.recall_next(), None);
}
