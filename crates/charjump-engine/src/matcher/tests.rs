use std::sync::Arc;

use charjump_common::{EngineError, Position, Range, ViewId};

use super::*;
use crate::buffer::TextBuffer;
use crate::snapshot::VisibleSnapshot;

fn snapshot_of(texts: &[&str]) -> (Arc<TextBuffer>, Vec<ViewId>, VisibleSnapshot) {
    let buffer = Arc::new(TextBuffer::new());
    let views = texts
        .iter()
        .enumerate()
        .map(|(i, text)| buffer.open(format!("view{i}"), *text))
        .collect();
    let snapshot = VisibleSnapshot::capture(buffer.clone());
    (buffer, views, snapshot)
}

fn span(line: u32, start: u32, end: u32) -> Range {
    Range::new(Position::new(line, start), Position::new(line, end))
}

#[test]
fn finds_every_occurrence_case_insensitively() {
    let (_, views, snapshot) = snapshot_of(&["Cat cat CAT dog"]);
    let matches = find("cat", &snapshot).unwrap();
    assert_eq!(matches.total(), 3);
    assert_eq!(
        matches.ranges(views[0]),
        &[span(0, 0, 3), span(0, 4, 7), span(0, 8, 11)]
    );
}

#[test]
fn occurrences_across_a_visibility_gap_are_not_found() {
    let buffer = Arc::new(TextBuffer::new());
    let view = buffer.open("gap", "abc\nxyz\ndef");
    assert!(buffer.set_visible(view, vec![span(0, 0, 3), span(2, 0, 3)]));
    let snapshot = VisibleSnapshot::capture(buffer.clone());

    assert!(find("cd", &snapshot).unwrap().is_empty());
    assert!(find("xyz", &snapshot).unwrap().is_empty());
    assert_eq!(
        find("c|d", &snapshot).unwrap().ranges(view),
        &[span(0, 2, 3), span(2, 0, 1)]
    );
}

#[test]
fn empty_pattern_matches_nothing() {
    let (_, views, snapshot) = snapshot_of(&["anything", "else"]);
    let matches = find("", &snapshot).unwrap();
    assert!(matches.is_empty());
    assert_eq!(matches.views().collect::<Vec<_>>(), views);
}

#[test]
fn malformed_pattern_is_a_pattern_error() {
    let (_, _, snapshot) = snapshot_of(&["text"]);
    let err = find("(unclosed", &snapshot).unwrap_err();
    assert!(matches!(err, EngineError::Pattern(_)));
}

#[test]
fn pattern_is_a_regex() {
    let (_, views, snapshot) = snapshot_of(&["a1 b22 c333"]);
    let matches = find(r"\d+", &snapshot).unwrap();
    assert_eq!(
        matches.ranges(views[0]),
        &[span(0, 1, 2), span(0, 4, 6), span(0, 8, 11)]
    );
}

#[test]
fn zero_length_matches_are_skipped() {
    let (_, _, snapshot) = snapshot_of(&["abc"]);
    let matches = find("x*", &snapshot).unwrap();
    assert!(matches.is_empty());
}

#[test]
fn matches_span_lines() {
    let (_, views, snapshot) = snapshot_of(&["one\ntwo three\nfour"]);
    let matches = find("three", &snapshot).unwrap();
    assert_eq!(matches.ranges(views[0]), &[span(1, 4, 9)]);
}

#[test]
fn only_visible_text_is_searched() {
    let (buffer, views, _) = snapshot_of(&["cat\ndog\ncat\ndog"]);
    buffer.set_visible_lines(views[0], 1, 2);
    let snapshot = VisibleSnapshot::capture(buffer);

    let matches = find("cat", &snapshot).unwrap();
    assert_eq!(matches.ranges(views[0]), &[span(2, 0, 3)]);
}

#[test]
fn multibyte_text_uses_character_columns() {
    let (_, views, snapshot) = snapshot_of(&["ünïcödé cat"]);
    let matches = find("cat", &snapshot).unwrap();
    assert_eq!(matches.ranges(views[0]), &[span(0, 8, 11)]);
}

#[test]
fn single_is_unique_across_views() {
    let (_, views, snapshot) = snapshot_of(&["nothing here", "a target"]);
    let matches = find("target", &snapshot).unwrap();
    let only = matches.single().unwrap();
    assert_eq!(only.view, views[1]);
    assert_eq!(only.range, span(0, 2, 8));

    let matches = find("e", &snapshot).unwrap();
    assert!(matches.single().is_none());
}

#[test]
fn flattened_matches_keep_view_order() {
    let (_, views, snapshot) = snapshot_of(&["x.x", "x"]);
    let matches = find("x", &snapshot).unwrap();
    let flat: Vec<_> = matches.matches().map(|m| (m.view, m.range)).collect();
    assert_eq!(
        flat,
        vec![
            (views[0], span(0, 0, 1)),
            (views[0], span(0, 2, 3)),
            (views[1], span(0, 0, 1)),
        ]
    );
}

#[test]
fn finder_is_pure() {
    let (_, _, snapshot) = snapshot_of(&["cat cat"]);
    let finder = MatchFinder::compile("cat").unwrap();
    assert_eq!(finder.find(&snapshot), finder.find(&snapshot));
}

#[tokio::test]
async fn concurrent_scan_matches_sequential_scan() {
    let (_, _, snapshot) = snapshot_of(&["cat", "dog cat", "", "CAT cat cat"]);
    let finder = MatchFinder::compile("cat").unwrap();

    let sequential = finder.find(&snapshot);
    let concurrent = finder.find_concurrent(&snapshot).await;
    assert_eq!(concurrent, sequential);
    assert_eq!(concurrent.total(), 5);
}
