use super::{State, Window};
use crate::error::ErrorKind;

/// Push every row followed by end of input, collecting `(row, prev, curr, next)`.
fn frames(rows: &[&[u8]]) -> Vec<(usize, Vec<u8>, Vec<u8>, Vec<u8>)> {
    let mut window = Window::new();
    let mut out = Vec::new();

    for line in rows.iter().copied().map(Some).chain([None]) {
        if let Some(f) = window.advance(line).unwrap() {
            out.push((f.row, f.prev.to_vec(), f.curr.to_vec(), f.next.to_vec()));
        }
    }

    assert_eq!(window.state(), State::AfterLast);
    out
}

#[test]
fn test_one_frame_per_row() {
    let out = frames(&[b"1..", b".*.", b"..2"]);

    assert_eq!(
        out,
        [
            (0, b"...".to_vec(), b"1..".to_vec(), b".*.".to_vec()),
            (1, b"1..".to_vec(), b".*.".to_vec(), b"..2".to_vec()),
            (2, b".*.".to_vec(), b"..2".to_vec(), b"...".to_vec()),
        ]
    );
}

#[test]
fn test_single_row() {
    let out = frames(&[b"*1"]);
    assert_eq!(out, [(0, b"..".to_vec(), b"*1".to_vec(), b"..".to_vec())]);
}

#[test]
fn test_frames_have_equal_width() {
    for (row, prev, curr, next) in frames(&[b"12.", b"..*", b"3.."]) {
        assert_eq!(prev.len(), 3, "prev of row {row}");
        assert_eq!(curr.len(), 3, "curr of row {row}");
        assert_eq!(next.len(), 3, "next of row {row}");
    }

    let (_, prev, _, next) = &frames(&[b"7*"])[0];
    assert_eq!(prev, b"..");
    assert_eq!(next, b"..");
}

#[test]
fn test_empty_input() {
    let mut window = Window::new();
    assert!(window.advance(None).unwrap().is_none());
    assert_eq!(window.state(), State::Done);
    assert!(window.advance(Some(&b".."[..])).unwrap().is_none());
    assert_eq!(window.state(), State::Done);
}

#[test]
fn test_states() {
    let mut window = Window::new();
    assert_eq!(window.state(), State::BeforeFirst);
    assert!(window.advance(Some(&b".."[..])).unwrap().is_none());
    assert_eq!(window.state(), State::Streaming);
    assert_eq!(window.width(), 2);
    assert!(window.advance(None).unwrap().is_some());
    assert_eq!(window.state(), State::AfterLast);
    assert!(window.advance(None).unwrap().is_none());
    assert_eq!(window.state(), State::Done);
}

#[test]
fn test_short_last_row_is_padded() {
    let out = frames(&[b"1.*.", b"2"]);
    assert_eq!(out[1], (1, b"1.*.".to_vec(), b"2...".to_vec(), b"....".to_vec()));
}

#[test]
fn test_empty_last_row_is_padded() {
    let out = frames(&[b"1.*.", b""]);
    assert_eq!(out.len(), 2);
    assert_eq!(out[1].2, b"....".to_vec());
}

#[test]
fn test_short_row_before_last() {
    let mut window = Window::new();
    window.advance(Some(&b"...."[..])).unwrap();
    window.advance(Some(&b".."[..])).unwrap();

    let error = window.advance(Some(&b"...."[..])).unwrap_err();
    assert_eq!(error.pos().line(), 1);

    assert!(matches!(
        error.kind(),
        ErrorKind::InconsistentWidth {
            expected: 4,
            actual: 2
        }
    ));
}

#[test]
fn test_long_row() {
    let mut window = Window::new();
    window.advance(Some(&b"..."[..])).unwrap();

    let error = window.advance(Some(&b"...."[..])).unwrap_err();
    assert_eq!(error.pos().line(), 1);

    assert!(matches!(
        error.kind(),
        ErrorKind::InconsistentWidth {
            expected: 3,
            actual: 4
        }
    ));
}
