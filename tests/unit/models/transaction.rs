use super::*;

#[test]
fn selection_range_normalizes_reversed_bounds() {
    let sel = SelectionRange::new(7, 3);
    assert_eq!(sel.from, 3);
    assert_eq!(sel.to, 7);
    assert_eq!(sel.len(), 4);
    assert!(!sel.is_empty());
    assert!(SelectionRange::cursor(5).is_empty());
}

#[test]
fn validate_accepts_sorted_adjacent_changes() {
    let tx = Transaction::new()
        .with_change(Change::new(0, 2, "x"))
        .with_change(Change::new(2, 4, "y"));
    assert_eq!(tx.validate(4), Ok(()));
}

#[test]
fn validate_rejects_out_of_bounds() {
    let tx = Transaction::replace(2, 9, "x");
    assert_eq!(
        tx.validate(5),
        Err(EditError::OutOfBounds {
            from: 2,
            to: 9,
            len: 5
        })
    );
}

#[test]
fn validate_rejects_overlap_and_reversed_ranges() {
    let overlapping = Transaction::new()
        .with_change(Change::new(0, 3, ""))
        .with_change(Change::new(2, 4, ""));
    assert_eq!(
        overlapping.validate(10),
        Err(EditError::Overlapping {
            from: 2,
            prev_end: 3
        })
    );

    let reversed = Transaction::replace(4, 1, "");
    assert_eq!(
        reversed.validate(10),
        Err(EditError::Reversed { from: 4, to: 1 })
    );
}

#[test]
fn inserted_chars_counts_chars_not_bytes() {
    assert_eq!(Change::new(0, 0, "héllo").inserted_chars(), 5);
}
