//! Sort-indicator state machine and sort-order computation.
//!
//! The per-header indicator state lives here as explicit values; the
//! view derives the glyph from the state for display and never parses
//! it back out of the rendered label. Clicking a header either flips
//! the active column's direction (a cheap row reversal, since the rows
//! are already ordered) or starts a fresh descending sort and resets
//! every other header.

use crate::compare::Comparator;

/// Per-header sort state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortIndicator {
    #[default]
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    /// Glyph shown after the header label. Unsorted headers show the
    /// neutral both-arrows glyph rather than nothing, so column widths
    /// do not shift when the active sort column changes.
    pub fn glyph(self) -> char {
        match self {
            SortIndicator::Unsorted => '\u{2195}',   // ↕
            SortIndicator::Ascending => '\u{2193}',  // ↓
            SortIndicator::Descending => '\u{2191}', // ↑
        }
    }
}

/// What a header click requires of the table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SortAction {
    /// The column is already ordered; reversing the rows flips the
    /// direction without re-comparing anything.
    Reverse,
    /// The column was unsorted; compare and reorder from scratch.
    FullSort { ascending: bool },
}

/// Applies one header click to the indicator states.
///
/// Ascending and Descending toggle into each other and request a
/// reversal. An Unsorted header becomes the new active column: every
/// other indicator resets to Unsorted and a full descending sort is
/// requested (first click sorts descending, matching the glyph cycle
/// Unsorted → Descending → Ascending → Descending → ...).
pub fn click_header(indicators: &mut [SortIndicator], clicked: usize) -> SortAction {
    match indicators[clicked] {
        SortIndicator::Ascending => {
            indicators[clicked] = SortIndicator::Descending;
            SortAction::Reverse
        }
        SortIndicator::Descending => {
            indicators[clicked] = SortIndicator::Ascending;
            SortAction::Reverse
        }
        SortIndicator::Unsorted => {
            for indicator in indicators.iter_mut() {
                *indicator = SortIndicator::Unsorted;
            }
            indicators[clicked] = SortIndicator::Descending;
            SortAction::FullSort { ascending: false }
        }
    }
}

/// Computes the move plan that reverses a sequence of `len` rows in
/// place.
///
/// Each `(row, anchor)` step means "move the row that started at
/// position `row` directly before the row that started at position
/// `anchor`". The steps walk the original order front to back, moving
/// each row in front of its predecessor, so n-1 moves reverse the
/// sequence without touching row contents. A sequence of zero or one
/// rows yields an empty plan. Applying the plan for the same length
/// twice restores the original order.
pub fn reversal_moves(len: usize) -> Vec<(usize, usize)> {
    (1..len).map(|row| (row, row - 1)).collect()
}

/// Computes the permutation that sorts `values` with `cmp`.
///
/// Returns the source index for each target position: the row that
/// should end up at position `i` is the one currently at `order[i]`.
/// The sort is stable, so rows with equal keys keep their relative
/// order.
pub fn sort_order(values: &[String], cmp: Comparator, ascending: bool) -> Vec<usize> {
    let mut order: Vec<usize> = (0..values.len()).collect();
    order.sort_by(|&a, &b| cmp(&values[a], &values[b], ascending));
    order
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compare;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    fn apply(values: &[String], order: &[usize]) -> Vec<String> {
        order.iter().map(|&i| values[i].clone()).collect()
    }

    #[test]
    fn click_cycle_is_descending_then_alternating() {
        let mut indicators = vec![SortIndicator::Unsorted; 3];

        assert_eq!(click_header(&mut indicators, 1), SortAction::FullSort { ascending: false });
        assert_eq!(indicators[1], SortIndicator::Descending);

        assert_eq!(click_header(&mut indicators, 1), SortAction::Reverse);
        assert_eq!(indicators[1], SortIndicator::Ascending);

        assert_eq!(click_header(&mut indicators, 1), SortAction::Reverse);
        assert_eq!(indicators[1], SortIndicator::Descending);
    }

    #[test]
    fn switching_columns_resets_the_previous_one() {
        let mut indicators = vec![SortIndicator::Unsorted; 3];
        click_header(&mut indicators, 0);
        click_header(&mut indicators, 0);
        assert_eq!(indicators[0], SortIndicator::Ascending);

        // First click on another column resets the rest...
        assert_eq!(click_header(&mut indicators, 2), SortAction::FullSort { ascending: false });
        assert_eq!(indicators, vec![
            SortIndicator::Unsorted,
            SortIndicator::Unsorted,
            SortIndicator::Descending,
        ]);

        // ...and later toggles leave the others untouched.
        click_header(&mut indicators, 2);
        assert_eq!(indicators[0], SortIndicator::Unsorted);
        assert_eq!(indicators[1], SortIndicator::Unsorted);
    }

    #[test]
    fn sorts_amounts_descending() {
        let values = strings(&["10.50", "2.00", "10.05"]);
        let order = sort_order(&values, compare::compare_amounts, false);
        assert_eq!(apply(&values, &order), strings(&["10.50", "10.05", "2.00"]));
    }

    #[test]
    fn sorts_dates_ascending() {
        let values = strings(&["2021-01-02 10:00", "2021-01-01 09:00"]);
        let order = sort_order(&values, compare::compare_dates, true);
        assert_eq!(
            apply(&values, &order),
            strings(&["2021-01-01 09:00", "2021-01-02 10:00"])
        );
    }

    #[test]
    fn equal_keys_keep_their_relative_order() {
        let values = strings(&["b", "A", "a", "B"]);
        let order = sort_order(&values, compare::compare_strings, true);
        // "A" (1) before "a" (2), "b" (0) before "B" (3).
        assert_eq!(order, vec![1, 2, 0, 3]);
    }

    /// Applies a move plan to a value sequence the way the table
    /// applies it to live rows: each step relocates a row *by
    /// identity*, so positions shift under the remaining steps exactly
    /// as they do in the DOM.
    fn apply_moves(items: &mut Vec<char>, moves: &[(usize, usize)]) {
        let snapshot = items.clone();
        for &(row, anchor) in moves {
            let moved = snapshot[row];
            let target = snapshot[anchor];
            let from = items.iter().position(|&c| c == moved).unwrap();
            let item = items.remove(from);
            let to = items.iter().position(|&c| c == target).unwrap();
            items.insert(to, item);
        }
    }

    #[test]
    fn reversal_moves_reverse_even_and_odd_lengths() {
        for values in [vec!['a', 'b', 'c', 'd'], vec!['a', 'b', 'c']] {
            let mut items = values.clone();
            let moves = reversal_moves(items.len());
            apply_moves(&mut items, &moves);
            let reversed: Vec<char> = values.iter().rev().copied().collect();
            assert_eq!(items, reversed);
        }
    }

    #[test]
    fn reversing_twice_restores_the_original_order() {
        let original = vec!['a', 'b', 'c', 'd', 'e'];
        let mut items = original.clone();
        let moves = reversal_moves(items.len());
        apply_moves(&mut items, &moves);
        apply_moves(&mut items, &moves);
        assert_eq!(items, original);
    }

    #[test]
    fn short_sequences_need_no_moves() {
        assert!(reversal_moves(0).is_empty());
        assert!(reversal_moves(1).is_empty());
        assert_eq!(reversal_moves(2), vec![(1, 0)]);
    }

    #[test]
    fn empty_input_sorts_to_empty_order() {
        assert!(sort_order(&[], compare::compare_strings, true).is_empty());
    }
}
