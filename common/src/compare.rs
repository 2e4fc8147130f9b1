//! Column comparators.
//!
//! Each comparator orders two *displayed* cell strings: the rendered
//! table is the source of truth during sorting, not the original
//! payload. All three return a proper three-way [`Ordering`] so any
//! stable sort yields a total order.

use std::cmp::Ordering;

use crate::format::display_to_date;

/// Comparator over two displayed cell values; `ascending` flips the
/// sign of the result.
pub type Comparator = fn(&str, &str, bool) -> Ordering;

/// Picks the comparator for a logical column id. Dates and amounts get
/// type-aware ordering, everything else is compared as text.
pub fn for_column(column_id: &str) -> Comparator {
    match column_id {
        "date" => compare_dates,
        "amount" => compare_amounts,
        _ => compare_strings,
    }
}

/// Orders two `<whole>.<fraction>` amount strings: whole parts
/// numerically first, fraction parts as the tiebreak.
pub fn compare_amounts(a: &str, b: &str, ascending: bool) -> Ordering {
    let (whole_a, fraction_a) = split_amount(a);
    let (whole_b, fraction_b) = split_amount(b);
    directed(
        whole_a.cmp(&whole_b).then(fraction_a.cmp(&fraction_b)),
        ascending,
    )
}

/// Orders two `YYYY-MM-DD HH:MM` strings chronologically. A value that
/// fails to parse sorts before any that parses.
pub fn compare_dates(a: &str, b: &str, ascending: bool) -> Ordering {
    directed(display_to_date(a).cmp(&display_to_date(b)), ascending)
}

/// Case-insensitive lexicographic order.
pub fn compare_strings(a: &str, b: &str, ascending: bool) -> Ordering {
    directed(a.to_lowercase().cmp(&b.to_lowercase()), ascending)
}

fn directed(ordering: Ordering, ascending: bool) -> Ordering {
    if ascending { ordering } else { ordering.reverse() }
}

fn split_amount(display: &str) -> (i64, i64) {
    let mut parts = display.splitn(2, '.');
    let whole = parts.next().and_then(|w| w.parse().ok()).unwrap_or(0);
    let fraction = parts.next().and_then(|f| f.parse().ok()).unwrap_or(0);
    (whole, fraction)
}
