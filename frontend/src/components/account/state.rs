//! Component state for the account overview.
//!
//! Holds the account summary once loaded, the per-header sort
//! indicator values, the retry flag, and a reference to the rendered
//! table. The indicator values are the single source of truth for the
//! header glyphs: the view derives the glyph from the state, never the
//! other way around.
//!
//! The transaction rows themselves are deliberately *not* kept here:
//! once rendered, the table body is owned by the DOM and sorting works
//! on the rendered cells (see `helpers.rs`).

use common::sort::SortIndicator;
use yew::prelude::*;

/// One table column: a stable logical id (carried as the `<th>` `id`
/// attribute and used to pick the comparator) and the visible label.
pub struct Column {
    pub id: &'static str,
    pub label: &'static str,
}

/// Display order of the transaction table columns. The header index
/// map is still resolved from the rendered row at runtime; nothing
/// outside the view relies on these positions.
pub const COLUMNS: [Column; 5] = [
    Column { id: "name", label: "Name" },
    Column { id: "creditordebit", label: "Credit/Debit" },
    Column { id: "description", label: "Description" },
    Column { id: "amount", label: "Amount" },
    Column { id: "date", label: "Date" },
];

/// Account fields shown above the table, pre-formatted for display.
pub struct Summary {
    pub name: String,
    pub iban: String,
    /// Balance with the currency code appended, e.g. `"2344.95 EUR"`.
    pub balance: String,
}

/// Main state container for the `AccountComponent`.
///
/// Fields are `pub` because they are accessed by the `view` and
/// `update` modules.
pub struct AccountComponent {
    /// Loaded account summary; `None` until the first successful fetch.
    pub summary: Option<Summary>,

    /// Sort indicator per column, indexed like `COLUMNS`. Reset to all
    /// `Unsorted` by every fresh ingestion.
    pub indicators: Vec<SortIndicator>,

    /// Whether the retry notice is currently shown.
    pub retrying: bool,

    /// Reference to the rendered `<table>` element.
    pub table_ref: NodeRef,

    /// Guard to avoid running first-render initialization more than once.
    pub loaded: bool,
}

impl AccountComponent {
    pub fn new() -> Self {
        Self {
            summary: None,
            indicators: vec![SortIndicator::Unsorted; COLUMNS.len()],
            retrying: false,
            table_ref: NodeRef::default(),
            loaded: false,
        }
    }
}
