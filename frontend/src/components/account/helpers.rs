//! DOM and network helpers for the account overview component.
//!
//! Everything here works against explicit element handles passed in by
//! the caller; nothing re-queries the document for the table. The
//! table body is treated as the source of truth once rendered: sorting
//! reads the displayed cell text back out of the rows and reorders the
//! live `<tr>` nodes with move operations, so every row keeps its
//! identity (its cells and anything attached to it travel along).

use std::collections::HashMap;

use common::compare::Comparator;
use common::format::{self, DateParts};
use common::model::account::{AccountInfo, RawDate};
use common::model::transaction::Transaction;
use common::sort;
use gloo_net::http::Request;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlTableElement, HtmlTableRowElement, HtmlTableSectionElement};
use yew::html::Scope;
use yew::platform::spawn_local;

use super::messages::Msg;
use super::state::AccountComponent;

/// Fetches the payload and reports the outcome as a message.
///
/// Transport failures (send error, non-OK status, unreadable body) map
/// to `Msg::FetchFailed` and go through the retry loop; a readable
/// body that is not valid payload JSON maps to `Msg::ParseFailed` and
/// does not.
pub fn spawn_fetch(link: Scope<AccountComponent>, data_url: String) {
    spawn_local(async move {
        let response = match Request::get(&data_url).send().await {
            Ok(response) => response,
            Err(_) => {
                link.send_message(Msg::FetchFailed);
                return;
            }
        };
        if !response.ok() {
            link.send_message(Msg::FetchFailed);
            return;
        }
        let body = match response.text().await {
            Ok(body) => body,
            Err(_) => {
                link.send_message(Msg::FetchFailed);
                return;
            }
        };
        match serde_json::from_str::<AccountInfo>(&body) {
            Ok(info) => link.send_message(Msg::Loaded(info)),
            Err(err) => link.send_message(Msg::ParseFailed(err.to_string())),
        }
    });
}

/// Blocking user-visible alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

/// Maps each logical column id to its display index by scanning the
/// rendered `<th>` cells left to right; index = scan position. Built
/// from the header row the table actually carries, so row construction
/// and sorting never assume hard-coded positions.
pub fn resolve_header_indices(table: &HtmlTableElement) -> HashMap<String, usize> {
    let headers = table.get_elements_by_tag_name("th");
    let mut indices = HashMap::new();
    for position in 0..headers.length() {
        if let Some(header) = headers.item(position) {
            indices.insert(header.id(), position as usize);
        }
    }
    indices
}

/// Builds one `<tr>` per transaction and appends them to the table
/// body in payload order (no sort on initial load). Cells are placed
/// at the positions the header index map dictates. Any rows from a
/// previous ingestion are replaced.
pub fn render_transactions(
    table: &HtmlTableElement,
    transactions: &[Transaction],
) -> Result<(), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| JsValue::from_str("no document"))?;
    let indices = resolve_header_indices(table);
    let body = table_body(table).ok_or_else(|| JsValue::from_str("table has no tbody"))?;
    body.set_text_content(Some(""));

    for transaction in transactions {
        let row = document.create_element("tr")?;
        let mut cells: Vec<Option<Element>> = (0..indices.len()).map(|_| None).collect();

        let amount_cell = text_cell(
            &document,
            &format::amount_to_display(&transaction.amount.to_string()),
        )?;
        amount_cell.set_class_name("currency");

        let date_display = format::date_to_display(date_parts_from_raw(&transaction.date));

        place_cell(&indices, &mut cells, "name", text_cell(&document, &transaction.counterparty)?);
        place_cell(&indices, &mut cells, "creditordebit", text_cell(&document, transaction.role.label())?);
        place_cell(&indices, &mut cells, "description", text_cell(&document, &transaction.description)?);
        place_cell(&indices, &mut cells, "amount", amount_cell);
        place_cell(&indices, &mut cells, "date", text_cell(&document, &date_display)?);

        for cell in cells.into_iter().flatten() {
            row.append_child(&cell)?;
        }
        body.append_child(&row)?;
    }
    Ok(())
}

/// Reverses the table rows in place by applying the move plan from
/// [`sort::reversal_moves`]: n-1 "move row before row" operations
/// against a snapshot of the current order. Zero or one row is a
/// no-op.
pub fn reverse_rows(table: &HtmlTableElement) {
    let Some(body) = table_body(table) else { return };
    let rows = snapshot_rows(&body);
    for (row, anchor) in sort::reversal_moves(rows.len()) {
        let _ = body.insert_before(&rows[row], Some(rows[anchor].as_ref()));
    }
}

/// Sorts the table rows on the column with the given logical id.
///
/// The rows are snapshotted, the cell text at the resolved column
/// index is read back from each row, and the permutation computed by
/// [`sort::sort_order`] is applied by re-appending the rows in sorted
/// order; appending an attached node moves it, so the pass rebuilds
/// the body in O(n) moves without touching any cell.
pub fn sort_rows(table: &HtmlTableElement, column_id: &str, cmp: Comparator, ascending: bool) {
    let indices = resolve_header_indices(table);
    let Some(&column_index) = indices.get(column_id) else { return };
    let Some(body) = table_body(table) else { return };
    let rows = snapshot_rows(&body);
    let values: Vec<String> = rows.iter().map(|row| cell_text(row, column_index)).collect();
    for source in sort::sort_order(&values, cmp, ascending) {
        let _ = body.append_child(&rows[source]);
    }
}

/// Extracts display date parts from the raw payload value through the
/// JS date parser (the payload carries either a date string or epoch
/// milliseconds, exactly what `new Date(..)` accepts).
pub fn date_parts_from_raw(raw: &RawDate) -> DateParts {
    let parsed = match raw {
        RawDate::Millis(millis) => js_sys::Date::new(&JsValue::from_f64(*millis)),
        RawDate::Text(text) => js_sys::Date::new(&JsValue::from_str(text)),
    };
    DateParts {
        year: parsed.get_full_year() as i32,
        // JS months are 0-based.
        month: parsed.get_month() + 1,
        day: parsed.get_date(),
        hour: parsed.get_hours(),
        minute: parsed.get_minutes(),
    }
}

fn place_cell(
    indices: &HashMap<String, usize>,
    cells: &mut [Option<Element>],
    column_id: &str,
    cell: Element,
) {
    if let Some(&index) = indices.get(column_id) {
        cells[index] = Some(cell);
    }
}

fn text_cell(document: &Document, text: &str) -> Result<Element, JsValue> {
    let cell = document.create_element("td")?;
    cell.set_text_content(Some(text));
    Ok(cell)
}

fn table_body(table: &HtmlTableElement) -> Option<HtmlTableSectionElement> {
    table.t_bodies().item(0)?.dyn_into().ok()
}

fn snapshot_rows(body: &HtmlTableSectionElement) -> Vec<HtmlTableRowElement> {
    let rows = body.rows();
    (0..rows.length())
        .filter_map(|i| rows.item(i)?.dyn_into().ok())
        .collect()
}

fn cell_text(row: &HtmlTableRowElement, index: usize) -> String {
    row.cells()
        .item(index as u32)
        .and_then(|cell| cell.text_content())
        .unwrap_or_default()
}
