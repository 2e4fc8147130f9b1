//! Update function for the account overview component.
//!
//! This module contains a single `update` function following an
//! Elm-style architecture: it receives the current `AccountComponent`
//! state, the `Context`, and a `Msg`, mutates the state accordingly,
//! and returns a `bool` indicating whether the view should re-render.
//!
//! Key behaviors
//! - Successful fetch: validate the whole transaction list, render the
//!   rows into the live table body, reset the sort indicators.
//! - Transport failure: show the retry notice and schedule a re-fetch
//!   after a fixed 3 second delay, with no retry cap.
//! - Parse or ingestion failure: blocking `window.alert`, no retry.
//! - Header click: run the indicator state machine, then either
//!   reverse the already-ordered rows or perform a full sort.

use common::compare;
use common::model::transaction::Transaction;
use common::sort::{self, SortAction, SortIndicator};
use gloo_console::warn;
use gloo_timers::future::TimeoutFuture;
use web_sys::HtmlTableElement;
use yew::prelude::*;

use super::helpers;
use super::messages::Msg;
use super::state::{AccountComponent, Summary, COLUMNS};

/// Delay between a transport failure and the next fetch attempt.
const RETRY_DELAY_MS: u32 = 3_000;

/// Central update function for the component.
///
/// Contract
/// - Mutates `component` based on `msg`.
/// - May dispatch further messages via `ctx.link()` (retry timer,
///   re-fetch).
/// - Returns `true` to re-render the view, `false` to short-circuit
///   when only side effects occur.
pub fn update(
    component: &mut AccountComponent,
    ctx: &Context<AccountComponent>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Loaded(info) => {
            component.retrying = false;
            component.indicators = vec![SortIndicator::Unsorted; COLUMNS.len()];
            component.summary = Some(Summary {
                name: info.account.name.clone(),
                iban: info.account.iban.clone(),
                balance: format!("{} {}", info.account.balance, info.currency),
            });

            // All-or-nothing: one malformed record rejects the whole
            // list before any row reaches the table.
            match Transaction::from_records(&info.debits_and_credits) {
                Ok(transactions) => {
                    if let Some(table) = component.table_ref.cast::<HtmlTableElement>() {
                        if let Err(err) = helpers::render_transactions(&table, &transactions) {
                            gloo_console::error!("failed to render transaction rows", err);
                        }
                    }
                }
                Err(err) => helpers::alert(&format!("Error loading transactions: {}", err)),
            }
            true
        }
        Msg::FetchFailed => {
            component.retrying = true;
            warn!("communication error fetching account information, retrying in 3s");
            let link = ctx.link().clone();
            wasm_bindgen_futures::spawn_local(async move {
                TimeoutFuture::new(RETRY_DELAY_MS).await;
                link.send_message(Msg::Retry);
            });
            true
        }
        Msg::Retry => {
            component.retrying = false;
            helpers::spawn_fetch(ctx.link().clone(), ctx.props().data_url.clone());
            true
        }
        Msg::ParseFailed(detail) => {
            // Parse failure is not a transport failure: no retry.
            helpers::alert(&format!("Error parsing account information: {}", detail));
            false
        }
        Msg::HeaderClicked(column) => {
            let action = sort::click_header(&mut component.indicators, column);
            if let Some(table) = component.table_ref.cast::<HtmlTableElement>() {
                match action {
                    SortAction::Reverse => helpers::reverse_rows(&table),
                    SortAction::FullSort { ascending } => {
                        let column_id = COLUMNS[column].id;
                        helpers::sort_rows(
                            &table,
                            column_id,
                            compare::for_column(column_id),
                            ascending,
                        );
                    }
                }
            }
            true
        }
    }
}
