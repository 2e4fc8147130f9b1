//! View rendering for the account overview component.
//!
//! The page shows the account summary, the retry notice while a
//! re-fetch is pending, and the transaction table. Only the header row
//! is rendered here; the body rows are built and reordered directly in
//! the DOM (`helpers.rs`), so the `<tbody>` stays empty in the virtual
//! DOM and Yew never touches the live rows.

use yew::html::Scope;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{AccountComponent, Column, COLUMNS};

pub fn view(component: &AccountComponent, ctx: &Context<AccountComponent>) -> Html {
    let link = ctx.link();

    html! {
        <div class="account-root">
            { build_summary(component) }
            { build_retry_notice(component) }
            <div id="transactions">
                <table ref={component.table_ref.clone()}>
                    <thead>
                        <tr>
                            { for COLUMNS
                                .iter()
                                .enumerate()
                                .map(|(index, column)| build_header(component, link, index, column)) }
                        </tr>
                    </thead>
                    <tbody></tbody>
                </table>
            </div>
        </div>
    }
}

fn build_summary(component: &AccountComponent) -> Html {
    match &component.summary {
        Some(summary) => html! {
            <div class="account-summary">
                <span id="account_name">{ &summary.name }</span>
                <span id="account_iban">{ &summary.iban }</span>
                <span id="account_balance">{ &summary.balance }</span>
            </div>
        },
        None => html! {
            <div class="account-summary">{ "Loading account information..." }</div>
        },
    }
}

fn build_retry_notice(component: &AccountComponent) -> Html {
    if component.retrying {
        html! { <div id="retry-status">{ "Communication error, retrying..." }</div> }
    } else {
        html! {}
    }
}

/// Renders one header cell: label plus the glyph derived from the
/// column's indicator state. The logical id rides on the `id`
/// attribute, which is what the header index resolver scans.
fn build_header(
    component: &AccountComponent,
    link: &Scope<AccountComponent>,
    index: usize,
    column: &Column,
) -> Html {
    let glyph = component.indicators[index].glyph();
    html! {
        <th id={column.id} onclick={link.callback(move |_| Msg::HeaderClicked(index))}>
            { format!("{} {}", column.label, glyph) }
        </th>
    }
}
