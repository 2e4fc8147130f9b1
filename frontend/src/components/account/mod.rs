//! Account overview: root module wiring the Yew `Component`
//! implementation with submodules for state, update logic, view
//! rendering, and DOM helpers.
//!
//! Responsibilities
//! - Re-export selected types (`Msg`, `AccountProps`, `AccountComponent`).
//! - Provide the `Component` implementation that delegates to
//!   `update::update` and `view::view`.
//! - On first render, kick off the payload fetch against the endpoint
//!   from the props; failures from there on are handled through the
//!   message loop (retry or alert, see `update.rs`).

use yew::prelude::*;

mod helpers;
mod messages;
mod props;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use props::AccountProps;
pub use state::AccountComponent;

impl Component for AccountComponent {
    type Message = Msg;
    type Properties = AccountProps;

    fn create(_ctx: &Context<Self>) -> Self {
        AccountComponent::new()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;
            helpers::spawn_fetch(ctx.link().clone(), ctx.props().data_url.clone());
        }
    }
}
