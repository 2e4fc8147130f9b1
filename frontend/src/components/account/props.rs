//! Defines the properties for the `AccountComponent`.

use yew::prelude::*;

/// Properties for the `AccountComponent`.
///
/// The component is self-contained apart from where it gets its data:
/// a parent can point it at a different endpoint, otherwise it uses
/// the backend's default balance route.
#[derive(Properties, PartialEq, Clone)]
pub struct AccountProps {
    /// Endpoint serving the account information payload. Fetched once
    /// on first render and again on every retry after a transport
    /// failure.
    #[prop_or_else(|| "/api/getbalance".to_string())]
    pub data_url: String,
}
