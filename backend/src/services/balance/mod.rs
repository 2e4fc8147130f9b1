//! # Balance Service Module
//!
//! This module aggregates the API endpoints serving account data. It
//! acts as a router, directing incoming HTTP requests under the `/api`
//! path to the handler logic defined in its sub-modules.
//!
//! ## Sub-modules:
//! - `get`: Serves the account information payload (summary, currency
//!   and transaction list) consumed by the frontend.

mod get;

use actix_web::web::{get, scope};
use actix_web::Scope;

/// The base path for the account data API endpoints.
const API_PATH: &str = "/api";

/// Configures and returns the Actix `Scope` for the account data routes.
///
/// # Registered Routes:
///
/// *   **`GET /getbalance`**:
///     - **Handler**: `get::process`
///     - **Description**: Returns the account information payload as
///       JSON: account name, IBAN and balance, the currency code, and
///       the `debitsAndCredits` transaction list.
pub fn configure_routes() -> Scope {
    scope(API_PATH).route("/getbalance", get().to(get::process))
}
