//! # Account Data Retrieval Service
//!
//! Backend logic for the `GET /api/getbalance` endpoint.
//!
//! ## Workflow
//!
//! 1.  **HTTP Request**: The `process` function serves as the Actix web
//!     handler for the endpoint.
//!
//! 2.  **Data Loading**: The sample account data is embedded at compile
//!     time from `data/accountinfo.json` and parsed through the shared
//!     `common::model::account::AccountInfo` model on each request, so
//!     the served bytes always conform to the contract the frontend
//!     deserializes against.
//!
//! 3.  **HTTP Response**: On success the payload is returned as a
//!     `200 OK` JSON body. If the embedded data does not parse (a
//!     build-time data error), a `503 Service Unavailable` with a
//!     descriptive message is returned instead.

use common::model::account::AccountInfo;

const ACCOUNT_DATA: &str = include_str!("../../../data/accountinfo.json");

/// Actix web handler for the `GET /api/getbalance` endpoint.
pub async fn process() -> impl actix_web::Responder {
    match load_account_info() {
        Ok(info) => actix_web::HttpResponse::Ok().json(info),
        Err(e) => actix_web::HttpResponse::ServiceUnavailable()
            .body(format!("Error loading account data: {}", e)),
    }
}

/// Parses the embedded sample payload into the shared model.
fn load_account_info() -> Result<AccountInfo, serde_json::Error> {
    serde_json::from_str(ACCOUNT_DATA)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::transaction::Transaction;

    #[test]
    fn embedded_payload_parses() {
        let info = load_account_info().unwrap();
        assert!(!info.debits_and_credits.is_empty());
        assert_eq!(info.currency, "EUR");
    }

    #[test]
    fn embedded_payload_passes_ingestion_validation() {
        let info = load_account_info().unwrap();
        let transactions = Transaction::from_records(&info.debits_and_credits).unwrap();
        assert_eq!(transactions.len(), info.debits_and_credits.len());
    }
}
