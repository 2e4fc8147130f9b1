//! Wire model for the account information payload served by
//! `GET /api/getbalance` and consumed by the frontend.
//!
//! The payload is lenient where the upstream data is: monetary values
//! arrive either as JSON numbers or as pre-formatted strings, and dates
//! arrive either as a parsable date string or as epoch milliseconds.
//! Those looser spots are modelled with untagged enums so that both
//! encodings deserialize into one value; everything stricter (mutually
//! exclusive field pairs) is validated in [`transaction`](super::transaction),
//! not here.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Top-level payload: account summary, currency code and the raw
/// transaction list (field name kept as `debitsAndCredits` on the wire).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct AccountInfo {
    pub account: Account,
    pub currency: String,
    #[serde(rename = "debitsAndCredits")]
    pub debits_and_credits: Vec<TransactionRecord>,
}

/// Account summary block shown above the transaction table.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Account {
    pub name: String,
    pub iban: String,
    pub balance: RawNumber,
}

/// One raw transaction as it appears on the wire, before validation.
///
/// `from`/`to` and `amount`/`debit` are each meant to be mutually
/// exclusive pairs; deserialization accepts any combination and the
/// exclusivity is enforced when converting to a validated
/// [`Transaction`](super::transaction::Transaction).
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct TransactionRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub from: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub to: Option<String>,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<RawNumber>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit: Option<RawNumber>,
    pub date: RawDate,
}

/// A monetary value as found in the payload: JSON number or string.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawNumber {
    Number(f64),
    Text(String),
}

impl fmt::Display for RawNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawNumber::Number(n) => write!(f, "{}", n),
            RawNumber::Text(s) => f.write_str(s),
        }
    }
}

/// A date as found in the payload: parsable date string or epoch millis.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum RawDate {
    Millis(f64),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_mixed_value_encodings() {
        let json = r#"{
            "account": { "name": "J. Doe", "iban": "NL91ABNA0417164300", "balance": 2500.75 },
            "currency": "EUR",
            "debitsAndCredits": [
                { "from": "Acme Corp", "description": "Salary", "amount": 1950, "date": "2021-03-25T09:12:00" },
                { "to": "Grocer", "description": "Groceries", "debit": "42.9", "date": 1616661120000 }
            ]
        }"#;
        let info: AccountInfo = serde_json::from_str(json).unwrap();
        assert_eq!(info.account.balance, RawNumber::Number(2500.75));
        assert_eq!(info.debits_and_credits.len(), 2);
        assert_eq!(info.debits_and_credits[0].from.as_deref(), Some("Acme Corp"));
        assert_eq!(
            info.debits_and_credits[1].debit,
            Some(RawNumber::Text("42.9".to_string()))
        );
        assert_eq!(info.debits_and_credits[1].date, RawDate::Millis(1616661120000.0));
    }

    #[test]
    fn raw_number_displays_both_encodings() {
        assert_eq!(RawNumber::Number(9.5).to_string(), "9.5");
        assert_eq!(RawNumber::Number(1950.0).to_string(), "1950");
        assert_eq!(RawNumber::Text("42.9".to_string()).to_string(), "42.9");
    }

    #[test]
    fn round_trips_through_serialization() {
        let record = TransactionRecord {
            from: None,
            to: Some("Grocer".to_string()),
            description: "Groceries".to_string(),
            amount: None,
            debit: Some(RawNumber::Number(42.9)),
            date: RawDate::Text("2021-03-25 09:12".to_string()),
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("from"));
        let back: TransactionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
