//! Validated transaction model.
//!
//! The wire format allows nonsense combinations (`from` and `to` both
//! present, neither `amount` nor `debit`, ...). Converting a whole
//! payload to `Vec<Transaction>` is all-or-nothing: one bad record
//! rejects the ingestion with an error naming the record, so corrupted
//! rows are never rendered.

use thiserror::Error;

use crate::model::account::{RawDate, RawNumber, TransactionRecord};

/// Whether money came in or went out, derived from which counterparty
/// field the record carries (`from` means the account received money).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Role {
    Credit,
    Debit,
}

impl Role {
    pub fn label(self) -> &'static str {
        match self {
            Role::Credit => "Credit",
            Role::Debit => "Debit",
        }
    }
}

/// A transaction that passed field validation. Amount and date stay in
/// their raw wire encoding; display formatting happens at render time.
#[derive(Clone, Debug, PartialEq)]
pub struct Transaction {
    pub counterparty: String,
    pub role: Role,
    pub description: String,
    pub amount: RawNumber,
    pub date: RawDate,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum IngestError {
    #[error("transaction {index}: expected exactly one of `from`/`to`, found {found}")]
    CounterpartyFields { index: usize, found: usize },
    #[error("transaction {index}: expected exactly one of `amount`/`debit`, found {found}")]
    AmountFields { index: usize, found: usize },
}

impl Transaction {
    /// Validates a single record. `index` is the record's position in
    /// the payload, used only for error reporting.
    pub fn from_record(index: usize, record: &TransactionRecord) -> Result<Self, IngestError> {
        let (counterparty, role) = match (&record.from, &record.to) {
            (Some(from), None) => (from.clone(), Role::Credit),
            (None, Some(to)) => (to.clone(), Role::Debit),
            (from, to) => {
                return Err(IngestError::CounterpartyFields {
                    index,
                    found: from.is_some() as usize + to.is_some() as usize,
                });
            }
        };
        let amount = match (&record.amount, &record.debit) {
            (Some(amount), None) => amount.clone(),
            (None, Some(debit)) => debit.clone(),
            (amount, debit) => {
                return Err(IngestError::AmountFields {
                    index,
                    found: amount.is_some() as usize + debit.is_some() as usize,
                });
            }
        };
        Ok(Transaction {
            counterparty,
            role,
            description: record.description.clone(),
            amount,
            date: record.date.clone(),
        })
    }

    /// Validates a whole payload, failing on the first bad record.
    pub fn from_records(records: &[TransactionRecord]) -> Result<Vec<Self>, IngestError> {
        records
            .iter()
            .enumerate()
            .map(|(index, record)| Transaction::from_record(index, record))
            .collect()
    }
}
