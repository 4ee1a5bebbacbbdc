use crate::error::{Result, TellerError};
use serde::Deserialize;
use std::io::Read;

/// One scripted ATM operation against a single card.
#[derive(Debug, Deserialize, PartialEq, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OperationKind {
    Identify,
    Login,
    Attempts,
    Status,
    Balance,
    Deposit,
    Withdraw,
    Bank,
}

/// A row of a recorded session: `op, card, pin, amount`.
///
/// `pin` and `amount` are optional because most operations use neither;
/// omitted fields default to empty/zero when the operation is built.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct SessionRecord {
    pub op: OperationKind,
    pub card: String,
    pub pin: Option<String>,
    pub amount: Option<i64>,
}

/// Reads session operations from a CSV source.
///
/// This reader wraps `csv::Reader` and provides an iterator over
/// `Result<SessionRecord>`. It handles whitespace trimming and flexible
/// record lengths automatically.
pub struct SessionReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> SessionReader<R> {
    /// Creates a new `SessionReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes operations.
    pub fn operations(self) -> impl Iterator<Item = Result<SessionRecord>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(TellerError::from))
    }
}
