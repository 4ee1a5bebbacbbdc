use crate::domain::account::Account;
use crate::error::Result;
use std::io::Write;

/// Writes the final state of every account as CSV.
///
/// Produces a header row followed by one row per account:
/// `id_number,balance,failed_attempts,blocked,bank_name`.
pub struct StatementWriter<W: Write> {
    writer: csv::Writer<W>,
}

impl<W: Write> StatementWriter<W> {
    /// Creates a new `StatementWriter` over any `Write` sink (e.g., Stdout, File).
    pub fn new(sink: W) -> Self {
        Self {
            writer: csv::Writer::from_writer(sink),
        }
    }

    /// Serializes every account and flushes the sink.
    pub fn write_accounts<'a, I>(&mut self, accounts: I) -> Result<()>
    where
        I: IntoIterator<Item = &'a Account>,
    {
        for account in accounts {
            self.writer.serialize(account)?;
        }
        self.writer.flush()?;
        Ok(())
    }
}
