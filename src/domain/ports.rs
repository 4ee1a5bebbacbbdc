use super::card::Person;
use crate::error::Result;

#[cfg(test)]
use mockall::automock;

/// The bank-side contract the terminal depends on.
///
/// Every lookup keys on a card id number; unknown ids fail with
/// `TellerError::UnknownCard`. The directory is a synchronous, in-process
/// collaborator, so mutating methods simply take `&mut self`.
#[cfg_attr(test, automock)]
pub trait AccountDirectory {
    /// Cardholder on record for the card id.
    fn find_person(&self, id_number: &str) -> Result<Person>;

    /// Increments the failed-login counter and returns the new count,
    /// blocking the card once the count passes `MAX_PIN_ATTEMPTS`. This is
    /// the counter's single mutation path.
    fn record_failed_attempt(&mut self, id_number: &str) -> Result<u32>;

    /// Current failed-login count, without incrementing.
    fn failed_attempts(&self, id_number: &str) -> Result<u32>;

    fn is_blocked(&self, id_number: &str) -> Result<bool>;

    fn balance(&self, id_number: &str) -> Result<i64>;

    /// Credits the account. No sign or size validation happens here.
    fn deposit(&mut self, id_number: &str, amount: i64) -> Result<()>;

    /// Debits the account. Sufficiency is the terminal's responsibility.
    fn withdraw(&mut self, id_number: &str, amount: i64) -> Result<()>;

    fn bank_name(&self, id_number: &str) -> Result<String>;
}
