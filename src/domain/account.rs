use serde::Serialize;

/// Wrong PIN entries a card survives before the directory blocks it.
pub const MAX_PIN_ATTEMPTS: u32 = 3;

/// A bank account as the directory stores it.
///
/// Balances are whole currency units. The attempt counter and block flag are
/// the directory's security state; the terminal reads them but never writes
/// them directly.
#[derive(Debug, Serialize, PartialEq, Clone)]
pub struct Account {
    pub id_number: String,
    pub balance: i64,
    pub failed_attempts: u32,
    pub blocked: bool,
    pub bank_name: String,
}

impl Account {
    pub fn new(id_number: impl Into<String>, bank_name: impl Into<String>, balance: i64) -> Self {
        Self {
            id_number: id_number.into(),
            balance,
            failed_attempts: 0,
            blocked: false,
            bank_name: bank_name.into(),
        }
    }

    /// Bumps the failed-attempt counter and returns the new count, blocking
    /// the card once the counter passes `MAX_PIN_ATTEMPTS`.
    pub fn record_failed_attempt(&mut self) -> u32 {
        self.failed_attempts += 1;
        if self.failed_attempts > MAX_PIN_ATTEMPTS {
            self.blocked = true;
        }
        self.failed_attempts
    }

    /// Credits the balance. The amount's sign is the caller's problem.
    pub fn deposit(&mut self, amount: i64) {
        self.balance += amount;
    }

    /// Debits the balance. Sufficiency is checked at the terminal, not here.
    pub fn withdraw(&mut self, amount: i64) {
        self.balance -= amount;
    }
}
