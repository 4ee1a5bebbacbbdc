use crate::domain::account::Account;
use crate::domain::card::Person;
use crate::domain::ports::AccountDirectory;
use crate::error::{Result, TellerError};
use std::collections::HashMap;

/// An in-memory account directory keyed by card id.
///
/// Holds cardholders and their accounts in plain `HashMap`s. Ideal for tests
/// and for replaying recorded sessions where persistence is not required.
#[derive(Default)]
pub struct InMemoryDirectory {
    accounts: HashMap<String, Account>,
    people: HashMap<String, Person>,
}

impl InMemoryDirectory {
    /// Creates a new, empty directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a cardholder and their account under the account's card id.
    pub fn open_account(&mut self, person: Person, account: Account) {
        self.people.insert(account.id_number.clone(), person);
        self.accounts.insert(account.id_number.clone(), account);
    }

    /// All accounts, ordered by card id for stable output.
    pub fn accounts(&self) -> Vec<&Account> {
        let mut accounts: Vec<&Account> = self.accounts.values().collect();
        accounts.sort_by_key(|account| &account.id_number);
        accounts
    }

    fn account(&self, id_number: &str) -> Result<&Account> {
        self.accounts
            .get(id_number)
            .ok_or_else(|| TellerError::UnknownCard(id_number.to_string()))
    }

    fn account_mut(&mut self, id_number: &str) -> Result<&mut Account> {
        self.accounts
            .get_mut(id_number)
            .ok_or_else(|| TellerError::UnknownCard(id_number.to_string()))
    }
}

impl AccountDirectory for InMemoryDirectory {
    fn find_person(&self, id_number: &str) -> Result<Person> {
        self.people
            .get(id_number)
            .cloned()
            .ok_or_else(|| TellerError::UnknownCard(id_number.to_string()))
    }

    fn record_failed_attempt(&mut self, id_number: &str) -> Result<u32> {
        Ok(self.account_mut(id_number)?.record_failed_attempt())
    }

    fn failed_attempts(&self, id_number: &str) -> Result<u32> {
        Ok(self.account(id_number)?.failed_attempts)
    }

    fn is_blocked(&self, id_number: &str) -> Result<bool> {
        Ok(self.account(id_number)?.blocked)
    }

    fn balance(&self, id_number: &str) -> Result<i64> {
        Ok(self.account(id_number)?.balance)
    }

    fn deposit(&mut self, id_number: &str, amount: i64) -> Result<()> {
        self.account_mut(id_number)?.deposit(amount);
        Ok(())
    }

    fn withdraw(&mut self, id_number: &str, amount: i64) -> Result<()> {
        self.account_mut(id_number)?.withdraw(amount);
        Ok(())
    }

    fn bank_name(&self, id_number: &str) -> Result<String> {
        Ok(self.account(id_number)?.bank_name.clone())
    }
}
