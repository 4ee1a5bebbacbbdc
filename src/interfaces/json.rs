use crate::domain::account::Account;
use crate::domain::card::{Card, Person};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// A seed record describing one cardholder and their account.
///
/// Profiles are the JSON counterpart of the bank's master data: everything
/// the directory needs to open an account, plus the PIN the issued card
/// carries. `failed_attempts` and `blocked` default to a clean slate so
/// fixtures only set them when a scenario starts mid-lockout.
#[derive(Debug, Deserialize, PartialEq, Clone)]
pub struct CardholderProfile {
    pub id_number: String,
    pub pin: String,
    pub first_name: String,
    pub last_name: String,
    pub bank_name: String,
    pub balance: i64,
    #[serde(default)]
    pub failed_attempts: u32,
    #[serde(default)]
    pub blocked: bool,
}

impl CardholderProfile {
    /// The card issued for this profile.
    pub fn card(&self) -> Card {
        Card::new(self.id_number.clone(), self.pin.clone())
    }

    /// The cardholder.
    pub fn person(&self) -> Person {
        Person::new(self.first_name.clone(), self.last_name.clone())
    }

    /// The account in its seeded state.
    pub fn account(&self) -> Account {
        let mut account = Account::new(
            self.id_number.clone(),
            self.bank_name.clone(),
            self.balance,
        );
        account.failed_attempts = self.failed_attempts;
        account.blocked = self.blocked;
        account
    }
}

/// Loads a JSON array of profiles from any `Read` source.
pub fn load_profiles<R: Read>(source: R) -> Result<Vec<CardholderProfile>> {
    Ok(serde_json::from_reader(source)?)
}
