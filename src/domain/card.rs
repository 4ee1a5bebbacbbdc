/// A cash card as the terminal reads it: the account id it points at, the
/// PIN burned into it, and whether the current session has authenticated.
///
/// The PIN never leaves the card in this model; the directory holds no copy.
#[derive(Debug, PartialEq, Clone)]
pub struct Card {
    pub id_number: String,
    pub pin: String,
    pub is_logged_in: bool,
}

impl Card {
    pub fn new(id_number: impl Into<String>, pin: impl Into<String>) -> Self {
        Self {
            id_number: id_number.into(),
            pin: pin.into(),
            is_logged_in: false,
        }
    }
}

/// The cardholder on record at the bank.
#[derive(Debug, PartialEq, Clone)]
pub struct Person {
    pub first_name: String,
    pub last_name: String,
}

impl Person {
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
