use super::card::Card;

/// One operation's inputs: the card in the slot, the PIN the user typed,
/// and the amounts involved. Transient — build one per terminal call.
#[derive(Debug, PartialEq, Clone)]
pub struct Request {
    pub card: Card,
    pub pin_input: String,
    pub withdraw_amount: i64,
    pub deposit_amount: i64,
}

impl Request {
    pub fn new(card: Card) -> Self {
        Self {
            card,
            pin_input: String::new(),
            withdraw_amount: 0,
            deposit_amount: 0,
        }
    }

    pub fn with_pin(card: Card, pin_input: impl Into<String>) -> Self {
        Self {
            pin_input: pin_input.into(),
            ..Self::new(card)
        }
    }

    pub fn with_deposit(card: Card, amount: i64) -> Self {
        Self {
            deposit_amount: amount,
            ..Self::new(card)
        }
    }

    pub fn with_withdrawal(card: Card, pin_input: impl Into<String>, amount: i64) -> Self {
        Self {
            pin_input: pin_input.into(),
            withdraw_amount: amount,
            ..Self::new(card)
        }
    }
}
