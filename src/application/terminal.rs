use crate::domain::outcome::{CardStatus, LoginOutcome, WithdrawOutcome};
use crate::domain::ports::AccountDirectory;
use crate::domain::request::Request;
use crate::error::Result;
use crate::infrastructure::in_memory::InMemoryDirectory;

/// The request-handling core of the ATM.
///
/// `Terminal` holds no session state of its own: every operation takes a
/// fresh `Request` and resolves it against the directory the terminal owns.
/// The only state that outlives a call sits in the directory (balances,
/// attempt counters, block flags) and in the caller's `Card` (the session
/// flag that `login` sets).
pub struct Terminal<D: AccountDirectory = InMemoryDirectory> {
    pub directory: D,
}

impl Default for Terminal {
    fn default() -> Self {
        Self::new()
    }
}

impl Terminal {
    pub fn new() -> Self {
        Self {
            directory: InMemoryDirectory::new(),
        }
    }
}

impl<D: AccountDirectory> Terminal<D> {
    pub fn with_directory(directory: D) -> Self {
        Self { directory }
    }

    /// Looks up the cardholder and returns "First Last".
    pub fn identify(&self, request: &Request) -> Result<String> {
        let person = self.directory.find_person(&request.card.id_number)?;
        Ok(person.full_name())
    }

    /// Compares the entered PIN against the card's PIN.
    ///
    /// On a match the card inside the request is marked logged in; callers
    /// keep that card for subsequent requests. On a mismatch the directory
    /// records the failure, and the new count comes back as `Rejected` —
    /// the same standing `report_attempts` would report right after.
    pub fn login(&mut self, request: &mut Request) -> Result<LoginOutcome> {
        if request.pin_input == request.card.pin {
            request.card.is_logged_in = true;
            return Ok(LoginOutcome::Authenticated);
        }
        let attempts = self
            .directory
            .record_failed_attempt(&request.card.id_number)?;
        Ok(LoginOutcome::Rejected { attempts })
    }

    /// Reports the current failed-attempt standing without recording a new
    /// failure.
    pub fn report_attempts(&self, request: &Request) -> Result<LoginOutcome> {
        let attempts = self.directory.failed_attempts(&request.card.id_number)?;
        Ok(LoginOutcome::Rejected { attempts })
    }

    /// Whether the directory still accepts the card.
    pub fn card_status(&self, request: &Request) -> Result<CardStatus> {
        if self.directory.is_blocked(&request.card.id_number)? {
            Ok(CardStatus::Blocked)
        } else {
            Ok(CardStatus::Active)
        }
    }

    /// Stored balance for a logged-in card; 0 otherwise.
    ///
    /// The not-logged-in path never reaches the directory, so an
    /// unauthenticated card reads 0 even when its id is unknown.
    pub fn balance(&self, request: &Request) -> Result<i64> {
        if !request.card.is_logged_in {
            return Ok(0);
        }
        self.directory.balance(&request.card.id_number)
    }

    /// Forwards the amount to the directory unchanged. Deposits are not
    /// gated on login and the amount's sign is not validated.
    pub fn deposit(&mut self, request: &Request, amount: i64) -> Result<()> {
        self.directory.deposit(&request.card.id_number, amount)
    }

    /// Withdraws `request.withdraw_amount` when the visible balance covers
    /// it; otherwise rejects without touching the directory.
    pub fn withdraw(&mut self, request: &Request) -> Result<WithdrawOutcome> {
        if self.balance(request)? >= request.withdraw_amount {
            self.directory
                .withdraw(&request.card.id_number, request.withdraw_amount)?;
            Ok(WithdrawOutcome::Withdrawn(request.withdraw_amount))
        } else {
            Ok(WithdrawOutcome::InsufficientFunds)
        }
    }

    /// Passthrough lookup of the issuing bank's name.
    pub fn bank_name(&self, request: &Request) -> Result<String> {
        self.directory.bank_name(&request.card.id_number)
    }
}
