use std::fmt;

/// Result of a login attempt.
///
/// `Rejected` carries the failed-attempt count the directory reported; the
/// `Display` rendering is the message the terminal puts on screen.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LoginOutcome {
    Authenticated,
    Rejected { attempts: u32 },
}

impl fmt::Display for LoginOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LoginOutcome::Authenticated => write!(f, "Logged in successfully"),
            LoginOutcome::Rejected { attempts: 1 } => write!(f, "1/3 wrong attempts"),
            LoginOutcome::Rejected { attempts: 2 } => write!(f, "2/3 wrong attempts"),
            LoginOutcome::Rejected { attempts: 3 } => {
                write!(f, "3/3 wrong attempts, make sure last one is correct")
            }
            LoginOutcome::Rejected { .. } => {
                write!(f, "too many attempts, you will be blocked")
            }
        }
    }
}

/// Whether the directory will let the card through at all.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum CardStatus {
    Active,
    Blocked,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardStatus::Active => write!(f, "Login Accessed"),
            CardStatus::Blocked => write!(f, "Login Blocked"),
        }
    }
}

/// Result of a withdrawal request.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum WithdrawOutcome {
    Withdrawn(i64),
    InsufficientFunds,
}

impl fmt::Display for WithdrawOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WithdrawOutcome::Withdrawn(amount) => write!(f, "Amount withdrawn: {}", amount),
            WithdrawOutcome::InsufficientFunds => write!(
                f,
                "You don't have enough money on your account to withdraw that amount, try again"
            ),
        }
    }
}
