//! Validated bid and books values plus the bid stepper.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::rules::{is_valid_bid, valid_books_range, BID_VALUES, NIL_BID};
use crate::errors::domain::{DomainError, ValidationKind};

/// A team's bid for one round.
///
/// Declared bids are nil (0) or 4..=13. A self-bid round infers the bid from
/// books taken, so a recorded bid may be any value in 0..=13; deserialization
/// accepts that wider range.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Bid(u8);

impl Bid {
    pub const NIL: Bid = Bid(NIL_BID);

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if is_valid_bid(value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("bid {value} is not nil or 4..=13"),
            ))
        }
    }

    /// Bid as stored on a settled round.
    pub fn recorded(value: u8) -> Result<Self, DomainError> {
        if valid_books_range().contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidBid,
                format!("recorded bid {value} outside 0..=13"),
            ))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    pub fn is_nil(self) -> bool {
        self.0 == NIL_BID
    }

    /// Step to the neighbouring value in the bid list (clamped at both ends).
    pub fn step(self, direction: Step) -> Bid {
        Bid(next_bid_value(self.0, direction))
    }
}

impl TryFrom<u8> for Bid {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Bid::recorded(value)
    }
}

impl From<Bid> for u8 {
    fn from(bid: Bid) -> Self {
        bid.0
    }
}

impl fmt::Display for Bid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_nil() {
            f.write_str("nil")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// Books (tricks) a team actually took in a round.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Books(u8);

impl Books {
    pub const ZERO: Books = Books(0);

    pub fn new(value: u8) -> Result<Self, DomainError> {
        if valid_books_range().contains(&value) {
            Ok(Self(value))
        } else {
            Err(DomainError::validation(
                ValidationKind::InvalidBooks,
                format!("books {value} outside 0..=13"),
            ))
        }
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Bid inferred from books for a self-bid round; zero books infers nil.
    pub fn as_self_bid(self) -> Bid {
        Bid(self.0)
    }
}

impl TryFrom<u8> for Books {
    type Error = DomainError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Books::new(value)
    }
}

impl From<Books> for u8 {
    fn from(books: Books) -> Self {
        books.0
    }
}

impl fmt::Display for Books {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Step {
    Up,
    Down,
}

/// Next bid in [`BID_VALUES`] from `current`.
///
/// A `current` value that is not in the list jumps to the first value when
/// stepping up and to the last value when stepping down.
pub fn next_bid_value(current: u8, direction: Step) -> u8 {
    let Some(index) = BID_VALUES.iter().position(|v| *v == current) else {
        return match direction {
            Step::Up => BID_VALUES[0],
            Step::Down => BID_VALUES[BID_VALUES.len() - 1],
        };
    };
    let next = match direction {
        Step::Up => (index + 1).min(BID_VALUES.len() - 1),
        Step::Down => index.saturating_sub(1),
    };
    BID_VALUES[next]
}

/// Parse free-text numeric input by dropping every non-digit character.
///
/// Empty or overflowing input yields `fallback`.
pub fn coerce_numeric(text: &str, fallback: u32) -> u32 {
    let digits: String = text.chars().filter(char::is_ascii_digit).collect();
    digits.parse::<u32>().unwrap_or(fallback)
}
