use std::ops::RangeInclusive;

/// Books (tricks) available in one hand of Spades.
pub const BOOKS_PER_HAND: u8 = 13;
/// A bid of zero books.
pub const NIL_BID: u8 = 0;
/// Smallest non-nil bid a team may declare.
pub const MIN_BID: u8 = 4;
pub const MAX_BID: u8 = BOOKS_PER_HAND;
/// Points won (or lost) on a nil bid.
pub const NIL_POINTS: i32 = 100;
/// Points per bid book.
pub const POINTS_PER_BID_BOOK: i32 = 10;
pub const DEFAULT_GOAL_SCORE: u32 = 500;
/// Upper bound for points per bag; 10 covers the ten-point house rule.
pub const MAX_BAG_POINTS: i32 = 10;
/// Upper bound for the blind nil stake multiplier.
pub const MAX_BLIND_NIL_MULTIPLIER: i32 = 4;

/// Bid stepper order: nil, then 4 up to 13.
pub const BID_VALUES: [u8; 11] = [0, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13];

/// Bid used for a freshly opened bidding draft.
pub const DEFAULT_DRAFT_BID: u8 = MIN_BID;

pub fn valid_books_range() -> RangeInclusive<u8> {
    0..=BOOKS_PER_HAND
}

pub fn bag_points_range() -> RangeInclusive<i32> {
    0..=MAX_BAG_POINTS
}

pub fn blind_nil_multiplier_range() -> RangeInclusive<i32> {
    1..=MAX_BLIND_NIL_MULTIPLIER
}

pub fn is_valid_bid(value: u8) -> bool {
    value == NIL_BID || (MIN_BID..=MAX_BID).contains(&value)
}
