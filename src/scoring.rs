// 🏷️ Scoring Engine - Six independent point rules
// Pure computation: Receipt → Points. Rules never interact, and a field that
// fails to parse only zeroes its own rule.

use crate::receipt::{Item, Receipt};
use chrono::{Datelike, NaiveDate, NaiveTime, Timelike};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use unicode_general_category::{get_general_category, GeneralCategory};

/// Loyalty score for one receipt
pub type Points = u64;

const ROUND_DOLLAR_BONUS: Points = 50;
const QUARTER_MULTIPLE_BONUS: Points = 25;
const POINTS_PER_ITEM_PAIR: Points = 5;
const ODD_DAY_BONUS: Points = 6;
const AFTERNOON_BONUS: Points = 10;

const DATE_FORMAT: &str = "%Y-%m-%d";
const TIME_FORMAT: &str = "%H:%M";
const DATE_SHAPE: &str = "9999-99-99";
const TIME_SHAPE: &str = "99:99";

// ============================================================================
// BREAKDOWN
// ============================================================================

/// Per-rule contributions for one receipt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointsBreakdown {
    pub retailer_name: Points,
    pub round_total: Points,
    pub item_pairs: Points,
    pub item_descriptions: Points,
    pub odd_day: Points,
    pub afternoon: Points,
}

impl PointsBreakdown {
    pub fn total(&self) -> Points {
        self.retailer_name
            + self.round_total
            + self.item_pairs
            + self.item_descriptions
            + self.odd_day
            + self.afternoon
    }
}

/// Evaluate every rule against the receipt
pub fn breakdown(receipt: &Receipt) -> PointsBreakdown {
    PointsBreakdown {
        retailer_name: retailer_points(&receipt.retailer),
        round_total: round_total_points(&receipt.total),
        item_pairs: item_pair_points(receipt.items.len()),
        item_descriptions: receipt.items.iter().map(item_description_points).sum(),
        odd_day: odd_day_points(&receipt.purchase_date),
        afternoon: afternoon_points(&receipt.purchase_time),
    }
}

/// Total points for a receipt
pub fn calculate(receipt: &Receipt) -> Points {
    breakdown(receipt).total()
}

// ============================================================================
// RULES
// ============================================================================

/// One point for every letter or decimal digit in the retailer name
///
/// Letters are any `L*` general category; digits are `Nd` only, so numeric
/// symbols like `½` or `Ⅻ` do not count.
pub fn retailer_points(retailer: &str) -> Points {
    retailer.chars().filter(|&c| is_letter_or_digit(c)).count() as Points
}

fn is_letter_or_digit(c: char) -> bool {
    matches!(
        get_general_category(c),
        GeneralCategory::UppercaseLetter
            | GeneralCategory::LowercaseLetter
            | GeneralCategory::TitlecaseLetter
            | GeneralCategory::ModifierLetter
            | GeneralCategory::OtherLetter
            | GeneralCategory::DecimalNumber
    )
}

/// 50 points for a whole-dollar total, plus 25 if it is a multiple of 0.25
pub fn round_total_points(total: &str) -> Points {
    let Some(total) = parse_decimal("total", total) else {
        return 0;
    };

    let mut points = 0;
    if total.fract().is_zero() {
        points += ROUND_DOLLAR_BONUS;
    }
    if total
        .checked_rem(Decimal::new(25, 2))
        .is_some_and(|rem| rem.is_zero())
    {
        points += QUARTER_MULTIPLE_BONUS;
    }
    points
}

/// 5 points for every complete pair of items
pub fn item_pair_points(item_count: usize) -> Points {
    (item_count / 2) as Points * POINTS_PER_ITEM_PAIR
}

/// `ceil(price * 0.2)` when the trimmed description length is a multiple of 3
///
/// Length is measured in UTF-8 bytes. A negative price contributes nothing.
pub fn item_description_points(item: &Item) -> Points {
    if item.description.trim().len() % 3 != 0 {
        return 0;
    }

    let Some(price) = parse_decimal("price", &item.price) else {
        return 0;
    };

    price
        .checked_mul(Decimal::new(2, 1))
        .map(|scaled| scaled.ceil())
        .filter(|points| points.is_sign_positive())
        .and_then(|points| points.to_u64())
        .unwrap_or(0)
}

/// 6 points if the day of the purchase date is odd
pub fn odd_day_points(purchase_date: &str) -> Points {
    match parse_date(purchase_date) {
        Some(date) if date.day() % 2 == 1 => ODD_DAY_BONUS,
        _ => 0,
    }
}

/// 10 points for a purchase after 14:00 and before 16:00
///
/// 14:00 itself does not qualify; 15:59 does.
pub fn afternoon_points(purchase_time: &str) -> Points {
    let Some(time) = parse_time(purchase_time) else {
        return 0;
    };

    let in_window = time.hour() == 15 || (time.hour() == 14 && time.minute() > 0);
    if in_window {
        AFTERNOON_BONUS
    } else {
        0
    }
}

// ============================================================================
// FIELD PARSING
// ============================================================================

/// `YYYY-MM-DD`, every field zero-padded
fn parse_date(value: &str) -> Option<NaiveDate> {
    if !has_shape(value, DATE_SHAPE) {
        tracing::debug!(field = "purchaseDate", value, "not YYYY-MM-DD, rule scores zero");
        return None;
    }
    match NaiveDate::parse_from_str(value, DATE_FORMAT) {
        Ok(date) => Some(date),
        Err(e) => {
            tracing::debug!(field = "purchaseDate", value, error = %e, "unparsable field, rule scores zero");
            None
        }
    }
}

/// `HH:MM`, 24-hour, zero-padded
fn parse_time(value: &str) -> Option<NaiveTime> {
    if !has_shape(value, TIME_SHAPE) {
        tracing::debug!(field = "purchaseTime", value, "not HH:MM, rule scores zero");
        return None;
    }
    match NaiveTime::parse_from_str(value, TIME_FORMAT) {
        Ok(time) => Some(time),
        Err(e) => {
            tracing::debug!(field = "purchaseTime", value, error = %e, "unparsable field, rule scores zero");
            None
        }
    }
}

/// Byte-for-byte match against a template where `9` stands for any ASCII digit
fn has_shape(value: &str, shape: &str) -> bool {
    value.len() == shape.len()
        && value.bytes().zip(shape.bytes()).all(|(b, s)| match s {
            b'9' => b.is_ascii_digit(),
            _ => b == s,
        })
}

/// Decimal literal, exponent notation included
///
/// Digit-group underscores are rejected even though `Decimal` would take them.
fn parse_decimal(field: &'static str, value: &str) -> Option<Decimal> {
    if value.contains('_') {
        tracing::debug!(field, value, "digit separators not allowed, rule scores zero");
        return None;
    }
    match Decimal::from_str(value) {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            tracing::debug!(field, value, error = %e, "unparsable field, rule scores zero");
            None
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
