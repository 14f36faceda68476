//! Currency type for representing tour prices
//!
//! Stores an amount as a whole-unit part and a sub-unit part, both integers,
//! to avoid floating-point precision issues. Construction and arithmetic
//! validate that neither part is negative.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{TourError, TourResult};

/// Number of sub-units in one whole unit
pub const SUB_UNIT_RANGE: i64 = 100;

/// Currency prefix used when no symbol is configured
pub const DEFAULT_SYMBOL: &str = "Rp.";

/// Number formatting convention used when rendering amounts
///
/// The locale is always chosen explicitly so output does not depend on the
/// environment of the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Locale {
    /// No digit grouping, `.` as decimal separator
    #[default]
    Posix,
    /// `,` grouping, `.` decimal separator
    EnUs,
    /// `.` grouping, `,` decimal separator
    IdId,
    /// `.` grouping, `,` decimal separator
    DeDe,
    /// Space grouping, `,` decimal separator
    FrFr,
}

impl Locale {
    /// All supported locales, in display order
    pub const ALL: [Locale; 5] = [
        Locale::Posix,
        Locale::EnUs,
        Locale::IdId,
        Locale::DeDe,
        Locale::FrFr,
    ];

    /// Separator inserted between groups of three integer digits
    pub fn grouping_separator(&self) -> Option<char> {
        match self {
            Self::Posix => None,
            Self::EnUs => Some(','),
            Self::IdId | Self::DeDe => Some('.'),
            Self::FrFr => Some(' '),
        }
    }

    /// Separator between the integer and fractional digits
    pub fn decimal_separator(&self) -> char {
        match self {
            Self::Posix | Self::EnUs => '.',
            Self::IdId | Self::DeDe | Self::FrFr => ',',
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Posix => write!(f, "posix"),
            Self::EnUs => write!(f, "en-us"),
            Self::IdId => write!(f, "id-id"),
            Self::DeDe => write!(f, "de-de"),
            Self::FrFr => write!(f, "fr-fr"),
        }
    }
}

impl FromStr for Locale {
    type Err = TourError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        // Drop an encoding suffix such as ".utf-8"
        let normalized = normalized.split('.').next().unwrap_or_default();

        match normalized {
            "posix" | "c" => Ok(Self::Posix),
            "en-us" | "en" => Ok(Self::EnUs),
            "id-id" | "id" => Ok(Self::IdId),
            "de-de" | "de" => Ok(Self::DeDe),
            "fr-fr" | "fr" => Ok(Self::FrFr),
            _ => Err(TourError::Config(format!("Unknown locale: {}", s))),
        }
    }
}

/// A non-negative fixed-point currency amount
///
/// The sub-unit part always lies in `0..SUB_UNIT_RANGE`; any excess given
/// at construction is carried into the whole-unit part.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency {
    whole: i64,
    sub: i64,
}

impl Currency {
    /// Create a currency amount from whole units and sub-units
    ///
    /// # Errors
    ///
    /// Returns [`TourError::InvalidValue`] if either part is negative.
    ///
    /// # Examples
    /// ```
    /// use tour_table::models::Currency;
    /// let price = Currency::new(10, 250).unwrap(); // 12.50
    /// assert_eq!(price.whole(), 12);
    /// assert_eq!(price.sub(), 50);
    /// ```
    pub fn new(whole: i64, sub: i64) -> TourResult<Self> {
        if whole < 0 || sub < 0 {
            return Err(TourError::InvalidValue);
        }

        let whole = whole
            .checked_add(sub / SUB_UNIT_RANGE)
            .ok_or(TourError::InvalidValue)?;

        Ok(Self {
            whole,
            sub: sub % SUB_UNIT_RANGE,
        })
    }

    /// Create an amount with no sub-units
    pub fn from_whole(whole: i64) -> TourResult<Self> {
        Self::new(whole, 0)
    }

    /// Create a zero amount
    pub const fn zero() -> Self {
        Self { whole: 0, sub: 0 }
    }

    /// Get the whole-unit part
    pub const fn whole(&self) -> i64 {
        self.whole
    }

    /// Get the sub-unit part (always below `SUB_UNIT_RANGE`)
    pub const fn sub(&self) -> i64 {
        self.sub
    }

    /// Get the amount as a count of sub-units
    pub fn total_sub_units(&self) -> i128 {
        i128::from(self.whole) * i128::from(SUB_UNIT_RANGE) + i128::from(self.sub)
    }

    /// Number of base-10 digits in the amount expressed in sub-units
    pub fn digit_count(&self) -> usize {
        self.total_sub_units()
            .checked_ilog10()
            .map_or(1, |d| d as usize + 1)
    }

    /// Add two amounts part by part, then normalize
    pub fn checked_add(self, other: Self) -> TourResult<Self> {
        let whole = self
            .whole
            .checked_add(other.whole)
            .ok_or(TourError::InvalidValue)?;
        Self::new(whole, self.sub + other.sub)
    }

    /// Subtract two amounts part by part, then normalize
    ///
    /// Fails when either resulting part would be negative, even if the
    /// overall total is still positive.
    pub fn checked_sub(self, other: Self) -> TourResult<Self> {
        Self::new(self.whole - other.whole, self.sub - other.sub)
    }

    /// Format with a currency symbol using the given locale's punctuation
    pub fn format(&self, locale: Locale, symbol: &str) -> String {
        let digits = self.whole.to_string();
        let integer = match locale.grouping_separator() {
            Some(sep) => group_digits(&digits, sep),
            None => digits,
        };

        format!(
            "{}{}{}{:02}",
            symbol,
            integer,
            locale.decimal_separator(),
            self.sub
        )
    }
}

/// Insert `sep` between every group of three digits, counting from the right
fn group_digits(digits: &str, sep: char) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(c);
    }

    grouped
}

impl Default for Currency {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format(Locale::default(), DEFAULT_SYMBOL))
    }
}

impl Add for Currency {
    type Output = TourResult<Currency>;

    fn add(self, other: Self) -> Self::Output {
        self.checked_add(other)
    }
}

impl Sub for Currency {
    type Output = TourResult<Currency>;

    fn sub(self, other: Self) -> Self::Output {
        self.checked_sub(other)
    }
}
