//! Money type for representing currency amounts
//!
//! Internally stores amounts in minor units (kopecks, cents) as `i64` so that
//! revenue deltas and dashboard totals are exact. Arithmetic saturates at the
//! `i64` bounds instead of overflowing. Provides
//! parsing of user-entered text and grouped formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Currency symbols accepted (and ignored) when parsing
const CURRENCY_SYMBOLS: [char; 3] = ['$', '₽', '€'];

/// Largest amount accepted from user input: one trillion whole units
///
/// Keeps totals over any realistic number of records far from the `i64`
/// bounds.
pub const MAX_AMOUNT: Money = Money(1_000_000_000_000 * 100);

/// Represents a monetary amount stored in minor units (hundredths)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from minor units
    ///
    /// # Examples
    /// ```
    /// use cabinet_stats::models::Money;
    /// let amount = Money::from_minor(1050); // 10.50
    /// assert_eq!(amount.to_string(), "10.50");
    /// ```
    pub const fn from_minor(minor: i64) -> Self {
        Self(minor)
    }

    /// Create a Money amount from whole currency units
    ///
    /// # Examples
    /// ```
    /// use cabinet_stats::models::Money;
    /// let amount = Money::from_major(150_000);
    /// assert_eq!(amount.minor(), 15_000_000);
    /// ```
    pub const fn from_major(major: i64) -> Self {
        Self(major * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in minor units
    pub const fn minor(&self) -> i64 {
        self.0
    }

    /// Get the whole units portion (truncated toward zero)
    pub const fn major(&self) -> i64 {
        self.0 / 100
    }

    /// Get the minor portion (0-99)
    pub const fn minor_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// The amount as a floating point number of whole units
    ///
    /// Only used at the edges (chart scaling, spreadsheet cells), never for
    /// arithmetic.
    pub fn to_f64(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Arithmetic mean of `total` over `count` items, rounded half away from
    /// zero to the minor unit. The mean of zero items is zero.
    pub fn mean(total: Money, count: usize) -> Money {
        if count == 0 {
            return Money::zero();
        }
        let n = count as i64;
        let quotient = total.0 / n;
        let remainder = total.0 % n;
        if 2 * remainder.abs() >= n {
            Money(quotient + total.0.signum())
        } else {
            Money(quotient)
        }
    }

    /// Parse a money amount from user-entered text
    ///
    /// Accepts `"150000"`, `"150000.50"`, `"-20"`, `"150 000,50"`,
    /// `"1,500.25"` and a leading or trailing currency symbol. When both `,`
    /// and `.` appear, `,` is a group separator; a lone `,` is the decimal
    /// separator. A third fractional digit rounds the amount half up.
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let original = s;
        let invalid = || MoneyParseError::InvalidFormat(original.trim().to_string());

        let s = s
            .trim()
            .trim_matches(|c| CURRENCY_SYMBOLS.contains(&c))
            .trim();

        let (negative, s) = match s.strip_prefix('-') {
            Some(stripped) => (true, stripped.trim_start()),
            None => (false, s),
        };

        let mut cleaned: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '\u{a0}' | '\u{202f}'))
            .collect();
        if cleaned.contains('.') {
            cleaned.retain(|c| c != ',');
        } else {
            cleaned = cleaned.replace(',', ".");
        }

        let (whole, fraction) = match cleaned.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (cleaned.as_str(), ""),
        };

        if whole.is_empty() || !all_digits(whole) || !all_digits(fraction) {
            return Err(invalid());
        }

        let whole: i64 = whole.parse().map_err(|_| MoneyParseError::OutOfRange)?;
        let digits: Vec<i64> = fraction
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(i64::from)
            .collect();
        let mut minor = digits.first().copied().unwrap_or(0) * 10
            + digits.get(1).copied().unwrap_or(0);
        if digits.get(2).copied().unwrap_or(0) >= 5 {
            minor += 1;
        }

        let total = whole
            .checked_mul(100)
            .and_then(|v| v.checked_add(minor))
            .ok_or(MoneyParseError::OutOfRange)?;

        Ok(Self(if negative { -total } else { total }))
    }

    /// Format with digit grouping and a trailing currency symbol,
    /// e.g. `150 000.00 ₽`
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if symbol.is_empty() {
            self.format_grouped()
        } else {
            format!("{} {}", self.format_grouped(), symbol)
        }
    }

    /// Format with thousands grouped by spaces, e.g. `-1 234 567.89`
    pub fn format_grouped(&self) -> String {
        let digits = self.major().abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        let sign = if self.is_negative() { "-" } else { "" };
        format!("{}{}.{:02}", sign, grouped, self.minor_part())
    }
}

fn all_digits(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_digit())
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-{}.{:02}", self.major().abs(), self.minor_part())
        } else {
            write!(f, "{}.{:02}", self.major(), self.minor_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(self.0.saturating_neg())
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
    OutOfRange,
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: '{}'", s),
            MoneyParseError::OutOfRange => write!(f, "Amount is out of range"),
        }
    }
}

impl std::error::Error for MoneyParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_minor() {
        let m = Money::from_minor(1050);
        assert_eq!(m.minor(), 1050);
        assert_eq!(m.major(), 10);
        assert_eq!(m.minor_part(), 50);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_minor(1050)), "10.50");
        assert_eq!(format!("{}", Money::zero()), "0.00");
        assert_eq!(format!("{}", Money::from_minor(-1050)), "-10.50");
        assert_eq!(format!("{}", Money::from_minor(-5)), "-0.05");
    }

    #[test]
    fn test_grouped_format() {
        assert_eq!(Money::from_major(150_000).format_grouped(), "150 000.00");
        assert_eq!(Money::from_major(370_000).format_with_symbol("₽"), "370 000.00 ₽");
        assert_eq!(Money::from_minor(-123_456_789).format_grouped(), "-1 234 567.89");
        assert_eq!(Money::from_major(999).format_grouped(), "999.00");
        assert_eq!(Money::from_major(1000).format_with_symbol(""), "1 000.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_major(150);
        let b = Money::from_major(100);

        assert_eq!(a - b, Money::from_major(50));
        assert_eq!(b - a, Money::from_major(-50));
        assert_eq!((a + b).minor(), 25_000);
        assert_eq!((-a).minor(), -15_000);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Money::parse("150000").unwrap(), Money::from_major(150_000));
        assert_eq!(Money::parse("10.50").unwrap().minor(), 1050);
        assert_eq!(Money::parse("10.5").unwrap().minor(), 1050);
        assert_eq!(Money::parse("-20").unwrap().minor(), -2000);
        assert_eq!(Money::parse(" 150 000,50 ₽").unwrap().minor(), 15_000_050);
        assert_eq!(Money::parse("$1,500.25").unwrap().minor(), 150_025);
        assert_eq!(Money::parse("0.05").unwrap().minor(), 5);
        assert_eq!(Money::parse("1.005").unwrap().minor(), 101);
        assert_eq!(Money::parse("1.004").unwrap().minor(), 100);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(Money::parse("").is_err());
        assert!(Money::parse("abc").is_err());
        assert!(Money::parse("12a").is_err());
        assert!(Money::parse(".50").is_err());
        assert!(Money::parse("1.2.3").is_err());
        assert!(Money::parse("+5").is_err());
        assert_eq!(
            Money::parse("99999999999999999999"),
            Err(MoneyParseError::OutOfRange)
        );
    }

    #[test]
    fn test_arithmetic_saturates() {
        let big = Money::from_minor(5_000_000_000_000_000_000);
        assert_eq!(big + big, Money::from_minor(i64::MAX));
        assert_eq!(-big - big, Money::from_minor(i64::MIN));
        assert_eq!(-Money::from_minor(i64::MIN), Money::from_minor(i64::MAX));

        let total: Money = [big, big, Money::from_major(1)].into_iter().sum();
        assert_eq!(total, Money::from_minor(i64::MAX));
    }

    #[test]
    fn test_mean() {
        assert_eq!(Money::mean(Money::from_major(12_500), 2), Money::from_major(6_250));
        assert_eq!(Money::mean(Money::from_minor(5), 2), Money::from_minor(3));
        assert_eq!(Money::mean(Money::from_minor(-5), 2), Money::from_minor(-3));
        assert_eq!(Money::mean(Money::from_minor(10), 3), Money::from_minor(3));
        assert_eq!(Money::mean(Money::from_major(42), 0), Money::zero());
    }

    #[test]
    fn test_to_f64() {
        assert_eq!(Money::from_minor(1050).to_f64(), 10.5);
        assert_eq!(Money::from_major(-20).to_f64(), -20.0);
    }

    #[test]
    fn test_sum() {
        let amounts = vec![Money::from_major(150_000), Money::from_major(220_000)];
        let total: Money = amounts.into_iter().sum();
        assert_eq!(total, Money::from_major(370_000));
    }

    #[test]
    fn test_serialization() {
        let m = Money::from_minor(1050);
        let json = serde_json::to_string(&m).unwrap();
        assert_eq!(json, "1050");

        let deserialized: Money = serde_json::from_str(&json).unwrap();
        assert_eq!(m, deserialized);
    }
}
