use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// A yen amount kept at full precision.
///
/// Sub-yen fractions (half-hour shifts, fractional counts) survive every
/// addition; they are only dropped when the amount is displayed. Arithmetic
/// saturates at the bounds of [`Decimal`] instead of overflowing.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Yen(pub Decimal);

impl Yen {
    pub const ZERO: Self = Self(Decimal::ZERO);

    pub fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// `quantity` units at `rate` yen each.
    pub fn of(quantity: Decimal, rate: Decimal) -> Self {
        let negative = quantity.is_sign_negative() != rate.is_sign_negative();
        Self(quantity.checked_mul(rate).unwrap_or_else(|| bound(negative)))
    }

    pub fn value(&self) -> Decimal {
        self.0
    }

    /// The whole-yen part, discarding any fraction towards zero.
    pub fn truncated(&self) -> Decimal {
        self.0.trunc()
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl Add for Yen {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        let negative = self.0.is_sign_negative();
        Self(self.0.checked_add(rhs.0).unwrap_or_else(|| bound(negative)))
    }
}

impl AddAssign for Yen {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for Yen {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Yen::ZERO, |acc, y| acc + y)
    }
}

impl fmt::Display for Yen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.truncated();
        let sign = if whole.is_sign_negative() && !whole.is_zero() {
            "-"
        } else {
            ""
        };
        write!(f, "{}¥{}", sign, group_thousands(&whole.abs().normalize().to_string()))
    }
}

fn bound(negative: bool) -> Decimal {
    if negative {
        Decimal::MIN
    } else {
        Decimal::MAX
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
