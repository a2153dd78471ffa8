use std::borrow::Cow;

use crate::models::NutrientValue;
use crate::totals::constants::UNIT_SYMBOLS;

/// Outcome of reading a nutrient value as a number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Parsed {
    Numeric(f64),
    NotNumeric,
}

impl Parsed {
    /// Wrap `value`, rejecting NaN and infinities.
    pub fn numeric(value: f64) -> Self {
        if value.is_finite() {
            Parsed::Numeric(value)
        } else {
            Parsed::NotNumeric
        }
    }

    /// The value if it is usable as a finite summand.
    pub fn finite(self) -> Option<f64> {
        match self {
            Parsed::Numeric(v) if v.is_finite() => Some(v),
            _ => None,
        }
    }

    /// Contribution to a sum: the value, or zero when not numeric.
    pub fn or_zero(self) -> f64 {
        self.finite().unwrap_or(0.0)
    }

    pub fn is_numeric(self) -> bool {
        self.finite().is_some()
    }
}

fn is_unit_char(c: char) -> bool {
    c.is_alphabetic() || c.is_whitespace() || UNIT_SYMBOLS.contains(&c)
}

/// Parse a quantity such as `"12g"`, `"100 kcal"` or `"12,5g"`.
///
/// The trailing unit token is dropped and the remainder must be a plain
/// decimal number. A single comma is read as the decimal separator when no
/// dot is present.
pub fn parse_quantity(raw: &str) -> Parsed {
    let number = raw.trim().trim_end_matches(is_unit_char);
    if number.is_empty() {
        return Parsed::NotNumeric;
    }

    let normalized: Cow<str> = if !number.contains('.') && number.matches(',').count() == 1 {
        Cow::Owned(number.replacen(',', ".", 1))
    } else {
        Cow::Borrowed(number)
    };

    normalized
        .parse::<f64>()
        .map(Parsed::numeric)
        .unwrap_or(Parsed::NotNumeric)
}

/// Strip the unit from a nutrient value and read it as a number.
pub fn strip_unit(value: &NutrientValue) -> Parsed {
    match value {
        NutrientValue::Number(n) => n.as_f64().map_or(Parsed::NotNumeric, Parsed::numeric),
        NutrientValue::Text(s) => parse_quantity(s),
        NutrientValue::Null | NutrientValue::Other(_) | NutrientValue::Missing => {
            Parsed::NotNumeric
        }
    }
}
