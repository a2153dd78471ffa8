use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use super::Nutrient;

/// Summed nutrients for an item, a meal or a whole plan.
///
/// `Default` is the zero seed for every fold.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NutrientTotals {
    pub calorias: f64,
    pub carboidrato: f64,
    pub gordura: f64,
    pub proteina: f64,
}

impl NutrientTotals {
    pub fn new(calorias: f64, carboidrato: f64, gordura: f64, proteina: f64) -> Self {
        Self {
            calorias,
            carboidrato,
            gordura,
            proteina,
        }
    }

    pub fn get(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Calorias => self.calorias,
            Nutrient::Carboidrato => self.carboidrato,
            Nutrient::Gordura => self.gordura,
            Nutrient::Proteina => self.proteina,
        }
    }

    pub fn get_mut(&mut self, nutrient: Nutrient) -> &mut f64 {
        match nutrient {
            Nutrient::Calorias => &mut self.calorias,
            Nutrient::Carboidrato => &mut self.carboidrato,
            Nutrient::Gordura => &mut self.gordura,
            Nutrient::Proteina => &mut self.proteina,
        }
    }

    /// True when every field is zero.
    pub fn is_zero(&self) -> bool {
        Nutrient::ALL.iter().all(|&n| self.get(n) == 0.0)
    }
}

/// Add two finite values, saturating at `±f64::MAX` instead of overflowing.
fn saturating_add(a: f64, b: f64) -> f64 {
    (a + b).clamp(-f64::MAX, f64::MAX)
}

/// Element-wise addition. Saturates so totals stay finite.
impl Add for NutrientTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            calorias: saturating_add(self.calorias, rhs.calorias),
            carboidrato: saturating_add(self.carboidrato, rhs.carboidrato),
            gordura: saturating_add(self.gordura, rhs.gordura),
            proteina: saturating_add(self.proteina, rhs.proteina),
        }
    }
}

impl AddAssign for NutrientTotals {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl Sum for NutrientTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

impl<'a> Sum<&'a NutrientTotals> for NutrientTotals {
    fn sum<I: Iterator<Item = &'a Self>>(iter: I) -> Self {
        iter.copied().sum()
    }
}
