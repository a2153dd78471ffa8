use clap::ValueEnum;

use crate::error::{Result, TotalsError};
use crate::models::{EnhancedMealPlan, FoodItem, Meal, MealPlan, Nutrient, NutrientTotals, NutrientValue};
use crate::totals::constants::{ITEMS_KEY, MEALS_KEY, TOTALIZERS_KEY};
use crate::totals::units::strip_unit;

/// What to do with a nutrient value that is present but not numeric.
///
/// Absent and `null` values always count as zero without complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ValuePolicy {
    /// Count it as zero silently.
    #[default]
    Zero,
    /// Count it as zero and log a warning.
    Warn,
    /// Fail the whole computation.
    Reject,
}

/// A nutrient value that could not be read as a number.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueIssue {
    pub meal_index: usize,
    pub item_index: usize,
    pub nutrient: Nutrient,
    pub value: NutrientValue,
}

impl ValueIssue {
    /// Location in the plan, e.g. `refeicoes[0].alimentos[2].gordura`.
    pub fn path(&self) -> String {
        format!(
            "{}[{}].{}[{}].{}",
            MEALS_KEY, self.meal_index, ITEMS_KEY, self.item_index, self.nutrient
        )
    }
}

/// A nutrient whose plain sum leaves the finite `f64` range.
///
/// The totals themselves saturate at `±f64::MAX`; this records where.
#[derive(Debug, Clone, PartialEq)]
pub struct SumOverflow {
    /// `refeicoes[i]` for a meal sum, `totalizers` for the plan sum.
    pub path: String,
    pub nutrient: Nutrient,
}

/// Totals contributed by a single food item.
pub fn item_totals(item: &FoodItem) -> NutrientTotals {
    let mut totals = NutrientTotals::default();
    for nutrient in Nutrient::ALL {
        *totals.get_mut(nutrient) = strip_unit(item.value(nutrient)).or_zero();
    }
    totals
}

/// Sum of all items in one meal.
pub fn meal_totals(meal: &Meal) -> NutrientTotals {
    meal.alimentos.iter().map(item_totals).sum()
}

/// One total per meal, in meal order.
pub fn totals_by_meal(plan: &MealPlan) -> Vec<NutrientTotals> {
    plan.refeicoes.iter().map(meal_totals).collect()
}

/// Totals across every meal of the plan.
pub fn plan_totals(plan: &MealPlan) -> NutrientTotals {
    totals_by_meal(plan).iter().sum()
}

/// Copy of `plan` with its aggregate totals attached.
///
/// Non-numeric nutrient values contribute zero.
pub fn enhance_with_totalizers(plan: &MealPlan) -> EnhancedMealPlan {
    EnhancedMealPlan::new(plan, plan_totals(plan))
}

/// Like [`enhance_with_totalizers`], applying `policy` to unreadable values
/// and to sums that saturated.
pub fn enhance_with_policy(plan: &MealPlan, policy: ValuePolicy) -> Result<EnhancedMealPlan> {
    match policy {
        ValuePolicy::Zero => {}
        ValuePolicy::Warn => {
            for issue in find_value_issues(plan) {
                tracing::warn!(
                    path = %issue.path(),
                    value = %issue.value,
                    "non-numeric nutrient value counted as zero"
                );
            }
            for overflow in find_sum_overflows(plan) {
                tracing::warn!(
                    path = %overflow.path,
                    nutrient = %overflow.nutrient,
                    "nutrient total out of range, saturated"
                );
            }
        }
        ValuePolicy::Reject => {
            if let Some(issue) = find_value_issues(plan).into_iter().next() {
                return Err(TotalsError::NonNumericValue {
                    path: issue.path(),
                    value: issue.value.to_string(),
                });
            }
            if let Some(overflow) = find_sum_overflows(plan).into_iter().next() {
                return Err(TotalsError::SumOverflow {
                    path: overflow.path,
                    nutrient: overflow.nutrient.to_string(),
                });
            }
        }
    }

    let enhanced = enhance_with_totalizers(plan);
    tracing::debug!(
        meals = plan.refeicoes.len(),
        items = plan.item_count(),
        calorias = enhanced.totalizers.calorias,
        "computed meal plan totals"
    );
    Ok(enhanced)
}

/// Every present nutrient value that does not read as a finite number.
pub fn find_value_issues(plan: &MealPlan) -> Vec<ValueIssue> {
    let mut issues = Vec::new();
    for (meal_index, meal) in plan.refeicoes.iter().enumerate() {
        for (item_index, item) in meal.alimentos.iter().enumerate() {
            for nutrient in Nutrient::ALL {
                let value = item.value(nutrient);
                if !value.is_absent() && !strip_unit(value).is_numeric() {
                    issues.push(ValueIssue {
                        meal_index,
                        item_index,
                        nutrient,
                        value: value.clone(),
                    });
                }
            }
        }
    }
    issues
}

/// Meal and plan sums that overflow when added without saturation.
///
/// Reported meal by meal for each nutrient, then the plan sum.
pub fn find_sum_overflows(plan: &MealPlan) -> Vec<SumOverflow> {
    let mut overflows = Vec::new();
    for nutrient in Nutrient::ALL {
        let mut plan_sum = 0.0_f64;
        for (meal_index, meal) in plan.refeicoes.iter().enumerate() {
            let meal_sum: f64 = meal
                .alimentos
                .iter()
                .map(|item| strip_unit(item.value(nutrient)).or_zero())
                .sum();
            if !meal_sum.is_finite() {
                overflows.push(SumOverflow {
                    path: format!("{}[{}]", MEALS_KEY, meal_index),
                    nutrient,
                });
            }
            plan_sum += meal_sum;
        }
        if !plan_sum.is_finite() {
            overflows.push(SumOverflow {
                path: TOTALIZERS_KEY.to_string(),
                nutrient,
            });
        }
    }
    overflows
}
