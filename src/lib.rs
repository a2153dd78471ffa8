pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod storage;
pub mod totals;

pub use error::{Result, TotalsError};
pub use models::{EnhancedMealPlan, FoodItem, Meal, MealPlan, NutrientTotals, NutrientValue};
pub use totals::{enhance_with_policy, enhance_with_totalizers, ValuePolicy};
