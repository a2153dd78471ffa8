mod food;
mod plan;
mod totals;

pub use food::{FoodItem, Nutrient, NutrientValue};
pub use plan::{EnhancedMealPlan, Meal, MealPlan};
pub use totals::NutrientTotals;
