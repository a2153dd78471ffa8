use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::{FoodItem, NutrientTotals};

/// A meal: an ordered list of food items plus whatever else the source sent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Meal {
    pub alimentos: Vec<FoodItem>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Meal {
    /// Display name if the meal carries one.
    pub fn name(&self) -> Option<&str> {
        crate::totals::constants::LABEL_KEYS
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
    }
}

/// A meal plan as received. Unknown top-level keys are kept in `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MealPlan {
    pub refeicoes: Vec<Meal>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl MealPlan {
    pub fn item_count(&self) -> usize {
        self.refeicoes.iter().map(|m| m.alimentos.len()).sum()
    }
}

/// The input plan, unchanged, plus the aggregate nutrient totals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnhancedMealPlan {
    #[serde(flatten)]
    pub plan: MealPlan,

    pub totalizers: NutrientTotals,
}

impl EnhancedMealPlan {
    /// Attach totals to a copy of `plan`.
    ///
    /// A stale `totalizers` key already present on the input is replaced.
    pub fn new(plan: &MealPlan, totalizers: NutrientTotals) -> Self {
        let mut plan = plan.clone();
        plan.extra.remove(crate::totals::constants::TOTALIZERS_KEY);
        Self { plan, totalizers }
    }
}
