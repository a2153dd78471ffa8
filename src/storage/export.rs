use std::path::Path;

use crate::error::Result;
use crate::models::{MealPlan, NutrientTotals};

fn totals_record(totals: &NutrientTotals) -> [String; 4] {
    [
        format!("{:.2}", totals.calorias),
        format!("{:.2}", totals.carboidrato),
        format!("{:.2}", totals.gordura),
        format!("{:.2}", totals.proteina),
    ]
}

/// Write one CSV row per meal followed by a `total` row.
///
/// `per_meal` must be in meal order, as returned by `totals_by_meal`.
pub fn write_meal_csv(plan: &MealPlan, per_meal: &[NutrientTotals], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "meal",
        "name",
        "items",
        "calorias",
        "carboidrato",
        "gordura",
        "proteina",
    ])?;

    for (i, (meal, totals)) in plan.refeicoes.iter().zip(per_meal).enumerate() {
        let [cal, carb, fat, prot] = totals_record(totals);
        wtr.write_record([
            (i + 1).to_string(),
            meal.name().unwrap_or_default().to_string(),
            meal.alimentos.len().to_string(),
            cal,
            carb,
            fat,
            prot,
        ])?;
    }

    let overall: NutrientTotals = per_meal.iter().sum();
    let [cal, carb, fat, prot] = totals_record(&overall);
    wtr.write_record([
        "total".to_string(),
        String::new(),
        plan.item_count().to_string(),
        cal,
        carb,
        fat,
        prot,
    ])?;

    wtr.flush()?;
    Ok(())
}
