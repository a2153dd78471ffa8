use crate::models::{EnhancedMealPlan, NutrientTotals};
use crate::totals::ValueIssue;

fn meal_label(index: usize, name: Option<&str>) -> String {
    match name {
        Some(name) => name.to_string(),
        None => format!("Meal {}", index + 1),
    }
}

/// One table row: label, then the four nutrients.
fn format_row(label: &str, totals: &NutrientTotals, width: usize) -> String {
    format!(
        "{:<width$}  {:>9.1}  {:>9.1}  {:>9.1}  {:>9.1}",
        label,
        totals.calorias,
        totals.carboidrato,
        totals.gordura,
        totals.proteina,
        width = width
    )
}

/// Display per-meal totals and the plan totals in a formatted table.
pub fn display_summary(plan: &EnhancedMealPlan, per_meal: &[NutrientTotals]) {
    let meals = &plan.plan.refeicoes;
    if meals.is_empty() {
        println!("Meal plan has no meals.");
        return;
    }

    let labels: Vec<String> = meals
        .iter()
        .enumerate()
        .map(|(i, meal)| meal_label(i, meal.name()))
        .collect();
    let width = labels.iter().map(|l| l.len()).max().unwrap_or(10).max(5);

    println!();
    println!("=== Meal Plan Totals ===");
    println!();
    println!(
        "{:<width$}  {:>9}  {:>9}  {:>9}  {:>9}",
        "Meal",
        "kcal",
        "carbs g",
        "fat g",
        "protein g",
        width = width
    );

    for (label, totals) in labels.iter().zip(per_meal) {
        println!("{}", format_row(label, totals, width));
    }

    println!("{}", "-".repeat(width + 44));
    println!("{}", format_row("Total", &plan.totalizers, width));
    println!();
    println!("Meals: {}  Items: {}", meals.len(), plan.plan.item_count());
    println!();
}

/// List nutrient values that were counted as zero.
pub fn display_value_issues(issues: &[ValueIssue]) {
    if issues.is_empty() {
        println!("All nutrient values are numeric.");
        return;
    }

    println!("{} non-numeric nutrient value(s) counted as zero:", issues.len());
    for issue in issues {
        println!("  {} = {}", issue.path(), issue.value);
    }
}
