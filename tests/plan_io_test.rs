use std::fs;
use std::io::Write;

use tempfile::{NamedTempFile, TempDir};

use meal_totals::models::EnhancedMealPlan;
use meal_totals::storage::{load_document, load_meal_plan, save_enhanced, write_meal_csv};
use meal_totals::totals::{enhance_json, enhance_with_policy, totals_by_meal, ValuePolicy};
use meal_totals::TotalsError;

const PLAN_JSON: &str = r#"{
    "id": 42,
    "refeicoes": [
        {"nome": "Almoco", "alimentos": [
            {"nome": "Arroz", "calorias": "130kcal", "carboidrato": "28g", "gordura": "0,3g", "proteina": "2,7g"},
            {"nome": "Feijao", "calorias": "76kcal", "carboidrato": "14g", "gordura": "0,5g", "proteina": "4,8g"}
        ]},
        {"nome": "Lanche", "alimentos": [
            {"nome": "Banana", "calorias": "89kcal", "carboidrato": "23g", "gordura": "n/a", "proteina": "1,1g"}
        ]}
    ]
}"#;

fn plan_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(PLAN_JSON.as_bytes()).unwrap();
    file
}

#[test]
fn test_file_to_enhanced_file() {
    let input = plan_file();
    let plan = load_meal_plan(input.path()).unwrap();
    let enhanced = enhance_with_policy(&plan, ValuePolicy::Warn).unwrap();

    let dir = TempDir::new().unwrap();
    let out_path = dir.path().join("enhanced.json");
    save_enhanced(Some(out_path.as_path()), &enhanced, false).unwrap();

    let written: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(written["id"], 42);
    assert_eq!(written["refeicoes"][1]["alimentos"][0]["gordura"], "n/a");
    assert_eq!(written["totalizers"]["calorias"], 295.0);
    assert_eq!(written["totalizers"]["carboidrato"], 65.0);

    let reloaded: EnhancedMealPlan = serde_json::from_value(written).unwrap();
    assert_eq!(reloaded.plan, plan);
}

#[test]
fn test_reject_policy_on_loaded_document() {
    let input = plan_file();
    let document = load_document(input.path()).unwrap();

    match enhance_json(document, ValuePolicy::Reject).unwrap_err() {
        TotalsError::NonNumericValue { path, value } => {
            assert_eq!(path, "refeicoes[1].alimentos[0].gordura");
            assert_eq!(value, "\"n/a\"");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_csv_export_from_loaded_plan() {
    let input = plan_file();
    let plan = load_meal_plan(input.path()).unwrap();

    let dir = TempDir::new().unwrap();
    let csv_path = dir.path().join("totals.csv");
    write_meal_csv(&plan, &totals_by_meal(&plan), &csv_path).unwrap();

    let content = fs::read_to_string(&csv_path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], "meal,name,items,calorias,carboidrato,gordura,proteina");
    assert_eq!(lines[1], "1,Almoco,2,206.00,42.00,0.80,7.50");
    assert_eq!(lines[2], "2,Lanche,1,89.00,23.00,0.00,1.10");
    assert_eq!(lines[3], "total,,3,295.00,65.00,0.80,8.60");
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = load_meal_plan(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, TotalsError::Io(_)));
}
