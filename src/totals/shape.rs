use serde_json::{Map, Value};
use strsim::jaro_winkler;

use crate::error::{Result, TotalsError};
use crate::models::{EnhancedMealPlan, MealPlan};
use crate::totals::aggregate::{enhance_with_policy, ValuePolicy};
use crate::totals::constants::{ITEMS_KEY, KEY_SUGGESTION_THRESHOLD, MEALS_KEY};

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Closest existing key to `expected`, if any is similar enough.
fn suggest_key<'a>(object: &'a Map<String, Value>, expected: &str) -> Option<&'a str> {
    object
        .keys()
        .map(|k| (k.as_str(), jaro_winkler(&k.to_lowercase(), expected)))
        .filter(|(_, score)| *score >= KEY_SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(k, _)| k)
}

fn as_object<'a>(value: &'a Value, path: &str) -> Result<&'a Map<String, Value>> {
    value.as_object().ok_or_else(|| {
        TotalsError::shape(path, format!("expected an object, found {}", kind(value)))
    })
}

/// Fetch `object[key]` as an array, naming `path` on failure.
fn required_array<'a>(
    object: &'a Map<String, Value>,
    key: &str,
    path: &str,
) -> Result<&'a Vec<Value>> {
    match object.get(key) {
        Some(Value::Array(items)) => Ok(items),
        Some(other) => Err(TotalsError::shape(
            path,
            format!("expected an array, found {}", kind(other)),
        )),
        None => {
            let reason = match suggest_key(object, key) {
                Some(found) => format!("missing `{}` (found `{}`, did you mean that?)", key, found),
                None => format!("missing `{}`", key),
            };
            Err(TotalsError::shape(path, reason))
        }
    }
}

/// Check that a raw JSON document has the meal plan structure.
///
/// The root must be an object whose `refeicoes` is an array of objects, each
/// with an `alimentos` array of objects. Nutrient values themselves are not
/// checked here.
pub fn validate_shape(document: &Value) -> Result<()> {
    let root = as_object(document, "$")?;
    let meals = required_array(root, MEALS_KEY, MEALS_KEY)?;

    for (meal_index, meal) in meals.iter().enumerate() {
        let meal_path = format!("{}[{}]", MEALS_KEY, meal_index);
        let meal = as_object(meal, &meal_path)?;

        let items_path = format!("{}.{}", meal_path, ITEMS_KEY);
        let items = required_array(meal, ITEMS_KEY, &items_path)?;

        for (item_index, item) in items.iter().enumerate() {
            as_object(item, &format!("{}[{}]", items_path, item_index))?;
        }
    }

    Ok(())
}

/// Validate a raw document, then read it as a [`MealPlan`].
pub fn parse_meal_plan(document: Value) -> Result<MealPlan> {
    validate_shape(&document)?;
    Ok(serde_json::from_value(document)?)
}

/// Validate a raw document and attach its totals.
pub fn enhance_json(document: Value, policy: ValuePolicy) -> Result<EnhancedMealPlan> {
    let plan = parse_meal_plan(document)?;
    enhance_with_policy(&plan, policy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn shape_error(document: Value) -> (String, String) {
        match validate_shape(&document).unwrap_err() {
            TotalsError::MalformedShape { path, reason } => (path, reason),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_valid_shape() {
        let document = json!({
            "paciente": "x",
            "refeicoes": [{"alimentos": [{"calorias": "1kcal"}]}, {"alimentos": []}]
        });
        assert!(validate_shape(&document).is_ok());
    }

    #[test]
    fn test_root_must_be_object() {
        let (path, reason) = shape_error(json!([1, 2]));
        assert_eq!(path, "$");
        assert_eq!(reason, "expected an object, found an array");
    }

    #[test]
    fn test_missing_meals_suggests_close_key() {
        let (path, reason) = shape_error(json!({"refeicao": []}));
        assert_eq!(path, "refeicoes");
        assert!(reason.contains("did you mean"), "{reason}");
        assert!(reason.contains("`refeicao`"), "{reason}");
    }

    #[test]
    fn test_missing_meals_without_hint() {
        let (_, reason) = shape_error(json!({"xyz": 1}));
        assert_eq!(reason, "missing `refeicoes`");
    }

    #[test]
    fn test_items_not_array_names_meal() {
        let (path, reason) = shape_error(json!({
            "refeicoes": [{"alimentos": []}, {"alimentos": "none"}]
        }));
        assert_eq!(path, "refeicoes[1].alimentos");
        assert_eq!(reason, "expected an array, found a string");
    }

    #[test]
    fn test_item_must_be_object() {
        let (path, _) = shape_error(json!({
            "refeicoes": [{"alimentos": [{}, 3]}]
        }));
        assert_eq!(path, "refeicoes[0].alimentos[1]");
    }

    #[test]
    fn test_enhance_json_fails_on_shape_before_totals() {
        let err = enhance_json(json!({"refeicoes": null}), ValuePolicy::Zero).unwrap_err();
        assert!(matches!(err, TotalsError::MalformedShape { .. }));
    }
}
