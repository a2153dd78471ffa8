use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// One of the four nutrients tracked per food item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Nutrient {
    Calorias,
    Carboidrato,
    Gordura,
    Proteina,
}

impl Nutrient {
    pub const ALL: [Nutrient; 4] = [
        Nutrient::Calorias,
        Nutrient::Carboidrato,
        Nutrient::Gordura,
        Nutrient::Proteina,
    ];

    /// JSON key used for this nutrient in food items and totals.
    pub fn key(self) -> &'static str {
        match self {
            Nutrient::Calorias => "calorias",
            Nutrient::Carboidrato => "carboidrato",
            Nutrient::Gordura => "gordura",
            Nutrient::Proteina => "proteina",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// A raw nutrient value as it appears in the meal plan.
///
/// Kept exactly as read so the plan serializes back unchanged: numbers stay
/// numbers, unit-suffixed strings stay strings, `null` stays `null` and an
/// absent key stays absent.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NutrientValue {
    Number(Number),
    Text(String),
    Null,
    Other(Value),
    #[default]
    #[serde(skip)]
    Missing,
}

impl NutrientValue {
    pub fn is_missing(&self) -> bool {
        matches!(self, NutrientValue::Missing)
    }

    /// Absent or `null`: the item simply has no data for this nutrient.
    pub fn is_absent(&self) -> bool {
        matches!(self, NutrientValue::Missing | NutrientValue::Null)
    }
}

impl fmt::Display for NutrientValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NutrientValue::Number(n) => write!(f, "{}", n),
            NutrientValue::Text(s) => write!(f, "{:?}", s),
            NutrientValue::Null => f.write_str("null"),
            NutrientValue::Other(v) => write!(f, "{}", v),
            NutrientValue::Missing => f.write_str("<missing>"),
        }
    }
}

impl From<&str> for NutrientValue {
    fn from(s: &str) -> Self {
        NutrientValue::Text(s.to_string())
    }
}

impl From<f64> for NutrientValue {
    fn from(v: f64) -> Self {
        Number::from_f64(v)
            .map(NutrientValue::Number)
            .unwrap_or(NutrientValue::Null)
    }
}

/// A food item inside a meal.
///
/// Keys other than the four nutrients (name, portion, ...) are preserved in
/// `extra`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(default, skip_serializing_if = "NutrientValue::is_missing")]
    pub calorias: NutrientValue,

    #[serde(default, skip_serializing_if = "NutrientValue::is_missing")]
    pub carboidrato: NutrientValue,

    #[serde(default, skip_serializing_if = "NutrientValue::is_missing")]
    pub gordura: NutrientValue,

    #[serde(default, skip_serializing_if = "NutrientValue::is_missing")]
    pub proteina: NutrientValue,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FoodItem {
    pub fn value(&self, nutrient: Nutrient) -> &NutrientValue {
        match nutrient {
            Nutrient::Calorias => &self.calorias,
            Nutrient::Carboidrato => &self.carboidrato,
            Nutrient::Gordura => &self.gordura,
            Nutrient::Proteina => &self.proteina,
        }
    }

    /// Display name if the item carries one.
    pub fn name(&self) -> Option<&str> {
        crate::totals::constants::LABEL_KEYS
            .iter()
            .find_map(|key| self.extra.get(*key).and_then(Value::as_str))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_mixed_values() {
        let item: FoodItem = serde_json::from_value(json!({
            "nome": "Arroz",
            "calorias": "130kcal",
            "carboidrato": 28,
            "gordura": null,
            "porcao": "100g"
        }))
        .unwrap();

        assert_eq!(item.calorias, NutrientValue::from("130kcal"));
        assert!(matches!(item.carboidrato, NutrientValue::Number(_)));
        assert_eq!(item.gordura, NutrientValue::Null);
        assert_eq!(item.proteina, NutrientValue::Missing);
        assert_eq!(item.name(), Some("Arroz"));
        assert_eq!(item.extra.get("porcao"), Some(&json!("100g")));
    }

    #[test]
    fn test_serialize_keeps_null_and_omits_missing() {
        let input = json!({"calorias": "10kcal", "gordura": null, "flag": true});
        let item: FoodItem = serde_json::from_value(input.clone()).unwrap();
        let output = serde_json::to_value(&item).unwrap();
        assert_eq!(output, input);
    }

    #[test]
    fn test_non_scalar_value_is_kept() {
        let item: FoodItem = serde_json::from_value(json!({"proteina": [1, 2]})).unwrap();
        assert_eq!(item.proteina, NutrientValue::Other(json!([1, 2])));
        assert!(!item.proteina.is_absent());
    }

    #[test]
    fn test_nutrient_keys() {
        let keys: Vec<&str> = Nutrient::ALL.iter().map(|n| n.key()).collect();
        assert_eq!(keys, ["calorias", "carboidrato", "gordura", "proteina"]);
    }
}
