/// Key holding the ordered meals of a plan.
pub const MEALS_KEY: &str = "refeicoes";

/// Key holding the ordered food items of a meal.
pub const ITEMS_KEY: &str = "alimentos";

/// Key the computed totals are written under.
pub const TOTALIZERS_KEY: &str = "totalizers";

/// Keys tried, in order, when looking for a meal or item display name.
pub const LABEL_KEYS: [&str; 4] = ["nome", "descricao", "titulo", "name"];

/// Non-alphabetic characters that may appear in a trailing unit token.
pub const UNIT_SYMBOLS: [char; 3] = ['%', '°', '/'];

/// Minimum Jaro-Winkler score for a "did you mean" key hint.
pub const KEY_SUGGESTION_THRESHOLD: f64 = 0.85;
