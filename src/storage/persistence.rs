use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;

use serde_json::Value;

use crate::error::{Result, TotalsError};
use crate::models::{EnhancedMealPlan, MealPlan};
use crate::totals::parse_meal_plan;

/// Path standing for stdin when loading and stdout when saving.
pub const STDIO_PATH: &str = "-";

/// True when `path` stands for stdin/stdout rather than a file.
pub fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == STDIO_PATH
}

/// Whether two paths name the same file.
///
/// Paths that both exist are compared after `fs::canonicalize`, so
/// `./plan.json` and `plan.json` match. Stdio never matches a file.
pub fn same_file(a: &Path, b: &Path) -> bool {
    if is_stdio(a) || is_stdio(b) {
        return false;
    }
    match (fs::canonicalize(a), fs::canonicalize(b)) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}

/// Refuse to write output over the input plan.
pub fn ensure_distinct(input: &Path, output: &Path) -> Result<()> {
    if same_file(input, output) {
        return Err(TotalsError::InvalidInput(format!(
            "output path {} is the input file",
            output.display()
        )));
    }
    Ok(())
}

/// Load a raw JSON document from a file, or stdin for `-`.
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<Value> {
    let path = path.as_ref();
    let content = if is_stdio(path) {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(path)?
    };

    Ok(serde_json::from_str(&content)?)
}

/// Load a meal plan, rejecting documents without the expected structure.
pub fn load_meal_plan<P: AsRef<Path>>(path: P) -> Result<MealPlan> {
    let document = load_document(path)?;
    let plan = parse_meal_plan(document)?;
    tracing::debug!(meals = plan.refeicoes.len(), "loaded meal plan");
    Ok(plan)
}

/// Serialize an enhanced plan.
pub fn to_json_string(plan: &EnhancedMealPlan, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(plan)?
    } else {
        serde_json::to_string(plan)?
    };
    Ok(json)
}

/// Write an enhanced plan to a file, or stdout when `path` is `None` or `-`.
pub fn save_enhanced(path: Option<&Path>, plan: &EnhancedMealPlan, pretty: bool) -> Result<()> {
    let json = to_json_string(plan, pretty)?;
    match path {
        Some(path) if !is_stdio(path) => fs::write(path, json)?,
        _ => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", json)?;
        }
    }
    Ok(())
}
