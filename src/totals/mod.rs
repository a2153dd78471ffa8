pub mod aggregate;
pub mod constants;
pub mod shape;
pub mod units;

pub use aggregate::{
    enhance_with_policy, enhance_with_totalizers, find_sum_overflows, find_value_issues,
    item_totals, meal_totals, plan_totals, totals_by_meal, SumOverflow, ValueIssue, ValuePolicy,
};
pub use constants::*;
pub use shape::{enhance_json, parse_meal_plan, validate_shape};
pub use units::{parse_quantity, strip_unit, Parsed};
