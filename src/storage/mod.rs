mod export;
mod persistence;

pub use export::write_meal_csv;
pub use persistence::{
    ensure_distinct, is_stdio, load_document, load_meal_plan, same_file, save_enhanced,
    to_json_string, STDIO_PATH,
};
