use std::path::Path;

use dialoguer::Confirm;

use crate::error::Result;

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Ask before replacing an existing output file.
///
/// Returns true straight away when the file does not exist or `force` is set.
pub fn confirm_overwrite(path: &Path, force: bool) -> Result<bool> {
    if force || !path.exists() {
        return Ok(true);
    }
    prompt_yes_no(&format!("{} already exists. Overwrite?", path.display()), false)
}
