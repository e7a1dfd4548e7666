//! Interactive prompts using dialoguer

use std::path::Path;

use anyhow::Result;
use dialoguer::Confirm;

/// Prompt user to confirm proceeding with an action
pub fn confirm_step(message: &str) -> Result<bool> {
    let confirmed = Confirm::new()
        .with_prompt(message)
        .default(true)
        .interact()?;
    Ok(confirmed)
}

/// Prompt user to confirm writing into a directory that already has files
pub fn confirm_overwrite(output_dir: &Path) -> Result<bool> {
    let message = format!(
        "{} is not empty. Overwrite existing reports?",
        output_dir.display()
    );
    confirm_step(&message)
}
