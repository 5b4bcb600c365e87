use std::fs;

use anyhow::{Context, Result};

use crate::Constants;

/// Creates a new git repository in the current directory.
///
/// # Errors
///
/// This function will fail if any of the operations related with the creation of directories and
/// files fail.
pub fn init() -> Result<String> {
    let repository_path = Constants::repository_path();

    if fs::exists(&repository_path)
        .context("could not verify folder existence when initializing")?
    {
        return Ok("The directory is already a git repository".into());
    }

    // creating directory and subdirectories
    for p in [
        repository_path,
        Constants::objects_path(),
        Constants::refs_path(),
    ] {
        fs::create_dir_all(&p).context(format!(
            "could not create repository subdirectories, specifically: {p:?}"
        ))?;
    }

    // creating default head file
    fs::write(Constants::head_path(), Constants::default_head_content())
        .context("could not write to HEAD when initializing")?;

    log::debug!("created repository skeleton at {:?}", Constants::repository_path());

    Ok("Initialized git directory".into())
}
