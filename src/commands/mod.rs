mod cat_file;
mod hash_object;
mod init;
mod ls_tree;

use std::fs;

use anyhow::Result;

use cat_file::cat_file;
use hash_object::hash_object;
use init::init;
use ls_tree::ls_tree;

use crate::Constants;
use crate::args::Command;

/// Calls the corresponding function to perform every command variant.
///
/// # Return
///
/// The success message
///
/// # Errors
///
/// This function will fail if any of the executed commands return an error.
pub fn execute_command(command: &Command) -> Result<String> {
    if !fs::exists(Constants::repository_path())? {
        if let Command::Init = command {
            // Only command that can be executed without a repository already existing
            return init();
        }
        return Ok("Folder is not a git repository".into());
    }
    match command {
        Command::Init => init(), // always returns an "already a git repository"
        Command::HashObject { write, file } => hash_object(file, *write),
        Command::CatFile { pretty, hash } => cat_file(hash, *pretty),
        Command::LsTree { name_only, hash } => ls_tree(hash, *name_only),
    }
}
