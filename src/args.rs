use std::ffi::OsString;

use clap::{Parser, Subcommand};

/// Contains the commands passed to the program
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

/// A list of subcommands the program can perform
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Creates a new repository
    Init,

    /// Computes the blob object hash for a file
    HashObject {
        /// Writes the compressed object to the object store
        #[arg(short = 'w')]
        write: bool,
        /// File to hash
        file: OsString,
    },

    /// Shows the object file with the specified hash
    CatFile {
        /// Shows only the object payload, without the header
        #[arg(short = 'p')]
        pretty: bool,
        /// Hash of the object to show
        hash: String,
    },

    /// Lists the entries of a tree object
    LsTree {
        /// Shows only the entry names
        #[arg(long)]
        name_only: bool,
        /// Hash of the tree object to list
        hash: String,
    },
}
