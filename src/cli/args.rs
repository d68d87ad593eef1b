//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueHint};

use crate::application::RenderStyle;

/// Self-balancing AVL tree: build, print, inspect and traverse
#[derive(Parser, Debug)]
#[command(name = "avltree")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Debug output, repeat for more (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub debug: u8,

    /// Extra config file layered over the global one
    #[arg(
        short,
        long,
        global = true,
        env = "AVLTREE_CONFIG",
        value_hint = ValueHint::FilePath
    )]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a tree from numbers and traverse it
    Traverse {
        /// Numbers, comma- or space-separated (e.g. "8,4,9,7,2,13,11,46")
        numbers: String,
        /// preorder, inorder, postorder or levelorder (case-insensitive)
        #[arg(short, long)]
        order: Option<String>,
    },

    /// Build a tree and print it with balance information
    Print {
        /// Numbers, comma- or space-separated
        numbers: String,
        /// Picture style (default from config)
        #[arg(short, long, value_enum)]
        style: Option<RenderStyle>,
    },

    /// Build a tree and show root, size, height, min and max
    Info {
        /// Numbers, comma- or space-separated
        numbers: String,
    },

    /// Interactive menu on stdin/stdout
    Shell,

    /// Manage settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Show effective settings
    Show,
    /// Show global config file path
    Path,
    /// Print a commented template config
    Template,
}
