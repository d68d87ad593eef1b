//! Application layer: use cases around the tree
//!
//! Input parsing, rendering, summaries and the interactive shell. Everything
//! here produces data or writes to caller-supplied writers.

pub mod error;
pub mod error_ext;
pub mod input;
pub mod render;
pub mod report;
pub mod shell;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use input::{parse_numbers, parse_order_choice, ParsedNumbers};
pub use render::{balance_report, render, BalanceLine, RenderStyle, TreeNodeConvert};
pub use report::{build_and_traverse, format_traversal, Traversal, TreeInfo};
pub use shell::{Shell, ShellOptions};
