//! Line-oriented interactive menu over an AVL tree.
//!
//! Generic over reader and writer so it runs on stdin/stdout in the binary
//! and on in-memory buffers in tests. End of input ends the session.

use std::fmt::Display;
use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::error_ext::IoResultExt;
use crate::application::input::{parse_numbers, parse_order_choice};
use crate::application::render::{balance_report, render, RenderStyle};
use crate::application::report::{build_and_traverse, format_traversal, TreeInfo};
use crate::application::ApplicationResult;
use crate::domain::{collect, AvlTree, TraversalOrder};

/// Knobs the shell takes from settings.
#[derive(Debug, Clone, Copy)]
pub struct ShellOptions {
    pub allow_negative: bool,
    /// Render the tree after every insertion
    pub show_steps: bool,
    pub style: RenderStyle,
}

impl Default for ShellOptions {
    fn default() -> Self {
        Self {
            allow_negative: false,
            show_steps: true,
            style: RenderStyle::Ascii,
        }
    }
}

pub struct Shell<R, W> {
    input: R,
    output: W,
    tree: AvlTree,
    options: ShellOptions,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, options: ShellOptions) -> Self {
        Self {
            input,
            output,
            tree: AvlTree::new(),
            options,
        }
    }

    pub fn tree(&self) -> &AvlTree {
        &self.tree
    }

    pub fn into_parts(self) -> (AvlTree, W) {
        (self.tree, self.output)
    }

    #[instrument(level = "debug", skip(self))]
    pub fn run(&mut self) -> ApplicationResult<()> {
        self.say("=========================================")?;
        self.say("      AVL TREE SHELL")?;
        self.say("=========================================")?;

        loop {
            self.print_menu()?;
            let Some(choice) = self.read_line()? else {
                debug!("input closed");
                break;
            };
            match choice.as_str() {
                "1" => self.add_numbers()?,
                "2" => self.build_and_traverse()?,
                "3" => self.print_tree()?,
                "4" => self.traverse_tree()?,
                "5" => self.tree_info()?,
                "6" => self.clear_tree()?,
                "7" => {
                    self.say("Goodbye.")?;
                    break;
                }
                other => {
                    debug!(choice = other, "invalid menu choice");
                    self.say("Invalid choice! Please enter a number between 1 and 7.")?;
                }
            }
        }
        Ok(())
    }

    fn print_menu(&mut self) -> ApplicationResult<()> {
        self.say("")?;
        self.say("=== MAIN MENU ===")?;
        self.say("1. Add Numbers Manually")?;
        self.say("2. Build Tree and Traverse (Numbers + Order)")?;
        self.say("3. Print AVL Tree Structure")?;
        self.say("4. Perform Tree Traversal")?;
        self.say("5. Display Tree Information")?;
        self.say("6. Clear Tree")?;
        self.say("7. Exit")?;
        self.prompt("Enter your choice (1-7):")
    }

    fn add_numbers(&mut self) -> ApplicationResult<()> {
        self.say("")?;
        self.say("=== ADD NUMBERS MANUALLY ===")?;
        self.say("Enter numbers one by one. Type 'done' to finish.")?;

        let mut added = 0usize;
        let mut rejected = 0usize;
        loop {
            self.prompt("Enter a number (or 'done' to finish):")?;
            let Some(line) = self.read_line()? else { break };
            if line.eq_ignore_ascii_case("done") {
                break;
            }
            match line.parse::<i32>() {
                Ok(value) if self.tree.contains(value) => {
                    self.say(format!("Number {} already exists in the tree. Skipping...", value))?;
                    rejected += 1;
                }
                Ok(value) => {
                    self.say(format!("--- Inserting {} ---", value))?;
                    self.tree.insert(value);
                    added += 1;
                    if self.options.show_steps {
                        let picture = render(self.tree.root(), self.options.style);
                        self.write_raw(&picture)?;
                    }
                }
                Err(_) => self.say("Invalid input! Please enter a valid integer or 'done'.")?,
            }
        }

        self.say(format!("Numbers successfully added: {}", added))?;
        self.say(format!("Numbers rejected (duplicates): {}", rejected))
    }

    fn build_and_traverse(&mut self) -> ApplicationResult<()> {
        self.say("")?;
        self.say("=== BUILD AND TRAVERSE ===")?;
        self.say("Enter numbers comma- or space-separated, e.g. 8,4,9,7,2,13,11,46")?;
        self.prompt("Enter numbers:")?;
        let Some(line) = self.read_line()? else {
            return Ok(());
        };

        let parsed = parse_numbers(&line, self.options.allow_negative);
        if !parsed.invalid.is_empty() {
            self.say(format!("Ignored (not numbers): {:?}", parsed.invalid))?;
        }
        if !parsed.negative.is_empty() {
            self.say(format!("Rejected (negative numbers): {:?}", parsed.negative))?;
        }
        if !parsed.duplicates.is_empty() {
            self.say(format!("Duplicate numbers removed: {:?}", parsed.duplicates))?;
        }
        if parsed.is_empty() {
            return self.say("No valid numbers provided. Operation cancelled.");
        }
        self.say(format!("Valid numbers accepted: {:?}", parsed.accepted))?;

        let Some(order) = self.read_order()? else {
            return Ok(());
        };

        let ShellOptions { show_steps, style, .. } = self.options;
        let mut steps = Vec::new();
        let traversal = build_and_traverse(&parsed.accepted, Some(order.name()), |value, tree| {
            if show_steps {
                steps.push(format!("--- Inserting {} ---\n{}", value, render(tree.root(), style)));
            }
        })?;
        for step in steps {
            self.write_raw(&step)?;
        }
        self.say("=== Final AVL Tree ===")?;
        self.write_raw(&render(traversal.tree.root(), style))?;
        self.say(format_traversal(&traversal.values, traversal.order.name()))
    }

    fn print_tree(&mut self) -> ApplicationResult<()> {
        self.say("")?;
        self.say("=== AVL TREE STRUCTURE ===")?;
        if self.tree.is_empty() {
            return self.say("The tree is empty. Please add some numbers first.");
        }
        let picture = render(self.tree.root(), self.options.style);
        self.write_raw(&picture)?;
        self.say("=== Balance Information ===")?;
        for line in balance_report(self.tree.root()) {
            self.say(line)?;
        }
        Ok(())
    }

    fn traverse_tree(&mut self) -> ApplicationResult<()> {
        if self.tree.is_empty() {
            return self.say("The tree is empty. Please add some numbers first.");
        }
        let Some(order) = self.read_order()? else {
            return Ok(());
        };
        let values = collect(self.tree.root(), order);
        self.say(format!("=== {} TRAVERSAL ===", order.name().to_uppercase()))?;
        self.say(format_traversal(&values, order.name()))
    }

    fn tree_info(&mut self) -> ApplicationResult<()> {
        self.say("")?;
        self.say("=== TREE INFORMATION ===")?;
        match TreeInfo::from_tree(&self.tree) {
            Some(info) => self.say(info),
            None => self.say("The tree is empty."),
        }
    }

    fn clear_tree(&mut self) -> ApplicationResult<()> {
        self.prompt("Are you sure you want to clear the tree? (yes/no):")?;
        let answer = self.read_line()?.unwrap_or_default();
        if answer.eq_ignore_ascii_case("yes") || answer.eq_ignore_ascii_case("y") {
            self.tree.clear();
            self.say("Tree cleared successfully!")
        } else {
            self.say("Clear operation cancelled.")
        }
    }

    /// Prompts until a valid order is given; `None` on end of input.
    fn read_order(&mut self) -> ApplicationResult<Option<TraversalOrder>> {
        self.say("1. preorder   (Root, Left, Right)")?;
        self.say("2. inorder    (Left, Root, Right) - sorted order")?;
        self.say("3. postorder  (Left, Right, Root)")?;
        self.say("4. levelorder (Breadth-first)")?;
        loop {
            self.prompt("Enter your choice (1-4 or the order name):")?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_order_choice(&line) {
                Ok(order) => return Ok(Some(order)),
                Err(e) => self.say(e)?,
            }
        }
    }

    /// Next trimmed line, `None` at end of input.
    fn read_line(&mut self) -> ApplicationResult<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .with_context("read shell input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn say(&mut self, msg: impl Display) -> ApplicationResult<()> {
        writeln!(self.output, "{}", msg).with_context("write shell output")
    }

    fn write_raw(&mut self, text: &str) -> ApplicationResult<()> {
        self.output
            .write_all(text.as_bytes())
            .with_context("write shell output")
    }

    fn prompt(&mut self, msg: &str) -> ApplicationResult<()> {
        write!(self.output, "{} ", msg).with_context("write shell output")?;
        self.output.flush().with_context("flush shell output")
    }
}
