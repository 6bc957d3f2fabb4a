//! Letter-wise line sorter.
//!
//! Reads a text file, keeps the lines that contain at least one letter, and
//! writes them out in two orderings: left-to-right by letters only, and
//! right-to-left under the same rule. The backward ordering groups lines by
//! their endings, which is what a rhyming dictionary wants.
//!
//! The sorting core is generic: [`tree_sort::tree_sort`] orders any slice of
//! records through an injected [`tree_sort::RecordOrder`] strategy, and the
//! two line orderings are just two strategies over the same line views.

#![deny(unsafe_op_in_unsafe_fn)]
#![warn(clippy::all)]

pub mod alphabet;
pub mod compare;
pub mod config;
pub mod error;
pub mod output;
pub mod text;
pub mod tree_sort;

// Re-export commonly used types
pub use compare::{BackwardLineOrder, Direction, ForwardLineOrder};
pub use config::{Config, DirectionMode};
pub use error::{SortError, SortResult};
pub use text::{Line, SourceText};
pub use tree_sort::{tree_sort, RecordOrder};

use std::path::Path;

/// Exit codes matching the GNU sort convention
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const SORT_FAILURE: i32 = 2;

/// Runs the configured sort passes and writes the outputs.
///
/// The same line array is reused across both passes: the forward pass sorts
/// and writes, then the backward pass re-sorts the same storage. Returns
/// [`EXIT_SUCCESS`] on success.
pub fn run(config: &Config) -> SortResult<i32> {
    config.validate()?;

    let text = SourceText::open(Path::new(&config.input))?;
    if text.is_empty() {
        return Err(SortError::empty_input(&config.input));
    }

    let mut lines = text.lines();
    if lines.is_empty() {
        return Err(SortError::no_letter_lines(&config.input));
    }

    if config.direction.runs_forward() {
        tree_sort(&mut lines, &ForwardLineOrder);
        output::write_lines(Path::new(&config.forward_output), &lines)?;
    }

    if config.direction.runs_backward() {
        tree_sort(&mut lines, &BackwardLineOrder);
        output::write_lines(Path::new(&config.backward_output), &lines)?;
    }

    if let Some(original) = &config.original_output {
        output::write_original(Path::new(original), &text)?;
    }

    Ok(EXIT_SUCCESS)
}
