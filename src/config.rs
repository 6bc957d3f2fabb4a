//! Configuration management for sort runs.

use crate::error::{SortError, SortResult};
use std::str::FromStr;

/// Which sort passes to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DirectionMode {
    /// Left-to-right pass only.
    Forward,
    /// Right-to-left pass only.
    Backward,
    /// Both passes, forward first.
    #[default]
    Both,
}

impl DirectionMode {
    pub fn runs_forward(&self) -> bool {
        matches!(self, DirectionMode::Forward | DirectionMode::Both)
    }

    pub fn runs_backward(&self) -> bool {
        matches!(self, DirectionMode::Backward | DirectionMode::Both)
    }
}

impl FromStr for DirectionMode {
    type Err = SortError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "forward" | "left" => Ok(DirectionMode::Forward),
            "backward" | "right" | "rhyme" => Ok(DirectionMode::Backward),
            "both" => Ok(DirectionMode::Both),
            _ => Err(SortError::parse_error(&format!("unknown direction: {s}"))),
        }
    }
}

impl std::fmt::Display for DirectionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            DirectionMode::Forward => "forward",
            DirectionMode::Backward => "backward",
            DirectionMode::Both => "both",
        };
        write!(f, "{name}")
    }
}

/// Main configuration structure for a sort run.
#[derive(Debug, Clone)]
pub struct Config {
    /// Input file path.
    pub input: String,
    /// Output path for the left-to-right ordering.
    pub forward_output: String,
    /// Output path for the right-to-left ordering.
    pub backward_output: String,
    /// Optional path for a verbatim copy of the input text.
    pub original_output: Option<String>,
    /// Which passes to run.
    pub direction: DirectionMode,
}

impl Config {
    pub const DEFAULT_FORWARD_OUTPUT: &'static str = "sorted_forward.txt";
    pub const DEFAULT_BACKWARD_OUTPUT: &'static str = "sorted_backward.txt";

    /// Create a configuration with default output paths.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.to_string(),
            forward_output: Self::DEFAULT_FORWARD_OUTPUT.to_string(),
            backward_output: Self::DEFAULT_BACKWARD_OUTPUT.to_string(),
            original_output: None,
            direction: DirectionMode::default(),
        }
    }

    /// Set the forward output path
    pub fn with_forward_output(mut self, path: &str) -> Self {
        self.forward_output = path.to_string();
        self
    }

    /// Set the backward output path
    pub fn with_backward_output(mut self, path: &str) -> Self {
        self.backward_output = path.to_string();
        self
    }

    /// Also write a verbatim copy of the original text
    pub fn with_original_output(mut self, path: Option<String>) -> Self {
        self.original_output = path;
        self
    }

    /// Select which passes to run
    pub fn with_direction(mut self, direction: DirectionMode) -> Self {
        self.direction = direction;
        self
    }

    /// Validate configuration for consistency
    pub fn validate(&self) -> SortResult<()> {
        if self.input.is_empty() {
            return Err(SortError::conflicting_options("input path is empty"));
        }

        if self.direction == DirectionMode::Both && self.forward_output == self.backward_output {
            return Err(SortError::conflicting_options(
                "forward and backward outputs are the same file",
            ));
        }

        let mut outputs: Vec<&str> = Vec::new();
        if self.direction.runs_forward() {
            outputs.push(&self.forward_output);
        }
        if self.direction.runs_backward() {
            outputs.push(&self.backward_output);
        }
        if let Some(orig) = &self.original_output {
            outputs.push(orig);
        }
        for out in outputs {
            if out == self.input {
                return Err(SortError::conflicting_options(&format!(
                    "output {out} would overwrite the input"
                )));
            }
        }

        Ok(())
    }
}
