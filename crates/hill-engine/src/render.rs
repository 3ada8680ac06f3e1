//! Plain-text rendering of step traces.

use std::fmt;

use crate::step::{Step, StepKind, StepValue};

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl fmt::Display for StepValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Scalar(value) => write!(f, "{value}"),
            Self::Vector(values) => write_vector(f, values),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.description, self.kind)?;
        if let Some(input) = &self.input {
            write!(f, "\n  Input: {input}")?;
        }
        if let Some(matrix) = &self.matrix {
            f.write_str("\n  Matrix:")?;
            for line in render_matrix(matrix).lines() {
                write!(f, "\n    {line}")?;
            }
        }
        if let Some(vector) = &self.vector {
            f.write_str("\n  Vector: ")?;
            write_vector(f, vector)?;
        }
        if let Some(result) = &self.result {
            write!(f, "\n  Result: {result}")?;
        }
        Ok(())
    }
}

fn write_vector(out: &mut impl fmt::Write, values: &[i64]) -> fmt::Result {
    out.write_char('[')?;
    for (idx, value) in values.iter().enumerate() {
        if idx > 0 {
            out.write_str(", ")?;
        }
        write!(out, "{value}")?;
    }
    out.write_char(']')
}

/// Renders a matrix one bracketed row per line with right-aligned columns.
pub fn render_matrix(rows: &[Vec<i64>]) -> String {
    let width = rows
        .iter()
        .flatten()
        .map(|value| value.to_string().len())
        .max()
        .unwrap_or(1);
    rows.iter()
        .map(|row| {
            let cells: Vec<String> = row.iter().map(|value| format!("{value:>width$}")).collect();
            format!("[{}]", cells.join(" "))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Renders every step, numbered from 1, separated by blank lines.
pub fn render_trace(steps: &[Step]) -> String {
    steps
        .iter()
        .enumerate()
        .map(|(idx, step)| format!("{}. {step}", idx + 1))
        .collect::<Vec<_>>()
        .join("\n\n")
}
