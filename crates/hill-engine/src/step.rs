//! Trace records describing each arithmetic stage of a cipher call.

use hill_core::Rows;
use serde::{Deserialize, Serialize};

/// Closed set of stage tags carried by a [`Step`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepKind {
    /// Input uppercased and stripped to `A-Z`.
    Clean,
    /// Trailing pad letters appended.
    Padding,
    /// Letters converted to codes.
    Convert,
    /// Start of one block.
    Block,
    /// Matrix × vector product.
    Multiply,
    /// Determinant of the key.
    Determinant,
    /// Modular inverse of the determinant.
    ModInverse,
    /// Adjugate of the key.
    Adjugate,
    /// Cofactor matrix of a 3×3 key.
    Cofactors,
    /// Inverse key.
    Inverse,
    /// Codes converted back to letters.
    Final,
    /// Terminal failure.
    Error,
}

impl StepKind {
    /// Wire name of the tag, e.g. `mod_inverse`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Clean => "clean",
            Self::Padding => "padding",
            Self::Convert => "convert",
            Self::Block => "block",
            Self::Multiply => "multiply",
            Self::Determinant => "determinant",
            Self::ModInverse => "mod_inverse",
            Self::Adjugate => "adjugate",
            Self::Cofactors => "cofactors",
            Self::Inverse => "inverse",
            Self::Final => "final",
            Self::Error => "error",
        }
    }
}

/// Result payload of a step: text, a single number, or a vector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum StepValue {
    /// Text such as a cleaned message or an error explanation.
    Text(String),
    /// Single number such as a determinant.
    Scalar(i64),
    /// Letter codes or product components.
    Vector(Vec<i64>),
}

impl From<String> for StepValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&str> for StepValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<i64> for StepValue {
    fn from(value: i64) -> Self {
        Self::Scalar(value)
    }
}

impl From<Vec<i64>> for StepValue {
    fn from(value: Vec<i64>) -> Self {
        Self::Vector(value)
    }
}

/// One immutable trace record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Step {
    /// Stage tag.
    #[serde(rename = "stepType")]
    pub kind: StepKind,
    /// Human-readable summary.
    pub description: String,
    /// Input of the stage, when meaningful.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub input: Option<String>,
    /// Matrix involved in the stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matrix: Option<Rows>,
    /// Vector involved in the stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector: Option<Vec<i64>>,
    /// Output of the stage.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<StepValue>,
}

impl Step {
    /// Creates a step with no payload.
    pub fn new(kind: StepKind, description: impl Into<String>) -> Self {
        Self {
            kind,
            description: description.into(),
            input: None,
            matrix: None,
            vector: None,
            result: None,
        }
    }

    /// Attaches the stage input.
    pub fn with_input(mut self, input: impl Into<String>) -> Self {
        self.input = Some(input.into());
        self
    }

    /// Attaches a matrix.
    pub fn with_matrix(mut self, matrix: Rows) -> Self {
        self.matrix = Some(matrix);
        self
    }

    /// Attaches a vector.
    pub fn with_vector(mut self, vector: Vec<i64>) -> Self {
        self.vector = Some(vector);
        self
    }

    /// Attaches the stage result.
    pub fn with_result(mut self, result: impl Into<StepValue>) -> Self {
        self.result = Some(result.into());
        self
    }
}

/// Append-only step log owned by a single cipher call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Trace {
    steps: Vec<Step>,
}

impl Trace {
    /// Creates an empty trace.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a step.
    pub fn push(&mut self, step: Step) {
        self.steps.push(step);
    }

    /// Steps recorded so far.
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Most recent step.
    pub fn last(&self) -> Option<&Step> {
        self.steps.last()
    }

    /// Number of recorded steps.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Returns true when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Consumes the trace, yielding the ordered steps.
    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_names_match_serde() {
        for kind in [
            StepKind::Clean,
            StepKind::Padding,
            StepKind::Convert,
            StepKind::Block,
            StepKind::Multiply,
            StepKind::Determinant,
            StepKind::ModInverse,
            StepKind::Adjugate,
            StepKind::Cofactors,
            StepKind::Inverse,
            StepKind::Final,
            StepKind::Error,
        ] {
            let json = serde_json::to_string(&kind).expect("serialize");
            assert_eq!(json, format!("\"{}\"", kind.as_str()));
        }
    }

    #[test]
    fn step_serializes_only_present_fields() {
        let step = Step::new(StepKind::Determinant, "det")
            .with_matrix(vec![vec![3, 2], vec![5, 7]])
            .with_result(11);
        let json = serde_json::to_value(&step).expect("serialize");
        assert_eq!(
            json,
            serde_json::json!({
                "stepType": "determinant",
                "description": "det",
                "matrix": [[3, 2], [5, 7]],
                "result": 11
            })
        );
        let back: Step = serde_json::from_value(json).expect("deserialize");
        assert_eq!(back, step);
    }

    #[test]
    fn step_value_variants_deserialize_untagged() {
        let text: StepValue = serde_json::from_str("\"POH\"").expect("text");
        let scalar: StepValue = serde_json::from_str("25").expect("scalar");
        let vector: StepValue = serde_json::from_str("[15,14,7]").expect("vector");
        assert_eq!(text, StepValue::from("POH"));
        assert_eq!(scalar, StepValue::Scalar(25));
        assert_eq!(vector, StepValue::Vector(vec![15, 14, 7]));
    }

    #[test]
    fn trace_is_append_only_in_order() {
        let mut trace = Trace::new();
        assert!(trace.is_empty());
        trace.push(Step::new(StepKind::Clean, "a"));
        trace.push(Step::new(StepKind::Final, "b"));
        assert_eq!(trace.len(), 2);
        assert_eq!(trace.last().map(|s| s.kind), Some(StepKind::Final));
        let kinds: Vec<_> = trace.into_steps().into_iter().map(|s| s.kind).collect();
        assert_eq!(kinds, vec![StepKind::Clean, StepKind::Final]);
    }
}
