//! The encrypt/decrypt pipeline: validate, invert (decrypt), clean, pad (encrypt), convert,
//! transform each block, re-letter.

use hill_core::{
    clean, letters_to_numbers, numbers_to_letters, pad, validate_matrix, validated_key, HillError,
    KeyMatrix, ValidationResult,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::step::{Step, StepKind, Trace};
use crate::traced::{matrix_inverse, matrix_vector_multiply};

/// Which way a text goes through the key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    /// Plaintext to ciphertext with the key itself.
    Encrypt,
    /// Ciphertext to plaintext with the inverse key.
    Decrypt,
}

impl Direction {
    fn block_description(self, index: usize) -> String {
        match self {
            Self::Encrypt => format!("Processing block {index}"),
            Self::Decrypt => format!("Decrypting block {index}"),
        }
    }
}

/// Engine settings.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Letter appended to complete the last plaintext block.
    pub pad_letter: char,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self { pad_letter: 'X' }
    }
}

impl EngineConfig {
    /// Rejects pad letters outside `A-Z`.
    pub fn validate(&self) -> Result<(), HillError> {
        if self.pad_letter.is_ascii_uppercase() {
            Ok(())
        } else {
            Err(HillError::InvalidPadLetter(self.pad_letter))
        }
    }
}

/// Result text and step trace of one cipher call.
///
/// A failed call has an empty `result` and ends with an [`StepKind::Error`] step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// Output letters, empty on failure.
    pub result: String,
    /// Ordered stages of the call.
    pub steps: Vec<Step>,
}

impl Outcome {
    /// Returns true when the call produced output.
    pub fn is_success(&self) -> bool {
        !self.result.is_empty()
            && self.steps.last().map(|step| step.kind) == Some(StepKind::Final)
    }

    /// The terminal error step, if the call failed.
    pub fn failure(&self) -> Option<&Step> {
        self.steps.last().filter(|step| step.kind == StepKind::Error)
    }
}

/// Stateless Hill cipher engine.
///
/// Holds only configuration; each call owns its trace, so a shared engine is safe to use
/// from several threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct CipherEngine {
    config: EngineConfig,
}

impl CipherEngine {
    /// Creates an engine with the default configuration (`X` padding).
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with explicit configuration.
    pub fn with_config(config: EngineConfig) -> Result<Self, HillError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Active configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Validates a key without running a cipher operation.
    pub fn validate_matrix(&self, rows: &[Vec<i64>]) -> ValidationResult {
        validate_matrix(rows)
    }

    /// Encrypts `text` with the key given as `rows`.
    pub fn encrypt(&self, text: &str, rows: &[Vec<i64>]) -> Outcome {
        self.process(Direction::Encrypt, text, rows)
    }

    /// Decrypts `text` with the inverse of the key given as `rows`.
    ///
    /// Ciphertext whose length is not a multiple of the block size is not padded; the short
    /// final block is multiplied with its missing components treated as zero.
    pub fn decrypt(&self, text: &str, rows: &[Vec<i64>]) -> Outcome {
        self.process(Direction::Decrypt, text, rows)
    }

    /// Runs the pipeline in the requested direction.
    pub fn process(&self, direction: Direction, text: &str, rows: &[Vec<i64>]) -> Outcome {
        let mut trace = Trace::new();
        let result = match self.run(direction, text, rows, &mut trace) {
            Ok(result) => result,
            Err(err) => {
                debug!(?direction, %err, "cipher call failed");
                String::new()
            }
        };
        Outcome {
            result,
            steps: trace.into_steps(),
        }
    }

    fn run(
        &self,
        direction: Direction,
        text: &str,
        rows: &[Vec<i64>],
        trace: &mut Trace,
    ) -> Result<String, HillError> {
        let key = validated_key(rows).map_err(|err| {
            trace.push(
                Step::new(StepKind::Error, "Matrix validation failed").with_result(err.to_string()),
            );
            err
        })?;
        let size = key.size();

        let transform_key: KeyMatrix = match direction {
            Direction::Encrypt => key,
            Direction::Decrypt => matrix_inverse(&key, trace)?,
        };

        let cleaned = clean(text);
        trace.push(
            Step::new(StepKind::Clean, "Cleaned text (A-Z only)")
                .with_input(text)
                .with_result(cleaned.clone()),
        );
        if cleaned.is_empty() {
            trace.push(Step::new(StepKind::Error, "No valid characters found"));
            return Err(HillError::NoValidCharacters);
        }

        let prepared = match direction {
            Direction::Encrypt => {
                let padded = pad(&cleaned, size, self.config.pad_letter);
                if padded != cleaned {
                    debug!(added = padded.len() - cleaned.len(), "padded plaintext");
                    trace.push(
                        Step::new(
                            StepKind::Padding,
                            format!("Padding added to complete blocks of {size}"),
                        )
                        .with_input(cleaned.as_str())
                        .with_result(padded.clone()),
                    );
                }
                padded
            }
            Direction::Decrypt => {
                if cleaned.len() % size != 0 {
                    warn!(
                        len = cleaned.len(),
                        size, "ciphertext length is not a multiple of the block size"
                    );
                }
                cleaned
            }
        };

        let numbers = letters_to_numbers(&prepared);
        trace.push(
            Step::new(
                StepKind::Convert,
                "Letters to numbers (A=0, B=1, ..., Z=25)",
            )
            .with_input(prepared.as_str())
            .with_vector(numbers.clone()),
        );

        debug!(?direction, blocks = numbers.len().div_ceil(size), size, "transforming blocks");
        let mut output = Vec::with_capacity(numbers.len() + size);
        for (index, block) in numbers.chunks(size).enumerate() {
            trace.push(
                Step::new(StepKind::Block, direction.block_description(index + 1))
                    .with_vector(block.to_vec()),
            );
            output.extend(matrix_vector_multiply(&transform_key, block, trace));
        }

        let result = numbers_to_letters(&output);
        trace.push(
            Step::new(StepKind::Final, "Numbers to final letters")
                .with_vector(output)
                .with_result(result.clone()),
        );
        Ok(result)
    }
}
