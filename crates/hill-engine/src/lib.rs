//! Hill cipher encryption and decryption with a step-by-step arithmetic trace.
//!
//! Every call to [`CipherEngine::encrypt`] or [`CipherEngine::decrypt`] returns an
//! [`Outcome`] holding the result text and the ordered [`Step`]s taken to produce it.
//! The trace is built per call, so one engine can serve any number of threads.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod keygen;
mod render;
mod step;
mod traced;

pub use crate::engine::{CipherEngine, Direction, EngineConfig, Outcome};
pub use crate::keygen::KeyGenerator;
pub use crate::render::{render_matrix, render_trace};
pub use crate::step::{Step, StepKind, StepValue, Trace};
pub use crate::traced::{matrix_inverse, matrix_vector_multiply};

pub use hill_core::{
    clean, example_rows, pad, parse_rows, validate_matrix, HillError, KeyMatrix, Rows,
    ValidationResult,
};
