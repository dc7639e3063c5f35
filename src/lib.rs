#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

//! Oblivious evaluation of expression trees over gate-bootstrapped ciphertexts.
//!
//! A [`Client`] encrypts values, identifiers and operator selectors. An evaluator holding
//! only the evaluation key combines them with [`combine_tree`] and [`combine_leaf`],
//! looking variables up in an encrypted [`Environment`], without learning the values,
//! the identifiers, or which operator a node applies.

pub mod circuits;
mod client;
mod combinator;
mod encoded;
pub mod engine;
mod environment;
mod error;
pub mod search;
pub mod wire;

/// Bits in a program value.
pub const VALUE_WIDTH: usize = 16;
/// Bits in an identifier.
pub const ID_WIDTH: usize = 4;
/// Bits in a one-hot operator selector.
pub const OP_WIDTH: usize = 3;

pub use circuits::{add, negate, select};
pub use client::Client;
pub use combinator::{combine_leaf, combine_tree};
pub use encoded::{Encoded, Identifier, Operator, Selector, Value};
pub use engine::{
    boolean::Boolean,
    clear::Clear,
    parameters::{Entropy, SessionConfig},
    GateEngine,
};
pub use environment::Environment;
pub use error::{Error, Result};
pub use search::{equals_each, last_match, select_one_of_n};
