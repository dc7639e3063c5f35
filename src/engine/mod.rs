pub mod boolean;
pub mod clear;
pub mod parameters;

use serde::{de::DeserializeOwned, Serialize};

use crate::{engine::parameters::Entropy, Result};

/// A homomorphic backend able to evaluate single-bit gates.
///
/// Every gate takes the evaluation key and borrowed bits and returns a fresh bit. Engines
/// that bootstrap do so inside each gate, so circuits built on top never track noise.
pub trait GateEngine: Sized + 'static {
    type Parameters;
    type SecretKey;
    /// Derived from the secret key; sufficient to evaluate gates, useless for decryption.
    type EvalKey: Serialize + DeserializeOwned;
    type Bit: Send + Sync + Serialize + DeserializeOwned;

    /// Picks a parameter set reaching at least `minimum_lambda` bits of security.
    fn param_gen(minimum_lambda: u32) -> Result<Self::Parameters>;

    /// Generates a fresh secret key, with its evaluation key, for one session.
    ///
    /// `entropy` seeds the key material only. Encryptions under the returned key draw fresh
    /// system randomness even for a seeded session. Engines that keep generator state do so
    /// per thread, and that state is back on system entropy once this returns.
    fn key_gen(params: &Self::Parameters, entropy: Entropy) -> Self::SecretKey;

    /// Borrows the evaluation key held inside a secret key.
    fn eval_key(secret_key: &Self::SecretKey) -> &Self::EvalKey;

    fn encrypt(bit: bool, secret_key: &Self::SecretKey) -> Self::Bit;

    fn decrypt(bit: &Self::Bit, secret_key: &Self::SecretKey) -> bool;

    /// Trivial encryption of a public constant.
    fn constant(value: bool, ek: &Self::EvalKey) -> Self::Bit;

    fn copy(a: &Self::Bit, ek: &Self::EvalKey) -> Self::Bit;

    fn not(a: &Self::Bit, ek: &Self::EvalKey) -> Self::Bit;

    fn and(a: &Self::Bit, b: &Self::Bit, ek: &Self::EvalKey) -> Self::Bit;

    fn or(a: &Self::Bit, b: &Self::Bit, ek: &Self::EvalKey) -> Self::Bit;

    fn xor(a: &Self::Bit, b: &Self::Bit, ek: &Self::EvalKey) -> Self::Bit;

    fn xnor(a: &Self::Bit, b: &Self::Bit, ek: &Self::EvalKey) -> Self::Bit;

    /// `if condition { then } else { otherwise }`, evaluated without branching.
    fn mux(
        condition: &Self::Bit,
        then: &Self::Bit,
        otherwise: &Self::Bit,
        ek: &Self::EvalKey,
    ) -> Self::Bit;
}
