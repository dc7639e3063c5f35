use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use crate::{engine::parameters::Entropy, engine::GateEngine, Result};

/// Engine whose bits are plain booleans.
///
/// It provides no confidentiality whatsoever. Its evaluation key counts every gate it
/// evaluates, which makes it the tool of choice for checking circuit logic and for
/// verifying that circuit size never depends on the data flowing through it.
#[derive(Clone, Copy, Debug)]
pub struct Clear;

#[derive(Debug, Default)]
pub struct ClearSecretKey {
    eval: ClearEvalKey,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ClearEvalKey {
    #[serde(skip)]
    gates: AtomicU64,
}

impl ClearEvalKey {
    /// Number of gates evaluated with this key so far.
    pub fn gate_count(&self) -> u64 {
        self.gates.load(Ordering::Relaxed)
    }

    fn tick(&self) {
        self.gates.fetch_add(1, Ordering::Relaxed);
    }
}

impl GateEngine for Clear {
    type Parameters = ();
    type SecretKey = ClearSecretKey;
    type EvalKey = ClearEvalKey;
    type Bit = bool;

    fn param_gen(_minimum_lambda: u32) -> Result<()> {
        Ok(())
    }

    fn key_gen(_params: &(), _entropy: Entropy) -> ClearSecretKey {
        ClearSecretKey::default()
    }

    fn eval_key(secret_key: &ClearSecretKey) -> &ClearEvalKey {
        &secret_key.eval
    }

    fn encrypt(bit: bool, _secret_key: &ClearSecretKey) -> bool {
        bit
    }

    fn decrypt(bit: &bool, _secret_key: &ClearSecretKey) -> bool {
        *bit
    }

    fn constant(value: bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        value
    }

    fn copy(a: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        *a
    }

    fn not(a: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        !a
    }

    fn and(a: &bool, b: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        *a && *b
    }

    fn or(a: &bool, b: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        *a || *b
    }

    fn xor(a: &bool, b: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        a ^ b
    }

    fn xnor(a: &bool, b: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        a == b
    }

    fn mux(condition: &bool, then: &bool, otherwise: &bool, ek: &ClearEvalKey) -> bool {
        ek.tick();
        if *condition {
            *then
        } else {
            *otherwise
        }
    }
}
