//! Byte encoding for handing ciphertexts and evaluation keys to an evaluator.

use crate::{encoded::Encoded, engine::GateEngine, Error, Result};

impl<E: GateEngine, const W: usize> Encoded<E, W> {
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(bincode::serialize(self.bits())?)
    }

    /// Fails unless the bytes hold exactly `W` encrypted bits.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let bits: Vec<E::Bit> = bincode::deserialize(bytes)?;
        if bits.len() != W {
            return Err(Error::WidthMismatch {
                expected: W,
                found: bits.len(),
            });
        }
        Ok(Self::from_bits(bits))
    }
}

pub fn eval_key_to_bytes<E: GateEngine>(ek: &E::EvalKey) -> Result<Vec<u8>> {
    Ok(bincode::serialize(ek)?)
}

pub fn eval_key_from_bytes<E: GateEngine>(bytes: &[u8]) -> Result<E::EvalKey> {
    Ok(bincode::deserialize(bytes)?)
}
