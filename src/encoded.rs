use std::fmt;

use crate::{engine::GateEngine, Error, ID_WIDTH, OP_WIDTH, VALUE_WIDTH};

/// A fixed-width sequence of encrypted bits, least significant bit first.
///
/// Neither `Clone` nor `Copy`. Operations that combine encoded values take them by value,
/// so a consumed operand cannot be used again.
pub struct Encoded<E: GateEngine, const W: usize> {
    bits: Vec<E::Bit>,
}

/// 16-bit two's complement program value.
pub type Value<E> = Encoded<E, VALUE_WIDTH>;
/// 4-bit program identifier.
pub type Identifier<E> = Encoded<E, ID_WIDTH>;
/// 3-bit one-hot operator selector.
pub type Selector<E> = Encoded<E, OP_WIDTH>;

impl<E: GateEngine, const W: usize> Encoded<E, W> {
    pub const WIDTH: usize = W;

    pub(crate) fn from_bits(bits: Vec<E::Bit>) -> Self {
        debug_assert_eq!(bits.len(), W);
        Self { bits }
    }

    /// Encrypts the `W` low bits of `ptxt`; bit `i` is `(ptxt >> i) & 1`.
    pub fn encrypt(ptxt: i64, secret_key: &E::SecretKey) -> Self {
        let bits = (0..W)
            .map(|i| E::encrypt((ptxt >> i) & 1 == 1, secret_key))
            .collect();
        Self { bits }
    }

    /// Decrypts and releases the ciphertext.
    pub fn decrypt(self, secret_key: &E::SecretKey) -> u64 {
        self.bits
            .iter()
            .enumerate()
            .fold(0, |acc, (i, bit)| acc | (u64::from(E::decrypt(bit, secret_key)) << i))
    }

    /// Trivial encryption of a public constant, computable with the evaluation key alone.
    pub fn constant(value: i64, ek: &E::EvalKey) -> Self {
        let bits = (0..W)
            .map(|i| E::constant((value >> i) & 1 == 1, ek))
            .collect();
        Self { bits }
    }

    pub fn bits(&self) -> &[E::Bit] {
        &self.bits
    }
}

impl<E: GateEngine, const W: usize> fmt::Debug for Encoded<E, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Encoded<{}>(..)", W)
    }
}

/// Operators an expression node can carry, numbered by their one-hot shift.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `a + b`
    Add = 0,
    /// `-a`
    Neg = 1,
    /// `if a == 0 then b else c`
    If = 2,
}

impl Operator {
    pub const ALL: [Self; OP_WIDTH] = [Self::Add, Self::Neg, Self::If];

    pub fn shift(self) -> u8 {
        self as u8
    }

    /// The one-hot pattern `1 << shift`.
    pub fn one_hot(self) -> i64 {
        1 << self.shift()
    }
}

impl TryFrom<u8> for Operator {
    type Error = Error;

    fn try_from(shift: u8) -> Result<Self, Error> {
        Self::ALL
            .into_iter()
            .find(|op| op.shift() == shift)
            .ok_or(Error::UnknownOperator(shift))
    }
}
