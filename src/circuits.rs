//! Fixed-width integer circuits over encrypted bits.
//!
//! Every circuit evaluates the same gates whatever the operands hold.

use crate::{encoded::Value, engine::GateEngine};

/// `a + b` modulo 2^16, consuming both operands.
pub fn add<E: GateEngine>(a: Value<E>, b: Value<E>, ek: &E::EvalKey) -> Value<E> {
    Value::from_bits(ripple_carry_add::<E>(a.bits(), b.bits(), ek))
}

/// `-a` in two's complement, consuming `a`.
pub fn negate<E: GateEngine>(a: Value<E>, ek: &E::EvalKey) -> Value<E> {
    Value::from_bits(twos_complement::<E>(a.bits(), ek))
}

/// `if a == 0 then b else c`. Consumes the condition; the branches stay with the caller.
pub fn select<E: GateEngine>(
    a: Value<E>,
    b: &Value<E>,
    c: &Value<E>,
    ek: &E::EvalKey,
) -> Value<E> {
    Value::from_bits(zero_select::<E>(a.bits(), b.bits(), c.bits(), ek))
}

pub(crate) fn ripple_carry_add<E: GateEngine>(
    a: &[E::Bit],
    b: &[E::Bit],
    ek: &E::EvalKey,
) -> Vec<E::Bit> {
    let mut carry = E::constant(false, ek);

    a.iter()
        .zip(b)
        .map(|(a_i, b_i)| {
            let half = E::xor(a_i, b_i, ek);
            let propagated = E::and(&carry, &half, ek);
            let generated = E::and(a_i, b_i, ek);
            let sum = E::xor(&half, &carry, ek);
            carry = E::or(&propagated, &generated, ek);
            sum
        })
        .collect()
}

/// `-a = ~(a - 1)`: bits up to and including the lowest set bit are kept, the rest flip.
pub(crate) fn twos_complement<E: GateEngine>(a: &[E::Bit], ek: &E::EvalKey) -> Vec<E::Bit> {
    let mut seen_one = E::constant(false, ek);

    a.iter()
        .map(|a_i| {
            let bit = E::xor(a_i, &seen_one, ek);
            seen_one = E::or(a_i, &seen_one, ek);
            bit
        })
        .collect()
}

pub(crate) fn zero_select<E: GateEngine>(
    a: &[E::Bit],
    b: &[E::Bit],
    c: &[E::Bit],
    ek: &E::EvalKey,
) -> Vec<E::Bit> {
    let nonzero = a
        .iter()
        .fold(E::constant(false, ek), |flag, a_i| E::or(&flag, a_i, ek));

    c.iter()
        .zip(b)
        .map(|(c_i, b_i)| E::mux(&nonzero, c_i, b_i, ek))
        .collect()
}
