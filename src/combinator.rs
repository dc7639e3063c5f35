//! Expression-tree node evaluation.
//!
//! The operator of a node is encrypted, so every branch is computed and the result is
//! picked by a one-hot multiplex over the candidates.

use tracing::debug;

use crate::{
    circuits::{ripple_carry_add, twos_complement, zero_select},
    encoded::{Identifier, Selector, Value},
    engine::GateEngine,
    environment::Environment,
    search::select_one_of_n,
};

/// Evaluates an operator node: `a + b`, `-a` or `if a == 0 then b else c`, as chosen by
/// the one-hot `op`. All inputs are consumed.
pub fn combine_tree<E: GateEngine>(
    op: Selector<E>,
    a: Value<E>,
    b: Value<E>,
    c: Value<E>,
    ek: &E::EvalKey,
) -> Value<E> {
    debug!("combining operator node");

    let candidates = [
        Value::from_bits(ripple_carry_add::<E>(a.bits(), b.bits(), ek)),
        Value::from_bits(twos_complement::<E>(a.bits(), ek)),
        Value::from_bits(zero_select::<E>(a.bits(), b.bits(), c.bits(), ek)),
    ];

    select_one_of_n(op.bits(), &candidates, ek)
}

/// Evaluates a leaf: the bitwise OR of `env(id)` and the literal `val`.
///
/// A missing identifier looks up as zero, so the result is then `val` itself. When both
/// sides carry set bits in the same position they are merged without any conflict signal.
pub fn combine_leaf<E: GateEngine>(
    env: &Environment<E>,
    id: Identifier<E>,
    val: Value<E>,
    ek: &E::EvalKey,
) -> Value<E> {
    debug!(bindings = env.len(), "combining leaf node");

    let looked_up = env.lookup(id, ek);
    let bits = looked_up
        .bits()
        .iter()
        .zip(val.bits())
        .map(|(l, v)| E::or(l, v, ek))
        .collect();

    Value::from_bits(bits)
}
