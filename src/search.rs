//! Oblivious associative search.
//!
//! Which candidate matched is never decided in the clear: every candidate is compared,
//! and the winner is picked by multiplexing with an encrypted one-hot mask.

use crate::{
    encoded::{Identifier, Value},
    engine::GateEngine,
    VALUE_WIDTH,
};

/// One encrypted flag per candidate, set iff the candidate equals `key`.
pub fn equals_each<E: GateEngine>(
    key: &Identifier<E>,
    candidates: &[Identifier<E>],
    ek: &E::EvalKey,
) -> Vec<E::Bit> {
    candidates
        .iter()
        .map(|candidate| {
            key.bits()
                .iter()
                .zip(candidate.bits())
                .fold(E::constant(true, ek), |equal, (k, c)| {
                    E::and(&E::xnor(k, c, ek), &equal, ek)
                })
        })
        .collect()
}

/// Keeps only the highest-index set flag and clears every other one.
pub fn last_match<E: GateEngine>(flags: &[E::Bit], ek: &E::EvalKey) -> Vec<E::Bit> {
    let Some((last, rest)) = flags.split_last() else {
        return Vec::new();
    };

    let mut mask = Vec::with_capacity(flags.len());
    mask.push(E::copy(last, ek));

    // `none_later` holds iff no flag after position i is set.
    let mut none_later = E::constant(true, ek);
    for (i, flag) in rest.iter().enumerate().rev() {
        let later_unset = E::not(&flags[i + 1], ek);
        none_later = E::and(&later_unset, &none_later, ek);
        mask.push(E::and(&none_later, flag, ek));
    }

    mask.reverse();
    mask
}

/// Bitwise `OR_i (mask_i AND candidates_i)`.
///
/// With a one-hot mask this is the selected candidate; an all-zero mask gives zero.
pub fn select_one_of_n<E: GateEngine>(
    mask: &[E::Bit],
    candidates: &[Value<E>],
    ek: &E::EvalKey,
) -> Value<E> {
    debug_assert_eq!(mask.len(), candidates.len());

    let mut res: Vec<E::Bit> = (0..VALUE_WIDTH).map(|_| E::constant(false, ek)).collect();

    for (selected, candidate) in mask.iter().zip(candidates) {
        for (acc, bit) in res.iter_mut().zip(candidate.bits()) {
            let picked = E::and(selected, bit, ek);
            *acc = E::or(&picked, acc, ek);
        }
    }

    Value::from_bits(res)
}
