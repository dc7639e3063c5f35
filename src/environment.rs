use tracing::{debug, trace};

use crate::{
    encoded::{Identifier, Value},
    engine::GateEngine,
    search::{equals_each, last_match, select_one_of_n},
};

/// Append-only sequence of encrypted `(identifier, value)` bindings.
///
/// Later bindings shadow earlier ones with the same identifier. Nothing can be removed or
/// updated; dropping the environment releases every binding.
pub struct Environment<E: GateEngine> {
    ids: Vec<Identifier<E>>,
    vals: Vec<Value<E>>,
}

impl<E: GateEngine> Default for Environment<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: GateEngine> Environment<E> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            ids: Vec::with_capacity(capacity),
            vals: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Appends a binding; the environment takes ownership of both ciphertexts.
    pub fn bind(&mut self, id: Identifier<E>, val: Value<E>) {
        self.ids.push(id);
        self.vals.push(val);
        debug_assert_eq!(self.ids.len(), self.vals.len());
        trace!(bindings = self.len(), "bound encrypted identifier");
    }

    /// Value of the most recent binding for `id`, or an encrypted zero if none matches.
    ///
    /// Runs in gates linear in the number of bindings, and which binding matched is never
    /// revealed.
    pub fn lookup(&self, id: Identifier<E>, ek: &E::EvalKey) -> Value<E> {
        debug!(bindings = self.len(), "oblivious lookup");

        if self.is_empty() {
            return Value::constant(0, ek);
        }

        let matches = equals_each(&id, &self.ids, ek);
        let latest = last_match::<E>(&matches, ek);
        select_one_of_n(&latest, &self.vals, ek)
    }
}
