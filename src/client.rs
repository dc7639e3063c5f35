use crate::{
    encoded::{Identifier, Operator, Selector, Value},
    engine::{parameters::SessionConfig, GateEngine},
    Result,
};

/// The key holder of a session: encodes inputs and decodes results.
///
/// Evaluation needs only [`Client::eval_key`]; the secret key never leaves this struct.
/// Dropping the client releases its keys and parameters.
pub struct Client<E: GateEngine> {
    params: E::Parameters,
    secret_key: E::SecretKey,
}

impl<E: GateEngine> Client<E> {
    /// Generates parameters and keys as configured.
    pub fn new(config: &SessionConfig) -> Result<Self> {
        let params = E::param_gen(config.minimum_lambda)?;
        let secret_key = E::key_gen(&params, config.entropy);
        Ok(Self { params, secret_key })
    }

    pub fn parameters(&self) -> &E::Parameters {
        &self.params
    }

    pub fn eval_key(&self) -> &E::EvalKey {
        E::eval_key(&self.secret_key)
    }

    pub fn encode_value(&self, value: i32) -> Value<E> {
        Value::encrypt(i64::from(value), &self.secret_key)
    }

    pub fn encode_id(&self, id: u8) -> Identifier<E> {
        Identifier::encrypt(i64::from(id), &self.secret_key)
    }

    pub fn encode_op(&self, op: Operator) -> Selector<E> {
        Selector::encrypt(op.one_hot(), &self.secret_key)
    }

    /// The value modulo 2^16.
    pub fn decode_value(&self, value: Value<E>) -> u16 {
        #[allow(clippy::cast_possible_truncation)]
        let decoded = value.decrypt(&self.secret_key) as u16;
        decoded
    }

    /// The value read as a 16-bit two's complement integer.
    pub fn decode_signed(&self, value: Value<E>) -> i16 {
        #[allow(clippy::cast_possible_wrap)]
        let decoded = self.decode_value(value) as i16;
        decoded
    }

    pub fn decode_id(&self, id: Identifier<E>) -> u8 {
        #[allow(clippy::cast_possible_truncation)]
        let decoded = id.decrypt(&self.secret_key) as u8;
        decoded
    }
}
