use tfhe::{
    boolean::{
        engine::BooleanEngine,
        parameters::{BooleanParameters, DEFAULT_PARAMETERS},
        prelude::{BinaryBooleanGates, Ciphertext, ClientKey, ServerKey},
    },
    core_crypto::{
        commons::{
            generators::DeterministicSeeder,
            math::random::{ActivatedRandomGenerator, Seed},
        },
        seeders::new_seeder,
    },
};
use tracing::{info, warn};

use crate::{engine::parameters::Entropy, engine::GateEngine, Error, Result};

/// Security claimed by the tfhe boolean parameter sets.
pub const BOOLEAN_LAMBDA: u32 = 128;

/// Gate-bootstrapping engine backed by `tfhe::boolean`.
#[derive(Clone, Copy, Debug)]
pub struct Boolean;

/// Client key together with the server key derived from it.
pub struct BooleanSecretKey {
    client: ClientKey,
    server: ServerKey,
}

impl GateEngine for Boolean {
    type Parameters = BooleanParameters;
    type SecretKey = BooleanSecretKey;
    type EvalKey = ServerKey;
    type Bit = Ciphertext;

    fn param_gen(minimum_lambda: u32) -> Result<BooleanParameters> {
        if minimum_lambda > BOOLEAN_LAMBDA {
            return Err(Error::UnsupportedSecurity {
                requested: minimum_lambda,
                available: BOOLEAN_LAMBDA,
            });
        }
        Ok(DEFAULT_PARAMETERS)
    }

    fn key_gen(params: &BooleanParameters, entropy: Entropy) -> BooleanSecretKey {
        // Keys come from the thread-local engine, so seed it before generating.
        let engine = match entropy {
            Entropy::System => {
                let mut seeder = new_seeder();
                BooleanEngine::new_from_seeder(seeder.as_mut())
            }
            Entropy::Seeded(seed) => {
                warn!("generating keys from a fixed seed; anyone holding the seed can decrypt");
                let mut seeder = DeterministicSeeder::<ActivatedRandomGenerator>::new(Seed(seed));
                BooleanEngine::new_from_seeder(&mut seeder)
            }
        };
        BooleanEngine::replace_thread_local(engine);

        let client = ClientKey::new(params);
        let server = ServerKey::new(&client);

        // Encryptions share the thread-local engine; the seed must not outlive key generation.
        let mut system = new_seeder();
        BooleanEngine::replace_thread_local(BooleanEngine::new_from_seeder(system.as_mut()));

        info!(
            lambda = BOOLEAN_LAMBDA,
            seeded = matches!(entropy, Entropy::Seeded(_)),
            "generated boolean session keys"
        );

        BooleanSecretKey { client, server }
    }

    fn eval_key(secret_key: &BooleanSecretKey) -> &ServerKey {
        &secret_key.server
    }

    fn encrypt(bit: bool, secret_key: &BooleanSecretKey) -> Ciphertext {
        secret_key.client.encrypt(bit)
    }

    fn decrypt(bit: &Ciphertext, secret_key: &BooleanSecretKey) -> bool {
        secret_key.client.decrypt(bit)
    }

    fn constant(value: bool, ek: &ServerKey) -> Ciphertext {
        ek.trivial_encrypt(value)
    }

    fn copy(a: &Ciphertext, _ek: &ServerKey) -> Ciphertext {
        a.clone()
    }

    fn not(a: &Ciphertext, ek: &ServerKey) -> Ciphertext {
        ek.not(a)
    }

    fn and(a: &Ciphertext, b: &Ciphertext, ek: &ServerKey) -> Ciphertext {
        ek.and(a, b)
    }

    fn or(a: &Ciphertext, b: &Ciphertext, ek: &ServerKey) -> Ciphertext {
        ek.or(a, b)
    }

    fn xor(a: &Ciphertext, b: &Ciphertext, ek: &ServerKey) -> Ciphertext {
        ek.xor(a, b)
    }

    fn xnor(a: &Ciphertext, b: &Ciphertext, ek: &ServerKey) -> Ciphertext {
        ek.xnor(a, b)
    }

    fn mux(
        condition: &Ciphertext,
        then: &Ciphertext,
        otherwise: &Ciphertext,
        ek: &ServerKey,
    ) -> Ciphertext {
        ek.mux(condition, then, otherwise)
    }
}
