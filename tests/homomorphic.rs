use std::sync::OnceLock;

use he_combinator::{
    add, combine_leaf, combine_tree, negate, select, Boolean, Client, Environment, Operator,
    SessionConfig, Value,
};
use tracing_subscriber::EnvFilter;

/// Key generation dominates test time, so every test shares one seeded session.
fn client() -> &'static Client<Boolean> {
    static CLIENT: OnceLock<Client<Boolean>> = OnceLock::new();
    CLIENT.get_or_init(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
        Client::new(&SessionConfig::seeded(3_141_592_657)).unwrap()
    })
}

#[test]
fn encoding_round_trips() {
    let client = client();
    for x in [0, 1, -1, 12345, i32::from(i16::MIN), 0x1_2345] {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let expected = x as u16;
        assert_eq!(client.decode_value(client.encode_value(x)), expected);
    }
    assert_eq!(client.decode_id(client.encode_id(13)), 13);
}

#[test]
fn arithmetic_on_ciphertexts() {
    let client = client();
    let ek = client.eval_key();

    let sum = add(client.encode_value(30_000), client.encode_value(10_000), ek);
    assert_eq!(client.decode_value(sum), 40_000);

    let neg = negate(client.encode_value(1234), ek);
    assert_eq!(client.decode_signed(neg), -1234);
}

#[test]
fn select_tests_for_zero() {
    let client = client();
    let ek = client.eval_key();
    let then = client.encode_value(11);
    let otherwise = client.encode_value(22);

    let res = select(client.encode_value(0), &then, &otherwise, ek);
    assert_eq!(client.decode_value(res), 11);

    let res = select(client.encode_value(-8), &then, &otherwise, ek);
    assert_eq!(client.decode_value(res), 22);
}

#[test]
fn environment_shadowing() {
    let client = client();
    let ek = client.eval_key();

    let empty = Environment::<Boolean>::new();
    assert_eq!(client.decode_value(empty.lookup(client.encode_id(4), ek)), 0);

    let mut env = Environment::new();
    env.bind(client.encode_id(3), client.encode_value(10));
    env.bind(client.encode_id(5), client.encode_value(20));
    env.bind(client.encode_id(3), client.encode_value(99));

    assert_eq!(client.decode_value(env.lookup(client.encode_id(3), ek)), 99);
    assert_eq!(client.decode_value(env.lookup(client.encode_id(5), ek)), 20);
    assert_eq!(client.decode_value(env.lookup(client.encode_id(7), ek)), 0);
}

#[test]
fn combine_tree_dispatches_every_operator() {
    let client = client();
    let (a, b, c) = (7, -3, 100);

    for (op, expected) in [(Operator::Add, 4), (Operator::Neg, -7), (Operator::If, 100)] {
        let res = combine_tree(
            client.encode_op(op),
            client.encode_value(a),
            client.encode_value(b),
            client.encode_value(c),
            client.eval_key(),
        );
        assert_eq!(client.decode_signed(res), expected, "operator {op:?}");
    }
}

#[test]
fn combine_leaf_merges_lookup_and_literal() {
    let client = client();
    let ek = client.eval_key();

    let mut env = Environment::new();
    env.bind(client.encode_id(1), client.encode_value(0x0f00));

    let miss = combine_leaf(&env, client.encode_id(2), client.encode_value(-5), ek);
    assert_eq!(client.decode_signed(miss), -5);

    let hit = combine_leaf(&env, client.encode_id(1), client.encode_value(0x00f0), ek);
    assert_eq!(client.decode_value(hit), 0x0ff0);
}

#[test]
fn ciphertexts_survive_wire_encoding() {
    let client = client();
    let bytes = client.encode_value(-77).to_bytes().unwrap();
    let value = Value::<Boolean>::from_bytes(&bytes).unwrap();
    assert_eq!(client.decode_signed(value), -77);
}

#[test]
fn seeded_sessions_do_not_fix_encryption_randomness() {
    let system = Client::<Boolean>::new(&SessionConfig::default()).unwrap();

    let _first = Client::<Boolean>::new(&SessionConfig::seeded(7)).unwrap();
    let x1 = system.encode_value(5).to_bytes().unwrap();

    let _second = Client::<Boolean>::new(&SessionConfig::seeded(7)).unwrap();
    let x2 = system.encode_value(5).to_bytes().unwrap();

    assert_ne!(x1, x2);
    for bytes in [x1, x2] {
        let value = Value::<Boolean>::from_bytes(&bytes).unwrap();
        assert_eq!(system.decode_value(value), 5);
    }
}
