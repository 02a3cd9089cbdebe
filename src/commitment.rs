//! Commitment keys binding a pair of secret factors to a receiver.
//!
//! Every variable-length input is prefixed with its big-endian `u32` length
//! and each derivation starts with its own domain tag, so no two distinct
//! input tuples share an encoding.

use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env};

const SECRET_TAG: &[u8] = b"remit.secret.v1";
const KEY_TAG: &[u8] = b"remit.key.v1";
const DIRECT_TAG: &[u8] = b"remit.direct.v1";

fn push_prefixed(buf: &mut Bytes, part: &Bytes) {
    buf.extend_from_array(&part.len().to_be_bytes());
    buf.append(part);
}

fn push_address(env: &Env, buf: &mut Bytes, address: &Address) {
    push_prefixed(buf, &address.clone().to_xdr(env));
}

fn digest(env: &Env, buf: &Bytes) -> BytesN<32> {
    env.crypto().sha256(buf).into()
}

/// Secret shared by sender and receiver, derived from the two factors.
pub fn derive_secret(env: &Env, factor1: &Bytes, factor2: &Bytes) -> BytesN<32> {
    let mut buf = Bytes::from_slice(env, SECRET_TAG);
    push_prefixed(&mut buf, factor1);
    push_prefixed(&mut buf, factor2);
    digest(env, &buf)
}

/// Key under which a deposit for `receiver` is stored.
pub fn derive_key(env: &Env, receiver: &Address, secret: &BytesN<32>) -> BytesN<32> {
    let mut buf = Bytes::from_slice(env, KEY_TAG);
    push_address(env, &mut buf, receiver);
    buf.append(&Bytes::from(secret.clone()));
    digest(env, &buf)
}

/// Single-step key over both identities and both factors.
pub fn derive_direct_key(
    env: &Env,
    sender: &Address,
    receiver: &Address,
    factor1: &Bytes,
    factor2: &Bytes,
) -> BytesN<32> {
    let mut buf = Bytes::from_slice(env, DIRECT_TAG);
    push_address(env, &mut buf, sender);
    push_address(env, &mut buf, receiver);
    push_prefixed(&mut buf, factor1);
    push_prefixed(&mut buf, factor2);
    digest(env, &buf)
}

#[cfg(test)]
mod tests {
    use super::*;
    use soroban_sdk::testutils::Address as _;

    fn bytes(env: &Env, s: &str) -> Bytes {
        Bytes::from_slice(env, s.as_bytes())
    }

    #[test]
    fn test_secret_is_deterministic() {
        let env = Env::default();
        let a = derive_secret(&env, &bytes(&env, "password1"), &bytes(&env, "password2"));
        let b = derive_secret(&env, &bytes(&env, "password1"), &bytes(&env, "password2"));
        assert_eq!(a, b);
    }

    #[test]
    fn test_secret_factor_boundaries_matter() {
        let env = Env::default();
        let a = derive_secret(&env, &bytes(&env, "ab"), &bytes(&env, "c"));
        let b = derive_secret(&env, &bytes(&env, "a"), &bytes(&env, "bc"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_secret_factor_order_matters() {
        let env = Env::default();
        let a = derive_secret(&env, &bytes(&env, "x"), &bytes(&env, "y"));
        let b = derive_secret(&env, &bytes(&env, "y"), &bytes(&env, "x"));
        assert_ne!(a, b);
    }

    #[test]
    fn test_key_differs_per_receiver() {
        let env = Env::default();
        let carol = Address::generate(&env);
        let dave = Address::generate(&env);
        let secret = derive_secret(&env, &bytes(&env, "password1"), &bytes(&env, "password2"));

        assert_ne!(
            derive_key(&env, &carol, &secret),
            derive_key(&env, &dave, &secret)
        );
        assert_eq!(
            derive_key(&env, &carol, &secret),
            derive_key(&env, &carol, &secret)
        );
    }

    #[test]
    fn test_direct_key_binds_sender() {
        let env = Env::default();
        let alice = Address::generate(&env);
        let bob = Address::generate(&env);
        let carol = Address::generate(&env);
        let f1 = bytes(&env, "password1");
        let f2 = bytes(&env, "password2");

        assert_ne!(
            derive_direct_key(&env, &alice, &carol, &f1, &f2),
            derive_direct_key(&env, &bob, &carol, &f1, &f2)
        );
        assert_ne!(
            derive_direct_key(&env, &alice, &carol, &f1, &f2),
            derive_key(&env, &carol, &derive_secret(&env, &f1, &f2))
        );
    }
}
