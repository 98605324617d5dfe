//! Scalars binding a proof to this deployment, recipient and reward.
//!
//! The circuit constrains its public `eventID` and `eventData` signals to
//! the values derived here, so a proof generated for one recipient on one
//! deployment cannot be replayed elsewhere, and goes stale if the reward
//! configuration differs from what the claimant saw.

use ark_bn254::Fr;
use ark_ff::PrimeField;
use light_poseidon::{Poseidon, PoseidonHasher};
use soroban_sdk::{Address, Bytes, BytesN, Env, xdr::ToXdr};

use crate::ClaimError;

/// Circom-parameter Poseidon hash of the chain, contract and recipient
/// scalars, matching the derivation the off-chain prover uses.
pub fn event_id(e: &Env, recipient: &Address) -> Result<BytesN<32>, ClaimError> {
    let chain = fr_from_truncated(e.ledger().network_id().to_array());
    let contract = address_scalar(e, &e.current_contract_address());
    let recipient = address_scalar(e, recipient);

    let mut hasher = Poseidon::<Fr>::new_circom(3).map_err(|_| ClaimError::EventDerivation)?;
    let digest = hasher
        .hash(&[chain, contract, recipient])
        .map_err(|_| ClaimError::EventDerivation)?;

    Ok(BytesN::from_array(e, &fr_to_array(digest)))
}

/// Keccak digest of the reward amount as a 256-bit big-endian integer,
/// truncated to fit the scalar field.
pub fn event_data(e: &Env, reward_amount: i128) -> BytesN<32> {
    let mut buf = [0u8; 32];
    buf[16..].copy_from_slice(&reward_amount.to_be_bytes());

    let mut digest = e.crypto().keccak256(&Bytes::from_array(e, &buf)).to_array();
    digest[0] = 0;

    BytesN::from_array(e, &digest)
}

/// Widens a u64 into a 32-byte big-endian public signal.
pub fn scalar_from_u64(e: &Env, value: u64) -> BytesN<32> {
    let mut bytes = [0u8; 32];
    bytes[24..].copy_from_slice(&value.to_be_bytes());

    BytesN::from_array(e, &bytes)
}

// Addresses have no numeric form on Stellar, so they enter the field as the
// SHA-256 of their XDR encoding.
fn address_scalar(e: &Env, address: &Address) -> Fr {
    let digest = e.crypto().sha256(&address.clone().to_xdr(e));

    fr_from_truncated(digest.to_array())
}

// Top byte dropped so the value always lies below the 254-bit field modulus.
fn fr_from_truncated(mut bytes: [u8; 32]) -> Fr {
    bytes[0] = 0;

    Fr::from_be_bytes_mod_order(&bytes)
}

fn fr_to_array(value: Fr) -> [u8; 32] {
    let limbs = value.into_bigint().0;
    let mut out = [0u8; 32];
    for (i, limb) in limbs.iter().rev().enumerate() {
        out[i * 8..(i + 1) * 8].copy_from_slice(&limb.to_be_bytes());
    }

    out
}

#[cfg(test)]
mod tests {
    use core::str::FromStr;

    use super::*;

    #[test]
    fn test_fr_array_round_trip() {
        let value = Fr::from(123_456_789u64);
        let round = Fr::from_be_bytes_mod_order(&fr_to_array(value));

        assert_eq!(round, value);
    }

    #[test]
    fn test_truncation_clears_top_byte() {
        let bytes = fr_to_array(fr_from_truncated([0xff; 32]));

        assert_eq!(bytes[0], 0);
        assert_eq!(&bytes[1..], &[0xff; 31]);
    }

    // Provers derive eventID with the iden3 reference Poseidon, so the
    // hasher here must stay on the circom parameter set. The digest is
    // poseidon(1, 2, 3) as computed by circomlib and go-iden3-crypto.
    #[test]
    fn test_poseidon_matches_circom_reference() {
        let mut hasher = Poseidon::<Fr>::new_circom(3).unwrap();
        let digest = hasher
            .hash(&[Fr::from(1u64), Fr::from(2u64), Fr::from(3u64)])
            .unwrap();

        let expected = Fr::from_str(
            "6542985608222806190361240322586112750744169038454362455181422643027100751666",
        )
        .unwrap();

        assert_eq!(digest, expected);
    }
}
