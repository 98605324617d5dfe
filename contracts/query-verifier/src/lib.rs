#![no_std]

// Use Soroban's allocator for heap allocations
extern crate alloc;

use ark_bn254::{Bn254, Fq12, Fr as AFr};
use ark_ec::{AffineRepr, CurveGroup, pairing::Pairing};
use ark_ff::Field;
use claim_interface::{ProofPoints, PublicSignal};
use soroban_sdk::{Env, Vec, contract, contracterror, contractimpl, contracttype};

use crypto::bn254::{self, ArkProof, ArkVerificationKey};

// Re-export so deployments can build the constructor argument
pub use types::VerificationKey;

mod crypto;
mod types;

/// Errors that can occur during Groth16 proof verification.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Groth16Error {
    /// The proof verification failed (final exponentiation produced no result).
    InvalidProof = 1,
    /// The number of public inputs does not match the verification key, or a
    /// signal is not a canonical scalar field element.
    MalformedPublicInputs = 2,
    /// A proof point is not a valid member of its curve group.
    MalformedProofPoints = 3,
    /// The verification key is missing or contains an invalid point.
    MalformedVerificationKey = 4,
}

/// Storage keys for contract state.
#[contracttype]
#[derive(Clone)]
enum DataKey {
    VerificationKey,
}

/// Groth16 verifier contract for identity-query proofs.
///
/// This contract verifies Groth16 zero-knowledge proofs over the BN254
/// elliptic curve. Unlike circuit-embedded verifiers, the verification key
/// arrives at deployment through the constructor, so the same wasm serves
/// whichever circuit a deployment pairs it with.
#[contract]
pub struct QueryProofVerifier;

#[contractimpl]
impl QueryProofVerifier {
    /// Validates the verification key and stores it in instance storage.
    ///
    /// Every point of the key is parsed and checked here so that
    /// [`verify_proof`](Self::verify_proof) can treat a stored key as
    /// structurally sound.
    pub fn __constructor(env: Env, vk: VerificationKey) -> Result<(), Groth16Error> {
        ArkVerificationKey::try_from(&vk)?;

        env.storage().instance().set(&DataKey::VerificationKey, &vk);

        Ok(())
    }

    /// Verifies a Groth16 proof with the given public signals.
    ///
    /// This function implements the core Groth16 verification algorithm using the BN254
    /// pairing-friendly elliptic curve. The verification checks the pairing equation:
    ///
    /// `e(-A, B) * e(alpha, beta) * e(vk_x, gamma) * e(C, delta) == 1`
    ///
    /// where `vk_x` is computed as a linear combination of the verification key's IC points
    /// weighted by the public signals.
    ///
    /// # Parameters
    ///
    /// - `proof`: The Groth16 proof containing points A, B, and C
    /// - `pub_signals`: Vector of public input signals (32-byte big-endian scalars)
    ///
    /// Returns `Ok(false)` when the inputs are well formed but the pairing
    /// comparison fails; structural problems surface as typed errors.
    pub fn verify_proof(
        env: Env,
        proof: ProofPoints,
        pub_signals: Vec<PublicSignal>,
    ) -> Result<bool, Groth16Error> {
        let vk: VerificationKey = env
            .storage()
            .instance()
            .get(&DataKey::VerificationKey)
            .ok_or(Groth16Error::MalformedVerificationKey)?;
        let vk = ArkVerificationKey::try_from(&vk)?;

        if pub_signals.len() + 1 != vk.ic.len() as u32 {
            return Err(Groth16Error::MalformedPublicInputs);
        }

        // Parse the proof points, rejecting anything outside the curve groups
        let proof = ArkProof::try_from(&proof)?;

        // Work in projective coordinates for efficiency
        let mut vk_x = vk.ic[0].into_group();
        for (s, v) in pub_signals.iter().zip(vk.ic.iter().skip(1)) {
            let scalar: AFr = bn254::fr_from_bytes(&s.to_array())
                .ok_or(Groth16Error::MalformedPublicInputs)?;
            vk_x += *v * scalar;
        }

        // Compute the pairing check:
        // e(-A, B) * e(alpha, beta) * e(vk_x, gamma) * e(C, delta) == 1
        let neg_a = -proof.a;
        let g1_points = [neg_a, vk.alpha, vk_x.into_affine(), proof.c];
        let g2_points = [proof.b, vk.beta, vk.gamma, vk.delta];

        // Two-step pairing: Miller loop + final exponentiation
        let mlo = Bn254::multi_miller_loop(g1_points, g2_points);
        let result = Bn254::final_exponentiation(mlo).ok_or(Groth16Error::InvalidProof)?;

        Ok(result.0 == Fq12::ONE)
    }
}
