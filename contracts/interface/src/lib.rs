#![no_std]

use soroban_sdk::{Env, Vec, contractclient};

// Re-export types at crate root for convenience
pub use types::{G1_SIZE, G2_SIZE, ProofPoints, PublicSignal, RegistrationRoot, SCALAR_SIZE};

pub mod types;

/// Oracle interface for the identity registration accumulator.
///
/// The accumulator is append-only; historical roots may stay valid so that
/// identities registered long ago remain claimable against the root their
/// membership proof was built for.
#[contractclient(name = "RegistrationSmtClient")]
pub trait RegistrationSmtInterface {
    /// Returns whether `root` is a recognized root of the registration tree.
    fn is_root_valid(env: Env, root: RegistrationRoot) -> bool;
}

/// Verifier interface for identity-query proofs.
#[contractclient(name = "ProofVerifierClient")]
pub trait ProofVerifierInterface {
    /// Verifies a Groth16 proof against the given ordered public signals.
    ///
    /// Signal order is part of the wire contract between the caller and the
    /// circuit the verifier was set up for; a reordered vector verifies
    /// against different statement values, it does not error.
    ///
    /// # Parameters
    ///
    /// - `proof`: The proof points A, B and C
    /// - `pub_signals`: Public input scalars, big-endian, in circuit order
    ///
    /// Returns `true` if the proof verifies. Implementations are expected to
    /// fail (typed error or panic) on structurally invalid inputs; a caller
    /// that only cares about acceptance should treat any non-`true` outcome
    /// as rejection.
    fn verify_proof(env: Env, proof: ProofPoints, pub_signals: Vec<PublicSignal>) -> bool;
}
