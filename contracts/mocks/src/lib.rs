#![no_std]

//! Test doubles for the claimable token's collaborators.
//!
//! [`MockRegistrationSmt`] stands in for the registration accumulator with
//! explicitly marked valid roots. [`MockProofVerifier`] returns a configured
//! verdict and can additionally be pinned to an exact public-signal vector,
//! which lets callers assert the statement they assemble without running a
//! real pairing check.

use claim_interface::{ProofPoints, PublicSignal, RegistrationRoot};
use soroban_sdk::{Env, Vec, contract, contractimpl, contracttype};

#[contracttype]
#[derive(Clone)]
enum SmtKey {
    ValidRoot(RegistrationRoot),
}

/// Registration accumulator stand-in.
#[contract]
pub struct MockRegistrationSmt;

#[contractimpl]
impl MockRegistrationSmt {
    /// Marks `root` as a recognized root of the tree.
    pub fn set_valid_root(env: Env, root: RegistrationRoot) {
        env.storage().instance().set(&SmtKey::ValidRoot(root), &true);
    }

    /// Returns whether `root` has been marked valid.
    pub fn is_root_valid(env: Env, root: RegistrationRoot) -> bool {
        env.storage().instance().has(&SmtKey::ValidRoot(root))
    }
}

#[contracttype]
#[derive(Clone)]
enum VerifierKey {
    Result,
    ExpectedSignals,
}

/// Proof verifier stand-in with a configurable verdict.
#[contract]
pub struct MockProofVerifier;

#[contractimpl]
impl MockProofVerifier {
    /// Sets the verdict returned by `verify_proof`. Unset means `true`.
    pub fn set_result(env: Env, value: bool) {
        env.storage().instance().set(&VerifierKey::Result, &value);
    }

    /// Pins the exact signal vector future `verify_proof` calls must carry.
    pub fn set_expected_signals(env: Env, signals: Vec<PublicSignal>) {
        env.storage()
            .instance()
            .set(&VerifierKey::ExpectedSignals, &signals);
    }

    /// Returns the configured verdict, or `false` whenever a pinned signal
    /// vector does not match the one supplied.
    pub fn verify_proof(env: Env, _proof: ProofPoints, pub_signals: Vec<PublicSignal>) -> bool {
        if let Some(expected) = env
            .storage()
            .instance()
            .get::<_, Vec<PublicSignal>>(&VerifierKey::ExpectedSignals)
        {
            if expected != pub_signals {
                return false;
            }
        }

        env.storage()
            .instance()
            .get(&VerifierKey::Result)
            .unwrap_or(true)
    }
}
