use soroban_sdk::{BytesN, contracttype};

/// Claimant-supplied identity facts accompanying a claim.
#[derive(Clone)]
#[contracttype]
pub struct UserData {
    /// One-per-identity scalar output by the circuit. Recording it is what
    /// makes a claim unrepeatable.
    pub nullifier: BytesN<32>,
    /// Unix time the identity entered the registration tree, or zero for
    /// identities that predate claiming. A non-zero value at or after the
    /// claiming start switches the proof to the single-identity counter
    /// bound.
    pub identity_creation_timestamp: u64,
}
