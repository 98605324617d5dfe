#![no_std]

// Use Soroban's allocator for heap allocations
extern crate alloc;

use claim_interface::{ProofPoints, ProofVerifierClient, PublicSignal, RegistrationSmtClient};
use soroban_sdk::{
    Address, BytesN, Env, String, Vec, contract, contracterror, contractimpl, vec,
};
use stellar_macros::default_impl;
use stellar_tokens::fungible::{Base, FungibleToken};

pub use types::UserData;

pub mod date;

mod binding;
mod storage;
mod types;

/// Errors surfaced by the claim workflow.
///
/// Every variant is a precondition violation; none is transient or worth
/// retrying with the same inputs.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ClaimError {
    /// The nullifier has already settled a claim.
    AlreadyClaimed = 1,
    /// The registration root is not recognized by the accumulator.
    InvalidRegistrationRoot = 2,
    /// The claim date lies outside the claiming window.
    DateTooFar = 3,
    /// The zero-knowledge proof did not verify.
    InvalidZKProof = 4,
    /// The contract has already been initialized.
    InvalidInitialization = 5,
    /// The operator is not the contract owner.
    OwnableUnauthorizedAccount = 6,
    /// The contract has not been initialized yet.
    NotInitialized = 7,
    /// The claim date is not a packed six-ASCII-digit calendar date.
    MalformedClaimDate = 8,
    /// Deriving the event binding scalars failed.
    EventDerivation = 9,
    /// The configured reward amount is negative.
    InvalidRewardAmount = 10,
}

/// One-time token reward claimable with a zero-knowledge proof of identity
/// eligibility.
///
/// A holder of a registered identity proves, without revealing which
/// identity, that their travel document is unexpired and that their identity
/// satisfies the configured counter and freshness bounds. The proof is bound
/// to this deployment and the designated recipient through the event
/// scalars, and each identity's nullifier settles at most one claim, ever.
#[contract]
pub struct ClaimableToken;

#[contractimpl]
impl ClaimableToken {
    /// Query selector for the identity circuit: nullifier, timestamp upper
    /// bound, identity counter upper bound and expiration date lower bound
    /// checks enabled.
    const SELECTOR: u64 = 0x1a01;

    /// ASCII `"000000"`, the circuit's disabled-date sentinel.
    const ZERO_DATE: u64 = 0x3030_3030_3030;

    /// Identity counter upper bound for identities registered before
    /// claiming opened, i.e. effectively unbounded.
    const IDENTITY_LIMIT: u64 = u32::MAX as u64;

    const DECIMALS: u32 = 18;

    /// Configures the contract. Callable exactly once; the claiming window
    /// opens at the ledger timestamp of this call.
    ///
    /// `owner` is the only principal later allowed to authorize an upgrade.
    /// `reward_amount` must be non-negative: the configuration is immutable,
    /// and every mint of a negative amount fails.
    pub fn initialize(
        e: Env,
        owner: Address,
        reward_amount: i128,
        registration_smt: Address,
        verifier: Address,
        name: String,
        symbol: String,
    ) -> Result<(), ClaimError> {
        if storage::is_initialized(&e) {
            return Err(ClaimError::InvalidInitialization);
        }

        if reward_amount < 0 {
            return Err(ClaimError::InvalidRewardAmount);
        }

        storage::write_owner(&e, &owner);
        storage::write_reward_amount(&e, reward_amount);
        storage::write_registration_smt(&e, &registration_smt);
        storage::write_verifier(&e, &verifier);
        storage::write_claiming_start(&e, e.ledger().timestamp());

        Base::set_metadata(&e, Self::DECIMALS, name, symbol);

        Ok(())
    }

    /// Claims the one-time reward for `recipient`.
    ///
    /// Checks run in order and fail fast: the nullifier must be unspent, the
    /// registration root recognized, the claim date inside the window, and
    /// the proof must verify against the public signals assembled here. On
    /// success the nullifier is recorded and the reward minted; a failed
    /// call leaves no state behind.
    ///
    /// No authorization is required: the proof itself binds the recipient,
    /// so anyone may relay a claim on a claimant's behalf.
    pub fn claim(
        e: Env,
        registration_root: BytesN<32>,
        claim_date: u64,
        recipient: Address,
        user_data: UserData,
        proof: ProofPoints,
    ) -> Result<(), ClaimError> {
        storage::extend_instance_ttl(&e);

        let reward_amount = storage::read_reward_amount(&e)?;
        let claiming_start = storage::read_claiming_start(&e)?;

        if storage::is_claimed(&e, &user_data.nullifier) {
            return Err(ClaimError::AlreadyClaimed);
        }

        let smt = RegistrationSmtClient::new(&e, &storage::read_registration_smt(&e)?);
        match smt.try_is_root_valid(&registration_root) {
            Ok(Ok(true)) => {}
            _ => return Err(ClaimError::InvalidRegistrationRoot),
        }

        check_claim_date(&e, claim_date, claiming_start)?;

        let pub_signals = build_public_signals(
            &e,
            &registration_root,
            claim_date,
            &recipient,
            &user_data,
            reward_amount,
            claiming_start,
        )?;

        let verifier = ProofVerifierClient::new(&e, &storage::read_verifier(&e)?);
        match verifier.try_verify_proof(&proof, &pub_signals) {
            Ok(Ok(true)) => {}
            _ => return Err(ClaimError::InvalidZKProof),
        }

        storage::record_claim(&e, &user_data.nullifier);

        // Same amount on both identity paths; a recent identity only changes
        // the bounds the proof had to satisfy
        Base::mint(&e, &recipient, reward_amount);

        Ok(())
    }

    /// Replaces the contract code. Only the owner designated at
    /// initialization may authorize this.
    pub fn upgrade(e: Env, operator: Address, new_wasm_hash: BytesN<32>) -> Result<(), ClaimError> {
        operator.require_auth();

        if operator != storage::read_owner(&e)? {
            return Err(ClaimError::OwnableUnauthorizedAccount);
        }

        e.deployer().update_current_contract_wasm(new_wasm_hash);

        Ok(())
    }

    /// Event binding scalar for `recipient`, fetched by provers before
    /// building a proof.
    pub fn get_event_id(e: Env, recipient: Address) -> Result<BytesN<32>, ClaimError> {
        binding::event_id(&e, &recipient)
    }

    /// Event binding scalar for the configured reward amount.
    pub fn get_event_data(e: Env) -> Result<BytesN<32>, ClaimError> {
        Ok(binding::event_data(&e, storage::read_reward_amount(&e)?))
    }

    /// Timestamp upper bound a default-path proof must be built against.
    /// Stable after initialization, so proofs do not go stale between
    /// construction and submission.
    pub fn get_identity_creation_timestamp_upper_bound(e: Env) -> Result<u64, ClaimError> {
        storage::read_claiming_start(&e)
    }

    /// Ledger timestamp at which the claiming window opened.
    pub fn claiming_start_timestamp(e: Env) -> Result<u64, ClaimError> {
        storage::read_claiming_start(&e)
    }

    /// Fixed reward paid per successful claim.
    pub fn reward_amount(e: Env) -> Result<i128, ClaimError> {
        storage::read_reward_amount(&e)
    }

    /// Identity counter bound used on the default (pre-start identity) path.
    pub fn identity_limit() -> u64 {
        Self::IDENTITY_LIMIT
    }

    /// Address of the registration accumulator contract.
    pub fn registration_smt(e: Env) -> Result<Address, ClaimError> {
        storage::read_registration_smt(&e)
    }

    /// Address of the proof verifier contract.
    pub fn verifier(e: Env) -> Result<Address, ClaimError> {
        storage::read_verifier(&e)
    }

    /// Owner designated at initialization.
    pub fn owner(e: Env) -> Result<Address, ClaimError> {
        storage::read_owner(&e)
    }

    /// Whether `nullifier` has already settled a claim.
    pub fn is_claimed(e: Env, nullifier: BytesN<32>) -> bool {
        storage::is_claimed(&e, &nullifier)
    }
}

#[default_impl]
#[contractimpl]
impl FungibleToken for ClaimableToken {
    type ContractType = Base;
}

/// The claim date's midnight must fall inside `[start of the claiming
/// window's day, now]`, both ends inclusive: the window opens mid-day, so
/// its own day stays claimable, and dates even one day ahead of chain time
/// are rejected.
fn check_claim_date(e: &Env, claim_date: u64, claiming_start: u64) -> Result<(), ClaimError> {
    let date = date::decode_date(claim_date)?;
    let timestamp = date::date_to_unix(&date);

    if timestamp < date::start_of_day(claiming_start) || timestamp > e.ledger().timestamp() {
        return Err(ClaimError::DateTooFar);
    }

    Ok(())
}

/// Assembles the ordered public signal vector the proof commits to. The
/// order is a wire contract with the circuit; reordering entries makes
/// honest proofs verify against the wrong statement rather than error.
fn build_public_signals(
    e: &Env,
    registration_root: &BytesN<32>,
    claim_date: u64,
    recipient: &Address,
    user_data: &UserData,
    reward_amount: i128,
    claiming_start: u64,
) -> Result<Vec<PublicSignal>, ClaimError> {
    let event_id = binding::event_id(e, recipient)?;
    let event_data = binding::event_data(e, reward_amount);

    // Identities created after the window opened carry their creation time
    // and are proven under the single-identity counter bound
    let created = user_data.identity_creation_timestamp;
    let (counter_upper, timestamp_upper) = if created != 0 && created >= claiming_start {
        (1, created)
    } else {
        (ClaimableToken::IDENTITY_LIMIT, claiming_start)
    };

    Ok(vec![
        e,
        event_id,
        event_data,
        registration_root.clone(),
        binding::scalar_from_u64(e, ClaimableToken::SELECTOR),
        binding::scalar_from_u64(e, claim_date),
        binding::scalar_from_u64(e, 0),
        binding::scalar_from_u64(e, timestamp_upper),
        binding::scalar_from_u64(e, 0),
        binding::scalar_from_u64(e, counter_upper),
        binding::scalar_from_u64(e, ClaimableToken::ZERO_DATE),
        binding::scalar_from_u64(e, ClaimableToken::ZERO_DATE),
        binding::scalar_from_u64(e, claim_date),
        binding::scalar_from_u64(e, ClaimableToken::ZERO_DATE),
        binding::scalar_from_u64(e, 0),
        user_data.nullifier.clone(),
    ])
}
