use soroban_sdk::{Address, BytesN, Env, contracttype};

use crate::ClaimError;

/// Storage keys for contract state.
#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Owner,
    RewardAmount,
    RegistrationSmt,
    Verifier,
    ClaimingStart,
    Claimed(BytesN<32>),
}

const DAY_IN_LEDGERS: u32 = 17280;

const INSTANCE_EXTEND_AMOUNT: u32 = 30 * DAY_IN_LEDGERS;
const INSTANCE_TTL_THRESHOLD: u32 = INSTANCE_EXTEND_AMOUNT - DAY_IN_LEDGERS;

// Claim markers outlive instance bumps; an expired marker would reopen a
// spent nullifier.
const CLAIM_EXTEND_AMOUNT: u32 = 120 * DAY_IN_LEDGERS;
const CLAIM_TTL_THRESHOLD: u32 = CLAIM_EXTEND_AMOUNT - DAY_IN_LEDGERS;

pub fn extend_instance_ttl(e: &Env) {
    e.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_EXTEND_AMOUNT);
}

pub fn is_initialized(e: &Env) -> bool {
    e.storage().instance().has(&DataKey::ClaimingStart)
}

pub fn write_owner(e: &Env, owner: &Address) {
    e.storage().instance().set(&DataKey::Owner, owner);
}

pub fn read_owner(e: &Env) -> Result<Address, ClaimError> {
    e.storage()
        .instance()
        .get(&DataKey::Owner)
        .ok_or(ClaimError::NotInitialized)
}

pub fn write_reward_amount(e: &Env, amount: i128) {
    e.storage().instance().set(&DataKey::RewardAmount, &amount);
}

pub fn read_reward_amount(e: &Env) -> Result<i128, ClaimError> {
    e.storage()
        .instance()
        .get(&DataKey::RewardAmount)
        .ok_or(ClaimError::NotInitialized)
}

pub fn write_registration_smt(e: &Env, address: &Address) {
    e.storage().instance().set(&DataKey::RegistrationSmt, address);
}

pub fn read_registration_smt(e: &Env) -> Result<Address, ClaimError> {
    e.storage()
        .instance()
        .get(&DataKey::RegistrationSmt)
        .ok_or(ClaimError::NotInitialized)
}

pub fn write_verifier(e: &Env, address: &Address) {
    e.storage().instance().set(&DataKey::Verifier, address);
}

pub fn read_verifier(e: &Env) -> Result<Address, ClaimError> {
    e.storage()
        .instance()
        .get(&DataKey::Verifier)
        .ok_or(ClaimError::NotInitialized)
}

pub fn write_claiming_start(e: &Env, timestamp: u64) {
    e.storage().instance().set(&DataKey::ClaimingStart, &timestamp);
}

pub fn read_claiming_start(e: &Env) -> Result<u64, ClaimError> {
    e.storage()
        .instance()
        .get(&DataKey::ClaimingStart)
        .ok_or(ClaimError::NotInitialized)
}

/// Whether `nullifier` has already settled a claim. Touching the entry
/// refreshes its TTL.
pub fn is_claimed(e: &Env, nullifier: &BytesN<32>) -> bool {
    let key = DataKey::Claimed(nullifier.clone());
    let claimed = e.storage().persistent().has(&key);
    if claimed {
        e.storage()
            .persistent()
            .extend_ttl(&key, CLAIM_TTL_THRESHOLD, CLAIM_EXTEND_AMOUNT);
    }

    claimed
}

/// Records `nullifier` as spent. Set-only; nothing ever removes an entry.
pub fn record_claim(e: &Env, nullifier: &BytesN<32>) {
    let key = DataKey::Claimed(nullifier.clone());
    e.storage().persistent().set(&key, &true);
    e.storage()
        .persistent()
        .extend_ttl(&key, CLAIM_TTL_THRESHOLD, CLAIM_EXTEND_AMOUNT);
}
