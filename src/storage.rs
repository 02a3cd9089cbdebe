use soroban_sdk::{contracttype, BytesN, Env};

use crate::{Config, ContractError, KeyReusePolicy, Remittance, RemittanceStatus};

// Roughly 30 days of ledgers at 5s close time.
const RECORD_TTL_THRESHOLD: u32 = 518_400;
const RECORD_TTL_EXTEND_TO: u32 = 535_680;
const INSTANCE_TTL_THRESHOLD: u32 = 17_280;
const INSTANCE_TTL_EXTEND_TO: u32 = 518_400;

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Config,
    CommissionBalance,
    TotalHeld,
    Remittance(BytesN<32>),
}

pub fn has_config(env: &Env) -> bool {
    env.storage().instance().has(&DataKey::Config)
}

pub fn get_config(env: &Env) -> Result<Config, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_config(env: &Env, config: &Config) {
    env.storage().instance().set(&DataKey::Config, config);
    env.storage()
        .instance()
        .extend_ttl(INSTANCE_TTL_THRESHOLD, INSTANCE_TTL_EXTEND_TO);
}

pub fn get_commission_balance(env: &Env) -> Result<i128, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::CommissionBalance)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_commission_balance(env: &Env, amount: i128) {
    env.storage()
        .instance()
        .set(&DataKey::CommissionBalance, &amount);
}

pub fn get_total_held(env: &Env) -> Result<i128, ContractError> {
    env.storage()
        .instance()
        .get(&DataKey::TotalHeld)
        .ok_or(ContractError::NotInitialized)
}

pub fn set_total_held(env: &Env, amount: i128) {
    env.storage().instance().set(&DataKey::TotalHeld, &amount);
}

pub fn has_remittance(env: &Env, key: &BytesN<32>) -> bool {
    env.storage()
        .persistent()
        .has(&DataKey::Remittance(key.clone()))
}

pub fn find_remittance(env: &Env, key: &BytesN<32>) -> Option<Remittance> {
    env.storage()
        .persistent()
        .get(&DataKey::Remittance(key.clone()))
}

pub fn find_active_remittance(env: &Env, key: &BytesN<32>) -> Option<Remittance> {
    find_remittance(env, key).filter(Remittance::is_active)
}

pub fn get_remittance(env: &Env, key: &BytesN<32>) -> Result<Remittance, ContractError> {
    find_remittance(env, key).ok_or(ContractError::RemittanceNotFound)
}

pub fn set_remittance(env: &Env, remittance: &Remittance) {
    let storage_key = DataKey::Remittance(remittance.key.clone());
    env.storage().persistent().set(&storage_key, remittance);
    env.storage()
        .persistent()
        .extend_ttl(&storage_key, RECORD_TTL_THRESHOLD, RECORD_TTL_EXTEND_TO);
}

/// Checks that `key` may host a new deposit under `policy`.
///
/// An active record always blocks the key. A spent record blocks it only
/// under [`KeyReusePolicy::SingleUse`].
pub fn ensure_key_available(
    env: &Env,
    key: &BytesN<32>,
    policy: KeyReusePolicy,
) -> Result<(), ContractError> {
    match find_remittance(env, key) {
        None => Ok(()),
        Some(existing) if existing.is_active() => Err(ContractError::DuplicateKey),
        Some(_) => match policy {
            KeyReusePolicy::SingleUse => Err(ContractError::DuplicateKey),
            KeyReusePolicy::ReuseAfterSpent => Ok(()),
        },
    }
}

/// Closes an active record and releases its balance from the held total.
///
/// The spent record is written before the caller moves any tokens out.
pub fn spend_remittance(
    env: &Env,
    remittance: &mut Remittance,
    status: RemittanceStatus,
) -> Result<i128, ContractError> {
    let amount = remittance.balance;
    let held = get_total_held(env)?
        .checked_sub(amount)
        .ok_or(ContractError::Overflow)?;

    remittance.balance = 0;
    remittance.status = status;
    set_remittance(env, remittance);
    set_total_held(env, held);

    Ok(amount)
}
