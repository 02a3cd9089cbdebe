//! Diagnostic logging, compiled in only with the `debug-log` feature.
//!
//! `log!` output is visible in test and simulation runs and is stripped by
//! the host from release builds.

#[cfg(feature = "debug-log")]
use soroban_sdk::log;
use soroban_sdk::{Address, BytesN, Env, Symbol};

#[allow(unused_variables)]
pub fn log_initialize(env: &Env, admin: &Address, token: &Address, commission_bps: u32) {
    #[cfg(feature = "debug-log")]
    log!(env, "initialize: admin={}, token={}, bps={}", admin, token, commission_bps);
}

#[allow(unused_variables)]
pub fn log_deposit(
    env: &Env,
    key: &BytesN<32>,
    sender: &Address,
    amount: i128,
    commission: i128,
    deadline: u32,
) {
    #[cfg(feature = "debug-log")]
    log!(
        env,
        "deposit: key={}, sender={}, amount={}, commission={}, deadline={}",
        key.clone(),
        sender,
        amount,
        commission,
        deadline
    );
}

#[allow(unused_variables)]
pub fn log_withdraw(env: &Env, key: &BytesN<32>, withdrawer: &Address, amount: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "withdraw: key={}, by={}, amount={}", key.clone(), withdrawer, amount);
}

#[allow(unused_variables)]
pub fn log_refund(env: &Env, key: &BytesN<32>, sender: &Address, amount: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "refund: key={}, sender={}, amount={}", key.clone(), sender, amount);
}

#[allow(unused_variables)]
pub fn log_withdraw_commission(env: &Env, owner: &Address, amount: i128) {
    #[cfg(feature = "debug-log")]
    log!(env, "withdraw_commission: owner={}, amount={}", owner, amount);
}

#[allow(unused_variables)]
pub fn log_pause_state(env: &Env, active: bool) {
    #[cfg(feature = "debug-log")]
    log!(env, "pause gate: active={}", active);
}

#[allow(unused_variables)]
pub fn log_config_update(env: &Env, field: Symbol, value: u32) {
    #[cfg(feature = "debug-log")]
    log!(env, "config update: {}={}", field, value);
}
