use soroban_sdk::{symbol_short, Address, BytesN, Env};

use crate::KeyReusePolicy;

/// Bumped whenever an event payload changes shape.
pub const EVENT_SCHEMA_VERSION: u32 = 1;

fn header(env: &Env) -> (u32, u32, u64) {
    let ledger = env.ledger();
    (EVENT_SCHEMA_VERSION, ledger.sequence(), ledger.timestamp())
}

pub fn emit_initialized(
    env: &Env,
    admin: Address,
    token: Address,
    duration_limit: u32,
    commission_bps: u32,
) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("init"),),
        (version, sequence, timestamp, admin, token, duration_limit, commission_bps),
    );
}

pub fn emit_deposit(
    env: &Env,
    key: BytesN<32>,
    sender: Address,
    receiver: Address,
    amount: i128,
    deadline: u32,
) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("deposit"),),
        (version, sequence, timestamp, key, sender, receiver, amount, deadline),
    );
}

pub fn emit_commission_deposit(
    env: &Env,
    sender: Address,
    owner: Address,
    commission: i128,
    key: BytesN<32>,
) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("comm_dep"),),
        (version, sequence, timestamp, sender, owner, commission, key),
    );
}

pub fn emit_withdraw(env: &Env, key: BytesN<32>, withdrawer: Address, amount: i128) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("withdraw"),),
        (version, sequence, timestamp, key, withdrawer, amount),
    );
}

pub fn emit_refund(env: &Env, key: BytesN<32>, sender: Address, amount: i128) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("refund"),),
        (version, sequence, timestamp, key, sender, amount),
    );
}

pub fn emit_commission_withdraw(env: &Env, owner: Address, commission: i128) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("comm_wd"),),
        (version, sequence, timestamp, owner, commission),
    );
}

pub fn emit_stopped(env: &Env, sender: Address) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("stop"),),
        (version, sequence, timestamp, sender, false),
    );
}

pub fn emit_resumed(env: &Env, sender: Address) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("resume"),),
        (version, sequence, timestamp, sender, true),
    );
}

pub fn emit_duration_limit_set(env: &Env, owner: Address, new_limit: u32) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("set_dur"),),
        (version, sequence, timestamp, owner, new_limit),
    );
}

pub fn emit_commission_rate_set(env: &Env, owner: Address, new_bps: u32) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("set_rate"),),
        (version, sequence, timestamp, owner, new_bps),
    );
}

pub fn emit_registered_receiver_set(
    env: &Env,
    owner: Address,
    old: Option<Address>,
    new: Option<Address>,
) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("set_recv"),),
        (version, sequence, timestamp, owner, old, new),
    );
}

pub fn emit_key_reuse_policy_set(env: &Env, owner: Address, policy: KeyReusePolicy) {
    let (version, sequence, timestamp) = header(env);
    env.events().publish(
        (symbol_short!("set_reuse"),),
        (version, sequence, timestamp, owner, policy),
    );
}
