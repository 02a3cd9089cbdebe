use soroban_sdk::Env;

use crate::{get_commission_balance, set_commission_balance, ContractError};

const BPS_DENOMINATOR: i128 = 10_000;

/// Splits a deposit into `(commission, net)` using floor division.
pub fn split_amount(amount: i128, commission_bps: u32) -> Result<(i128, i128), ContractError> {
    let commission = amount
        .checked_mul(commission_bps as i128)
        .ok_or(ContractError::Overflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(ContractError::Overflow)?;
    let net = amount
        .checked_sub(commission)
        .ok_or(ContractError::Overflow)?;
    Ok((commission, net))
}

pub fn accrue(env: &Env, commission: i128) -> Result<i128, ContractError> {
    let total = get_commission_balance(env)?
        .checked_add(commission)
        .ok_or(ContractError::Overflow)?;
    set_commission_balance(env, total);
    Ok(total)
}

/// Zeroes the accrued balance and returns what it held.
pub fn take_all(env: &Env) -> Result<i128, ContractError> {
    let accrued = get_commission_balance(env)?;
    set_commission_balance(env, 0);
    Ok(accrued)
}
