use soroban_sdk::{Address, Env};

use crate::{Config, ContractError, Remittance};

pub const MAX_COMMISSION_BPS: u32 = 10_000;

/// Rejects every value-moving operation while the contract is stopped.
pub fn require_active(config: &Config) -> Result<(), ContractError> {
    if !config.active {
        return Err(ContractError::SystemPaused);
    }
    Ok(())
}

/// Authenticates `caller` and checks it is the configured admin.
pub fn require_admin(config: &Config, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if *caller != config.admin {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::ZeroValueDeposit);
    }
    Ok(())
}

pub fn validate_duration(duration: u32, limit: u32) -> Result<(), ContractError> {
    if duration > limit {
        return Err(ContractError::InvalidDuration);
    }
    Ok(())
}

pub fn validate_commission_bps(bps: u32) -> Result<(), ContractError> {
    if bps > MAX_COMMISSION_BPS {
        return Err(ContractError::InvalidCommissionRate);
    }
    Ok(())
}

/// When a receiver is registered, deposits may only target it.
pub fn validate_receiver(config: &Config, receiver: &Address) -> Result<(), ContractError> {
    match &config.registered_receiver {
        Some(registered) if registered != receiver => Err(ContractError::ReceiverNotRegistered),
        _ => Ok(()),
    }
}

pub fn deadline_from(env: &Env, duration: u32) -> Result<u32, ContractError> {
    env.ledger()
        .sequence()
        .checked_add(duration)
        .ok_or(ContractError::Overflow)
}

/// Decides whether `caller` may claim `remittance` at the current ledger.
///
/// The receiver claims up to and including the deadline. The sender may claim
/// strictly after it, and only when the config allows it.
pub fn authorize_claim(
    env: &Env,
    config: &Config,
    caller: &Address,
    remittance: &Remittance,
) -> Result<(), ContractError> {
    let now = env.ledger().sequence();
    if *caller == remittance.receiver {
        if now > remittance.deadline {
            return Err(ContractError::DeadlinePassed);
        }
        Ok(())
    } else if *caller == remittance.sender && config.sender_withdraw_after_expiry {
        if now <= remittance.deadline {
            return Err(ContractError::DeadlineNotReached);
        }
        Ok(())
    } else {
        Err(ContractError::Unauthorized)
    }
}
