#![no_std]
mod commission;
mod commitment;
mod debug;
mod errors;
mod events;
mod storage;
mod types;
mod validation;

use soroban_sdk::{contract, contractimpl, symbol_short, token, Address, Bytes, BytesN, Env};

pub use commission::*;
pub use commitment::*;
pub use debug::*;
pub use errors::ContractError;
pub use events::*;
pub use storage::*;
pub use types::*;
pub use validation::*;

#[contract]
pub struct HashlockRemitContract;

#[contractimpl]
impl HashlockRemitContract {
    pub fn initialize(
        env: Env,
        admin: Address,
        token: Address,
        duration_limit: u32,
        commission_bps: u32,
        registered_receiver: Option<Address>,
        key_reuse: KeyReusePolicy,
        sender_withdraw_after_expiry: bool,
    ) -> Result<(), ContractError> {
        if has_config(&env) {
            return Err(ContractError::AlreadyInitialized);
        }

        validate_commission_bps(commission_bps)?;

        let config = Config {
            admin: admin.clone(),
            token: token.clone(),
            duration_limit,
            commission_bps,
            registered_receiver,
            active: true,
            key_reuse,
            sender_withdraw_after_expiry,
        };
        set_config(&env, &config);
        set_commission_balance(&env, 0);
        set_total_held(&env, 0);

        emit_initialized(&env, admin.clone(), token.clone(), duration_limit, commission_bps);

        log_initialize(&env, &admin, &token, commission_bps);

        Ok(())
    }

    // Escrow

    /// Locks `amount` of the configured token under `key` until
    /// `current sequence + duration`.
    ///
    /// In the commissioned setup the fee is withheld here and is not returned
    /// by a later refund.
    pub fn deposit(
        env: Env,
        sender: Address,
        receiver: Address,
        duration: u32,
        key: BytesN<32>,
        amount: i128,
    ) -> Result<Remittance, ContractError> {
        sender.require_auth();

        let config = get_config(&env)?;
        require_active(&config)?;
        validate_amount(amount)?;
        validate_duration(duration, config.duration_limit)?;
        validate_receiver(&config, &receiver)?;
        ensure_key_available(&env, &key, config.key_reuse)?;

        let deadline = deadline_from(&env, duration)?;
        let (commission, net) = split_amount(amount, config.commission_bps)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&sender, &env.current_contract_address(), &amount);

        accrue(&env, commission)?;
        let held = get_total_held(&env)?
            .checked_add(net)
            .ok_or(ContractError::Overflow)?;
        set_total_held(&env, held);

        let remittance = Remittance {
            key: key.clone(),
            sender: sender.clone(),
            receiver: receiver.clone(),
            balance: net,
            commission,
            deadline,
            created_at: env.ledger().sequence(),
            status: RemittanceStatus::Active,
        };
        set_remittance(&env, &remittance);

        if config.commission_bps > 0 {
            emit_commission_deposit(&env, sender.clone(), config.admin.clone(), commission, key.clone());
        }
        emit_deposit(&env, key.clone(), sender.clone(), receiver, net, deadline);

        log_deposit(&env, &key, &sender, net, commission, deadline);

        Ok(remittance)
    }

    /// Claims the remittance unlocked by the two secret factors.
    ///
    /// The key is first rebuilt with the registered receiver as binding, then
    /// with `caller`, so deposits made before a receiver change stay claimable.
    /// Returns the amount paid out.
    pub fn withdraw(
        env: Env,
        caller: Address,
        factor1: Bytes,
        factor2: Bytes,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let config = get_config(&env)?;
        require_active(&config)?;

        let secret = derive_secret(&env, &factor1, &factor2);
        let mut remittance = config
            .registered_receiver
            .as_ref()
            .and_then(|registered| find_active_remittance(&env, &derive_key(&env, registered, &secret)))
            .or_else(|| find_active_remittance(&env, &derive_key(&env, &caller, &secret)))
            .ok_or(ContractError::InactiveRemittance)?;

        authorize_claim(&env, &config, &caller, &remittance)?;

        let amount = spend_remittance(&env, &mut remittance, RemittanceStatus::Withdrawn)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        emit_withdraw(&env, remittance.key.clone(), caller.clone(), amount);

        log_withdraw(&env, &remittance.key, &caller, amount);

        Ok(amount)
    }

    /// Claims a remittance whose key was built in one step from both
    /// identities and both factors, see [`derive_direct_key`].
    pub fn withdraw_direct(
        env: Env,
        caller: Address,
        sender: Address,
        factor1: Bytes,
        factor2: Bytes,
    ) -> Result<i128, ContractError> {
        caller.require_auth();

        let config = get_config(&env)?;
        require_active(&config)?;

        let key = derive_direct_key(&env, &sender, &caller, &factor1, &factor2);
        let mut remittance =
            find_active_remittance(&env, &key).ok_or(ContractError::InactiveRemittance)?;

        authorize_claim(&env, &config, &caller, &remittance)?;

        let amount = spend_remittance(&env, &mut remittance, RemittanceStatus::Withdrawn)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        emit_withdraw(&env, key.clone(), caller.clone(), amount);

        log_withdraw(&env, &key, &caller, amount);

        Ok(amount)
    }

    /// Returns an expired, unclaimed remittance to its sender.
    pub fn refund(env: Env, caller: Address, key: BytesN<32>) -> Result<i128, ContractError> {
        caller.require_auth();

        let config = get_config(&env)?;
        require_active(&config)?;

        let mut remittance =
            find_active_remittance(&env, &key).ok_or(ContractError::InactiveRemittance)?;

        if caller != remittance.sender {
            return Err(ContractError::Unauthorized);
        }

        if env.ledger().sequence() <= remittance.deadline {
            return Err(ContractError::DeadlineNotReached);
        }

        let amount = spend_remittance(&env, &mut remittance, RemittanceStatus::Refunded)?;

        let token_client = token::Client::new(&env, &config.token);
        token_client.transfer(&env.current_contract_address(), &caller, &amount);

        emit_refund(&env, key.clone(), caller.clone(), amount);

        log_refund(&env, &key, &caller, amount);

        Ok(amount)
    }

    pub fn get_remittance(env: Env, key: BytesN<32>) -> Result<Remittance, ContractError> {
        get_remittance(&env, &key)
    }

    pub fn is_key_active(env: Env, key: BytesN<32>) -> bool {
        find_active_remittance(&env, &key).is_some()
    }

    pub fn is_key_used(env: Env, key: BytesN<32>) -> bool {
        has_remittance(&env, &key)
    }

    pub fn get_total_held(env: Env) -> Result<i128, ContractError> {
        get_total_held(&env)
    }

    // Commission

    /// Pays the whole accrued commission to the admin. An empty balance is a
    /// successful no-op that still emits the event.
    pub fn withdraw_commission(env: Env, caller: Address) -> Result<i128, ContractError> {
        let config = get_config(&env)?;
        require_admin(&config, &caller)?;
        require_active(&config)?;

        let accrued = take_all(&env)?;
        if accrued > 0 {
            let token_client = token::Client::new(&env, &config.token);
            token_client.transfer(&env.current_contract_address(), &config.admin, &accrued);
        }

        emit_commission_withdraw(&env, config.admin.clone(), accrued);

        log_withdraw_commission(&env, &config.admin, accrued);

        Ok(accrued)
    }

    pub fn get_commission_balance(env: Env) -> Result<i128, ContractError> {
        get_commission_balance(&env)
    }

    // Pause gate

    pub fn stop(env: Env, caller: Address) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        require_admin(&config, &caller)?;

        if !config.active {
            return Err(ContractError::AlreadyStopped);
        }

        config.active = false;
        set_config(&env, &config);
        emit_stopped(&env, caller);

        log_pause_state(&env, false);

        Ok(())
    }

    pub fn resume(env: Env, caller: Address) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        require_admin(&config, &caller)?;

        if config.active {
            return Err(ContractError::AlreadyActive);
        }

        config.active = true;
        set_config(&env, &config);
        emit_resumed(&env, caller);

        log_pause_state(&env, true);

        Ok(())
    }

    pub fn is_active(env: Env) -> Result<bool, ContractError> {
        Ok(get_config(&env)?.active)
    }

    // Admin configuration

    pub fn set_duration_limit(env: Env, caller: Address, limit: u32) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        require_admin(&config, &caller)?;

        config.duration_limit = limit;
        set_config(&env, &config);
        emit_duration_limit_set(&env, caller, limit);

        log_config_update(&env, symbol_short!("dur_limit"), limit);

        Ok(())
    }

    pub fn set_commission_rate(env: Env, caller: Address, bps: u32) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        require_admin(&config, &caller)?;
        validate_commission_bps(bps)?;

        config.commission_bps = bps;
        set_config(&env, &config);
        emit_commission_rate_set(&env, caller, bps);

        log_config_update(&env, symbol_short!("comm_bps"), bps);

        Ok(())
    }

    pub fn set_registered_receiver(
        env: Env,
        caller: Address,
        receiver: Option<Address>,
    ) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        require_admin(&config, &caller)?;

        let old = core::mem::replace(&mut config.registered_receiver, receiver.clone());
        set_config(&env, &config);
        emit_registered_receiver_set(&env, caller, old, receiver);

        Ok(())
    }

    pub fn set_key_reuse_policy(
        env: Env,
        caller: Address,
        policy: KeyReusePolicy,
    ) -> Result<(), ContractError> {
        let mut config = get_config(&env)?;
        require_admin(&config, &caller)?;

        config.key_reuse = policy;
        set_config(&env, &config);
        emit_key_reuse_policy_set(&env, caller, policy);

        Ok(())
    }

    pub fn get_config(env: Env) -> Result<Config, ContractError> {
        get_config(&env)
    }

    pub fn get_admin(env: Env) -> Result<Address, ContractError> {
        Ok(get_config(&env)?.admin)
    }

    pub fn get_token(env: Env) -> Result<Address, ContractError> {
        Ok(get_config(&env)?.token)
    }

    pub fn get_duration_limit(env: Env) -> Result<u32, ContractError> {
        Ok(get_config(&env)?.duration_limit)
    }

    pub fn get_commission_rate(env: Env) -> Result<u32, ContractError> {
        Ok(get_config(&env)?.commission_bps)
    }

    pub fn get_registered_receiver(env: Env) -> Result<Option<Address>, ContractError> {
        Ok(get_config(&env)?.registered_receiver)
    }

    pub fn get_key_reuse_policy(env: Env) -> Result<KeyReusePolicy, ContractError> {
        Ok(get_config(&env)?.key_reuse)
    }

    // Commitment helpers

    pub fn derive_secret(env: Env, factor1: Bytes, factor2: Bytes) -> BytesN<32> {
        derive_secret(&env, &factor1, &factor2)
    }

    pub fn derive_key(env: Env, receiver: Address, secret: BytesN<32>) -> BytesN<32> {
        derive_key(&env, &receiver, &secret)
    }

    pub fn derive_direct_key(
        env: Env,
        sender: Address,
        receiver: Address,
        factor1: Bytes,
        factor2: Bytes,
    ) -> BytesN<32> {
        derive_direct_key(&env, &sender, &receiver, &factor1, &factor2)
    }

    // Balances

    pub fn balance_of(env: Env, account: Address) -> Result<i128, ContractError> {
        let config = get_config(&env)?;
        Ok(token::Client::new(&env, &config.token).balance(&account))
    }

    pub fn contract_balance(env: Env) -> Result<i128, ContractError> {
        let config = get_config(&env)?;
        Ok(token::Client::new(&env, &config.token).balance(&env.current_contract_address()))
    }
}
