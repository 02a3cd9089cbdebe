use soroban_sdk::{contracttype, Address, BytesN};

#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RemittanceStatus {
    Active,
    Withdrawn,
    Refunded,
}

/// Whether a key that has already been spent may host a new deposit.
#[contracttype]
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KeyReusePolicy {
    SingleUse,
    /// A spent key may host a new deposit. The new record overwrites the
    /// spent one in storage; the earlier `withdraw`/`refund` event is the only
    /// remaining trace of it.
    ReuseAfterSpent,
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Remittance {
    pub key: BytesN<32>,
    pub sender: Address,
    pub receiver: Address,
    pub balance: i128,
    pub commission: i128,
    pub deadline: u32,
    pub created_at: u32,
    pub status: RemittanceStatus,
}

impl Remittance {
    pub fn is_active(&self) -> bool {
        self.status == RemittanceStatus::Active
    }
}

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    pub admin: Address,
    pub token: Address,
    pub duration_limit: u32,
    pub commission_bps: u32,
    pub registered_receiver: Option<Address>,
    pub active: bool,
    pub key_reuse: KeyReusePolicy,
    /// Lets the original sender claim through `withdraw` once the deadline has passed.
    pub sender_withdraw_after_expiry: bool,
}
