use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ContractError {
    AlreadyInitialized = 1,
    NotInitialized = 2,
    Unauthorized = 3,
    InvalidDuration = 4,
    InvalidCommissionRate = 5,
    ZeroValueDeposit = 6,
    /// The key already hosts a record the reuse policy does not allow replacing.
    DuplicateKey = 7,
    InactiveRemittance = 8,
    DeadlinePassed = 9,
    DeadlineNotReached = 10,
    SystemPaused = 11,
    AlreadyStopped = 12,
    AlreadyActive = 13,
    ReceiverNotRegistered = 14,
    Overflow = 15,
    RemittanceNotFound = 16,
}
