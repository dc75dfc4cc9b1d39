use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum ConsentError {
    // Initialization errors
    AlreadyInitialized = 1,
    NotInitialized = 2,

    // Authorization errors
    MissingAdminRole = 10,
    MissingOperatorRole = 11,
    MissingRevokerRole = 12,
    BadConfirmation = 13,

    // State invariant violations
    InvalidCommitment = 20,
    ConsentNotFound = 21,
    ConsentAlreadyRevoked = 22,

    // Reentrancy
    ReentrantCall = 30,

    // Reward errors
    RewardsNotConfigured = 40,
    InvalidAmount = 41,
}
