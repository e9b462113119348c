use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    AlreadyInitialized = 300,
    NotInitialized = 301,
    NegativeAmount = 302,
    InsufficientBalance = 303,
    InsufficientAllowance = 304,
    ZeroAddress = 305,
    InvalidExpiration = 306,
    Overflow = 307,
}
