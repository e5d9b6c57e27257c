use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum TokenError {
    InvalidRecipient = 701,
    InvalidSpender = 702,
    InsufficientBalance = 703,
    InsufficientAllowance = 704,
    AllowanceUnderflow = 705,
    Overflow = 706,
}
