use crate::errors::TokenError;
use soroban_sdk::{log, Address, Env, String};

// Strkeys of the all-zero ed25519 account and the all-zero contract id.
const NULL_ACCOUNT_STRKEY: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";
const NULL_CONTRACT_STRKEY: &str = "CAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAABSC4";

/// Reserved null account. Used as the source of minted funds.
pub fn null_account(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, NULL_ACCOUNT_STRKEY))
}

pub fn is_null_account(e: &Env, addr: &Address) -> bool {
    *addr == null_account(e)
        || *addr == Address::from_string(&String::from_str(e, NULL_CONTRACT_STRKEY))
}

pub fn require_valid_recipient(e: &Env, to: &Address) -> Result<(), TokenError> {
    if is_null_account(e, to) {
        log!(e, "null account can't receive funds");
        return Err(TokenError::InvalidRecipient);
    }
    Ok(())
}

pub fn require_valid_spender(e: &Env, spender: &Address) -> Result<(), TokenError> {
    if is_null_account(e, spender) {
        log!(e, "null account can't be a spender");
        return Err(TokenError::InvalidSpender);
    }
    Ok(())
}
