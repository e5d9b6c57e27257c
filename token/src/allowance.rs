use crate::errors::TokenError;
use crate::storage_types::{AllowanceDataKey, DataKey};
use soroban_sdk::{log, Address, Env, U256};
use utils::bump::bump_persistent;
use utils::u256_math::CheckedMath;

fn allowance_key(from: &Address, spender: &Address) -> DataKey {
    DataKey::Allowance(AllowanceDataKey {
        from: from.clone(),
        spender: spender.clone(),
    })
}

pub fn read_allowance(e: &Env, from: &Address, spender: &Address) -> U256 {
    let key = allowance_key(from, spender);
    match e.storage().persistent().get::<DataKey, U256>(&key) {
        Some(allowance) => {
            bump_persistent(e, &key);
            allowance
        }
        None => U256::from_u32(e, 0),
    }
}

pub fn write_allowance(e: &Env, from: &Address, spender: &Address, amount: &U256) {
    let key = allowance_key(from, spender);
    e.storage().persistent().set(&key, amount);
    bump_persistent(e, &key);
}

pub fn increased_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    added: &U256,
) -> Result<U256, TokenError> {
    read_allowance(e, from, spender)
        .safe_add(added)
        .ok_or(TokenError::Overflow)
}

pub fn decreased_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    subtracted: &U256,
) -> Result<U256, TokenError> {
    let allowance = read_allowance(e, from, spender);
    match allowance.safe_sub(subtracted) {
        Some(value) => Ok(value),
        None => {
            log!(e, "allowance underflow", allowance, subtracted.clone());
            Err(TokenError::AllowanceUnderflow)
        }
    }
}

// Remaining allowance after spending `amount`. Nothing is written here,
// the caller stores it once the balance movement succeeded.
pub fn remaining_allowance(
    e: &Env,
    from: &Address,
    spender: &Address,
    amount: &U256,
) -> Result<U256, TokenError> {
    let allowance = read_allowance(e, from, spender);
    match allowance.safe_sub(amount) {
        Some(value) => Ok(value),
        None => {
            log!(e, "insufficient allowance", allowance, amount.clone());
            Err(TokenError::InsufficientAllowance)
        }
    }
}
