use crate::errors::TokenError;
use crate::storage_types::DataKey;
use soroban_sdk::{log, Address, Env, U256};
use utils::bump::{bump_instance, bump_persistent};
use utils::u256_math::CheckedMath;

fn write_balance(e: &Env, addr: &Address, amount: &U256) {
    let key = DataKey::Balance(addr.clone());
    e.storage().persistent().set(&key, amount);
    bump_persistent(e, &key);
}

pub fn read_balance(e: &Env, addr: &Address) -> U256 {
    let key = DataKey::Balance(addr.clone());
    match e.storage().persistent().get::<DataKey, U256>(&key) {
        Some(balance) => {
            bump_persistent(e, &key);
            balance
        }
        None => U256::from_u32(e, 0),
    }
}

pub fn write_total_supply(e: &Env, amount: &U256) {
    bump_instance(e);
    e.storage().instance().set(&DataKey::TotalSupply, amount);
}

pub fn read_total_supply(e: &Env) -> U256 {
    bump_instance(e);
    e.storage()
        .instance()
        .get(&DataKey::TotalSupply)
        .unwrap_or(U256::from_u32(e, 0))
}

pub fn require_balance(e: &Env, addr: &Address, amount: &U256) -> Result<U256, TokenError> {
    let balance = read_balance(e, addr);
    if &balance < amount {
        log!(e, "insufficient balance", addr.clone(), balance, amount.clone());
        return Err(TokenError::InsufficientBalance);
    }
    Ok(balance)
}

// Credits new supply. Both sums are computed before anything is written.
pub fn mint_balance(e: &Env, to: &Address, amount: &U256) -> Result<(), TokenError> {
    let new_balance = read_balance(e, to)
        .safe_add(amount)
        .ok_or(TokenError::Overflow)?;
    let new_supply = read_total_supply(e)
        .safe_add(amount)
        .ok_or(TokenError::Overflow)?;

    write_balance(e, to, &new_balance);
    write_total_supply(e, &new_supply);
    Ok(())
}

pub fn move_balance(
    e: &Env,
    from: &Address,
    to: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    let from_balance = require_balance(e, from, amount)?;
    if from == to {
        // net effect is zero, only make sure the entry exists
        write_balance(e, from, &from_balance);
        return Ok(());
    }

    let new_to_balance = read_balance(e, to)
        .safe_add(amount)
        .ok_or(TokenError::Overflow)?;

    write_balance(e, from, &from_balance.sub(amount));
    write_balance(e, to, &new_to_balance);
    Ok(())
}
