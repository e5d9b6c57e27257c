use crate::errors::TokenError;
use soroban_sdk::{Address, Env, String, U256};

pub trait TokenInterface {
    fn name(e: Env) -> String;

    fn symbol(e: Env) -> String;

    fn decimals(e: Env) -> u32;

    fn total_supply(e: Env) -> U256;

    fn balance_of(e: Env, account: Address) -> U256;

    fn allowance(e: Env, owner: Address, spender: Address) -> U256;

    // Caller moves its own funds. No allowance involved.
    fn transfer(e: Env, caller: Address, to: Address, amount: U256) -> Result<(), TokenError>;

    // Overwrites the previous allowance, it does not add to it.
    fn approve(e: Env, caller: Address, spender: Address, amount: U256) -> Result<(), TokenError>;

    fn increase_allowance(
        e: Env,
        caller: Address,
        spender: Address,
        added_amount: U256,
    ) -> Result<(), TokenError>;

    fn decrease_allowance(
        e: Env,
        caller: Address,
        spender: Address,
        subtracted_amount: U256,
    ) -> Result<(), TokenError>;

    // Spends `amount` of the allowance granted by `owner` to `spender`.
    fn transfer_from(
        e: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError>;
}
