//! Fungible token ledger with 256-bit balances.
//!
//! Every mutating call validates its inputs before the first storage write,
//! so a failed call leaves balances, allowances and total supply untouched.
//! The ledger keeps `total_supply == sum(balances)` at all times.
use crate::account::{null_account, require_valid_recipient, require_valid_spender};
use crate::admin::{get_admin, set_admin};
use crate::allowance::{
    decreased_allowance, increased_allowance, read_allowance, remaining_allowance,
    write_allowance,
};
use crate::balance::{
    mint_balance, move_balance, read_balance, read_total_supply, require_balance,
    write_total_supply,
};
use crate::errors::TokenError;
use crate::event::Events;
use crate::interface::TokenInterface;
use crate::metadata::{read_decimal, read_name, read_symbol, write_metadata};
use soroban_sdk::{contract, contractimpl, log, panic_with_error, Address, Env, String, U256};
use utils::bump::bump_instance;

fn mint_to(e: &Env, to: &Address, amount: &U256) -> Result<(), TokenError> {
    require_valid_recipient(e, to)?;
    mint_balance(e, to, amount)?;
    Events::new(e).transfer(null_account(e), to.clone(), amount.clone());
    Ok(())
}

// Unconditional balance movement, allowance is not looked at.
fn transfer_balance(
    e: &Env,
    from: &Address,
    to: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    require_valid_recipient(e, to)?;
    move_balance(e, from, to, amount)?;
    Events::new(e).transfer(from.clone(), to.clone(), amount.clone());
    Ok(())
}

// Stores the new allowance and announces it. The spender must already be validated.
fn write_approval(e: &Env, owner: &Address, spender: &Address, amount: &U256) {
    write_allowance(e, owner, spender, amount);
    Events::new(e).approve(owner.clone(), spender.clone(), amount.clone());
}

fn approve_internal(
    e: &Env,
    owner: &Address,
    spender: &Address,
    amount: &U256,
) -> Result<(), TokenError> {
    require_valid_spender(e, spender)?;
    write_approval(e, owner, spender, amount);
    Ok(())
}

#[contract]
pub struct TokenLedger;

#[contractimpl]
impl TokenLedger {
    // Deploys the token. Metadata is fixed from here on.
    //
    // # Arguments
    //
    // * `admin` - Address allowed to call `mint` and `transfer_internal`.
    // * `name` - Token name.
    // * `symbol` - Token symbol.
    // * `initial_holder` - Optional recipient of the initial supply.
    // * `initial_supply` - Amount minted to `initial_holder`. Must be zero without a holder.
    pub fn __constructor(
        e: Env,
        admin: Address,
        name: String,
        symbol: String,
        initial_holder: Option<Address>,
        initial_supply: U256,
    ) {
        set_admin(&e, &admin);
        write_metadata(&e, name, symbol);
        write_total_supply(&e, &U256::from_u32(&e, 0));

        let result = match initial_holder {
            Some(holder) => mint_to(&e, &holder, &initial_supply),
            None if initial_supply > U256::from_u32(&e, 0) => {
                log!(&e, "initial supply without a holder", initial_supply);
                Err(TokenError::InvalidRecipient)
            }
            None => Ok(()),
        };
        if let Err(error) = result {
            panic_with_error!(&e, error);
        }
    }

    pub fn mint(e: Env, to: Address, amount: U256) -> Result<(), TokenError> {
        get_admin(&e).require_auth();
        mint_to(&e, &to, &amount)
    }

    // Moves funds on behalf of `from` without consuming any allowance.
    pub fn transfer_internal(
        e: Env,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        get_admin(&e).require_auth();
        transfer_balance(&e, &from, &to, &amount)
    }
}

#[contractimpl]
impl TokenInterface for TokenLedger {
    fn name(e: Env) -> String {
        read_name(&e)
    }

    fn symbol(e: Env) -> String {
        read_symbol(&e)
    }

    fn decimals(e: Env) -> u32 {
        read_decimal(&e)
    }

    fn total_supply(e: Env) -> U256 {
        read_total_supply(&e)
    }

    fn balance_of(e: Env, account: Address) -> U256 {
        bump_instance(&e);
        read_balance(&e, &account)
    }

    fn allowance(e: Env, owner: Address, spender: Address) -> U256 {
        bump_instance(&e);
        read_allowance(&e, &owner, &spender)
    }

    fn transfer(e: Env, caller: Address, to: Address, amount: U256) -> Result<(), TokenError> {
        caller.require_auth();
        transfer_balance(&e, &caller, &to, &amount)
    }

    fn approve(e: Env, caller: Address, spender: Address, amount: U256) -> Result<(), TokenError> {
        caller.require_auth();
        approve_internal(&e, &caller, &spender, &amount)
    }

    fn increase_allowance(
        e: Env,
        caller: Address,
        spender: Address,
        added_amount: U256,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        require_valid_spender(&e, &spender)?;
        let allowance = increased_allowance(&e, &caller, &spender, &added_amount)?;
        write_approval(&e, &caller, &spender, &allowance);
        Ok(())
    }

    fn decrease_allowance(
        e: Env,
        caller: Address,
        spender: Address,
        subtracted_amount: U256,
    ) -> Result<(), TokenError> {
        caller.require_auth();
        require_valid_spender(&e, &spender)?;
        let allowance = decreased_allowance(&e, &caller, &spender, &subtracted_amount)?;
        write_approval(&e, &caller, &spender, &allowance);
        Ok(())
    }

    fn transfer_from(
        e: Env,
        spender: Address,
        owner: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError> {
        spender.require_auth();

        let allowance = remaining_allowance(&e, &owner, &spender, &amount)?;
        require_balance(&e, &owner, &amount)?;
        require_valid_recipient(&e, &to)?;

        move_balance(&e, &owner, &to, &amount)?;
        // consumed silently, no approve event
        write_allowance(&e, &owner, &spender, &allowance);
        Events::new(&e).transfer(owner, to, amount);
        Ok(())
    }
}
