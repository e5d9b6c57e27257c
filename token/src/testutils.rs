#![cfg(test)]

use crate::{TokenLedger, TokenLedgerClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String, U256};

pub const ZERO_ADDRESS: &str = "GAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAAWHF";

pub fn amount(e: &Env, value: u128) -> U256 {
    U256::from_u128(e, value)
}

pub fn zero_address(e: &Env) -> Address {
    Address::from_string(&String::from_str(e, ZERO_ADDRESS))
}

pub fn create_token<'a>(
    e: &Env,
    admin: &Address,
    initial_holder: &Option<Address>,
    initial_supply: &U256,
) -> TokenLedgerClient<'a> {
    TokenLedgerClient::new(
        e,
        &e.register(
            TokenLedger {},
            (
                admin.clone(),
                String::from_str(e, "YoloToken"),
                String::from_str(e, "YOLO"),
                initial_holder.clone(),
                initial_supply.clone(),
            ),
        ),
    )
}

pub(crate) struct Setup<'a> {
    pub(crate) env: Env,

    pub(crate) admin: Address,
    pub(crate) owner: Address,
    pub(crate) other_account: Address,
    pub(crate) addr1: Address,
    pub(crate) addr2: Address,
    pub(crate) token: TokenLedgerClient<'a>,
}

impl Setup<'_> {
    // Token deployed with `initial_supply` minted to `owner`
    pub(crate) fn with_initial_supply(initial_supply: u128) -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let owner = Address::generate(&env);
        let other_account = Address::generate(&env);
        let addr1 = Address::generate(&env);
        let addr2 = Address::generate(&env);
        let token = create_token(
            &env,
            &admin,
            &Some(owner.clone()),
            &amount(&env, initial_supply),
        );

        Setup {
            env,
            admin,
            owner,
            other_account,
            addr1,
            addr2,
            token,
        }
    }

    pub(crate) fn amount(&self, value: u128) -> U256 {
        amount(&self.env, value)
    }

    pub(crate) fn balance(&self, account: &Address) -> u128 {
        self.token.balance_of(account).to_u128().unwrap()
    }

    pub(crate) fn allowance(&self, owner: &Address, spender: &Address) -> u128 {
        self.token.allowance(owner, spender).to_u128().unwrap()
    }

    // Total supply must equal the sum of every balance the test touched
    pub(crate) fn assert_supply_invariant(&self) {
        let mut sum = self.amount(0);
        for account in [
            &self.admin,
            &self.owner,
            &self.other_account,
            &self.addr1,
            &self.addr2,
        ] {
            sum = sum.add(&self.token.balance_of(account));
        }
        assert_eq!(self.token.total_supply(), sum);
    }
}

impl Default for Setup<'_> {
    // Fresh token without initial supply, every auth mocked
    fn default() -> Self {
        let env = Env::default();
        env.mock_all_auths();
        env.cost_estimate().budget().reset_unlimited();

        let admin = Address::generate(&env);
        let owner = Address::generate(&env);
        let other_account = Address::generate(&env);
        let addr1 = Address::generate(&env);
        let addr2 = Address::generate(&env);
        let token = create_token(&env, &admin, &None, &amount(&env, 0));

        Setup {
            env,
            admin,
            owner,
            other_account,
            addr1,
            addr2,
            token,
        }
    }
}
