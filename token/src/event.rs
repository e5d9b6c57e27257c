use soroban_sdk::{symbol_short, Address, Env, U256};

#[derive(Clone)]
pub struct Events(Env);

impl Events {
    #[inline(always)]
    pub fn env(&self) -> &Env {
        &self.0
    }

    #[inline(always)]
    pub fn new(env: &Env) -> Events {
        Events(env.clone())
    }

    // topics: ["transfer", from: Address, to: Address]
    // body:   amount: U256
    // Minted funds come from the null account.
    pub fn transfer(&self, from: Address, to: Address, amount: U256) {
        self.env()
            .events()
            .publish((symbol_short!("transfer"), from, to), amount)
    }

    // topics: ["approve", owner: Address, spender: Address]
    // body:   allowance: U256, the new total rather than the delta
    pub fn approve(&self, owner: Address, spender: Address, allowance: U256) {
        self.env()
            .events()
            .publish((symbol_short!("approve"), owner, spender), allowance)
    }
}
