#![no_std]

mod account;
mod admin;
mod allowance;
mod balance;
mod contract;
mod errors;
mod event;
mod interface;
mod metadata;
mod storage_types;
mod testutils;

pub use crate::contract::{TokenLedger, TokenLedgerArgs, TokenLedgerClient};
pub use crate::errors::TokenError;
pub use crate::interface::TokenInterface;
pub use crate::metadata::DECIMALS;
