use crate::storage_types::DataKey;
use soroban_sdk::{Env, String};
use soroban_token_sdk::metadata::TokenMetadata;
use utils::generate_instance_storage_getter_and_setter;

pub const DECIMALS: u32 = 18;

generate_instance_storage_getter_and_setter!(metadata, DataKey::Metadata, TokenMetadata);

pub fn write_metadata(e: &Env, name: String, symbol: String) {
    set_metadata(
        e,
        &TokenMetadata {
            decimal: DECIMALS,
            name,
            symbol,
        },
    )
}

pub fn read_decimal(e: &Env) -> u32 {
    get_metadata(e).decimal
}

pub fn read_name(e: &Env) -> String {
    get_metadata(e).name
}

pub fn read_symbol(e: &Env) -> String {
    get_metadata(e).symbol
}
