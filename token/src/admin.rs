use crate::storage_types::DataKey;
use soroban_sdk::{Address, Env};
use utils::generate_instance_storage_getter_and_setter;

// The only address allowed to mint and to move funds without an allowance.
generate_instance_storage_getter_and_setter!(admin, DataKey::Admin, Address);
