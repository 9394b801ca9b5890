//! Contains the functionality used in the [contract file](crate::contract) to perform a contract query.

pub mod query_state;
pub mod query_state_contract_binding;
pub mod query_state_contract_bindings;
pub mod query_version;
