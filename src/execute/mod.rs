//! Contains all execution routes used by the [contract file](crate::contract).

/// Binds a new ledger state type to a verification contract.
pub mod add_state_contract_binding;
/// Removes the verification contract binding of a ledger state type.
pub mod delete_state_contract_binding;
/// Produces an asset instance property set event.
pub mod set_asset_instance_property;
/// Rebinds a ledger state type to a different verification contract.
pub mod update_state_contract_binding;
