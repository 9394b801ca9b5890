//! Contains all structs used to drive core functionality throughout the contract.

/// Defines the capabilities shared by every asset event recorded by the contract.
pub mod asset_event_state;
/// Defines the event emitted when a property of an asset instance is set.
pub mod asset_instance_property_set;
pub mod participants;
/// Defines ledger identities and the capability through which they are observed.
pub mod party;
pub mod state_contract_binding;
