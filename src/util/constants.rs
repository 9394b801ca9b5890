// Execution output attributes.  All should be prefixed with "asset_" to make them easy to
// discern when observed in the event stream

//////////////////////////////////////////
// Property set event output attributes //
//////////////////////////////////////////

/// Value = The asset definition (schema/type) identifier of the tracked asset (String)
pub const ASSET_DEFINITION_ID_KEY: &str = "asset_definition_id";
/// Value = The identifier of the specific tracked asset instance (String)
pub const ASSET_INSTANCE_ID_KEY: &str = "asset_instance_id";
/// Value = The bech32 address of the party that authored the event (String)
pub const ASSET_AUTHOR_ADDRESS_KEY: &str = "asset_author_address";
/// Value = The display name of the party that authored the event (String)
pub const ASSET_AUTHOR_NAME_KEY: &str = "asset_author_name";
/// Value = The name of the property that was set (String)
pub const ASSET_PROPERTY_KEY_KEY: &str = "asset_property_key";
/// Value = The value that the property was set to (String)
pub const ASSET_PROPERTY_VALUE_KEY: &str = "asset_property_value";
/// Value = A JSON array of participant bech32 addresses, in the order they were provided (String)
pub const ASSET_PARTICIPANTS_KEY: &str = "asset_participants";

//////////////////////////////////////////////
// State contract binding output attributes //
//////////////////////////////////////////////

/// Value = The ledger state type that a binding refers to (String)
pub const ASSET_STATE_TYPE_KEY: &str = "asset_state_type";
/// Value = The verification rule set identifier bound to a state type (String)
pub const ASSET_CONTRACT_ID_KEY: &str = "asset_contract_id";

//////////////////////////////
// Shared output attributes //
//////////////////////////////

/// Value = Event Type correlating to EvenType enum into String values (String)
pub const ASSET_EVENT_TYPE_KEY: &str = "asset_event_type";
/// Value = Any new value being changed that can be coerced to a string target. Dynamic to be used on various routes (String)
pub const NEW_VALUE_KEY: &str = "asset_new_value";
