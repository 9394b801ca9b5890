use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::asset_event_state::LedgerState;

/// Associates a ledger state type with the identifier of the verification rule set that governs
/// which transactions may produce or consume it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct StateContractBinding {
    /// The [STATE_TYPE](super::asset_event_state::LedgerState::STATE_TYPE) of the bound state.
    pub state_type: String,
    /// An identifier for the rule set, resolved by the surrounding platform.
    pub contract_id: String,
}
impl StateContractBinding {
    pub fn new<S1: Into<String>, S2: Into<String>>(state_type: S1, contract_id: S2) -> Self {
        Self {
            state_type: state_type.into(),
            contract_id: contract_id.into(),
        }
    }

    /// Creates a binding for the state type declared by `T`.
    ///
    /// # Examples
    /// ```
    /// use asset_trail_smart_contract::core::types::asset_instance_property_set::AssetInstancePropertySet;
    /// use asset_trail_smart_contract::core::types::state_contract_binding::StateContractBinding;
    ///
    /// let binding = StateContractBinding::for_state::<AssetInstancePropertySet, _>("asset-trail-v1");
    /// assert_eq!("asset_instance_property_set", binding.state_type);
    /// assert_eq!("asset-trail-v1", binding.contract_id);
    /// ```
    pub fn for_state<T: LedgerState, S: Into<String>>(contract_id: S) -> Self {
        Self::new(T::STATE_TYPE, contract_id)
    }
}
