use crate::core::types::party::PartyInput;
use crate::core::types::state_contract_binding::StateContractBinding;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InitMsg {
    pub base_contract_name: String,
    pub bind_base_name: bool,
    pub state_contract_bindings: Vec<StateContractBinding>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Records that a property of an asset instance was set.  The transaction sender is always
    /// the author of the resulting event.
    SetAssetInstanceProperty {
        asset_definition_id: String,
        asset_instance_id: String,
        author_name: String,
        key: String,
        value: String,
        participants: Vec<PartyInput>,
    },
    AddStateContractBinding {
        binding: StateContractBinding,
    },
    UpdateStateContractBinding {
        binding: StateContractBinding,
    },
    DeleteStateContractBinding {
        state_type: String,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    QueryStateContractBinding { state_type: String },
    QueryStateContractBindings {},
    QueryState {},
    QueryVersion {},
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum MigrateMsg {
    ContractUpgrade {},
}
