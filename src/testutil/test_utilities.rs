use cosmwasm_std::testing::{mock_env, mock_info};
use cosmwasm_std::{Addr, Env, MessageInfo, Response};
use provwasm_std::ProvenanceMsg;

use crate::contract::instantiate;
use crate::core::msg::{ExecuteMsg, InitMsg};
use crate::core::types::asset_instance_property_set::AssetInstancePropertySet;
use crate::core::types::party::{Party, PartyInput};
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::{DepsMutC, EntryPointResponse};

use super::test_constants::{
    DEFAULT_ADMIN_ADDRESS, DEFAULT_ALICE_ADDRESS, DEFAULT_ALICE_NAME,
    DEFAULT_ASSET_DEFINITION_ID, DEFAULT_ASSET_INSTANCE_ID, DEFAULT_BOB_ADDRESS,
    DEFAULT_BOB_NAME, DEFAULT_CONTRACT_BASE_NAME, DEFAULT_CONTRACT_ID, DEFAULT_PROPERTY_KEY,
    DEFAULT_PROPERTY_VALUE,
};

pub fn get_alice() -> Party {
    Party::new(DEFAULT_ALICE_NAME, Addr::unchecked(DEFAULT_ALICE_ADDRESS))
}

pub fn get_bob() -> Party {
    Party::new(DEFAULT_BOB_NAME, Addr::unchecked(DEFAULT_BOB_ADDRESS))
}

pub fn get_default_state_contract_binding() -> StateContractBinding {
    StateContractBinding::for_state::<AssetInstancePropertySet, _>(DEFAULT_CONTRACT_ID)
}

pub fn get_default_state_contract_bindings() -> Vec<StateContractBinding> {
    vec![get_default_state_contract_binding()]
}

/// Alice sets the color of the default asset instance to red, sharing the event with Bob.  Must
/// be sent by DEFAULT_ALICE_ADDRESS to keep the author consistent with the participants.
pub fn get_default_set_property_msg() -> ExecuteMsg {
    ExecuteMsg::SetAssetInstanceProperty {
        asset_definition_id: DEFAULT_ASSET_DEFINITION_ID.to_string(),
        asset_instance_id: DEFAULT_ASSET_INSTANCE_ID.to_string(),
        author_name: DEFAULT_ALICE_NAME.to_string(),
        key: DEFAULT_PROPERTY_KEY.to_string(),
        value: DEFAULT_PROPERTY_VALUE.to_string(),
        participants: vec![
            PartyInput::new(DEFAULT_ALICE_NAME, DEFAULT_ALICE_ADDRESS),
            PartyInput::new(DEFAULT_BOB_NAME, DEFAULT_BOB_ADDRESS),
        ],
    }
}

pub struct InstArgs {
    pub env: Env,
    pub info: MessageInfo,
    pub base_contract_name: String,
    pub bind_base_name: bool,
    pub state_contract_bindings: Vec<StateContractBinding>,
}
impl Default for InstArgs {
    fn default() -> Self {
        InstArgs {
            env: mock_env(),
            info: mock_info(DEFAULT_ADMIN_ADDRESS, &[]),
            base_contract_name: DEFAULT_CONTRACT_BASE_NAME.into(),
            bind_base_name: true,
            state_contract_bindings: get_default_state_contract_bindings(),
        }
    }
}

pub fn test_instantiate(deps: DepsMutC, args: InstArgs) -> EntryPointResponse {
    instantiate(
        deps,
        args.env,
        args.info,
        InitMsg {
            base_contract_name: args.base_contract_name,
            bind_base_name: args.bind_base_name,
            state_contract_bindings: args.state_contract_bindings,
        },
    )
}

pub fn test_instantiate_success(deps: DepsMutC, args: InstArgs) -> Response<ProvenanceMsg> {
    test_instantiate(deps, args).expect("expected instantiation to succeed")
}

pub fn empty_mock_info<S: Into<String>>(sender: S) -> MessageInfo {
    mock_info(&sender.into(), &[])
}

pub fn single_attribute_for_key<'a, T>(response: &'a Response<T>, key: &'a str) -> &'a str {
    response
        .attributes
        .iter()
        .find(|attr| attr.key.as_str() == key)
        .unwrap()
        .value
        .as_str()
}
