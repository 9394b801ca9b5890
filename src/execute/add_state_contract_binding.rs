use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::insert_state_contract_binding;
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct AddStateContractBindingV1 {
    pub binding: StateContractBinding,
}
impl AddStateContractBindingV1 {
    pub fn new(binding: StateContractBinding) -> Self {
        AddStateContractBindingV1 { binding }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<AddStateContractBindingV1> {
        match msg {
            ExecuteMsg::AddStateContractBinding { binding } => {
                AddStateContractBindingV1::new(binding).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::AddStateContractBinding".to_string(),
            }
            .to_err(),
        }
    }
}

/// Binds a ledger state type that the contract has not yet bound to a verification contract.
/// Only the contract admin may add bindings.
pub fn add_state_contract_binding(
    deps: DepsMutC,
    info: MessageInfo,
    msg: AddStateContractBindingV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    insert_state_contract_binding(deps.storage, &msg.binding)?;
    Response::new()
        .add_attributes(EventAttributes::for_binding(
            EventType::AddStateContractBinding,
            &msg.binding,
        ))
        .to_ok()
}
