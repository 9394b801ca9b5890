use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::replace_state_contract_binding;
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct UpdateStateContractBindingV1 {
    pub binding: StateContractBinding,
}
impl UpdateStateContractBindingV1 {
    pub fn new(binding: StateContractBinding) -> Self {
        UpdateStateContractBindingV1 { binding }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<UpdateStateContractBindingV1> {
        match msg {
            ExecuteMsg::UpdateStateContractBinding { binding } => {
                UpdateStateContractBindingV1::new(binding).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::UpdateStateContractBinding".to_string(),
            }
            .to_err(),
        }
    }
}

/// Rebinds an already-bound ledger state type to a different verification contract.  Only the
/// contract admin may update bindings.
pub fn update_state_contract_binding(
    deps: DepsMutC,
    info: MessageInfo,
    msg: UpdateStateContractBindingV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    replace_state_contract_binding(deps.storage, &msg.binding)?;
    Response::new()
        .add_attributes(EventAttributes::for_binding(
            EventType::UpdateStateContractBinding,
            &msg.binding,
        ))
        .to_ok()
}
