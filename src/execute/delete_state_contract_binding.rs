use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::delete_state_contract_binding as delete_binding_from_storage;
use crate::util::aliases::{AssetResult, DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::{check_admin_only, check_funds_are_empty};
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct DeleteStateContractBindingV1 {
    pub state_type: String,
}
impl DeleteStateContractBindingV1 {
    pub fn new<S: Into<String>>(state_type: S) -> Self {
        DeleteStateContractBindingV1 {
            state_type: state_type.into(),
        }
    }

    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<DeleteStateContractBindingV1> {
        match msg {
            ExecuteMsg::DeleteStateContractBinding { state_type } => {
                DeleteStateContractBindingV1::new(state_type).to_ok()
            }
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::DeleteStateContractBinding".to_string(),
            }
            .to_err(),
        }
    }
}

/// Removes the binding for a ledger state type.  Once removed, the contract refuses to produce
/// states of that type until a new binding is added.
pub fn delete_state_contract_binding(
    deps: DepsMutC,
    info: MessageInfo,
    msg: DeleteStateContractBindingV1,
) -> EntryPointResponse {
    check_admin_only(&deps.as_ref(), &info)?;
    check_funds_are_empty(&info)?;
    let deleted_binding = delete_binding_from_storage(deps.storage, &msg.state_type)?;
    Response::new()
        .add_attributes(EventAttributes::for_binding(
            EventType::DeleteStateContractBinding,
            &deleted_binding,
        ))
        .to_ok()
}
