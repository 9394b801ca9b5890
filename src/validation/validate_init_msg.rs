use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::AssetResult;
use crate::util::functions::{distinct_count_by_property, is_blank};
use crate::util::traits::ResultExtensions;

pub fn validate_init_msg(msg: &InitMsg) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if is_blank(&msg.base_contract_name) {
        invalid_fields.push("base_contract_name: must not be blank".to_string());
    }
    if distinct_count_by_property(&msg.state_contract_bindings, |binding| &binding.state_type)
        != msg.state_contract_bindings.len()
    {
        invalid_fields.push(
            "state_contract_bindings: each binding must specify a unique state type".to_string(),
        );
    }
    let mut binding_messages = msg
        .state_contract_bindings
        .iter()
        .flat_map(validate_state_contract_binding_internal)
        .collect::<Vec<String>>();
    invalid_fields.append(&mut binding_messages);
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: "Instantiate".to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

/// Produces a message for each invalid field of the binding.  An empty result indicates a valid
/// binding.
pub fn validate_state_contract_binding_internal(binding: &StateContractBinding) -> Vec<String> {
    let mut invalid_fields: Vec<String> = vec![];
    if is_blank(&binding.state_type) {
        invalid_fields.push("state_contract_binding:state_type: must not be blank".to_string());
    }
    if is_blank(&binding.contract_id) {
        invalid_fields.push("state_contract_binding:contract_id: must not be blank".to_string());
    }
    invalid_fields
}
