use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::types::party::PartyInput;
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::AssetResult;
use crate::util::functions::{distinct_count_by_property, is_blank};
use crate::util::traits::ResultExtensions;

use super::validate_init_msg::validate_state_contract_binding_internal;

pub fn validate_execute_msg(msg: &ExecuteMsg) -> AssetResult<()> {
    match msg {
        ExecuteMsg::SetAssetInstanceProperty {
            asset_definition_id,
            asset_instance_id,
            author_name,
            key,
            value,
            participants,
        } => validate_set_asset_instance_property(
            asset_definition_id,
            asset_instance_id,
            author_name,
            key,
            value,
            participants,
        ),
        ExecuteMsg::AddStateContractBinding { binding } => {
            validate_binding_msg("ExecuteMsg::AddStateContractBinding", binding)
        }
        ExecuteMsg::UpdateStateContractBinding { binding } => {
            validate_binding_msg("ExecuteMsg::UpdateStateContractBinding", binding)
        }
        ExecuteMsg::DeleteStateContractBinding { state_type } => {
            validate_delete_state_contract_binding(state_type)
        }
    }
}

fn validate_set_asset_instance_property(
    asset_definition_id: &str,
    asset_instance_id: &str,
    author_name: &str,
    key: &str,
    value: &str,
    participants: &[PartyInput],
) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if is_blank(asset_definition_id) {
        invalid_fields.push("asset_definition_id: must not be blank".to_string());
    }
    if is_blank(asset_instance_id) {
        invalid_fields.push("asset_instance_id: must not be blank".to_string());
    }
    if is_blank(author_name) {
        invalid_fields.push("author_name: must not be blank".to_string());
    }
    if is_blank(key) {
        invalid_fields.push("key: must not be blank".to_string());
    }
    // Event attribute values cannot be empty on chain
    if value.is_empty() {
        invalid_fields.push("value: must not be empty".to_string());
    }
    if participants.iter().any(|party| is_blank(&party.name)) {
        invalid_fields.push("participants:name: must not be blank".to_string());
    }
    if participants.iter().any(|party| is_blank(&party.address)) {
        invalid_fields.push("participants:address: must not be blank".to_string());
    }
    // bech32 accepts an all-uppercase address, so one account has two spellings
    let participant_addresses = participants
        .iter()
        .map(|party| party.address.to_lowercase())
        .collect::<Vec<String>>();
    if distinct_count_by_property(&participant_addresses, |address| address)
        != participants.len()
    {
        invalid_fields
            .push("participants: each participant must specify a unique address".to_string());
    }
    to_validation_result("ExecuteMsg::SetAssetInstanceProperty", invalid_fields)
}

fn validate_binding_msg(message_type: &str, binding: &StateContractBinding) -> AssetResult<()> {
    to_validation_result(
        message_type,
        validate_state_contract_binding_internal(binding),
    )
}

fn validate_delete_state_contract_binding(state_type: &str) -> AssetResult<()> {
    let mut invalid_fields: Vec<String> = vec![];
    if is_blank(state_type) {
        invalid_fields.push("state_type: must not be blank".to_string());
    }
    to_validation_result("ExecuteMsg::DeleteStateContractBinding", invalid_fields)
}

fn to_validation_result(message_type: &str, invalid_fields: Vec<String>) -> AssetResult<()> {
    if !invalid_fields.is_empty() {
        ContractError::InvalidMessageFields {
            message_type: message_type.to_string(),
            invalid_fields,
        }
        .to_err()
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::core::error::ContractError;
    use crate::core::msg::ExecuteMsg;
    use crate::core::types::party::PartyInput;
    use crate::core::types::state_contract_binding::StateContractBinding;
    use crate::testutil::test_constants::{
        DEFAULT_ALICE_ADDRESS, DEFAULT_ALICE_NAME, DEFAULT_BOB_ADDRESS, DEFAULT_BOB_NAME,
    };
    use crate::testutil::test_utilities::{
        get_default_set_property_msg, get_default_state_contract_binding,
    };

    use super::validate_execute_msg;

    #[test]
    fn test_valid_set_asset_instance_property() {
        validate_execute_msg(&get_default_set_property_msg())
            .expect("the default set property msg should be valid");
    }

    #[test]
    fn test_valid_set_asset_instance_property_without_participants() {
        validate_execute_msg(&ExecuteMsg::SetAssetInstanceProperty {
            asset_definition_id: "defA".to_string(),
            asset_instance_id: "instB".to_string(),
            author_name: DEFAULT_ALICE_NAME.to_string(),
            key: "color".to_string(),
            value: "red".to_string(),
            participants: vec![],
        })
        .expect("an empty participant list should be allowed");
    }

    #[test]
    fn test_valid_set_asset_instance_property_whitespace_value() {
        validate_execute_msg(&ExecuteMsg::SetAssetInstanceProperty {
            asset_definition_id: "defA".to_string(),
            asset_instance_id: "instB".to_string(),
            author_name: DEFAULT_ALICE_NAME.to_string(),
            key: "note".to_string(),
            value: " ".to_string(),
            participants: vec![],
        })
        .expect("a value is only rejected when it is entirely empty");
    }

    #[test]
    fn test_invalid_set_asset_instance_property_blank_fields() {
        let msg = ExecuteMsg::SetAssetInstanceProperty {
            asset_definition_id: "".to_string(),
            asset_instance_id: " ".to_string(),
            author_name: "".to_string(),
            key: "\t".to_string(),
            value: "".to_string(),
            participants: vec![PartyInput::new(" ", "")],
        };
        let expected_messages = [
            "asset_definition_id: must not be blank",
            "asset_instance_id: must not be blank",
            "author_name: must not be blank",
            "key: must not be blank",
            "value: must not be empty",
            "participants:name: must not be blank",
            "participants:address: must not be blank",
        ];
        for expected_message in expected_messages.iter() {
            test_invalid_execute_msg(
                &msg,
                "ExecuteMsg::SetAssetInstanceProperty",
                expected_message,
            );
        }
    }

    #[test]
    fn test_invalid_set_asset_instance_property_duplicate_participants() {
        test_invalid_execute_msg(
            &ExecuteMsg::SetAssetInstanceProperty {
                asset_definition_id: "defA".to_string(),
                asset_instance_id: "instB".to_string(),
                author_name: DEFAULT_ALICE_NAME.to_string(),
                key: "color".to_string(),
                value: "red".to_string(),
                participants: vec![
                    PartyInput::new(DEFAULT_ALICE_NAME, DEFAULT_ALICE_ADDRESS),
                    PartyInput::new(DEFAULT_BOB_NAME, DEFAULT_BOB_ADDRESS),
                    PartyInput::new("Alice Again", DEFAULT_ALICE_ADDRESS),
                ],
            },
            "ExecuteMsg::SetAssetInstanceProperty",
            "participants: each participant must specify a unique address",
        );
    }

    #[test]
    fn test_invalid_set_asset_instance_property_duplicate_participants_ignoring_case() {
        test_invalid_execute_msg(
            &ExecuteMsg::SetAssetInstanceProperty {
                asset_definition_id: "defA".to_string(),
                asset_instance_id: "instB".to_string(),
                author_name: DEFAULT_ALICE_NAME.to_string(),
                key: "color".to_string(),
                value: "red".to_string(),
                participants: vec![
                    PartyInput::new(DEFAULT_ALICE_NAME, DEFAULT_ALICE_ADDRESS),
                    PartyInput::new("Alice Again", DEFAULT_ALICE_ADDRESS.to_uppercase()),
                ],
            },
            "ExecuteMsg::SetAssetInstanceProperty",
            "participants: each participant must specify a unique address",
        );
    }

    #[test]
    fn test_valid_binding_msgs() {
        validate_execute_msg(&ExecuteMsg::AddStateContractBinding {
            binding: get_default_state_contract_binding(),
        })
        .expect("adding the default binding should be valid");
        validate_execute_msg(&ExecuteMsg::UpdateStateContractBinding {
            binding: get_default_state_contract_binding(),
        })
        .expect("updating the default binding should be valid");
        validate_execute_msg(&ExecuteMsg::DeleteStateContractBinding {
            state_type: get_default_state_contract_binding().state_type,
        })
        .expect("deleting the default binding should be valid");
    }

    #[test]
    fn test_invalid_binding_msgs() {
        test_invalid_execute_msg(
            &ExecuteMsg::AddStateContractBinding {
                binding: StateContractBinding::new("", "contract"),
            },
            "ExecuteMsg::AddStateContractBinding",
            "state_contract_binding:state_type: must not be blank",
        );
        test_invalid_execute_msg(
            &ExecuteMsg::UpdateStateContractBinding {
                binding: StateContractBinding::new("state", ""),
            },
            "ExecuteMsg::UpdateStateContractBinding",
            "state_contract_binding:contract_id: must not be blank",
        );
        test_invalid_execute_msg(
            &ExecuteMsg::DeleteStateContractBinding {
                state_type: "  ".to_string(),
            },
            "ExecuteMsg::DeleteStateContractBinding",
            "state_type: must not be blank",
        );
    }

    fn test_invalid_execute_msg(
        msg: &ExecuteMsg,
        expected_message_type: &str,
        expected_message: &str,
    ) {
        match validate_execute_msg(msg) {
            Ok(_) => panic!(
                "expected the execute msg to be invalid and to produce the message: {}",
                expected_message
            ),
            Err(e) => match e {
                ContractError::InvalidMessageFields {
                    message_type,
                    invalid_fields,
                } => {
                    assert_eq!(
                        expected_message_type, message_type,
                        "the message type should be set appropriately",
                    );
                    assert!(
                        invalid_fields.contains(&expected_message.to_string()),
                        "expected message [{}] to be in invalid fields {:?}",
                        expected_message,
                        invalid_fields,
                    );
                }
                _ => panic!("unexpected error encountered: {:?}", e),
            },
        }
    }
}
