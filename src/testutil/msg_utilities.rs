use cosmwasm_std::{testing::MOCK_CONTRACT_ADDR, CosmosMsg, SubMsg};
use provwasm_std::{NameMsgParams, ProvenanceMsg, ProvenanceMsgParams};

use super::test_constants::DEFAULT_CONTRACT_BASE_NAME;

// Tests that the DEFAULT_CONTRACT_BASE_NAME was bound to the contract in the slice
pub fn test_for_default_base_name(messages: &[SubMsg<ProvenanceMsg>]) {
    test_message_is_name_bind(messages, DEFAULT_CONTRACT_BASE_NAME);
}

// Iterates every message in the slice, expecting exactly a restricted binding of the expected
// name to the mocked contract address among them
pub fn test_message_is_name_bind(messages: &[SubMsg<ProvenanceMsg>], expected_name: &str) {
    for message in messages {
        match &message.msg {
            CosmosMsg::Custom(msg) => match &msg.params {
                ProvenanceMsgParams::Name(NameMsgParams::BindName {
                    name,
                    address,
                    restrict,
                }) => {
                    if name != expected_name {
                        continue;
                    }
                    assert_eq!(
                        MOCK_CONTRACT_ADDR,
                        address.as_str(),
                        "the name should be bound to the contract address",
                    );
                    assert!(restrict, "the name binding should be restricted");
                    return;
                }
                _ => panic!("unexpected provenance message type was emitted"),
            },
            _ => panic!("unexpected message type was emitted"),
        }
    }
    panic!("failed to find name bind message for `{}`", expected_name);
}
