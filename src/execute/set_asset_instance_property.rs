use crate::core::error::ContractError;
use crate::core::msg::ExecuteMsg;
use crate::core::state::resolve_state_contract;
use crate::core::types::asset_instance_property_set::AssetInstancePropertySet;
use crate::core::types::participants::Participants;
use crate::core::types::party::{Party, PartyInput};
use crate::util::aliases::{AssetResult, DepsC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::EventAttributes;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{MessageInfo, Response};

#[derive(Clone, Debug, PartialEq)]
pub struct SetAssetInstancePropertyV1 {
    pub asset_definition_id: String,
    pub asset_instance_id: String,
    pub author_name: String,
    pub key: String,
    pub value: String,
    pub participants: Vec<PartyInput>,
}
impl SetAssetInstancePropertyV1 {
    pub fn from_execute_msg(msg: ExecuteMsg) -> AssetResult<Self> {
        match msg {
            ExecuteMsg::SetAssetInstanceProperty {
                asset_definition_id,
                asset_instance_id,
                author_name,
                key,
                value,
                participants,
            } => Self {
                asset_definition_id,
                asset_instance_id,
                author_name,
                key,
                value,
                participants,
            }
            .to_ok(),
            _ => ContractError::InvalidMessageType {
                expected_message_type: "ExecuteMsg::SetAssetInstanceProperty".to_string(),
            }
            .to_err(),
        }
    }
}

/// Produces an [AssetInstancePropertySet] event authored by the sender and emits it to the event
/// stream.  The event is only produced when its state type is bound to a verification contract.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the message, who becomes the author of the event.
/// * `msg` The facts of the property set event.
pub fn set_asset_instance_property(
    deps: &DepsC,
    info: MessageInfo,
    msg: SetAssetInstancePropertyV1,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let binding = resolve_state_contract::<AssetInstancePropertySet>(deps.storage)?;
    let author = Party::new(msg.author_name, info.sender);
    let participants = msg
        .participants
        .into_iter()
        .map(PartyInput::into_party)
        .collect::<AssetResult<Participants>>()?;
    let event = AssetInstancePropertySet::new(
        msg.asset_definition_id,
        msg.asset_instance_id,
        author,
        msg.key,
        msg.value,
        participants,
    );
    Response::new()
        .add_attributes(EventAttributes::for_property_set(
            &event,
            binding.contract_id,
        )?)
        .to_ok()
}
