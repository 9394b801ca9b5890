use crate::core::error::ContractError;
use crate::core::types::asset_instance_property_set::AssetInstancePropertySet;
use crate::core::types::participants::Participants;
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

use super::constants::{
    ASSET_AUTHOR_ADDRESS_KEY, ASSET_AUTHOR_NAME_KEY, ASSET_CONTRACT_ID_KEY,
    ASSET_DEFINITION_ID_KEY, ASSET_EVENT_TYPE_KEY, ASSET_INSTANCE_ID_KEY, ASSET_PARTICIPANTS_KEY,
    ASSET_PROPERTY_KEY_KEY, ASSET_PROPERTY_VALUE_KEY, ASSET_STATE_TYPE_KEY, NEW_VALUE_KEY,
};

pub enum EventType {
    InstantiateContract,
    MigrateContract,
    SetAssetInstanceProperty,
    AddStateContractBinding,
    UpdateStateContractBinding,
    DeleteStateContractBinding,
}
#[allow(clippy::from_over_into)]
impl Into<String> for EventType {
    fn into(self) -> String {
        match self {
            EventType::InstantiateContract => "instantiate_contract",
            EventType::MigrateContract => "migrate_contract",
            EventType::SetAssetInstanceProperty => "set_asset_instance_property",
            EventType::AddStateContractBinding => "add_state_contract_binding",
            EventType::UpdateStateContractBinding => "update_state_contract_binding",
            EventType::DeleteStateContractBinding => "delete_state_contract_binding",
        }
        .into()
    }
}
impl EventType {
    pub fn event_name(self) -> String {
        self.into()
    }
}

pub struct EventAttributes {
    attributes: Vec<(String, String)>,
}
impl EventAttributes {
    pub fn new(event_type: EventType) -> Self {
        EventAttributes {
            attributes: vec![(ASSET_EVENT_TYPE_KEY.into(), event_type.into())],
        }
    }

    /// Describes every fact carried by a property set event, along with the rule set that the
    /// event was resolved against.  Participants are emitted as a JSON array of addresses so the
    /// platform can route the event to each of them.
    pub fn for_property_set<T: Into<String>>(
        event: &AssetInstancePropertySet,
        contract_id: T,
    ) -> AssetResult<Self> {
        Self::new(EventType::SetAssetInstanceProperty)
            .set_asset_definition_id(event.asset_definition_id())
            .set_asset_instance_id(event.asset_instance_id())
            .set_author_address(event.author().address())
            .set_author_name(event.author().name())
            .set_property_key(event.key())
            .set_property_value(event.value())
            .set_contract_id(contract_id)
            .set_participants(event.participants())
    }

    pub fn for_binding(event_type: EventType, binding: &StateContractBinding) -> Self {
        Self::new(event_type)
            .set_state_type(&binding.state_type)
            .set_contract_id(&binding.contract_id)
    }

    pub fn set_asset_definition_id<T: Into<String>>(mut self, asset_definition_id: T) -> Self {
        self.attributes
            .push((ASSET_DEFINITION_ID_KEY.into(), asset_definition_id.into()));
        self
    }

    pub fn set_asset_instance_id<T: Into<String>>(mut self, asset_instance_id: T) -> Self {
        self.attributes
            .push((ASSET_INSTANCE_ID_KEY.into(), asset_instance_id.into()));
        self
    }

    pub fn set_author_address<T: ToString>(mut self, author_address: T) -> Self {
        self.attributes
            .push((ASSET_AUTHOR_ADDRESS_KEY.into(), author_address.to_string()));
        self
    }

    pub fn set_author_name<T: Into<String>>(mut self, author_name: T) -> Self {
        self.attributes
            .push((ASSET_AUTHOR_NAME_KEY.into(), author_name.into()));
        self
    }

    pub fn set_property_key<T: Into<String>>(mut self, key: T) -> Self {
        self.attributes
            .push((ASSET_PROPERTY_KEY_KEY.into(), key.into()));
        self
    }

    pub fn set_property_value<T: Into<String>>(mut self, value: T) -> Self {
        self.attributes
            .push((ASSET_PROPERTY_VALUE_KEY.into(), value.into()));
        self
    }

    pub fn set_participants(mut self, participants: &Participants) -> AssetResult<Self> {
        let addresses = participants
            .abstract_parties()
            .map(|party| party.owning_address().as_str())
            .collect::<Vec<&str>>();
        let participants_json = serde_json_wasm::to_string(&addresses).map_err(|e| {
            ContractError::generic(format!("failed to serialize participant addresses: {}", e))
        })?;
        self.attributes
            .push((ASSET_PARTICIPANTS_KEY.into(), participants_json));
        self.to_ok()
    }

    pub fn set_state_type<T: Into<String>>(mut self, state_type: T) -> Self {
        self.attributes
            .push((ASSET_STATE_TYPE_KEY.into(), state_type.into()));
        self
    }

    pub fn set_contract_id<T: Into<String>>(mut self, contract_id: T) -> Self {
        self.attributes
            .push((ASSET_CONTRACT_ID_KEY.into(), contract_id.into()));
        self
    }

    pub fn set_new_value<T: ToString>(mut self, new_value: T) -> Self {
        self.attributes
            .push((NEW_VALUE_KEY.into(), new_value.to_string()));
        self
    }
}

impl IntoIterator for EventAttributes {
    type Item = (String, String);

    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}
