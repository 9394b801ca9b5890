use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::asset_event_state::{AssetEventState, LedgerState};
use super::participants::Participants;
use super::party::Party;

/// Records that a named property of a tracked asset instance was set to a value by an author.
/// All values are assigned once during construction and cannot be changed afterward.  No
/// validation occurs here: callers are expected to have checked their inputs.
#[derive(Serialize, Deserialize, Clone, Debug, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct AssetInstancePropertySet {
    asset_definition_id: String,
    asset_instance_id: String,
    author: Party,
    key: String,
    value: String,
    participants: Participants,
}
impl AssetInstancePropertySet {
    pub fn new<S1, S2, S3, S4>(
        asset_definition_id: S1,
        asset_instance_id: S2,
        author: Party,
        key: S3,
        value: S4,
        participants: Participants,
    ) -> Self
    where
        S1: Into<String>,
        S2: Into<String>,
        S3: Into<String>,
        S4: Into<String>,
    {
        Self {
            asset_definition_id: asset_definition_id.into(),
            asset_instance_id: asset_instance_id.into(),
            author,
            key: key.into(),
            value: value.into(),
            participants,
        }
    }

    pub fn asset_definition_id(&self) -> &str {
        &self.asset_definition_id
    }

    pub fn asset_instance_id(&self) -> &str {
        &self.asset_instance_id
    }

    pub fn author(&self) -> &Party {
        &self.author
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn participants(&self) -> &Participants {
        &self.participants
    }
}
impl LedgerState for AssetInstancePropertySet {
    const STATE_TYPE: &'static str = "asset_instance_property_set";
}
impl AssetEventState for AssetInstancePropertySet {
    fn author(&self) -> &Party {
        &self.author
    }

    fn participants(&self) -> &Participants {
        &self.participants
    }
}
// Debug output only, not a stable serialization
impl fmt::Display for AssetInstancePropertySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AssetInstancePropertySet(assetDefinitionID={}, assetInstanceID={}, author={}, key={}, value={}, participants={})",
            self.asset_definition_id,
            self.asset_instance_id,
            self.author,
            self.key,
            self.value,
            self.participants,
        )
    }
}
