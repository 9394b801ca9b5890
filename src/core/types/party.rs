use std::fmt;

use cosmwasm_std::Addr;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::util::{address_utils::bech32_string_to_addr, aliases::AssetResult};
use crate::util::traits::ResultExtensions;

/// The read-only identity capability consumed by visibility and distribution logic.  Consumers
/// of this trait only learn who a party is on chain, never anything about its concrete type.
pub trait AbstractParty: fmt::Display {
    /// The blockchain address that owns this identity.
    fn owning_address(&self) -> &Addr;

    /// The display name of the identity, if one is known.
    fn name_or_none(&self) -> Option<&str>;
}

/// A fully-known party on the ledger: a bech32 account address paired with a display name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct Party {
    name: String,
    address: Addr,
}
impl Party {
    pub fn new<S: Into<String>>(name: S, address: Addr) -> Self {
        Self {
            name: name.into(),
            address,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &Addr {
        &self.address
    }

    /// Widens this party to its [AbstractParty] capability without copying anything.
    pub fn as_abstract(&self) -> &dyn AbstractParty {
        self
    }
}
impl AbstractParty for Party {
    fn owning_address(&self) -> &Addr {
        &self.address
    }

    fn name_or_none(&self) -> Option<&str> {
        Some(&self.name)
    }
}
impl fmt::Display for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The externally-provided shape of a [Party], as it arrives in an execute message.  The address
/// is unchecked until [into_party](PartyInput::into_party) is called.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct PartyInput {
    pub name: String,
    pub address: String,
}
impl PartyInput {
    pub fn new<S1: Into<String>, S2: Into<String>>(name: S1, address: S2) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    /// Converts the input into a [Party], verifying that the address is a bech32 account address.
    pub fn into_party(self) -> AssetResult<Party> {
        Party::new(self.name, bech32_string_to_addr(self.address)?).to_ok()
    }
}

#[cfg(test)]
mod tests {
    use cosmwasm_std::Addr;

    use crate::core::error::ContractError;
    use crate::testutil::test_constants::{DEFAULT_ALICE_ADDRESS, DEFAULT_ALICE_NAME};

    use super::{Party, PartyInput};

    #[test]
    fn test_party_display_is_name_only() {
        let party = Party::new(DEFAULT_ALICE_NAME, Addr::unchecked(DEFAULT_ALICE_ADDRESS));
        assert_eq!(
            DEFAULT_ALICE_NAME,
            party.to_string(),
            "a party should display as its name",
        );
    }

    #[test]
    fn test_abstract_party_exposes_same_identity() {
        let party = Party::new(DEFAULT_ALICE_NAME, Addr::unchecked(DEFAULT_ALICE_ADDRESS));
        let abstract_party = party.as_abstract();
        assert_eq!(
            party.address(),
            abstract_party.owning_address(),
            "the widened party should expose the same address",
        );
        assert_eq!(
            Some(DEFAULT_ALICE_NAME),
            abstract_party.name_or_none(),
            "the widened party should expose the same name",
        );
        assert_eq!(
            party.to_string(),
            abstract_party.to_string(),
            "the widened party should display identically",
        );
    }

    #[test]
    fn test_party_input_converts_valid_address() {
        let party = PartyInput::new(DEFAULT_ALICE_NAME, DEFAULT_ALICE_ADDRESS)
            .into_party()
            .expect("a valid testnet address should convert to a party");
        assert_eq!(DEFAULT_ALICE_NAME, party.name(), "the name should be retained");
        assert_eq!(
            DEFAULT_ALICE_ADDRESS,
            party.address().as_str(),
            "the address should be retained",
        );
    }

    #[test]
    fn test_party_input_rejects_invalid_address() {
        let error = PartyInput::new(DEFAULT_ALICE_NAME, "not an address")
            .into_party()
            .unwrap_err();
        assert!(
            matches!(error, ContractError::Bech32Error(_)),
            "an invalid address should produce a bech32 error, but got: {:?}",
            error,
        );
    }
}
