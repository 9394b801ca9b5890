use cosmwasm_std::Storage;
use schemars::JsonSchema;
use semver::Version;
use serde::{Deserialize, Serialize};

use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;

pub const CONTRACT_NAME: &str = env!("CARGO_CRATE_NAME");
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub struct VersionInfoV1 {
    pub contract: String,
    pub version: String,
}
impl VersionInfoV1 {
    pub fn parse_sem_ver(&self) -> AssetResult<Version> {
        self.version.parse::<Version>()?.to_ok()
    }
}

/// Stores the version info in the standard cw2 location, allowing external tooling to observe the
/// deployed contract version.
pub fn set_version_info(storage: &mut dyn Storage, version_info: &VersionInfoV1) -> AssetResult<()> {
    cw2::set_contract_version(storage, &version_info.contract, &version_info.version)?;
    Ok(())
}

pub fn get_version_info(storage: &dyn Storage) -> AssetResult<VersionInfoV1> {
    let contract_version = cw2::get_contract_version(storage)?;
    VersionInfoV1 {
        contract: contract_version.contract,
        version: contract_version.version,
    }
    .to_ok()
}

/// Overwrites the stored version info with the values of the currently-executing code.
pub fn migrate_version_info(storage: &mut dyn Storage) -> AssetResult<VersionInfoV1> {
    let version_info = VersionInfoV1 {
        contract: CONTRACT_NAME.to_string(),
        version: CONTRACT_VERSION.to_string(),
    };
    set_version_info(storage, &version_info)?;
    version_info.to_ok()
}
