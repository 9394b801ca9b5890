use crate::{core::error::ContractError, util::aliases::AssetResult};
use cosmwasm_std::Addr;

use super::traits::ResultExtensions;

/// Standard bech32 encoding for mainnet addresses simply begins the with the string "pb"
const MAINNET_HRP: &str = "pb";
/// Standard bech32 encoding for testnet addresses simply begins with the string "tp"
const TESTNET_HRP: &str = "tp";
const VALID_HRPS: [&str; 2] = [MAINNET_HRP, TESTNET_HRP];

/// Validates that the address is valid by decoding to base 32, and then converts it to an Addr.
/// Only account addresses on mainnet or testnet are accepted.  The resulting Addr is always the
/// lowercase form of the address, even when an all-uppercase address is provided.
///
/// # Parameters
///
/// * `address` The bech32 string to check and convert.
///
/// # Examples
/// ```
/// use asset_trail_smart_contract::util::address_utils::bech32_string_to_addr;
///
/// let addr = bech32_string_to_addr("tp15e6l9dv8s2rdshjfn34k8a2nju55tr4z42phrt")
///     .expect("a testnet account address should convert");
/// assert_eq!("tp15e6l9dv8s2rdshjfn34k8a2nju55tr4z42phrt", addr.as_str());
/// ```
pub fn bech32_string_to_addr<S: Into<String>>(address: S) -> AssetResult<Addr> {
    let address_string = address.into();
    // First, try to decode the string as Bech32.  If this fails, then the input is invalid and should not be converted to an Addr
    let (hrp, _, _) = bech32::decode(&address_string)?;
    if !VALID_HRPS.contains(&hrp.as_str()) {
        ContractError::InvalidAddress {
            address: address_string,
            explanation: format!("invalid address prefix [{}]", hrp),
        }
        .to_err()
    } else {
        // Once the address has been validated as bech32, just funnel its canonical form into the Addr struct with an unchecked call
        Addr::unchecked(address_string.to_lowercase()).to_ok()
    }
}
