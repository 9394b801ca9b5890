/// All addresses in these test constants were randomly generated for testing purposes
/// This address should be used for the contract administrator address in state
pub const DEFAULT_ADMIN_ADDRESS: &str = "tp1grjeedyfmx0hujsgmqhdr6thjrye4hfesvh2lz";
/// The account of the party named by DEFAULT_ALICE_NAME
pub const DEFAULT_ALICE_ADDRESS: &str = "tp1dv7562fvlvf74904t222ze362m036ugtmg45ll";
pub const DEFAULT_ALICE_NAME: &str = "Alice";
/// The account of the party named by DEFAULT_BOB_NAME
pub const DEFAULT_BOB_ADDRESS: &str = "tp1dj50kvzsknr3ydypw3lt8f4dulrrncw4j626vk";
pub const DEFAULT_BOB_NAME: &str = "Bob";
/// This is the default value that test_instantiate uses to create the contract's base name
pub const DEFAULT_CONTRACT_BASE_NAME: &str = "asset";
/// The rule set bound to the property set state when using test_instantiate
pub const DEFAULT_CONTRACT_ID: &str = "asset-trail-v1";
/// Values of the property set event produced by get_default_set_property_msg
pub const DEFAULT_ASSET_DEFINITION_ID: &str = "defA";
pub const DEFAULT_ASSET_INSTANCE_ID: &str = "instB";
pub const DEFAULT_PROPERTY_KEY: &str = "color";
pub const DEFAULT_PROPERTY_VALUE: &str = "red";
