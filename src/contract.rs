use crate::core::msg::{ExecuteMsg, InitMsg, MigrateMsg, QueryMsg};
use crate::execute::add_state_contract_binding::{
    add_state_contract_binding, AddStateContractBindingV1,
};
use crate::execute::delete_state_contract_binding::{
    delete_state_contract_binding, DeleteStateContractBindingV1,
};
use crate::execute::set_asset_instance_property::{
    set_asset_instance_property, SetAssetInstancePropertyV1,
};
use crate::execute::update_state_contract_binding::{
    update_state_contract_binding, UpdateStateContractBindingV1,
};
use crate::instantiate::init_contract::init_contract;
use crate::migrate::migrate_contract::migrate_contract;
use crate::query::query_state::query_state;
use crate::query::query_state_contract_binding::query_state_contract_binding;
use crate::query::query_state_contract_bindings::query_state_contract_bindings;
use crate::query::query_version::query_version;
use crate::util::aliases::{AssetResult, DepsC, DepsMutC, EntryPointResponse};
use crate::validation::validate_execute_msg::validate_execute_msg;
use crate::validation::validate_init_msg::validate_init_msg;
use cosmwasm_std::{entry_point, Binary, Env, MessageInfo};

#[entry_point]
pub fn instantiate(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    // Ensure the init message is properly formatted before doing anything
    validate_init_msg(&msg)?;
    // Execute the core instantiation code
    init_contract(deps, env, info, msg)
}

#[entry_point]
pub fn query(deps: DepsC, _env: Env, msg: QueryMsg) -> AssetResult<Binary> {
    match msg {
        QueryMsg::QueryStateContractBinding { state_type } => {
            query_state_contract_binding(&deps, state_type)
        }
        QueryMsg::QueryStateContractBindings {} => query_state_contract_bindings(&deps),
        QueryMsg::QueryState {} => query_state(&deps),
        QueryMsg::QueryVersion {} => query_version(&deps),
    }
}

#[entry_point]
pub fn execute(deps: DepsMutC, _env: Env, info: MessageInfo, msg: ExecuteMsg) -> EntryPointResponse {
    // Ensure the execute message is properly formatted before doing anything
    validate_execute_msg(&msg)?;
    match msg {
        ExecuteMsg::SetAssetInstanceProperty { .. } => set_asset_instance_property(
            &deps.as_ref(),
            info,
            SetAssetInstancePropertyV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::AddStateContractBinding { .. } => add_state_contract_binding(
            deps,
            info,
            AddStateContractBindingV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::UpdateStateContractBinding { .. } => update_state_contract_binding(
            deps,
            info,
            UpdateStateContractBindingV1::from_execute_msg(msg)?,
        ),
        ExecuteMsg::DeleteStateContractBinding { .. } => delete_state_contract_binding(
            deps,
            info,
            DeleteStateContractBindingV1::from_execute_msg(msg)?,
        ),
    }
}

#[entry_point]
pub fn migrate(deps: DepsMutC, _env: Env, msg: MigrateMsg) -> EntryPointResponse {
    match msg {
        MigrateMsg::ContractUpgrade {} => migrate_contract(deps),
    }
}
