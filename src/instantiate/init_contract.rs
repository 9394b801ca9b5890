use crate::core::msg::InitMsg;
use crate::core::state::{insert_state_contract_binding, State, STATE};
use crate::migrate::version_info::migrate_version_info;
use crate::util::aliases::{DepsMutC, EntryPointResponse};
use crate::util::contract_helpers::check_funds_are_empty;
use crate::util::event_attributes::{EventAttributes, EventType};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{CosmosMsg, Env, MessageInfo, Response};
use provwasm_std::{bind_name, NameBinding, ProvenanceMsg};

/// The main functionality executed when the smart contract is first instantiated.   This creates
/// the internal contract [State](crate::core::state::State) value, as well as any
/// [StateContractBinding](crate::core::types::state_contract_binding::StateContractBinding)
/// values provided in the init msg.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `env` An environment object provided by the cosmwasm framework.  Describes the contract's
/// details, as well as blockchain information at the time of the transaction.
/// * `info` A message information object provided by the cosmwasm framework.  Describes the sender
/// of the instantiation message, as well as the funds provided as an amount during the transaction.
/// * `msg` A custom instantiation message defined by this contract for creating the initial
/// configuration used by the contract.
pub fn init_contract(
    deps: DepsMutC,
    env: Env,
    info: MessageInfo,
    msg: InitMsg,
) -> EntryPointResponse {
    check_funds_are_empty(&info)?;
    let mut messages: Vec<CosmosMsg<ProvenanceMsg>> = vec![];
    // Owning the base name keeps other accounts from publishing names that appear to belong to
    // this asset trail
    if msg.bind_base_name {
        messages.push(bind_name(
            &msg.base_contract_name,
            env.contract.address,
            NameBinding::Restricted,
        )?);
    }
    // Bindings may be empty here.  Until one is added for a state type, the contract refuses to
    // produce states of that type
    for binding in msg.state_contract_bindings.iter() {
        insert_state_contract_binding(deps.storage, binding)?;
    }
    let state = State::new(msg, info.sender);
    STATE.save(deps.storage, &state)?;
    migrate_version_info(deps.storage)?;
    Response::new()
        .add_messages(messages)
        .add_attributes(EventAttributes::new(EventType::InstantiateContract))
        .to_ok()
}
