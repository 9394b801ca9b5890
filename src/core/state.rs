use crate::core::error::ContractError;
use crate::core::msg::InitMsg;
use crate::core::types::asset_event_state::LedgerState;
use crate::core::types::state_contract_binding::StateContractBinding;
use crate::util::aliases::AssetResult;
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{Addr, Order, StdResult, Storage};
use cw_storage_plus::{Item, Map};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

pub const STATE: Item<State> = Item::new("state");

/// Every ledger state type the contract can produce, keyed by its state type, bound to the
/// identifier of the rule set that governs it.
pub const STATE_CONTRACT_BINDINGS: Map<&str, StateContractBinding> =
    Map::new("state_contract_bindings");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct State {
    pub base_contract_name: String,
    pub admin: Addr,
}
impl State {
    pub fn new(msg: InitMsg, admin: Addr) -> State {
        State {
            base_contract_name: msg.base_contract_name,
            admin,
        }
    }
}

/// Inserts a new binding into storage.  If a binding already exists for the state type, an error
/// is returned.
///
/// # Parameters
///
/// * `storage` A mutable reference to the contract's internal storage.
/// * `binding` The binding to store.
pub fn insert_state_contract_binding(
    storage: &mut dyn Storage,
    binding: &StateContractBinding,
) -> AssetResult<()> {
    if may_load_state_contract_binding(storage, &binding.state_type)?.is_some() {
        return ContractError::RecordAlreadyExists {
            explanation: format!(
                "unique constraints violated! record exists with state type [{}]",
                binding.state_type
            ),
        }
        .to_err();
    }
    STATE_CONTRACT_BINDINGS.save(storage, &binding.state_type, binding)?;
    Ok(())
}

/// Overwrites an existing binding.  If no binding exists for the state type, an error is
/// returned.
///
/// # Parameters
///
/// * `storage` A mutable reference to the contract's internal storage.
/// * `binding` The new value of the binding.  Its state type locates the value to replace.
pub fn replace_state_contract_binding(
    storage: &mut dyn Storage,
    binding: &StateContractBinding,
) -> AssetResult<()> {
    load_state_contract_binding(storage, &binding.state_type)?;
    STATE_CONTRACT_BINDINGS.save(storage, &binding.state_type, binding)?;
    Ok(())
}

/// Removes an existing binding, returning the removed value.
pub fn delete_state_contract_binding<S: Into<String>>(
    storage: &mut dyn Storage,
    state_type: S,
) -> AssetResult<StateContractBinding> {
    let state_type: String = state_type.into();
    let existing_binding = load_state_contract_binding(storage, &state_type)?;
    STATE_CONTRACT_BINDINGS.remove(storage, &state_type);
    existing_binding.to_ok()
}

pub fn may_load_state_contract_binding<S: Into<String>>(
    storage: &dyn Storage,
    state_type: S,
) -> AssetResult<Option<StateContractBinding>> {
    let state_type: String = state_type.into();
    STATE_CONTRACT_BINDINGS
        .may_load(storage, &state_type)?
        .to_ok()
}

pub fn load_state_contract_binding<S: Into<String>>(
    storage: &dyn Storage,
    state_type: S,
) -> AssetResult<StateContractBinding> {
    let state_type: String = state_type.into();
    match may_load_state_contract_binding(storage, &state_type)? {
        Some(binding) => binding.to_ok(),
        None => ContractError::RecordNotFound {
            explanation: format!("no binding exists for state type [{}]", state_type),
        }
        .to_err(),
    }
}

/// Lists every stored binding, ordered ascending by state type.
pub fn list_state_contract_bindings(
    storage: &dyn Storage,
) -> AssetResult<Vec<StateContractBinding>> {
    STATE_CONTRACT_BINDINGS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, binding)| binding))
        .collect::<StdResult<Vec<StateContractBinding>>>()?
        .to_ok()
}

/// Resolves the rule set governing the state type `T`.  A state type without a binding cannot be
/// produced by the contract.
pub fn resolve_state_contract<T: LedgerState>(
    storage: &dyn Storage,
) -> AssetResult<StateContractBinding> {
    match may_load_state_contract_binding(storage, T::STATE_TYPE)? {
        Some(binding) => binding.to_ok(),
        None => ContractError::UnregisteredStateType {
            state_type: T::STATE_TYPE.to_string(),
        }
        .to_err(),
    }
}

#[cfg(test)]
mod tests {
    use provwasm_mocks::mock_dependencies;

    use crate::core::error::ContractError;
    use crate::core::state::{
        delete_state_contract_binding, insert_state_contract_binding,
        list_state_contract_bindings, load_state_contract_binding,
        may_load_state_contract_binding, replace_state_contract_binding, resolve_state_contract,
    };
    use crate::core::types::asset_instance_property_set::AssetInstancePropertySet;
    use crate::core::types::state_contract_binding::StateContractBinding;
    use crate::testutil::test_utilities::get_default_state_contract_binding;

    #[test]
    fn test_insert_then_load_binding() {
        let mut deps = mock_dependencies(&[]);
        let binding = get_default_state_contract_binding();
        insert_state_contract_binding(deps.as_mut().storage, &binding)
            .expect("the binding should insert without error");
        let loaded = load_state_contract_binding(deps.as_ref().storage, &binding.state_type)
            .expect("the binding should load after insertion");
        assert_eq!(binding, loaded, "the loaded binding should equate to the inserted one");
    }

    #[test]
    fn test_insert_duplicate_binding_fails() {
        let mut deps = mock_dependencies(&[]);
        let binding = get_default_state_contract_binding();
        insert_state_contract_binding(deps.as_mut().storage, &binding)
            .expect("the first insert should succeed");
        let error = insert_state_contract_binding(
            deps.as_mut().storage,
            &StateContractBinding::new(&binding.state_type, "other-contract"),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::RecordAlreadyExists { .. }),
            "a duplicate insert should be rejected, but got: {:?}",
            error,
        );
        assert_eq!(
            binding,
            load_state_contract_binding(deps.as_ref().storage, &binding.state_type).unwrap(),
            "the rejected insert should not overwrite the original binding",
        );
    }

    #[test]
    fn test_replace_requires_existing_binding() {
        let mut deps = mock_dependencies(&[]);
        let error = replace_state_contract_binding(
            deps.as_mut().storage,
            &get_default_state_contract_binding(),
        )
        .unwrap_err();
        assert!(
            matches!(error, ContractError::RecordNotFound { .. }),
            "replacing a missing binding should fail, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_replace_existing_binding() {
        let mut deps = mock_dependencies(&[]);
        let binding = get_default_state_contract_binding();
        insert_state_contract_binding(deps.as_mut().storage, &binding).unwrap();
        let replacement = StateContractBinding::new(&binding.state_type, "replacement-contract");
        replace_state_contract_binding(deps.as_mut().storage, &replacement)
            .expect("replacing an existing binding should succeed");
        assert_eq!(
            replacement,
            load_state_contract_binding(deps.as_ref().storage, &binding.state_type).unwrap(),
            "the replacement should be stored",
        );
    }

    #[test]
    fn test_delete_binding() {
        let mut deps = mock_dependencies(&[]);
        let binding = get_default_state_contract_binding();
        insert_state_contract_binding(deps.as_mut().storage, &binding).unwrap();
        let deleted = delete_state_contract_binding(deps.as_mut().storage, &binding.state_type)
            .expect("deleting an existing binding should succeed");
        assert_eq!(binding, deleted, "the deleted binding should be returned");
        assert!(
            may_load_state_contract_binding(deps.as_ref().storage, &binding.state_type)
                .unwrap()
                .is_none(),
            "the binding should no longer be in storage",
        );
        let error =
            delete_state_contract_binding(deps.as_mut().storage, &binding.state_type).unwrap_err();
        assert!(
            matches!(error, ContractError::RecordNotFound { .. }),
            "deleting a missing binding should fail, but got: {:?}",
            error,
        );
    }

    #[test]
    fn test_list_bindings_is_ordered_by_state_type() {
        let mut deps = mock_dependencies(&[]);
        let zebra = StateContractBinding::new("zebra_state", "contract-z");
        let apple = StateContractBinding::new("apple_state", "contract-a");
        insert_state_contract_binding(deps.as_mut().storage, &zebra).unwrap();
        insert_state_contract_binding(deps.as_mut().storage, &apple).unwrap();
        assert_eq!(
            vec![apple, zebra],
            list_state_contract_bindings(deps.as_ref().storage).unwrap(),
            "bindings should be listed ascending by state type",
        );
    }

    #[test]
    fn test_resolve_state_contract() {
        let mut deps = mock_dependencies(&[]);
        let error =
            resolve_state_contract::<AssetInstancePropertySet>(deps.as_ref().storage).unwrap_err();
        match error {
            ContractError::UnregisteredStateType { state_type } => assert_eq!(
                "asset_instance_property_set", state_type,
                "the error should name the unbound state type",
            ),
            _ => panic!("unexpected error encountered: {:?}", error),
        }
        let binding = get_default_state_contract_binding();
        insert_state_contract_binding(deps.as_mut().storage, &binding).unwrap();
        assert_eq!(
            binding,
            resolve_state_contract::<AssetInstancePropertySet>(deps.as_ref().storage).unwrap(),
            "the binding should resolve once stored",
        );
    }
}
