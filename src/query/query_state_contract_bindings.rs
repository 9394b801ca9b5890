use crate::core::state::list_state_contract_bindings;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_binary, Binary};

/// Lists every registered binding, ordered by state type.
pub fn query_state_contract_bindings(deps: &DepsC) -> AssetResult<Binary> {
    let bindings = list_state_contract_bindings(deps.storage)?;
    to_binary(&bindings)?.to_ok()
}

#[cfg(test)]
mod tests {
    use crate::core::types::state_contract_binding::StateContractBinding;
    use crate::query::query_state_contract_bindings::query_state_contract_bindings;
    use crate::testutil::test_utilities::{
        get_default_state_contract_bindings, test_instantiate_success, InstArgs,
    };
    use cosmwasm_std::from_binary;
    use provwasm_mocks::mock_dependencies;

    #[test]
    fn test_query_bindings_after_default_instantiation() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let binary = query_state_contract_bindings(&deps.as_ref())
            .expect("the query should execute without error");
        let bindings = from_binary::<Vec<StateContractBinding>>(&binary)
            .expect("expected the binary to deserialize appropriately");
        assert_eq!(
            get_default_state_contract_bindings(),
            bindings,
            "the query should list the bindings provided at instantiation",
        );
    }

    #[test]
    fn test_query_bindings_when_none_exist() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(
            deps.as_mut(),
            InstArgs {
                state_contract_bindings: vec![],
                ..Default::default()
            },
        );
        let bindings = from_binary::<Vec<StateContractBinding>>(
            &query_state_contract_bindings(&deps.as_ref()).unwrap(),
        )
        .unwrap();
        assert!(bindings.is_empty(), "no bindings should be listed");
    }
}
