use crate::core::state::may_load_state_contract_binding;
use crate::util::aliases::{AssetResult, DepsC};
use crate::util::traits::ResultExtensions;
use cosmwasm_std::{to_binary, Binary};

/// A query that fetches the [StateContractBinding](crate::core::types::state_contract_binding::StateContractBinding)
/// registered for a state type.  Responds with a serialized `Option`, which is empty when nothing
/// has been bound to the state type.
///
/// # Parameters
///
/// * `deps` A dependencies object provided by the cosmwasm framework.  Allows access to useful
/// resources like contract internal storage and a querier to retrieve blockchain objects.
/// * `state_type` The unique key of the binding, matching a ledger state's type name.
pub fn query_state_contract_binding<S: Into<String>>(
    deps: &DepsC,
    state_type: S,
) -> AssetResult<Binary> {
    let binding = may_load_state_contract_binding(deps.storage, state_type)?;
    to_binary(&binding)?.to_ok()
}

#[cfg(test)]
mod tests {
    use crate::core::types::state_contract_binding::StateContractBinding;
    use crate::query::query_state_contract_binding::query_state_contract_binding;
    use crate::testutil::test_utilities::{
        get_default_state_contract_binding, test_instantiate_success, InstArgs,
    };
    use cosmwasm_std::from_binary;
    use provwasm_mocks::mock_dependencies;

    #[test]
    fn test_successful_query_from_instantiation() {
        let mut deps = mock_dependencies(&[]);
        test_instantiate_success(deps.as_mut(), InstArgs::default());
        let expected = get_default_state_contract_binding();
        let binary = query_state_contract_binding(&deps.as_ref(), &expected.state_type)
            .expect("the query should execute without error");
        let result = from_binary::<Option<StateContractBinding>>(&binary)
            .expect("expected the binary to deserialize appropriately");
        assert_eq!(
            Some(expected),
            result,
            "expected the query value to equate to the value added during instantiation",
        );
    }

    #[test]
    fn test_none_is_returned_when_binding_is_not_found() {
        let binary =
            query_state_contract_binding(&mock_dependencies(&[]).as_ref(), "unknown_state")
                .expect("the query should execute without error");
        let result = from_binary::<Option<StateContractBinding>>(&binary)
            .expect("expected the binary to deserialize appropriately");
        assert!(
            result.is_none(),
            "the resulting binary should be an empty Option",
        );
    }
}
