use super::participants::Participants;
use super::party::{AbstractParty, Party};

/// A unit of shared fact recorded by the contract.  Each implementor names the state type under
/// which its governing verification rule set is registered in the
/// [state contract bindings](crate::core::state::STATE_CONTRACT_BINDINGS).
pub trait LedgerState {
    const STATE_TYPE: &'static str;
}

/// An event recorded against a tracked asset, attributable to a single author and visible to a
/// fixed set of participants.
pub trait AssetEventState: LedgerState {
    /// The party responsible for asserting the fact carried by this state.
    fn author(&self) -> &Party;

    /// The parties entitled to see this state, in the order they were assigned.
    fn participants(&self) -> &Participants;

    fn abstract_author(&self) -> &dyn AbstractParty {
        self.author().as_abstract()
    }
}
