use std::fmt;
use std::iter::FromIterator;
use std::sync::Arc;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::party::{AbstractParty, Party};

/// The ordered set of parties entitled to see a ledger state.  The backing buffer is shared
/// between clones and is never handed out mutably, so reads never need to copy.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
#[serde(transparent)]
pub struct Participants(#[schemars(with = "Vec<Party>")] Arc<[Party]>);
impl Participants {
    pub fn new(parties: Vec<Party>) -> Self {
        Self(parties.into())
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[Party] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Party> {
        self.0.iter()
    }

    /// Iterates over each participant widened to its [AbstractParty] capability, in order.
    pub fn abstract_parties(&self) -> impl Iterator<Item = &dyn AbstractParty> + '_ {
        self.0.iter().map(|party| party.as_abstract())
    }

    /// Produces an independent copy of the participants.  Mutating the returned value has no
    /// effect on the state it was read from.
    pub fn to_vec(&self) -> Vec<Party> {
        self.0.to_vec()
    }
}
impl Default for Participants {
    fn default() -> Self {
        Self::empty()
    }
}
impl From<Vec<Party>> for Participants {
    fn from(parties: Vec<Party>) -> Self {
        Self::new(parties)
    }
}
impl FromIterator<Party> for Participants {
    fn from_iter<I: IntoIterator<Item = Party>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
impl<'a> IntoIterator for &'a Participants {
    type Item = &'a Party;

    type IntoIter = std::slice::Iter<'a, Party>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
impl fmt::Display for Participants {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (index, party) in self.0.iter().enumerate() {
            if index > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", party)?;
        }
        write!(f, "]")
    }
}
