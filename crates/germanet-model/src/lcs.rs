//! Least common subsumer results.
//!
//! The graph search that finds the most specific shared hypernym of two
//! synsets lives elsewhere; this type only carries its answer. Endpoints
//! form an unordered pair, so they are stored ascending and two results
//! built in either order compare and hash the same.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawLeastCommonSubsumer")]
pub struct LeastCommonSubsumer {
    lcs_id: i32,
    from_to_ids: [i32; 2],
    /// Hops across hypernym/hyponym edges.
    distance: u32,
}

#[derive(Deserialize)]
struct RawLeastCommonSubsumer {
    lcs_id: i32,
    from_to_ids: Vec<i32>,
    distance: u32,
}

impl TryFrom<RawLeastCommonSubsumer> for LeastCommonSubsumer {
    type Error = ModelError;

    fn try_from(raw: RawLeastCommonSubsumer) -> Result<Self, Self::Error> {
        Self::from_endpoints(raw.lcs_id, raw.from_to_ids, raw.distance)
    }
}

impl LeastCommonSubsumer {
    pub fn new(lcs_id: i32, from_id: i32, to_id: i32, distance: u32) -> Result<Self, ModelError> {
        if from_id == to_id {
            return Err(ModelError::InvalidEndpoints {
                endpoints: vec![from_id, to_id],
            });
        }
        Ok(Self {
            lcs_id,
            from_to_ids: [from_id.min(to_id), from_id.max(to_id)],
            distance,
        })
    }

    /// Build from an endpoint set; it must hold exactly two distinct ids.
    pub fn from_endpoints<I>(lcs_id: i32, endpoints: I, distance: u32) -> Result<Self, ModelError>
    where
        I: IntoIterator<Item = i32>,
    {
        let set: BTreeSet<i32> = endpoints.into_iter().collect();
        match set.iter().copied().collect::<Vec<_>>().as_slice() {
            [from, to] => Self::new(lcs_id, *from, *to, distance),
            other => Err(ModelError::InvalidEndpoints {
                endpoints: other.to_vec(),
            }),
        }
    }

    /// Synset id of the subsumer.
    pub fn lcs_id(&self) -> i32 {
        self.lcs_id
    }

    /// The two endpoint synset ids, ascending.
    pub fn from_to_ids(&self) -> [i32; 2] {
        self.from_to_ids
    }

    pub fn distance(&self) -> u32 {
        self.distance
    }

    pub fn contains(&self, synset_id: i32) -> bool {
        self.from_to_ids.contains(&synset_id)
    }
}

impl fmt::Display for LeastCommonSubsumer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "lcsID: {} fromTo: [{}, {}] distance: {}",
            self.lcs_id, self.from_to_ids[0], self.from_to_ids[1], self.distance
        )
    }
}
