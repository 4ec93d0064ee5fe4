//! Closed relation-kind enumerations.
//!
//! Resource files name relations by their printable name (`"synonym"`,
//! `"has_antonym"`). A name is valid only if it matches a member exactly:
//! case-sensitive, no aliases. Unknown names are an error at lookup time and
//! are never mapped to a default.

use crate::ModelError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A closed set of named relation kinds.
pub trait RelationKind: Copy + Sized + 'static {
    /// Human-readable name of the enumeration, used in error messages.
    const KIND: &'static str;

    /// Every member, in declaration order.
    const ALL: &'static [Self];

    /// Printable name as it appears in resource files.
    fn name(&self) -> &'static str;

    fn is_valid_name(name: &str) -> bool {
        Self::ALL.iter().any(|rel| rel.name() == name)
    }

    fn lookup(name: &str) -> Result<Self, ModelError> {
        Self::ALL
            .iter()
            .copied()
            .find(|rel| rel.name() == name)
            .ok_or_else(|| ModelError::UnknownRelation {
                kind: Self::KIND,
                name: name.to_string(),
            })
    }
}

macro_rules! relation_kind {
    (
        $(#[$meta:meta])*
        $ty:ident, $kind:literal {
            $($variant:ident => $name:literal,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        pub enum $ty {
            $(
                #[serde(rename = $name)]
                $variant,
            )+
        }

        impl RelationKind for $ty {
            const KIND: &'static str = $kind;
            const ALL: &'static [Self] = &[$(Self::$variant,)+];

            fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name,)+
                }
            }
        }

        impl FromStr for $ty {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::lookup(s)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }
    };
}

relation_kind! {
    /// EuroWordNet relation linking a GermaNet lexical unit to a
    /// Princeton WordNet sense in the inter-lingual index.
    EwnRel, "EuroWordNet" {
        Synonym => "synonym",
        NearSynonym => "near_synonym",
        EqSynonym => "eq_synonym",
        HasHypernym => "has_hypernym",
        HasHyponym => "has_hyponym",
        HasHolonym => "has_holonym",
        HasMeronym => "has_meronym",
        BeInState => "be_in_state",
        Causes => "causes",
        Involved => "involved",
        IsCausedBy => "is_caused_by",
        IsInvolved => "is_involved",
        IsSubeventOf => "is_subevent_of",
        HasSubevent => "has_subevent",
        XposNearSynonym => "xpos_near_synonym",
        HasXposHypernym => "has_xpos_hypernym",
        HasXposHyponym => "has_xpos_hyponym",
    }
}

relation_kind! {
    /// Lexical relation between two lexical units.
    LexRel, "lexical" {
        HasSynonym => "has_synonym",
        HasAntonym => "has_antonym",
        HasPertainym => "has_pertainym",
        HasParticiple => "has_participle",
    }
}
