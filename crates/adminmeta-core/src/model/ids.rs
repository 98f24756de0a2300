use derive_more::Display;
use serde::Serialize;

///
/// EntityId
/// Position of an entity inside its schema.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("entity#{_0}")]
pub struct EntityId(pub(crate) usize);

impl EntityId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

///
/// PropertyId
/// Position of a property inside its owning entity.
///

#[derive(Clone, Copy, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[display("property#{_0}")]
pub struct PropertyId(pub(crate) usize);

impl PropertyId {
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

///
/// ResolutionStage
///
/// Entities only ever move forward through these stages.
///

#[derive(Clone, Copy, Debug, Default, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
pub enum ResolutionStage {
    #[default]
    Unresolved,
    IdentityResolved,
    BehaviorResolved,
}

impl ResolutionStage {
    /// Whether keys and naming are final, so other entities may link here.
    #[must_use]
    pub const fn is_identity_resolved(self) -> bool {
        matches!(self, Self::IdentityResolved | Self::BehaviorResolved)
    }
}
