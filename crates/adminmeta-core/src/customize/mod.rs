//! User-declared customizations.
//!
//! Everything here is write-only accumulation: sparse patches keyed by
//! member, no validation and no access to the entity being customized.

mod holder;
mod key;
mod patch;
mod property;

pub use holder::CustomizationHolder;
pub use key::MemberKey;
pub use patch::{EntityPatch, ForeignKeyPatch, PropertyPatch};
pub use property::PropertyCustomizer;
