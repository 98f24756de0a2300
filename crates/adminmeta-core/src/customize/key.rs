use derive_more::Display;

///
/// MemberKey
///
/// Stable identity of a customized member: owning entity name plus member
/// name. Ordering is by entity, then member.
///

#[derive(Clone, Debug, Display, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[display("{entity}.{member}")]
pub struct MemberKey {
    pub entity: String,
    pub member: String,
}

impl MemberKey {
    #[must_use]
    pub fn new(entity: impl Into<String>, member: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            member: member.into(),
        }
    }
}
