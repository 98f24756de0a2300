//! Boundary with the reflection layer.
//!
//! Reflection itself is not done here; whatever enumerates a type's members
//! hands over a [`TypeDescriptor`], and that is all the resolver ever sees.

use adminmeta_primitives::NativeType;

///
/// Reflect
///
/// Implemented (usually by generated code) for every type that is exposed
/// as an entity.
///

pub trait Reflect {
    fn type_descriptor() -> TypeDescriptor;
}

///
/// TypeDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TypeDescriptor {
    pub name: String,
    pub members: Vec<MemberDescriptor>,
}

impl TypeDescriptor {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            members: Vec::new(),
        }
    }

    /// Append a member declared directly on this type.
    #[must_use]
    pub fn member(mut self, name: impl Into<String>, native_type: NativeType) -> Self {
        let declaring_type = self.name.clone();
        self.members.push(MemberDescriptor {
            name: name.into(),
            native_type,
            declaring_type,
        });

        self
    }
}

///
/// MemberDescriptor
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct MemberDescriptor {
    pub name: String,
    pub native_type: NativeType,
    pub declaring_type: String,
}
