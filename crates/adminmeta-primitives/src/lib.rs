//! Leaf vocabulary shared by the metadata model and the customization layer.
//!
//! Nothing in here depends on entities or patches; these are plain value
//! types that both sides agree on.

mod data_type;
mod native;
mod options;

pub use data_type::DataType;
pub use native::NativeType;
pub use options::{DeleteOption, FileNameOption};

/// Native type used for a foreign key whose target key type cannot be found.
pub const FALLBACK_FOREIGN_KEY_TYPE: NativeType = NativeType::Int32;
