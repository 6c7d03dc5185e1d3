pub mod emitters;
pub mod generator;
pub mod version;

pub use generator::{CompareToContent, EqualsHashCodeContent, ToStringContent, register};
pub use version::CommonsLangVersion;
