pub mod emitters;
pub mod expressions;
pub mod generator;

pub use generator::{JdkCompareToContent, JdkEqualsHashCodeContent, JdkToStringContent, register};
