//! Lookups from a user action to what can be generated for it.
//!
//! Both managers are built once and only read afterwards. An action with no
//! registrations yields an empty result; deciding what that means is left to
//! the caller.

mod methods;
mod skeletons;

pub use methods::MethodRegistry;
pub use skeletons::MethodSkeletonRegistry;

use crate::identifier::UserActionIdentifier;
use crate::method::{AnyMethod, AnyMethodSkeleton};

pub trait MethodSkeletonStrategyManager {
    /// Every skeleton that applies to `action`.
    fn method_skeletons(&self, action: UserActionIdentifier) -> Vec<&dyn AnyMethodSkeleton>;
}

pub trait MethodStrategyManager {
    /// Every bound method for `action`, one per selectable strategy.
    fn methods(&self, action: UserActionIdentifier) -> Vec<&dyn AnyMethod>;
}
