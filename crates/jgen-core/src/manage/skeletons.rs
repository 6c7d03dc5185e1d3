use indexmap::IndexMap;

use super::MethodSkeletonStrategyManager;
use crate::identifier::UserActionIdentifier;
use crate::method::AnyMethodSkeleton;

#[derive(Default)]
pub struct MethodSkeletonRegistry {
    skeletons: IndexMap<UserActionIdentifier, Vec<Box<dyn AnyMethodSkeleton>>>,
}

impl MethodSkeletonRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, skeleton: Box<dyn AnyMethodSkeleton>) {
        let action = skeleton.user_action();
        log::debug!("registered {action} skeleton for {}", skeleton.data_type());
        self.skeletons.entry(action).or_default().push(skeleton);
    }
}

impl MethodSkeletonStrategyManager for MethodSkeletonRegistry {
    fn method_skeletons(&self, action: UserActionIdentifier) -> Vec<&dyn AnyMethodSkeleton> {
        self.skeletons
            .get(&action)
            .map(|skeletons| skeletons.iter().map(Box::as_ref).collect())
            .unwrap_or_default()
    }
}
