use indexmap::IndexMap;

use super::MethodStrategyManager;
use crate::identifier::{StrategyIdentifier, UserActionIdentifier};
use crate::method::AnyMethod;

#[derive(Default)]
pub struct MethodRegistry {
    methods: IndexMap<UserActionIdentifier, Vec<Box<dyn AnyMethod>>>,
}

impl MethodRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a binding. A later binding for the same (action, strategy) replaces the earlier one.
    pub fn register(&mut self, method: Box<dyn AnyMethod>) {
        let action = method.user_action();
        let strategy = method.strategy_identifier();
        let methods = self.methods.entry(action).or_default();
        match methods
            .iter_mut()
            .find(|m| m.strategy_identifier() == strategy)
        {
            Some(existing) => {
                log::warn!("replacing {strategy} method for {action}");
                *existing = method;
            }
            None => {
                log::debug!("registered {strategy} method for {action}");
                methods.push(method);
            }
        }
    }

    /// The binding used when dispatching a confirmed request.
    pub fn method(
        &self,
        action: UserActionIdentifier,
        strategy: StrategyIdentifier,
    ) -> Option<&dyn AnyMethod> {
        self.methods
            .get(&action)?
            .iter()
            .find(|m| m.strategy_identifier() == strategy)
            .map(Box::as_ref)
    }

    /// Strategies a user can pick for `action`.
    pub fn strategies(&self, action: UserActionIdentifier) -> Vec<StrategyIdentifier> {
        self.methods(action)
            .iter()
            .map(|m| m.strategy_identifier())
            .collect()
    }
}

impl MethodStrategyManager for MethodRegistry {
    fn methods(&self, action: UserActionIdentifier) -> Vec<&dyn AnyMethod> {
        self.methods
            .get(&action)
            .map(|methods| methods.iter().map(Box::as_ref).collect())
            .unwrap_or_default()
    }
}
