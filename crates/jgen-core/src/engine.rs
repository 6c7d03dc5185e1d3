//! The generation pipeline: resolve, open a dialog, confirm, dispatch.

use crate::config::Preferences;
use crate::data::GenerationData;
use crate::dialog::{DialogStrategy, DialogStrategyRegistry, FieldDialog};
use crate::error::GenerationError;
use crate::identifier::{StrategyIdentifier, UserActionIdentifier};
use crate::manage::{
    MethodRegistry, MethodSkeletonRegistry, MethodSkeletonStrategyManager, MethodStrategyManager,
};
use crate::method::{AnyMethod, AnyMethodSkeleton, Method, MethodContent, MethodSkeleton};
use crate::model::JavaClass;
use crate::settings::SettingsStore;
use crate::skeleton::{CompareToMethodSkeleton, EqualsHashCodeMethodSkeleton, ToStringMethodSkeleton};
use crate::GeneratedCode;

/// Registers skeletons, bound methods, and dialog strategies before the engine is sealed.
#[derive(Default)]
pub struct EngineBuilder {
    skeletons: MethodSkeletonRegistry,
    methods: MethodRegistry,
    strategies: DialogStrategyRegistry,
}

impl EngineBuilder {
    pub fn skeleton<S: MethodSkeleton>(mut self, skeleton: S) -> Self {
        self.skeletons.register(Box::new(skeleton));
        self
    }

    /// Register the equals/hashCode, toString, and compareTo skeletons.
    pub fn standard_skeletons(self) -> Self {
        self.skeleton(EqualsHashCodeMethodSkeleton)
            .skeleton(ToStringMethodSkeleton)
            .skeleton(CompareToMethodSkeleton)
    }

    pub fn method<S, C>(mut self, method: Method<S, C>) -> Self
    where
        S: MethodSkeleton,
        C: MethodContent<Data = S::Data>,
    {
        self.methods.register(Box::new(method));
        self
    }

    pub fn dialog_strategy<D: DialogStrategy>(mut self, strategy: D) -> Self {
        self.strategies.register(Box::new(strategy));
        self
    }

    pub fn build(self) -> Engine {
        Engine {
            skeletons: self.skeletons,
            methods: self.methods,
            strategies: self.strategies,
        }
    }
}

/// Owns every registry; built once and reused for each request.
pub struct Engine {
    skeletons: MethodSkeletonRegistry,
    methods: MethodRegistry,
    strategies: DialogStrategyRegistry,
}

impl Engine {
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }

    pub fn skeleton_manager(&self) -> &dyn MethodSkeletonStrategyManager {
        &self.skeletons
    }

    pub fn method_manager(&self) -> &dyn MethodStrategyManager {
        &self.methods
    }

    pub fn method_skeletons(&self, action: UserActionIdentifier) -> Vec<&dyn AnyMethodSkeleton> {
        self.skeletons.method_skeletons(action)
    }

    pub fn methods(&self, action: UserActionIdentifier) -> Vec<&dyn AnyMethod> {
        self.methods.methods(action)
    }

    /// Strategies a user can choose from for `action`.
    pub fn strategies(&self, action: UserActionIdentifier) -> Vec<StrategyIdentifier> {
        self.methods.strategies(action)
    }

    /// Resolve the strategy for (action, strategy), load its settings, and build its controls.
    pub fn open_dialog<'a>(
        &'a mut self,
        action: UserActionIdentifier,
        strategy: StrategyIdentifier,
        class: &'a JavaClass,
        settings: &'a mut SettingsStore,
        preferences: &Preferences,
    ) -> Result<FieldDialog<'a>, GenerationError> {
        let unknown = GenerationError::UnknownStrategy { action, strategy };
        if self.methods.method(action, strategy).is_none() {
            return Err(unknown);
        }

        let generated_names: Vec<String> = self
            .skeletons
            .method_skeletons(action)
            .iter()
            .flat_map(|s| s.signatures(class))
            .map(|s| s.name)
            .collect();
        let generated: Vec<&str> = generated_names.iter().map(String::as_str).collect();
        let excluded = class.excluded_methods(&generated);

        let dialog_strategy = self
            .strategies
            .get_mut(action.command(), strategy)
            .ok_or(unknown)?;
        log::debug!("opening {action} dialog with {strategy} strategy");
        Ok(FieldDialog::new(
            action,
            class,
            dialog_strategy,
            settings,
            preferences,
            excluded,
        ))
    }

    /// Hand confirmed data to the method bound to (action, strategy).
    pub fn generate(
        &self,
        action: UserActionIdentifier,
        strategy: StrategyIdentifier,
        class: &JavaClass,
        data: &dyn GenerationData,
    ) -> Result<GeneratedCode, GenerationError> {
        let method = self
            .methods
            .method(action, strategy)
            .ok_or(GenerationError::UnknownStrategy { action, strategy })?;
        let code = method.generate(class, data)?;
        log::info!(
            "generated {} method(s) for {} with {strategy}",
            code.methods.len(),
            class.name
        );
        Ok(code)
    }
}
