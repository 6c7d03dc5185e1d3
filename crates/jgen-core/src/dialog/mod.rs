//! Dialog strategies: the pluggable per-style option panels.
//!
//! A strategy owns its option state, loads and stores it through the
//! [`SettingsStore`], and turns the common [`FieldDialogData`] into its own
//! [`GenerationData`]. UI events reach it as typed commands.

mod default;
mod equals_hash_code;
mod field_dialog;
mod to_string;
mod widgets;

use std::any::Any;

pub use default::DefaultDialogStrategy;
pub use equals_hash_code::{
    EqualsHashCodeCommand, EqualsHashCodeComponents, EqualsHashCodeDialogStrategy,
};
pub use field_dialog::{ErrorBanner, FieldDialog};
pub use to_string::{ToStringCommand, ToStringDialogStrategy};
pub use widgets::{TextEdit, TextField};

use crate::data::{FieldDialogData, GenerationData};
use crate::identifier::{CommandIdentifier, StrategyIdentifier};
use crate::settings::SettingsStore;

/// Error banner of the hosting dialog.
pub trait DialogHost {
    fn show_error_message(&mut self, message: &str);
    fn clear_error_message(&mut self);
}

/// What a strategy did with a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandOutcome {
    Applied,
    /// Rejected before touching any state.
    Vetoed,
    /// Target control is missing or disabled.
    Ignored,
}

pub trait DialogStrategy: 'static {
    type Data: GenerationData;
    type Command;

    fn command_identifier(&self) -> CommandIdentifier;

    fn strategy_identifier(&self) -> StrategyIdentifier;

    /// Load persisted options, creating this strategy's sections on first use.
    fn configure_specific_dialog_settings(&mut self, _settings: &mut SettingsStore) {}

    /// Build the option controls. Calling it again before a dispose is a no-op.
    fn create_specific_components(&mut self) {}

    /// Second initialisation phase, run by the host once layout is done.
    fn on_ready(&mut self) {}

    /// Tear down the option controls. A no-op when nothing was created.
    fn dispose_specific_components(&mut self) {}

    fn handle(&mut self, command: Self::Command, dialog: &mut dyn DialogHost) -> CommandOutcome;

    /// Write current options back; runs once per confirmed close.
    fn callback_before_dialog_closing(&mut self, _settings: &mut SettingsStore) {}

    fn get_data(&self, base: FieldDialogData) -> Self::Data;
}

/// Object-safe view of a [`DialogStrategy`], as held by the registry.
pub trait AnyDialogStrategy: Any {
    fn command_identifier(&self) -> CommandIdentifier;
    fn strategy_identifier(&self) -> StrategyIdentifier;
    fn configure_specific_dialog_settings(&mut self, settings: &mut SettingsStore);
    fn create_specific_components(&mut self);
    fn on_ready(&mut self);
    fn dispose_specific_components(&mut self);
    fn callback_before_dialog_closing(&mut self, settings: &mut SettingsStore);
    fn data(&self, base: FieldDialogData) -> Box<dyn GenerationData>;
}

impl<T: DialogStrategy> AnyDialogStrategy for T {
    fn command_identifier(&self) -> CommandIdentifier {
        DialogStrategy::command_identifier(self)
    }

    fn strategy_identifier(&self) -> StrategyIdentifier {
        DialogStrategy::strategy_identifier(self)
    }

    fn configure_specific_dialog_settings(&mut self, settings: &mut SettingsStore) {
        DialogStrategy::configure_specific_dialog_settings(self, settings)
    }

    fn create_specific_components(&mut self) {
        DialogStrategy::create_specific_components(self)
    }

    fn on_ready(&mut self) {
        DialogStrategy::on_ready(self)
    }

    fn dispose_specific_components(&mut self) {
        DialogStrategy::dispose_specific_components(self)
    }

    fn callback_before_dialog_closing(&mut self, settings: &mut SettingsStore) {
        DialogStrategy::callback_before_dialog_closing(self, settings)
    }

    fn data(&self, base: FieldDialogData) -> Box<dyn GenerationData> {
        Box::new(DialogStrategy::get_data(self, base))
    }
}

/// All installed dialog strategies, keyed by (command, strategy).
#[derive(Default)]
pub struct DialogStrategyRegistry {
    strategies: Vec<Box<dyn AnyDialogStrategy>>,
}

impl DialogStrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy. A later one with the same key replaces the earlier one.
    pub fn register(&mut self, strategy: Box<dyn AnyDialogStrategy>) {
        let command = strategy.command_identifier();
        let id = strategy.strategy_identifier();
        self.strategies
            .retain(|s| s.command_identifier() != command || s.strategy_identifier() != id);
        log::debug!("registered {id} dialog strategy for {command}");
        self.strategies.push(strategy);
    }

    pub fn get(
        &self,
        command: CommandIdentifier,
        strategy: StrategyIdentifier,
    ) -> Option<&(dyn AnyDialogStrategy + 'static)> {
        self.strategies
            .iter()
            .find(|s| s.command_identifier() == command && s.strategy_identifier() == strategy)
            .map(Box::as_ref)
    }

    pub fn get_mut(
        &mut self,
        command: CommandIdentifier,
        strategy: StrategyIdentifier,
    ) -> Option<&mut (dyn AnyDialogStrategy + 'static)> {
        self.strategies
            .iter_mut()
            .find(|s| s.command_identifier() == command && s.strategy_identifier() == strategy)
            .map(Box::as_mut)
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }
}

/// Downcast an erased strategy to its concrete type.
pub fn downcast_strategy<'a, S: DialogStrategy>(
    strategy: &'a (dyn AnyDialogStrategy + 'static),
) -> Option<&'a S> {
    let any: &dyn Any = strategy;
    any.downcast_ref::<S>()
}

pub fn downcast_strategy_mut<'a, S: DialogStrategy>(
    strategy: &'a mut (dyn AnyDialogStrategy + 'static),
) -> Option<&'a mut S> {
    let any: &mut dyn Any = strategy;
    any.downcast_mut::<S>()
}
