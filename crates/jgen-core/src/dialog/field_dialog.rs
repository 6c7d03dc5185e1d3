use std::any::type_name;

use super::{
    AnyDialogStrategy, CommandOutcome, DialogHost, DialogStrategy, downcast_strategy,
    downcast_strategy_mut,
};
use crate::config::Preferences;
use crate::data::{FieldDialogData, GenerationData};
use crate::error::GenerationError;
use crate::identifier::UserActionIdentifier;
use crate::model::{ElementPosition, JavaClass, JavaField};
use crate::settings::SettingsStore;

/// The dialog's error line. Any message blocks confirmation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorBanner {
    message: Option<String>,
}

impl ErrorBanner {
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl DialogHost for ErrorBanner {
    fn show_error_message(&mut self, message: &str) {
        self.message = Some(message.to_string());
    }

    fn clear_error_message(&mut self) {
        self.message = None;
    }
}

/// Headless field dialog: the common options plus one strategy's options.
///
/// Created by [`Engine::open_dialog`](crate::Engine::open_dialog). Dropping it
/// without confirming cancels: the strategy's controls are disposed and
/// nothing is written to the settings store.
pub struct FieldDialog<'a> {
    action: UserActionIdentifier,
    class: &'a JavaClass,
    strategy: &'a mut (dyn AnyDialogStrategy + 'static),
    settings: &'a mut SettingsStore,
    banner: ErrorBanner,
    checked: Vec<String>,
    element_position: ElementPosition,
    excluded_methods: Vec<String>,
    append_super: bool,
    generate_comment: bool,
    use_getters_instead_of_fields: bool,
    use_block_in_if_statements: bool,
    ready: bool,
}

impl<'a> FieldDialog<'a> {
    pub(crate) fn new(
        action: UserActionIdentifier,
        class: &'a JavaClass,
        strategy: &'a mut (dyn AnyDialogStrategy + 'static),
        settings: &'a mut SettingsStore,
        preferences: &Preferences,
        excluded_methods: Vec<String>,
    ) -> Self {
        strategy.configure_specific_dialog_settings(settings);
        strategy.create_specific_components();
        Self {
            action,
            class,
            strategy,
            settings,
            banner: ErrorBanner::default(),
            checked: class.fields.iter().map(|f| f.name.clone()).collect(),
            element_position: ElementPosition::Last,
            excluded_methods,
            append_super: preferences.append_super && class.has_superclass(),
            generate_comment: preferences.generate_comment,
            use_getters_instead_of_fields: preferences.use_getters_instead_of_fields,
            use_block_in_if_statements: preferences.use_block_in_if_statements,
            ready: false,
        }
    }

    pub fn action(&self) -> UserActionIdentifier {
        self.action
    }

    /// Run deferred initialisation once layout is complete.
    pub fn on_ready(&mut self) {
        if !self.ready {
            self.strategy.on_ready();
            self.ready = true;
        }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }

    pub fn checked_fields(&self) -> Vec<&JavaField> {
        self.checked
            .iter()
            .filter_map(|name| self.class.field(name))
            .collect()
    }

    /// Replace the selection; `names` order becomes the output order.
    pub fn set_checked_fields(&mut self, names: &[&str]) {
        self.checked.clear();
        for name in names {
            self.check_field(name);
        }
    }

    /// Append a field to the selection.
    pub fn check_field(&mut self, name: &str) {
        if self.class.field(name).is_none() {
            log::warn!("{} has no field {name}", self.class.name);
            return;
        }
        if !self.checked.iter().any(|n| n == name) {
            self.checked.push(name.to_string());
        }
    }

    pub fn uncheck_field(&mut self, name: &str) {
        self.checked.retain(|n| n != name);
    }

    pub fn move_field_up(&mut self, name: &str) {
        if let Some(i) = self.checked.iter().position(|n| n == name)
            && i > 0
        {
            self.checked.swap(i - 1, i);
        }
    }

    pub fn move_field_down(&mut self, name: &str) {
        if let Some(i) = self.checked.iter().position(|n| n == name)
            && i + 1 < self.checked.len()
        {
            self.checked.swap(i, i + 1);
        }
    }

    /// Methods that will be replaced and so cannot anchor the insertion point.
    pub fn excluded_methods(&self) -> &[String] {
        &self.excluded_methods
    }

    pub fn element_position(&self) -> &ElementPosition {
        &self.element_position
    }

    pub fn set_element_position(&mut self, position: ElementPosition) {
        if let ElementPosition::After(method) = &position
            && (self.excluded_methods.contains(method)
                || !self.class.methods.contains(method))
        {
            log::warn!("cannot insert after {method}, inserting last");
            self.element_position = ElementPosition::Last;
            return;
        }
        self.element_position = position;
    }

    /// Without a superclass there is nothing to append; the toggle stays off.
    pub fn set_append_super(&mut self, value: bool) {
        if value && !self.class.has_superclass() {
            log::debug!("{} has no superclass, not appending super", self.class.name);
            return;
        }
        self.append_super = value;
    }

    pub fn append_super(&self) -> bool {
        self.append_super
    }

    pub fn set_generate_comment(&mut self, value: bool) {
        self.generate_comment = value;
    }

    pub fn set_use_getters_instead_of_fields(&mut self, value: bool) {
        self.use_getters_instead_of_fields = value;
    }

    pub fn set_use_block_in_if_statements(&mut self, value: bool) {
        self.use_block_in_if_statements = value;
    }

    /// Route a typed command to the strategy, which must be an `S`.
    pub fn send<S: DialogStrategy>(
        &mut self,
        command: S::Command,
    ) -> Result<CommandOutcome, GenerationError> {
        let strategy = downcast_strategy_mut::<S>(&mut *self.strategy).ok_or(
            GenerationError::StrategyMismatch {
                expected: type_name::<S>(),
            },
        )?;
        Ok(strategy.handle(command, &mut self.banner))
    }

    pub fn strategy<S: DialogStrategy>(&self) -> Option<&S> {
        downcast_strategy::<S>(&*self.strategy)
    }

    pub fn error_message(&self) -> Option<&str> {
        self.banner.message()
    }

    pub fn can_confirm(&self) -> bool {
        self.banner.message().is_none() && !self.checked.is_empty()
    }

    /// Build the request, persist the strategy's options, and close the dialog.
    pub fn confirm(self) -> Result<Box<dyn GenerationData>, GenerationError> {
        if let Some(message) = self.banner.message() {
            return Err(GenerationError::ConfirmationBlocked(message.to_string()));
        }
        if self.checked.is_empty() {
            return Err(GenerationError::NoFieldsSelected);
        }
        let base = FieldDialogData::builder()
            .checked_fields(self.checked_fields().into_iter().cloned().collect())
            .element_position(self.element_position.clone())
            .append_super(self.append_super)
            .generate_comment(self.generate_comment)
            .use_getters_instead_of_fields(self.use_getters_instead_of_fields)
            .use_block_in_if_statements(self.use_block_in_if_statements)
            .build();
        let data = self.strategy.data(base);
        self.strategy.callback_before_dialog_closing(self.settings);
        log::debug!(
            "confirmed {} dialog with {} fields",
            self.action,
            data.checked_fields().len()
        );
        Ok(data)
    }

    /// Close without building or persisting anything.
    pub fn cancel(self) {}
}

impl Drop for FieldDialog<'_> {
    fn drop(&mut self) {
        self.strategy.dispose_specific_components();
    }
}
