use super::{CommandOutcome, DialogHost, DialogStrategy};
use crate::data::{FieldDialogData, ToStringGenerationData, ToStringStyle};
use crate::identifier::{CommandIdentifier, StrategyIdentifier};
use crate::settings::SettingsStore;

pub const TO_STRING_SETTINGS_SECTION: &str = "ToStringDialog";
const SETTINGS_STYLE: &str = "Style";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToStringCommand {
    SetStyle(ToStringStyle),
}

/// toString options: the commons-lang `ToStringStyle` to build with.
#[derive(Debug, Clone)]
pub struct ToStringDialogStrategy {
    strategy_identifier: StrategyIdentifier,
    style: ToStringStyle,
    /// Selected entry of the style combo; `None` until ready or when disposed.
    style_selection: Option<Option<ToStringStyle>>,
}

impl ToStringDialogStrategy {
    pub fn new(strategy_identifier: StrategyIdentifier) -> Self {
        Self {
            strategy_identifier,
            style: ToStringStyle::Default,
            style_selection: None,
        }
    }

    pub fn style(&self) -> ToStringStyle {
        self.style
    }

    /// `Some(None)` while created but not yet ready.
    pub fn style_selection(&self) -> Option<Option<ToStringStyle>> {
        self.style_selection
    }
}

impl DialogStrategy for ToStringDialogStrategy {
    type Data = ToStringGenerationData;
    type Command = ToStringCommand;

    fn command_identifier(&self) -> CommandIdentifier {
        CommandIdentifier::ToString
    }

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.strategy_identifier
    }

    fn configure_specific_dialog_settings(&mut self, settings: &mut SettingsStore) {
        let section = settings
            .section_or_insert(self.strategy_identifier.settings_section())
            .section_or_insert(TO_STRING_SETTINGS_SECTION);
        self.style = match section.get(SETTINGS_STYLE) {
            Some(value) => value.parse().unwrap_or_else(|e| {
                log::debug!("{e}, using {}", ToStringStyle::Default);
                ToStringStyle::Default
            }),
            None => ToStringStyle::Default,
        };
    }

    fn create_specific_components(&mut self) {
        if self.style_selection.is_none() {
            self.style_selection = Some(None);
        }
    }

    fn on_ready(&mut self) {
        if self.style_selection.is_some() {
            self.style_selection = Some(Some(self.style));
        }
    }

    fn dispose_specific_components(&mut self) {
        self.style_selection = None;
    }

    fn handle(&mut self, command: ToStringCommand, _dialog: &mut dyn DialogHost) -> CommandOutcome {
        match command {
            ToStringCommand::SetStyle(style) => {
                self.style = style;
                if self.style_selection.is_some() {
                    self.style_selection = Some(Some(style));
                }
                CommandOutcome::Applied
            }
        }
    }

    fn callback_before_dialog_closing(&mut self, settings: &mut SettingsStore) {
        settings
            .section_or_insert(self.strategy_identifier.settings_section())
            .section_or_insert(TO_STRING_SETTINGS_SECTION)
            .put(SETTINGS_STYLE, self.style.constant());
    }

    fn get_data(&self, base: FieldDialogData) -> ToStringGenerationData {
        ToStringGenerationData::new(base, self.style)
    }
}
