use super::widgets::{TextEdit, TextField};
use super::{CommandOutcome, DialogHost, DialogStrategy};
use crate::data::{EqualsHashCodeGenerationData, FieldDialogData};
use crate::hashcode::{InitMultPair, InitMultType, OddNumber};
use crate::identifier::{CommandIdentifier, StrategyIdentifier};
use crate::settings::SettingsStore;

pub const EQUALS_SETTINGS_SECTION: &str = "EqualsDialog";
pub const HASHCODE_SETTINGS_SECTION: &str = "HashCodeDialog";
const SETTINGS_COMPARE_REFERENCES: &str = "CompareReferences";
const SETTINGS_CLASS_COMPARISON: &str = "ClassComparison";
const SETTINGS_INIT_MULT_TYPE: &str = "InitMultType";
const SETTINGS_INITIAL_NUMBER: &str = "InitialNumber";
const SETTINGS_MULTIPLIER_NUMBER: &str = "MultiplierNumber";

const INITIAL_NUMBER_ERROR: &str = "Initial number must be an odd number.";
const MULTIPLIER_NUMBER_ERROR: &str = "Multiplier number must be an odd number.";

/// UI events understood by [`EqualsHashCodeDialogStrategy`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EqualsHashCodeCommand {
    SetCompareReferences(bool),
    SetClassComparison(bool),
    SetInitMultType(InitMultType),
    EditInitial(TextEdit),
    EditMultiplier(TextEdit),
}

/// Option controls of the equals/hashCode panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualsHashCodeComponents {
    pub compare_references: bool,
    pub class_comparison: bool,
    /// Unset until the host reports the dialog ready.
    pub init_mult_selection: Option<InitMultType>,
    pub initial_text: TextField,
    pub multiplier_text: TextField,
}

/// Equals and hashCode options: reference comparison, class comparison, and the
/// hash code seed/multiplier pair.
#[derive(Debug, Clone)]
pub struct EqualsHashCodeDialogStrategy {
    strategy_identifier: StrategyIdentifier,
    compare_references: bool,
    class_comparison: bool,
    init_mult_type: InitMultType,
    initial_number: OddNumber,
    multiplier_number: OddNumber,
    components: Option<EqualsHashCodeComponents>,
}

impl EqualsHashCodeDialogStrategy {
    pub fn new(strategy_identifier: StrategyIdentifier) -> Self {
        Self {
            strategy_identifier,
            compare_references: false,
            class_comparison: false,
            init_mult_type: InitMultType::Default,
            initial_number: OddNumber::SEVENTEEN,
            multiplier_number: OddNumber::THIRTY_SEVEN,
            components: None,
        }
    }

    pub fn components(&self) -> Option<&EqualsHashCodeComponents> {
        self.components.as_ref()
    }

    pub fn init_mult_type(&self) -> InitMultType {
        self.init_mult_type
    }

    /// Last committed custom numbers.
    pub fn custom_numbers(&self) -> InitMultPair {
        InitMultPair::new(self.initial_number, self.multiplier_number)
    }

    pub fn compare_references(&self) -> bool {
        self.compare_references
    }

    pub fn class_comparison(&self) -> bool {
        self.class_comparison
    }

    fn edit_text(
        &mut self,
        edit: TextEdit,
        multiplier: bool,
        dialog: &mut dyn DialogHost,
    ) -> CommandOutcome {
        let Some(components) = self.components.as_mut() else {
            log::debug!("text edit without option controls ignored");
            return CommandOutcome::Ignored;
        };
        let field = if multiplier {
            &mut components.multiplier_text
        } else {
            &mut components.initial_text
        };
        if !field.is_enabled() {
            return CommandOutcome::Ignored;
        }
        if !field.verify_and_apply(&edit) {
            return CommandOutcome::Vetoed;
        }
        self.check_input(dialog);
        CommandOutcome::Applied
    }

    /// Re-validate both number fields, committing each odd value.
    fn check_input(&mut self, dialog: &mut dyn DialogHost) {
        let Some(components) = self.components.as_ref() else {
            return;
        };
        let Some(initial) = OddNumber::parse(components.initial_text.text()) else {
            dialog.show_error_message(INITIAL_NUMBER_ERROR);
            return;
        };
        self.initial_number = initial;

        let Some(multiplier) = OddNumber::parse(components.multiplier_text.text()) else {
            dialog.show_error_message(MULTIPLIER_NUMBER_ERROR);
            return;
        };
        self.multiplier_number = multiplier;
        dialog.clear_error_message();
    }

    fn select_init_mult_type(&mut self, init_mult_type: InitMultType, dialog: &mut dyn DialogHost) {
        self.init_mult_type = init_mult_type;
        let custom = init_mult_type == InitMultType::Custom;
        if let Some(components) = self.components.as_mut() {
            components.init_mult_selection = Some(init_mult_type);
            components.initial_text.set_enabled(custom);
            components.multiplier_text.set_enabled(custom);
        }
        // disabled fields keep their text but no longer block the dialog
        if custom {
            self.check_input(dialog);
        } else {
            dialog.clear_error_message();
        }
    }
}

impl DialogStrategy for EqualsHashCodeDialogStrategy {
    type Data = EqualsHashCodeGenerationData;
    type Command = EqualsHashCodeCommand;

    fn command_identifier(&self) -> CommandIdentifier {
        CommandIdentifier::EqualsHashCode
    }

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.strategy_identifier
    }

    fn configure_specific_dialog_settings(&mut self, settings: &mut SettingsStore) {
        let section = settings.section_or_insert(self.strategy_identifier.settings_section());

        let equals = section.section_or_insert(EQUALS_SETTINGS_SECTION);
        self.compare_references = equals.get_bool(SETTINGS_COMPARE_REFERENCES);
        self.class_comparison = equals.get_bool(SETTINGS_CLASS_COMPARISON);

        let hash_code = section.section_or_insert(HASHCODE_SETTINGS_SECTION);
        self.init_mult_type = hash_code
            .get_int(SETTINGS_INIT_MULT_TYPE)
            .ok()
            .and_then(InitMultType::from_index)
            .unwrap_or_default();
        self.initial_number = hash_code
            .get_int(SETTINGS_INITIAL_NUMBER)
            .ok()
            .and_then(OddNumber::new)
            .unwrap_or_else(|| {
                log::debug!("no usable {SETTINGS_INITIAL_NUMBER}, using 17");
                OddNumber::SEVENTEEN
            });
        self.multiplier_number = hash_code
            .get_int(SETTINGS_MULTIPLIER_NUMBER)
            .ok()
            .and_then(OddNumber::new)
            .unwrap_or_else(|| {
                log::debug!("no usable {SETTINGS_MULTIPLIER_NUMBER}, using 37");
                OddNumber::THIRTY_SEVEN
            });
    }

    fn create_specific_components(&mut self) {
        if self.components.is_some() {
            return;
        }
        self.components = Some(EqualsHashCodeComponents {
            compare_references: self.compare_references,
            class_comparison: self.class_comparison,
            init_mult_selection: None,
            initial_text: TextField::default(),
            multiplier_text: TextField::default(),
        });
    }

    fn on_ready(&mut self) {
        let custom = self.init_mult_type == InitMultType::Custom;
        if let Some(components) = self.components.as_mut() {
            components.init_mult_selection = Some(self.init_mult_type);
            components
                .initial_text
                .set_text(self.initial_number.to_string());
            components
                .multiplier_text
                .set_text(self.multiplier_number.to_string());
            components.initial_text.set_enabled(custom);
            components.multiplier_text.set_enabled(custom);
        }
    }

    fn dispose_specific_components(&mut self) {
        self.components = None;
    }

    fn handle(&mut self, command: Self::Command, dialog: &mut dyn DialogHost) -> CommandOutcome {
        match command {
            EqualsHashCodeCommand::SetCompareReferences(value) => {
                self.compare_references = value;
                if let Some(components) = self.components.as_mut() {
                    components.compare_references = value;
                }
                CommandOutcome::Applied
            }
            EqualsHashCodeCommand::SetClassComparison(value) => {
                self.class_comparison = value;
                if let Some(components) = self.components.as_mut() {
                    components.class_comparison = value;
                }
                CommandOutcome::Applied
            }
            EqualsHashCodeCommand::SetInitMultType(init_mult_type) => {
                self.select_init_mult_type(init_mult_type, dialog);
                CommandOutcome::Applied
            }
            EqualsHashCodeCommand::EditInitial(edit) => self.edit_text(edit, false, dialog),
            EqualsHashCodeCommand::EditMultiplier(edit) => self.edit_text(edit, true, dialog),
        }
    }

    fn callback_before_dialog_closing(&mut self, settings: &mut SettingsStore) {
        let section = settings.section_or_insert(self.strategy_identifier.settings_section());

        let equals = section.section_or_insert(EQUALS_SETTINGS_SECTION);
        equals.put_bool(SETTINGS_COMPARE_REFERENCES, self.compare_references);
        equals.put_bool(SETTINGS_CLASS_COMPARISON, self.class_comparison);

        let hash_code = section.section_or_insert(HASHCODE_SETTINGS_SECTION);
        hash_code.put_int(SETTINGS_INIT_MULT_TYPE, self.init_mult_type.index());
        hash_code.put_int(SETTINGS_INITIAL_NUMBER, self.initial_number.get());
        hash_code.put_int(SETTINGS_MULTIPLIER_NUMBER, self.multiplier_number.get());
    }

    fn get_data(&self, base: FieldDialogData) -> EqualsHashCodeGenerationData {
        let numbers = self
            .init_mult_type
            .with_custom(self.custom_numbers())
            .numbers();
        EqualsHashCodeGenerationData::builder(base)
            .compare_references(self.compare_references)
            .class_comparison(self.class_comparison)
            .init_mult_numbers(numbers)
            .build()
    }
}
