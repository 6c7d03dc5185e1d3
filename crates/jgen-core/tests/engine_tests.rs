use jgen_core::config::Preferences;
use jgen_core::data::{EqualsHashCodeGenerationData, GenerationData};
use jgen_core::dialog::{
    CommandOutcome, EqualsHashCodeCommand, EqualsHashCodeDialogStrategy, TextEdit,
    ToStringDialogStrategy,
};
use jgen_core::hashcode::InitMultType;
use jgen_core::identifier::{StrategyIdentifier, UserActionIdentifier};
use jgen_core::method::{Method, MethodContent};
use jgen_core::model::{ElementPosition, JavaClass};
use jgen_core::settings::SettingsStore;
use jgen_core::skeleton::EqualsHashCodeMethodSkeleton;
use jgen_core::{Engine, GenerationError, RenderError};

/// Writes the resolved numbers into the bodies so tests can see them.
struct EchoContent(StrategyIdentifier);

impl MethodContent for EchoContent {
    type Data = EqualsHashCodeGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.0
    }

    fn libraries_to_import(&self, _data: &Self::Data) -> Vec<String> {
        Vec::new()
    }

    fn bodies(
        &self,
        _class: &jgen_core::model::JavaClass,
        data: &Self::Data,
    ) -> Result<Vec<String>, RenderError> {
        let fields: Vec<_> = data.checked_fields().iter().map(|f| f.name.as_str()).collect();
        let (initial, multiplier) = data.init_mult_numbers().as_tuple();
        Ok(vec![
            format!("return {};", fields.join(" && ")),
            format!("return {initial} * {multiplier};"),
        ])
    }
}

fn engine() -> Engine {
    Engine::builder()
        .skeleton(EqualsHashCodeMethodSkeleton)
        .method(Method::new(
            EqualsHashCodeMethodSkeleton,
            EchoContent(StrategyIdentifier::CommonsLang3),
        ))
        .method(Method::new(
            EqualsHashCodeMethodSkeleton,
            EchoContent(StrategyIdentifier::Jdk),
        ))
        .dialog_strategy(EqualsHashCodeDialogStrategy::new(
            StrategyIdentifier::CommonsLang3,
        ))
        .dialog_strategy(EqualsHashCodeDialogStrategy::new(StrategyIdentifier::Jdk))
        .build()
}

fn person() -> JavaClass {
    JavaClass::new("Person")
        .with_field("name", "String")
        .with_field("age", "int")
        .with_field("email", "String")
        .with_method("equals")
        .with_method("getName")
}

#[test]
fn managers_list_registered_entries() {
    let engine = engine();
    let action = UserActionIdentifier::EqualsHashCode;
    assert_eq!(engine.method_skeletons(action).len(), 1);
    assert_eq!(engine.methods(action).len(), 2);
    assert_eq!(
        engine.strategies(action),
        vec![StrategyIdentifier::CommonsLang3, StrategyIdentifier::Jdk]
    );
    assert_eq!(
        engine.method_manager().methods(action)[1].strategy_identifier(),
        StrategyIdentifier::Jdk
    );
}

#[test]
fn unknown_action_yields_empty_results() {
    let engine = engine();
    assert!(engine.method_skeletons(UserActionIdentifier::ToString).is_empty());
    assert!(engine.methods(UserActionIdentifier::CompareTo).is_empty());
    assert!(
        engine
            .skeleton_manager()
            .method_skeletons(UserActionIdentifier::CompareTo)
            .is_empty()
    );
}

#[test]
fn open_dialog_rejects_unknown_strategy() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let result = engine.open_dialog(
        UserActionIdentifier::EqualsHashCode,
        StrategyIdentifier::CommonsLang,
        &class,
        &mut settings,
        &Preferences::default(),
    );
    assert!(matches!(
        result,
        Err(GenerationError::UnknownStrategy {
            strategy: StrategyIdentifier::CommonsLang,
            ..
        })
    ));
}

#[test]
fn confirmed_dialog_generates_and_persists() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let action = UserActionIdentifier::EqualsHashCode;
    let strategy = StrategyIdentifier::CommonsLang3;

    let data = {
        let mut dialog = engine
            .open_dialog(action, strategy, &class, &mut settings, &Preferences::default())
            .unwrap();
        dialog.on_ready();
        dialog.set_checked_fields(&["age", "name"]);
        let outcome = dialog
            .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::SetInitMultType(
                InitMultType::Custom,
            ))
            .unwrap();
        assert_eq!(outcome, CommandOutcome::Applied);
        dialog
            .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::EditInitial(
                TextEdit::replace_all("3"),
            ))
            .unwrap();
        assert!(dialog.can_confirm());
        dialog.confirm().unwrap()
    };

    let names: Vec<_> = data.checked_fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["age", "name"]);

    let code = engine.generate(action, strategy, &class, data.as_ref()).unwrap();
    assert_eq!(code.methods.len(), 2);
    assert_eq!(code.methods[0].name, "equals");
    assert!(code.methods[0].source.contains("return age && name;"));
    assert!(code.methods[1].source.contains("return 3 * 37;"));

    let hash_code = settings
        .section("CommonsLang3")
        .and_then(|s| s.section("HashCodeDialog"))
        .unwrap();
    assert_eq!(hash_code.get_int("InitMultType").unwrap(), 2);
    assert_eq!(hash_code.get_int("InitialNumber").unwrap(), 3);
}

#[test]
fn cancelled_dialog_writes_nothing() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    {
        let mut dialog = engine
            .open_dialog(
                UserActionIdentifier::EqualsHashCode,
                StrategyIdentifier::Jdk,
                &class,
                &mut settings,
                &Preferences::default(),
            )
            .unwrap();
        dialog.on_ready();
        dialog
            .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::SetCompareReferences(
                true,
            ))
            .unwrap();
        dialog.cancel();
    }
    let equals = settings
        .section("Jdk")
        .and_then(|s| s.section("EqualsDialog"))
        .unwrap();
    assert_eq!(equals.get("CompareReferences"), None);
}

#[test]
fn invalid_number_blocks_confirmation() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let mut dialog = engine
        .open_dialog(
            UserActionIdentifier::EqualsHashCode,
            StrategyIdentifier::CommonsLang3,
            &class,
            &mut settings,
            &Preferences::default(),
        )
        .unwrap();
    dialog.on_ready();
    dialog
        .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::SetInitMultType(
            InitMultType::Custom,
        ))
        .unwrap();
    dialog
        .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::EditMultiplier(
            TextEdit::replace_all("12"),
        ))
        .unwrap();
    assert_eq!(
        dialog.error_message(),
        Some("Multiplier number must be an odd number.")
    );
    assert!(!dialog.can_confirm());
    assert!(matches!(
        dialog.confirm(),
        Err(GenerationError::ConfirmationBlocked(_))
    ));
}

#[test]
fn empty_selection_cannot_be_confirmed() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let mut dialog = engine
        .open_dialog(
            UserActionIdentifier::EqualsHashCode,
            StrategyIdentifier::Jdk,
            &class,
            &mut settings,
            &Preferences::default(),
        )
        .unwrap();
    for field in ["name", "age", "email"] {
        dialog.uncheck_field(field);
    }
    assert!(matches!(
        dialog.confirm(),
        Err(GenerationError::NoFieldsSelected)
    ));
}

#[test]
fn common_options_respect_the_class() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let mut dialog = engine
        .open_dialog(
            UserActionIdentifier::EqualsHashCode,
            StrategyIdentifier::Jdk,
            &class,
            &mut settings,
            &Preferences::default(),
        )
        .unwrap();

    // no superclass: append super stays off
    assert!(!dialog.append_super());
    dialog.set_append_super(true);
    assert!(!dialog.append_super());

    // equals is about to be replaced
    assert_eq!(dialog.excluded_methods(), ["equals".to_string()]);
    dialog.set_element_position(ElementPosition::After("equals".to_string()));
    assert_eq!(dialog.element_position(), &ElementPosition::Last);
    dialog.set_element_position(ElementPosition::After("getName".to_string()));
    assert_eq!(
        dialog.element_position(),
        &ElementPosition::After("getName".to_string())
    );

    dialog.move_field_up("email");
    dialog.move_field_down("name");
    let order: Vec<_> = dialog.checked_fields().iter().map(|f| f.name.clone()).collect();
    assert_eq!(order, ["email", "name", "age"]);
}

#[test]
fn append_super_follows_preferences_with_superclass() {
    let mut engine = engine();
    let class = person().with_superclass("Entity");
    let mut settings = SettingsStore::new();
    let dialog = engine
        .open_dialog(
            UserActionIdentifier::EqualsHashCode,
            StrategyIdentifier::Jdk,
            &class,
            &mut settings,
            &Preferences::default(),
        )
        .unwrap();
    assert!(dialog.append_super());
}

#[test]
fn commands_for_another_strategy_are_rejected() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let mut dialog = engine
        .open_dialog(
            UserActionIdentifier::EqualsHashCode,
            StrategyIdentifier::Jdk,
            &class,
            &mut settings,
            &Preferences::default(),
        )
        .unwrap();
    let result = dialog.send::<ToStringDialogStrategy>(
        jgen_core::dialog::ToStringCommand::SetStyle(jgen_core::data::ToStringStyle::Simple),
    );
    assert!(matches!(
        result,
        Err(GenerationError::StrategyMismatch { .. })
    ));
    assert!(dialog.strategy::<EqualsHashCodeDialogStrategy>().is_some());
}

#[test]
fn dialog_disposes_components_when_closed() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    {
        let mut dialog = engine
            .open_dialog(
                UserActionIdentifier::EqualsHashCode,
                StrategyIdentifier::Jdk,
                &class,
                &mut settings,
                &Preferences::default(),
            )
            .unwrap();
        dialog.on_ready();
        let strategy = dialog.strategy::<EqualsHashCodeDialogStrategy>().unwrap();
        assert!(strategy.components().is_some());
    }
    // reopening starts from a clean set of controls
    let dialog = engine
        .open_dialog(
            UserActionIdentifier::EqualsHashCode,
            StrategyIdentifier::Jdk,
            &class,
            &mut settings,
            &Preferences::default(),
        )
        .unwrap();
    let strategy = dialog.strategy::<EqualsHashCodeDialogStrategy>().unwrap();
    assert_eq!(strategy.components().unwrap().init_mult_selection, None);
}
