use jgen_core::config::Preferences;
use jgen_core::data::ToStringStyle;
use jgen_core::dialog::{
    EqualsHashCodeCommand, EqualsHashCodeDialogStrategy, ToStringCommand, ToStringDialogStrategy,
};
use jgen_core::hashcode::InitMultType;
use jgen_core::identifier::{StrategyIdentifier, UserActionIdentifier};
use jgen_core::model::JavaClass;
use jgen_core::settings::SettingsStore;
use jgen_core::Engine;

const PERSON_YAML: &str = r#"
name: Person
fields:
  - name: name
    type: String
  - name: age
    type: int
methods:
  - getName
"#;

fn engine() -> Engine {
    jgen_commons_lang::register(Engine::builder().standard_skeletons()).build()
}

fn person() -> JavaClass {
    serde_yaml_ng::from_str(PERSON_YAML).unwrap()
}

#[test]
fn equals_hash_code_end_to_end() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let action = UserActionIdentifier::EqualsHashCode;
    let strategy = StrategyIdentifier::CommonsLang;

    let bound: Vec<_> = engine
        .methods(action)
        .into_iter()
        .filter(|m| m.strategy_identifier() == strategy)
        .collect();
    assert_eq!(bound.len(), 1);

    let data = {
        let mut dialog = engine
            .open_dialog(action, strategy, &class, &mut settings, &Preferences::default())
            .unwrap();
        dialog.on_ready();
        dialog
            .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::SetCompareReferences(
                false,
            ))
            .unwrap();
        dialog
            .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::SetClassComparison(true))
            .unwrap();
        dialog
            .send::<EqualsHashCodeDialogStrategy>(EqualsHashCodeCommand::SetInitMultType(
                InitMultType::Default,
            ))
            .unwrap();
        dialog.confirm().unwrap()
    };

    let names: Vec<_> = data.checked_fields().iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["name", "age"]);

    let code = engine.generate(action, strategy, &class, data.as_ref()).unwrap();
    assert_eq!(
        code.imports,
        [
            "org.apache.commons.lang.builder.EqualsBuilder",
            "org.apache.commons.lang.builder.HashCodeBuilder",
        ]
    );
    let equals = &code.methods[0].source;
    assert!(equals.starts_with("/**\n * {@inheritDoc}\n */\n@Override\npublic boolean equals(final Object other) {"));
    assert!(equals.contains("    if (other == null || getClass() != other.getClass())\n        return false;"));
    let hash_code = &code.methods[1].source;
    assert!(hash_code.contains("    return new HashCodeBuilder(17, 37)"));

    let source = code.to_source();
    assert!(source.starts_with("import org.apache.commons.lang.builder.EqualsBuilder;\n"));
    assert!(source.ends_with("}\n"));
}

#[test]
fn commons_lang3_imports_lang3_builders() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let action = UserActionIdentifier::ToString;
    let strategy = StrategyIdentifier::CommonsLang3;

    let data = {
        let mut dialog = engine
            .open_dialog(action, strategy, &class, &mut settings, &Preferences::default())
            .unwrap();
        dialog.on_ready();
        dialog
            .send::<ToStringDialogStrategy>(ToStringCommand::SetStyle(ToStringStyle::MultiLine))
            .unwrap();
        dialog.set_use_getters_instead_of_fields(true);
        dialog.confirm().unwrap()
    };

    let code = engine.generate(action, strategy, &class, data.as_ref()).unwrap();
    assert!(
        code.imports
            .iter()
            .all(|import| import.starts_with("org.apache.commons.lang3.builder."))
    );
    assert_eq!(code.imports.len(), 2);
    let to_string = &code.methods[0].source;
    assert!(to_string.contains("new ToStringBuilder(this, ToStringStyle.MULTI_LINE_STYLE)"));
    assert!(to_string.contains(".append(\"age\", getAge())"));

    // the style is remembered for the next dialog
    let dialog = engine
        .open_dialog(action, strategy, &class, &mut settings, &Preferences::default())
        .unwrap();
    assert_eq!(
        dialog.strategy::<ToStringDialogStrategy>().unwrap().style(),
        ToStringStyle::MultiLine
    );
}

#[test]
fn compare_to_uses_typed_parameter() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    let action = UserActionIdentifier::CompareTo;
    let strategy = StrategyIdentifier::CommonsLang3;

    let data = {
        let mut dialog = engine
            .open_dialog(action, strategy, &class, &mut settings, &Preferences::default())
            .unwrap();
        dialog.set_generate_comment(false);
        dialog.confirm().unwrap()
    };
    let code = engine.generate(action, strategy, &class, data.as_ref()).unwrap();
    let compare_to = &code.methods[0].source;
    insta::assert_snapshot!(compare_to.lines().nth(1).unwrap(), @"public int compareTo(final Person other) {");
    assert!(compare_to.contains("        .append(name, other.name)"));
    assert!(compare_to.contains("        .toComparison();"));
}

#[test]
fn jdk_strategy_is_not_registered_here() {
    let mut engine = engine();
    let class = person();
    let mut settings = SettingsStore::new();
    assert_eq!(
        engine.strategies(UserActionIdentifier::EqualsHashCode),
        [StrategyIdentifier::CommonsLang, StrategyIdentifier::CommonsLang3]
    );
    assert!(
        engine
            .open_dialog(
                UserActionIdentifier::EqualsHashCode,
                StrategyIdentifier::Jdk,
                &class,
                &mut settings,
                &Preferences::default(),
            )
            .is_err()
    );
}
