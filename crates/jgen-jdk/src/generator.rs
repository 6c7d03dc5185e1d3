use jgen_core::data::{
    CompareToGenerationData, EqualsHashCodeGenerationData, ToStringGenerationData,
};
use jgen_core::dialog::{DefaultDialogStrategy, EqualsHashCodeDialogStrategy};
use jgen_core::identifier::{CommandIdentifier, StrategyIdentifier};
use jgen_core::method::{Method, MethodContent};
use jgen_core::model::JavaClass;
use jgen_core::skeleton::{CompareToMethodSkeleton, EqualsHashCodeMethodSkeleton, ToStringMethodSkeleton};
use jgen_core::{EngineBuilder, RenderError};

use crate::emitters;
use crate::expressions::java_util_imports;

/// `equals`/`hashCode` with `java.util.Objects` and a hand-written hash fold.
#[derive(Debug, Clone, Copy, Default)]
pub struct JdkEqualsHashCodeContent;

impl MethodContent for JdkEqualsHashCodeContent {
    type Data = EqualsHashCodeGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        StrategyIdentifier::Jdk
    }

    fn libraries_to_import(&self, data: &Self::Data) -> Vec<String> {
        let equality = emitters::equals_hash_code::equality_terms(data);
        let hash = emitters::equals_hash_code::hash_terms(data);
        java_util_imports(equality.iter().chain(&hash).map(String::as_str))
    }

    fn bodies(&self, class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            emitters::equals_hash_code::emit_equals(class, data)?,
            emitters::equals_hash_code::emit_hash_code(data)?,
        ])
    }
}

/// `toString` by string concatenation.
#[derive(Debug, Clone, Copy, Default)]
pub struct JdkToStringContent;

impl MethodContent for JdkToStringContent {
    type Data = ToStringGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        StrategyIdentifier::Jdk
    }

    fn libraries_to_import(&self, data: &Self::Data) -> Vec<String> {
        let parts = emitters::to_string::display_parts(data);
        java_util_imports(parts.iter().map(String::as_str))
    }

    fn bodies(&self, class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError> {
        Ok(vec![emitters::to_string::emit_to_string(class, data)?])
    }
}

/// `compareTo` with the boxed types' static `compare` methods.
#[derive(Debug, Clone, Copy, Default)]
pub struct JdkCompareToContent;

impl MethodContent for JdkCompareToContent {
    type Data = CompareToGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        StrategyIdentifier::Jdk
    }

    fn libraries_to_import(&self, data: &Self::Data) -> Vec<String> {
        let terms = emitters::compare_to::comparison_terms(data);
        java_util_imports(terms.iter().map(String::as_str))
    }

    fn bodies(&self, _class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError> {
        Ok(vec![emitters::compare_to::emit_compare_to(data)?])
    }
}

/// Bind the JDK methods and their dialog strategies.
///
/// The JDK `toString` has no style option, so it gets an option-free dialog.
pub fn register(builder: EngineBuilder) -> EngineBuilder {
    let strategy = StrategyIdentifier::Jdk;
    log::debug!("registering {strategy} methods");
    builder
        .method(Method::new(EqualsHashCodeMethodSkeleton, JdkEqualsHashCodeContent))
        .method(Method::new(ToStringMethodSkeleton, JdkToStringContent))
        .method(Method::new(CompareToMethodSkeleton, JdkCompareToContent))
        .dialog_strategy(EqualsHashCodeDialogStrategy::new(strategy))
        .dialog_strategy(DefaultDialogStrategy::<ToStringGenerationData>::new(
            CommandIdentifier::ToString,
            strategy,
        ))
        .dialog_strategy(DefaultDialogStrategy::<CompareToGenerationData>::new(
            CommandIdentifier::CompareTo,
            strategy,
        ))
}
