use jgen_core::data::{
    CompareToGenerationData, EqualsHashCodeGenerationData, ToStringGenerationData, ToStringStyle,
};
use jgen_core::dialog::{DefaultDialogStrategy, EqualsHashCodeDialogStrategy, ToStringDialogStrategy};
use jgen_core::identifier::{CommandIdentifier, StrategyIdentifier};
use jgen_core::method::{Method, MethodContent};
use jgen_core::model::JavaClass;
use jgen_core::skeleton::{CompareToMethodSkeleton, EqualsHashCodeMethodSkeleton, ToStringMethodSkeleton};
use jgen_core::{EngineBuilder, RenderError};

use crate::emitters;
use crate::version::CommonsLangVersion;

/// `equals`/`hashCode` through `EqualsBuilder` and `HashCodeBuilder`.
#[derive(Debug, Clone, Copy)]
pub struct EqualsHashCodeContent {
    version: CommonsLangVersion,
}

impl EqualsHashCodeContent {
    pub fn new(version: CommonsLangVersion) -> Self {
        Self { version }
    }
}

impl MethodContent for EqualsHashCodeContent {
    type Data = EqualsHashCodeGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.version.strategy_identifier()
    }

    fn libraries_to_import(&self, _data: &Self::Data) -> Vec<String> {
        vec![
            self.version.builder_class("EqualsBuilder"),
            self.version.builder_class("HashCodeBuilder"),
        ]
    }

    fn bodies(&self, class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError> {
        Ok(vec![
            emitters::equals_hash_code::emit_equals(class, data)?,
            emitters::equals_hash_code::emit_hash_code(data)?,
        ])
    }
}

/// `toString` through `ToStringBuilder`.
#[derive(Debug, Clone, Copy)]
pub struct ToStringContent {
    version: CommonsLangVersion,
}

impl ToStringContent {
    pub fn new(version: CommonsLangVersion) -> Self {
        Self { version }
    }
}

impl MethodContent for ToStringContent {
    type Data = ToStringGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.version.strategy_identifier()
    }

    fn libraries_to_import(&self, data: &Self::Data) -> Vec<String> {
        let mut imports = vec![self.version.builder_class("ToStringBuilder")];
        if data.style() != ToStringStyle::Default {
            imports.push(self.version.builder_class("ToStringStyle"));
        }
        imports
    }

    fn bodies(&self, _class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError> {
        Ok(vec![emitters::to_string::emit_to_string(data)?])
    }
}

/// `compareTo` through `CompareToBuilder`.
#[derive(Debug, Clone, Copy)]
pub struct CompareToContent {
    version: CommonsLangVersion,
}

impl CompareToContent {
    pub fn new(version: CommonsLangVersion) -> Self {
        Self { version }
    }
}

impl MethodContent for CompareToContent {
    type Data = CompareToGenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.version.strategy_identifier()
    }

    fn libraries_to_import(&self, _data: &Self::Data) -> Vec<String> {
        vec![self.version.builder_class("CompareToBuilder")]
    }

    fn bodies(&self, _class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError> {
        Ok(vec![emitters::compare_to::emit_compare_to(data)?])
    }
}

/// Bind every commons-lang method and its dialog strategy, for both library lines.
///
/// Skeletons are not registered here; see [`EngineBuilder::standard_skeletons`].
pub fn register(builder: EngineBuilder) -> EngineBuilder {
    CommonsLangVersion::ALL
        .into_iter()
        .fold(builder, |builder, version| {
            let strategy = version.strategy_identifier();
            log::debug!("registering {version} builders as {strategy}");
            builder
                .method(Method::new(
                    EqualsHashCodeMethodSkeleton,
                    EqualsHashCodeContent::new(version),
                ))
                .method(Method::new(ToStringMethodSkeleton, ToStringContent::new(version)))
                .method(Method::new(CompareToMethodSkeleton, CompareToContent::new(version)))
                .dialog_strategy(EqualsHashCodeDialogStrategy::new(strategy))
                .dialog_strategy(ToStringDialogStrategy::new(strategy))
                .dialog_strategy(DefaultDialogStrategy::<CompareToGenerationData>::new(
                    CommandIdentifier::CompareTo,
                    strategy,
                ))
        })
}
