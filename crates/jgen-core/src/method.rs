//! Skeletons, content strategies, and their bindings.
//!
//! A [`MethodSkeleton`] fixes the signatures an action emits; a [`MethodContent`]
//! fills in the bodies for one code style. [`Method`] binds the two, and the
//! shared `Data` associated type makes a mismatched binding a compile error.
//! The registries only see the type-erased [`AnyMethod`] and
//! [`AnyMethodSkeleton`].

use std::any::{Any, type_name};

use crate::data::GenerationData;
use crate::error::{GenerationError, RenderError};
use crate::identifier::{StrategyIdentifier, UserActionIdentifier};
use crate::model::JavaClass;
use crate::{GeneratedCode, GeneratedMethod};

/// A method parameter, rendered as `final {type_name} {name}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub type_name: String,
    pub name: String,
}

/// Declaration of one generated method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodSignature {
    pub name: String,
    pub return_type: String,
    pub parameters: Vec<Parameter>,
    /// Emits `@Override` when set.
    pub overrides: bool,
}

impl MethodSignature {
    pub fn new(name: impl Into<String>, return_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: return_type.into(),
            parameters: Vec::new(),
            overrides: true,
        }
    }

    pub fn with_parameter(mut self, type_name: impl Into<String>, name: impl Into<String>) -> Self {
        self.parameters.push(Parameter {
            type_name: type_name.into(),
            name: name.into(),
        });
        self
    }

    /// `public boolean equals(final Object other)`
    pub fn declaration(&self) -> String {
        let params: Vec<String> = self
            .parameters
            .iter()
            .map(|p| format!("final {} {}", p.type_name, p.name))
            .collect();
        format!(
            "public {} {}({})",
            self.return_type,
            self.name,
            params.join(", ")
        )
    }

    /// Full method source around an unindented body.
    pub fn render(&self, body: &str, generate_comment: bool) -> String {
        let mut out = String::new();
        if generate_comment {
            out.push_str("/**\n * {@inheritDoc}\n */\n");
        }
        if self.overrides {
            out.push_str("@Override\n");
        }
        out.push_str(&self.declaration());
        out.push_str(" {\n");
        for line in body.trim_end().lines() {
            if line.is_empty() {
                out.push('\n');
            } else {
                out.push_str("    ");
                out.push_str(line);
                out.push('\n');
            }
        }
        out.push('}');
        out
    }
}

/// The structural shape of what an action generates.
pub trait MethodSkeleton: 'static {
    type Data: GenerationData;

    fn user_action(&self) -> UserActionIdentifier;

    /// Signatures in emission order.
    fn signatures(&self, class: &JavaClass) -> Vec<MethodSignature>;
}

/// One code style's bodies for a skeleton.
pub trait MethodContent: 'static {
    type Data: GenerationData;

    fn strategy_identifier(&self) -> StrategyIdentifier;

    /// Fully qualified names to import.
    fn libraries_to_import(&self, data: &Self::Data) -> Vec<String>;

    /// One body per skeleton signature, same order.
    fn bodies(&self, class: &JavaClass, data: &Self::Data) -> Result<Vec<String>, RenderError>;
}

/// A skeleton bound to a content strategy consuming the same data type.
pub struct Method<S, C> {
    skeleton: S,
    content: C,
}

impl<S, C> Method<S, C>
where
    S: MethodSkeleton,
    C: MethodContent<Data = S::Data>,
{
    pub fn new(skeleton: S, content: C) -> Self {
        Self { skeleton, content }
    }

    pub fn skeleton(&self) -> &S {
        &self.skeleton
    }

    pub fn content(&self) -> &C {
        &self.content
    }

    pub fn generate_typed(
        &self,
        class: &JavaClass,
        data: &S::Data,
    ) -> Result<GeneratedCode, GenerationError> {
        let signatures = self.skeleton.signatures(class);
        let bodies = self.content.bodies(class, data)?;
        if signatures.len() != bodies.len() {
            return Err(GenerationError::ShapeMismatch {
                signatures: signatures.len(),
                bodies: bodies.len(),
            });
        }
        let methods = signatures
            .iter()
            .zip(&bodies)
            .map(|(signature, body)| GeneratedMethod {
                name: signature.name.clone(),
                source: signature.render(body, data.generate_comment()),
            })
            .collect();
        Ok(GeneratedCode {
            imports: self.content.libraries_to_import(data),
            methods,
        })
    }
}

/// Type-erased skeleton as stored in the skeleton registry.
pub trait AnyMethodSkeleton {
    fn user_action(&self) -> UserActionIdentifier;
    fn signatures(&self, class: &JavaClass) -> Vec<MethodSignature>;
    fn data_type(&self) -> &'static str;
}

impl<T: MethodSkeleton> AnyMethodSkeleton for T {
    fn user_action(&self) -> UserActionIdentifier {
        MethodSkeleton::user_action(self)
    }

    fn signatures(&self, class: &JavaClass) -> Vec<MethodSignature> {
        MethodSkeleton::signatures(self, class)
    }

    fn data_type(&self) -> &'static str {
        type_name::<T::Data>()
    }
}

/// Type-erased binding as stored in the method registry.
pub trait AnyMethod {
    fn user_action(&self) -> UserActionIdentifier;
    fn strategy_identifier(&self) -> StrategyIdentifier;
    fn skeleton(&self) -> &dyn AnyMethodSkeleton;

    /// Render `data`, which must be the binding's data type.
    fn generate(
        &self,
        class: &JavaClass,
        data: &dyn GenerationData,
    ) -> Result<GeneratedCode, GenerationError>;
}

impl<S, C> AnyMethod for Method<S, C>
where
    S: MethodSkeleton,
    C: MethodContent<Data = S::Data>,
{
    fn user_action(&self) -> UserActionIdentifier {
        MethodSkeleton::user_action(&self.skeleton)
    }

    fn strategy_identifier(&self) -> StrategyIdentifier {
        self.content.strategy_identifier()
    }

    fn skeleton(&self) -> &dyn AnyMethodSkeleton {
        &self.skeleton
    }

    fn generate(
        &self,
        class: &JavaClass,
        data: &dyn GenerationData,
    ) -> Result<GeneratedCode, GenerationError> {
        let any: &dyn Any = data;
        let data = any
            .downcast_ref::<S::Data>()
            .ok_or(GenerationError::DataMismatch {
                expected: type_name::<S::Data>(),
            })?;
        self.generate_typed(class, data)
    }
}
