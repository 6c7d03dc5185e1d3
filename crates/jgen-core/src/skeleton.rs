//! Style-independent method shapes for each action.

use crate::data::{CompareToGenerationData, EqualsHashCodeGenerationData, ToStringGenerationData};
use crate::identifier::UserActionIdentifier;
use crate::method::{MethodSignature, MethodSkeleton};
use crate::model::JavaClass;

/// `equals(Object)` followed by `hashCode()`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EqualsHashCodeMethodSkeleton;

impl MethodSkeleton for EqualsHashCodeMethodSkeleton {
    type Data = EqualsHashCodeGenerationData;

    fn user_action(&self) -> UserActionIdentifier {
        UserActionIdentifier::EqualsHashCode
    }

    fn signatures(&self, _class: &JavaClass) -> Vec<MethodSignature> {
        vec![
            MethodSignature::new("equals", "boolean").with_parameter("Object", "other"),
            MethodSignature::new("hashCode", "int"),
        ]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ToStringMethodSkeleton;

impl MethodSkeleton for ToStringMethodSkeleton {
    type Data = ToStringGenerationData;

    fn user_action(&self) -> UserActionIdentifier {
        UserActionIdentifier::ToString
    }

    fn signatures(&self, _class: &JavaClass) -> Vec<MethodSignature> {
        vec![MethodSignature::new("toString", "String")]
    }
}

/// `compareTo` taking the class itself, as for `Comparable<Self>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompareToMethodSkeleton;

impl MethodSkeleton for CompareToMethodSkeleton {
    type Data = CompareToGenerationData;

    fn user_action(&self) -> UserActionIdentifier {
        UserActionIdentifier::CompareTo
    }

    fn signatures(&self, class: &JavaClass) -> Vec<MethodSignature> {
        vec![MethodSignature::new("compareTo", "int").with_parameter(class.name.as_str(), "other")]
    }
}
