use std::any::Any;
use std::fmt;
use std::str::FromStr;

use crate::hashcode::InitMultPair;
use crate::model::{ElementPosition, JavaField};

/// Request data common to every action, captured once when the dialog is confirmed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDialogData {
    checked_fields: Vec<JavaField>,
    element_position: ElementPosition,
    append_super: bool,
    generate_comment: bool,
    use_getters_instead_of_fields: bool,
    use_block_in_if_statements: bool,
}

impl FieldDialogData {
    pub fn builder() -> FieldDialogDataBuilder {
        FieldDialogDataBuilder::default()
    }

    /// Selected fields in the order the user checked them.
    pub fn checked_fields(&self) -> &[JavaField] {
        &self.checked_fields
    }

    pub fn element_position(&self) -> &ElementPosition {
        &self.element_position
    }

    pub fn append_super(&self) -> bool {
        self.append_super
    }

    pub fn generate_comment(&self) -> bool {
        self.generate_comment
    }

    pub fn use_getters_instead_of_fields(&self) -> bool {
        self.use_getters_instead_of_fields
    }

    pub fn use_block_in_if_statements(&self) -> bool {
        self.use_block_in_if_statements
    }
}

#[derive(Debug, Clone, Default)]
pub struct FieldDialogDataBuilder {
    checked_fields: Vec<JavaField>,
    element_position: ElementPosition,
    append_super: bool,
    generate_comment: bool,
    use_getters_instead_of_fields: bool,
    use_block_in_if_statements: bool,
}

impl FieldDialogDataBuilder {
    pub fn checked_fields(mut self, fields: Vec<JavaField>) -> Self {
        self.checked_fields = fields;
        self
    }

    pub fn element_position(mut self, position: ElementPosition) -> Self {
        self.element_position = position;
        self
    }

    pub fn append_super(mut self, value: bool) -> Self {
        self.append_super = value;
        self
    }

    pub fn generate_comment(mut self, value: bool) -> Self {
        self.generate_comment = value;
        self
    }

    pub fn use_getters_instead_of_fields(mut self, value: bool) -> Self {
        self.use_getters_instead_of_fields = value;
        self
    }

    pub fn use_block_in_if_statements(mut self, value: bool) -> Self {
        self.use_block_in_if_statements = value;
        self
    }

    pub fn build(self) -> FieldDialogData {
        FieldDialogData {
            checked_fields: self.checked_fields,
            element_position: self.element_position,
            append_super: self.append_super,
            generate_comment: self.generate_comment,
            use_getters_instead_of_fields: self.use_getters_instead_of_fields,
            use_block_in_if_statements: self.use_block_in_if_statements,
        }
    }
}

/// A finalized generation request handed to a bound method.
pub trait GenerationData: Any + fmt::Debug {
    fn base(&self) -> &FieldDialogData;

    fn checked_fields(&self) -> &[JavaField] {
        self.base().checked_fields()
    }

    fn element_position(&self) -> &ElementPosition {
        self.base().element_position()
    }

    fn append_super(&self) -> bool {
        self.base().append_super()
    }

    fn generate_comment(&self) -> bool {
        self.base().generate_comment()
    }

    fn use_getters_instead_of_fields(&self) -> bool {
        self.base().use_getters_instead_of_fields()
    }

    fn use_block_in_if_statements(&self) -> bool {
        self.base().use_block_in_if_statements()
    }
}

impl GenerationData for FieldDialogData {
    fn base(&self) -> &FieldDialogData {
        self
    }
}

/// Request for `equals` and `hashCode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EqualsHashCodeGenerationData {
    base: FieldDialogData,
    compare_references: bool,
    class_comparison: bool,
    init_mult_numbers: InitMultPair,
}

impl EqualsHashCodeGenerationData {
    pub fn builder(base: FieldDialogData) -> EqualsHashCodeGenerationDataBuilder {
        EqualsHashCodeGenerationDataBuilder {
            base,
            compare_references: false,
            class_comparison: false,
            init_mult_numbers: InitMultPair::DEFAULT,
        }
    }

    /// Reference-typed fields compare with `==` instead of delegated equality.
    pub fn compare_references(&self) -> bool {
        self.compare_references
    }

    /// Compare runtime classes instead of using `instanceof`.
    pub fn class_comparison(&self) -> bool {
        self.class_comparison
    }

    pub fn init_mult_numbers(&self) -> InitMultPair {
        self.init_mult_numbers
    }
}

impl GenerationData for EqualsHashCodeGenerationData {
    fn base(&self) -> &FieldDialogData {
        &self.base
    }
}

pub struct EqualsHashCodeGenerationDataBuilder {
    base: FieldDialogData,
    compare_references: bool,
    class_comparison: bool,
    init_mult_numbers: InitMultPair,
}

impl EqualsHashCodeGenerationDataBuilder {
    pub fn compare_references(mut self, value: bool) -> Self {
        self.compare_references = value;
        self
    }

    pub fn class_comparison(mut self, value: bool) -> Self {
        self.class_comparison = value;
        self
    }

    pub fn init_mult_numbers(mut self, numbers: InitMultPair) -> Self {
        self.init_mult_numbers = numbers;
        self
    }

    pub fn build(self) -> EqualsHashCodeGenerationData {
        EqualsHashCodeGenerationData {
            base: self.base,
            compare_references: self.compare_references,
            class_comparison: self.class_comparison,
            init_mult_numbers: self.init_mult_numbers,
        }
    }
}

/// commons-lang `ToStringStyle` constants.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ToStringStyle {
    #[default]
    Default,
    MultiLine,
    NoFieldNames,
    ShortPrefix,
    Simple,
}

impl ToStringStyle {
    pub const ALL: [ToStringStyle; 5] = [
        ToStringStyle::Default,
        ToStringStyle::MultiLine,
        ToStringStyle::NoFieldNames,
        ToStringStyle::ShortPrefix,
        ToStringStyle::Simple,
    ];

    /// Name of the `ToStringStyle` constant.
    pub fn constant(&self) -> &'static str {
        match self {
            ToStringStyle::Default => "DEFAULT_STYLE",
            ToStringStyle::MultiLine => "MULTI_LINE_STYLE",
            ToStringStyle::NoFieldNames => "NO_FIELD_NAMES_STYLE",
            ToStringStyle::ShortPrefix => "SHORT_PREFIX_STYLE",
            ToStringStyle::Simple => "SIMPLE_STYLE",
        }
    }
}

impl FromStr for ToStringStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToStringStyle::ALL
            .into_iter()
            .find(|style| style.constant() == s)
            .ok_or_else(|| format!("unknown toString style: {s}"))
    }
}

impl fmt::Display for ToStringStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.constant())
    }
}

/// Request for `toString`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToStringGenerationData {
    base: FieldDialogData,
    style: ToStringStyle,
}

impl ToStringGenerationData {
    pub fn new(base: FieldDialogData, style: ToStringStyle) -> Self {
        Self { base, style }
    }

    pub fn style(&self) -> ToStringStyle {
        self.style
    }
}

impl From<FieldDialogData> for ToStringGenerationData {
    fn from(base: FieldDialogData) -> Self {
        Self::new(base, ToStringStyle::Default)
    }
}

impl GenerationData for ToStringGenerationData {
    fn base(&self) -> &FieldDialogData {
        &self.base
    }
}

/// Request for `compareTo`; carries nothing beyond the base data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompareToGenerationData {
    base: FieldDialogData,
}

impl From<FieldDialogData> for CompareToGenerationData {
    fn from(base: FieldDialogData) -> Self {
        Self { base }
    }
}

impl GenerationData for CompareToGenerationData {
    fn base(&self) -> &FieldDialogData {
        &self.base
    }
}
