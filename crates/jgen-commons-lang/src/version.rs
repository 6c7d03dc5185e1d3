use std::fmt;

use jgen_core::identifier::StrategyIdentifier;

/// Which commons-lang line the builders are imported from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommonsLangVersion {
    /// `org.apache.commons.lang`
    Lang2,
    /// `org.apache.commons.lang3`
    Lang3,
}

impl CommonsLangVersion {
    pub const ALL: [CommonsLangVersion; 2] = [CommonsLangVersion::Lang2, CommonsLangVersion::Lang3];

    pub fn strategy_identifier(&self) -> StrategyIdentifier {
        match self {
            CommonsLangVersion::Lang2 => StrategyIdentifier::CommonsLang,
            CommonsLangVersion::Lang3 => StrategyIdentifier::CommonsLang3,
        }
    }

    pub fn base_package(&self) -> &'static str {
        match self {
            CommonsLangVersion::Lang2 => "org.apache.commons.lang",
            CommonsLangVersion::Lang3 => "org.apache.commons.lang3",
        }
    }

    /// Fully qualified name of a class in the `builder` package.
    pub fn builder_class(&self, class: &str) -> String {
        format!("{}.builder.{class}", self.base_package())
    }
}

impl TryFrom<StrategyIdentifier> for CommonsLangVersion {
    type Error = StrategyIdentifier;

    fn try_from(strategy: StrategyIdentifier) -> Result<Self, Self::Error> {
        CommonsLangVersion::ALL
            .into_iter()
            .find(|version| version.strategy_identifier() == strategy)
            .ok_or(strategy)
    }
}

impl fmt::Display for CommonsLangVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.base_package())
    }
}
