use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A generation command as the user invokes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UserActionIdentifier {
    EqualsHashCode,
    ToString,
    CompareTo,
}

impl UserActionIdentifier {
    pub const ALL: [UserActionIdentifier; 3] = [
        UserActionIdentifier::EqualsHashCode,
        UserActionIdentifier::ToString,
        UserActionIdentifier::CompareTo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserActionIdentifier::EqualsHashCode => "equals-hash-code",
            UserActionIdentifier::ToString => "to-string",
            UserActionIdentifier::CompareTo => "compare-to",
        }
    }

    /// The command family this action belongs to.
    pub fn command(&self) -> CommandIdentifier {
        match self {
            UserActionIdentifier::EqualsHashCode => CommandIdentifier::EqualsHashCode,
            UserActionIdentifier::ToString => CommandIdentifier::ToString,
            UserActionIdentifier::CompareTo => CommandIdentifier::CompareTo,
        }
    }
}

impl fmt::Display for UserActionIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for UserActionIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        UserActionIdentifier::ALL
            .into_iter()
            .find(|action| action.as_str() == s)
            .ok_or_else(|| format!("unknown action: {s}"))
    }
}

/// The semantic command a dialog strategy implements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandIdentifier {
    EqualsHashCode,
    ToString,
    CompareTo,
}

impl CommandIdentifier {
    pub fn as_str(&self) -> &'static str {
        match self {
            CommandIdentifier::EqualsHashCode => "EQUALS_HASH_CODE",
            CommandIdentifier::ToString => "TO_STRING",
            CommandIdentifier::CompareTo => "COMPARE_TO",
        }
    }
}

impl fmt::Display for CommandIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Code-style variant for a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyIdentifier {
    CommonsLang,
    CommonsLang3,
    Jdk,
}

impl StrategyIdentifier {
    pub const ALL: [StrategyIdentifier; 3] = [
        StrategyIdentifier::CommonsLang,
        StrategyIdentifier::CommonsLang3,
        StrategyIdentifier::Jdk,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            StrategyIdentifier::CommonsLang => "commons-lang",
            StrategyIdentifier::CommonsLang3 => "commons-lang3",
            StrategyIdentifier::Jdk => "jdk",
        }
    }

    /// Name of the settings section holding this strategy's persisted options.
    pub fn settings_section(&self) -> &'static str {
        match self {
            StrategyIdentifier::CommonsLang => "CommonsLang",
            StrategyIdentifier::CommonsLang3 => "CommonsLang3",
            StrategyIdentifier::Jdk => "Jdk",
        }
    }
}

impl fmt::Display for StrategyIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StrategyIdentifier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        StrategyIdentifier::ALL
            .into_iter()
            .find(|strategy| strategy.as_str() == s)
            .ok_or_else(|| format!("unknown strategy: {s}"))
    }
}
