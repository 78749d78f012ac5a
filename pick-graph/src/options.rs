//! Round options and well-known marker names.

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// Target language of the emitted factories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Kotlin,
    Java,
}

impl Language {
    /// Returns the language identifier as a static string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Language::Kotlin => "kotlin",
            Language::Java => "java",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Language {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "kotlin" | "kt" => Ok(Language::Kotlin),
            "java" => Ok(Language::Java),
            _ => Err(format!(
                "unknown language '{}', expected 'kotlin' or 'java'",
                s
            )),
        }
    }
}

/// How validation failures of a round are reported.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValidationMode {
    /// Stop at the first violation.
    #[default]
    FailFast,
    /// Collect every violation of the round.
    Aggregate,
}

/// The `[options]` table.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphOptions {
    pub language: Language,
    pub validation: ValidationMode,
    /// Package prefixes whose types are known without being declared.
    pub classpath: Vec<String>,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            language: Language::default(),
            validation: ValidationMode::default(),
            classpath: ["kotlin", "java", "javax.inject", "toothpick"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

/// Fully-qualified names the resolver and emitters compare against.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Markers {
    /// Injection point marker.
    pub inject: String,
    /// Deferred single value wrapper.
    pub lazy: String,
    /// On-demand factory wrapper.
    pub provider: String,
    /// Meta-annotation that turns an annotation class into a scope marker.
    pub scope: String,
    /// Scope marker resolved to the root scope.
    pub root_scope: String,
    pub singleton: String,
    pub releasable: String,
    pub provides_singleton: String,
    pub provides_releasable: String,
    /// Package holding `Factory`, `Scope` and `MemberInjector`.
    pub runtime_package: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            inject: "javax.inject.Inject".into(),
            lazy: "toothpick.Lazy".into(),
            provider: "javax.inject.Provider".into(),
            scope: "javax.inject.Scope".into(),
            root_scope: "javax.inject.Singleton".into(),
            singleton: "javax.inject.Singleton".into(),
            releasable: "toothpick.Releasable".into(),
            provides_singleton: "toothpick.ProvidesSingleton".into(),
            provides_releasable: "toothpick.ProvidesReleasable".into(),
            runtime_package: "toothpick".into(),
        }
    }
}

impl Markers {
    /// Qualified name of a runtime type (`Factory`, `Scope`, ...).
    pub fn runtime(&self, simple_name: &str) -> String {
        if self.runtime_package.is_empty() {
            simple_name.to_string()
        } else {
            format!("{}.{}", self.runtime_package, simple_name)
        }
    }
}
