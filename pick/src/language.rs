//! Unified language dispatch.
//!
//! Centralizes emitter creation for the supported target languages.

use pickgen_codegen::FactoryEmitter;
use pickgen_codegen_java::JavaFactoryEmitter;
use pickgen_codegen_kotlin::KotlinFactoryEmitter;
use pickgen_graph::Language;

/// Language-specific support for factory generation.
pub struct LanguageSupport {
    pub language: Language,
    /// Display name (e.g., "Kotlin").
    pub name: &'static str,
}

impl LanguageSupport {
    /// Get language support for the given language.
    pub fn get(language: Language) -> Self {
        let name = match language {
            Language::Kotlin => "Kotlin",
            Language::Java => "Java",
        };
        Self { language, name }
    }

    /// Create an emitter whose runtime types live in `runtime_package`.
    pub fn emitter(&self, runtime_package: &str) -> Box<dyn FactoryEmitter> {
        match self.language {
            Language::Kotlin => Box::new(KotlinFactoryEmitter::new(runtime_package)),
            Language::Java => Box::new(JavaFactoryEmitter::new(runtime_package)),
        }
    }
}
