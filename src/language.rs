//! Language registry: code to display-name mapping and selection defaults.

use anyhow::Result;

use crate::ui::Style;

/// Selectable languages, in presentation order.
///
/// The display name is what the prompt templates see, so entries keep their
/// native-script form where the plain English name would be ambiguous.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("en", "English"),
    ("ta", "Tamil (தமிழ்)"),
    ("hi", "Hindi (हिन्दी)"),
    ("te", "Telugu (తెలుగు)"),
];

/// A source/target language selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguagePair {
    pub source: String,
    pub target: String,
}

impl LanguagePair {
    /// Exchanges source and target. Applying it twice restores the pair.
    pub fn swap(&mut self) {
        std::mem::swap(&mut self.source, &mut self.target);
    }

    pub fn source_name(&self) -> Result<&'static str> {
        name_of(&self.source)
    }

    pub fn target_name(&self) -> Result<&'static str> {
        name_of(&self.target)
    }
}

/// Looks up the display name for a language code.
///
/// # Errors
///
/// Returns an error if the code is not in the registry.
pub fn name_of(code: &str) -> Result<&'static str> {
    LANGUAGES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, name)| *name)
        .ok_or_else(|| anyhow::anyhow!("Unknown language code: '{code}'"))
}

/// Validates that the given language code is selectable.
///
/// # Errors
///
/// Returns an error if the language code is not in the registry.
pub fn validate_language(code: &str) -> Result<()> {
    if LANGUAGES.iter().any(|(c, _)| *c == code) {
        Ok(())
    } else {
        anyhow::bail!(
            "Invalid language code: '{code}'\n\n\
             Run 'glot languages' to see all supported codes."
        )
    }
}

/// Returns the default selection: first registry entry as source, second as
/// target.
///
/// # Errors
///
/// Returns an error if the registry holds fewer than two languages, since a
/// translation pair cannot be formed.
pub fn default_pair() -> Result<LanguagePair> {
    match LANGUAGES {
        [(source, _), (target, _), ..] => Ok(LanguagePair {
            source: (*source).to_string(),
            target: (*target).to_string(),
        }),
        _ => anyhow::bail!("Language registry needs at least two entries"),
    }
}

/// Prints all selectable language codes to stdout.
pub fn print_languages() {
    println!("{}", Style::header("Supported languages"));
    for (code, name) in LANGUAGES {
        println!("  {:4} {}", Style::code(code), Style::secondary(name));
    }
}
