//! Lexicalization profile: which phrasing to use for each kind of fact.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

use crate::core::clauses::{
    ContainmentLexeme, KeywordsLexeme, KeywordsRealization, LanguageRealization, PagesLexeme,
    PlangRealization,
};

#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
}

/// Phrasing choices for the clause lexicalizers. Every field has a default,
/// so a profile file only needs to name what it changes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LexicalizationProfile {
    pub keywords: KeywordsRealization,
    pub keywords_lexeme: KeywordsLexeme,
    /// How programming languages are realized when there are no code
    /// examples to fold them into.
    pub plang: PlangRealization,
    pub pages_lexeme: PagesLexeme,
    pub codeexamples_lexeme: ContainmentLexeme,
    pub exercises_lexeme: ContainmentLexeme,
    pub language: LanguageRealization,
    /// Title variations the pipeline may pick from. Empty means all.
    pub title_variations: Vec<String>,
}

impl Default for LexicalizationProfile {
    fn default() -> Self {
        Self {
            keywords: KeywordsRealization::Complete,
            keywords_lexeme: KeywordsLexeme::Behandeln,
            plang: PlangRealization::Complete,
            pages_lexeme: PagesLexeme::Random,
            codeexamples_lexeme: ContainmentLexeme::Random,
            exercises_lexeme: ContainmentLexeme::Beinhalten,
            language: LanguageRealization::Noun,
            title_variations: Vec::new(),
        }
    }
}

impl LexicalizationProfile {
    /// Load a profile from a RON file.
    pub fn load_from_ron(path: &Path) -> Result<LexicalizationProfile, ProfileError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a profile from a RON string.
    pub fn parse_ron(input: &str) -> Result<LexicalizationProfile, ProfileError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_profile_uses_defaults() {
        let p = LexicalizationProfile::parse_ron("()").unwrap();
        assert_eq!(p, LexicalizationProfile::default());
    }

    #[test]
    fn partial_profile_overrides_named_fields() {
        let p = LexicalizationProfile::parse_ron(
            r#"(
                pages_lexeme: umfassen,
                language: adjective,
                title_variations: ["abstract", "pronoun"],
            )"#,
        )
        .unwrap();
        assert_eq!(p.pages_lexeme, PagesLexeme::Umfassen);
        assert_eq!(p.language, LanguageRealization::Adjective);
        assert_eq!(p.title_variations, vec!["abstract", "pronoun"]);
        assert_eq!(p.keywords_lexeme, KeywordsLexeme::Behandeln);
    }

    #[test]
    fn length_lexeme_uses_its_ascii_spelling() {
        let p = LexicalizationProfile::parse_ron("(pages_lexeme: laenge)").unwrap();
        assert_eq!(p.pages_lexeme, PagesLexeme::Laenge);
        assert_eq!("laenge".parse::<PagesLexeme>().unwrap(), p.pages_lexeme);

        let text = ron::to_string(&p).unwrap();
        assert!(text.contains("laenge"));
    }

    #[test]
    fn unknown_lexeme_is_a_ron_error() {
        let result = LexicalizationProfile::parse_ron("(pages_lexeme: wiegen)");
        assert!(matches!(result, Err(ProfileError::Ron(_))));
    }

    #[test]
    fn ron_round_trip() {
        let profile = LexicalizationProfile {
            keywords_lexeme: KeywordsLexeme::Aufgreifen,
            ..LexicalizationProfile::default()
        };
        let text = ron::to_string(&profile).unwrap();
        assert_eq!(LexicalizationProfile::parse_ron(&text).unwrap(), profile);
    }
}
