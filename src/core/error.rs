use thiserror::Error;

use crate::schema::features::FeatureError;

/// Why a lexicalization request was refused. Every variant is raised
/// before any tree is built.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexError {
    #[error("unknown {kind} '{value}'")]
    UnknownVariant { kind: &'static str, value: String },
    #[error("nothing to lexicalize: {0} is empty")]
    EmptyContent(&'static str),
    #[error("missing required argument: {0}")]
    MissingArgument(&'static str),
    #[error("conflicting arguments: {0}")]
    ConflictingArguments(&'static str),
    #[error("can't realize possessive form with more than one author")]
    PossessiveWithMultipleAuthors,
    #[error("can't realize title as pronoun with an author, e.g. 'Chomskys es'")]
    PronounWithAuthors,
    #[error("malformed packed list '{0}'")]
    MalformedPackedList(String),
    #[error("unknown target audience level {0}")]
    UnknownTargetLevel(u8),
    #[error(transparent)]
    Feature(#[from] FeatureError),
}
