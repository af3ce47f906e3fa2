//! Lexicalization of the two entities every book description refers to:
//! its authors and its title(s).

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

use crate::core::atoms;
use crate::core::combinators::{self, enumerate, CONJUNCTION};
use crate::core::error::LexError;
use crate::schema::diamond::{modes, Diamond};
use crate::schema::features::{ArticleType, Genus, Numerus, Person};

/// How a list of authors is referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorsRealization {
    /// "der Autor" / "die Autoren"
    Abstract,
    /// "Manning und Zaun"
    Lastnames,
    /// "Christopher D. Manning und Detlef Peter Zaun"
    Complete,
}

impl FromStr for AuthorsRealization {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abstract" => Ok(Self::Abstract),
            "lastnames" => Ok(Self::Lastnames),
            "complete" => Ok(Self::Complete),
            other => Err(LexError::UnknownVariant {
                kind: "authors realization",
                value: other.to_string(),
            }),
        }
    }
}

/// How a list of titles is referred to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleRealization {
    /// "das Buch" / "die Bücher"
    Abstract,
    /// „Angewandte Computerlinguistik“
    Complete,
    /// "es" / "sie"
    Pronoun,
    Random,
}

impl FromStr for TitleRealization {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "abstract" => Ok(Self::Abstract),
            "complete" => Ok(Self::Complete),
            "pronoun" => Ok(Self::Pronoun),
            "random" => Ok(Self::Random),
            other => Err(LexError::UnknownVariant {
                kind: "title realization",
                value: other.to_string(),
            }),
        }
    }
}

/// How lexicalized authors are attached to a title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthorAttachment {
    None,
    /// "Chomskys Buch"; one author only.
    Possessive,
    /// "das Buch von Chomsky"
    Preposition,
    /// Possessive or preposition for one author, preposition otherwise.
    Random,
}

impl FromStr for AuthorAttachment {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "none" => Ok(Self::None),
            "possessive" => Ok(Self::Possessive),
            "preposition" => Ok(Self::Preposition),
            "random" => Ok(Self::Random),
            other => Err(LexError::UnknownVariant {
                kind: "author attachment",
                value: other.to_string(),
            }),
        }
    }
}

/// Convert a list of author names into a single noun phrase.
pub fn lexicalize_authors(
    authors: &[String],
    realize: AuthorsRealization,
) -> Result<Diamond, LexError> {
    if authors.is_empty() {
        return Err(LexError::EmptyContent("authors"));
    }

    let mut diamond = match realize {
        AuthorsRealization::Abstract => abstract_author(authors.len()),
        AuthorsRealization::Lastnames => {
            let names = authors
                .iter()
                .map(|a| combinators::last_name(a))
                .collect::<Result<Vec<_>, _>>()?;
            enumerate(names, modes::NOUN_PHRASE).ok_or(LexError::EmptyContent("authors"))?
        }
        AuthorsRealization::Complete => {
            let names = authors
                .iter()
                .map(|a| combinators::complete_name(a))
                .collect::<Result<Vec<_>, _>>()?;
            enumerate(names, modes::NOUN_PHRASE).ok_or(LexError::EmptyContent("authors"))?
        }
    };

    diamond.add_mode_suffix(modes::NOUN_PHRASE);
    diamond.add_mode_suffix(modes::NOUN);
    Ok(diamond)
}

/// Convert one or more book titles into a noun phrase, optionally attaching
/// lexicalized authors.
///
/// Preconditions, checked before anything is built:
/// - a pronoun title cannot carry authors ("Chomskys es"),
/// - a possessive attachment needs exactly one author,
/// - an attachment other than `None` needs authors and vice versa.
pub fn lexicalize_titles<R: Rng + ?Sized>(
    titles: &[String],
    authors: Option<Diamond>,
    realize: TitleRealization,
    attachment: AuthorAttachment,
    rng: &mut R,
) -> Result<Diamond, LexError> {
    if titles.is_empty() {
        return Err(LexError::EmptyContent("titles"));
    }
    match (&authors, attachment) {
        (Some(_), _) if realize == TitleRealization::Pronoun => {
            return Err(LexError::PronounWithAuthors)
        }
        (Some(_), AuthorAttachment::None) => {
            return Err(LexError::ConflictingArguments(
                "authors given without an attachment mode",
            ))
        }
        (None, AuthorAttachment::None) | (Some(_), _) => {}
        (None, _) => return Err(LexError::MissingArgument("authors")),
    }

    let realize = match realize {
        TitleRealization::Random if attachment != AuthorAttachment::None => {
            *[TitleRealization::Abstract, TitleRealization::Complete]
                .choose(rng)
                .unwrap_or(&TitleRealization::Abstract)
        }
        TitleRealization::Random => *[
            TitleRealization::Abstract,
            TitleRealization::Complete,
            TitleRealization::Pronoun,
        ]
        .choose(rng)
        .unwrap_or(&TitleRealization::Abstract),
        fixed => fixed,
    };

    let attachment = match (&authors, attachment) {
        (Some(a), AuthorAttachment::Random) => {
            if grammatical_number(a) == Numerus::Singular {
                *[AuthorAttachment::Possessive, AuthorAttachment::Preposition]
                    .choose(rng)
                    .unwrap_or(&AuthorAttachment::Preposition)
            } else {
                AuthorAttachment::Preposition
            }
        }
        (_, fixed) => fixed,
    };

    if let Some(a) = &authors {
        if attachment == AuthorAttachment::Possessive && grammatical_number(a) != Numerus::Singular {
            return Err(LexError::PossessiveWithMultipleAuthors);
        }
    }
    trace!(?realize, ?attachment, titles = titles.len(), "lexicalizing titles");

    let mut title = match realize {
        TitleRealization::Abstract => abstract_title(titles.len()),
        TitleRealization::Pronoun => atoms::personal_pronoun(titles.len(), Genus::Neuter, Person::Third),
        _ => {
            let mut enumeration = enumerate(titles.iter().map(|t| book_title(t)).collect(), modes::NOUN_PHRASE)
                .ok_or(LexError::EmptyContent("titles"))?;
            enumeration.add_mode_suffix(modes::NOUN_PHRASE);
            enumeration
        }
    };

    if let Some(mut authors) = authors {
        match attachment {
            AuthorAttachment::Possessive => {
                // possessive determiners exclude articles: "Chomskys Buch"
                title.strip_article();
                title.append_child_as(authors, modes::POSSESSOR);
            }
            _ => {
                authors.prepend_child(atoms::preposition("von", "zugehörigkeit"));
                title.append_child_as(authors, modes::ATTRIBUTE);
            }
        }
    }

    Ok(title)
}

/// Does a lexicalized authors phrase refer to one author or several?
pub fn grammatical_number(authors: &Diamond) -> Numerus {
    if authors.prop == CONJUNCTION {
        return Numerus::Plural;
    }
    authors
        .child(modes::NUMBER)
        .and_then(|n| n.prop.parse().ok())
        .unwrap_or(Numerus::Singular)
}

/// A title as the grammar encodes it: spaces become underscores and the
/// title is framed by quotation marks.
pub fn book_title(title: &str) -> Diamond {
    let opening = Diamond::leaf("99", "anführungöffnen", "anföffn");
    let closing = Diamond::leaf("66", "anführungschließen", "anfschl");
    Diamond::new(
        modes::NOUN_PHRASE,
        "buchtitel",
        title.replace(' ', "_"),
        vec![opening, closing],
    )
}

/// "das Buch" / "die Bücher"
pub fn abstract_title(count: usize) -> Diamond {
    Diamond::new(
        "",
        "artefaktum",
        "Buch",
        vec![atoms::number_for_count(count), atoms::article(ArticleType::Definite)],
    )
}

/// "der Autor" / "die Autoren"
pub fn abstract_author(count: usize) -> Diamond {
    Diamond::new(
        "",
        "bel-phys-körper",
        "Autor",
        vec![
            atoms::article(ArticleType::Definite),
            atoms::gender(Genus::Masculine),
            atoms::number_for_count(count),
        ],
    )
}
