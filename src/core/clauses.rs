//! Clause lexicalizers: one function per kind of fact about a book.
//!
//! Each function consumes the already lexicalized title (or authors) it
//! needs as its agent or subject, relabels it and returns a complete
//! clause. Callers clone a sub-tree if they want to use it twice.

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

use crate::core::atoms;
use crate::core::combinators::enumerate;
use crate::core::error::LexError;
use crate::schema::diamond::{modes, Diamond};
use crate::schema::features::{ArticleType, Genus, Komparation, Numerus, Person, PronounType, Tempus};
use crate::schema::message::{parse_packed_list, Language, TargetAudience};

macro_rules! variant_names {
    ($ty:ident, $kind:literal, { $($name:literal $(| $alias:literal)* => $variant:ident),+ $(,)? }) => {
        impl $ty {
            pub fn name(&self) -> &'static str {
                match self {
                    $(Self::$variant => $name),+
                }
            }
        }

        impl FromStr for $ty {
            type Err = LexError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($name $(| $alias)* => Ok(Self::$variant),)+
                    other => Err(LexError::UnknownVariant {
                        kind: $kind,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordsRealization {
    /// "das Thema" / "die Themen"
    Abstract,
    /// "die Themen parsing und generation"
    Complete,
}

variant_names!(KeywordsRealization, "keywords realization", {
    "abstract" => Abstract,
    "complete" => Complete,
});

/// Verb used to relate a book (or its authors) to its keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordsLexeme {
    Behandeln,
    Beschreiben,
    Eingehen,
    Aufgreifen,
}

variant_names!(KeywordsLexeme, "keywords lexeme", {
    "behandeln" => Behandeln,
    "beschreiben" => Beschreiben,
    "eingehen" => Eingehen,
    "aufgreifen" => Aufgreifen,
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlangRealization {
    /// Noun phrase only: "die Programmiersprachen A und B".
    Embedded,
    /// Full clause: "das Buch verwendet die Programmiersprachen A und B".
    Complete,
}

variant_names!(PlangRealization, "programming language realization", {
    "embedded" => Embedded,
    "complete" => Complete,
});

/// Three renderings of a page count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PagesLexeme {
    /// "hat einen Umfang von 600 Seiten"
    Umfang,
    /// "umfasst 600 Seiten"
    Umfassen,
    /// "ist 600 Seiten lang". RON identifiers are ASCII, so profiles spell
    /// it `laenge`; string parsing takes both spellings.
    Laenge,
    Random,
}

variant_names!(PagesLexeme, "pages lexeme", {
    "umfang" => Umfang,
    "umfassen" => Umfassen,
    "länge" | "laenge" => Laenge,
    "random" => Random,
});

/// Verb used for "the book contains (no) X".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContainmentLexeme {
    Enthalten,
    Beinhalten,
    Random,
}

variant_names!(ContainmentLexeme, "containment lexeme", {
    "enthalten" => Enthalten,
    "beinhalten" => Beinhalten,
    "random" => Random,
});

impl ContainmentLexeme {
    fn resolve<R: Rng + ?Sized>(self, rng: &mut R) -> &'static str {
        match self {
            Self::Random => ["enthalten", "beinhalten"].choose(rng).copied().unwrap_or("enthalten"),
            fixed => fixed.name(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LanguageRealization {
    /// "auf Deutsch"
    Noun,
    /// "in deutscher Sprache"
    Adjective,
}

variant_names!(LanguageRealization, "language realization", {
    "noun" => Noun,
    "adjective" => Adjective,
});

/// "das Buch enthält (keine) Code-Beispiele (in den Programmiersprachen A und B)"
///
/// `plang` is an embedded programming-language phrase; it is only used when
/// there are examples.
pub fn lexicalize_codeexamples<R: Rng + ?Sized>(
    examples: u32,
    title: Diamond,
    plang: Option<Diamond>,
    lexeme: ContainmentLexeme,
    rng: &mut R,
) -> Result<Diamond, LexError> {
    let lexeme = lexeme.resolve(rng);
    let agens = title.with_mode(modes::AGENT);

    let modifier = if examples == 0 {
        Some(atoms::negative_quantifier())
    } else {
        plang.map(|mut plang| {
            plang.insert_child(1, atoms::preposition("in", "zusammenhang"));
            plang.with_mode(modes::ATTRIBUTE)
        })
    };

    let mut patiens = Diamond::new(
        modes::PATIENT,
        "abstraktum",
        "Code-Beispiel",
        vec![atoms::number(Numerus::Plural)],
    );
    if let Some(modifier) = modifier {
        patiens.append_child(modifier);
    }

    Ok(Diamond::new(
        "",
        "durativ",
        lexeme,
        vec![atoms::tense(Tempus::Present), agens, patiens],
    ))
}

/// "das Buch beinhaltet (keine) Übungen"
pub fn lexicalize_exercises<R: Rng + ?Sized>(
    exercises: u32,
    title: Diamond,
    lexeme: ContainmentLexeme,
    rng: &mut R,
) -> Result<Diamond, LexError> {
    let lexeme = lexeme.resolve(rng);
    let agens = title.with_mode(modes::AGENT);

    let mut patiens = Diamond::new(
        modes::PATIENT,
        "abstraktum",
        "Übung",
        vec![atoms::number(Numerus::Plural)],
    );
    if exercises == 0 {
        patiens.append_child(atoms::negative_quantifier());
    }

    Ok(Diamond::new(
        "",
        "durativ",
        lexeme,
        vec![atoms::tense(Tempus::Present), agens, patiens],
    ))
}

/// "das Buch ist auf Deutsch" / "das Buch ist in englischer Sprache"
pub fn lexicalize_language(
    language: Language,
    title: Diamond,
    realize: LanguageRealization,
) -> Result<Diamond, LexError> {
    let subj = title.with_mode(modes::SUBJECT);
    let num = atoms::number(Numerus::Singular);

    let prkompl = match realize {
        LanguageRealization::Noun => Diamond::new(
            modes::PREDICATIVE,
            "abstraktum",
            language.noun(),
            vec![num, atoms::preposition("auf", "zusammenhang")],
        ),
        LanguageRealization::Adjective => {
            let mut adjective = atoms::modifier(language.adjective(), "eigenschaft");
            adjective.append_child(atoms::degree(Komparation::Positive));
            Diamond::new(
                modes::PREDICATIVE,
                "sorte",
                "Sprache",
                vec![num, atoms::preposition("in", "zusammenhang"), adjective],
            )
        }
    };

    Ok(Diamond::new(
        "",
        "prädikation",
        "sein-kop",
        vec![atoms::tense(Tempus::Present), subj, prkompl],
    ))
}

/// "das Thema" / "die Themen"
pub fn abstract_keywords(count: usize) -> Diamond {
    Diamond::new(
        "",
        "art",
        "Thema",
        vec![atoms::number_for_count(count), atoms::article(ArticleType::Definite)],
    )
}

/// "die Themen A, B und C": the abstract description with the enumerated
/// keywords merged in.
pub fn keywords_phrase(keywords: &[String]) -> Result<Diamond, LexError> {
    let items = keywords
        .iter()
        .map(|kw| {
            Diamond::new(
                modes::NOUN,
                "sorte",
                kw.replace(' ', "_"),
                vec![atoms::number(Numerus::Singular)],
            )
        })
        .collect();
    let enumeration = enumerate(items, modes::NOUN).ok_or(LexError::EmptyContent("keywords"))?;

    let mut description = abstract_keywords(keywords.len());
    description.append_child_as(enumeration, modes::NOMINAL_MERGE);
    description.add_mode_suffix(modes::NOUN);
    Ok(description)
}

/// "das Buch behandelt die Themen A und B", "Grishman geht auf die Themen
/// ... ein", ...
///
/// Exactly one of `title` and `authors` must be given; it becomes the agent.
pub fn lexicalize_keywords(
    keywords: &[String],
    title: Option<Diamond>,
    authors: Option<Diamond>,
    realize: KeywordsRealization,
    lexeme: KeywordsLexeme,
) -> Result<Diamond, LexError> {
    if keywords.is_empty() {
        return Err(LexError::EmptyContent("keywords"));
    }
    let agens = match (title, authors) {
        (Some(title), None) => title,
        (None, Some(authors)) => authors,
        (None, None) => return Err(LexError::MissingArgument("title or authors")),
        (Some(_), Some(_)) => {
            return Err(LexError::ConflictingArguments(
                "keywords take either a title or authors, not both",
            ))
        }
    }
    .with_mode(modes::AGENT);

    let mut patiens = match realize {
        KeywordsRealization::Abstract => abstract_keywords(keywords.len()),
        KeywordsRealization::Complete => keywords_phrase(keywords)?,
    }
    .with_mode(modes::PATIENT);
    let tempus = atoms::tense(Tempus::Present);

    Ok(match lexeme {
        KeywordsLexeme::Behandeln | KeywordsLexeme::Beschreiben => Diamond::new(
            "",
            "handlung",
            lexeme.name(),
            vec![tempus, agens, patiens],
        ),
        KeywordsLexeme::Eingehen => {
            patiens.insert_child(1, atoms::preposition("auf", "zusammenhang"));
            let aux = Diamond::new(
                modes::AUXILIARY,
                "partverbstamm",
                "ein-gehen",
                vec![tempus, agens, patiens],
            );
            Diamond::new("", "infinitum", "ein-X-trans", vec![aux])
        }
        KeywordsLexeme::Aufgreifen => {
            let aux = Diamond::new(
                modes::AUXILIARY,
                "partverbstamm",
                "auf-greifen",
                vec![tempus, agens, patiens],
            );
            Diamond::new("", "infinitum", "auf-X-trans", vec![aux])
        }
    })
}

/// "die Programmiersprache(n) A (und B)" from a packed list such as
/// `"[Ada][Scheme]"`.
pub fn plang_phrase(packed: &str, mode: &str) -> Result<Diamond, LexError> {
    let languages = parse_packed_list(packed)?;
    let count = languages.len();

    let items = languages
        .into_iter()
        .map(|lang| Diamond::new(modes::NOUN, "sorte", lang, vec![atoms::number(Numerus::Singular)]))
        .collect();
    let mut enumeration = enumerate(items, modes::NOUN)
        .ok_or(LexError::EmptyContent("programming languages"))?
        .with_mode(modes::NOMINAL_MERGE);
    enumeration.add_mode_suffix(modes::NOUN);

    Ok(Diamond::new(
        mode,
        "art",
        "Programmiersprache",
        vec![
            atoms::number_for_count(count),
            atoms::article(ArticleType::Definite),
            enumeration,
        ],
    ))
}

/// Programming languages, either as an embedded noun phrase or as a clause
/// "<title|authors> verwendet/verwenden die Programmiersprachen ...".
///
/// The clause form prefers the title as agent when both are given.
pub fn lexicalize_plang(
    packed: &str,
    title: Option<Diamond>,
    authors: Option<Diamond>,
    realize: PlangRealization,
) -> Result<Diamond, LexError> {
    match realize {
        PlangRealization::Embedded => {
            if title.is_some() || authors.is_some() {
                return Err(LexError::ConflictingArguments(
                    "an embedded programming language phrase takes no agent",
                ));
            }
            plang_phrase(packed, modes::NOUN)
        }
        PlangRealization::Complete => {
            let agens = title
                .or(authors)
                .ok_or(LexError::MissingArgument("title or authors"))?
                .with_mode(modes::AGENT);
            let patiens = plang_phrase(packed, modes::PATIENT)?;
            Ok(Diamond::new(
                "",
                "handlung",
                "verwenden",
                vec![atoms::tense(Tempus::Present), agens, patiens],
            ))
        }
    }
}

/// "___ hat einen Umfang von 600 Seiten" / "___ umfasst 600 Seiten" /
/// "___ ist 600 Seiten lang"
pub fn lexicalize_pages<R: Rng + ?Sized>(
    pages: u32,
    title: Diamond,
    lexeme: PagesLexeme,
    rng: &mut R,
) -> Result<Diamond, LexError> {
    let lexeme = match lexeme {
        PagesLexeme::Random => *[PagesLexeme::Umfang, PagesLexeme::Umfassen, PagesLexeme::Laenge]
            .choose(rng)
            .unwrap_or(&PagesLexeme::Umfassen),
        fixed => fixed,
    };
    trace!(lexeme = lexeme.name(), pages, "lexicalizing pages");

    let tempus = atoms::tense(Tempus::Present);
    let count = pages.to_string();
    let pages_mod = atoms::modifier(&count, "kardinal");
    let pages_num = atoms::number(Numerus::Plural);

    Ok(match lexeme {
        PagesLexeme::Umfang => {
            let attrib = Diamond::new(
                modes::ATTRIBUTE,
                "artefaktum",
                "Seite",
                vec![pages_num, atoms::preposition("von", "zugehörigkeit"), pages_mod],
            );
            let patiens = Diamond::new(
                modes::PATIENT,
                "abstraktum",
                "Umfang",
                vec![
                    atoms::number(Numerus::Singular),
                    atoms::article(ArticleType::Indefinite),
                    attrib,
                ],
            );
            Diamond::new(
                "",
                "durativ",
                "haben",
                vec![tempus, title.with_mode(modes::AGENT), patiens],
            )
        }
        PagesLexeme::Umfassen => {
            let patiens = Diamond::new(modes::PATIENT, "artefaktum", "Seite", vec![pages_num, pages_mod]);
            Diamond::new(
                "",
                "handlung",
                "umfassen",
                vec![tempus, title.with_mode(modes::AGENT), patiens],
            )
        }
        PagesLexeme::Laenge | PagesLexeme::Random => {
            let lang = Diamond::new(
                modes::MODIFIER,
                "eigenschaft",
                "lang",
                vec![atoms::degree(Komparation::Positive)],
            );
            let prkompl = Diamond::new(
                modes::PREDICATIVE,
                "artefaktum",
                "Seite",
                vec![pages_num, pages_mod, lang],
            );
            Diamond::new(
                "",
                "prädikation",
                "sein-kop",
                vec![tempus, title.with_mode(modes::SUBJECT), prkompl],
            )
        }
    })
}

/// "das Buch richtet sich an Anfänger / Einsteiger mit Grundkenntnissen /
/// Fortgeschrittene / Experten"
pub fn lexicalize_target(target: TargetAudience, title: Diamond) -> Result<Diamond, LexError> {
    let agens = title.with_mode(modes::AGENT);
    let reflexive = atoms::pronoun(
        Person::Third,
        PronounType::Reflexive,
        Genus::Neuter,
        Numerus::Singular,
        modes::PRONOUN,
    );

    let mut patiens = Diamond::new(
        modes::PATIENT,
        "experte",
        target.lexeme(),
        vec![
            atoms::number(Numerus::Plural),
            atoms::preposition("an", "gerichtetebez"),
        ],
    );
    if target == TargetAudience::BeginnerWithBasics {
        patiens.append_child(Diamond::new(
            modes::ATTRIBUTE,
            "abstraktum",
            "Grundkenntnis",
            vec![
                atoms::number(Numerus::Plural),
                atoms::preposition("mit", "zugehörigkeit"),
            ],
        ));
    }

    Ok(Diamond::new(
        "",
        "handlung",
        "s.richten_an",
        vec![atoms::tense(Tempus::Present), agens, reflexive, patiens],
    ))
}

/// "___ ist 1986 erschienen"
pub fn lexicalize_year(year: i32, title: Diamond) -> Result<Diamond, LexError> {
    let adv = Diamond::leaf(modes::ADVERBIAL, "modus", year.to_string());
    let aux = Diamond::new(
        modes::AUXILIARY,
        "sein",
        "sein",
        vec![atoms::tense(Tempus::Preterite), adv, title.with_mode(modes::AGENT)],
    );
    Ok(Diamond::new("", "inchoativ", "erscheinen", vec![aux]))
}
