//! Closed grammatical categories understood by the realizer's grammar.
//!
//! Every enum exposes the tag the grammar expects (`Numerus::Plural.tag()
//! == "plur"`) and parses from that tag. Unknown tags are rejected.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FeatureError {
    #[error("unrecognized {dimension} '{value}'")]
    Unrecognized {
        dimension: &'static str,
        value: String,
    },
}

fn unrecognized(dimension: &'static str, value: &str) -> FeatureError {
    FeatureError::Unrecognized {
        dimension,
        value: value.to_string(),
    }
}

/// Grammatical number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Numerus {
    Singular,
    Plural,
}

impl Numerus {
    /// Any count above one is plural. Zero counts as singular: "no examples"
    /// is expressed by a negative quantifier, not by the number marker.
    pub fn from_count(count: usize) -> Self {
        if count > 1 {
            Self::Plural
        } else {
            Self::Singular
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Self::Singular => "sing",
            Self::Plural => "plur",
        }
    }
}

impl FromStr for Numerus {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sing" => Ok(Self::Singular),
            "plur" => Ok(Self::Plural),
            other => Err(unrecognized("number", other)),
        }
    }
}

/// Grammatical gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Genus {
    Masculine,
    Feminine,
    Neuter,
}

impl Genus {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Masculine => "mask",
            Self::Feminine => "fem",
            Self::Neuter => "neut",
        }
    }
}

impl FromStr for Genus {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mask" | "masc" => Ok(Self::Masculine),
            "fem" => Ok(Self::Feminine),
            "neut" => Ok(Self::Neuter),
            other => Err(unrecognized("gender", other)),
        }
    }
}

/// Grammatical person.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Person {
    First,
    Second,
    Third,
}

impl Person {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::First => "1te",
            Self::Second => "2te",
            Self::Third => "3te",
        }
    }
}

impl TryFrom<u8> for Person {
    type Error = FeatureError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(Self::First),
            2 => Ok(Self::Second),
            3 => Ok(Self::Third),
            other => Err(unrecognized("person", &other.to_string())),
        }
    }
}

impl FromStr for Person {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "1" | "1te" => Ok(Self::First),
            "2" | "2te" => Ok(Self::Second),
            "3" | "3te" => Ok(Self::Third),
            other => Err(unrecognized("person", other)),
        }
    }
}

/// Tense of a finite verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tempus {
    Present,
    Preterite,
    Perfect,
    Future,
}

impl Tempus {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Present => "präs",
            Self::Preterite => "imperf",
            Self::Perfect => "perf",
            Self::Future => "fut",
        }
    }
}

impl FromStr for Tempus {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "präs" => Ok(Self::Present),
            "imperf" => Ok(Self::Preterite),
            "perf" => Ok(Self::Perfect),
            "fut" => Ok(Self::Future),
            other => Err(unrecognized("tense", other)),
        }
    }
}

/// Degree of comparison for adjectives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Komparation {
    Positive,
    Comparative,
    Superlative,
}

impl Komparation {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Positive => "pos",
            Self::Comparative => "komp",
            Self::Superlative => "super",
        }
    }
}

impl FromStr for Komparation {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pos" => Ok(Self::Positive),
            "komp" => Ok(Self::Comparative),
            "super" => Ok(Self::Superlative),
            other => Err(unrecognized("degree", other)),
        }
    }
}

/// Determiner kinds. `NegativeQuantifier` realizes "kein".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ArticleType {
    Definite,
    Indefinite,
    NegativeQuantifier,
}

impl ArticleType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Definite => "def",
            Self::Indefinite => "indef",
            Self::NegativeQuantifier => "quantkein",
        }
    }
}

impl FromStr for ArticleType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "def" => Ok(Self::Definite),
            "indef" => Ok(Self::Indefinite),
            "quantkein" => Ok(Self::NegativeQuantifier),
            other => Err(unrecognized("article", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PronounType {
    Personal,
    Reflexive,
}

impl PronounType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Personal => "perspro",
            Self::Reflexive => "reflpro",
        }
    }
}

impl FromStr for PronounType {
    type Err = FeatureError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "perspro" => Ok(Self::Personal),
            "reflpro" => Ok(Self::Reflexive),
            other => Err(unrecognized("pronoun type", other)),
        }
    }
}
