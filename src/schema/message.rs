use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::core::error::LexError;

/// Language a book is written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Language {
    German,
    English,
}

impl Language {
    /// The noun the grammar knows for this language ("Deutsch").
    pub fn noun(&self) -> &'static str {
        match self {
            Self::German => "Deutsch",
            Self::English => "Englisch",
        }
    }

    /// The adjective stem ("deutsch"), used in "in deutscher Sprache".
    pub fn adjective(&self) -> &'static str {
        match self {
            Self::German => "deutsch",
            Self::English => "englisch",
        }
    }
}

impl FromStr for Language {
    type Err = LexError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "German" => Ok(Self::German),
            "English" => Ok(Self::English),
            other => Err(LexError::UnknownVariant {
                kind: "language",
                value: other.to_string(),
            }),
        }
    }
}

/// The four reader levels a book may address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetAudience {
    Beginner,
    /// Newcomers with prior basics; gets "mit Grundkenntnissen".
    BeginnerWithBasics,
    Intermediate,
    Expert,
}

impl TargetAudience {
    pub fn lexeme(&self) -> &'static str {
        match self {
            Self::Beginner => "Anfänger",
            Self::BeginnerWithBasics => "Einsteiger",
            Self::Intermediate => "Fortgeschritten",
            Self::Expert => "Experte",
        }
    }
}

impl TryFrom<u8> for TargetAudience {
    type Error = LexError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Self::Beginner),
            1 => Ok(Self::BeginnerWithBasics),
            2 => Ok(Self::Intermediate),
            3 => Ok(Self::Expert),
            other => Err(LexError::UnknownTargetLevel(other)),
        }
    }
}

/// Decode a packed list such as `"[Lisp][Ruby][C++]"` into its items.
///
/// Whitespace between brackets is ignored. Anything else outside a bracket
/// pair, an unclosed bracket or an empty item is an error.
pub fn parse_packed_list(packed: &str) -> Result<Vec<String>, LexError> {
    let malformed = || LexError::MalformedPackedList(packed.to_string());
    let mut items = Vec::new();
    let mut rest = packed.trim();

    while !rest.is_empty() {
        let body = rest.strip_prefix('[').ok_or_else(malformed)?;
        let end = body.find(']').ok_or_else(malformed)?;
        let item = body[..end].trim();
        if item.is_empty() || item.contains('[') {
            return Err(malformed());
        }
        items.push(item.to_string());
        rest = body[end + 1..].trim_start();
    }

    Ok(items)
}

/// A single piece of content about a book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Fact {
    Authors(Vec<String>),
    Title(Vec<String>),
    Year(i32),
    Keywords(Vec<String>),
    /// Packed list, e.g. `"[Ada][Scheme]"`.
    ProgrammingLanguages(String),
    Pages(u32),
    Language(Language),
    Target(TargetAudience),
    CodeExamples(u32),
    Exercises(u32),
}

/// Discriminant of a [`Fact`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum FactKind {
    Authors,
    Title,
    Year,
    Keywords,
    ProgrammingLanguages,
    Pages,
    Language,
    Target,
    CodeExamples,
    Exercises,
}

impl Fact {
    pub fn kind(&self) -> FactKind {
        match self {
            Self::Authors(_) => FactKind::Authors,
            Self::Title(_) => FactKind::Title,
            Self::Year(_) => FactKind::Year,
            Self::Keywords(_) => FactKind::Keywords,
            Self::ProgrammingLanguages(_) => FactKind::ProgrammingLanguages,
            Self::Pages(_) => FactKind::Pages,
            Self::Language(_) => FactKind::Language,
            Self::Target(_) => FactKind::Target,
            Self::CodeExamples(_) => FactKind::CodeExamples,
            Self::Exercises(_) => FactKind::Exercises,
        }
    }
}

impl FactKind {
    /// Facts that identify a book rather than describe it.
    pub fn is_identifier(&self) -> bool {
        matches!(self, Self::Authors | Self::Title | Self::Year)
    }
}

/// The kind of a message block, as decided by content planning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockType {
    Id,
    Extra,
    LastbookMatch,
    LastbookNomatch,
    UsermodelMatch,
    UsermodelNomatch,
}

impl BlockType {
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Id => "id",
            Self::Extra => "extra",
            Self::LastbookMatch => "lastbook_match",
            Self::LastbookNomatch => "lastbook_nomatch",
            Self::UsermodelMatch => "usermodel_match",
            Self::UsermodelNomatch => "usermodel_nomatch",
        }
    }
}

impl fmt::Display for BlockType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Unknown tag handed over by content planning.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown message type '{0}'")]
pub struct UnknownBlockType(pub String);

impl FromStr for BlockType {
    type Err = UnknownBlockType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "extra" => Ok(Self::Extra),
            "lastbook_match" => Ok(Self::LastbookMatch),
            "lastbook_nomatch" => Ok(Self::LastbookNomatch),
            "usermodel_match" => Ok(Self::UsermodelMatch),
            "usermodel_nomatch" => Ok(Self::UsermodelNomatch),
            other => Err(UnknownBlockType(other.to_string())),
        }
    }
}

/// A group of facts that content planning decided to mention together.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageBlock {
    pub block_type: BlockType,
    pub facts: Vec<Fact>,
    /// Only used by `lastbook_nomatch`: the previous book's values for the
    /// facts that differ.
    #[serde(default)]
    pub last_book_facts: Vec<Fact>,
}

impl MessageBlock {
    pub fn new(block_type: BlockType, facts: Vec<Fact>) -> Self {
        Self {
            block_type,
            facts,
            last_book_facts: Vec::new(),
        }
    }

    pub fn fact(&self, kind: FactKind) -> Option<&Fact> {
        self.facts.iter().find(|f| f.kind() == kind)
    }

    pub fn last_book_fact(&self, kind: FactKind) -> Option<&Fact> {
        self.last_book_facts.iter().find(|f| f.kind() == kind)
    }
}

/// Title and authors of a book.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookIdentity {
    pub titles: Vec<String>,
    pub authors: Vec<String>,
}

/// All message blocks planned for one book.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextPlan {
    pub book: BookIdentity,
    #[serde(default)]
    pub last_book: Option<BookIdentity>,
    pub blocks: Vec<MessageBlock>,
}

impl TextPlan {
    pub fn load_from_ron(path: &Path) -> Result<Vec<TextPlan>, crate::core::pipeline::PipelineError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse_ron(&contents)
    }

    /// Parse a list of plans from a RON string.
    pub fn parse_ron(input: &str) -> Result<Vec<TextPlan>, crate::core::pipeline::PipelineError> {
        Ok(ron::from_str(input)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packed_list_decodes_in_order() {
        assert_eq!(
            parse_packed_list("[Lisp][Ruby][C++]").unwrap(),
            vec!["Lisp", "Ruby", "C++"]
        );
        assert_eq!(parse_packed_list("[Python]").unwrap(), vec!["Python"]);
        assert_eq!(parse_packed_list(" [Ada] [Scheme] ").unwrap(), vec!["Ada", "Scheme"]);
        assert!(parse_packed_list("").unwrap().is_empty());
    }

    #[test]
    fn malformed_packed_lists_are_rejected() {
        for bad in ["Ada", "[Ada", "[Ada]x", "[]", "[[Ada]]", "[Ada]]"] {
            assert!(
                matches!(parse_packed_list(bad), Err(LexError::MalformedPackedList(_))),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn target_levels() {
        assert_eq!(TargetAudience::try_from(1).unwrap(), TargetAudience::BeginnerWithBasics);
        assert_eq!(TargetAudience::Expert.lexeme(), "Experte");
        assert!(matches!(TargetAudience::try_from(4), Err(LexError::UnknownTargetLevel(4))));
    }

    #[test]
    fn block_type_tags_parse() {
        assert_eq!("lastbook_nomatch".parse::<BlockType>().unwrap(), BlockType::LastbookNomatch);
        assert_eq!(BlockType::UsermodelMatch.to_string(), "usermodel_match");
        assert_eq!(
            "summary".parse::<BlockType>(),
            Err(UnknownBlockType("summary".to_string()))
        );
    }

    #[test]
    fn identifier_kinds() {
        assert!(Fact::Year(1986).kind().is_identifier());
        assert!(!Fact::Pages(600).kind().is_identifier());
    }

    #[test]
    fn block_lookup_by_kind() {
        let block = MessageBlock::new(BlockType::Extra, vec![Fact::Pages(12), Fact::Exercises(0)]);
        assert_eq!(block.fact(FactKind::Exercises), Some(&Fact::Exercises(0)));
        assert!(block.fact(FactKind::Year).is_none());
    }

    #[test]
    fn text_plan_parses_from_ron() {
        let input = r#"[
            (
                book: (titles: ["On Syntax"], authors: ["Noam Chomsky"]),
                blocks: [
                    (block_type: id, facts: [Title(["On Syntax"]), Authors(["Noam Chomsky"]), Year(1986)]),
                    (block_type: extra, facts: [Pages(600), Language(English)]),
                ],
            ),
        ]"#;
        let plans = TextPlan::parse_ron(input).unwrap();
        assert_eq!(plans.len(), 1);
        assert!(plans[0].last_book.is_none());
        assert_eq!(plans[0].blocks[1].block_type, BlockType::Extra);
        assert_eq!(plans[0].blocks[0].fact(FactKind::Year), Some(&Fact::Year(1986)));
    }
}
