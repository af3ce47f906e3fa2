/// Message-block orchestration: text plan → lexicalized trees.
///
/// Dispatches each block by its type, builds the variation dictionaries for
/// the book, picks variations at random and hands every fact to its clause
/// lexicalizer.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rustc_hash::FxHashMap;
use std::path::Path;
use thiserror::Error;
use tracing::{debug, trace};

use crate::core::clauses::{
    lexicalize_codeexamples, lexicalize_exercises, lexicalize_keywords, lexicalize_language,
    lexicalize_pages, lexicalize_plang, lexicalize_target, lexicalize_year, PlangRealization,
};
use crate::core::entities::{lexicalize_titles, AuthorAttachment, TitleRealization};
use crate::core::error::LexError;
use crate::core::profile::{LexicalizationProfile, ProfileError};
use crate::core::variations::{contrast_clauses, title_variations, VariationSet};
use crate::schema::diamond::Diamond;
use crate::schema::message::{
    BlockType, BookIdentity, Fact, FactKind, MessageBlock, TextPlan, UnknownBlockType,
};

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("lexicalization error: {0}")]
    Lex(#[from] LexError),
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error(transparent)]
    UnknownMessageType(#[from] UnknownBlockType),
    #[error("message type '{0}' is not supported")]
    UnsupportedBlock(BlockType),
    #[error("lastbook_nomatch needs a last book in the text plan")]
    MissingLastBook,
    #[error("no counterpart for {0:?} among the last book's facts")]
    MissingFact(FactKind),
    #[error("the profile excludes every title variation")]
    NoTitleVariation,
}

/// Turns text plans into trees for the realizer. Built via
/// `Lexicalizer::builder()`.
pub struct Lexicalizer {
    profile: LexicalizationProfile,
    seed: u64,
    generation_count: u64,
}

/// Builder for constructing a `Lexicalizer`.
pub struct LexicalizerBuilder {
    profile_path: Option<String>,
    seed: u64,
    /// Directly provided profile (for testing without files).
    profile: Option<LexicalizationProfile>,
}

impl Lexicalizer {
    pub fn builder() -> LexicalizerBuilder {
        LexicalizerBuilder {
            profile_path: None,
            seed: 0,
            profile: None,
        }
    }

    pub fn profile(&self) -> &LexicalizationProfile {
        &self.profile
    }

    /// Lexicalize every block of a plan, in order.
    pub fn lexicalize_plan(&mut self, plan: &TextPlan) -> Result<Vec<Diamond>, PipelineError> {
        let mut trees = Vec::new();
        for block in &plan.blocks {
            trees.extend(self.lexicalize_block(block, &plan.book, plan.last_book.as_ref())?);
        }
        Ok(trees)
    }

    /// Lexicalize one block about `book`. `last_book` is only consulted by
    /// `lastbook_nomatch` blocks.
    pub fn lexicalize_block(
        &mut self,
        block: &MessageBlock,
        book: &BookIdentity,
        last_book: Option<&BookIdentity>,
    ) -> Result<Vec<Diamond>, PipelineError> {
        let mut rng = StdRng::seed_from_u64(self.seed.wrapping_add(self.generation_count));
        self.generation_count += 1;
        debug!(block = %block.block_type, facts = block.facts.len(), "lexicalizing block");

        match block.block_type {
            BlockType::Id => self.lexicalize_id(block, book, &mut rng),
            BlockType::Extra => {
                let titles = self.title_variations(&book.titles, &book.authors, &mut rng)?;
                self.lexicalize_facts(&block.facts, &titles, &mut rng)
            }
            BlockType::LastbookNomatch => {
                let last_book = last_book.ok_or(PipelineError::MissingLastBook)?;
                self.lexicalize_lastbook_nomatch(block, book, last_book, &mut rng)
            }
            unsupported @ (BlockType::LastbookMatch
            | BlockType::UsermodelMatch
            | BlockType::UsermodelNomatch) => Err(PipelineError::UnsupportedBlock(unsupported)),
        }
    }

    /// Lexicalize a block whose type arrives as a raw tag. `last_book_facts`
    /// and `last_book` are only consulted by `lastbook_nomatch`.
    pub fn lexicalize_tagged(
        &mut self,
        tag: &str,
        facts: Vec<Fact>,
        last_book_facts: Vec<Fact>,
        book: &BookIdentity,
        last_book: Option<&BookIdentity>,
    ) -> Result<Vec<Diamond>, PipelineError> {
        let block_type: BlockType = tag.parse()?;
        let block = MessageBlock {
            block_type,
            facts,
            last_book_facts,
        };
        self.lexicalize_block(&block, book, last_book)
    }

    /// Title and authors (taken from the block when present, otherwise from
    /// the plan), the year if known, then every other fact.
    fn lexicalize_id(
        &self,
        block: &MessageBlock,
        book: &BookIdentity,
        rng: &mut StdRng,
    ) -> Result<Vec<Diamond>, PipelineError> {
        let titles = match block.fact(FactKind::Title) {
            Some(Fact::Title(titles)) => titles,
            _ => &book.titles,
        };
        let authors = match block.fact(FactKind::Authors) {
            Some(Fact::Authors(authors)) => authors,
            _ => &book.authors,
        };
        let variations = self.title_variations(titles, authors, rng)?;

        let title = pick(&variations, rng)?;
        let description = match block.fact(FactKind::Year) {
            Some(Fact::Year(year)) => lexicalize_year(*year, title)?,
            _ => title,
        };

        let mut trees = vec![description];
        trees.extend(self.lexicalize_facts(&block.facts, &variations, rng)?);
        Ok(trees)
    }

    /// "<this book> …, wohingegen <last book> …" for every fact that has a
    /// counterpart among the last book's facts.
    fn lexicalize_lastbook_nomatch(
        &self,
        block: &MessageBlock,
        book: &BookIdentity,
        last_book: &BookIdentity,
        rng: &mut StdRng,
    ) -> Result<Vec<Diamond>, PipelineError> {
        let last_facts: FxHashMap<FactKind, &Fact> =
            block.last_book_facts.iter().map(|f| (f.kind(), f)).collect();

        let mut trees = Vec::new();
        for fact in block.facts.iter().filter(|f| !f.kind().is_identifier()) {
            let last_fact = *last_facts
                .get(&fact.kind())
                .ok_or(PipelineError::MissingFact(fact.kind()))?;

            let current_title = lexicalize_titles(
                &book.titles,
                None,
                TitleRealization::Pronoun,
                AuthorAttachment::None,
                rng,
            )?;
            let last_title = lexicalize_titles(
                &last_book.titles,
                None,
                TitleRealization::Complete,
                AuthorAttachment::None,
                rng,
            )?;

            let current = self.lexicalize_fact(fact, current_title, None, rng)?;
            let last = self.lexicalize_fact(last_fact, last_title, None, rng)?;
            if let (Some(current), Some(last)) = (current, last) {
                trees.push(contrast_clauses(current, last));
            }
        }
        Ok(trees)
    }

    /// One clause per descriptive fact. Programming languages are folded
    /// into the code-examples clause when there are examples; with zero
    /// examples they get a clause of their own.
    fn lexicalize_facts(
        &self,
        facts: &[Fact],
        titles: &VariationSet,
        rng: &mut StdRng,
    ) -> Result<Vec<Diamond>, PipelineError> {
        let has_examples = facts.iter().any(|f| matches!(f, Fact::CodeExamples(n) if *n > 0));
        let mut embedded_plang = match facts.iter().find(|f| f.kind() == FactKind::ProgrammingLanguages) {
            Some(Fact::ProgrammingLanguages(packed)) if has_examples => Some(lexicalize_plang(
                packed,
                None,
                None,
                PlangRealization::Embedded,
            )?),
            _ => None,
        };

        let mut trees = Vec::new();
        for fact in facts {
            match fact.kind() {
                kind if kind.is_identifier() => {
                    trace!(?kind, "skipping identifier fact");
                    continue;
                }
                FactKind::ProgrammingLanguages if has_examples => continue,
                _ => {}
            }
            let title = pick(titles, rng)?;
            let plang = match fact {
                Fact::CodeExamples(_) => embedded_plang.take(),
                _ => None,
            };
            if let Some(tree) = self.lexicalize_fact(fact, title, plang, rng)? {
                trees.push(tree);
            }
        }
        Ok(trees)
    }

    /// Dispatch one fact to its lexicalizer; `title` becomes its agent or
    /// subject. Identifier facts yield `None`; the year only appears in the
    /// title description of an `id` block.
    fn lexicalize_fact(
        &self,
        fact: &Fact,
        title: Diamond,
        plang: Option<Diamond>,
        rng: &mut StdRng,
    ) -> Result<Option<Diamond>, PipelineError> {
        let profile = &self.profile;
        let tree = match fact {
            Fact::Authors(_) | Fact::Title(_) | Fact::Year(_) => return Ok(None),
            Fact::Keywords(keywords) => lexicalize_keywords(
                keywords,
                Some(title),
                None,
                profile.keywords,
                profile.keywords_lexeme,
            )?,
            Fact::ProgrammingLanguages(packed) => match profile.plang {
                PlangRealization::Embedded => {
                    lexicalize_plang(packed, None, None, PlangRealization::Embedded)?
                }
                PlangRealization::Complete => {
                    lexicalize_plang(packed, Some(title), None, PlangRealization::Complete)?
                }
            },
            Fact::Pages(pages) => lexicalize_pages(*pages, title, profile.pages_lexeme, rng)?,
            Fact::Language(language) => lexicalize_language(*language, title, profile.language)?,
            Fact::Target(target) => lexicalize_target(*target, title)?,
            Fact::CodeExamples(count) => {
                lexicalize_codeexamples(*count, title, plang, profile.codeexamples_lexeme, rng)?
            }
            Fact::Exercises(count) => {
                lexicalize_exercises(*count, title, profile.exercises_lexeme, rng)?
            }
        };
        Ok(Some(tree))
    }

    /// Title variations restricted to the profile's allowed names.
    fn title_variations(
        &self,
        titles: &[String],
        authors: &[String],
        rng: &mut StdRng,
    ) -> Result<VariationSet, PipelineError> {
        let mut set = title_variations(titles, authors, rng)?;
        if !self.profile.title_variations.is_empty() {
            set.retain_names(&self.profile.title_variations);
        }
        if set.is_empty() {
            return Err(PipelineError::NoTitleVariation);
        }
        Ok(set)
    }
}

/// A fresh copy of a randomly chosen variation.
fn pick(variations: &VariationSet, rng: &mut StdRng) -> Result<Diamond, PipelineError> {
    variations
        .choose(rng)
        .map(|(_, diamond)| diamond.clone())
        .ok_or(PipelineError::NoTitleVariation)
}

impl LexicalizerBuilder {
    pub fn profile_path(mut self, path: &str) -> Self {
        self.profile_path = Some(path.to_string());
        self
    }

    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Provide the profile directly (for testing without files).
    pub fn with_profile(mut self, profile: LexicalizationProfile) -> Self {
        self.profile = Some(profile);
        self
    }

    pub fn build(self) -> Result<Lexicalizer, PipelineError> {
        // A profile file overrides a directly provided profile
        let profile = match self.profile_path {
            Some(ref path) => LexicalizationProfile::load_from_ron(Path::new(path))?,
            None => self.profile.unwrap_or_default(),
        };

        Ok(Lexicalizer {
            profile,
            seed: self.seed,
            generation_count: 0,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clauses::PagesLexeme;
    use crate::schema::message::{Language, TargetAudience};

    fn book() -> BookIdentity {
        BookIdentity {
            titles: vec!["Angewandte Computerlinguistik".to_string()],
            authors: vec!["David Cole".to_string()],
        }
    }

    fn engine(seed: u64) -> Lexicalizer {
        Lexicalizer::builder().seed(seed).build().unwrap()
    }

    #[test]
    fn id_block_starts_with_year_clause() {
        let block = MessageBlock::new(
            BlockType::Id,
            vec![
                Fact::Title(book().titles),
                Fact::Authors(book().authors),
                Fact::Year(1986),
                Fact::Pages(600),
            ],
        );
        let trees = engine(1).lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].prop, "erscheinen");
    }

    #[test]
    fn id_block_without_year_yields_the_title() {
        let block = MessageBlock::new(BlockType::Id, vec![Fact::Exercises(0)]);
        let trees = engine(5).lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(trees.len(), 2);
        assert_ne!(trees[0].prop, "erscheinen");
        assert_eq!(trees[1].prop, "beinhalten");
    }

    #[test]
    fn plang_is_folded_into_code_examples() {
        let block = MessageBlock::new(
            BlockType::Extra,
            vec![Fact::ProgrammingLanguages("[Ada][Scheme]".to_string()), Fact::CodeExamples(4)],
        );
        let trees = engine(2).lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(trees.len(), 1);
        let patiens = trees[0].child("PATIENS").unwrap();
        assert_eq!(patiens.child("ATTRIB").unwrap().prop, "Programmiersprache");
    }

    #[test]
    fn plang_stays_a_clause_without_examples() {
        let block = MessageBlock::new(
            BlockType::Extra,
            vec![Fact::ProgrammingLanguages("[Lisp][Prolog]".to_string()), Fact::CodeExamples(0)],
        );
        let trees = engine(2).lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(trees.len(), 2);
        assert_eq!(trees[0].prop, "verwenden");
        let languages = trees[0].child("PATIENS").unwrap().child("NOMERG").unwrap();
        assert_eq!(languages.children()[0].prop, "Lisp");

        let examples = trees[1].child("PATIENS").unwrap();
        assert_eq!(examples.article().unwrap().prop, "quantkein");
        assert!(examples.child("ATTRIB").is_none());
    }

    #[test]
    fn plang_alone_is_a_clause() {
        let block = MessageBlock::new(
            BlockType::Extra,
            vec![Fact::ProgrammingLanguages("[Python]".to_string())],
        );
        let trees = engine(2).lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(trees[0].prop, "verwenden");
    }

    #[test]
    fn same_seed_same_trees() {
        let block = MessageBlock::new(
            BlockType::Extra,
            vec![Fact::Pages(300), Fact::Language(Language::German), Fact::Target(TargetAudience::Expert)],
        );
        let a = engine(42).lexicalize_block(&block, &book(), None).unwrap();
        let b = engine(42).lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn unsupported_blocks_fail_explicitly() {
        let block = MessageBlock::new(BlockType::UsermodelMatch, vec![]);
        let result = engine(0).lexicalize_block(&block, &book(), None);
        assert!(matches!(result, Err(PipelineError::UnsupportedBlock(BlockType::UsermodelMatch))));
    }

    #[test]
    fn unknown_tags_fail_explicitly() {
        let result = engine(0).lexicalize_tagged("summary", vec![], vec![], &book(), None);
        assert!(matches!(result, Err(PipelineError::UnknownMessageType(_))));
    }

    #[test]
    fn lastbook_nomatch_contrasts_facts() {
        let last = BookIdentity {
            titles: vec!["On Syntax".to_string()],
            authors: vec!["Noam Chomsky".to_string()],
        };
        let mut block = MessageBlock::new(BlockType::LastbookNomatch, vec![Fact::Language(Language::German)]);
        block.last_book_facts = vec![Fact::Language(Language::English)];

        let trees = engine(0).lexicalize_block(&block, &book(), Some(&last)).unwrap();
        assert_eq!(trees.len(), 1);
        let contrast = &trees[0];
        assert_eq!(contrast.prop, "komma");
        let main = contrast.child("HS").unwrap();
        assert_eq!(main.child("PRKOMPL").unwrap().prop, "Deutsch");
        assert!(main.child("SUBJ").unwrap().child("PRO").is_some());
        let other = contrast.child("NS").unwrap().child("VL").unwrap();
        assert_eq!(other.child("SUBJ").unwrap().prop, "On_Syntax");
    }

    #[test]
    fn lastbook_nomatch_needs_last_book_and_counterparts() {
        let block = MessageBlock::new(BlockType::LastbookNomatch, vec![Fact::Pages(10)]);
        assert!(matches!(
            engine(0).lexicalize_block(&block, &book(), None),
            Err(PipelineError::MissingLastBook)
        ));
        assert!(matches!(
            engine(0).lexicalize_block(&block, &book(), Some(&book())),
            Err(PipelineError::MissingFact(FactKind::Pages))
        ));
    }

    #[test]
    fn profile_restricts_title_variations() {
        let profile = LexicalizationProfile {
            title_variations: vec!["abstract".to_string()],
            pages_lexeme: PagesLexeme::Umfassen,
            ..LexicalizationProfile::default()
        };
        let mut lexicalizer = Lexicalizer::builder().with_profile(profile).build().unwrap();
        let block = MessageBlock::new(BlockType::Extra, vec![Fact::Pages(99)]);
        let trees = lexicalizer.lexicalize_block(&block, &book(), None).unwrap();
        assert_eq!(trees[0].prop, "umfassen");
        assert_eq!(trees[0].child("AGENS").unwrap().prop, "Buch");
    }

    #[test]
    fn profile_excluding_everything_is_an_error() {
        let profile = LexicalizationProfile {
            title_variations: vec!["nonexistent".to_string()],
            ..LexicalizationProfile::default()
        };
        let mut lexicalizer = Lexicalizer::builder().with_profile(profile).build().unwrap();
        let block = MessageBlock::new(BlockType::Extra, vec![Fact::Pages(99)]);
        assert!(matches!(
            lexicalizer.lexicalize_block(&block, &book(), None),
            Err(PipelineError::NoTitleVariation)
        ));
    }

    #[test]
    fn builder_with_seed() {
        let lexicalizer = Lexicalizer::builder().seed(12345).build().unwrap();
        assert_eq!(lexicalizer.seed, 12345);
        assert_eq!(lexicalizer.profile(), &LexicalizationProfile::default());
    }
}
