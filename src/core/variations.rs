//! Variation dictionaries: several alternative lexicalizations of the same
//! entity, from which a caller picks one.

use rand::Rng;
use std::collections::BTreeMap;
use tracing::debug;

use crate::core::entities::{
    lexicalize_authors, lexicalize_titles, AuthorAttachment, AuthorsRealization, TitleRealization,
};
use crate::core::error::LexError;
use crate::schema::diamond::{modes, Diamond};

/// Named alternative trees for one entity. Iteration is ordered by name so
/// that seeded random choices are reproducible.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VariationSet {
    variations: BTreeMap<String, Diamond>,
}

impl VariationSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, diamond: Diamond) {
        self.variations.insert(name.into(), diamond);
    }

    pub fn get(&self, name: &str) -> Option<&Diamond> {
        self.variations.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.variations.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Diamond)> {
        self.variations.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.variations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.variations.is_empty()
    }

    /// Keep only the named variations. Unknown names are ignored.
    pub fn retain_names(&mut self, names: &[String]) {
        self.variations.retain(|k, _| names.iter().any(|n| n == k));
    }

    /// Pick a variation uniformly at random; `None` if the set is empty.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<(&str, &Diamond)> {
        if self.variations.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..self.variations.len());
        let chosen = self.iter().nth(index);
        if let Some((name, _)) = chosen {
            debug!(variation = name, "chose variation");
        }
        chosen
    }
}

/// Keys of the author forms as they appear in title variation names.
fn authors_key(realize: AuthorsRealization) -> &'static str {
    match realize {
        AuthorsRealization::Abstract => "abstract-authors",
        AuthorsRealization::Lastnames => "lastnames",
        AuthorsRealization::Complete => "complete-names",
    }
}

/// `abstract`, `complete` and `lastnames` renderings of a list of authors.
pub fn authors_variations(authors: &[String]) -> Result<VariationSet, LexError> {
    let mut set = VariationSet::new();
    for (name, realize) in [
        ("abstract", AuthorsRealization::Abstract),
        ("complete", AuthorsRealization::Complete),
        ("lastnames", AuthorsRealization::Lastnames),
    ] {
        set.insert(name, lexicalize_authors(authors, realize)?);
    }
    Ok(set)
}

/// Every legal way to refer to a book by title and authors.
///
/// Plain forms are `abstract`, `complete` and `pronoun`. Combined forms are
/// named `<title>+<authors>-<attachment>`, e.g. `title+lastnames-possessive`
/// ("Chomskys „On Syntax“") or `abstract-title+complete-names-preposition`
/// ("das Buch von Noam Chomsky"). Possessive forms only exist for a single
/// author.
pub fn title_variations<R: Rng + ?Sized>(
    titles: &[String],
    authors: &[String],
    rng: &mut R,
) -> Result<VariationSet, LexError> {
    let mut set = VariationSet::new();
    for (name, realize) in [
        ("abstract", TitleRealization::Abstract),
        ("complete", TitleRealization::Complete),
        ("pronoun", TitleRealization::Pronoun),
    ] {
        set.insert(
            name,
            lexicalize_titles(titles, None, realize, AuthorAttachment::None, rng)?,
        );
    }

    let author_forms = authors_variations(authors)?;
    let mut attachments = vec![("preposition", AuthorAttachment::Preposition)];
    if authors.len() == 1 {
        attachments.insert(0, ("possessive", AuthorAttachment::Possessive));
    }

    for (title_key, title_realize) in [
        ("title", TitleRealization::Complete),
        ("abstract-title", TitleRealization::Abstract),
    ] {
        for (form_key, form) in [
            ("complete", AuthorsRealization::Complete),
            ("lastnames", AuthorsRealization::Lastnames),
            ("abstract", AuthorsRealization::Abstract),
        ] {
            let Some(lexicalized_authors) = author_forms.get(form_key) else {
                continue;
            };
            for &(attachment_key, attachment) in &attachments {
                let name = format!("{}+{}-{}", title_key, authors_key(form), attachment_key);
                let diamond = lexicalize_titles(
                    titles,
                    Some(lexicalized_authors.clone()),
                    title_realize,
                    attachment,
                    rng,
                )?;
                set.insert(name, diamond);
            }
        }
    }

    Ok(set)
}

/// "<current>, wohingegen <other>": contrast a clause about the current
/// book with one about another book.
pub fn contrast_clauses(current: Diamond, other: Diamond) -> Diamond {
    let main = current.with_mode(modes::MAIN_CLAUSE);
    let front = other.with_mode(modes::FRONT_CLAUSE);
    let subordinate = Diamond::new(modes::SUBORDINATE_CLAUSE, "adversativ", "wohingegen", vec![front]);
    Diamond::new("", "subjunktion", "komma", vec![main, subordinate])
}
