use serde::{Deserialize, Serialize};
use std::fmt;

/// Mode labels used across the lexicalizers.
pub mod modes {
    pub const ARTICLE: &str = "ART";
    pub const NUMBER: &str = "NUM";
    pub const GENDER: &str = "GEN";
    pub const PERSON: &str = "PERS";
    pub const PRONOUN: &str = "PRO";
    pub const TENSE: &str = "TEMP:tempus";
    pub const DEGREE: &str = "KOMP";
    pub const PREPOSITION: &str = "PRÄP";
    pub const MODIFIER: &str = "MOD";
    pub const ADVERBIAL: &str = "ADV";
    pub const AGENT: &str = "AGENS";
    pub const PATIENT: &str = "PATIENS";
    pub const SUBJECT: &str = "SUBJ";
    pub const PREDICATIVE: &str = "PRKOMPL";
    pub const ATTRIBUTE: &str = "ATTRIB";
    pub const POSSESSOR: &str = "ASS";
    pub const AUXILIARY: &str = "AUX";
    pub const NOMINAL_MERGE: &str = "NOMERG";
    pub const NOUN_PHRASE: &str = "NP";
    pub const NOUN: &str = "N";
    pub const GIVEN_NAME: &str = "N1";
    pub const MAIN_CLAUSE: &str = "HS";
    pub const SUBORDINATE_CLAUSE: &str = "NS";
    pub const FRONT_CLAUSE: &str = "VL";
}

/// One node of a deep-syntactic (HLDS) tree.
///
/// `mode` is the role the node plays in its parent, `nom` its semantic
/// category and `prop` the lexeme it realizes. Children are ordered; the
/// first child is the leftmost argument. A determiner (mode `ART`) never
/// lives among the children: it is kept in its own slot so that it can be
/// removed without searching.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDiamond")]
pub struct Diamond {
    pub mode: String,
    pub nom: String,
    pub prop: String,
    article: Option<Box<Diamond>>,
    children: Vec<Diamond>,
}

/// Serialized shape of a node. Loaded trees are rebuilt through
/// `Diamond::new`, so an `ART` child in `children` still lands in the slot.
#[derive(Deserialize)]
struct RawDiamond {
    mode: String,
    nom: String,
    prop: String,
    #[serde(default)]
    article: Option<Box<Diamond>>,
    #[serde(default)]
    children: Vec<Diamond>,
}

impl From<RawDiamond> for Diamond {
    fn from(raw: RawDiamond) -> Self {
        let mut node = Diamond::new(raw.mode, raw.nom, raw.prop, raw.children);
        if let Some(article) = raw.article {
            node.append_child(*article);
        }
        node
    }
}

impl Diamond {
    /// Build a node. A child whose mode is `ART` becomes the article; if
    /// several are given, the last one wins.
    pub fn new(
        mode: impl Into<String>,
        nom: impl Into<String>,
        prop: impl Into<String>,
        children: Vec<Diamond>,
    ) -> Self {
        let mut node = Self::leaf(mode, nom, prop);
        for child in children {
            node.append_child(child);
        }
        node
    }

    pub fn leaf(mode: impl Into<String>, nom: impl Into<String>, prop: impl Into<String>) -> Self {
        Self {
            mode: mode.into(),
            nom: nom.into(),
            prop: prop.into(),
            article: None,
            children: Vec::new(),
        }
    }

    pub fn children(&self) -> &[Diamond] {
        &self.children
    }

    pub fn children_mut(&mut self) -> &mut [Diamond] {
        &mut self.children
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty() && self.article.is_none()
    }

    pub fn change_mode(&mut self, mode: impl Into<String>) {
        self.mode = mode.into();
    }

    /// Consuming variant of [`Diamond::change_mode`].
    pub fn with_mode(mut self, mode: impl Into<String>) -> Self {
        self.change_mode(mode);
        self
    }

    pub fn append_child(&mut self, child: Diamond) {
        if child.mode == modes::ARTICLE {
            self.article = Some(Box::new(child));
        } else {
            self.children.push(child);
        }
    }

    /// Append `child` after relabeling it to `mode`.
    pub fn append_child_as(&mut self, child: Diamond, mode: &str) {
        self.append_child(child.with_mode(mode));
    }

    pub fn prepend_child(&mut self, child: Diamond) {
        self.insert_child(0, child);
    }

    /// Insert at `index` among the ordinary children. Indices past the end
    /// append.
    pub fn insert_child(&mut self, index: usize, child: Diamond) {
        if child.mode == modes::ARTICLE {
            self.article = Some(Box::new(child));
            return;
        }
        let index = index.min(self.children.len());
        self.children.insert(index, child);
    }

    /// First direct child carrying exactly `mode`.
    pub fn child(&self, mode: &str) -> Option<&Diamond> {
        if mode == modes::ARTICLE {
            return self.article();
        }
        self.children.iter().find(|c| c.mode == mode)
    }

    pub fn article(&self) -> Option<&Diamond> {
        self.article.as_deref()
    }

    /// Remove and return the article, if any.
    pub fn strip_article(&mut self) -> Option<Diamond> {
        self.article.take().map(|a| *a)
    }

    /// Number every child whose mode equals `mode` as `mode1`, `mode2`, ...
    /// within each sibling group, then recurse through the whole subtree.
    /// The node this is called on keeps its own mode.
    pub fn add_mode_suffix(&mut self, mode: &str) {
        let mut counter = 0;
        for child in self.children.iter_mut() {
            if child.mode == mode {
                counter += 1;
                child.mode = format!("{}{}", mode, counter);
            }
        }
        for child in self.children.iter_mut() {
            child.add_mode_suffix(mode);
        }
    }

    /// Length of the longest root-to-leaf path, counting nodes.
    pub fn depth(&self) -> usize {
        1 + self
            .children
            .iter()
            .chain(self.article.as_deref())
            .map(Diamond::depth)
            .max()
            .unwrap_or(0)
    }

    /// Pre-order walk over the node, its article and its children.
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a Diamond)) {
        visit(self);
        if let Some(article) = self.article.as_deref() {
            article.walk(visit);
        }
        for child in &self.children {
            child.walk(visit);
        }
    }

    /// True if any node in the subtree satisfies `pred`.
    pub fn contains(&self, pred: impl Fn(&Diamond) -> bool) -> bool {
        let mut found = false;
        self.walk(&mut |d| {
            if pred(d) {
                found = true;
            }
        });
        found
    }
}

impl fmt::Display for Diamond {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        if !self.mode.is_empty() {
            write!(f, "<{}>", self.mode)?;
        }
        if !self.nom.is_empty() {
            write!(f, "{}:", self.nom)?;
        }
        write!(f, "{}", self.prop)?;
        if let Some(article) = &self.article {
            write!(f, " {}", article)?;
        }
        for child in &self.children {
            write!(f, " {}", child)?;
        }
        write!(f, "]")
    }
}
