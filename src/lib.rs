//! Booklex: lexicalization of book descriptions for the OpenCCG realizer.
//!
//! Content planning hands over typed facts about a book (authors, titles,
//! year, keywords, page count, ...). This crate turns them into nested HLDS
//! "diamond" trees that a German OpenCCG grammar can realize, choosing
//! among alternative phrasings at random, and serializes them as HLDS XML.

pub mod core;
pub mod schema;
