//! Lexicalization: atomic feature nodes, combinators, entity and clause
//! lexicalizers, variation dictionaries and the block pipeline.

pub mod atoms;
pub mod clauses;
pub mod combinators;
pub mod entities;
pub mod error;
pub mod hlds;
pub mod pipeline;
pub mod profile;
pub mod variations;
