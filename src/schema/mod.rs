//! Data types shared by the lexicalizers: the tree node, grammatical
//! features and the typed content handed over by content planning.

pub mod diamond;
pub mod features;
pub mod message;
