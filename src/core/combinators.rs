//! Structural combinators: coordination and nested names.

use crate::core::error::LexError;
use crate::schema::diamond::{modes, Diamond};

/// Category shared by every coordination node.
pub const COORDINATION: &str = "konjunktion";
/// Lexeme of the final conjunction ("und").
pub const CONJUNCTION: &str = "und";
/// Lexeme of the comma joining the non-final items.
pub const COMMA: &str = "komma";

/// Coordinate `items` as "A", "A und B", "A, B und C", ...
///
/// All but the last item are grouped into a comma chain first, so the tree
/// is `und(komma(komma(A, B), C), D)`. An empty list yields `None`; a single
/// item is returned unchanged.
pub fn enumerate(mut items: Vec<Diamond>, mode: &str) -> Option<Diamond> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        2 => Some(Diamond::new(mode, COORDINATION, CONJUNCTION, items)),
        _ => {
            let last = items.pop()?;
            let head = comma_enumerate(items, mode)?;
            Some(Diamond::new(mode, COORDINATION, CONJUNCTION, vec![head, last]))
        }
    }
}

/// Left-nested comma chain: `komma(komma(A, B), C)`.
fn comma_enumerate(mut items: Vec<Diamond>, mode: &str) -> Option<Diamond> {
    match items.len() {
        0 => None,
        1 => items.pop(),
        2 => Some(Diamond::new(mode, COORDINATION, COMMA, items)),
        _ => {
            let last = items.pop()?;
            let head = comma_enumerate(items, mode)?;
            Some(Diamond::new(mode, COORDINATION, COMMA, vec![head, last]))
        }
    }
}

/// Given names nest: the last given name is the outermost node and the
/// first one the innermost. No given names yields `None`.
pub fn nested_given_names(given_names: &[String]) -> Option<Diamond> {
    let (last, preceding) = given_names.split_last()?;
    let inner = nested_given_names(preceding);
    Some(Diamond::new(
        modes::GIVEN_NAME,
        "vorname",
        last.as_str(),
        inner.into_iter().collect(),
    ))
}

/// Split a name at its final whitespace-delimited token.
///
/// "Christopher D. Manning" gives (["Christopher", "D."], "Manning").
/// Multi-word surnames ("von Neumann") are split wrongly; this is a known
/// limitation.
pub fn split_name(name: &str) -> Result<(Vec<String>, String), LexError> {
    let mut parts: Vec<String> = name.split_whitespace().map(str::to_string).collect();
    let last_name = parts.pop().ok_or(LexError::EmptyContent("author name"))?;
    Ok((parts, last_name))
}

/// `NP / nachname / <last name>` only.
pub fn last_name(name: &str) -> Result<Diamond, LexError> {
    let (_, last) = split_name(name)?;
    Ok(Diamond::leaf(modes::NOUN_PHRASE, "nachname", last))
}

/// Last name with the given names nested beneath it.
pub fn complete_name(name: &str) -> Result<Diamond, LexError> {
    let (given, last) = split_name(name)?;
    Ok(Diamond::new(
        modes::NOUN_PHRASE,
        "nachname",
        last,
        nested_given_names(&given).into_iter().collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> Diamond {
        Diamond::leaf("NP", "nachname", name)
    }

    fn items(names: &[&str]) -> Vec<Diamond> {
        names.iter().map(|n| item(n)).collect()
    }

    #[test]
    fn empty_enumeration_is_absent() {
        assert!(enumerate(Vec::new(), "NP").is_none());
    }

    #[test]
    fn single_item_passes_through() {
        let d = enumerate(items(&["Kay"]), "X").unwrap();
        assert_eq!(d, item("Kay"));
    }

    #[test]
    fn two_items_are_joined_by_und() {
        let d = enumerate(items(&["Kay", "Manning"]), "NP").unwrap();
        assert_eq!(d.mode, "NP");
        assert_eq!(d.nom, COORDINATION);
        assert_eq!(d.prop, CONJUNCTION);
        assert_eq!(d.children().len(), 2);
        assert_eq!(d.children()[0].prop, "Kay");
        assert_eq!(d.children()[1].prop, "Manning");
    }

    #[test]
    fn four_items_form_a_left_comma_chain() {
        let d = enumerate(items(&["A", "B", "C", "D"]), "NP").unwrap();
        assert_eq!(d.prop, "und");
        assert_eq!(d.children()[1].prop, "D");

        let comma = &d.children()[0];
        assert_eq!(comma.prop, "komma");
        assert_eq!(comma.nom, COORDINATION);
        assert_eq!(comma.mode, "NP");
        assert_eq!(comma.children()[1].prop, "C");

        let inner = &comma.children()[0];
        assert_eq!(inner.prop, "komma");
        assert_eq!(inner.children()[0].prop, "A");
        assert_eq!(inner.children()[1].prop, "B");
    }

    #[test]
    fn given_names_nest_in_reverse() {
        let names = vec!["Detlef".to_string(), "Peter".to_string()];
        let d = nested_given_names(&names).unwrap();
        assert_eq!(d.prop, "Peter");
        assert_eq!(d.mode, "N1");
        assert_eq!(d.nom, "vorname");
        assert_eq!(d.depth(), 2);
        assert_eq!(d.children()[0].prop, "Detlef");
        assert!(d.children()[0].is_leaf());
        assert!(nested_given_names(&[]).is_none());
    }

    #[test]
    fn names_split_at_last_token() {
        let (given, last) = split_name("Christopher D. Manning").unwrap();
        assert_eq!(given, vec!["Christopher", "D."]);
        assert_eq!(last, "Manning");

        let (given, last) = split_name("Chomsky").unwrap();
        assert!(given.is_empty());
        assert_eq!(last, "Chomsky");

        assert_eq!(split_name("   "), Err(LexError::EmptyContent("author name")));
    }

    #[test]
    fn multi_word_surnames_are_not_recognized() {
        let (given, last) = split_name("John von Neumann").unwrap();
        assert_eq!(given, vec!["John", "von"]);
        assert_eq!(last, "Neumann");
    }

    #[test]
    fn complete_name_without_given_names_is_a_leaf() {
        let d = complete_name("Chomsky").unwrap();
        assert!(d.is_leaf());
        let d = complete_name("Ada Lovelace").unwrap();
        assert_eq!(d.prop, "Lovelace");
        assert_eq!(d.children()[0].prop, "Ada");
        assert_eq!(last_name("Ada Lovelace").unwrap(), Diamond::leaf("NP", "nachname", "Lovelace"));
    }
}
