//! Atomic generators: small fragments for closed grammatical categories.
//!
//! Each call returns a fresh node; these fragments are never shared.

use crate::schema::diamond::{modes, Diamond};
use crate::schema::features::{
    ArticleType, Genus, Komparation, Numerus, Person, PronounType, Tempus,
};

pub fn article(kind: ArticleType) -> Diamond {
    Diamond::leaf(modes::ARTICLE, "sem-obj", kind.tag())
}

/// "kein": how zero counts are expressed.
pub fn negative_quantifier() -> Diamond {
    article(ArticleType::NegativeQuantifier)
}

pub fn gender(genus: Genus) -> Diamond {
    Diamond::leaf(modes::GENDER, "", genus.tag())
}

pub fn number(numerus: Numerus) -> Diamond {
    Diamond::leaf(modes::NUMBER, "", numerus.tag())
}

pub fn number_for_count(count: usize) -> Diamond {
    number(Numerus::from_count(count))
}

/// A modifier such as a cardinal ("600") or a property ("lang").
pub fn modifier(value: &str, kind: &str) -> Diamond {
    Diamond::leaf(modes::MODIFIER, kind, value)
}

pub fn person(person: Person) -> Diamond {
    Diamond::leaf(modes::PERSON, "", person.tag())
}

pub fn preposition(preposition: &str, kind: &str) -> Diamond {
    Diamond::leaf(modes::PREPOSITION, kind, preposition)
}

pub fn tense(tempus: Tempus) -> Diamond {
    Diamond::leaf(modes::TENSE, "", tempus.tag())
}

pub fn degree(komparation: Komparation) -> Diamond {
    Diamond::leaf(modes::DEGREE, "", komparation.tag())
}

pub fn pronoun(
    pers: Person,
    kind: PronounType,
    genus: Genus,
    numerus: Numerus,
    mode: &str,
) -> Diamond {
    Diamond::new(
        mode,
        "sem-obj",
        "",
        vec![
            person(pers),
            Diamond::leaf(modes::PRONOUN, "", kind.tag()),
            gender(genus),
            number(numerus),
        ],
    )
}

/// Personal pronoun for `count` referents. Plural pronouns carry a feminine
/// marker: the grammar has no genderless plural form.
pub fn personal_pronoun(count: usize, genus: Genus, pers: Person) -> Diamond {
    let numerus = Numerus::from_count(count);
    let genus = match numerus {
        Numerus::Plural => Genus::Feminine,
        Numerus::Singular => genus,
    };
    pronoun(pers, PronounType::Personal, genus, numerus, "")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaves_follow_grammar_conventions() {
        let n = number_for_count(3);
        assert_eq!((n.mode.as_str(), n.nom.as_str(), n.prop.as_str()), ("NUM", "", "plur"));
        assert!(n.is_leaf());

        let t = tense(Tempus::Preterite);
        assert_eq!((t.mode.as_str(), t.prop.as_str()), ("TEMP:tempus", "imperf"));

        let p = preposition("von", "zugehörigkeit");
        assert_eq!((p.mode.as_str(), p.nom.as_str(), p.prop.as_str()), ("PRÄP", "zugehörigkeit", "von"));

        let k = negative_quantifier();
        assert_eq!((k.mode.as_str(), k.nom.as_str(), k.prop.as_str()), ("ART", "sem-obj", "quantkein"));
    }

    #[test]
    fn zero_and_one_are_singular() {
        assert_eq!(number_for_count(0).prop, "sing");
        assert_eq!(number_for_count(1).prop, "sing");
    }

    #[test]
    fn pronoun_carries_four_features() {
        let p = pronoun(Person::Third, PronounType::Reflexive, Genus::Neuter, Numerus::Singular, "PRO");
        assert_eq!(p.mode, "PRO");
        let props: Vec<&str> = p.children().iter().map(|c| c.prop.as_str()).collect();
        assert_eq!(props, vec!["3te", "reflpro", "neut", "sing"]);
    }

    #[test]
    fn plural_personal_pronoun_is_feminine() {
        let p = personal_pronoun(2, Genus::Neuter, Person::Third);
        assert_eq!(p.child("GEN").unwrap().prop, "fem");
        assert_eq!(p.child("NUM").unwrap().prop, "plur");

        let s = personal_pronoun(1, Genus::Neuter, Person::Third);
        assert_eq!(s.child("GEN").unwrap().prop, "neut");
    }
}
