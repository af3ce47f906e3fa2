use booklex::core::clauses::{lexicalize_plang, PlangRealization};
use booklex::core::combinators::{enumerate, nested_given_names, COORDINATION};
use booklex::schema::diamond::Diamond;
use booklex::schema::features::Numerus;
use booklex::schema::message::parse_packed_list;
use proptest::prelude::*;

fn items(names: &[String]) -> Vec<Diamond> {
    names.iter().map(|n| Diamond::leaf("N", "sorte", n.as_str())).collect()
}

fn item_props(tree: &Diamond) -> Vec<String> {
    let mut props = Vec::new();
    tree.walk(&mut |d| {
        if d.nom != COORDINATION {
            props.push(d.prop.clone());
        }
    });
    props
}

fn coordination_nodes(tree: &Diamond) -> Vec<&Diamond> {
    let mut nodes = Vec::new();
    tree.walk(&mut |d| {
        if d.nom == COORDINATION {
            nodes.push(d);
        }
    });
    nodes
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 100,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_enumeration_keeps_item_order(names in prop::collection::vec("[A-Za-z]{1,10}", 1..12)) {
        let tree = enumerate(items(&names), "N").unwrap();
        prop_assert_eq!(item_props(&tree), names);
    }

    #[test]
    fn prop_enumeration_shape(names in prop::collection::vec("[A-Za-z]{1,10}", 2..12)) {
        let tree = enumerate(items(&names), "N").unwrap();
        let coordinations = coordination_nodes(&tree);

        // n items need n - 1 binary joins, only the outermost one is "und"
        prop_assert_eq!(coordinations.len(), names.len() - 1);
        prop_assert_eq!(tree.prop.as_str(), "und");
        prop_assert_eq!(coordinations.iter().filter(|d| d.prop == "und").count(), 1);
        for node in coordinations {
            prop_assert_eq!(node.children().len(), 2);
        }
    }

    #[test]
    fn prop_single_item_passes_through(name in "[A-Za-z]{1,10}") {
        let item = Diamond::leaf("N", "sorte", name.as_str());
        prop_assert_eq!(enumerate(vec![item.clone()], "N"), Some(item));
    }

    #[test]
    fn prop_mode_suffix_numbers_each_join(names in prop::collection::vec("[A-Za-z]{1,10}", 2..12)) {
        let mut tree = enumerate(items(&names), "N").unwrap();
        tree.add_mode_suffix("N");

        prop_assert_eq!(tree.mode.as_str(), "N");
        for node in coordination_nodes(&tree) {
            let modes: Vec<&str> = node.children().iter().map(|c| c.mode.as_str()).collect();
            prop_assert_eq!(modes, vec!["N1", "N2"]);
        }
    }

    #[test]
    fn prop_given_names_nest_last_outermost(names in prop::collection::vec("[A-Z][a-z]{1,8}", 1..5)) {
        let nested = nested_given_names(&names).unwrap();
        prop_assert_eq!(nested.depth(), names.len());

        let mut seen = Vec::new();
        nested.walk(&mut |d| seen.push(d.prop.clone()));
        seen.reverse();
        prop_assert_eq!(seen, names);
    }

    #[test]
    fn prop_packed_lists_decode_in_order(names in prop::collection::vec("[A-Za-z+#]{1,8}", 0..8)) {
        let packed: String = names.iter().map(|n| format!("[{}]", n)).collect();
        prop_assert_eq!(parse_packed_list(&packed).unwrap(), names);
    }

    #[test]
    fn prop_plang_number_follows_count(names in prop::collection::vec("[A-Za-z]{1,8}", 1..8)) {
        let packed: String = names.iter().map(|n| format!("[{}]", n)).collect();
        let phrase = lexicalize_plang(&packed, None, None, PlangRealization::Embedded).unwrap();
        let expected = Numerus::from_count(names.len()).tag();
        prop_assert_eq!(phrase.child("NUM").unwrap().prop.as_str(), expected);
    }
}

#[test]
fn empty_enumeration_is_none() {
    assert_eq!(enumerate(Vec::new(), "N"), None);
    assert_eq!(nested_given_names(&[]), None);
}
