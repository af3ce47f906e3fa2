//! HLDS XML output for the OpenCCG realizer.
//!
//! A tree becomes a logical form: the root is the `satop`, every child a
//! nested `<diamond mode="...">`. Nodes with a category get a nominal
//! (`b1:artefaktum`); feature nodes such as `NUM` only carry a `prop`.

use std::fs::File;
use std::io::{self, BufWriter, Write};

use crate::schema::diamond::Diamond;

const INDENT: &str = "  ";

/// Returns the logical form of one tree wrapped in `<xml>`.
///
/// # Example
/// ```
/// use booklex::core::hlds::to_hlds_xml;
/// use booklex::schema::diamond::Diamond;
///
/// let tree = Diamond::new("", "artefaktum", "Buch", vec![Diamond::leaf("NUM", "", "sing")]);
/// let xml = to_hlds_xml(&tree);
/// assert!(xml.contains(r#"<satop nom="a1:artefaktum">"#));
/// assert!(xml.contains(r#"<diamond mode="NUM">"#));
/// ```
pub fn to_hlds_xml(tree: &Diamond) -> String {
    let mut out = String::with_capacity(estimate_len(tree));
    let mut counter = 0;
    write_item(&mut out, tree, &mut counter, 0);
    out
}

/// Returns a regression file (`<regression>` with one `<item>` per tree), the
/// format `ccg-realize` reads for batch realization.
pub fn to_testbed(trees: &[Diamond]) -> String {
    let mut out = String::from("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<regression>\n");
    for tree in trees {
        out.push_str(INDENT);
        out.push_str("<item numOfParses=\"0\" string=\"\">\n");
        let mut counter = 0;
        write_item(&mut out, tree, &mut counter, 2);
        out.push_str(INDENT);
        out.push_str("</item>\n");
    }
    out.push_str("</regression>\n");
    out
}

/// Writes the given trees as a regression file.
///
/// # Errors
/// Returns an I/O error if writing fails.
pub fn write_testbed_file(file: File, trees: &[Diamond]) -> io::Result<()> {
    let mut writer = BufWriter::new(file);
    writer.write_all(to_testbed(trees).as_bytes())?;
    writer.flush()
}

fn write_item(out: &mut String, tree: &Diamond, counter: &mut usize, level: usize) {
    line(out, level, "<xml>");
    line(out, level + 1, "<lf>");
    let open = format!("<satop nom=\"{}\">", nominal(tree, counter));
    line(out, level + 2, &open);
    write_content(out, tree, counter, level + 3);
    line(out, level + 2, "</satop>");
    line(out, level + 1, "</lf>");
    line(out, level + 1, "<target>xxx</target>");
    line(out, level, "</xml>");
}

fn write_content(out: &mut String, node: &Diamond, counter: &mut usize, level: usize) {
    if !node.prop.is_empty() {
        line(out, level, &format!("<prop name=\"{}\"/>", escape(&node.prop)));
    }
    if let Some(article) = node.article() {
        write_diamond(out, article, counter, level);
    }
    for child in node.children() {
        write_diamond(out, child, counter, level);
    }
}

fn write_diamond(out: &mut String, node: &Diamond, counter: &mut usize, level: usize) {
    line(out, level, &format!("<diamond mode=\"{}\">", escape(&node.mode)));
    if !node.nom.is_empty() {
        line(out, level + 1, &format!("<nom name=\"{}\"/>", nominal(node, counter)));
    }
    write_content(out, node, counter, level + 1);
    line(out, level, "</diamond>");
}

/// `<letter><n>:<category>`, numbered in document order. The letter is the
/// first ASCII letter of the category.
fn nominal(node: &Diamond, counter: &mut usize) -> String {
    *counter += 1;
    let initial = node
        .nom
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .map(|c| c.to_ascii_lowercase())
        .unwrap_or('x');
    if node.nom.is_empty() {
        format!("{}{}", initial, counter)
    } else {
        format!("{}{}:{}", initial, counter, escape(&node.nom))
    }
}

fn line(out: &mut String, level: usize, text: &str) {
    for _ in 0..level {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Rough size of the XML for a tree, to avoid reallocations.
fn estimate_len(tree: &Diamond) -> usize {
    let mut nodes = 0;
    tree.walk(&mut |_| nodes += 1);
    128 + nodes * 96
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entities::abstract_title;

    #[test]
    fn abstract_title_logical_form() {
        let xml = to_hlds_xml(&abstract_title(1));
        let expected = "\
<xml>
  <lf>
    <satop nom=\"a1:artefaktum\">
      <prop name=\"Buch\"/>
      <diamond mode=\"ART\">
        <nom name=\"s2:sem-obj\"/>
        <prop name=\"def\"/>
      </diamond>
      <diamond mode=\"NUM\">
        <prop name=\"sing\"/>
      </diamond>
    </satop>
  </lf>
  <target>xxx</target>
</xml>
";
        assert_eq!(xml, expected);
    }

    #[test]
    fn special_characters_are_escaped() {
        let tree = Diamond::leaf("", "sorte", "C++ & \"Lisp\"");
        let xml = to_hlds_xml(&tree);
        assert!(xml.contains("<prop name=\"C++ &amp; &quot;Lisp&quot;\"/>"));
    }

    #[test]
    fn umlaut_categories_keep_their_text() {
        let tree = Diamond::leaf("", "prädikation", "sein-kop");
        assert!(to_hlds_xml(&tree).contains("<satop nom=\"p1:prädikation\">"));
    }

    #[test]
    fn testbed_wraps_every_tree() {
        let trees = vec![abstract_title(1), abstract_title(2)];
        let xml = to_testbed(&trees);
        assert!(xml.starts_with("<?xml"));
        assert_eq!(xml.matches("<item ").count(), 2);
        assert_eq!(xml.matches("<satop nom=\"a1:artefaktum\">").count(), 2);
        assert!(xml.contains("<prop name=\"plur\"/>"));
    }
}
