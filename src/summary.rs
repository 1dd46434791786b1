//! Markdown rendering of the parsed entry sequence.

use std::fmt::Write;

use crate::parse::Node;

/// Render one `- [name](local)` list line per node, two spaces of indent per
/// depth level, in the order the parser produced them. Negative depth from
/// unbalanced input clamps to no indent.
pub fn generate(nodes: &[Node]) -> String {
    let mut out = String::new();
    for node in nodes {
        let indent = usize::try_from(node.depth).unwrap_or(0);
        let _ = writeln!(out, "{}- [{}]({})", "  ".repeat(indent), node.name, node.local);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn node(name: &str, local: &str, depth: i32) -> Node {
        Node {
            name: name.into(),
            local: local.into(),
            depth,
        }
    }

    #[test]
    fn one_line_per_node() {
        let nodes = vec![node("a", "a.htm", 0), node("b", "b.htm", 1), node("c", "c.htm", 2)];
        assert_eq!(
            generate(&nodes),
            "- [a](a.htm)\n  - [b](b.htm)\n    - [c](c.htm)\n"
        );
    }

    #[test]
    fn negative_depth_clamps_to_zero() {
        assert_eq!(generate(&[node("x", "x.htm", -3)]), "- [x](x.htm)\n");
    }

    #[test]
    fn order_is_preserved_and_nothing_deduped() {
        let nodes = vec![node("dup", "dup.htm", 0), node("dup", "dup.htm", 0)];
        assert_eq!(generate(&nodes), "- [dup](dup.htm)\n- [dup](dup.htm)\n");
    }

    #[test]
    fn unicode_passes_through_unescaped() {
        assert_eq!(
            generate(&[node("日本語", "ja/index.htm", 1)]),
            "  - [日本語](ja/index.htm)\n"
        );
    }

    #[test]
    fn empty_sequence_renders_empty() {
        assert_eq!(generate(&[]), "");
    }
}
