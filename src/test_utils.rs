use std::fmt::{Display, Write};

use crate::node::Node;

/// Render the shape of the subtree rooted at `n` as a compact s-expression.
///
/// A leaf renders as `(value)`, an interior node as `(value left right)`
/// with `_` marking an absent child. The seven-value balanced tree renders
/// as `(4 (2 (1) (3)) (6 (5) (7)))`.
pub(crate) fn render<T>(n: Option<&Node<T>>) -> String
where
    T: Display,
{
    match n {
        None => "_".to_string(),
        Some(n) if n.left().is_none() && n.right().is_none() => format!("({})", n.value()),
        Some(n) => format!(
            "({} {} {})",
            n.value(),
            render(n.left()),
            render(n.right())
        ),
    }
}

/// Collect an in-order traversal of the subtree rooted at `n` into `out`.
pub(crate) fn in_order<T>(n: Option<&Node<T>>, out: &mut Vec<T>)
where
    T: Clone,
{
    if let Some(n) = n {
        in_order(n.left(), out);
        out.push(n.value().clone());
        in_order(n.right(), out);
    }
}

/// Render the subtree rooted at `n` as a Graphviz digraph, labelling each
/// node with its value and cached metadata.
///
/// Nodes are keyed by their root path rather than their value, so trees
/// containing duplicate values render correctly.
pub(crate) fn print_dot<T>(n: &Node<T>) -> String
where
    T: Display,
{
    let mut buf = String::new();

    writeln!(buf, "digraph {{").unwrap();
    writeln!(buf, r#"node [shape = record; style = filled;];"#).unwrap();
    recurse(n, "R", &mut buf);
    writeln!(buf, "}}").unwrap();

    buf
}

fn recurse<T, W>(n: &Node<T>, id: &str, buf: &mut W)
where
    W: Write,
    T: Display,
{
    writeln!(
        buf,
        r#""{id}" [label="{} | {{ h={} | b={} }}"];"#,
        n.value(),
        n.height(),
        n.balance(),
    )
    .unwrap();

    for (child, tag) in [(n.left(), "l"), (n.right(), "r")] {
        let child_id = format!("{id}{tag}");
        match child {
            Some(v) => {
                writeln!(buf, "\"{id}\" -> \"{child_id}\";").unwrap();
                recurse(v, &child_id, buf);
            }
            None => {
                writeln!(buf, "\"{child_id}\" [shape=point,style=invis];").unwrap();
                writeln!(buf, "\"{id}\" -> \"{child_id}\" [style=invis];").unwrap();
            }
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cmp::natural_order, tree::AvlTree};

    #[test]
    fn test_render() {
        let mut t = AvlTree::new(natural_order);
        assert_eq!(render(t.root()), "_");

        t.insert(2);
        assert_eq!(render(t.root()), "(2)");

        t.insert(1);
        assert_eq!(render(t.root()), "(2 (1) _)");

        t.insert(3);
        assert_eq!(render(t.root()), "(2 (1) (3))");
    }

    #[test]
    fn test_print_dot_duplicate_values() {
        let mut t = AvlTree::new(natural_order);
        t.insert(5);
        t.insert(5);

        let dot = print_dot(t.root().unwrap());

        // Path-keyed node ids keep the two equal values distinct.
        assert!(dot.contains(r#""R" [label="5"#));
        assert!(dot.contains(r#""Rl" [label="5"#));
        assert!(dot.contains(r#""R" -> "Rl";"#));
    }
}
