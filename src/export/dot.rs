//! Graphviz export of a suffix tree
//!
//! Nodes are anonymous dots numbered in level order. Edges carry their
//! label; suffix links and incoming-edge-to-parent links are optional,
//! distinctly styled edge sets emitted after every node is known.

use crate::tree::{EdgeRef, NodeId, NodeRef, NodeVisitor, SuffixTree};
use rustc_hash::FxHashMap;
use std::fmt::{self, Display, Write};

const HEADER: &str = "digraph suffixTree{\n node [shape=circle, label=\"\", fixedsize=true, width=0.1, height=0.1]\n";

/// Which optional edge sets to emit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DotOptions {
    /// Emit suffix links as red edges
    pub suffix_links: bool,
    /// Emit dashed edges from every node back to its parent
    pub incoming_edge_links: bool,
    /// Placed between the items of an edge label
    pub separator: String,
}

impl Default for DotOptions {
    fn default() -> Self {
        Self {
            suffix_links: true,
            incoming_edge_links: true,
            separator: String::new(),
        }
    }
}

/// Collects nodes in level order and numbers them
struct NodeNumbering {
    order: Vec<NodeId>,
    ids: FxHashMap<NodeId, usize>,
}

impl<T> NodeVisitor<T> for NodeNumbering {
    fn visit(&mut self, node: NodeRef<'_, T>) {
        self.ids.insert(node.id(), self.order.len());
        self.order.push(node.id());
    }

    fn visit_terminating_edge(&mut self, _edge: EdgeRef<'_, T>) {}
}

/// Render `tree` in the dot language
pub fn to_dot<T: Display>(tree: &SuffixTree<T>, options: &DotOptions) -> String {
    let mut out = String::new();
    // writing into a String cannot fail
    let _ = write_dot(&mut out, tree, options);
    out
}

/// Write `tree` in the dot language to any formatter sink
pub fn write_dot<T, W>(out: &mut W, tree: &SuffixTree<T>, options: &DotOptions) -> fmt::Result
where
    T: Display,
    W: Write + ?Sized,
{
    let mut numbering = NodeNumbering {
        order: Vec::with_capacity(tree.node_count()),
        ids: FxHashMap::default(),
    };
    tree.traverse_all(&mut numbering);
    let id_of = |node: NodeRef<'_, T>| numbering.ids[&node.id()];

    out.write_str(HEADER)?;

    for &id in &numbering.order {
        let node = tree.node_ref(id);
        for edge in node.edges() {
            write!(out, "{} -> {} [label=\"", id_of(node), id_of(edge.child()))?;
            write_label(out, edge, &options.separator)?;
            out.write_str("\"];\n")?;
        }
    }

    if options.suffix_links {
        out.write_str("edge [color=red]\n")?;
        for &id in &numbering.order {
            let node = tree.node_ref(id);
            if let Some(target) = node.suffix_link() {
                writeln!(out, "{} -> {} ;", id_of(node), id_of(target))?;
            }
        }
    }

    if options.incoming_edge_links {
        for &id in &numbering.order {
            let node = tree.node_ref(id);
            if let Some(edge) = node.incoming_edge() {
                writeln!(out, "{}->{}[style=dashed];", id_of(node), id_of(edge.parent()))?;
            }
        }
    }

    out.write_str("}")
}

fn write_label<T, W>(out: &mut W, edge: EdgeRef<'_, T>, separator: &str) -> fmt::Result
where
    T: Display,
    W: Write + ?Sized,
{
    for (i, item) in edge.items().iter().enumerate() {
        if i > 0 {
            out.write_str(separator)?;
        }
        for ch in item.to_string().chars() {
            match ch {
                '"' => out.write_str("\\\"")?,
                '\\' => out.write_str("\\\\")?,
                '\n' => out.write_str("\\n")?,
                _ => out.write_char(ch)?,
            }
        }
    }
    Ok(())
}

impl<T: Display> Display for SuffixTree<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dot(f, self, &DotOptions::default())
    }
}
