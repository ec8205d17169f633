//! Conversion of decision trees and chain trees into printable `termtree`s.

use termtree::Tree;
use tracing::instrument;

use crate::domain::{Action, ChainTree, NodeId, StateSpace, SELL_MARKER};

pub trait ToTermTree {
    fn to_tree_string(&self) -> Tree<String>;
}

impl ToTermTree for StateSpace {
    /// Full decision tree from the initial state; shared states are
    /// repeated under every parent that reaches them.
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build(space: &StateSpace, idx: NodeId, label: &str) -> Tree<String> {
            let Some(node) = space.get_node(idx) else {
                return Tree::new(label.to_string());
            };
            let text = if label.is_empty() {
                node.to_string()
            } else {
                format!("{label}: {node}")
            };
            let mut tree = Tree::new(text);
            if let Some(keep) = node.keep_successor {
                tree.push(build(space, keep, "K"));
            }
            if let Some(replace) = node.replace_successor {
                tree.push(build(space, replace, "R"));
            }
            tree
        }

        match self.root() {
            Some(root) => build(self, root, ""),
            None => Tree::new("Empty decision tree".to_string()),
        }
    }
}

impl ToTermTree for ChainTree {
    #[instrument(level = "debug", skip(self))]
    fn to_tree_string(&self) -> Tree<String> {
        fn build(chain: &ChainTree, label: String) -> Tree<String> {
            match chain {
                ChainTree::Leaf(actions) => {
                    let mut parts: Vec<String> = actions.iter().map(Action::to_string).collect();
                    parts.push(SELL_MARKER.to_string());
                    Tree::new(join_label(label, &parts))
                }
                ChainTree::Fork {
                    prefix,
                    keep,
                    replace,
                } => {
                    let parts: Vec<String> = prefix.iter().map(Action::to_string).collect();
                    let mut tree = Tree::new(join_label(label, &parts));
                    tree.push(build(keep, Action::Keep.to_string()));
                    tree.push(build(replace, Action::Replace.to_string()));
                    tree
                }
            }
        }

        build(self, "START".to_string())
    }
}

fn join_label(label: String, parts: &[String]) -> String {
    if parts.is_empty() {
        label
    } else {
        format!("{label} {}", parts.join(" "))
    }
}
