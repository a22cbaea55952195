//! Human-readable node symbols.

use std::borrow::Cow;

use aco_core::NodeId;
use rustc_hash::FxHashMap;

/// Two-way mapping between node ids and display symbols.
///
/// Nodes without a symbol render as their numeric id.
#[derive(Debug, Clone, Default)]
pub struct NodeLabels {
    by_node:  FxHashMap<NodeId, String>,
    by_label: FxHashMap<String, NodeId>,
}

impl NodeLabels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(symbol, node)` pairs, e.g. `[("A", NodeId(1)), …]`.
    pub fn from_symbols<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, NodeId)>,
        S: Into<String>,
    {
        let mut labels = Self::new();
        for (symbol, node) in pairs {
            labels.insert(node, symbol);
        }
        labels
    }

    /// Assign `symbol` to `node`, replacing any earlier symbol for either.
    pub fn insert(&mut self, node: NodeId, symbol: impl Into<String>) {
        let symbol = symbol.into();
        if let Some(old) = self.by_node.insert(node, symbol.clone()) {
            self.by_label.remove(&old);
        }
        if let Some(prev) = self.by_label.insert(symbol, node) {
            if prev != node {
                self.by_node.remove(&prev);
            }
        }
    }

    /// Symbol for `node`, or its numeric id.
    pub fn label(&self, node: NodeId) -> Cow<'_, str> {
        match self.by_node.get(&node) {
            Some(s) => Cow::Borrowed(s.as_str()),
            None    => Cow::Owned(node.0.to_string()),
        }
    }

    /// Node carrying `symbol`, if any.
    pub fn node(&self, symbol: &str) -> Option<NodeId> {
        self.by_label.get(symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.by_node.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_node.is_empty()
    }
}
