//! Shared types used across all trigraph crates.

use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a node (or an edge label) in a triple graph.
///
/// Opaque and compared byte-for-byte: no case folding, no trimming.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for NodeId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Insertion-ordered set of nodes. Iteration follows first encounter.
pub type NodeSet = IndexSet<NodeId>;

/// The object position of a triple.
///
/// A `Many` object stands for several parallel edges sharing the
/// same subject and predicate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Object {
    Single(NodeId),
    Many(Vec<NodeId>),
}

impl Object {
    /// Flattened object nodes, in order.
    pub fn nodes(&self) -> std::slice::Iter<'_, NodeId> {
        match self {
            Object::Single(node) => std::slice::from_ref(node).iter(),
            Object::Many(nodes) => nodes.iter(),
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Object::Many(_))
    }
}

impl From<NodeId> for Object {
    fn from(node: NodeId) -> Self {
        Object::Single(node)
    }
}

impl From<&str> for Object {
    fn from(node: &str) -> Self {
        Object::Single(node.into())
    }
}

impl From<Vec<NodeId>> for Object {
    fn from(nodes: Vec<NodeId>) -> Self {
        Object::Many(nodes)
    }
}

/// A (subject, predicate, object) edge record.
///
/// Serializes as the canonical three-element array
/// `[subject, predicate, object]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "(NodeId, NodeId, Object)", into = "(NodeId, NodeId, Object)")]
pub struct Triple {
    pub subject: NodeId,
    pub predicate: NodeId,
    pub object: Object,
}

impl Triple {
    pub fn new(
        subject: impl Into<NodeId>,
        predicate: impl Into<NodeId>,
        object: impl Into<NodeId>,
    ) -> Self {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Object::Single(object.into()),
        }
    }

    /// A triple whose object is a collection of parallel targets.
    pub fn many<I, N>(subject: impl Into<NodeId>, predicate: impl Into<NodeId>, objects: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<NodeId>,
    {
        Self {
            subject: subject.into(),
            predicate: predicate.into(),
            object: Object::Many(objects.into_iter().map(Into::into).collect()),
        }
    }

    /// Flattened object nodes of this triple.
    pub fn objects(&self) -> std::slice::Iter<'_, NodeId> {
        self.object.nodes()
    }

    /// The reversed edges: one `(object, predicate, subject)` triple per
    /// flattened object node.
    pub fn reversed(&self) -> impl Iterator<Item = Triple> + '_ {
        self.objects().map(move |obj| Triple {
            subject: obj.clone(),
            predicate: self.predicate.clone(),
            object: Object::Single(self.subject.clone()),
        })
    }

    /// `(subject, object)` pairs with the predicate discarded.
    pub fn pairs(&self) -> impl Iterator<Item = (&NodeId, &NodeId)> + '_ {
        self.objects().map(move |obj| (&self.subject, obj))
    }
}

impl From<(NodeId, NodeId, Object)> for Triple {
    fn from((subject, predicate, object): (NodeId, NodeId, Object)) -> Self {
        Self {
            subject,
            predicate,
            object,
        }
    }
}

impl From<Triple> for (NodeId, NodeId, Object) {
    fn from(t: Triple) -> Self {
        (t.subject, t.predicate, t.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, ", self.subject, self.predicate)?;
        match &self.object {
            Object::Single(node) => write!(f, "{})", node),
            Object::Many(nodes) => {
                let joined: Vec<&str> = nodes.iter().map(NodeId::as_str).collect();
                write!(f, "[{}])", joined.join(", "))
            }
        }
    }
}
