use std::collections::HashMap;
use std::fmt::{Display, Formatter, Result as FmtResult};

use super::StaticNode;

/// Variable bindings for one phrase invocation.
pub type Variables = HashMap<String, Value>;

/// A value bound to a phrase variable.
///
/// Primitive values are interpolated into text. A [`Value::Fragment`] is a
/// pre-built sub-tree supplied by the caller for a named slot (an inline
/// image caption, a nested link) and is spliced into the tree as nodes.
///
/// # Example
///
/// ```
/// use glossa::{StaticNode, Value};
///
/// let count: Value = 3.into();
/// let name: Value = "Ada".into();
/// let slot: Value = vec![StaticNode::link("/docs", "docs")].into();
///
/// assert_eq!(count.to_string(), "3");
/// assert_eq!(name.as_text(), Some("Ada"));
/// assert!(slot.as_fragment().is_some());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A string value.
    Text(String),

    /// An integer.
    Number(i64),

    /// A floating-point number.
    Float(f64),

    /// Caller-built nodes for a slot.
    Fragment(Vec<StaticNode>),
}

impl Value {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_fragment(&self) -> Option<&[StaticNode]> {
        match self {
            Value::Fragment(nodes) => Some(nodes),
            _ => None,
        }
    }

    /// Whether this value must be spliced as nodes rather than interpolated.
    pub fn is_fragment(&self) -> bool {
        matches!(self, Value::Fragment(_))
    }
}

/// Fragments display as nothing; callers interpolate them structurally.
impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Value::Text(s) => write!(f, "{s}"),
            Value::Number(n) => write!(f, "{n}"),
            Value::Float(n) => write!(f, "{n}"),
            Value::Fragment(_) => Ok(()),
        }
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(i64::from(n))
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n)
    }
}

impl From<u32> for Value {
    fn from(n: u32) -> Self {
        Value::Number(i64::from(n))
    }
}

/// Counts above `i64::MAX` saturate.
impl From<usize> for Value {
    fn from(n: usize) -> Self {
        Value::Number(i64::try_from(n).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<Vec<StaticNode>> for Value {
    fn from(nodes: Vec<StaticNode>) -> Self {
        Value::Fragment(nodes)
    }
}

impl From<StaticNode> for Value {
    fn from(node: StaticNode) -> Self {
        Value::Fragment(vec![node])
    }
}
