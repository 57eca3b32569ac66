//! Abstract Syntax Tree for rule expressions

use serde::{Deserialize, Serialize};

/// AST node for a parsed rule
///
/// Interior nodes are `AND`/`OR` with an ordered list of owned children;
/// leaves are operands holding the raw `"attribute operator literal"`
/// fragment of the original rule text. Nodes are built bottom-up by the
/// parser and never mutated after being returned.
///
/// The serialized form matches what API consumers expect:
/// `{"type": "AND", "children": [...]}` / `{"type": "operand", "value": "age > 30"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum AstNode {
    #[serde(rename = "AND")]
    And { children: Vec<AstNode> },
    #[serde(rename = "OR")]
    Or { children: Vec<AstNode> },
    #[serde(rename = "operand")]
    Operand { value: String },
}

impl AstNode {
    /// Child nodes, empty for operands
    pub fn children(&self) -> &[AstNode] {
        match self {
            AstNode::And { children } | AstNode::Or { children } => children,
            AstNode::Operand { .. } => &[],
        }
    }

    /// Raw operand fragment, `None` for operator nodes
    pub fn raw_value(&self) -> Option<&str> {
        match self {
            AstNode::Operand { value } => Some(value),
            _ => None,
        }
    }

    /// Whether this node is a leaf operand
    pub fn is_operand(&self) -> bool {
        matches!(self, AstNode::Operand { .. })
    }
}
