//! Error types for the rule engine core

use thiserror::Error;

/// Main error type for the rule engine core
#[derive(Error, Debug)]
pub enum RuleEngineError {
    #[error("Rule cannot be empty")]
    EmptyRule,

    #[error("Missing comparison operator")]
    MissingOperator,

    #[error("Invalid rule format: {0}")]
    InvalidRuleFormat(String),

    #[error("Rule list cannot be empty")]
    EmptyRuleList,

    #[error("Invalid operand format: {0}")]
    MalformedOperand(String),

    #[error("Required field missing: {0}")]
    MissingAttribute(String),

    #[error("Attribute '{0}' is not part of the catalog")]
    UnknownAttribute(String),

    #[error("Unknown operator: {0}")]
    UnknownOperator(String),

    #[error("Unknown node kind: {0}")]
    UnknownNodeKind(String),

    #[error("Invalid numeric format for comparison: {0}")]
    InvalidDataFormat(String),

    #[error("Rule not found: {0}")]
    RuleNotFound(u64),
}

/// Result type alias for the rule engine core
pub type Result<T> = std::result::Result<T, RuleEngineError>;
