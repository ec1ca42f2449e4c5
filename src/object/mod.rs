//! Runtime value representation
//!
//! [`Object`] is the value model an evaluator hands back for evaluated
//! nodes. Only integers exist so far; each variant reports an [`ObjectType`]
//! tag and an `inspect` rendering for display.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Integer,
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectType::Integer => write!(f, "INTEGER"),
        }
    }
}

/// Runtime values
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Object {
    Integer(i64),
}

impl Object {
    pub fn object_type(&self) -> ObjectType {
        match self {
            Object::Integer(_) => ObjectType::Integer,
        }
    }

    /// Human-readable rendering of the value
    pub fn inspect(&self) -> String {
        match self {
            Object::Integer(n) => n.to_string(),
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Object::Integer(n) => Some(*n),
        }
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.inspect())
    }
}
