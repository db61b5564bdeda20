use std::fmt;

/// Result of a successful command.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric result. Only these are recorded in history.
    Number(f64),
    /// Free-form output such as a listing or a confirmation message.
    Text(String),
    /// The command produced nothing to print.
    Unit,
}

impl Value {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_unit(&self) -> bool {
        matches!(self, Value::Unit)
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Debug formatting keeps the trailing `.0` on integral floats.
            Value::Number(n) => write!(f, "{:?}", n),
            Value::Text(s) => write!(f, "{}", s),
            Value::Unit => Ok(()),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
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
