/// A typed cell value before it is stringified into a column.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// Boolean values (true/false)
    Bool(bool),
    /// 64-bit signed integers
    Int(i64),
    /// Double-precision floating point numbers
    Float(f64),
    /// Text stored verbatim
    Text(String),
}

impl Value {
    /// Renders the value into the string a column stores for it.
    /// Floats use fixed-point notation with exactly `precision` fractional digits.
    pub(crate) fn render(&self, precision: usize) -> String {
        match self {
            Value::Bool(value) => value.to_string(),
            Value::Int(value) => value.to_string(),
            Value::Float(value) => format!("{value:.precision$}"),
            Value::Text(value) => value.to_owned(),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Int(value as i64)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Float(value as f64)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}
