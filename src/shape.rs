//! Shape classification and the structural comparator used to decide whether
//! an array is a homogeneous list or a tuple.
use crate::value::Value;

/// Structural category of a value, independent of its content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    String,
    Number,
    Boolean,
    /// Shape of a value that is not there at all (e.g. element 0 of `[]`).
    Undefined,
    Null,
    Array,
    Object,
}

impl Shape {
    pub fn is_object(self) -> bool {
        matches!(self, Shape::Object)
    }
}

impl Value {
    pub fn shape(&self) -> Shape {
        classify(self)
    }
}

pub fn classify(value: &Value) -> Shape {
    match value {
        Value::Null      => Shape::Null,
        Value::Bool(_)   => Shape::Boolean,
        Value::Number(_) => Shape::Number,
        Value::String(_) => Shape::String,
        Value::Array(_)  => Shape::Array,
        Value::Object(_) => Shape::Object,
    }
}

/// Shape of an optional slot; a missing value is `Undefined`.
pub fn classify_slot(value: Option<&Value>) -> Shape {
    value.map_or(Shape::Undefined, classify)
}

/// Whether `a` and `b` have the same shape.
///
/// Leaves only compare their tags, so `1` and `2` match. Objects need the
/// same key set (order-insensitive) with pairwise matching values; arrays
/// need the same length with elementwise matching values.
pub fn same_shape(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Object(xs), Value::Object(ys)) => {
            if xs.len() != ys.len() {
                return false;
            }
            xs.iter().all(|(key, x)| match ys.get(key) {
                Some(y) => same_shape(x, y),
                None => false,
            })
        }
        (Value::Array(xs), Value::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_shape(x, y))
        }
        _ => classify(a) == classify(b),
    }
}

/// An array is homogeneous when every consecutive pair of elements shares a
/// shape. Empty and single-element arrays are trivially homogeneous.
pub fn is_homogeneous(xs: &[Value]) -> bool {
    xs.windows(2).all(|pair| same_shape(&pair[0], &pair[1]))
}
