//! A single dataset value and the ordering used to group values.

use serde_json::Value;
use std::cmp::Ordering;

/// One value of the dataset.
///
/// Cells come either from a typed PostgreSQL column or from a CSV field
/// whose type is inferred with [`Cell::infer`].
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Cell {
    /// Infer a cell from a raw text field.
    ///
    /// # Rules (first match wins)
    ///
    /// - empty or whitespace-only → `Null`
    /// - `true` / `false` → `Bool`
    /// - parses as `i64` → `Integer`
    /// - parses as a finite `f64` → `Float`
    /// - anything else → `Text` (trimmed)
    pub fn infer(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Cell::Null;
        }

        match trimmed {
            "true" => return Cell::Bool(true),
            "false" => return Cell::Bool(false),
            _ => {}
        }

        if let Ok(value) = trimmed.parse::<i64>() {
            return Cell::Integer(value);
        }

        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Cell::Float(value),
            _ => Cell::Text(trimmed.to_string()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Cell::Null)
    }

    /// JSON representation. Non-finite floats have no JSON form and become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Cell::Null => Value::Null,
            Cell::Bool(b) => Value::Bool(*b),
            Cell::Integer(i) => Value::from(*i),
            Cell::Float(f) => serde_json::Number::from_f64(*f)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            Cell::Text(s) => Value::String(s.clone()),
        }
    }

    /// Text used when the cell becomes a JSON object key.
    ///
    /// Floats always keep a fractional part (`2016.0`), so integer and
    /// float columns stay distinguishable in chart labels.
    pub fn key_string(&self) -> String {
        match self {
            Cell::Null => "null".to_string(),
            Cell::Bool(b) => b.to_string(),
            Cell::Integer(i) => i.to_string(),
            // Display never switches to exponent notation
            Cell::Float(f) if f.fract() == 0.0 => format!("{f:.1}"),
            Cell::Float(f) => f.to_string(),
            Cell::Text(s) => s.clone(),
        }
    }

    /// Grouping key, or `None` for nulls (which never form a group).
    pub fn key(&self) -> Option<CellKey<'_>> {
        if self.is_null() {
            None
        } else {
            Some(CellKey(self))
        }
    }

    /// Whether this cell equals a scalar taken from a request body.
    ///
    /// Numbers compare numerically across integer and float cells. A null
    /// cell matches nothing; requests cannot carry a null constraint.
    pub fn matches(&self, value: &Value) -> bool {
        match (self, value) {
            (Cell::Bool(a), Value::Bool(b)) => a == b,
            (Cell::Text(a), Value::String(b)) => a == b,
            (Cell::Integer(a), Value::Number(n)) => match n.as_i64() {
                Some(b) => *a == b,
                None => n
                    .as_f64()
                    .is_some_and(|b| cmp_integer_float(*a, b) == Ordering::Equal),
            },
            (Cell::Float(a), Value::Number(n)) => match n.as_i64() {
                Some(b) => cmp_integer_float(b, *a) == Ordering::Equal,
                None => n.as_f64().is_some_and(|b| *a == b),
            },
            _ => false,
        }
    }
}

/// Ordered view of a non-null cell.
///
/// Order: booleans, then numbers (integers and floats compared
/// numerically), then text.
#[derive(Debug, Clone, Copy)]
pub struct CellKey<'a>(&'a Cell);

impl<'a> CellKey<'a> {
    pub fn cell(&self) -> &'a Cell {
        self.0
    }

    fn rank(&self) -> u8 {
        match self.0 {
            Cell::Null => 0,
            Cell::Bool(_) => 1,
            Cell::Integer(_) | Cell::Float(_) => 2,
            Cell::Text(_) => 3,
        }
    }
}

impl Ord for CellKey<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.0, other.0) {
            (Cell::Bool(a), Cell::Bool(b)) => a.cmp(b),
            (Cell::Integer(a), Cell::Integer(b)) => a.cmp(b),
            (Cell::Integer(a), Cell::Float(b)) => cmp_integer_float(*a, *b),
            (Cell::Float(a), Cell::Integer(b)) => cmp_integer_float(*b, *a).reverse(),
            (Cell::Float(a), Cell::Float(b)) => a.total_cmp(b),
            (Cell::Text(a), Cell::Text(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Exact comparison of an integer with a float, consistent with
/// `f64::total_cmp` for NaN and infinities.
///
/// Casting the integer to `f64` would round above 2^53 and break
/// transitivity between integer and float keys.
fn cmp_integer_float(i: i64, f: f64) -> Ordering {
    // i64 range is [-2^63, 2^63)
    const BOUND: f64 = 9_223_372_036_854_775_808.0;

    if f.is_nan() {
        return if f.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    if f >= BOUND {
        return Ordering::Less;
    }
    if f < -BOUND {
        return Ordering::Greater;
    }

    // in range, so the truncated value is an exact i64
    let whole = f.trunc() as i64;
    i.cmp(&whole).then_with(|| {
        let frac = f.fract();
        if frac > 0.0 {
            Ordering::Less
        } else if frac < 0.0 {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    })
}

impl PartialOrd for CellKey<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CellKey<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CellKey<'_> {}
