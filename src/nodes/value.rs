//! Dynamic values flowing along graph edges
//!
//! Every node carries a `result: Value`. Values are dynamically typed and
//! coerce during arithmetic: Boolean promotes to Integer, Integer to Float,
//! Float to Complex. Failures are swallowed into `Value::None`; only division
//! by zero gets a distinguishable sentinel.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Complex number with double-precision components.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Complex {
    pub re: f64,
    pub im: f64,
}

impl Complex {
    pub fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    pub fn is_zero(&self) -> bool {
        self.re == 0.0 && self.im == 0.0
    }

    fn add(self, rhs: Complex) -> Complex {
        Complex::new(self.re + rhs.re, self.im + rhs.im)
    }

    fn sub(self, rhs: Complex) -> Complex {
        Complex::new(self.re - rhs.re, self.im - rhs.im)
    }

    fn mul(self, rhs: Complex) -> Complex {
        Complex::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }

    fn div(self, rhs: Complex) -> Complex {
        let denom = rhs.re * rhs.re + rhs.im * rhs.im;
        Complex::new(
            (self.re * rhs.re + self.im * rhs.im) / denom,
            (self.im * rhs.re - self.re * rhs.im) / denom,
        )
    }

    /// Parses the `a+bj` family of forms: `1+2j`, `-3.5j`, `2.25`, `j`.
    pub fn parse(text: &str) -> Option<Complex> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let lower = text.to_ascii_lowercase();
        if !lower.ends_with('j') {
            return lower.parse::<f64>().ok().map(|re| Complex::new(re, 0.0));
        }

        let body = &lower[..lower.len() - 1];

        // Split on the last sign that is neither leading nor part of an exponent.
        let bytes = body.as_bytes();
        let mut split_at = None;
        for i in (1..bytes.len()).rev() {
            if (bytes[i] == b'+' || bytes[i] == b'-') && bytes[i - 1] != b'e' {
                split_at = Some(i);
                break;
            }
        }

        match split_at {
            Some(i) => {
                let re = body[..i].parse::<f64>().ok()?;
                let imag_part = &body[i..];
                let im = match imag_part {
                    "+" => 1.0,
                    "-" => -1.0,
                    _ => imag_part.parse::<f64>().ok()?,
                };
                Some(Complex::new(re, im))
            }
            None => {
                let im = match body {
                    "" => 1.0,
                    "-" => -1.0,
                    _ => body.parse::<f64>().ok()?,
                };
                Some(Complex::new(0.0, im))
            }
        }
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.re == 0.0 {
            write!(f, "{}j", self.im)
        } else if self.im < 0.0 {
            write!(f, "({}{}j)", self.re, self.im)
        } else {
            write!(f, "({}+{}j)", self.re, self.im)
        }
    }
}

/// Binary arithmetic operations available on Operation nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 4] = [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div];

    pub fn label(&self) -> &'static str {
        match self {
            BinaryOp::Add => "add",
            BinaryOp::Sub => "sub",
            BinaryOp::Mul => "mul",
            BinaryOp::Div => "div",
        }
    }
}

/// Literal types an Input node can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LiteralType {
    Int,
    Float,
    Complex,
    Str,
    Bool,
}

impl LiteralType {
    pub const ALL: [LiteralType; 5] = [
        LiteralType::Int,
        LiteralType::Float,
        LiteralType::Complex,
        LiteralType::Str,
        LiteralType::Bool,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            LiteralType::Int => "int",
            LiteralType::Float => "float",
            LiteralType::Complex => "complex",
            LiteralType::Str => "str",
            LiteralType::Bool => "bool",
        }
    }
}

/// Dynamically typed node result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Complex(Complex),
    Str(String),
    Boolean(bool),
    List(Vec<String>),
    Error(String),
    /// Unset: never computed, not ready, or the computation failed.
    None,
}

/// Sentinel produced by division by zero.
pub const DIV_BY_ZERO: &str = "Error: Div by 0";

impl Value {
    /// Parses a literal according to the requested type. Bad parses yield `None`.
    pub fn parse_literal(text: &str, literal_type: LiteralType) -> Value {
        match literal_type {
            LiteralType::Int => text
                .trim()
                .parse::<i64>()
                .map(Value::Integer)
                .unwrap_or(Value::None),
            LiteralType::Float => text
                .trim()
                .parse::<f64>()
                .map(Value::Float)
                .unwrap_or(Value::None),
            LiteralType::Complex => Complex::parse(text).map(Value::Complex).unwrap_or(Value::None),
            LiteralType::Str => Value::Str(text.to_string()),
            LiteralType::Bool => match text.trim() {
                "True" => Value::Boolean(true),
                "False" => Value::Boolean(false),
                _ => Value::None,
            },
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    /// Applies a binary operation with dynamic coercion.
    pub fn apply(op: BinaryOp, lhs: &Value, rhs: &Value) -> Value {
        // Structural operations on strings and lists.
        match (op, lhs, rhs) {
            (BinaryOp::Add, Value::Str(a), Value::Str(b)) => {
                return Value::Str(format!("{}{}", a, b));
            }
            (BinaryOp::Add, Value::List(a), Value::List(b)) => {
                let mut items = a.clone();
                items.extend(b.iter().cloned());
                return Value::List(items);
            }
            (BinaryOp::Mul, Value::Str(s), Value::Integer(n))
            | (BinaryOp::Mul, Value::Integer(n), Value::Str(s)) => {
                return Self::repeat_str(s, *n);
            }
            (BinaryOp::Mul, Value::Str(s), Value::Boolean(b))
            | (BinaryOp::Mul, Value::Boolean(b), Value::Str(s)) => {
                return Self::repeat_str(s, *b as i64);
            }
            (BinaryOp::Mul, Value::List(items), Value::Integer(n))
            | (BinaryOp::Mul, Value::Integer(n), Value::List(items)) => {
                return Self::repeat_list(items, *n);
            }
            (BinaryOp::Mul, Value::List(items), Value::Boolean(b))
            | (BinaryOp::Mul, Value::Boolean(b), Value::List(items)) => {
                return Self::repeat_list(items, *b as i64);
            }
            _ => {}
        }

        Self::apply_numeric(op, lhs, rhs)
    }

    /// Longest string or list a repeat may produce. Oversized requests are
    /// swallowed like any other failed evaluation.
    const MAX_REPEAT_LEN: usize = 1 << 24;

    /// Validated repeat count. Negative counts produce an empty result;
    /// counts whose total length overflows or exceeds the cap are rejected.
    fn repeat_count(n: i64, unit_len: usize) -> Option<usize> {
        let count = usize::try_from(n).unwrap_or(0);
        if unit_len == 0 {
            return Some(0);
        }
        match unit_len.checked_mul(count) {
            Some(total) if total <= Self::MAX_REPEAT_LEN => Some(count),
            _ => None,
        }
    }

    fn repeat_str(s: &str, n: i64) -> Value {
        match Self::repeat_count(n, s.len()) {
            Some(count) => Value::Str(s.repeat(count)),
            None => Value::None,
        }
    }

    fn repeat_list(items: &[String], n: i64) -> Value {
        match Self::repeat_count(n, items.len()) {
            Some(count) => {
                let mut repeated = Vec::with_capacity(items.len() * count);
                for _ in 0..count {
                    repeated.extend(items.iter().cloned());
                }
                Value::List(repeated)
            }
            None => Value::None,
        }
    }

    fn apply_numeric(op: BinaryOp, lhs: &Value, rhs: &Value) -> Value {
        let (a, b) = match (Numeric::of(lhs), Numeric::of(rhs)) {
            (Some(a), Some(b)) => (a, b),
            _ => return Value::None,
        };

        // Promote both operands to the highest level present, preserving order.
        if matches!(a, Numeric::Complex(_)) || matches!(b, Numeric::Complex(_)) {
            let (a, b) = (a.to_complex(), b.to_complex());
            match op {
                BinaryOp::Add => Value::Complex(a.add(b)),
                BinaryOp::Sub => Value::Complex(a.sub(b)),
                BinaryOp::Mul => Value::Complex(a.mul(b)),
                BinaryOp::Div => {
                    if b.is_zero() {
                        Value::Error(DIV_BY_ZERO.to_string())
                    } else {
                        Value::Complex(a.div(b))
                    }
                }
            }
        } else if matches!(a, Numeric::Float(_)) || matches!(b, Numeric::Float(_)) {
            let (a, b) = (a.to_float(), b.to_float());
            match op {
                BinaryOp::Add => Value::Float(a + b),
                BinaryOp::Sub => Value::Float(a - b),
                BinaryOp::Mul => Value::Float(a * b),
                BinaryOp::Div => {
                    if b == 0.0 {
                        Value::Error(DIV_BY_ZERO.to_string())
                    } else {
                        Value::Float(a / b)
                    }
                }
            }
        } else {
            let (a, b) = (a.to_integer(), b.to_integer());
            match op {
                BinaryOp::Add => a.checked_add(b).map(Value::Integer).unwrap_or(Value::None),
                BinaryOp::Sub => a.checked_sub(b).map(Value::Integer).unwrap_or(Value::None),
                BinaryOp::Mul => a.checked_mul(b).map(Value::Integer).unwrap_or(Value::None),
                // Division always leaves the integer domain.
                BinaryOp::Div => {
                    if b == 0 {
                        Value::Error(DIV_BY_ZERO.to_string())
                    } else {
                        Value::Float(a as f64 / b as f64)
                    }
                }
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Integer(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Complex(c) => write!(f, "{}", c),
            Value::Str(s) => write!(f, "{}", s),
            Value::Boolean(true) => write!(f, "True"),
            Value::Boolean(false) => write!(f, "False"),
            Value::List(items) => write!(f, "[{}]", items.join(", ")),
            Value::Error(msg) => write!(f, "{}", msg),
            Value::None => write!(f, "None"),
        }
    }
}

/// Numeric tower used during coercion. Booleans enter as integers.
#[derive(Clone, Copy)]
enum Numeric {
    Integer(i64),
    Float(f64),
    Complex(Complex),
}

impl Numeric {
    fn of(value: &Value) -> Option<Numeric> {
        match value {
            Value::Integer(n) => Some(Numeric::Integer(*n)),
            Value::Boolean(b) => Some(Numeric::Integer(*b as i64)),
            Value::Float(x) => Some(Numeric::Float(*x)),
            Value::Complex(c) => Some(Numeric::Complex(*c)),
            _ => None,
        }
    }

    fn to_integer(self) -> i64 {
        match self {
            Numeric::Integer(n) => n,
            Numeric::Float(x) => x as i64,
            Numeric::Complex(c) => c.re as i64,
        }
    }

    fn to_float(self) -> f64 {
        match self {
            Numeric::Integer(n) => n as f64,
            Numeric::Float(x) => x,
            Numeric::Complex(c) => c.re,
        }
    }

    fn to_complex(self) -> Complex {
        match self {
            Numeric::Integer(n) => Complex::new(n as f64, 0.0),
            Numeric::Float(x) => Complex::new(x, 0.0),
            Numeric::Complex(c) => c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_arithmetic() {
        let a = Value::Integer(7);
        let b = Value::Integer(3);
        assert_eq!(Value::apply(BinaryOp::Add, &a, &b), Value::Integer(10));
        assert_eq!(Value::apply(BinaryOp::Sub, &a, &b), Value::Integer(4));
        assert_eq!(Value::apply(BinaryOp::Mul, &a, &b), Value::Integer(21));
    }

    #[test]
    fn test_division_leaves_integer_domain() {
        let result = Value::apply(BinaryOp::Div, &Value::Integer(7), &Value::Integer(2));
        assert_eq!(result, Value::Float(3.5));
    }

    #[test]
    fn test_division_by_zero_is_sentinel() {
        let result = Value::apply(BinaryOp::Div, &Value::Integer(1), &Value::Integer(0));
        assert_eq!(result, Value::Error(DIV_BY_ZERO.to_string()));

        let result = Value::apply(BinaryOp::Div, &Value::Float(1.0), &Value::Float(0.0));
        assert_eq!(result, Value::Error(DIV_BY_ZERO.to_string()));

        let result = Value::apply(
            BinaryOp::Div,
            &Value::Complex(Complex::new(1.0, 1.0)),
            &Value::Complex(Complex::new(0.0, 0.0)),
        );
        assert_eq!(result, Value::Error(DIV_BY_ZERO.to_string()));
    }

    #[test]
    fn test_mixed_numeric_promotion() {
        let result = Value::apply(BinaryOp::Add, &Value::Integer(1), &Value::Float(0.5));
        assert_eq!(result, Value::Float(1.5));

        let result = Value::apply(
            BinaryOp::Mul,
            &Value::Complex(Complex::new(0.0, 1.0)),
            &Value::Complex(Complex::new(0.0, 1.0)),
        );
        assert_eq!(result, Value::Complex(Complex::new(-1.0, 0.0)));
    }

    #[test]
    fn test_promotion_preserves_operand_order() {
        let result = Value::apply(BinaryOp::Sub, &Value::Integer(1), &Value::Float(0.25));
        assert_eq!(result, Value::Float(0.75));

        let result = Value::apply(
            BinaryOp::Sub,
            &Value::Float(1.0),
            &Value::Complex(Complex::new(0.0, 1.0)),
        );
        assert_eq!(result, Value::Complex(Complex::new(1.0, -1.0)));
    }

    #[test]
    fn test_booleans_count_as_integers() {
        let result = Value::apply(BinaryOp::Add, &Value::Boolean(true), &Value::Boolean(true));
        assert_eq!(result, Value::Integer(2));
    }

    #[test]
    fn test_string_concat_and_repeat() {
        let result = Value::apply(
            BinaryOp::Add,
            &Value::Str("ab".into()),
            &Value::Str("cd".into()),
        );
        assert_eq!(result, Value::Str("abcd".into()));

        let result = Value::apply(BinaryOp::Mul, &Value::Str("ab".into()), &Value::Integer(3));
        assert_eq!(result, Value::Str("ababab".into()));
    }

    #[test]
    fn test_list_concat_and_repeat() {
        let a = Value::List(vec!["x".into()]);
        let b = Value::List(vec!["y".into()]);
        assert_eq!(
            Value::apply(BinaryOp::Add, &a, &b),
            Value::List(vec!["x".into(), "y".into()])
        );
        assert_eq!(
            Value::apply(BinaryOp::Mul, &a, &Value::Integer(2)),
            Value::List(vec!["x".into(), "x".into()])
        );
    }

    #[test]
    fn test_repeat_overflow_is_swallowed() {
        let result = Value::apply(
            BinaryOp::Mul,
            &Value::Str("abc".into()),
            &Value::Integer(i64::MAX),
        );
        assert_eq!(result, Value::None);

        let result = Value::apply(
            BinaryOp::Mul,
            &Value::List(vec!["x".into()]),
            &Value::Integer(i64::MAX),
        );
        assert_eq!(result, Value::None);

        // Repeating nothing stays cheap no matter the count.
        let result = Value::apply(
            BinaryOp::Mul,
            &Value::Str("".into()),
            &Value::Integer(i64::MAX),
        );
        assert_eq!(result, Value::Str("".into()));
    }

    #[test]
    fn test_negative_repeat_is_empty() {
        let result = Value::apply(BinaryOp::Mul, &Value::Str("ab".into()), &Value::Integer(-3));
        assert_eq!(result, Value::Str("".into()));

        let result = Value::apply(
            BinaryOp::Mul,
            &Value::List(vec!["x".into()]),
            &Value::Integer(-1),
        );
        assert_eq!(result, Value::List(vec![]));
    }

    #[test]
    fn test_boolean_repeat_count() {
        let result = Value::apply(BinaryOp::Mul, &Value::Str("ab".into()), &Value::Boolean(true));
        assert_eq!(result, Value::Str("ab".into()));

        let result = Value::apply(BinaryOp::Mul, &Value::Boolean(false), &Value::Str("ab".into()));
        assert_eq!(result, Value::Str("".into()));

        let result = Value::apply(
            BinaryOp::Mul,
            &Value::List(vec!["x".into()]),
            &Value::Boolean(true),
        );
        assert_eq!(result, Value::List(vec!["x".into()]));
    }

    #[test]
    fn test_incompatible_operands_are_swallowed() {
        let result = Value::apply(BinaryOp::Sub, &Value::Str("a".into()), &Value::Integer(1));
        assert_eq!(result, Value::None);

        let result = Value::apply(BinaryOp::Add, &Value::List(vec![]), &Value::Integer(1));
        assert_eq!(result, Value::None);
    }

    #[test]
    fn test_parse_int_literal() {
        assert_eq!(Value::parse_literal("42", LiteralType::Int), Value::Integer(42));
        assert_eq!(Value::parse_literal("nope", LiteralType::Int), Value::None);
    }

    #[test]
    fn test_parse_bool_literal() {
        assert_eq!(
            Value::parse_literal("True", LiteralType::Bool),
            Value::Boolean(true)
        );
        assert_eq!(
            Value::parse_literal("False", LiteralType::Bool),
            Value::Boolean(false)
        );
        assert_eq!(Value::parse_literal("maybe", LiteralType::Bool), Value::None);
    }

    #[test]
    fn test_parse_complex_literal() {
        assert_eq!(
            Value::parse_literal("1+2j", LiteralType::Complex),
            Value::Complex(Complex::new(1.0, 2.0))
        );
        assert_eq!(
            Value::parse_literal("-3.5j", LiteralType::Complex),
            Value::Complex(Complex::new(0.0, -3.5))
        );
        assert_eq!(
            Value::parse_literal("2.25", LiteralType::Complex),
            Value::Complex(Complex::new(2.25, 0.0))
        );
        assert_eq!(Value::parse_literal("1+", LiteralType::Complex), Value::None);
    }

    #[test]
    fn test_display_forms() {
        assert_eq!(Value::Integer(3).to_string(), "3");
        assert_eq!(Value::Boolean(true).to_string(), "True");
        assert_eq!(Value::None.to_string(), "None");
        assert_eq!(
            Value::List(vec!["a".into(), "b".into()]).to_string(),
            "[a, b]"
        );
        assert_eq!(Value::Complex(Complex::new(1.0, -2.0)).to_string(), "(1-2j)");
    }
}
