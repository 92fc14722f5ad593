use std::fmt;

use ordered_float::OrderedFloat;

/// Well-known operator symbols produced by the parser and matched by the
/// reduction engine.
///
/// Every built-in operation is keyed by one of these tags. `$mod` and `$vec`
/// are produced by the parser but have no reduction rule; applications built
/// from them stay in the tree unreduced.
pub mod tag {
    /// Binding statements: `x = 5` parses to `$let(x, 5)`.
    pub const LET: &str = "$let";
    /// Unary negation: `-x` parses to `$neg(x)`.
    pub const NEG: &str = "$neg";
    /// Addition: `a + b` parses to `$add(a, b)`.
    pub const ADD: &str = "$add";
    /// Subtraction: `a - b` parses to `$sub(a, b)`.
    pub const SUB: &str = "$sub";
    /// Multiplication: `a * b` parses to `$mul(a, b)`.
    pub const MUL: &str = "$mul";
    /// Division: `a / b` parses to `$div(a, b)`.
    pub const DIV: &str = "$div";
    /// Modulo: `a % b` parses to `$mod(a, b)`. No reduction rule exists.
    pub const MOD: &str = "$mod";
    /// Vector construction: `[a, b]` parses to `$vec(a, b)`. No reduction
    /// rule exists.
    pub const VEC: &str = "$vec";
}

/// The universal term type: every stage of the pipeline operates on `Value`.
///
/// The parser produces a `Value` tree from source text, the reduction engine
/// rewrites `Value` trees, and substitution rules bind names to `Value`
/// replacements. A `Value` tree is finite and acyclic; the grammar cannot
/// produce anything else.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A 64-bit floating-point number. May hold `NaN` or `±Infinity`.
    Constant(f64),
    /// An immutable name, compared by value equality.
    Symbol(String),
    /// An operator or function position applied to an ordered, non-empty
    /// argument list. The abstraction is typically a `Symbol` naming a
    /// built-in tag or a user function.
    Application {
        /// The operator/function position.
        abstraction: Box<Value>,
        /// The ordered argument list.
        args: Vec<Value>,
    },
    /// A parameter list plus a body. Reserved for future use: no reduction
    /// rule constructs, matches, or substitutes inside one.
    Abstraction {
        /// The ordered parameter names.
        parameters: Vec<String>,
        /// The body term.
        body: Box<Value>,
    },
}

impl Value {
    /// Builds an application of `abstraction` to `args`.
    ///
    /// ## Example
    /// ```
    /// use symba::ast::{tag, Value};
    ///
    /// let sum = Value::apply(Value::symbol(tag::ADD),
    ///                        vec![Value::Constant(1.0), Value::Constant(2.0)]);
    /// assert_eq!(sum.to_string(), "(1 + 2)");
    /// ```
    #[must_use]
    pub fn apply(abstraction: Self, args: Vec<Self>) -> Self {
        Self::Application { abstraction: Box::new(abstraction),
                            args }
    }

    /// Builds a symbol from a name.
    #[must_use]
    pub fn symbol(name: &str) -> Self {
        Self::Symbol(name.to_string())
    }

    /// Tests structural equivalence between two terms.
    ///
    /// Two values are equivalent iff they are the same constant, the same
    /// symbol, applications with equivalent abstractions and
    /// pairwise-equivalent argument lists of the same length, or
    /// abstractions with equal parameter lists and equivalent bodies.
    ///
    /// Constants compare under the `OrderedFloat` total order, so `NaN` is
    /// equivalent to `NaN`. An IEEE comparison would report a `NaN` term as
    /// permanently "changed" and the fixed-point reduction loop would never
    /// terminate on it.
    ///
    /// ## Example
    /// ```
    /// use symba::ast::Value;
    ///
    /// assert!(Value::Constant(f64::NAN).equivalent(&Value::Constant(f64::NAN)));
    /// assert!(!Value::symbol("x").equivalent(&Value::symbol("y")));
    /// ```
    #[must_use]
    pub fn equivalent(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Constant(x), Self::Constant(y)) => OrderedFloat(*x) == OrderedFloat(*y),
            (Self::Symbol(x), Self::Symbol(y)) => x == y,
            (Self::Application { abstraction: x, args: xs },
             Self::Application { abstraction: y, args: ys }) => {
                x.equivalent(y)
                && xs.len() == ys.len()
                && xs.iter().zip(ys).all(|(a, b)| a.equivalent(b))
            },
            (Self::Abstraction { parameters: xp, body: xb },
             Self::Abstraction { parameters: yp, body: yb }) => {
                xp == yp && xb.equivalent(yb)
            },
            _ => false,
        }
    }
}

impl From<f64> for Value {
    fn from(c: f64) -> Self {
        Self::Constant(c)
    }
}

impl From<&str> for Value {
    fn from(name: &str) -> Self {
        Self::symbol(name)
    }
}

impl fmt::Display for Value {
    /// Renders a term back to surface syntax.
    ///
    /// Assignments render as `name = value`, negation as `-value`, the
    /// binary built-ins as `(left OP right)` with their literal surface
    /// symbol, and any other application as `head(arg, ...)`. Constants
    /// render `NaN`, `Infinity` and `-Infinity` by name so they re-lex as
    /// constants.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Constant(c) if c.is_nan() => write!(f, "NaN"),
            Self::Constant(c) if c.is_infinite() => {
                if c.is_sign_negative() {
                    write!(f, "-Infinity")
                } else {
                    write!(f, "Infinity")
                }
            },
            Self::Constant(c) => write!(f, "{c}"),
            Self::Symbol(name) => write!(f, "{name}"),
            Self::Application { abstraction, args } => {
                if let Self::Symbol(name) = &**abstraction {
                    match (name.as_str(), args.as_slice()) {
                        (tag::LET, [left, right]) => return write!(f, "{left} = {right}"),
                        (tag::NEG, [first]) => return write!(f, "-{first}"),
                        (tag::ADD, [left, right]) => return write!(f, "({left} + {right})"),
                        (tag::SUB, [left, right]) => return write!(f, "({left} - {right})"),
                        (tag::MUL, [left, right]) => return write!(f, "({left} * {right})"),
                        (tag::DIV, [left, right]) => return write!(f, "({left} / {right})"),
                        (tag::MOD, [left, right]) => return write!(f, "({left} % {right})"),
                        _ => {},
                    }
                }
                write!(f, "{abstraction}(")?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{arg}")?;
                }
                write!(f, ")")
            },
            Self::Abstraction { parameters, body } => {
                write!(f, "({}) -> {body}", parameters.join(", "))
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equivalence_requires_same_argument_count() {
        let one = Value::apply(Value::symbol("f"), vec![Value::Constant(1.0)]);
        let two = Value::apply(Value::symbol("f"),
                               vec![Value::Constant(1.0), Value::Constant(2.0)]);
        assert!(!one.equivalent(&two));
        assert!(one.equivalent(&one.clone()));
    }

    #[test]
    fn nan_is_structurally_equivalent_to_nan() {
        assert!(Value::Constant(f64::NAN).equivalent(&Value::Constant(f64::NAN)));
    }

    #[test]
    fn display_uses_surface_operators() {
        let term = Value::apply(Value::symbol(tag::SUB),
                                vec![Value::symbol("a"),
                                     Value::apply(Value::symbol(tag::NEG),
                                                  vec![Value::Constant(2.0)])]);
        assert_eq!(term.to_string(), "(a - -2)");

        let vector = Value::apply(Value::symbol(tag::VEC),
                                  vec![Value::Constant(1.0), Value::Constant(2.0)]);
        assert_eq!(vector.to_string(), "$vec(1, 2)");
    }

    #[test]
    fn display_names_the_special_floats() {
        assert_eq!(Value::Constant(f64::NAN).to_string(), "NaN");
        assert_eq!(Value::Constant(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::Constant(f64::NEG_INFINITY).to_string(), "-Infinity");
    }
}
