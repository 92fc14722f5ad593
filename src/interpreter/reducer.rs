use crate::{
    ast::{tag, Value},
    error::RuntimeError,
};

/// Result type used by the reduction engine.
pub type ReduceResult<T> = Result<T, RuntimeError>;

/// One entry of the ordered rule table.
///
/// Both kinds are total over `Value`: applying a rule that does not match
/// simply returns an output structurally equivalent to the input, which the
/// fixed-point loop reads as "no change".
#[derive(Debug, Clone)]
enum Rule {
    /// Rewrites every occurrence of `name`, anywhere in a tree, to a fixed
    /// replacement. Does not descend into `Abstraction` bodies or
    /// parameters.
    Substitution { name: String, replacement: Value },
    /// Keyed by an operator tag such as `$add`; fires its handler against an
    /// application whose already-rewritten abstraction equals that tag.
    Operation { tag: &'static str, op: Builtin },
}

/// Handler selector for the built-in operation rules.
#[derive(Debug, Clone, Copy)]
enum Builtin {
    Let,
    Neg,
    Add,
    Sub,
    Mul,
    Div,
}

/// Stores the rewriting environment for one evaluation session.
///
/// A session owns the ordered, mutable rule table shared by every statement
/// it evaluates. It is seeded once with the built-in constant bindings
/// (`pi`, `e`) and the built-in operation rules, in a fixed order; after
/// that, only the `$let` operation mutates it.
///
/// ## Usage
///
/// A `Session` is created once per interactive session and mutably borrowed
/// by each [`Session::reduce`] call, so bindings persist across statements:
///
/// ```
/// use symba::{eval_statement, Session, Value};
///
/// let mut session = Session::new();
/// eval_statement("x = 5", &mut session).unwrap();
/// let trace = eval_statement("x + 1", &mut session).unwrap();
/// assert_eq!(trace.last(), Some(&Value::Constant(6.0)));
/// ```
pub struct Session {
    rules: Vec<Rule>,
    step_limit: Option<usize>,
}

impl Session {
    /// Creates a session with the built-in rule table and no step ceiling.
    ///
    /// Without a ceiling, reduction of a cyclic rule set never returns;
    /// that matches the default fixed-point contract.
    #[must_use]
    pub fn new() -> Self {
        use std::f64::consts;
        Self { rules: vec![Rule::Substitution { name: "pi".to_string(),
                                                replacement: Value::Constant(consts::PI) },
                           Rule::Substitution { name: "e".to_string(),
                                                replacement: Value::Constant(consts::E) },
                           Rule::Operation { tag: tag::LET, op: Builtin::Let },
                           Rule::Operation { tag: tag::NEG, op: Builtin::Neg },
                           Rule::Operation { tag: tag::ADD, op: Builtin::Add },
                           Rule::Operation { tag: tag::SUB, op: Builtin::Sub },
                           Rule::Operation { tag: tag::MUL, op: Builtin::Mul },
                           Rule::Operation { tag: tag::DIV, op: Builtin::Div }],
               step_limit: None }
    }

    /// Creates a session whose reductions abort with
    /// [`RuntimeError::DidNotConverge`] once a trace would exceed `steps`
    /// entries.
    ///
    /// The ceiling is purely protective: any reduction that converges in
    /// fewer steps behaves exactly as it would in an unlimited session.
    #[must_use]
    pub fn with_step_limit(steps: usize) -> Self {
        Self { step_limit: Some(steps),
               ..Self::new() }
    }

    /// Rewrites `value` until a full pass over the rule table leaves it
    /// unchanged, returning the ordered trace of every value visited.
    ///
    /// The trace starts with the input and ends with the normal form. On
    /// each iteration the table is scanned from its first entry; as soon as
    /// one rule's output is not structurally equivalent to the current
    /// value, that output is adopted and the scan restarts from the top.
    /// Restarting lets an early rule re-fire on output produced by a later
    /// one, which is what feeds a variable substitution straight into
    /// arithmetic folding within the same statement.
    ///
    /// The table is scanned by index: a substitution rule appended by `$let`
    /// mid-scan is still visited in the same pass.
    ///
    /// # Errors
    /// Returns [`RuntimeError::DidNotConverge`] if a step ceiling was
    /// requested and the trace would exceed it. Sessions without a ceiling
    /// never return an error; they loop forever on a cyclic rule set.
    pub fn reduce(&mut self, value: Value) -> ReduceResult<Vec<Value>> {
        let mut current = value;
        let mut trace = vec![current.clone()];

        'scan: loop {
            let mut index = 0;
            while index < self.rules.len() {
                let reduced = self.apply(index, &current);
                if !reduced.equivalent(&current) {
                    if let Some(steps) = self.step_limit {
                        if trace.len() >= steps {
                            return Err(RuntimeError::DidNotConverge { steps });
                        }
                    }
                    current = reduced;
                    trace.push(current.clone());
                    continue 'scan;
                }
                index += 1;
            }
            break;
        }

        Ok(trace)
    }

    /// Applies the rule at `index` to `value`, returning the rewritten term
    /// (possibly an unchanged copy).
    fn apply(&mut self, index: usize, value: &Value) -> Value {
        match &self.rules[index] {
            Rule::Substitution { name, replacement } => substitute(value, name, replacement),
            Rule::Operation { tag, op } => {
                let (tag, op) = (*tag, *op);
                self.rewrite_operation(tag, op, value)
            },
        }
    }

    /// Applies one operation rule throughout `value`, bottom-up.
    ///
    /// Every application node has its abstraction and arguments rewritten by
    /// this same rule first; the handler then fires only where the rewritten
    /// abstraction equals the rule's tag. Abstraction bodies are not
    /// entered.
    fn rewrite_operation(&mut self, tag: &'static str, op: Builtin, value: &Value) -> Value {
        if let Value::Application { abstraction, args } = value {
            let abstraction = self.rewrite_operation(tag, op, abstraction);
            let args: Vec<Value> = args.iter()
                                       .map(|arg| self.rewrite_operation(tag, op, arg))
                                       .collect();
            if matches!(&abstraction, Value::Symbol(name) if name.as_str() == tag) {
                return self.fire(op, abstraction, args);
            }
            return Value::Application { abstraction: Box::new(abstraction),
                                        args };
        }
        value.clone()
    }

    /// Runs one built-in handler against an already-rewritten application.
    ///
    /// A handler that does not match returns `None`, and the application is
    /// re-assembled unchanged to signal "no match" to the outer loop.
    fn fire(&mut self, op: Builtin, abstraction: Value, args: Vec<Value>) -> Value {
        let folded = match op {
            Builtin::Let => {
                self.bind(&args);
                None
            },
            Builtin::Neg => fold_neg(&args),
            Builtin::Add => fold_add(&args),
            Builtin::Sub => fold_sub(&args),
            Builtin::Mul => fold_mul(&args),
            Builtin::Div => fold_div(&args),
        };
        folded.unwrap_or(Value::Application { abstraction: Box::new(abstraction),
                                              args })
    }

    /// Handles `$let(name, expr)`: binds `name` as a substitution rule.
    ///
    /// A first-time binding is appended to the table; a redefinition
    /// replaces, in place at its original index, the substitution rule
    /// previously bound to that name. Priority is therefore fixed at first
    /// definition while the bound value always updates. The binding is a
    /// side effect only; the `$let` application itself is left unchanged.
    fn bind(&mut self, args: &[Value]) {
        if let [Value::Symbol(name), definition] = args {
            let rule = Rule::Substitution { name: name.clone(),
                                            replacement: definition.clone() };
            let previous = self.rules.iter().position(|existing| {
                matches!(existing, Rule::Substitution { name: bound, .. } if bound == name)
            });
            match previous {
                Some(index) => self.rules[index] = rule,
                None => self.rules.push(rule),
            }
        }
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

/// Rewrites every occurrence of the symbol `name` in `value` to
/// `replacement`.
///
/// Recurses through application abstraction and argument positions. It does
/// not descend into `Abstraction` bodies or parameters; the variant is
/// reserved and substitution inside it is deliberately out of scope.
fn substitute(value: &Value, name: &str, replacement: &Value) -> Value {
    match value {
        Value::Symbol(symbol) if symbol.as_str() == name => replacement.clone(),
        Value::Application { abstraction, args } => {
            Value::Application { abstraction: Box::new(substitute(abstraction, name, replacement)),
                                 args: args.iter()
                                           .map(|arg| substitute(arg, name, replacement))
                                           .collect() }
        },
        other => other.clone(),
    }
}

fn neg(value: Value) -> Value {
    Value::apply(Value::symbol(tag::NEG), vec![value])
}

/// `$neg`: folds a constant and collapses double negation.
fn fold_neg(args: &[Value]) -> Option<Value> {
    match args {
        [Value::Constant(first)] => Some(Value::Constant(-first)),
        [Value::Application { abstraction, args: inner }]
            if matches!(&**abstraction, Value::Symbol(name) if name.as_str() == tag::NEG) => {
            inner.first().cloned()
        },
        _ => None,
    }
}

/// `$add`: constant folding plus the additive-identity eliminations.
#[allow(clippy::float_cmp)]
fn fold_add(args: &[Value]) -> Option<Value> {
    match args {
        [Value::Constant(left), Value::Constant(right)] => Some(Value::Constant(left + right)),
        [Value::Constant(left), right] if *left == 0.0 => Some(right.clone()),
        [left, Value::Constant(right)] if *right == 0.0 => Some(left.clone()),
        _ => None,
    }
}

/// `$sub`: constant folding, identity elimination, and self-cancellation of
/// structurally equivalent operands.
#[allow(clippy::float_cmp)]
fn fold_sub(args: &[Value]) -> Option<Value> {
    match args {
        [Value::Constant(left), Value::Constant(right)] => Some(Value::Constant(left - right)),
        [Value::Constant(left), right] if *left == 0.0 => Some(neg(right.clone())),
        [left, Value::Constant(right)] if *right == 0.0 => Some(left.clone()),
        [left, right] if left.equivalent(right) => Some(Value::Constant(0.0)),
        _ => None,
    }
}

/// `$mul`: constant folding, absorbing zero, and the unit eliminations.
/// No self-cancellation rule exists for `$mul`.
#[allow(clippy::float_cmp)]
fn fold_mul(args: &[Value]) -> Option<Value> {
    match args {
        [Value::Constant(left), Value::Constant(right)] => Some(Value::Constant(left * right)),
        [Value::Constant(zero), _] | [_, Value::Constant(zero)] if *zero == 0.0 => {
            Some(Value::Constant(0.0))
        },
        [Value::Constant(left), right] if *left == 1.0 => Some(right.clone()),
        [left, Value::Constant(right)] if *right == 1.0 => Some(left.clone()),
        [Value::Constant(left), right] if *left == -1.0 => Some(neg(right.clone())),
        [left, Value::Constant(right)] if *right == -1.0 => Some(neg(left.clone())),
        _ => None,
    }
}

/// `$div`: constant folding (first, so `0 / 0` is `NaN` and division by
/// zero yields an infinity per floating-point rules), a zero numerator, and
/// the unit eliminations. `a / a` is deliberately not simplified.
#[allow(clippy::float_cmp)]
fn fold_div(args: &[Value]) -> Option<Value> {
    match args {
        [Value::Constant(left), Value::Constant(right)] => Some(Value::Constant(left / right)),
        [Value::Constant(left), _] if *left == 0.0 => Some(Value::Constant(0.0)),
        [left, Value::Constant(right)] if *right == 1.0 => Some(left.clone()),
        [left, Value::Constant(right)] if *right == -1.0 => Some(neg(left.clone())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn binding_names(session: &Session) -> Vec<String> {
        session.rules
               .iter()
               .filter_map(|rule| match rule {
                   Rule::Substitution { name, .. } => Some(name.clone()),
                   Rule::Operation { .. } => None,
               })
               .collect()
    }

    fn let_statement(name: &str, definition: Value) -> Value {
        Value::apply(Value::symbol(tag::LET),
                     vec![Value::symbol(name), definition])
    }

    #[test]
    fn redefinition_keeps_the_original_table_slot() {
        let mut session = Session::new();
        session.reduce(let_statement("x", Value::Constant(1.0))).unwrap();
        session.reduce(let_statement("y", Value::Constant(2.0))).unwrap();
        session.reduce(let_statement("x", Value::Constant(3.0))).unwrap();

        // `pi` and `e` are seeded first; `x` keeps its slot ahead of `y`.
        assert_eq!(binding_names(&session), vec!["pi", "e", "x", "y"]);
        let trace = session.reduce(Value::symbol("x")).unwrap();
        assert_eq!(trace.last(), Some(&Value::Constant(3.0)));
    }

    #[test]
    fn builtin_constants_shadow_their_own_rebinding() {
        // The seeded `pi` rule precedes `$let` in the table, so the name
        // position is rewritten to the constant before the binding fires;
        // `bind` then sees a non-symbol name and does nothing.
        let mut session = Session::new();
        let trace = session.reduce(let_statement("pi", Value::Constant(3.0))).unwrap();
        assert_eq!(trace.last().unwrap().to_string(),
                   format!("{} = 3", std::f64::consts::PI));
        assert_eq!(binding_names(&session), vec!["pi", "e"]);
        let trace = session.reduce(Value::symbol("pi")).unwrap();
        assert_eq!(trace.last(), Some(&Value::Constant(std::f64::consts::PI)));
    }

    #[test]
    fn let_with_a_non_symbol_name_binds_nothing() {
        let mut session = Session::new();
        let statement = Value::apply(Value::symbol(tag::LET),
                                     vec![Value::Constant(1.0), Value::Constant(2.0)]);
        let trace = session.reduce(statement.clone()).unwrap();
        assert_eq!(trace, vec![statement]);
        assert_eq!(binding_names(&session), vec!["pi", "e"]);
    }

    #[test]
    fn substitution_skips_abstraction_bodies() {
        let abstraction = Value::Abstraction { parameters: vec!["y".to_string()],
                                               body: Box::new(Value::symbol("x")) };
        let replaced = substitute(&abstraction, "x", &Value::Constant(1.0));
        assert_eq!(replaced, abstraction);
    }

    #[test]
    fn wrong_arity_means_no_match() {
        let three = [Value::Constant(1.0), Value::Constant(2.0), Value::Constant(3.0)];
        assert_eq!(fold_add(&three), None);
        assert_eq!(fold_neg(&three[..2]), None);
    }

    #[test]
    fn div_folds_constants_before_checking_the_zero_numerator() {
        let zeros = [Value::Constant(0.0), Value::Constant(0.0)];
        let folded = fold_div(&zeros).unwrap();
        assert!(matches!(folded, Value::Constant(c) if c.is_nan()));
    }
}
