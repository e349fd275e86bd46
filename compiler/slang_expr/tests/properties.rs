//! Property-based tests for the expression evaluator.
//!
//! Operands go through variables so negative values can be exercised
//! (the language has no unary minus).

use proptest::prelude::*;
use rustc_hash::FxHashMap;
use slang_expr::{evaluate, ExprErrorKind};

fn bindings(pairs: &[(&str, i64)]) -> FxHashMap<String, i64> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), *value))
        .collect()
}

fn operand() -> impl Strategy<Value = i64> {
    -1_000_000i64..1_000_000
}

proptest! {
    #[test]
    fn binary_ops_agree_with_i64(a in operand(), b in operand()) {
        let vars = bindings(&[("a", a), ("b", b)]);
        prop_assert_eq!(evaluate("a + b", &vars), Ok(a + b));
        prop_assert_eq!(evaluate("a - b", &vars), Ok(a - b));
        prop_assert_eq!(evaluate("a * b", &vars), Ok(a * b));
        if b == 0 {
            let kind = evaluate("a / b", &vars).map_err(|err| err.kind);
            prop_assert_eq!(kind, Err(ExprErrorKind::DivisionByZero));
        } else {
            prop_assert_eq!(evaluate("a / b", &vars), Ok(a / b));
        }
    }

    #[test]
    fn precedence_matches_conventional_arithmetic(
        a in operand(),
        b in -1000i64..1000,
        c in -1000i64..1000,
    ) {
        let vars = bindings(&[("a", a), ("b", b), ("c", c)]);
        prop_assert_eq!(evaluate("a + b * c", &vars), Ok(a + b * c));
        prop_assert_eq!(evaluate("(a + b) * c", &vars), Ok((a + b) * c));
        prop_assert_eq!(evaluate("a - b - c", &vars), Ok((a - b) - c));
    }

    #[test]
    fn literals_round_trip(n in 0i64..i64::MAX) {
        prop_assert_eq!(evaluate(&n.to_string(), &FxHashMap::default()), Ok(n));
    }

    #[test]
    fn evaluation_is_idempotent(a in operand(), b in 1i64..1000) {
        let vars = bindings(&[("a", a), ("b", b)]);
        let expression = "(a * 3 + b) / b - a";
        let first = evaluate(expression, &vars);
        let second = evaluate(expression, &vars);
        prop_assert_eq!(first, second);
    }
}
