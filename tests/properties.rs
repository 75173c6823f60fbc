//! Property-based tests for the evaluation core.
//!
//! Generated inputs check that literals read back exactly, that grouping and
//! subtraction behave like the arithmetic they stand for, that scope frames
//! leave outer bindings untouched, and that recursive sequence definitions
//! agree with their closed form.

use proptest::prelude::*;
use seqcalc::{
    Interpreter, Value,
    interpreter::{environment::Mapstack, value::complex::ComplexNumber},
};

fn eval(src: &str) -> Value {
    seqcalc::eval(src).unwrap_or_else(|e| panic!("`{src}` failed: {e}"))
}

/// Small integers keep every intermediate result exact.
fn small_int() -> impl Strategy<Value = i32> {
    -1000..1000
}

proptest! {
    #[test]
    fn real_literals_read_back(v in 0.0f64..1e12) {
        prop_assert_eq!(eval(&format!("{v}")), Value::from(v));
    }

    #[test]
    fn imaginary_literals_read_back(v in 0.0f64..1e6) {
        prop_assert_eq!(eval(&format!("{v}i")), Value::from(ComplexNumber::new(0.0, v)));
    }

    #[test]
    fn parentheses_are_neutral(a in small_int(), b in small_int(), c in small_int()) {
        let grouped = eval(&format!("(({a}) + ({b})) * ({c})"));
        let expanded = eval(&format!("({a}) * ({c}) + ({b}) * ({c})"));
        prop_assert_eq!(grouped, expanded);
    }

    #[test]
    fn subtraction_adds_the_negation(a in small_int(), b in small_int()) {
        prop_assert_eq!(eval(&format!("{a} - ({b})")), Value::from(f64::from(a - b)));
    }

    #[test]
    fn arithmetic_sequences_match_their_closed_form(start in small_int(),
                                                   step in small_int(),
                                                   k in 0u8..40) {
        let mut interpreter = Interpreter::new();
        interpreter.try_eval(&format!("u_0 = {start}")).unwrap();
        interpreter.try_eval(&format!("u_n = u_(n - 1) + ({step})")).unwrap();

        let expected = f64::from(start) + f64::from(step) * f64::from(k);
        prop_assert_eq!(interpreter.try_eval(&format!("u_{k}")).unwrap(), Value::from(expected));
    }

    #[test]
    fn balanced_frames_restore_bindings(outer in prop::collection::vec((0u8..6, any::<i32>()), 0..10),
                                        inner in prop::collection::vec((0u8..6, any::<i32>()), 0..10),
                                        frames in 1usize..4) {
        let mut env: Mapstack<String, i32> = Mapstack::new();
        for (name, value) in &outer {
            env.set(format!("v{name}"), *value);
        }
        let mut before = env.iter().map(|(k, v)| (k.clone(), *v)).collect::<Vec<_>>();
        before.sort();

        for _ in 0..frames {
            env.push();
            for (name, value) in &inner {
                env.set(format!("v{name}"), *value);
            }
        }
        for _ in 0..frames {
            env.pop();
        }

        let mut after = env.iter().map(|(k, v)| (k.clone(), *v)).collect::<Vec<_>>();
        after.sort();
        prop_assert_eq!(before, after);
    }
}
