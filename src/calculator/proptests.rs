//! Property tests for replay determinism and undo.

use super::keys::Key;
use super::{CalcBrain, ProgramEntry};
use proptest::prelude::*;

fn arb_key() -> impl Strategy<Value = Key> {
    prop_oneof![
        3 => (-100i32..100).prop_map(|n| Key::Number(f64::from(n) / 4.0)),
        1 => prop::sample::select(vec!["M", "x"]).prop_map(|name| Key::Variable(name.to_string())),
        4 => prop::sample::select(vec![
            "+", "-", "×", "÷", "%", "=", "π", "x²", "√", "cos", "⁺⁄₋", "1/x", "AC", "?",
        ])
        .prop_map(|symbol| Key::Operator(symbol.to_string())),
        1 => Just(Key::Undo),
    ]
}

fn seeded() -> CalcBrain {
    let mut brain = CalcBrain::new();
    brain.set_variable("x", 1.5);
    brain
}

fn press_all(brain: &mut CalcBrain, keys: &[Key]) {
    for key in keys {
        key.apply(brain);
    }
}

/// Bit-level comparison so NaN results compare equal to themselves.
fn same_state(a: &CalcBrain, b: &CalcBrain) -> bool {
    a.result().to_bits() == b.result().to_bits()
        && a.description() == b.description()
        && a.is_partial_result() == b.is_partial_result()
        && a.program() == b.program()
}

proptest! {
    #[test]
    fn replaying_program_reproduces_state(keys in prop::collection::vec(arb_key(), 0..40)) {
        let mut brain = seeded();
        press_all(&mut brain, &keys);

        let mut replayed = brain.clone();
        replayed.rerun();
        prop_assert!(same_state(&brain, &replayed));

        let mut loaded = CalcBrain::with_variables(brain.variables().clone());
        loaded.set_program(brain.program().to_vec());
        prop_assert!(same_state(&brain, &loaded));
    }

    #[test]
    fn undo_then_reenter_restores_state(keys in prop::collection::vec(arb_key(), 1..40)) {
        let mut brain = seeded();
        press_all(&mut brain, &keys);

        let Some(last) = brain.program().last().cloned() else {
            return Ok(());
        };

        let mut redone = brain.clone();
        redone.undo();
        match last {
            ProgramEntry::Number(value) => redone.enter_number(value),
            ProgramEntry::Symbol(name) if redone.variables().contains(&name) => {
                redone.enter_variable(&name)
            }
            ProgramEntry::Symbol(symbol) => redone.apply_operator(&symbol),
        }

        prop_assert!(same_state(&brain, &redone));
    }
}
