//! Property-based tests for the guess buffer, ledger and session state machine.
//!
//! Invariants must hold under arbitrary sequences of keypad input and
//! server responses.

use mastermind_tui::{
    ActiveGame, Attempt, AttemptLedger, Difficulty, GUESS_LENGTH, GameStatus, GuessBuffer,
    SessionId, SubmitOutcome,
};
use proptest::prelude::*;

/// Keypad operations.
#[derive(Debug, Clone)]
enum KeyOp {
    Append(char),
    RemoveLast,
    Reset,
}

fn key_strategy() -> impl Strategy<Value = KeyOp> {
    prop_oneof![
        6 => prop::char::range('0', '9').prop_map(KeyOp::Append),
        2 => Just(KeyOp::RemoveLast),
        1 => Just(KeyOp::Reset),
    ]
}

fn difficulty_strategy() -> impl Strategy<Value = Difficulty> {
    prop_oneof![
        Just(Difficulty::Easy),
        Just(Difficulty::Medium),
        Just(Difficulty::Hard),
    ]
}

fn outcome_strategy() -> impl Strategy<Value = SubmitOutcome> {
    prop_oneof![
        1 => Just(SubmitOutcome::Win { total_score: Some(5000) }),
        1 => Just(SubmitOutcome::Lose { total_score: Some(-200) }),
        8 => (0u8..=4, 0u8..=4, 0u32..12, -150i64..2400).prop_map(|(numbers, positions, left, delta)| {
            SubmitOutcome::Continue {
                correct_numbers: numbers,
                correct_positions: positions.min(numbers),
                attempts_left: Some(left),
                score_delta: Some(delta),
                total_score: Some(delta),
            }
        }),
    ]
}

proptest! {
    #[test]
    fn buffer_never_exceeds_four_slots(ops in prop::collection::vec(key_strategy(), 0..64)) {
        let mut buffer = GuessBuffer::new();
        for op in ops {
            let before = buffer.filled();
            match op {
                KeyOp::Append(c) => {
                    let changed = buffer.append(c);
                    prop_assert_eq!(changed, before < GUESS_LENGTH);
                }
                KeyOp::RemoveLast => {
                    let changed = buffer.remove_last();
                    prop_assert_eq!(changed, before > 0);
                }
                KeyOp::Reset => {
                    buffer.reset();
                    prop_assert_eq!(buffer.slots(), &[None; GUESS_LENGTH]);
                }
            }
            prop_assert!(buffer.filled() <= GUESS_LENGTH);
            prop_assert_eq!(buffer.is_complete(), buffer.filled() == GUESS_LENGTH);
        }
    }

    #[test]
    fn buffer_fills_left_to_right(symbols in prop::collection::vec(prop::char::range('0', '9'), 0..10)) {
        let mut buffer = GuessBuffer::new();
        for &c in &symbols {
            buffer.append(c);
        }
        let filled = buffer.filled();
        prop_assert_eq!(filled, symbols.len().min(GUESS_LENGTH));
        for (i, slot) in buffer.slots().iter().enumerate() {
            if i < filled {
                prop_assert_eq!(*slot, Some(symbols[i]));
            } else {
                prop_assert_eq!(*slot, None);
            }
        }
    }

    #[test]
    fn ledger_preserves_submission_order(guesses in prop::collection::vec("[0-9]{4}", 0..20)) {
        let mut ledger = AttemptLedger::new();
        for guess in &guesses {
            ledger.append(Attempt::new(guess.clone(), 0, 0, None));
        }
        prop_assert_eq!(ledger.len(), guesses.len());
        let recorded: Vec<&String> = ledger.attempts().iter().map(|a| a.guess()).collect();
        prop_assert_eq!(recorded, guesses.iter().collect::<Vec<_>>());
    }

    #[test]
    fn terminal_status_is_final(
        difficulty in difficulty_strategy(),
        outcomes in prop::collection::vec(outcome_strategy(), 1..16),
    ) {
        let mut game = ActiveGame::new(
            SessionId::Numeric(1),
            difficulty,
            difficulty.attempt_budget(),
            0,
        );
        let mut applied = 0usize;
        for outcome in outcomes {
            let was_over = game.status().is_over();
            for c in ['1', '2', '3', '0'] {
                game.press_symbol(c);
            }
            game.apply_submit("1230".to_string(), outcome);

            if was_over {
                prop_assert!(game.status().is_over());
            } else {
                applied += 1;
            }
            prop_assert_eq!(game.ledger().len(), applied);
            if game.status().is_over() {
                prop_assert_eq!(*game.session().attempts_left(), 0);
                prop_assert!(game.prepare_submit().is_err());
                prop_assert!(game.prepare_hint().is_err());
                prop_assert!(game.buffer().is_empty());
            } else {
                prop_assert_eq!(game.status(), GameStatus::Playing);
                prop_assert!(game.buffer().is_empty());
            }
        }
    }
}
