/// Property-based tests for the quiz controller
///
/// Random sequences of answers and navigation must never leave the
/// stage range or corrupt fields that were not touched.
use eatnow::quiz::{Answer, Budget, Field, QuizFlow, Social, Step, Vibe};
use proptest::prelude::*;

fn any_answer() -> impl Strategy<Value = Answer> {
    prop_oneof![
        any::<f64>().prop_map(Answer::Hunger),
        prop::sample::select(Budget::ALL.to_vec()).prop_map(Answer::Budget),
        any::<f64>().prop_map(Answer::Healthiness),
        any::<f64>().prop_map(Answer::Temperature),
        any::<u8>().prop_map(Answer::Spice),
        prop::sample::select(Social::ALL.to_vec()).prop_map(Answer::Social),
        prop::sample::select(Vibe::ALL.to_vec()).prop_map(Answer::Vibe),
    ]
}

#[derive(Debug, Clone)]
enum Action {
    Start,
    Advance,
    Set(Answer),
    Restart,
}

fn any_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        1 => Just(Action::Start),
        4 => Just(Action::Advance),
        4 => any_answer().prop_map(Action::Set),
        1 => Just(Action::Restart),
    ]
}

proptest! {
    #[test]
    fn prop_step_stays_in_range(actions in prop::collection::vec(any_action(), 0..60)) {
        let mut flow = QuizFlow::new();
        for action in actions {
            let before = flow.step();
            match action {
                Action::Start => { let _ = flow.start(); }
                Action::Advance => {
                    let ok = flow.advance().is_ok();
                    // Never skips a stage
                    prop_assert!(flow.step().index() <= before.index() + 1);
                    if !ok {
                        prop_assert_eq!(flow.step(), before);
                    }
                }
                Action::Set(answer) => {
                    flow.set_answer(answer);
                    prop_assert_eq!(flow.step(), before);
                }
                Action::Restart => {
                    flow.restart();
                    prop_assert_eq!(flow.step(), Step::Landing);
                }
            }
            prop_assert!(flow.step().index() <= Step::Results.index());
        }
    }

    #[test]
    fn prop_set_answer_touches_one_field(answer in any_answer()) {
        let mut flow = QuizFlow::new();
        let before = flow.answers().clone();
        flow.set_answer(answer);
        let after = flow.answers();

        for field in Field::ALL {
            if field != answer.field() {
                prop_assert_eq!(before.get(field), after.get(field));
            }
        }
    }

    #[test]
    fn prop_stored_values_stay_in_domain(answer in any_answer()) {
        let mut flow = QuizFlow::new();
        flow.set_answer(answer);
        let answers = flow.answers();

        for value in [answers.hunger, answers.healthiness, answers.temperature].into_iter().flatten() {
            prop_assert!(value.is_finite());
            prop_assert!((0.0..=100.0).contains(&value));
        }
        prop_assert!(answers.spice.is_some_and(|s| s <= 5));
    }

    #[test]
    fn prop_restart_restores_defaults(answers in prop::collection::vec(any_answer(), 0..10)) {
        let mut flow = QuizFlow::new();
        let _ = flow.start();
        for answer in answers {
            flow.set_answer(answer);
        }
        flow.restart();
        let fresh = QuizFlow::new();
        prop_assert_eq!(flow.step(), Step::Landing);
        prop_assert_eq!(flow.answers(), fresh.answers());
    }
}
