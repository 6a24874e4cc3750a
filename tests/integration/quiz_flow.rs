// Quiz controller scenarios, driven through the public API

use eatnow::quiz::{Answer, Budget, Field, FlowError, QuizFlow, Social, Step, Vibe};

#[test]
fn test_full_run_collects_every_answer() {
    let mut flow = QuizFlow::new();
    assert_eq!(flow.step(), Step::Landing);
    flow.start().unwrap();

    flow.set_answer(Answer::Hunger(85.0));
    flow.advance().unwrap();

    assert_eq!(flow.advance(), Err(FlowError::MissingAnswer(Field::Budget)));
    flow.set_answer(Answer::Budget(Budget::Balling));
    flow.advance().unwrap();

    flow.set_answer(Answer::Healthiness(20.0));
    flow.advance().unwrap();
    flow.advance().unwrap(); // temperature keeps its default
    flow.set_answer(Answer::Spice(5));
    flow.advance().unwrap();

    flow.set_answer(Answer::Social(Social::Group));
    flow.advance().unwrap();
    flow.set_answer(Answer::Vibe(Vibe::Hangover));
    flow.advance().unwrap();

    assert!(flow.is_terminal());
    let answers = flow.complete_answers().unwrap();
    assert_eq!(answers.hunger, 85.0);
    assert_eq!(answers.budget, Budget::Balling);
    assert_eq!(answers.healthiness, 20.0);
    assert_eq!(answers.temperature, 50.0);
    assert_eq!(answers.spice, 5);
    assert_eq!(answers.social, Social::Group);
    assert_eq!(answers.vibe, Vibe::Hangover);
}

#[test]
fn test_start_twice_is_rejected() {
    let mut flow = QuizFlow::new();
    flow.start().unwrap();
    assert_eq!(flow.start(), Err(FlowError::AlreadyStarted(Step::Hunger)));
    assert_eq!(flow.step(), Step::Hunger);
}

#[test]
fn test_advance_before_start_is_rejected() {
    let mut flow = QuizFlow::new();
    assert_eq!(flow.advance(), Err(FlowError::NotStarted));
}

#[test]
fn test_restart_from_results_resets_answers() {
    let mut flow = QuizFlow::new();
    flow.start().unwrap();
    flow.set_answer(Answer::Hunger(10.0));
    flow.set_answer(Answer::Budget(Budget::Broke));
    flow.restart();

    assert_eq!(flow.step(), Step::Landing);
    assert_eq!(flow.answers().hunger, Some(50.0));
    assert_eq!(flow.answers().budget, None);
}
