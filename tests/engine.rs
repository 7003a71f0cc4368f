//! Tests for driving flows through the execution engine.
mod common;
use common::*;
use flowengine::prelude::*;

#[test]
fn test_file_return_path_skips_business_details() {
    let flow = create_intake_flow();
    let mut engine = Engine::new(&flow).unwrap();

    engine.answer(Answer::text("FileReturn")).unwrap();
    assert_eq!(engine.current_step_id().unwrap(), "income_info");
    engine.answer(Answer::choices(["W2"])).unwrap();
    assert_eq!(engine.current_step_id().unwrap(), "summary");
    engine.answer(Answer::Null).unwrap();

    assert!(engine.finished());
    assert_eq!(engine.history(), ["greeting", "income_info", "summary"]);

    let expected: Answers = [
        ("greeting", Answer::text("FileReturn")),
        ("income_info", Answer::choices(["W2"])),
    ]
    .into_iter()
    .collect();
    assert_eq!(engine.answers(), &expected);
}

#[test]
fn test_business_income_visits_business_details() {
    let flow = create_intake_flow();
    let mut engine = Engine::new(&flow).unwrap();

    run_with(
        &mut engine,
        &[
            ("greeting", Answer::text("FileReturn")),
            ("income_info", Answer::choices(["W2", "Business"])),
            (
                "business_details",
                Answer::matrix([("LLC", 2), ("SCorp", 1), ("CCorp", 0)]),
            ),
        ],
    )
    .unwrap();

    assert_eq!(
        engine.history(),
        ["greeting", "income_info", "business_details", "summary"]
    );
    let details = engine.answers().get("business_details").unwrap();
    match details {
        Answer::Matrix(counts) => {
            assert_eq!(counts.get("LLC"), Some(2));
            assert_eq!(counts.get("CCorp"), Some(0));
        }
        other => panic!("Expected matrix answer, got {:?}", other),
    }
}

#[test]
fn test_unconditional_default_branch() {
    let flow = create_intake_flow();
    let mut engine = Engine::new(&flow).unwrap();
    run_with(&mut engine, &[("greeting", Answer::text("LearnMore"))]).unwrap();
    assert_eq!(engine.history(), ["greeting", "info"]);
}

#[test]
fn test_first_match_wins_when_several_predicates_hold() {
    let flow = FlowDefinition::builder("pick")
        .step(
            Step::new("pick", StepKind::MultiSelect, "Pick")
                .options(["a", "b"])
                .transition_if("took_a", Predicate::contains("pick", "a"))
                .transition_if("took_b", Predicate::contains("pick", "b"))
                .transition("default"),
        )
        .step(Step::new("took_a", StepKind::Display, "A"))
        .step(Step::new("took_b", StepKind::Display, "B"))
        .step(Step::new("default", StepKind::Display, "Default"))
        .build()
        .unwrap();

    let mut engine = Engine::new(&flow).unwrap();
    engine.answer(Answer::choices(["b", "a"])).unwrap();
    assert_eq!(engine.current_step_id().unwrap(), "took_a");
}

#[test]
fn test_no_matching_transition_finishes_at_current_step() {
    let flow = FlowDefinition::builder("q")
        .step(
            Step::new("q", StepKind::Boolean, "Continue?")
                .transition_if("next", Predicate::equals("q", true)),
        )
        .step(Step::new("next", StepKind::Display, "Next"))
        .build()
        .unwrap();

    let mut engine = Engine::new(&flow).unwrap();
    engine.answer(Answer::Bool(false)).unwrap();
    assert!(engine.finished());
    assert_eq!(engine.history(), ["q"]);
    assert_eq!(engine.answers().get("q"), Some(&Answer::Bool(false)));
}

#[test]
fn test_transition_to_unknown_step_is_fatal() {
    let flow = FlowDefinition::builder("a")
        .step(Step::new("a", StepKind::Text, "A").transition("ghost"))
        .build()
        .unwrap();

    let mut engine = Engine::new(&flow).unwrap();
    let err = engine.answer(Answer::text("hello")).unwrap_err();
    assert_eq!(
        err,
        FlowError::UnknownStep {
            step_id: "ghost".to_string(),
            referenced_from: Some("a".to_string()),
        }
    );
    assert!(engine.finished());
    assert!(matches!(
        engine.answer(Answer::text("again")),
        Err(FlowError::InvalidState(_))
    ));
}

#[test]
fn test_answer_on_finished_engine_is_invalid_state() {
    let flow = create_intake_flow();
    let mut engine = Engine::new(&flow).unwrap();
    run_with(&mut engine, &[("greeting", Answer::text("LearnMore"))]).unwrap();

    let err = engine.answer(Answer::Null).unwrap_err();
    assert!(matches!(err, FlowError::InvalidState(_)));
    assert!(err.to_string().contains("already finished"));
}

#[test]
fn test_valid_flows_never_hit_unknown_steps() {
    let flow = create_intake_flow();
    assert!(validate(&flow).is_empty());

    let scripts: Vec<Vec<(&str, Answer)>> = vec![
        vec![("greeting", Answer::text("FileReturn")), ("income_info", Answer::choices(["1099"]))],
        vec![
            ("greeting", Answer::text("FileReturn")),
            ("income_info", Answer::choices(["Business"])),
            ("business_details", Answer::matrix([("LLC", 1)])),
        ],
        vec![("greeting", Answer::text("GetEstimate")), ("estimate", Answer::text("simple"))],
        vec![("greeting", Answer::text("LearnMore"))],
    ];

    let mut visited = std::collections::HashSet::new();
    for script in &scripts {
        let mut engine = Engine::new(&flow).unwrap();
        run_with(&mut engine, script).expect("run should complete");
        visited.extend(engine.history().iter().cloned());
    }
    for id in flow.step_ids() {
        assert!(visited.contains(id), "step '{}' was never visited", id);
    }
}

#[test]
fn test_definition_is_shared_by_concurrent_runs() {
    let flow = create_intake_flow();
    std::thread::scope(|scope| {
        let handles: Vec<_> = ["FileReturn", "LearnMore"]
            .into_iter()
            .map(|choice| {
                let flow = &flow;
                scope.spawn(move || {
                    let mut engine = Engine::new(flow).unwrap();
                    run_with(
                        &mut engine,
                        &[
                            ("greeting", Answer::text(choice)),
                            ("income_info", Answer::choices(["W2"])),
                        ],
                    )
                    .unwrap();
                    engine.history().len()
                })
            })
            .collect();
        let lengths: Vec<usize> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        assert_eq!(lengths, vec![3, 2]);
    });
}

#[test]
fn test_visited_display_step_has_no_answer_to_match() {
    let flow = FlowDefinition::builder("notice")
        .step(
            Step::new("notice", StepKind::Display, "Read this first.")
                .transition_if("seen", Predicate::equals("notice", Answer::Null))
                .transition("fallback"),
        )
        .step(Step::new("seen", StepKind::Display, "Seen"))
        .step(Step::new("fallback", StepKind::Display, "Fallback"))
        .build()
        .unwrap();

    let mut engine = Engine::new(&flow).unwrap();
    engine.answer(Answer::Null).unwrap();

    assert_eq!(engine.current_step_id().unwrap(), "fallback");
    assert_eq!(engine.history(), ["notice"]);
    assert!(!engine.answers().contains("notice"));
}
