// tests/graph_validation.rs

use dagsim::dag::{TaskGraph, TaskSpec};
use dagsim::errors::GraphError;
use dagsim_test_utils::builders::{diamond, GraphBuilder};

#[test]
fn dependencies_and_dependents_are_queryable() {
    let g = diamond().build();

    assert_eq!(g.dependencies_of("D"), ["B".to_string(), "C".to_string()]);
    assert!(g.dependencies_of("A").is_empty());
    assert!(g.dependencies_of("missing").is_empty());
    assert_eq!(g.dependents_of("A"), vec!["B", "C"]);
    assert!(g.dependents_of("D").is_empty());
}

#[test]
fn all_tasks_keeps_construction_order() {
    let g = GraphBuilder::new()
        .task("zeta", 1.0, &[])
        .task("alpha", 1.0, &["zeta"])
        .task("mid", 1.0, &[])
        .build();

    let ids: Vec<_> = g.all_tasks().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["zeta", "alpha", "mid"]);
    assert_eq!(g.index_of("mid"), Some(2));
}

#[test]
fn topological_order_respects_dependencies() {
    let g = diamond().build();
    let order = g.topological_order();
    let pos = |id: &str| order.iter().position(|x| *x == id).unwrap();

    assert_eq!(order.len(), 4);
    assert!(pos("A") < pos("B"));
    assert!(pos("A") < pos("C"));
    assert!(pos("B") < pos("D"));
    assert!(pos("C") < pos("D"));
}

#[test]
fn repeated_dependency_is_collapsed() {
    let g = GraphBuilder::new()
        .task("A", 1.0, &[])
        .task("B", 1.0, &["A", "A"])
        .build();
    assert_eq!(g.dependents_of("A"), vec!["B"]);
    assert_eq!(g.dependencies_of("B"), ["A".to_string()]);
}

#[test]
fn repeated_dependency_appears_once_on_the_run_view() {
    let scheduler = GraphBuilder::new()
        .task("A", 1.0, &[])
        .task("B", 1.0, &["A", "A"])
        .scheduler(1);
    assert_eq!(scheduler.task("B").unwrap().dependencies, vec!["A"]);
}

#[test]
fn unknown_dependency_is_rejected() {
    let err = TaskGraph::new(vec![TaskSpec::new("A", 1.0).after("ghost")]).unwrap_err();
    assert_eq!(
        err,
        GraphError::UnknownDependency {
            task: "A".to_string(),
            dependency: "ghost".to_string(),
        }
    );
}

#[test]
fn duplicate_ids_are_rejected() {
    let err = TaskGraph::new(vec![TaskSpec::new("A", 1.0), TaskSpec::new("A", 2.0)]).unwrap_err();
    assert_eq!(err, GraphError::DuplicateTask("A".to_string()));
}

#[test]
fn self_dependency_is_rejected() {
    let err = TaskGraph::new(vec![TaskSpec::new("A", 1.0).after("A")]).unwrap_err();
    assert_eq!(err, GraphError::SelfDependency("A".to_string()));
}

#[test]
fn non_positive_or_non_finite_durations_are_rejected() {
    for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
        let err = TaskGraph::new(vec![TaskSpec::new("A", bad)]).unwrap_err();
        assert!(
            matches!(err, GraphError::InvalidDuration { ref task, .. } if task == "A"),
            "duration {bad} gave {err:?}"
        );
    }
}

#[test]
fn cycles_are_rejected() {
    let err = TaskGraph::new(vec![
        TaskSpec::new("A", 1.0).after("C"),
        TaskSpec::new("B", 1.0).after("A"),
        TaskSpec::new("C", 1.0).after("B"),
        TaskSpec::new("D", 1.0),
    ])
    .unwrap_err();

    assert!(err.to_string().contains("cycle detected"));
    match err {
        GraphError::Cycle(task) => assert!(["A", "B", "C"].contains(&task.as_str())),
        other => panic!("expected Cycle, got {other:?}"),
    }
}

#[test]
fn demo_graph_is_valid() {
    let g = dagsim::demo::demo_graph().unwrap();
    assert_eq!(g.len(), dagsim::demo::demo_specs().len());
    assert!(g.all_tasks().any(|t| t.dependencies.len() > 1));
}
