// tests/error_handling.rs

use std::io::Write;

use tempfile::NamedTempFile;

use dagsim::config::load_and_validate;
use dagsim::dag::{TaskNode, TaskSpec, WorkerPool};
use dagsim::errors::{DagsimError, GraphError};
use dagsim::types::WorkerId;
use dagsim_test_utils::builders::{diamond, linear_chain};

fn config_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn dag_cycle_returns_structured_error() {
    let file = config_file(
        r#"
[[task]]
id = "A"
duration = 10
after = ["B"]

[[task]]
id = "B"
duration = 10
after = ["A"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(DagsimError::InvalidGraph(GraphError::Cycle(task))) => {
            assert!(task == "A" || task == "B");
        }
        Err(e) => panic!("Expected cycle error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn unknown_dependency_returns_graph_error() {
    let file = config_file(
        r#"
[[task]]
id = "A"
duration = 10
after = ["NonExistent"]
"#,
    );

    match load_and_validate(file.path()) {
        Err(e @ DagsimError::InvalidGraph(GraphError::UnknownDependency { .. })) => {
            let msg = e.to_string();
            assert!(msg.contains("unknown dependency"));
            assert!(msg.contains("NonExistent"));
        }
        Err(e) => panic!("Expected UnknownDependency, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn missing_tasks_is_a_config_error() {
    let file = config_file("[config]\nworkers = 2\n");

    match load_and_validate(file.path()) {
        Err(DagsimError::ConfigError(msg)) => assert!(msg.contains("at least one")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn zero_workers_is_a_config_error() {
    let file = config_file(
        r#"
[config]
workers = 0

[[task]]
id = "A"
duration = 10
"#,
    );

    match load_and_validate(file.path()) {
        Err(DagsimError::ConfigError(msg)) => assert!(msg.contains("workers")),
        other => panic!("Expected ConfigError, got: {:?}", other.map(|_| ())),
    }
}

#[test]
fn malformed_toml_is_a_toml_error() {
    let file = config_file("[[task]\nid = ");
    assert!(matches!(
        load_and_validate(file.path()),
        Err(DagsimError::TomlError(_))
    ));
}

#[test]
fn missing_file_is_an_io_error() {
    assert!(matches!(
        load_and_validate("/definitely/not/here/Dagsim.toml"),
        Err(DagsimError::IoError(_))
    ));
}

#[test]
fn negative_delta_is_rejected_by_try_step() {
    let mut s = diamond().scheduler(2);
    s.step(10.0);
    let before = s.snapshot();

    assert!(matches!(s.try_step(-1.0), Err(DagsimError::InvalidStep(_))));
    assert!(matches!(s.try_step(f64::NAN), Err(DagsimError::InvalidStep(_))));
    assert_eq!(s.snapshot(), before);
}

#[test]
#[should_panic(expected = "Invalid step")]
fn negative_delta_panics_in_step() {
    let mut s = diamond().scheduler(2);
    s.step(-5.0);
}

#[test]
fn zero_delta_on_completed_run_is_rejected() {
    let mut s = linear_chain().scheduler(1);
    s.run_to_completion(100.0, 10).unwrap();

    match s.try_step(0.0) {
        Err(DagsimError::InvalidStep(msg)) => assert!(msg.contains("completed")),
        other => panic!("expected InvalidStep, got {other:?}"),
    }
}

#[test]
fn run_to_completion_needs_positive_delta() {
    let mut s = linear_chain().scheduler(1);
    assert!(matches!(
        s.run_to_completion(0.0, 10),
        Err(DagsimError::InvalidStep(_))
    ));
}

fn ready_node(id: &str) -> TaskNode {
    let s = dagsim::dag::Scheduler::new(
        dagsim::dag::TaskGraph::new(vec![TaskSpec::new(id, 10.0)]).unwrap(),
        0,
    );
    s.task(id).unwrap().clone()
}

#[test]
#[should_panic(expected = "busy")]
fn assigning_to_a_busy_worker_panics() {
    let mut pool = WorkerPool::new(1);
    let mut first = ready_node("first");
    let mut second = ready_node("second");

    pool.assign(WorkerId(0), &mut first, 0.0);
    pool.assign(WorkerId(0), &mut second, 0.0);
}

#[test]
#[should_panic(expected = "expected Ready")]
fn assigning_a_running_task_panics() {
    let mut pool = WorkerPool::new(2);
    let mut task = ready_node("t");

    pool.assign(WorkerId(0), &mut task, 0.0);
    pool.assign(WorkerId(1), &mut task, 0.0);
}

#[test]
fn release_frees_the_worker() {
    let mut pool = WorkerPool::new(2);
    let mut task = ready_node("t");

    pool.assign(WorkerId(1), &mut task, 5.0);
    assert_eq!(pool.idle_workers(), vec![WorkerId(0)]);
    assert_eq!(task.started_at, Some(5.0));
    assert_eq!(task.assigned_worker, Some(WorkerId(1)));

    assert_eq!(pool.release(WorkerId(1)), Some("t".to_string()));
    assert_eq!(pool.idle_workers(), vec![WorkerId(0), WorkerId(1)]);
    assert_eq!(pool.release(WorkerId(1)), None);
}
