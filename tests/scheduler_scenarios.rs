// tests/scheduler_scenarios.rs

use dagsim::dag::{Dispatch, TaskStatus};
use dagsim::errors::DagsimError;
use dagsim::types::WorkerId;
use dagsim_test_utils::builders::{diamond, linear_chain, GraphBuilder};
use dagsim_test_utils::init_tracing;

fn on(task: &str, worker: usize) -> Dispatch {
    Dispatch {
        task: task.to_string(),
        worker: WorkerId(worker),
    }
}

#[test]
fn linear_chain_runs_one_task_at_a_time() {
    init_tracing();
    let mut s = linear_chain().scheduler(1);

    // Dependency-free task is dispatched at run start.
    assert_eq!(s.status_of("A"), Some(TaskStatus::Running));
    assert_eq!(s.task("A").unwrap().started_at, Some(0.0));
    assert_eq!(s.status_of("B"), Some(TaskStatus::Pending));

    let r1 = s.step(50.0);
    assert!(r1.is_quiet());
    assert_eq!(s.status_of("A"), Some(TaskStatus::Running));
    assert_eq!(s.task("A").unwrap().progress, 50.0);

    let r2 = s.step(50.0);
    assert_eq!(r2.completed, vec!["A"]);
    assert_eq!(r2.promoted, vec!["B"]);
    assert_eq!(r2.dispatched, vec![on("B", 0)]);
    assert_eq!(s.task("A").unwrap().finished_at, Some(100.0));
    assert_eq!(s.task("A").unwrap().progress, 100.0);
    let b = s.task("B").unwrap();
    assert_eq!(b.status, TaskStatus::Running);
    assert_eq!(b.progress, 0.0);
    assert_eq!(b.started_at, Some(100.0));

    s.step(50.0);
    let r4 = s.step(50.0);
    assert_eq!(r4.completed, vec!["B"]);
    assert_eq!(r4.dispatched, vec![on("C", 0)]);

    s.step(50.0);
    let r6 = s.step(50.0);
    assert_eq!(r6.completed, vec!["C"]);
    assert!(r6.run_just_completed);
    assert!(s.is_complete());
    assert_eq!(s.clock(), 300.0);
    assert_eq!(s.stats().completed_count, 3);
}

#[test]
fn diamond_with_two_workers_runs_branches_in_parallel() {
    let mut s = diamond().scheduler(2);

    s.step(50.0);
    let r = s.step(50.0);
    assert_eq!(r.completed, vec!["A"]);
    assert_eq!(r.promoted, vec!["B", "C"]);
    assert_eq!(r.dispatched, vec![on("B", 0), on("C", 1)]);
    assert_eq!(s.status_of("D"), Some(TaskStatus::Pending));
    assert_eq!(s.stats().worker_utilization, 100.0);

    let r = s.step(50.0);
    assert_eq!(r.completed, vec!["B", "C"]);
    assert_eq!(r.promoted, vec!["D"]);
    assert_eq!(s.task("D").unwrap().started_at, Some(150.0));

    let r = s.step(50.0);
    assert_eq!(r.completed, vec!["D"]);
    assert!(r.run_just_completed);
    assert_eq!(s.task("D").unwrap().finished_at, Some(200.0));
}

#[test]
fn diamond_with_one_worker_serialises_branches() {
    let mut s = diamond().scheduler(1);

    s.step(50.0);
    let r = s.step(50.0);
    assert_eq!(r.promoted, vec!["B", "C"]);
    assert_eq!(r.dispatched, vec![on("B", 0)]);
    assert_eq!(s.status_of("C"), Some(TaskStatus::Ready));
    assert_eq!(s.stats().ready_count, 1);

    let r = s.step(50.0);
    assert_eq!(r.completed, vec!["B"]);
    assert_eq!(r.dispatched, vec![on("C", 0)]);
    // D still waits on C.
    assert_eq!(s.status_of("D"), Some(TaskStatus::Pending));

    let r = s.step(50.0);
    assert_eq!(r.completed, vec!["C"]);
    assert_eq!(r.dispatched, vec![on("D", 0)]);

    // A + B + C, not A + max(B, C).
    assert_eq!(s.task("D").unwrap().started_at, Some(200.0));

    s.step(50.0);
    assert!(s.is_complete());
}

#[test]
fn ready_tasks_wait_in_construction_order() {
    let mut s = GraphBuilder::new()
        .task("x", 30.0, &[])
        .task("y", 10.0, &[])
        .task("z", 10.0, &[])
        .scheduler(1);

    assert_eq!(s.status_of("x"), Some(TaskStatus::Running));
    assert_eq!(s.status_of("y"), Some(TaskStatus::Ready));
    assert_eq!(s.status_of("z"), Some(TaskStatus::Ready));

    let r = s.step(30.0);
    assert_eq!(r.dispatched, vec![on("y", 0)]);
    let r = s.step(10.0);
    assert_eq!(r.dispatched, vec![on("z", 0)]);
}

#[test]
fn overshooting_delta_records_finish_at_step_end() {
    let mut s = GraphBuilder::new().task("only", 30.0, &[]).scheduler(1);

    let r = s.step(100.0);
    assert_eq!(r.completed, vec!["only"]);
    assert_eq!(s.task("only").unwrap().finished_at, Some(100.0));
}

#[test]
fn zero_delta_on_running_run_changes_nothing() {
    let mut s = diamond().scheduler(2);
    s.step(20.0);
    let before = s.snapshot();

    let r = s.step(0.0);
    assert!(r.is_quiet());
    assert_eq!(s.snapshot(), before);
}

#[test]
fn completed_run_ignores_further_positive_steps() {
    let mut s = linear_chain().scheduler(3);
    let steps = s.run_to_completion(50.0, 100).unwrap();
    assert_eq!(steps, 6);

    let before = s.snapshot();
    let r = s.step(50.0);
    assert!(r.is_quiet());
    assert!(!r.run_just_completed);
    assert_eq!(s.snapshot(), before);
}

#[test]
fn zero_worker_run_hits_step_limit() {
    let mut s = linear_chain().scheduler(0);
    assert_eq!(s.stats().worker_utilization, 0.0);
    assert_eq!(s.stats().ready_count, 1);

    match s.run_to_completion(50.0, 10) {
        Err(DagsimError::StepLimitExceeded(10)) => {}
        other => panic!("expected StepLimitExceeded, got {other:?}"),
    }
    assert_eq!(s.stats().completed_count, 0);
}

#[test]
fn reset_starts_a_fresh_run() {
    let mut s = diamond().scheduler(2);
    s.run_to_completion(25.0, 100).unwrap();
    assert_eq!(s.run_id(), 0);

    s.reset();
    assert_eq!(s.run_id(), 1);
    assert_eq!(s.clock(), 0.0);
    assert!(!s.is_complete());
    assert_eq!(s.status_of("A"), Some(TaskStatus::Running));
    assert_eq!(s.status_of("D"), Some(TaskStatus::Pending));
    assert!(s.task("D").unwrap().finished_at.is_none());
    assert_eq!(s.workers()[1].current_task, None);
}

#[test]
fn with_workers_builds_a_new_run_of_the_same_graph() {
    let mut s = diamond().scheduler(1);
    s.step(150.0);

    let s = s.with_workers(3);
    assert_eq!(s.worker_count(), 3);
    assert_eq!(s.clock(), 0.0);
    assert_eq!(s.run_id(), 1);
    assert_eq!(s.stats().running_count, 1);
    assert_eq!(s.graph().len(), 4);
}

#[test]
fn stats_track_counts_and_elapsed_time() {
    let mut s = diamond().scheduler(4);
    let st = s.stats();
    assert_eq!(st.total_tasks, 4);
    assert_eq!(st.pending_count, 3);
    assert_eq!(st.running_count, 1);
    assert_eq!(st.total_workers, 4);
    assert_eq!(st.worker_utilization, 25.0);

    s.step(100.0);
    let st = s.stats();
    assert_eq!(st.completed_count, 1);
    assert_eq!(st.running_count, 2);
    assert_eq!(st.elapsed_time, 100.0);
    assert_eq!(st.worker_utilization, 50.0);
}

#[test]
fn empty_graph_is_complete_from_the_start() {
    let mut s = GraphBuilder::new().scheduler(2);
    assert!(s.is_complete());
    assert_eq!(s.run_to_completion(10.0, 1).unwrap(), 0);
    assert!(s.step(10.0).is_quiet());
}
