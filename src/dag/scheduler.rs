// src/dag/scheduler.rs

use tracing::{debug, info, warn};

use crate::dag::graph::TaskGraph;
use crate::dag::readiness::ReadinessEvaluator;
use crate::dag::scheduler_step::{Dispatch, StepReport};
use crate::dag::stats::{RunSnapshot, Statistics};
use crate::dag::task_info::{TaskNode, TaskStatus};
use crate::dag::workers::{Worker, WorkerPool};
use crate::errors::{DagsimError, Result};
use crate::types::{SimTime, TaskId};

/// Scheduler holds the immutable DAG plus the mutable state of one run.
///
/// It is responsible for:
/// - advancing the simulated clock and the progress of running tasks
/// - completing tasks whose duration has elapsed and freeing their workers
/// - promoting tasks to `Ready` once all dependencies are `Done`
/// - greedily handing ready tasks to idle workers, first-ready-first-served
///
/// All mutation goes through [`Scheduler::step`] (or [`Scheduler::reset`]);
/// callers must not invoke steps concurrently.
#[derive(Debug, Clone)]
pub struct Scheduler {
    graph: TaskGraph,
    /// Indexed in graph construction order.
    tasks: Vec<TaskNode>,
    workers: WorkerPool,
    clock: SimTime,
    /// Monotonically increasing run ID; bumped on every reset.
    run_counter: u64,
}

impl Scheduler {
    /// Start a fresh run of `graph` on `workers` execution slots.
    ///
    /// Dependency-free tasks become `Ready` immediately and are dispatched at
    /// clock zero, so the first step already advances their progress.
    pub fn new(graph: TaskGraph, workers: usize) -> Self {
        let tasks = graph.all_tasks().map(TaskNode::from_spec).collect();
        let mut scheduler = Self {
            graph,
            tasks,
            workers: WorkerPool::new(workers),
            clock: 0.0,
            run_counter: 0,
        };
        scheduler.start_run();
        scheduler
    }

    /// Same graph, different worker count. Always a fresh run.
    pub fn with_workers(self, workers: usize) -> Self {
        let mut next = Self::new(self.graph, workers);
        next.run_counter = self.run_counter + 1;
        next
    }

    /// Discard the current run state and start over on the same graph.
    pub fn reset(&mut self) {
        self.run_counter += 1;
        self.start_run();
    }

    pub fn graph(&self) -> &TaskGraph {
        &self.graph
    }

    pub fn tasks(&self) -> &[TaskNode] {
        &self.tasks
    }

    pub fn task(&self, id: &str) -> Option<&TaskNode> {
        self.graph.index_of(id).map(|i| &self.tasks[i])
    }

    pub fn status_of(&self, id: &str) -> Option<TaskStatus> {
        self.task(id).map(|t| t.status)
    }

    pub fn workers(&self) -> &[Worker] {
        self.workers.workers()
    }

    pub fn worker_count(&self) -> usize {
        self.workers.len()
    }

    pub fn clock(&self) -> SimTime {
        self.clock
    }

    pub fn run_id(&self) -> u64 {
        self.run_counter
    }

    /// Whether every task has reached `Done`.
    pub fn is_complete(&self) -> bool {
        self.tasks.iter().all(TaskNode::is_done)
    }

    pub fn stats(&self) -> Statistics {
        Statistics::collect(&self.tasks, self.workers.workers(), self.clock)
    }

    pub fn snapshot(&self) -> RunSnapshot {
        RunSnapshot {
            run_id: self.run_counter,
            clock: self.clock,
            complete: self.is_complete(),
            tasks: self.tasks.clone(),
            workers: self.workers.workers().to_vec(),
            stats: self.stats(),
        }
    }

    /// Advance the simulation by `delta`.
    ///
    /// # Panics
    ///
    /// On a negative or non-finite `delta`, or a zero `delta` on a completed
    /// run. Simulated time must be monotonic; see [`Scheduler::try_step`]
    /// for the non-panicking variant.
    pub fn step(&mut self, delta: SimTime) -> StepReport {
        match self.try_step(delta) {
            Ok(report) => report,
            Err(e) => panic!("{e}"),
        }
    }

    /// Advance the simulation by `delta`, rejecting invalid deltas.
    ///
    /// A positive `delta` on a completed run is accepted and changes
    /// nothing, not even the clock.
    pub fn try_step(&mut self, delta: SimTime) -> Result<StepReport> {
        if !delta.is_finite() || delta < 0.0 {
            return Err(DagsimError::InvalidStep(format!(
                "delta must be finite and >= 0 (got {delta})"
            )));
        }

        if self.is_complete() {
            if delta == 0.0 {
                return Err(DagsimError::InvalidStep(
                    "zero delta on a completed run".to_string(),
                ));
            }
            return Ok(StepReport {
                clock: self.clock,
                ..StepReport::default()
            });
        }

        let now = self.clock + delta;
        let completed = self.advance_running(now);
        self.clock = now;

        let promoted = ReadinessEvaluator::new(&self.graph, &mut self.tasks).update_readiness();
        let dispatched = self.dispatch();

        let run_just_completed = self.is_complete();
        if run_just_completed {
            info!(
                run_id = self.run_counter,
                clock = self.clock,
                "scheduler: all tasks done; run complete"
            );
        }

        Ok(StepReport {
            clock: self.clock,
            completed,
            promoted,
            dispatched,
            run_just_completed,
        })
    }

    /// Step with a fixed `delta` until the run completes.
    ///
    /// Returns the number of steps taken, or
    /// [`DagsimError::StepLimitExceeded`] if `max_steps` was not enough
    /// (e.g. a pool with zero workers).
    pub fn run_to_completion(&mut self, delta: SimTime, max_steps: usize) -> Result<usize> {
        if !delta.is_finite() || delta <= 0.0 {
            return Err(DagsimError::InvalidStep(format!(
                "run_to_completion needs a positive delta (got {delta})"
            )));
        }

        let mut steps = 0;
        while !self.is_complete() {
            if steps == max_steps {
                return Err(DagsimError::StepLimitExceeded(max_steps));
            }
            self.try_step(delta)?;
            steps += 1;
        }
        Ok(steps)
    }

    /// Reset every task, empty the workers, zero the clock and dispatch the
    /// initial ready set.
    fn start_run(&mut self) {
        for task in &mut self.tasks {
            task.status = TaskStatus::Pending;
            task.assigned_worker = None;
            task.started_at = None;
            task.finished_at = None;
            task.progress = 0.0;
        }
        self.workers.clear();
        self.clock = 0.0;

        if self.workers.is_empty() && !self.tasks.is_empty() {
            warn!("scheduler: run has no workers; tasks will never start");
        }

        let ready = ReadinessEvaluator::new(&self.graph, &mut self.tasks).update_readiness();
        let dispatched = self.dispatch();

        info!(
            run_id = self.run_counter,
            tasks = self.tasks.len(),
            workers = self.workers.len(),
            ready = ready.len(),
            dispatched = dispatched.len(),
            "scheduler: starting new run"
        );
    }

    /// Update progress of every running task as of `now`, completing those
    /// whose duration has elapsed. Returns the completed ids in construction
    /// order.
    fn advance_running(&mut self, now: SimTime) -> Vec<TaskId> {
        let mut completed = Vec::new();

        for task in self.tasks.iter_mut().filter(|t| t.is_running()) {
            let started = task.started_at.unwrap_or(now);
            let elapsed = now - started;

            if elapsed >= task.duration {
                task.progress = 100.0;
                task.status = TaskStatus::Done;
                task.finished_at = Some(now);
                if let Some(worker) = task.assigned_worker.take() {
                    self.workers.release(worker);
                }
                debug!(task = %task.id, at = now, "task finished");
                completed.push(task.id.clone());
            } else {
                task.progress = (100.0 * elapsed / task.duration).min(100.0);
            }
        }

        completed
    }

    /// Hand ready tasks to idle workers until one side runs out.
    fn dispatch(&mut self) -> Vec<Dispatch> {
        let mut dispatched = Vec::new();
        let mut ready = self
            .tasks
            .iter()
            .enumerate()
            .filter(|(_, t)| t.status == TaskStatus::Ready)
            .map(|(i, _)| i)
            .collect::<Vec<_>>()
            .into_iter();

        for worker in self.workers.idle_workers() {
            let Some(i) = ready.next() else {
                break;
            };
            let task = &mut self.tasks[i];
            self.workers.assign(worker, task, self.clock);
            dispatched.push(Dispatch {
                task: task.id.clone(),
                worker,
            });
        }

        dispatched
    }
}
