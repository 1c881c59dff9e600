//! `JobQueue` — time-ordered queue of periodic nurse jobs.
//!
//! Every nurse owns two periodic jobs.  When a job runs, the driver pushes
//! its next occurrence one period later, so the queue only ever holds about
//! `2 × nurse_count` entries.  `BTreeMap` keeps ticks ordered; jobs sharing a
//! tick run in insertion order, which keeps a run reproducible for a given
//! seed.

use std::collections::BTreeMap;

use ns_core::{AgentId, Tick};

/// Which periodic job to run.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum JobKind {
    /// Fast clock: task reconciliation, movement, proximity scan.
    Movement,
    /// Slow clock: countdown and hot chocolate consumption.
    Survival,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Job {
    pub agent: AgentId,
    pub kind:  JobKind,
}

impl Job {
    #[inline]
    pub fn movement(agent: AgentId) -> Self {
        Self { agent, kind: JobKind::Movement }
    }

    #[inline]
    pub fn survival(agent: AgentId) -> Self {
        Self { agent, kind: JobKind::Survival }
    }
}

/// A priority queue mapping simulation ticks → jobs due at that tick.
#[derive(Default, Debug)]
pub struct JobQueue {
    inner: BTreeMap<Tick, Vec<Job>>,
    /// Cached total job count for O(1) `len()`.
    total: usize,
}

impl JobQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `job` at `tick`.
    pub fn push(&mut self, tick: Tick, job: Job) {
        self.inner.entry(tick).or_default().push(job);
        self.total += 1;
    }

    /// Remove and return the earliest tick together with all of its jobs.
    pub fn pop_next(&mut self) -> Option<(Tick, Vec<Job>)> {
        let (tick, jobs) = self.inner.pop_first()?;
        self.total -= jobs.len();
        Some((tick, jobs))
    }

    /// The earliest tick with at least one queued job, or `None` if empty.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    /// Total number of queued jobs across all future ticks.
    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of distinct future ticks that have at least one queued job.
    pub fn tick_count(&self) -> usize {
        self.inner.len()
    }
}
