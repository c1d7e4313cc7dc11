use std::process::Child;

/// Upper bound on concurrently tracked background jobs.
pub const MAX_JOBS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Running,
    Completed,
}

#[derive(Debug)]
pub struct Job {
    child: Child,
    line: String,
    state: JobState,
}

impl Job {
    pub fn pid(&self) -> u32 {
        self.child.id()
    }

    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn state(&self) -> JobState {
        self.state
    }
}

/// A background job whose process has exited, handed back to the caller
/// for reporting when it is reaped out of the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FinishedJob {
    pub pid: u32,
    pub line: String,
}

/// Bounded record of background processes. Single-threaded: the shell
/// loop reaps, dispatches, and inserts strictly in program order.
#[derive(Debug)]
pub struct JobTable {
    jobs: Vec<Job>,
    capacity: usize,
}

impl Default for JobTable {
    fn default() -> Self {
        Self::new()
    }
}

impl JobTable {
    pub fn new() -> Self {
        Self::with_capacity(MAX_JOBS)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            jobs: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Take ownership of a freshly spawned background child. When the
    /// table is full the child is handed back untracked; it keeps
    /// running, but this shell no longer has a record of it.
    pub fn track(&mut self, child: Child, line: &str) -> Result<(), Child> {
        if self.jobs.len() >= self.capacity {
            return Err(child);
        }
        self.jobs.push(Job {
            child,
            line: line.to_owned(),
            state: JobState::Running,
        });
        Ok(())
    }

    /// Non-blocking sweep over every Running job. Exited jobs transition
    /// to Completed, are compacted out of the table, and are returned so
    /// the caller can report them. Called once per input line.
    pub fn reap(&mut self) -> Vec<FinishedJob> {
        for job in &mut self.jobs {
            if job.state == JobState::Running {
                match job.child.try_wait() {
                    Ok(Some(_status)) => job.state = JobState::Completed,
                    Ok(None) => {}
                    // the process is gone in a way we cannot query;
                    // stop tracking it rather than retrying forever
                    Err(_) => job.state = JobState::Completed,
                }
            }
        }

        let mut finished = Vec::new();
        let mut i = 0;
        while i < self.jobs.len() {
            if self.jobs[i].state == JobState::Completed {
                let job = self.jobs.remove(i);
                finished.push(FinishedJob {
                    pid: job.child.id(),
                    line: job.line,
                });
            } else {
                i += 1;
            }
        }
        finished
    }

    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    pub fn len(&self) -> usize {
        self.jobs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.jobs.is_empty()
    }
}
