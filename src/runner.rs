// src/runner.rs
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{mpsc, Arc};
use std::thread;
use std::time::{Duration, Instant};

use crate::config::options::{PartSelector, RunOptions};
use crate::days::{self, Answer};
use crate::error::{Error, Result};
use crate::io::{input_path, read_lines};
use crate::progress::Progress;

/// Answers of one day. A part that was not requested is `None`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayReport {
    pub day: u32,
    pub part1: Option<Answer>,
    pub part2: Option<Answer>,
    pub elapsed: Duration,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DayFailure {
    pub day: u32,
    pub message: String,
}

/// Summary of a run, both lists sorted by day.
#[derive(Clone, Debug, Default)]
pub struct RunSummary {
    pub reports: Vec<DayReport>,
    pub failures: Vec<DayFailure>,
}

impl RunSummary {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Resolve the requested days against the registry.
pub fn resolve_days(options: &RunOptions) -> Result<Vec<u32>> {
    let registered = days::registered_days();
    let days = options.days.resolve(&registered);
    if let Some(&unknown) = days.iter().find(|d| !registered.contains(d)) {
        return Err(Error::UnknownDay(unknown));
    }
    Ok(days)
}

/// Read the input of `day` and run the requested parts on it.
pub fn run_day(day: u32, inputs_dir: &Path, parts: PartSelector) -> Result<DayReport> {
    let solution = days::solution(day).ok_or(Error::UnknownDay(day))?;
    let data = read_lines(input_path(inputs_dir, day))?;

    let started = Instant::now();
    let part1 = if parts.runs_part1() { Some(solution.part1(&data)?) } else { None };
    let part2 = if parts.runs_part2() { Some(solution.part2(&data)?) } else { None };
    Ok(DayReport { day, part1, part2, elapsed: started.elapsed() })
}

/// Run every requested day on a small worker pool.
/// `progress` can be None (no UI updates) or Some(&mut impl Progress).
pub fn run(
    options: &RunOptions,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let days = resolve_days(options)?;
    logf!("Running {} day(s) from {}", days.len(), options.inputs_dir.display());
    let inputs_dir = options.inputs_dir.clone();
    let parts = options.parts;
    Ok(run_pool(days, options.workers, progress, move |day| run_day(day, &inputs_dir, parts)))
}

/// Feed `days` to `workers` threads running `job`. A job that errors or
/// panics becomes a `DayFailure`; every day ends up in the summary.
pub fn run_pool<F>(
    days: Vec<u32>,
    workers: usize,
    mut progress: Option<&mut dyn Progress>,
    job: F,
) -> RunSummary
where
    F: Fn(u32) -> Result<DayReport> + Send + Sync + 'static,
{
    let mut summary = RunSummary::default();

    if days.is_empty() {
        if let Some(p) = progress.as_deref_mut() {
            p.log("No days to run.");
            p.finish();
        }
        return summary;
    }
    if let Some(p) = progress.as_deref_mut() {
        p.begin(days.len());
    }

    type DayResult = std::result::Result<DayReport, DayFailure>;

    let days_arc = Arc::new(days);
    let job = Arc::new(job);
    let counter = Arc::new(AtomicUsize::new(0));
    let (res_tx, res_rx) = mpsc::channel::<DayResult>();

    let workers = workers.min(days_arc.len()).max(1);

    for _ in 0..workers {
        let days = Arc::clone(&days_arc);
        let idx = Arc::clone(&counter);
        let job = Arc::clone(&job);
        let tx = res_tx.clone();

        thread::spawn(move || {
            loop {
                let i = idx.fetch_add(1, Ordering::Relaxed);
                if i >= days.len() {
                    break;
                }
                let day = days[i];
                logd!("Day {day} started");
                let result = match panic::catch_unwind(AssertUnwindSafe(|| job(day))) {
                    Ok(Ok(report)) => Ok(report),
                    Ok(Err(e)) => Err(DayFailure { day, message: e.to_string() }),
                    Err(payload) => Err(DayFailure { day, message: panic_message(&*payload) }),
                };
                if tx.send(result).is_err() {
                    break;
                }
            }
        });
    }
    drop(res_tx); // main thread is sole receiver now

    let mut record = |result: DayResult, summary: &mut RunSummary| match result {
        Ok(report) => {
            logf!("Day {} finished in {:?}", report.day, report.elapsed);
            if let Some(p) = progress.as_deref_mut() {
                p.item_done(report.day);
            }
            summary.reports.push(report);
        }
        Err(failure) => {
            loge!("Day {} failed: {}", failure.day, failure.message);
            if let Some(p) = progress.as_deref_mut() {
                p.item_failed(failure.day, &failure.message);
            }
            summary.failures.push(failure);
        }
    };

    for _ in 0..days_arc.len() {
        match res_rx.recv() {
            Ok(result) => record(result, &mut summary),
            Err(_) => {
                loge!("A worker stopped before reporting its day");
                break;
            }
        }
    }

    // days no worker reported on
    let unreported: Vec<u32> = days_arc
        .iter()
        .copied()
        .filter(|d| {
            !summary.reports.iter().any(|r| r.day == *d)
                && !summary.failures.iter().any(|f| f.day == *d)
        })
        .collect();
    for day in unreported {
        record(Err(DayFailure { day, message: s!("no result reported") }), &mut summary);
    }
    drop(record);

    summary.reports.sort_by_key(|r| r.day);
    summary.failures.sort_by_key(|f| f.day);
    if let Some(p) = progress.as_deref_mut() {
        p.finish();
    }
    summary
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    let what = payload
        .downcast_ref::<&str>()
        .map(|s| s.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| s!("unknown cause"));
    join!("panicked: ", &what)
}
