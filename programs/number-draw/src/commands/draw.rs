//! `draw` command

use std::path::Path;
use std::thread;
use std::time::Duration;

use chrono::Utc;
use clap::Args;
use draw_engine::{draw, parse_exclusions, validate, DrawRequest, HistoryEntry};
use tracing::{info, warn};

use crate::error::Result;
use crate::state::{load_history, save_history};

#[derive(Args, Debug, Clone)]
pub struct DrawArgs {
    /// How many numbers to draw
    #[arg(short = 'n', long, default_value_t = 6)]
    pub count: usize,

    /// Smallest value that can be drawn
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    pub min: i64,

    /// Largest value that can be drawn
    #[arg(long, default_value_t = 60, allow_negative_numbers = true)]
    pub max: i64,

    /// Allow the same number more than once
    #[arg(long)]
    pub repeat: bool,

    /// Keep draw order instead of sorting ascending
    #[arg(long)]
    pub unsorted: bool,

    /// Numbers to leave out, separated by spaces, commas or semicolons
    #[arg(short, long, default_value = "", allow_hyphen_values = true)]
    pub exclude: String,

    /// Seed text for a reproducible draw
    #[arg(short, long)]
    pub seed: Option<String>,

    /// Seconds to count down before drawing
    #[arg(long, default_value_t = 0)]
    pub countdown: u64,

    /// Do not add this draw to the history
    #[arg(long)]
    pub no_record: bool,
}

impl DrawArgs {
    pub fn to_request(&self) -> DrawRequest {
        let mut request = DrawRequest::new(self.count, self.min, self.max)
            .with_unique(!self.repeat)
            .with_sort_ascending(!self.unsorted)
            .with_exclude(parse_exclusions(&self.exclude));
        request.seed = self.seed.clone().filter(|s| !s.trim().is_empty());
        request
    }
}

/// Validate, count down, draw and optionally record.
///
/// The request and the history file are checked before anything is drawn.
/// Once numbers are drawn they are always returned; a failure to save the
/// history afterwards is only logged.
pub fn run_draw(args: &DrawArgs, history_path: &Path) -> Result<Vec<i64>> {
    let request = args.to_request();
    validate(&request)?;
    let history = if args.no_record { None } else { Some(load_history(history_path)?) };

    countdown(args.countdown, thread::sleep);

    let results = draw(&request)?;
    info!(count = results.len(), seeded = request.effective_seed().is_some(), "draw complete");

    if let Some(mut history) = history {
        history.record(HistoryEntry::new(Utc::now().timestamp_millis(), request, results.clone()));
        if let Err(e) = save_history(history_path, &history) {
            warn!(error = %e, "draw not recorded");
        }
    }
    Ok(results)
}

/// Tick once per second. Never touches the random source.
fn countdown(seconds: u64, mut sleep: impl FnMut(Duration)) {
    for left in (1..=seconds).rev() {
        info!(seconds_left = left, "drawing soon");
        sleep(Duration::from_secs(1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CliError;
    use clap::Parser;
    use draw_engine::DrawError;
    use std::fs;
    use tempfile::TempDir;

    #[derive(Parser)]
    struct TestCli {
        #[command(flatten)]
        draw: DrawArgs,
    }

    fn parse(args: &[&str]) -> DrawArgs {
        let argv = std::iter::once("number-draw").chain(args.iter().copied());
        TestCli::parse_from(argv).draw
    }

    #[test]
    fn test_defaults_match_engine_defaults() {
        let args = parse(&[]);
        assert_eq!(args.to_request(), DrawRequest::default());
    }

    #[test]
    fn test_flags_to_request() {
        let args = parse(&[
            "-n", "3", "--min", "-5", "--max", "5", "--repeat", "--unsorted",
            "--exclude", "0, -1;1", "--seed", "abc",
        ]);
        let req = args.to_request();
        assert_eq!(req.count, 3);
        assert_eq!((req.min, req.max), (-5, 5));
        assert!(!req.unique);
        assert!(!req.sort_ascending);
        assert_eq!(req.exclude.into_iter().collect::<Vec<_>>(), vec![-1, 0, 1]);
        assert_eq!(req.seed.as_deref(), Some("abc"));
    }

    #[test]
    fn test_blank_seed_dropped() {
        assert_eq!(parse(&["--seed", "  "]).to_request().seed, None);
    }

    #[test]
    fn test_countdown_ticks() {
        let mut slept = Vec::new();
        countdown(3, |d| slept.push(d));
        assert_eq!(slept, vec![Duration::from_secs(1); 3]);

        let mut calls = 0;
        countdown(0, |_| calls += 1);
        assert_eq!(calls, 0);
    }

    #[test]
    fn test_seeded_run_without_recording() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let args = parse(&["--seed", "abc", "--no-record"]);

        assert_eq!(run_draw(&args, &path).unwrap(), vec![5, 7, 9, 26, 43, 48]);
        assert!(!path.exists());
    }

    #[test]
    fn test_invalid_request_fails_before_countdown() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let args = parse(&["--min", "9", "--max", "1", "--countdown", "30"]);

        let err = run_draw(&args, &path).unwrap_err();
        assert!(matches!(err, CliError::Draw(DrawError::InvalidRange { min: 9, max: 1 })));
        assert!(!path.exists());
    }

    #[test]
    fn test_corrupt_history_fails_before_drawing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        fs::write(&path, "{truncated").unwrap();
        let args = parse(&["--seed", "abc"]);

        let err = run_draw(&args, &path).unwrap_err();
        assert!(matches!(err, CliError::HistoryFormat { .. }), "got {:?}", err);
        assert_eq!(fs::read_to_string(&path).unwrap(), "{truncated");

        // the same draw still works when it is not recorded
        let args = parse(&["--seed", "abc", "--no-record"]);
        assert_eq!(run_draw(&args, &path).unwrap(), vec![5, 7, 9, 26, 43, 48]);
    }

    #[test]
    fn test_unwritable_history_still_returns_results() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing-dir").join("history.json");
        let args = parse(&["--seed", "abc"]);

        assert_eq!(run_draw(&args, &path).unwrap(), vec![5, 7, 9, 26, 43, 48]);
        assert!(!path.exists());
    }

    #[test]
    fn test_run_records_history() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("history.json");
        let args = parse(&["--seed", "abc"]);

        run_draw(&args, &path).unwrap();
        run_draw(&args, &path).unwrap();

        let history = load_history(&path).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries()[0].results, vec![5, 7, 9, 26, 43, 48]);
        assert_eq!(history.entries()[0].params.seed.as_deref(), Some("abc"));
    }
}
