//! Command implementations for the CLI interface.
//!
//! This module contains the subcommand definitions and their handlers: the
//! interactive TUI, the non-interactive table printer and shell completions.

use anyhow::{anyhow, Context, Result};
use chrono::{Local, NaiveDate};
use clap::Subcommand;
use clap_complete::{generate, Shell};

use crate::config::Config;
use crate::error::BurndownError;
use crate::fields::Status;
use crate::model::{print_table, BurndownModel};
use crate::sprint::{parse_date_input, SprintRange};
use crate::tui::run::run_tui;

#[derive(Subcommand)]
pub enum Commands {
    /// Launch the interactive burndown UI.
    Ui {
        /// Sprint start: YYYY-MM-DD, "today", "tomorrow", or "in Nd". Defaults to today.
        #[arg(long)]
        start: Option<String>,
        /// Sprint end. Defaults to start plus the configured sprint length.
        #[arg(long)]
        end: Option<String>,
    },

    /// Print the burndown table for tasks given on the command line.
    Table {
        /// Sprint start: YYYY-MM-DD, "today", "tomorrow", or "in Nd". Defaults to today.
        #[arg(long)]
        start: Option<String>,
        /// Sprint end. Defaults to start plus the configured sprint length.
        #[arg(long)]
        end: Option<String>,
        /// Task as NAME[=P1,P2,...][@STATUS]. NAME may not contain '=' or '@'.
        /// May be repeated.
        #[arg(long = "task")]
        tasks: Vec<String>,
        /// Print the model snapshot as JSON instead of a table.
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell to generate completions for.
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// A task parsed from a `--task` argument.
#[derive(Debug, PartialEq)]
pub struct TaskSpec {
    pub name: String,
    pub points: Vec<f64>,
    pub status: Status,
}

/// Parse `NAME[=P1,P2,...][@STATUS]`.
///
/// `=` and `@` are separators, so a name holding either is rejected rather
/// than split in the wrong place. Points must be finite numbers.
pub fn parse_task_spec(raw: &str) -> Result<TaskSpec> {
    use clap::ValueEnum;

    let (body, status) = match raw.rsplit_once('@') {
        Some((body, s)) => {
            let status = Status::from_str(s.trim(), true)
                .map_err(|_| anyhow!("unknown status '{}' in task '{raw}'", s.trim()))?;
            (body, status)
        }
        None => (raw, Status::Open),
    };

    let (name, points) = match body.split_once('=') {
        Some((name, pts)) => {
            let points = pts
                .split(',')
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(|p| {
                    let v = p
                        .parse::<f64>()
                        .with_context(|| format!("invalid points '{p}' in task '{raw}'"))?;
                    if !v.is_finite() {
                        return Err(anyhow!("points must be finite, got '{p}' in task '{raw}'"));
                    }
                    Ok(v)
                })
                .collect::<Result<Vec<_>>>()?;
            (name, points)
        }
        None => (body, Vec::new()),
    };
    if name.contains(['=', '@']) {
        return Err(anyhow!("task name '{}' may not contain '=' or '@'", name.trim()));
    }

    Ok(TaskSpec {
        name: name.to_string(),
        points,
        status,
    })
}

/// Resolve CLI date arguments into a sprint range.
pub fn resolve_range(
    start: Option<&str>,
    end: Option<&str>,
    length_days: u32,
    today: NaiveDate,
) -> Result<SprintRange> {
    let parse = |s: &str| {
        parse_date_input(s, today).ok_or_else(|| anyhow!("invalid date '{s}'"))
    };
    let start = match start {
        Some(s) => parse(s)?,
        None => today,
    };
    match end {
        Some(e) => Ok(SprintRange::new(start, parse(e)?)?),
        None => SprintRange::with_length(start, length_days)
            .ok_or_else(|| anyhow!("sprint length of {length_days} days is out of range")),
    }
}

/// Build a model from parsed task specs. Points past the sprint end are
/// reported and skipped; other rejected values are reported one by one.
pub fn build_model(range: SprintRange, specs: &[TaskSpec]) -> Result<BurndownModel> {
    let mut model = BurndownModel::new(range);
    for spec in specs {
        let id = model.add_task(&spec.name)?.id;
        model.update_task_status(id, spec.status);
        for (day, value) in spec.points.iter().enumerate() {
            match model.update_task_points(id, day, *value) {
                Ok(_) => {}
                Err(e @ BurndownError::OutOfRangeDayIndex { .. }) => {
                    eprintln!("Warning: task '{}': {e}", spec.name);
                    break;
                }
                Err(e) => eprintln!("Warning: task '{}': {e}", spec.name),
            }
        }
    }
    Ok(model)
}

/// Launch the TUI over a fresh sprint.
pub fn cmd_ui(config: &Config, start: Option<String>, end: Option<String>) -> Result<()> {
    let today = Local::now().date_naive();
    let range = resolve_range(start.as_deref(), end.as_deref(), config.sprint.length_days, today)?;
    tracing::info!(start = %range.start(), end = %range.end(), "launching ui");
    run_tui(BurndownModel::new(range)).context("terminal UI failed")?;
    Ok(())
}

/// Print the burndown table (or JSON snapshot) for tasks given as arguments.
pub fn cmd_table(
    config: &Config,
    start: Option<String>,
    end: Option<String>,
    tasks: Vec<String>,
    json: bool,
) -> Result<()> {
    let today = Local::now().date_naive();
    let range = resolve_range(start.as_deref(), end.as_deref(), config.sprint.length_days, today)?;
    let specs = tasks
        .iter()
        .map(|t| parse_task_spec(t))
        .collect::<Result<Vec<_>>>()?;

    let model = build_model(range, &specs)?;
    tracing::info!(tasks = model.tasks().len(), days = model.total_days(), "printing table");
    if json {
        println!("{}", serde_json::to_string_pretty(&model.snapshot())?);
    } else {
        print_table(&model);
    }
    Ok(())
}

/// Generate shell completion scripts.
pub fn cmd_completions(shell: Shell) {
    use clap::CommandFactory;
    use crate::cli::Cli;

    let mut app = Cli::command();
    let app_name = app.get_name().to_string();
    generate(shell, &mut app, app_name, &mut std::io::stdout());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_parse_task_spec_forms() {
        assert_eq!(
            parse_task_spec("Implement login").unwrap(),
            TaskSpec { name: "Implement login".into(), points: vec![], status: Status::Open }
        );
        assert_eq!(
            parse_task_spec("Login=5, 3,0").unwrap(),
            TaskSpec { name: "Login".into(), points: vec![5.0, 3.0, 0.0], status: Status::Open }
        );
        assert_eq!(
            parse_task_spec("Login=2.5@in-development").unwrap(),
            TaskSpec { name: "Login".into(), points: vec![2.5], status: Status::InDevelopment }
        );
        assert_eq!(parse_task_spec("Docs@Done").unwrap().status, Status::Done);
    }

    #[test]
    fn test_parse_task_spec_errors() {
        assert!(parse_task_spec("Login=5,x").is_err());
        assert!(parse_task_spec("Login@blocked").is_err());
    }

    #[test]
    fn test_parse_task_spec_rejects_non_finite_points() {
        for raw in ["a=inf,5,2", "a=5,NaN", "a=-infinity"] {
            let err = parse_task_spec(raw).unwrap_err();
            assert!(err.to_string().contains("finite"), "{raw}: {err}");
        }
    }

    #[test]
    fn test_parse_task_spec_rejects_separator_in_name() {
        let err = parse_task_spec("mail a@b.com@done").unwrap_err();
        assert!(err.to_string().contains("may not contain"));
        assert!(parse_task_spec("Fix a=b bug").is_err());
        assert!(parse_task_spec("user@host").is_err());
    }

    #[test]
    fn test_build_model_keeps_points_after_a_rejected_value() {
        let range = SprintRange::new(date(2026, 10, 1), date(2026, 10, 4)).unwrap();
        let spec = TaskSpec { name: "a".into(), points: vec![f64::NAN, 5.0, 2.0], status: Status::Open };
        let model = build_model(range, &[spec]).unwrap();
        assert_eq!(model.tasks()[0].points, vec![0.0, 5.0, 2.0]);
    }

    #[test]
    fn test_resolve_range_defaults() {
        let today = date(2026, 10, 18);
        let r = resolve_range(None, None, 14, today).unwrap();
        assert_eq!(r.start(), today);
        assert_eq!(r.end(), date(2026, 11, 1));

        let r = resolve_range(Some("2026-10-20"), Some("in 1w"), 14, today).unwrap();
        assert_eq!(r.start(), date(2026, 10, 20));
        assert_eq!(r.end(), date(2026, 10, 25));
        assert_eq!(r.total_days(), 5);
    }

    #[test]
    fn test_resolve_range_rejects_reversed_and_garbage() {
        let today = date(2026, 10, 18);
        assert!(resolve_range(Some("2026-10-20"), Some("2026-10-19"), 14, today).is_err());
        assert!(resolve_range(Some("someday"), None, 14, today).is_err());
    }

    #[test]
    fn test_resolve_range_overflow_is_an_error() {
        let today = date(2026, 10, 18);
        let err = resolve_range(Some("in 99999999d"), None, 14, today).unwrap_err();
        assert!(err.to_string().contains("invalid date"));
        let err = resolve_range(None, None, 4_000_000_000, today).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_build_model_applies_specs() {
        let range = SprintRange::new(date(2026, 10, 1), date(2026, 10, 5)).unwrap();
        let specs = vec![
            parse_task_spec("a=5,1").unwrap(),
            parse_task_spec("b=0,0,0,3,9@review").unwrap(),
        ];
        let model = build_model(range, &specs).unwrap();
        assert_eq!(model.tasks()[0].points, vec![5.0, 1.0, 0.0, 0.0]);
        assert_eq!(model.tasks()[1].points, vec![0.0, 0.0, 0.0, 3.0]);
        assert_eq!(model.tasks()[1].status, Status::Review);
        assert_eq!(model.ideal_burndown_row(), vec![8.0, 6.0, 4.0, 2.0]);
    }
}
