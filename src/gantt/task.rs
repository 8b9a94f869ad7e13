//! Tasks and their creation-time configuration.

use chrono::{DateTime, SecondsFormat, Utc};
use lazy_static::lazy_static;
use regex::Regex;
use std::time::Duration;

use crate::error::{Error, Result};

lazy_static! {
    // Anything that survives the `title :a, b, c` line grammar.
    static ref RE_ID: Regex = Regex::new(r"^[^\s,:;#]+$").unwrap();
}

/// Check an identifier against the task/section line grammar.
pub(crate) fn validate_id(id: &str) -> Result<()> {
    if RE_ID.is_match(id) {
        Ok(())
    } else {
        Err(Error::InvalidId(id.to_string()))
    }
}

/// Optional attributes applied when a task is created.
///
/// Replaces positional constructor arguments with named fields; unset
/// fields keep the task's defaults.
#[derive(Debug, Clone, Default)]
pub struct TaskConfig {
    /// Text shown on the chart. Falls back to the task id when unset.
    pub title: Option<String>,
    /// Absolute start instant. Mutually exclusive with `after`.
    pub start: Option<DateTime<Utc>>,
    /// Length of the task bar.
    pub duration: Option<Duration>,
    /// Id of the task this one starts after. Mutually exclusive with
    /// `start`.
    pub after: Option<String>,
    /// Render on the critical path.
    pub critical: bool,
    /// Render as currently in progress.
    pub active: bool,
    /// Render as completed.
    pub done: bool,
}

impl TaskConfig {
    pub(crate) fn validate(&self) -> Result<()> {
        if self.start.is_some() && self.after.is_some() {
            return Err(Error::InvalidConfig(
                "start and after are mutually exclusive".to_string(),
            ));
        }
        Ok(())
    }
}

/// A single bar of a Gantt chart.
///
/// Created through [`Gantt::add_task`] or [`Gantt::add_task_in`]. Task ids
/// are unique across the whole diagram, not per section, so that `after`
/// references resolve through one flat namespace.
///
/// [`Gantt::add_task`]: super::Gantt::add_task
/// [`Gantt::add_task_in`]: super::Gantt::add_task_in
#[derive(Debug, Clone)]
pub struct Task {
    id: String,
    pub title: Option<String>,
    pub start: Option<DateTime<Utc>>,
    pub duration: Option<Duration>,
    pub after: Option<String>,
    pub critical: bool,
    pub active: bool,
    pub done: bool,
}

impl Task {
    pub(crate) fn new(id: &str, config: TaskConfig) -> Self {
        Task {
            id: id.to_string(),
            title: config.title,
            start: config.start,
            duration: config.duration,
            after: config.after,
            critical: config.critical,
            active: config.active,
            done: config.done,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    /// One task line: `title :crit, active, done, id, start, duration`.
    ///
    /// The start token is either an RFC 3339 instant, matching the
    /// `dateFormat YYYY-MM-DDTHH:mm:ssZ` directive the chart declares, or
    /// an `after <id>` dependency. Durations render as whole seconds with
    /// an `s` suffix. Unset fields are omitted.
    pub(crate) fn render(&self) -> String {
        let title = self.title.as_deref().unwrap_or(&self.id);
        let mut fields = Vec::new();
        if self.critical {
            fields.push("crit".to_string());
        }
        if self.active {
            fields.push("active".to_string());
        }
        if self.done {
            fields.push("done".to_string());
        }
        fields.push(self.id.clone());
        if let Some(start) = &self.start {
            fields.push(start.to_rfc3339_opts(SecondsFormat::Secs, true));
        } else if let Some(after) = &self.after {
            fields.push(format!("after {}", after));
        }
        if let Some(duration) = &self.duration {
            fields.push(format!("{}s", duration.as_secs()));
        }
        format!("{} :{}\n", title, fields.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn id_rejects_grammar_breaking_characters() {
        assert!(validate_id("build").is_ok());
        assert!(validate_id("build-1").is_ok());
        for bad in ["", "a b", "a,b", "a:b", "a;b", "a#b"] {
            assert!(validate_id(bad).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn task_line_with_start_and_duration() {
        let start = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        let task = Task::new(
            "t1",
            TaskConfig {
                title: Some("Build".to_string()),
                start: Some(start),
                duration: Some(Duration::from_secs(3600)),
                ..Default::default()
            },
        );
        assert_eq!(task.render(), "Build :t1, 2024-03-01T08:00:00Z, 3600s\n");
    }

    #[test]
    fn task_line_with_flags_and_dependency() {
        let task = Task::new(
            "ship",
            TaskConfig {
                after: Some("build".to_string()),
                critical: true,
                done: true,
                ..Default::default()
            },
        );
        assert_eq!(task.render(), "ship :crit, done, ship, after build\n");
    }
}
