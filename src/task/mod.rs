//! Observable whole-line task model
//!
//! [`Task`] is an independent alternative to [`Item`](crate::item::Item): it
//! keeps the raw line as the single source of truth, reads fields out of it
//! with one anchored regular expression, and rebuilds the line whenever a
//! field is written. Every write is published to subscribers.
//!
//! ```text
//! set_text ──▶ parse ──▶ fields
//!                ▲          │
//!                │          ▼ set_priority / set_completed / ...
//!              text ◀── render
//! ```
//!
//! After a field write the rendered line is parsed again, so reads always
//! reflect what the text actually says. Writing a priority to a task with no
//! contents, for example, renders `(A) ` which does not parse as a priority.

mod events;
mod flags;

pub use events::{EventBus, EventEmitter, SubscriptionId, TaskEvent, TaskField};
pub use flags::{find_contexts, find_projects};

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::base::{Clock, TaskError};

/// `YYYY?MM?DD` where `?` is `-`, ` `, `/` or `.`.
const DATE_PATTERN: &str =
    r"(?:19|20)[0-9]{2}[- /.](?:0[1-9]|1[012])[- /.](?:0[1-9]|[12][0-9]|3[01])";

/// Captures: 1 completed, 2 completed date, 3 priority, 4 created date, 5 contents
static TASK_LINE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        r"^(?:(x) (?:({DATE_PATTERN}) )?)?(?:\(([A-Z])\) )?(?:({DATE_PATTERN}) )?(.+)$"
    );
    Regex::new(&pattern).expect("task line pattern is valid")
});

static DATE_ONLY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{DATE_PATTERN}$")).expect("date pattern is valid")
});

/// Score given to tasks without a priority, sorts after `Z`.
pub const NO_PRIORITY_SCORE: u32 = 100;

/// Fields read out of a task line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fields {
    priority: Option<char>,
    created_date: Option<String>,
    completed: bool,
    completed_date: Option<String>,
    contents: Option<String>,
    projects: Vec<String>,
    contexts: Vec<String>,
}

impl Fields {
    fn parse(text: &str) -> Self {
        let Some(caps) = TASK_LINE.captures(text) else {
            return Self::default();
        };

        let owned = |i: usize| caps.get(i).map(|m| m.as_str().to_string());
        let contents = owned(5);
        let body = contents.as_deref().unwrap_or_default();

        Self {
            completed: caps.get(1).is_some(),
            completed_date: owned(2),
            priority: caps.get(3).and_then(|m| m.as_str().chars().next()),
            created_date: owned(4),
            projects: find_projects(body),
            contexts: find_contexts(body),
            contents,
        }
    }

    fn render(&self) -> String {
        let mut out = String::new();
        if self.completed {
            out.push_str("x ");
            if let Some(date) = &self.completed_date {
                out.push_str(date);
                out.push(' ');
            }
        }
        if let Some(p) = self.priority {
            out.push('(');
            out.push(p);
            out.push_str(") ");
        }
        if let Some(date) = &self.created_date {
            out.push_str(date);
            out.push(' ');
        }
        if let Some(contents) = &self.contents {
            out.push_str(contents);
        }
        out
    }
}

/// A task line with observable fields.
#[derive(Debug, Default)]
pub struct Task {
    text: String,
    fields: Fields,
    events: EventEmitter<TaskEvent>,
    /// External ordering handle, not part of the line.
    pub index: usize,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let fields = Fields::parse(&text);
        Self {
            text,
            fields,
            events: EventEmitter::new(),
            index: 0,
        }
    }

    // ========================================================================
    // Reads
    // ========================================================================

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn priority(&self) -> Option<char> {
        self.fields.priority
    }

    /// `A` is 1 through `Z` at 26; no priority scores [`NO_PRIORITY_SCORE`].
    pub fn priority_score(&self) -> u32 {
        match self.fields.priority {
            Some(p) => p as u32 - 'A' as u32 + 1,
            None => NO_PRIORITY_SCORE,
        }
    }

    pub fn created_date(&self) -> Option<&str> {
        self.fields.created_date.as_deref()
    }

    pub fn completed(&self) -> bool {
        self.fields.completed
    }

    pub fn completed_date(&self) -> Option<&str> {
        self.fields.completed_date.as_deref()
    }

    /// The line after the header, `None` when the line did not parse.
    pub fn contents(&self) -> Option<&str> {
        self.fields.contents.as_deref()
    }

    pub fn projects(&self) -> &[String] {
        &self.fields.projects
    }

    pub fn contexts(&self) -> &[String] {
        &self.fields.contexts
    }

    // ========================================================================
    // Writes
    // ========================================================================

    /// Replace the whole line and reparse it.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.fields = Fields::parse(&self.text);
        debug!(index = self.index, text = %self.text, "task text set");
        self.events.publish(&TaskEvent::Changed {
            field: TaskField::Text,
        });
    }

    pub fn set_priority(&mut self, priority: Option<char>) -> Result<(), TaskError> {
        if let Some(p) = priority.filter(|p| !p.is_ascii_uppercase()) {
            return Err(TaskError::InvalidPriority(p));
        }
        self.fields.priority = priority;
        self.rerender(TaskField::Priority);
        Ok(())
    }

    pub fn set_created_date(&mut self, date: Option<&str>) -> Result<(), TaskError> {
        self.fields.created_date = validate_date(date)?;
        self.rerender(TaskField::CreatedDate);
        Ok(())
    }

    /// Mark complete (stamping `clock.today()`) or not complete (clearing
    /// the completion date).
    pub fn set_completed(&mut self, completed: bool, clock: &impl Clock) {
        self.fields.completed = completed;
        self.fields.completed_date = completed.then(|| clock.today());
        if completed {
            self.events.publish(&TaskEvent::Completed);
        }
        self.rerender(TaskField::Completed);
    }

    pub fn set_completed_date(&mut self, date: Option<&str>) -> Result<(), TaskError> {
        self.fields.completed_date = validate_date(date)?;
        self.rerender(TaskField::CompletedDate);
        Ok(())
    }

    // ========================================================================
    // Subscriptions
    // ========================================================================

    /// Register a listener for every change to this task.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&TaskEvent) + Send + 'static,
    {
        self.events.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.events.unsubscribe(id)
    }

    fn rerender(&mut self, field: TaskField) {
        self.text = self.fields.render();
        self.fields = Fields::parse(&self.text);
        debug!(index = self.index, ?field, text = %self.text, "task field written");
        self.events.publish(&TaskEvent::Changed { field });
    }
}

fn validate_date(date: Option<&str>) -> Result<Option<String>, TaskError> {
    match date {
        Some(d) if !DATE_ONLY.is_match(d) => Err(TaskError::InvalidDate(d.to_string())),
        other => Ok(other.map(str::to_string)),
    }
}

#[cfg(test)]
mod tests;
