use std::sync::{Arc, Mutex};

use super::*;
use crate::base::FixedClock;

#[test]
fn test_parse_full_line() {
    let task = Task::new("x 2020-01-02 (A) 2019-12-31 call +Mom @phone");
    assert!(task.completed());
    assert_eq!(task.completed_date(), Some("2020-01-02"));
    assert_eq!(task.priority(), Some('A'));
    assert_eq!(task.created_date(), Some("2019-12-31"));
    assert_eq!(task.contents(), Some("call +Mom @phone"));
    assert_eq!(task.projects(), ["mom"]);
    assert_eq!(task.contexts(), ["phone"]);
}

#[test]
fn test_parse_empty_line() {
    let task = Task::new("");
    assert!(!task.completed());
    assert_eq!(task.priority(), None);
    assert_eq!(task.contents(), None);
    assert!(task.projects().is_empty());
}

#[test]
fn test_flags_need_boundary_and_word_end() {
    assert_eq!(find_projects("a+b +ok +x +no! (+yes"), vec!["ok", "yes"]);
    assert_eq!(find_contexts("mail@example.com @Home"), vec!["home"]);
}

#[test]
fn test_priority_score() {
    assert_eq!(Task::new("(A) a").priority_score(), 1);
    assert_eq!(Task::new("(Z) a").priority_score(), 26);
    assert_eq!(Task::new("a").priority_score(), NO_PRIORITY_SCORE);
}

#[test]
fn test_set_priority_rerenders() {
    let mut task = Task::new("2020-01-01 write report");
    task.set_priority(Some('B')).unwrap();
    assert_eq!(task.text(), "(B) 2020-01-01 write report");
    task.set_priority(None).unwrap();
    assert_eq!(task.text(), "2020-01-01 write report");
}

#[test]
fn test_set_priority_rejects_lowercase() {
    let mut task = Task::new("a");
    assert_eq!(
        task.set_priority(Some('b')),
        Err(TaskError::InvalidPriority('b'))
    );
    assert_eq!(task.text(), "a");
}

#[test]
fn test_priority_without_contents_does_not_stick() {
    let mut task = Task::new("");
    task.set_priority(Some('A')).unwrap();
    assert_eq!(task.text(), "(A) ");
    assert_eq!(task.priority(), None);
    assert_eq!(task.contents(), Some("(A) "));
}

#[test]
fn test_set_completed_stamps_clock() {
    let mut task = Task::new("(A) call");
    task.set_completed(true, &FixedClock::new("2024-01-31"));
    assert_eq!(task.text(), "x 2024-01-31 (A) call");
    assert_eq!(task.completed_date(), Some("2024-01-31"));

    task.set_completed(false, &FixedClock::legacy());
    assert_eq!(task.text(), "(A) call");
    assert_eq!(task.completed_date(), None);
}

#[test]
fn test_set_created_date_validates() {
    let mut task = Task::new("call");
    assert!(matches!(
        task.set_created_date(Some("yesterday")),
        Err(TaskError::InvalidDate(_))
    ));
    task.set_created_date(Some("2021-07-04")).unwrap();
    assert_eq!(task.text(), "2021-07-04 call");
}

#[test]
fn test_set_completed_date() {
    let mut task = Task::new("x call");
    task.set_completed_date(Some("2022-02-02")).unwrap();
    assert_eq!(task.text(), "x 2022-02-02 call");
}

#[test]
fn test_set_text_reparses() {
    let mut task = Task::new("a");
    task.set_text("(C) b +pj");
    assert_eq!(task.priority(), Some('C'));
    assert_eq!(task.projects(), ["pj"]);
}

#[test]
fn test_single_char_flags_are_ignored() {
    let task = Task::new("b +p @c +ok");
    assert_eq!(task.projects(), ["ok"]);
    assert!(task.contexts().is_empty());
    assert!(find_projects("+p").is_empty());
}

#[test]
fn test_line_patterns_compile() {
    assert!(LazyLock::force(&TASK_LINE).is_match("x 2020-01-01 (A) call"));
    assert!(LazyLock::force(&DATE_ONLY).is_match("2020/01/01"));
    assert_eq!(find_projects("+pj"), ["pj"]);
    assert_eq!(find_contexts("@home"), ["home"]);
}

#[test]
fn test_subscribers_receive_events() {
    let seen = Arc::new(Mutex::new(Vec::new()));
    let mut task = Task::new("call");

    let sink = Arc::clone(&seen);
    task.subscribe(move |event| sink.lock().unwrap().push(event.clone()));

    task.set_completed(true, &FixedClock::legacy());
    task.set_text("other");

    let events = seen.lock().unwrap();
    assert_eq!(
        *events,
        vec![
            TaskEvent::Completed,
            TaskEvent::Changed {
                field: TaskField::Completed
            },
            TaskEvent::Changed {
                field: TaskField::Text
            },
        ]
    );
}

#[test]
fn test_unsubscribe_stops_delivery() {
    let count = Arc::new(Mutex::new(0));
    let mut task = Task::new("call");

    let sink = Arc::clone(&count);
    let id = task.subscribe(move |_| *sink.lock().unwrap() += 1);
    task.set_text("a");
    assert!(task.unsubscribe(id));
    assert!(!task.unsubscribe(id));
    task.set_text("b");

    assert_eq!(*count.lock().unwrap(), 1);
}

#[test]
fn test_emitter_publishes_in_order() {
    let log = Arc::new(Mutex::new(String::new()));
    let mut emitter = EventEmitter::<u8>::new();
    let a = Arc::clone(&log);
    emitter.subscribe(move |e| a.lock().unwrap().push_str(&format!("a{e}")));
    let b = Arc::clone(&log);
    emitter.subscribe(move |e| b.lock().unwrap().push_str(&format!("b{e}")));
    assert_eq!(emitter.len(), 2);

    emitter.publish(&7);
    assert_eq!(*log.lock().unwrap(), "a7b7");
}
