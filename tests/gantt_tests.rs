//! Gantt model and renderer tests.

use chrono::{TimeZone, Utc};
use mermaid_gen::{AxisFormat, Error, Gantt, Task, TaskConfig};
use pretty_assertions::assert_eq;
use std::time::Duration;

#[test]
fn empty_diagram_renders_header_and_dateformat() {
    let diagram = Gantt::new();
    assert_eq!(diagram.render(), "gantt\ndateFormat YYYY-MM-DDTHH:mm:ssZ\n");
}

#[test]
fn axisformat_precedes_title() {
    let mut diagram = Gantt::new();
    diagram.title = Some("Release 1.0".to_string());
    diagram.axis_format = Some(AxisFormat::Date);
    assert_eq!(
        diagram.render(),
        "gantt\n\
         dateFormat YYYY-MM-DDTHH:mm:ssZ\n\
         axisFormat %Y-%m-%d\n\
         title Release 1.0\n"
    );
}

#[test]
fn custom_axisformat_passes_through() {
    let mut diagram = Gantt::new();
    diagram.axis_format = Some(AxisFormat::Custom("%d.%m.".to_string()));
    assert!(diagram.render().contains("axisFormat %d.%m.\n"));
}

#[test]
fn local_tasks_then_sections_in_insertion_order() {
    let mut diagram = Gantt::new();
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
    diagram
        .add_task(
            "prep",
            TaskConfig {
                start: Some(start),
                duration: Some(Duration::from_secs(86400)),
                ..Default::default()
            },
        )
        .unwrap();
    diagram.add_section("Build").unwrap();
    diagram
        .add_task_in(
            "Build",
            "compile",
            TaskConfig {
                after: Some("prep".to_string()),
                duration: Some(Duration::from_secs(7200)),
                critical: true,
                ..Default::default()
            },
        )
        .unwrap();
    assert_eq!(
        diagram.render(),
        "gantt\n\
         dateFormat YYYY-MM-DDTHH:mm:ssZ\n\
         prep :prep, 2024-01-02T09:00:00Z, 86400s\n\
         section Build\n\
         compile :crit, compile, after prep, 7200s\n"
    );
}

#[test]
fn task_title_falls_back_to_the_id() {
    let mut diagram = Gantt::new();
    diagram.add_task("deploy", TaskConfig::default()).unwrap();
    assert!(diagram.render().contains("deploy :deploy\n"));
}

#[test]
fn all_three_flags_render_in_fixed_order() {
    let mut diagram = Gantt::new();
    diagram
        .add_task(
            "t",
            TaskConfig {
                critical: true,
                active: true,
                done: true,
                ..Default::default()
            },
        )
        .unwrap();
    assert!(diagram.render().contains("t :crit, active, done, t\n"));
}

#[test]
fn duplicate_task_id_is_rejected_without_mutation() {
    let mut diagram = Gantt::new();
    diagram.add_task("a", TaskConfig::default()).unwrap();
    let err = diagram.add_task("a", TaskConfig::default()).unwrap_err();
    assert!(matches!(err, Error::DuplicateId(_)));
    assert_eq!(diagram.list_local_tasks().len(), 1);
}

#[test]
fn task_ids_are_unique_across_sections_and_local_tasks() {
    let mut diagram = Gantt::new();
    diagram.add_task("a", TaskConfig::default()).unwrap();
    diagram.add_section("s").unwrap();
    let err = diagram
        .add_task_in("s", "a", TaskConfig::default())
        .unwrap_err();
    assert!(matches!(err, Error::DuplicateId(_)));
    assert!(diagram.get_section("s").unwrap().tasks().is_empty());
}

#[test]
fn section_and_task_namespaces_are_separate() {
    // A section may reuse a task's identifier; the two kinds live in
    // different namespaces.
    let mut diagram = Gantt::new();
    diagram.add_task("deploy", TaskConfig::default()).unwrap();
    diagram.add_section("deploy").unwrap();
    assert!(diagram.get_task("deploy").is_some());
    assert!(diagram.get_section("deploy").is_some());
}

#[test]
fn grammar_breaking_ids_are_rejected() {
    let mut diagram = Gantt::new();
    assert!(matches!(
        diagram.add_task("a b", TaskConfig::default()),
        Err(Error::InvalidId(_))
    ));
    assert!(matches!(diagram.add_section(""), Err(Error::InvalidId(_))));
    assert!(diagram.list_local_tasks().is_empty());
    assert!(diagram.list_sections().is_empty());
}

#[test]
fn start_and_after_together_are_rejected() {
    let mut diagram = Gantt::new();
    let config = TaskConfig {
        start: Some(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap()),
        after: Some("other".to_string()),
        ..Default::default()
    };
    assert!(matches!(
        diagram.add_task("t", config),
        Err(Error::InvalidConfig(_))
    ));
    assert!(diagram.get_task("t").is_none());
}

#[test]
fn unknown_section_is_rejected() {
    let mut diagram = Gantt::new();
    assert!(matches!(
        diagram.add_task_in("ghost", "t", TaskConfig::default()),
        Err(Error::UnknownSection(_))
    ));
    assert!(diagram.get_task("t").is_none());
}

#[test]
fn list_tasks_is_sorted_by_id_and_recomputed() {
    let mut diagram = Gantt::new();
    diagram.add_task("zeta", TaskConfig::default()).unwrap();
    diagram.add_section("s").unwrap();
    diagram
        .add_task_in("s", "alpha", TaskConfig::default())
        .unwrap();
    diagram.add_task("mid", TaskConfig::default()).unwrap();

    let ids: Vec<&str> = diagram.list_tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["alpha", "mid", "zeta"]);

    diagram
        .add_task_in("s", "beta", TaskConfig::default())
        .unwrap();
    let ids: Vec<&str> = diagram.list_tasks().iter().map(|t| t.id()).collect();
    assert_eq!(ids, vec!["alpha", "beta", "mid", "zeta"]);
}

#[test]
fn get_task_reaches_into_sections() {
    let mut diagram = Gantt::new();
    diagram.add_section("s").unwrap();
    diagram
        .add_task_in("s", "inner", TaskConfig::default())
        .unwrap();
    assert_eq!(diagram.get_task("inner").map(Task::id), Some("inner"));
    diagram.get_task_mut("inner").unwrap().done = true;
    assert!(diagram.render().contains("inner :done, inner\n"));
}

#[test]
fn render_is_deterministic() {
    let mut diagram = Gantt::new();
    diagram.title = Some("Plan".to_string());
    diagram.add_task("a", TaskConfig::default()).unwrap();
    diagram.add_section("s").unwrap();
    diagram
        .add_task_in("s", "b", TaskConfig::default())
        .unwrap();
    assert_eq!(diagram.render(), diagram.render());
}

#[test]
fn display_matches_render() {
    let mut diagram = Gantt::new();
    diagram.add_task("a", TaskConfig::default()).unwrap();
    assert_eq!(format!("{diagram}"), diagram.render());
}
