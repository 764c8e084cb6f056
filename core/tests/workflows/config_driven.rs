// SPDX-FileCopyrightText: 2025-2026 Routine Maintainers <routine@classroutine.dev>
//
// SPDX-License-Identifier: Apache-2.0

//! Config driven workflow tests: a config file selects the routine and the saved search.

use jiff::civil::Weekday;
use routine_core::{Config, GroupingPolicy, RoutineError, RoutineQuery, load_sessions, plan_alerts};

use crate::common::{SAMPLE_ROUTINE, setup_temp_routine};

fn config_for(path: &std::path::Path, extra: &str) -> Config {
    let content = format!("routine_path = {:?}\n{extra}", path.display().to_string());
    toml::from_str(&content).unwrap()
}

#[tokio::test]
async fn saved_teacher_search_drives_the_week() {
    let routine = setup_temp_routine(SAMPLE_ROUTINE).await.unwrap();
    let mut config = config_for(
        &routine.routine_path,
        "policy = \"teacher\"\nsection = \"61_N\"\nteacher = \"ABC\"\n",
    );
    config.normalize().unwrap();

    let sessions = load_sessions(&config.routine_path).await.unwrap();
    let context = config.default_search().unwrap();
    assert_eq!(context.policy(), GroupingPolicy::TeacherOriented);

    let blocks = RoutineQuery::new(context).run_weekly(&sessions);
    let sections: Vec<_> = blocks.iter().map(|b| b.section.as_str()).collect();
    assert_eq!(sections, vec!["61_N", "61_N1", "62_K"]);
}

#[tokio::test]
async fn configured_lead_time_moves_alerts() {
    let routine = setup_temp_routine(SAMPLE_ROUTINE).await.unwrap();
    let config = config_for(
        &routine.routine_path,
        "alert_lead_minutes = 30\nsection = \"61_N\"\n",
    );

    let sessions = load_sessions(&config.routine_path).await.unwrap();
    let query = RoutineQuery::new(config.default_search().unwrap()).with_day(Weekday::Saturday);
    let alerts = plan_alerts(&query.run(&sessions), config.alert_lead_minutes);

    assert_eq!(alerts.len(), 2);
    assert_eq!((alerts[0].hour, alerts[0].minute), (8, 0));
    assert_eq!(alerts[0].title, "CSE101 starts in 30 minutes");
    assert_eq!((alerts[1].hour, alerts[1].minute), (12, 30));
}

#[tokio::test]
async fn missing_routine_file_is_an_io_error() {
    let routine = setup_temp_routine(SAMPLE_ROUTINE).await.unwrap();
    let missing = routine.dir.path().join("missing.json");

    let err = load_sessions(&missing).await.unwrap_err();
    assert!(matches!(err, RoutineError::Io { .. }));
}

#[tokio::test]
async fn malformed_routine_file_is_a_parse_error() {
    let routine = setup_temp_routine("{\"id\": 1}").await.unwrap();

    let err = load_sessions(&routine.routine_path).await.unwrap_err();
    assert!(matches!(err, RoutineError::Parse { .. }));
    assert!(err.to_string().contains("routine.json"));
}
