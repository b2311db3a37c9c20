//! Built-in demo sessions seeding the UI.
//!
//! The app is client-only; the log starts with a recent block of
//! training so the dashboard and list render something useful.

use chrono::{Duration, Utc};
use core_types::{SessionKind, TrainingSession};

/// A recent block of training.
pub fn demo_sessions() -> Vec<TrainingSession> {
    let now = Utc::now();
    let mut sessions = Vec::new();

    let mut s = TrainingSession::new("s_012", SessionKind::Gi, now - Duration::hours(20), 90);
    s.record_rounds(5);
    s.add_technique("Knee cut pass");
    s.add_technique("Cross collar choke from mount");
    s.set_notes("Kept top pressure well; gave up one sweep to the lasso player.");
    sessions.push(s);

    let mut s = TrainingSession::new(
        "s_011",
        SessionKind::NoGi,
        now - Duration::days(1) - Duration::hours(19),
        60,
    );
    s.record_rounds(6);
    s.add_technique("Arm drag to back take");
    s.add_technique("Rear naked choke");
    sessions.push(s);

    let mut s = TrainingSession::new("s_010", SessionKind::Drilling, now - Duration::days(2), 45);
    s.add_technique("Triangle from closed guard");
    s.add_technique("Hip bump sweep");
    s.set_notes("Slow reps, focused on the angle before locking the triangle.");
    sessions.push(s);

    let mut s = TrainingSession::new("s_009", SessionKind::OpenMat, now - Duration::days(4), 120);
    s.record_rounds(9);
    s.add_technique("Half guard knee shield");
    s.set_notes("Long rounds. Cardio held up better than last month.");
    sessions.push(s);

    let mut s = TrainingSession::new("s_008", SessionKind::Gi, now - Duration::days(5), 90);
    s.record_rounds(4);
    s.add_technique("Spider guard sweep");
    s.add_technique("Bow and arrow choke");
    sessions.push(s);

    let mut s = TrainingSession::new("s_007", SessionKind::NoGi, now - Duration::days(7), 60);
    s.record_rounds(5);
    s.add_technique("Single leg finish against the wall");
    sessions.push(s);

    let mut s = TrainingSession::new("s_006", SessionKind::Gi, now - Duration::days(9), 90);
    s.record_rounds(5);
    s.add_technique("De la Riva to berimbolo");
    s.set_notes("Berimbolo still loses the back on bigger partners.");
    sessions.push(s);

    let mut s = TrainingSession::new("s_005", SessionKind::Seminar, now - Duration::days(12), 150);
    s.add_technique("Body lock passing system");
    s.set_notes("Visiting black belt seminar on body lock passing.");
    sessions.push(s);

    sessions
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_sessions_have_unique_ids() {
        let sessions = demo_sessions();
        let ids: HashSet<_> = sessions.iter().map(|s| s.id.as_str()).collect();

        assert!(!sessions.is_empty());
        assert_eq!(ids.len(), sessions.len());
    }

    #[test]
    fn test_demo_sessions_are_recent() {
        let now = Utc::now();
        for s in demo_sessions() {
            assert!(s.started_at < now);
            assert!(s.duration_mins > 0);
        }
    }
}
