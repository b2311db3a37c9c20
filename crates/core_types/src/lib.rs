//! Core types for the matlog training journal.
//!
//! This crate defines the shared data structures used across
//! the dashboard, session list, and timer surfaces, plus the pure
//! statistics logic behind the dashboard widgets.

use std::collections::HashSet;

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Kind of training session, used for filtering and breakdowns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionKind {
    /// Regular gi class
    Gi,
    /// No-gi / submission grappling class
    NoGi,
    /// Open mat (free sparring)
    OpenMat,
    /// Drilling-only session
    Drilling,
    /// Competition day
    Competition,
    /// Seminar or workshop
    Seminar,
}

impl SessionKind {
    /// All kinds, in display order.
    pub const ALL: [SessionKind; 6] = [
        SessionKind::Gi,
        SessionKind::NoGi,
        SessionKind::OpenMat,
        SessionKind::Drilling,
        SessionKind::Competition,
        SessionKind::Seminar,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            SessionKind::Gi => "Gi",
            SessionKind::NoGi => "No-Gi",
            SessionKind::OpenMat => "Open Mat",
            SessionKind::Drilling => "Drilling",
            SessionKind::Competition => "Competition",
            SessionKind::Seminar => "Seminar",
        }
    }
}

/// A single logged training session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingSession {
    /// Unique session identifier
    pub id: String,
    /// Kind of session for filtering and breakdowns
    pub kind: SessionKind,
    /// When the session started
    pub started_at: DateTime<Utc>,
    /// Time on the mat in minutes
    pub duration_mins: u32,
    /// Sparring rounds completed
    pub rounds_sparred: u32,
    /// Techniques drilled or hit during the session
    pub techniques: Vec<String>,
    /// Free-form notes
    pub notes: Option<String>,
}

impl TrainingSession {
    /// Create a new session with no rounds, techniques, or notes.
    pub fn new(
        id: impl Into<String>,
        kind: SessionKind,
        started_at: DateTime<Utc>,
        duration_mins: u32,
    ) -> Self {
        Self {
            id: id.into(),
            kind,
            started_at,
            duration_mins,
            rounds_sparred: 0,
            techniques: Vec::new(),
            notes: None,
        }
    }

    /// Record the number of sparring rounds completed.
    pub fn record_rounds(&mut self, rounds: u32) {
        self.rounds_sparred = rounds;
    }

    /// Add a technique worked during the session.
    pub fn add_technique(&mut self, technique: impl Into<String>) {
        self.techniques.push(technique.into());
    }

    /// Attach free-form notes.
    pub fn set_notes(&mut self, notes: impl Into<String>) {
        self.notes = Some(notes.into());
    }
}

/// Per-kind session counts for the breakdown widget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KindStats {
    /// Session kind
    pub kind: SessionKind,
    /// Number of sessions of this kind
    pub count: u32,
    /// Total mat minutes of this kind
    pub minutes: u32,
}

/// Aggregate statistics rendered by the dashboard widgets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStats {
    /// Total logged sessions
    pub total_sessions: u32,
    /// Total mat time in minutes
    pub total_mat_minutes: u32,
    /// Sessions started within the last 7 days
    pub sessions_this_week: u32,
    /// Total sparring rounds
    pub rounds_sparred: u32,
    /// Consecutive training days ending today or yesterday
    pub current_streak_days: u32,
    /// Mean session length in minutes (0 when no sessions)
    pub avg_session_mins: f64,
    /// Per-kind breakdown; kinds with no sessions are omitted
    pub kind_breakdown: Vec<KindStats>,
}

/// Compute dashboard statistics from a set of sessions.
pub fn summarize(sessions: &[TrainingSession], now: DateTime<Utc>) -> TrainingStats {
    let total_sessions = sessions.len() as u32;
    let total_mat_minutes: u32 = sessions.iter().map(|s| s.duration_mins).sum();
    let rounds_sparred: u32 = sessions.iter().map(|s| s.rounds_sparred).sum();

    let week_start = now - Duration::days(7);
    let sessions_this_week = sessions
        .iter()
        .filter(|s| s.started_at > week_start && s.started_at <= now)
        .count() as u32;

    let avg_session_mins = if total_sessions == 0 {
        0.0
    } else {
        f64::from(total_mat_minutes) / f64::from(total_sessions)
    };

    let kind_breakdown: Vec<KindStats> = SessionKind::ALL
        .iter()
        .map(|&kind| {
            let (count, minutes) = sessions
                .iter()
                .filter(|s| s.kind == kind)
                .fold((0u32, 0u32), |(count, minutes), s| {
                    (count + 1, minutes + s.duration_mins)
                });
            KindStats {
                kind,
                count,
                minutes,
            }
        })
        .filter(|s| s.count > 0)
        .collect();

    TrainingStats {
        total_sessions,
        total_mat_minutes,
        sessions_this_week,
        rounds_sparred,
        current_streak_days: current_streak_days(sessions, now.date_naive()),
        avg_session_mins,
        kind_breakdown,
    }
}

/// Count consecutive calendar days with at least one session.
///
/// The streak is anchored at `today`, or at yesterday if today has no
/// session yet — a streak holds until a full day is actually missed.
pub fn current_streak_days(sessions: &[TrainingSession], today: NaiveDate) -> u32 {
    let days: HashSet<NaiveDate> = sessions.iter().map(|s| s.started_at.date_naive()).collect();

    let mut day = today;
    if !days.contains(&day) {
        day = day - Duration::days(1);
        if !days.contains(&day) {
            return 0;
        }
    }

    let mut streak = 0;
    while days.contains(&day) {
        streak += 1;
        day = day - Duration::days(1);
    }
    streak
}
