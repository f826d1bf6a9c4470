// src/services/timer_service.rs
//
// One timer session at a time, modelled as an explicit state machine:
// idle -> running <-> paused -> stopped. Elapsed time accumulates across
// pause/resume cycles; a paused session does not age.

use chrono::{DateTime, Duration, Utc};
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum TimerPhase {
    Idle,
    Running,
    Paused,
    Stopped,
}

#[derive(Debug, Clone)]
pub struct TimerSession {
    pub project_id: Uuid,
    pub description: Option<String>,
    pub started_at: DateTime<Utc>,
    // Time banked by completed run segments.
    accumulated: Duration,
    // Start of the current run segment; None while paused.
    segment_started_at: Option<DateTime<Utc>>,
}

// Snapshot produced by stop(), ready to persist as a TimeLog.
#[derive(Debug)]
pub struct FinishedSession {
    pub project_id: Uuid,
    pub description: Option<String>,
    pub started_at: DateTime<Utc>,
    pub ended_at: DateTime<Utc>,
    // Whole minutes, floored.
    pub duration_minutes: i32,
}

impl TimerSession {
    pub fn start(project_id: Uuid, description: Option<String>, now: DateTime<Utc>) -> Self {
        Self {
            project_id,
            description,
            started_at: now,
            accumulated: Duration::zero(),
            segment_started_at: Some(now),
        }
    }

    pub fn phase(&self) -> TimerPhase {
        if self.segment_started_at.is_some() {
            TimerPhase::Running
        } else {
            TimerPhase::Paused
        }
    }

    // Banks the current segment. A no-op when already paused.
    pub fn pause(&mut self, now: DateTime<Utc>) {
        if let Some(segment_start) = self.segment_started_at.take() {
            self.accumulated = self.accumulated + (now - segment_start);
        }
    }

    // Opens a new segment. A no-op when already running.
    pub fn resume(&mut self, now: DateTime<Utc>) {
        if self.segment_started_at.is_none() {
            self.segment_started_at = Some(now);
        }
    }

    pub fn elapsed(&self, now: DateTime<Utc>) -> Duration {
        match self.segment_started_at {
            Some(segment_start) => self.accumulated + (now - segment_start),
            None => self.accumulated,
        }
    }

    pub fn stop(mut self, now: DateTime<Utc>) -> FinishedSession {
        self.pause(now);
        let duration_minutes = (self.accumulated.num_milliseconds() / 60_000) as i32;
        FinishedSession {
            project_id: self.project_id,
            description: self.description,
            started_at: self.started_at,
            ended_at: now,
            duration_minutes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(now: DateTime<Utc>) -> TimerSession {
        TimerSession::start(Uuid::new_v4(), Some("deep work".to_string()), now)
    }

    #[test]
    fn ninety_seconds_floors_to_one_minute() {
        let t0 = Utc::now();
        let s = session(t0);
        let finished = s.stop(t0 + Duration::seconds(90));
        assert_eq!(finished.duration_minutes, 1);
        assert_eq!(finished.started_at, t0);
        assert_eq!(finished.ended_at, t0 + Duration::seconds(90));
    }

    #[test]
    fn paused_time_does_not_count() {
        let t0 = Utc::now();
        let mut s = session(t0);
        s.pause(t0 + Duration::minutes(10));
        s.resume(t0 + Duration::minutes(60));
        let finished = s.stop(t0 + Duration::minutes(65));
        // 10 running + 50 paused + 5 running.
        assert_eq!(finished.duration_minutes, 15);
    }

    #[test]
    fn elapsed_freezes_while_paused() {
        let t0 = Utc::now();
        let mut s = session(t0);
        s.pause(t0 + Duration::minutes(3));
        assert_eq!(s.phase(), TimerPhase::Paused);
        assert_eq!(s.elapsed(t0 + Duration::minutes(30)), Duration::minutes(3));
    }

    #[test]
    fn pause_and_resume_are_idempotent_within_a_phase() {
        let t0 = Utc::now();
        let mut s = session(t0);
        s.resume(t0 + Duration::minutes(1)); // already running
        s.pause(t0 + Duration::minutes(2));
        s.pause(t0 + Duration::minutes(4)); // already paused
        assert_eq!(s.elapsed(t0 + Duration::minutes(10)), Duration::minutes(2));
    }

    #[test]
    fn sub_minute_session_persists_zero_minutes() {
        let t0 = Utc::now();
        let finished = session(t0).stop(t0 + Duration::seconds(59));
        assert_eq!(finished.duration_minutes, 0);
    }
}
