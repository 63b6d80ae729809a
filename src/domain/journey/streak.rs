//! Per-domain daily streaks.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive calendar days with at least one activity in a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Streak {
    length: u32,
    last_active: NaiveDate,
}

/// How a recorded activity changed a streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StreakChange {
    Started,
    Extended,
    Unchanged,
    Reset,
}

impl Streak {
    /// A fresh streak of length 1 starting on `day`.
    pub fn start(day: NaiveDate) -> Self {
        Self {
            length: 1,
            last_active: day,
        }
    }

    pub fn length(&self) -> u32 {
        self.length
    }

    pub fn last_active(&self) -> NaiveDate {
        self.last_active
    }

    /// Records activity on `today`.
    ///
    /// Same day leaves the length unchanged, the next day extends it, and
    /// any longer gap restarts it at 1. A `today` earlier than the last
    /// active day is treated as the same day.
    pub fn record(&mut self, today: NaiveDate) -> StreakChange {
        let gap = (today - self.last_active).num_days();
        match gap {
            i64::MIN..=0 => StreakChange::Unchanged,
            1 => {
                self.length += 1;
                self.last_active = today;
                StreakChange::Extended
            }
            _ => {
                self.length = 1;
                self.last_active = today;
                StreakChange::Reset
            }
        }
    }
}
