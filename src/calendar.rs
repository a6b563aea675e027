use chrono::NaiveDate;

use crate::error::{InvadersError, InvadersResult};

/// Number of days a well-formed contribution week carries.
pub const DAYS_PER_WEEK: usize = 7;

/// One calendar day of recorded activity. Produced wholesale by the fetch,
/// never mutated afterwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContributionDay {
    pub date: NaiveDate,
    pub count: u32,
}

/// One calendar week, day-of-week order.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContributionWeek {
    pub days: Vec<ContributionDay>,
}

/// Roughly one year of weeks, chronological order. `total` is the
/// service-reported total contribution count.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContributionCalendar {
    pub total: u32,
    pub weeks: Vec<ContributionWeek>,
}

impl ContributionWeek {
    pub fn validate(&self) -> InvadersResult<()> {
        if self.days.len() != DAYS_PER_WEEK {
            return Err(InvadersError::validation(format!(
                "week must have exactly {DAYS_PER_WEEK} days, got {}",
                self.days.len()
            )));
        }
        Ok(())
    }
}

impl ContributionCalendar {
    /// An empty calendar (zero weeks). Valid input for rendering.
    pub fn empty() -> Self {
        Self {
            total: 0,
            weeks: Vec::new(),
        }
    }

    pub fn validate(&self) -> InvadersResult<()> {
        for (index, week) in self.weeks.iter().enumerate() {
            if week.days.len() != DAYS_PER_WEEK {
                return Err(InvadersError::validation(format!(
                    "week {index} must have exactly {DAYS_PER_WEEK} days, got {}",
                    week.days.len()
                )));
            }
        }
        Ok(())
    }

    /// Walk every day in chronological order as `(week_index, day_index, day)`.
    pub fn iter_days(&self) -> impl Iterator<Item = (usize, usize, &ContributionDay)> {
        self.weeks.iter().enumerate().flat_map(|(week, w)| {
            w.days
                .iter()
                .enumerate()
                .map(move |(day, d)| (week, day, d))
        })
    }

    /// Number of days with at least one contribution.
    pub fn days_with_activity(&self) -> usize {
        self.iter_days().filter(|(_, _, d)| d.count > 0).count()
    }
}
