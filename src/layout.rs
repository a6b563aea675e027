use kurbo::Point;

use crate::{
    bands::Band,
    calendar::ContributionCalendar,
    error::{InvadersError, InvadersResult},
};

/// Output canvas dimensions in pixels.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Canvas {
    pub width: f64,
    pub height: f64,
}

/// One rendered calendar day: grid position plus pixel coordinate and band.
/// Derived from a calendar, never stored.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize)]
pub struct RenderedCell {
    pub week: usize,
    pub day: usize,
    pub origin: Point,
    pub band: Band,
}

/// Maps `(week_index, day_index)` to pixel coordinates. Column = week,
/// row = day-of-week.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GridLayout {
    pub origin: Point,
    /// Distance between adjacent cell origins, both axes.
    pub stride: f64,
    /// Side length of one square cell. Must not exceed `stride`.
    pub cell_size: f64,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            origin: Point::new(30.0, 20.0),
            stride: 13.0,
            cell_size: 10.0,
        }
    }
}

impl GridLayout {
    pub fn validate(&self) -> InvadersResult<()> {
        if !(self.stride > 0.0) {
            return Err(InvadersError::validation("layout stride must be > 0"));
        }
        if !(self.cell_size > 0.0) {
            return Err(InvadersError::validation("layout cell_size must be > 0"));
        }
        if self.cell_size > self.stride {
            return Err(InvadersError::validation(
                "layout cell_size must not exceed stride",
            ));
        }
        Ok(())
    }

    /// Pixel origin of the cell at `(week, day)`.
    pub fn position(&self, week: usize, day: usize) -> Point {
        Point::new(
            self.origin.x + week as f64 * self.stride,
            self.origin.y + day as f64 * self.stride,
        )
    }

    /// Canvas sized to the calendar: fixed 200px tall (grid band on top,
    /// ship band at the bottom), at least 900px wide so short calendars keep
    /// the classic frame, wider when the week count needs it.
    pub fn canvas_for(&self, calendar: &ContributionCalendar) -> Canvas {
        let grid_width = self.origin.x * 2.0 + calendar.weeks.len() as f64 * self.stride;
        Canvas {
            width: grid_width.max(900.0),
            height: 200.0,
        }
    }

    /// One cell per day with activity, chronological order.
    ///
    /// Fails fast on a malformed calendar rather than laying out a partial
    /// grid.
    pub fn cells(&self, calendar: &ContributionCalendar) -> InvadersResult<Vec<RenderedCell>> {
        self.validate()?;
        calendar.validate()?;

        let mut cells = Vec::with_capacity(calendar.days_with_activity());
        for (week, day, contribution) in calendar.iter_days() {
            if contribution.count == 0 {
                continue;
            }
            cells.push(RenderedCell {
                week,
                day,
                origin: self.position(week, day),
                band: Band::for_count(contribution.count),
            });
        }
        Ok(cells)
    }
}
