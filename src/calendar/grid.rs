use super::month::MonthPage;
use super::util::week_index;
use time::Weekday;

/// One cell of a month grid.
///
/// Leading filler cells carry day numbers borrowed from the end of the
/// previous month, purely for display; they are marked `in_month = false`
/// and cannot be selected.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct DayCell {
    pub(crate) day: u8,
    pub(crate) in_month: bool,
}

/// Builds the ordered cell sequence for `page`: as many leading fillers as
/// the first of the month's column index, then the days of the month in
/// order.  There is no trailing filler; a short final row is the
/// renderer's concern.
pub(crate) fn month_grid(page: MonthPage, week_start: Weekday) -> Vec<DayCell> {
    let lead = week_index(page.first_weekday(), week_start);
    let days = page.days();
    let prev_days = page.add_months(-1).days();
    let mut cells = Vec::with_capacity(usize::from(lead) + usize::from(days));
    cells.extend((prev_days - lead + 1..=prev_days).map(|day| DayCell {
        day,
        in_month: false,
    }));
    cells.extend((1..=days).map(|day| DayCell {
        day,
        in_month: true,
    }));
    cells
}
