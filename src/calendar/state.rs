use super::grid::{month_grid, DayCell};
use super::month::MonthPage;
use super::WeekLayout;
use time::Date;

/// The widget's state machine: the displayed month and the selected day,
/// plus the injected "today" and the week layout configuration.
///
/// All transitions are total and synchronous; the grid is recomputed on
/// every [`CalendarState::current_grid`] call rather than stored.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct CalendarState {
    page: MonthPage,
    selected: Option<u8>,
    today: Date,
    layout: WeekLayout,
}

impl CalendarState {
    pub(crate) fn new(today: Date, layout: WeekLayout) -> CalendarState {
        CalendarState {
            page: MonthPage::from(today),
            selected: None,
            today,
            layout,
        }
    }

    /// Open at a month other than today's.
    pub(crate) fn start_page(mut self, page: MonthPage) -> CalendarState {
        self.page = page;
        self
    }

    pub(crate) fn page(&self) -> MonthPage {
        self.page
    }

    pub(crate) fn today(&self) -> Date {
        self.today
    }

    pub(crate) fn layout(&self) -> WeekLayout {
        self.layout
    }

    pub(crate) fn selected(&self) -> Option<u8> {
        self.selected
    }

    /// Moves the displayed month by `offset` months.  Any paging move
    /// drops the selection: a selection is only meaningful relative to the
    /// month it was made in.
    pub(crate) fn page_month(&mut self, offset: i32) {
        self.page = self.page.add_months(offset);
        self.selected = None;
    }

    /// Returns the display to today's month.  Counts as a paging move, so
    /// the selection is dropped even if today's month was already shown.
    pub(crate) fn jump_to_today(&mut self) {
        self.page = MonthPage::from(self.today);
        self.selected = None;
    }

    /// Selects the day under `cell`.  Filler cells and the already-selected
    /// day are ignored; re-selecting is a no-op, not a toggle-off.
    pub(crate) fn select_day(&mut self, cell: DayCell) {
        if cell.in_month && self.selected != Some(cell.day) {
            self.selected = Some(cell.day);
        }
    }

    /// The cell sequence for the displayed month, recomputed per call.
    pub(crate) fn current_grid(&self) -> Vec<DayCell> {
        month_grid(self.page, self.layout.week_start)
    }

    /// Formatted month-and-year heading, e.g. "March 2024".
    pub(crate) fn month_label(&self) -> String {
        self.page.to_string()
    }

    /// Whether `cell` should carry the "today" highlight.  Suppressed
    /// widget-wide whenever any day is selected.
    pub(crate) fn is_today(&self, cell: DayCell) -> bool {
        self.selected().is_none()
            && cell.in_month
            && cell.day == self.today.day()
            && self.page.contains(self.today)
    }

    /// Whether `cell` is the selected day.  Takes precedence over the
    /// "today" highlight.
    pub(crate) fn is_selected(&self, cell: DayCell) -> bool {
        cell.in_month && self.selected() == Some(cell.day)
    }
}
