mod grid;
mod month;
mod state;
mod util;
mod widget;
pub(crate) use self::grid::DayCell;
pub(crate) use self::month::MonthPage;
pub(crate) use self::state::CalendarState;
pub(crate) use self::widget::MonthView;
use time::Weekday;

/// How the renderer lays a week out: which weekday occupies column 0 and
/// whether columns run left-to-right or right-to-left.  Direction affects
/// only rendering order, never the cell data.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct WeekLayout {
    pub(crate) week_start: Weekday,
    pub(crate) direction: Direction,
}

impl WeekLayout {
    pub(crate) const LTR_SUNDAY: WeekLayout = WeekLayout {
        week_start: Weekday::Sunday,
        direction: Direction::LeftToRight,
    };
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Direction {
    LeftToRight,
    RightToLeft,
}
