use super::state::CalendarState;
use super::util::{short_name, week_order};
use super::Direction;
use crate::theme::{FILLER_STYLE, SELECTED_STYLE, TITLE_STYLE, TODAY_STYLE, WEEKDAY_STYLE};
use ratatui::{
    buffer::Buffer,
    layout::{Flex, Layout, Rect},
    style::Style,
    text::Text,
    widgets::{Paragraph, StatefulWidget, Widget},
};
use time::Weekday;

const WEEK_COLUMNS: u16 = 7;

/// Number of columns per day of week (a four-column cell plus a gap)
const DAY_WIDTH: u16 = 5;

/// Width of the grid in columns
const GRID_WIDTH: u16 = WEEK_COLUMNS * DAY_WIDTH - 1;

/// Number of lines taken up by the month label, the weekday names, and the
/// rule under them
const HEADER_LINES: u16 = 3;

const ACS_HLINE: char = '─';

/// Renders a [`CalendarState`] as a centered seven-column month grid.  The
/// cursor is the renderer's focus, not part of the calendar state; the
/// focused day is drawn in brackets.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct MonthView {
    pub(crate) cursor: Option<u8>,
}

impl StatefulWidget for MonthView {
    type State = CalendarState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut CalendarState) {
        let [area] = Layout::horizontal([GRID_WIDTH.min(area.width)])
            .flex(Flex::Center)
            .areas(area);
        let layout = state.layout();
        let mut canvas = GridCanvas::new(area, buf, layout.direction);
        canvas.draw_title(&state.month_label());
        canvas.draw_header(layout.week_start);
        for (i, &cell) in std::iter::zip(0u16.., &state.current_grid()) {
            let style = if state.is_selected(cell) {
                SELECTED_STYLE
            } else if state.is_today(cell) {
                TODAY_STYLE
            } else if cell.in_month {
                Style::new()
            } else {
                FILLER_STYLE
            };
            let focused = cell.in_month && self.cursor == Some(cell.day);
            canvas.draw_day(i / WEEK_COLUMNS, i % WEEK_COLUMNS, cell.day, focused, style);
        }
    }
}

#[derive(Debug, Eq, PartialEq)]
struct GridCanvas<'a> {
    area: Rect,
    buf: &'a mut Buffer,
    direction: Direction,
}

impl<'a> GridCanvas<'a> {
    fn new(area: Rect, buf: &'a mut Buffer, direction: Direction) -> Self {
        GridCanvas {
            area,
            buf,
            direction,
        }
    }

    // Maps a logical column (0 = week start) to an x position; under RTL
    // the columns run right-to-left.
    fn column_x(&self, col: u16) -> u16 {
        let col = match self.direction {
            Direction::LeftToRight => col,
            Direction::RightToLeft => WEEK_COLUMNS - 1 - col,
        };
        col * DAY_WIDTH
    }

    fn draw_title(&mut self, label: &str) {
        let width = u16::try_from(label.len()).unwrap_or(u16::MAX);
        self.mvprint(0, GRID_WIDTH.saturating_sub(width) / 2, label, TITLE_STYLE);
    }

    fn draw_header(&mut self, week_start: Weekday) {
        for (col, wd) in std::iter::zip(0u16.., week_order(week_start)) {
            let x = self.column_x(col);
            self.mvprint(1, x, format!(" {} ", short_name(wd)), WEEKDAY_STYLE);
        }
        self.mvprint(
            2,
            0,
            String::from(ACS_HLINE).repeat(GRID_WIDTH.into()),
            Style::new(),
        );
    }

    fn draw_day(&mut self, row: u16, col: u16, day: u8, focused: bool, style: Style) {
        let s = if focused {
            format!("[{day:2}]")
        } else {
            format!(" {day:2} ")
        };
        let x = self.column_x(col);
        self.mvprint(row + HEADER_LINES, x, s, style);
    }

    fn mvprint<S: AsRef<str>>(&mut self, y: u16, x: u16, s: S, style: Style) {
        if y < self.area.height && x < self.area.width {
            let text = Text::styled(s.as_ref(), style);
            let width = u16::try_from(text.width()).unwrap_or(u16::MAX);
            // Using a Paragraph lets us truncate text that extends beyond
            // the grid's area, though we need to be sure that the Rect
            // passed to the Paragraph is entirely within the frame lest a
            // panic result.
            Paragraph::new(text).render(
                Rect {
                    x: x + self.area.x,
                    y: y + self.area.y,
                    width: (self.area.width - x).min(width),
                    height: 1,
                },
                self.buf,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::{DayCell, WeekLayout};
    use time::macros::date;

    fn march_state(layout: WeekLayout) -> CalendarState {
        CalendarState::new(date!(2024 - 03 - 10), layout)
    }

    #[test]
    fn test_render_month() {
        let mut state = march_state(WeekLayout::LTR_SUNDAY);
        let area = Rect::new(0, 0, 34, 9);
        let mut buffer = Buffer::empty(area);
        MonthView { cursor: None }.render(area, &mut buffer, &mut state);
        let mut expected = Buffer::with_lines([
            "            March 2024            ",
            " Su   Mo   Tu   We   Th   Fr   Sa ",
            "──────────────────────────────────",
            " 25   26   27   28   29    1    2 ",
            "  3    4    5    6    7    8    9 ",
            " 10   11   12   13   14   15   16 ",
            " 17   18   19   20   21   22   23 ",
            " 24   25   26   27   28   29   30 ",
            " 31                               ",
        ]);
        expected.set_style(Rect::new(12, 0, 10, 1), TITLE_STYLE);
        for x in [0, 5, 10, 15, 20, 25, 30] {
            expected.set_style(Rect::new(x, 1, 4, 1), WEEKDAY_STYLE);
        }
        for x in [0, 5, 10, 15, 20] {
            expected.set_style(Rect::new(x, 3, 4, 1), FILLER_STYLE);
        }
        expected.set_style(Rect::new(0, 5, 4, 1), TODAY_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_selection_and_cursor() {
        let mut state = march_state(WeekLayout::LTR_SUNDAY);
        state.select_day(DayCell {
            day: 12,
            in_month: true,
        });
        let area = Rect::new(0, 0, 34, 9);
        let mut buffer = Buffer::empty(area);
        MonthView { cursor: Some(12) }.render(area, &mut buffer, &mut state);
        let mut expected = Buffer::with_lines([
            "            March 2024            ",
            " Su   Mo   Tu   We   Th   Fr   Sa ",
            "──────────────────────────────────",
            " 25   26   27   28   29    1    2 ",
            "  3    4    5    6    7    8    9 ",
            " 10   11  [12]  13   14   15   16 ",
            " 17   18   19   20   21   22   23 ",
            " 24   25   26   27   28   29   30 ",
            " 31                               ",
        ]);
        expected.set_style(Rect::new(12, 0, 10, 1), TITLE_STYLE);
        for x in [0, 5, 10, 15, 20, 25, 30] {
            expected.set_style(Rect::new(x, 1, 4, 1), WEEKDAY_STYLE);
        }
        for x in [0, 5, 10, 15, 20] {
            expected.set_style(Rect::new(x, 3, 4, 1), FILLER_STYLE);
        }
        // Day 10 carries no "today" highlight while a selection is live.
        expected.set_style(Rect::new(10, 5, 4, 1), SELECTED_STYLE);
        assert_eq!(buffer, expected);
    }

    #[test]
    fn test_render_right_to_left() {
        let layout = WeekLayout {
            direction: Direction::RightToLeft,
            ..WeekLayout::LTR_SUNDAY
        };
        let mut state = march_state(layout);
        let area = Rect::new(0, 0, 34, 9);
        let mut buffer = Buffer::empty(area);
        MonthView { cursor: None }.render(area, &mut buffer, &mut state);
        let mut expected = Buffer::with_lines([
            "            March 2024            ",
            " Sa   Fr   Th   We   Tu   Mo   Su ",
            "──────────────────────────────────",
            "  2    1   29   28   27   26   25 ",
            "  9    8    7    6    5    4    3 ",
            " 16   15   14   13   12   11   10 ",
            " 23   22   21   20   19   18   17 ",
            " 30   29   28   27   26   25   24 ",
            "                               31 ",
        ]);
        expected.set_style(Rect::new(12, 0, 10, 1), TITLE_STYLE);
        for x in [0, 5, 10, 15, 20, 25, 30] {
            expected.set_style(Rect::new(x, 1, 4, 1), WEEKDAY_STYLE);
        }
        for x in [10, 15, 20, 25, 30] {
            expected.set_style(Rect::new(x, 3, 4, 1), FILLER_STYLE);
        }
        expected.set_style(Rect::new(30, 5, 4, 1), TODAY_STYLE);
        assert_eq!(buffer, expected);
    }
}
