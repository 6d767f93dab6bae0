use crate::calendar::{CalendarState, DayCell, Direction, MonthView};
use crate::help::Help;
use crate::theme::BASE_STYLE;
use crossterm::event::{read, KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    backend::Backend,
    buffer::Buffer,
    layout::Rect,
    widgets::{StatefulWidget, Widget},
    Terminal,
};
use std::io::{self, Write};

/// The event loop around a [`CalendarState`]: draws the month view, reads
/// one key at a time, and turns keys into paging and selection intents.
///
/// The cursor (the day the next ENTER would select) lives here rather than
/// in the calendar state; it is a rendering concern.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct App {
    state: CalendarState,
    cursor: u8,
    screen: Screen,
}

impl App {
    pub(crate) fn new(state: CalendarState) -> App {
        let cursor = if state.page().contains(state.today()) {
            state.today().day()
        } else {
            1
        };
        App {
            state,
            cursor,
            screen: Screen::Calendar,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting() {
            self.draw(&mut terminal)?;
            self.handle_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        terminal.draw(|frame| frame.render_widget(self, frame.area()))?;
        Ok(())
    }

    fn handle_input(&mut self) -> io::Result<()> {
        let normal_modifiers = KeyModifiers::NONE | KeyModifiers::SHIFT;
        if let Some(KeyEvent {
            code, modifiers, ..
        }) = read()?.as_key_press_event()
        {
            if modifiers == KeyModifiers::CONTROL && code == KeyCode::Char('c') {
                self.screen = Screen::Quitting;
            } else if !normal_modifiers.contains(modifiers) || !self.handle_key(code) {
                self.beep()?;
            }
        }
        // else: Redraw on resize, and we might as well redraw on other stuff
        // too
        Ok(())
    }

    // Returns `false` if the user pressed an invalid key
    fn handle_key(&mut self, key: KeyCode) -> bool {
        match self.screen {
            Screen::Calendar => match key {
                KeyCode::Char('h') | KeyCode::Left => self.move_cursor(-self.day_step()),
                KeyCode::Char('l') | KeyCode::Right => self.move_cursor(self.day_step()),
                KeyCode::Char('k') | KeyCode::Up => self.move_cursor(-7),
                KeyCode::Char('j') | KeyCode::Down => self.move_cursor(7),
                KeyCode::Enter | KeyCode::Char(' ') => {
                    self.select_under_cursor();
                    true
                }
                KeyCode::Char('[') | KeyCode::PageUp => {
                    self.page_month(-1);
                    true
                }
                KeyCode::Char(']') | KeyCode::PageDown => {
                    self.page_month(1);
                    true
                }
                KeyCode::Char('{') => {
                    self.page_month(-12);
                    true
                }
                KeyCode::Char('}') => {
                    self.page_month(12);
                    true
                }
                KeyCode::Char('0' | 't') | KeyCode::Home => {
                    self.jump_to_today();
                    true
                }
                KeyCode::Char('?') => {
                    self.screen = Screen::Helping;
                    true
                }
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.screen = Screen::Quitting;
                    true
                }
                _ => false,
            },
            Screen::Helping => {
                self.screen = Screen::Calendar;
                true
            }
            Screen::Quitting => false,
        }
    }

    fn beep(&self) -> io::Result<()> {
        io::stdout().write_all(b"\x07")
    }

    fn quitting(&self) -> bool {
        self.screen == Screen::Quitting
    }

    // Under a right-to-left layout the column order is mirrored, so the
    // LEFT and RIGHT keys move the cursor the other way through the month.
    fn day_step(&self) -> i16 {
        match self.state.layout().direction {
            Direction::LeftToRight => 1,
            Direction::RightToLeft => -1,
        }
    }

    fn move_cursor(&mut self, delta: i16) -> bool {
        let days = i16::from(self.state.page().days());
        let moved = (i16::from(self.cursor) + delta).clamp(1, days);
        let moved = u8::try_from(moved).expect("cursor is clamped to 1..=31");
        if moved == self.cursor {
            false
        } else {
            self.cursor = moved;
            true
        }
    }

    fn select_under_cursor(&mut self) {
        self.state.select_day(DayCell {
            day: self.cursor,
            in_month: true,
        });
    }

    fn page_month(&mut self, offset: i32) {
        self.state.page_month(offset);
        // Keep the focused day, clamped to the new month's length.
        self.cursor = self.cursor.min(self.state.page().days());
    }

    fn jump_to_today(&mut self) {
        self.state.jump_to_today();
        self.cursor = self.state.today().day();
    }
}

impl Widget for &mut App {
    fn render(self, area: Rect, buf: &mut Buffer) {
        buf.set_style(area, BASE_STYLE);
        MonthView {
            cursor: Some(self.cursor),
        }
        .render(area, buf, &mut self.state);
        if self.screen == Screen::Helping {
            Help(BASE_STYLE).render(area, buf);
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Screen {
    Calendar,
    Helping,
    Quitting,
}
