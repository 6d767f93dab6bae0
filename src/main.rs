mod app;
mod calendar;
mod help;
mod theme;
use crate::app::App;
use crate::calendar::{CalendarState, Direction, MonthPage, WeekLayout};
use anyhow::Context;
use lexopt::{Arg, Parser, ValueExt};
use ratatui::DefaultTerminal;
use time::{OffsetDateTime, Weekday};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Command {
    Run {
        start: Option<MonthPage>,
        layout: WeekLayout,
    },
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut start = None;
        let mut layout = WeekLayout::LTR_SUNDAY;
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("monday") => layout.week_start = Weekday::Monday,
                Arg::Long("rtl") => layout.direction = Direction::RightToLeft,
                Arg::Value(value) if start.is_none() => {
                    let value = value.string()?;
                    match parse_month(&value) {
                        Some(page) => start = Some(page),
                        None => {
                            return Err(lexopt::Error::ParsingFailed {
                                value,
                                error: "expected a month in YYYY-MM form".into(),
                            })
                        }
                    }
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run { start, layout })
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run { start, layout } => {
                let today = OffsetDateTime::now_local()
                    .context("failed to determine local date")?
                    .date();
                with_terminal(|mut terminal| {
                    terminal.hide_cursor().context("failed to hide cursor")?;
                    let mut state = CalendarState::new(today, layout);
                    if let Some(page) = start {
                        state = state.start_page(page);
                    }
                    App::new(state).run(terminal)?;
                    Ok(())
                })
            }
            Command::Help => {
                println!("Usage: minical [--monday] [--rtl] [YYYY-MM]");
                println!();
                println!("Interactive terminal month calendar with day selection");
                println!();
                println!("Options:");
                println!("  --monday          Start weeks on Monday instead of Sunday");
                println!("  --rtl             Lay the day columns out right-to-left");
                println!("  -h, --help        Display this help message and exit");
                println!("  -V, --version     Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

fn parse_month(s: &str) -> Option<MonthPage> {
    let (year, month) = s.rsplit_once('-')?;
    let year = year.parse::<i64>().ok()?;
    let month = month.parse::<u8>().ok()?;
    MonthPage::new(year, month).ok()
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}

fn with_terminal<F, T>(func: F) -> anyhow::Result<T>
where
    F: FnOnce(DefaultTerminal) -> anyhow::Result<T>,
{
    let terminal = ratatui::init();
    let r = func(terminal);
    ratatui::restore();
    r
}
