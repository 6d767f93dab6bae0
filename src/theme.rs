use ratatui::style::{Color, Modifier, Style};

pub(crate) const BASE_STYLE: Style = Style::new().fg(Color::White).bg(Color::Black);

pub(crate) const TITLE_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

pub(crate) const WEEKDAY_STYLE: Style = Style::new().add_modifier(Modifier::BOLD);

/// Days borrowed from the previous month to fill the first row
pub(crate) const FILLER_STYLE: Style = Style::new().fg(Color::DarkGray);

pub(crate) const TODAY_STYLE: Style = Style::new()
    .fg(Color::LightGreen)
    .add_modifier(Modifier::BOLD);

pub(crate) const SELECTED_STYLE: Style = Style::new().fg(Color::Black).bg(Color::LightGreen);
