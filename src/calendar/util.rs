use time::{Month, Weekday, Weekday::*};

const DAYS_IN_WEEK: u8 = 7;

pub(super) fn is_leap_year(year: i64) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

pub(super) fn days_in_month(year: i64, month: Month) -> u8 {
    match month {
        Month::January
        | Month::March
        | Month::May
        | Month::July
        | Month::August
        | Month::October
        | Month::December => 31,
        Month::April | Month::June | Month::September | Month::November => 30,
        Month::February => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
    }
}

// Sakamoto's method over the proleptic Gregorian calendar.  Unlike
// time::Date, this works for any i64 year, which keeps month arithmetic
// total no matter how far the user pages.
pub(super) fn first_weekday(year: i64, month: Month) -> Weekday {
    const OFFSETS: [i64; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let m = usize::from(u8::from(month));
    let y = if m < 3 { year - 1 } else { year };
    let index = (y + y.div_euclid(4) - y.div_euclid(100) + y.div_euclid(400) + OFFSETS[m - 1] + 1)
        .rem_euclid(7);
    match index {
        0 => Sunday,
        1 => Monday,
        2 => Tuesday,
        3 => Wednesday,
        4 => Thursday,
        5 => Friday,
        6 => Saturday,
        _ => unreachable!(),
    }
}

/// Zero-based column index of `weekday` in a week that starts on
/// `week_start`.
pub(super) fn week_index(weekday: Weekday, week_start: Weekday) -> u8 {
    (weekday.number_days_from_sunday() + DAYS_IN_WEEK - week_start.number_days_from_sunday())
        % DAYS_IN_WEEK
}

/// The seven weekdays in display order, starting from `week_start`.
pub(super) fn week_order(week_start: Weekday) -> [Weekday; 7] {
    let mut order = [week_start; 7];
    let mut wd = week_start;
    for slot in &mut order[1..] {
        wd = wd.next();
        *slot = wd;
    }
    order
}

pub(super) fn short_name(weekday: Weekday) -> &'static str {
    match weekday {
        Sunday => "Su",
        Monday => "Mo",
        Tuesday => "Tu",
        Wednesday => "We",
        Thursday => "Th",
        Friday => "Fr",
        Saturday => "Sa",
    }
}
