use once_cell::sync::Lazy;
use regex::Regex;
use std::{cmp::Ordering, fmt};

static MONTH_YEAR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(January|February|March|April|May|June|July|August|September|October|November|December)\s([0-9]{4})$",
    )
    .expect("Invalid month-year regex pattern")
});

const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display date in the fixed `"<FullMonthName> <4-digit Year>"` form.
///
/// Stored values stay plain strings; this type only exists to check the
/// format and to sort time-based collections chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MonthYear {
    year: u16,
    month: u8,
}

impl MonthYear {
    pub fn parse(value: &str) -> Option<Self> {
        let caps = MONTH_YEAR.captures(value)?;
        let month = MONTHS.iter().position(|m| *m == &caps[1])? as u8 + 1;
        let year = caps[2].parse().ok()?;
        Some(Self { year, month })
    }

    pub fn is_valid(value: &str) -> bool {
        MONTH_YEAR.is_match(value)
    }

    pub fn year(&self) -> u16 {
        self.year
    }

    pub fn month(&self) -> u8 {
        self.month
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", MONTHS[(self.month - 1) as usize], self.year)
    }
}

/// Orders `(start, end)` ranges newest first: later start wins, then an
/// ongoing range (empty end) before a finished one, then later end.
/// Unparseable dates sort last.
pub fn compare_newest_first(a: (&str, &str), b: (&str, &str)) -> Ordering {
    let key = |(start, end): (&str, &str)| {
        (
            MonthYear::parse(start),
            end.trim().is_empty(),
            MonthYear::parse(end),
        )
    };
    key(b).cmp(&key(a))
}
