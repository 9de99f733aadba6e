//! `TimeUnit` — units accepted by [`EthiopianDate::advance`](crate::EthiopianDate::advance).

/// A unit of calendar time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar weeks (7 days).
    Weeks,
    /// Ethiopian months (13 per year, Pagume included).
    Months,
    /// Ethiopian years.
    Years,
}

impl std::fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeUnit::Days => write!(f, "Day(s)"),
            TimeUnit::Weeks => write!(f, "Week(s)"),
            TimeUnit::Months => write!(f, "Month(s)"),
            TimeUnit::Years => write!(f, "Year(s)"),
        }
    }
}
