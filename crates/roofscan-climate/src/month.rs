//! Calendar month reference table.

/// Static description of a calendar month.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthInfo {
    /// Calendar number, 1 (January) through 12 (December).
    pub number: u8,
    /// Full English name, as presented in yield reports.
    pub name: &'static str,
    /// Three-letter uppercase abbreviation, the POWER API's month key.
    pub abbr: &'static str,
    /// Days accumulated for the month.
    ///
    /// February carries 29 days. Climatology values are multi-year
    /// averages tied to no particular year, so the leap count applies.
    pub days: u32,
}

/// The twelve calendar months in order.
pub const MONTHS: [MonthInfo; 12] = [
    MonthInfo { number: 1, name: "January", abbr: "JAN", days: 31 },
    MonthInfo { number: 2, name: "February", abbr: "FEB", days: 29 },
    MonthInfo { number: 3, name: "March", abbr: "MAR", days: 31 },
    MonthInfo { number: 4, name: "April", abbr: "APR", days: 30 },
    MonthInfo { number: 5, name: "May", abbr: "MAY", days: 31 },
    MonthInfo { number: 6, name: "June", abbr: "JUN", days: 30 },
    MonthInfo { number: 7, name: "July", abbr: "JUL", days: 31 },
    MonthInfo { number: 8, name: "August", abbr: "AUG", days: 31 },
    MonthInfo { number: 9, name: "September", abbr: "SEP", days: 30 },
    MonthInfo { number: 10, name: "October", abbr: "OCT", days: 31 },
    MonthInfo { number: 11, name: "November", abbr: "NOV", days: 30 },
    MonthInfo { number: 12, name: "December", abbr: "DEC", days: 31 },
];
