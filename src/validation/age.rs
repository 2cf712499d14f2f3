//! Age calculation for the date-of-birth rule

use chrono::{Datelike, NaiveDate, Utc};

/// Minimum age of an individual user
pub const ADULT_AGE: u32 = 18;

/// Current UTC calendar date
pub fn today() -> NaiveDate {
    Utc::now().date_naive()
}

/// Completed years between `birth` and `today`
///
/// The birthday counts on its calendar day. Someone born on 29 February turns
/// a year older on 1 March in non-leap years. Dates in the future give zero.
pub fn age_on(birth: NaiveDate, today: NaiveDate) -> u32 {
    if birth > today {
        return 0;
    }
    let mut years = today.year() - birth.year();
    if (today.month(), today.day()) < (birth.month(), birth.day()) {
        years -= 1;
    }
    years.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_birthday_boundary() {
        let birth = date(1988, 1, 5);
        assert_eq!(age_on(birth, date(2006, 1, 4)), 17);
        assert_eq!(age_on(birth, date(2006, 1, 5)), 18);
        assert_eq!(age_on(birth, date(2006, 1, 6)), 18);
    }

    #[test]
    fn test_leap_day_birth() {
        let birth = date(2004, 2, 29);
        assert_eq!(age_on(birth, date(2022, 2, 28)), 17);
        assert_eq!(age_on(birth, date(2022, 3, 1)), 18);
        assert_eq!(age_on(birth, date(2024, 2, 29)), 20);
    }

    #[test]
    fn test_future_birth_date() {
        assert_eq!(age_on(date(2030, 1, 1), date(2024, 1, 1)), 0);
    }

    #[test]
    fn test_today_is_after_fixture_dates() {
        assert!(age_on(date(1988, 1, 5), today()) >= ADULT_AGE);
    }
}
