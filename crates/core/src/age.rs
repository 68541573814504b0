//! Whole-years age from a birthdate.

use crate::{AssessmentError, CoreResult};
use chrono::{Datelike, Local, NaiveDate};

/// Completed years between `birthdate` and `as_of`.
///
/// The year in progress only counts once the birthday's month and day have been reached. A
/// 29 February birthday is therefore reached on 1 March in non-leap years.
///
/// # Errors
///
/// Returns [`AssessmentError::InvalidDate`] if `birthdate` is after `as_of`.
pub fn age(birthdate: NaiveDate, as_of: NaiveDate) -> CoreResult<u32> {
    if birthdate > as_of {
        return Err(AssessmentError::InvalidDate { birthdate, as_of });
    }

    let mut years = as_of.year() - birthdate.year();
    if (as_of.month(), as_of.day()) < (birthdate.month(), birthdate.day()) {
        years -= 1;
    }

    // Non-negative: birthdate <= as_of.
    Ok(years as u32)
}

/// Current processing date in the local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_day_before_birthday() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 6, 14)).unwrap(), 23);
    }

    #[test]
    fn test_on_birthday() {
        assert_eq!(age(date(2000, 6, 15), date(2024, 6, 15)).unwrap(), 24);
    }

    #[test]
    fn test_earlier_month_later_day() {
        assert_eq!(age(date(1988, 4, 3), date(2024, 3, 30)).unwrap(), 35);
        assert_eq!(age(date(1988, 4, 3), date(2024, 4, 3)).unwrap(), 36);
    }

    #[test]
    fn test_born_today_is_zero() {
        assert_eq!(age(date(2024, 1, 1), date(2024, 1, 1)).unwrap(), 0);
    }

    #[test]
    fn test_leap_day_birthday() {
        assert_eq!(age(date(2000, 2, 29), date(2023, 2, 28)).unwrap(), 22);
        assert_eq!(age(date(2000, 2, 29), date(2023, 3, 1)).unwrap(), 23);
        assert_eq!(age(date(2000, 2, 29), date(2024, 2, 29)).unwrap(), 24);
    }

    #[test]
    fn test_future_birthdate_is_rejected() {
        let err = age(date(2030, 1, 1), date(2024, 1, 1))
            .expect_err("future birthdate should fail");
        assert!(matches!(
            err,
            AssessmentError::InvalidDate { birthdate, as_of }
                if birthdate == date(2030, 1, 1) && as_of == date(2024, 1, 1)
        ));
    }
}
