use chrono::{Datelike, NaiveDate};

/// Sites whose employees earn one extra leave day per full year of service.
pub const PRIVILEGED_SITES: [&str; 2] = ["Office", "Site1"];

pub fn is_privileged_site(site: &str) -> bool {
    PRIVILEGED_SITES.contains(&site)
}

/// Whole years of service completed at `request_start`. A year counts only
/// once its anniversary has been reached, compared by day-of-year.
pub fn years_of_service(hire_date: NaiveDate, request_start: NaiveDate) -> i32 {
    let mut years = request_start.year() - hire_date.year();
    if request_start.ordinal() < hire_date.ordinal() {
        years -= 1;
    }
    years
}

/// Inclusive day span of a leave request: start and end both count.
pub fn inclusive_days(start_date: NaiveDate, end_date: NaiveDate) -> i64 {
    (end_date - start_date).num_days() + 1
}

/// Balance left after this request: the (possibly tenure-adjusted) allotment
/// minus days already used this year minus the requested span. Never clamped;
/// a negative result is what feeds the warning list.
pub fn remaining_balance(
    hire_date: NaiveDate,
    request_start: NaiveDate,
    request_end: NaiveDate,
    base_days: i32,
    site: &str,
    used_days_this_year: i64,
) -> i64 {
    let mut allotment = i64::from(base_days);
    if is_privileged_site(site) {
        allotment += i64::from(years_of_service(hire_date, request_start));
    }
    allotment - used_days_this_year - inclusive_days(request_start, request_end)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_years_of_service_before_anniversary() {
        // anniversary 15-Jun has not been reached on 10-Jun
        assert_eq!(years_of_service(date(2020, 6, 15), date(2023, 6, 10)), 2);
    }

    #[test]
    fn test_years_of_service_after_anniversary() {
        assert_eq!(years_of_service(date(2020, 6, 15), date(2023, 6, 20)), 3);
    }

    #[test]
    fn test_years_of_service_on_anniversary() {
        // non-leap hire year, so 15-Jun is ordinal 166 on both sides
        assert_eq!(years_of_service(date(2019, 6, 15), date(2023, 6, 15)), 4);
    }

    #[test]
    fn test_years_of_service_with_leap_hire_year() {
        // 15-Jun is ordinal 167 in leap 2020 but 166 in 2023; the
        // day-of-year comparison has not reached the anniversary yet
        assert_eq!(years_of_service(date(2020, 6, 15), date(2023, 6, 15)), 2);
    }

    #[test]
    fn test_years_of_service_within_first_year() {
        assert_eq!(years_of_service(date(2023, 6, 15), date(2023, 8, 1)), 0);
    }

    #[test]
    fn test_inclusive_days_counts_both_ends() {
        assert_eq!(inclusive_days(date(2024, 1, 10), date(2024, 1, 12)), 3);
        assert_eq!(inclusive_days(date(2024, 1, 10), date(2024, 1, 10)), 1);
    }

    #[test]
    fn test_privileged_sites_are_exact_matches() {
        assert!(is_privileged_site("Office"));
        assert!(is_privileged_site("Site1"));
        assert!(!is_privileged_site("office"));
        assert!(!is_privileged_site("Site2"));
    }

    #[test]
    fn test_remaining_without_bonus() {
        // base 10, nothing used, 3-day request at an ordinary site
        let remaining = remaining_balance(
            date(2020, 6, 15),
            date(2024, 1, 10),
            date(2024, 1, 12),
            10,
            "Warehouse",
            0,
        );
        assert_eq!(remaining, 7);
    }

    #[test]
    fn test_remaining_with_tenure_bonus() {
        // 3 full years of service add 3 days at a privileged site
        let remaining = remaining_balance(
            date(2020, 6, 15),
            date(2024, 1, 10),
            date(2024, 1, 12),
            10,
            "Office",
            0,
        );
        assert_eq!(remaining, 10);
    }

    #[test]
    fn test_remaining_subtracts_prior_usage() {
        let remaining = remaining_balance(
            date(2022, 3, 1),
            date(2024, 5, 6),
            date(2024, 5, 7),
            10,
            "Warehouse",
            6,
        );
        assert_eq!(remaining, 2);
    }

    #[test]
    fn test_remaining_can_go_negative() {
        // 3 base + 1 bonus year - 4 used - 5 requested
        let remaining = remaining_balance(
            date(2023, 1, 2),
            date(2024, 3, 1),
            date(2024, 3, 5),
            3,
            "Site1",
            4,
        );
        assert_eq!(remaining, -5);
    }
}
