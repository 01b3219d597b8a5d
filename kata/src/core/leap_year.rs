//! Gregorian leap years.

pub fn leap_year(year: u32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn divisible_by_four_not_hundred() {
        assert!(leap_year(1996));
        assert!(!leap_year(2015));
    }

    #[test]
    fn centuries() {
        assert!(!leap_year(1900));
        assert!(!leap_year(2100));
        assert!(leap_year(2000));
        assert!(leap_year(2400));
    }
}
