//! Property tests for the cosmic calculators.

use cosmic_self::domain::cosmic::{
    lunar_age_days, reference_new_moon, CalendarDate, ChineseAnimal, ChineseElement, CosmicProfile,
    DigitReducer, LifePathNumber, MoonPhase, PersonalYearNumber, ReducedNumber, SunSign,
    MASTER_NUMBERS, SIGN_RANGES, SYNODIC_MONTH_DAYS,
};
use cosmic_self::domain::foundation::Timestamp;
use proptest::prelude::*;

fn valid_date() -> impl Strategy<Value = CalendarDate> {
    (1i32..=9999, 1u32..=12, 1u32..=28).prop_map(|(y, m, d)| CalendarDate::new(y, m, d).unwrap())
}

// Roughly 1900-01-01 through 2100-01-01.
fn instant() -> impl Strategy<Value = Timestamp> {
    (-2_208_988_800_000i64..4_102_444_800_000).prop_map(|ms| Timestamp::from_unix_millis(ms).unwrap())
}

proptest! {
    #[test]
    fn reduce_lands_in_allowed_set(n in 1u32..) {
        let reduced = DigitReducer::reduce(n).unwrap();
        let value = reduced.value();
        prop_assert!((1..=9).contains(&value) || MASTER_NUMBERS.contains(&value));
    }

    #[test]
    fn reduce_is_idempotent(n in 1u32..) {
        let once = DigitReducer::reduce(n).unwrap();
        let twice = DigitReducer::reduce(once.value()).unwrap();
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn life_path_is_a_reduced_number(date in valid_date()) {
        let lp = LifePathNumber::from_date(&date).unwrap();
        prop_assert!(ReducedNumber::ALL.contains(&lp.number()));
    }

    #[test]
    fn exactly_one_sign_matches(month in 1u32..=12, day in 1u32..=29) {
        let matching = SIGN_RANGES.iter().filter(|r| r.contains(month, day)).count();
        prop_assert_eq!(matching, 1);
        prop_assert!(SunSign::for_month_day(month, day).is_ok());
    }

    #[test]
    fn animal_repeats_every_twelve_years(year in -100_000i32..100_000) {
        prop_assert_eq!(ChineseAnimal::for_year(year), ChineseAnimal::for_year(year + 12));
    }

    #[test]
    fn element_repeats_every_ten_years(year in -100_000i32..100_000) {
        prop_assert_eq!(ChineseElement::for_year(year), ChineseElement::for_year(year + 10));
        prop_assert_eq!(ChineseElement::for_year(year), ChineseElement::for_year(year + 60));
    }

    #[test]
    fn lunar_age_stays_in_cycle(now in instant()) {
        let age = lunar_age_days(&reference_new_moon(), &now);
        prop_assert!((0.0..=SYNODIC_MONTH_DAYS).contains(&age));
        prop_assert!(MoonPhase::from_age_days(age).is_ok());
    }

    #[test]
    fn personal_year_ignores_birth_year(date in valid_date(), other_year in 1i32..=9999, current in 1i32..=9999) {
        let shifted = CalendarDate::new(other_year, date.month(), date.day()).unwrap();
        prop_assert_eq!(
            PersonalYearNumber::for_birth_date(&date, current).unwrap(),
            PersonalYearNumber::for_birth_date(&shifted, current).unwrap()
        );
    }

    #[test]
    fn profile_is_deterministic(date in valid_date(), now in instant()) {
        let first = CosmicProfile::compute(date, now).unwrap();
        let second = CosmicProfile::compute(date, now).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn parse_accepts_what_display_prints(date in valid_date()) {
        prop_assert_eq!(CalendarDate::parse(&date.to_string()).unwrap(), date);
    }
}
