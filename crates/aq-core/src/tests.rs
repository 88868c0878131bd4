//! Unit tests for aq-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, SensorId};

    #[test]
    fn display_is_bare_integer() {
        // Ids appear verbatim in archive file names and rows.
        assert_eq!(SensorId(7).to_string(), "7");
        assert_eq!(LocationId(11).to_string(), "11");
    }

    #[test]
    fn ordering() {
        assert!(SensorId(0) < SensorId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(SensorId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::INVALID.0, u32::MAX);
    }

    #[test]
    fn i64_conversion() {
        assert_eq!(i64::from(SensorId(42)), 42i64);
        assert_eq!(i64::from(LocationId::INVALID), u32::MAX as i64);
    }
}

#[cfg(test)]
mod geo {
    use crate::coord_field;

    #[test]
    fn three_decimal_places() {
        assert_eq!(coord_field(Some(52.5)), "52.500");
        assert_eq!(coord_field(Some(13.4)), "13.400");
        assert_eq!(coord_field(Some(-0.1278)), "-0.128");
    }

    #[test]
    fn absent_renders_empty() {
        assert_eq!(coord_field(None), "");
    }

    #[test]
    fn zero_renders_empty() {
        assert_eq!(coord_field(Some(0.0)), "");
        assert_eq!(coord_field(Some(-0.0)), "");
    }
}

#[cfg(test)]
mod dates {
    use chrono::NaiveDate;

    use crate::dates::{parse_date, DateRange};
    use crate::CoreError;

    fn d(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn inclusive_ascending() {
        let range = DateRange::new(d("2023-01-30"), d("2023-02-02")).unwrap();
        let dates: Vec<_> = range.collect();
        assert_eq!(
            dates,
            [d("2023-01-30"), d("2023-01-31"), d("2023-02-01"), d("2023-02-02")]
        );
    }

    #[test]
    fn single_date_yields_once() {
        let dates: Vec<_> = DateRange::single(d("2023-01-02")).collect();
        assert_eq!(dates, [d("2023-01-02")]);
    }

    #[test]
    fn inverted_range_is_error() {
        let err = DateRange::new(d("2023-01-03"), d("2023-01-02")).unwrap_err();
        assert!(matches!(err, CoreError::InvalidRange { .. }));
    }

    #[test]
    fn restartable_via_clone() {
        let range = DateRange::new(d("2023-01-01"), d("2023-01-03")).unwrap();
        let first: Vec<_> = range.clone().collect();
        let second: Vec<_> = range.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn remaining_counts_down() {
        let mut range = DateRange::new(d("2023-01-01"), d("2023-01-03")).unwrap();
        assert_eq!(range.remaining(), 3);
        range.next();
        assert_eq!(range.remaining(), 2);
        range.by_ref().for_each(drop);
        assert_eq!(range.remaining(), 0);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_date("2023-13-01").is_err());
        assert!(parse_date("yesterday").is_err());
        assert!(parse_date("").is_err());
    }
}
