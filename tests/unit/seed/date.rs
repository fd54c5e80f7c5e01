use super::*;

#[test]
fn parses_iso_dates() {
    let seed = Seed::parse("2024-07-15").unwrap();
    assert_eq!(seed.as_str(), "2024-07-15");
    assert_eq!(seed.to_string(), "2024-07-15");
    assert_eq!(seed.date(), NaiveDate::from_ymd_opt(2024, 7, 15).unwrap());
}

#[test]
fn day_of_year_is_zero_based() {
    assert_eq!(Seed::parse("2024-01-01").unwrap().day_of_year0(), 0);
    assert_eq!(Seed::parse("2024-07-15").unwrap().day_of_year0(), 196);
    assert_eq!(Seed::parse("2023-07-15").unwrap().day_of_year0(), 195);
    assert_eq!(Seed::parse("2024-12-31").unwrap().day_of_year0(), 365);
}

#[test]
fn rejects_malformed_seeds() {
    for bad in [
        "",
        "2024-1-01",
        "2024-01-1",
        "24-01-01",
        "2024/01/01",
        "2024-01-01T00:00",
        " 2024-01-01",
        "+202-01-01",
        "yyyy-mm-dd",
    ] {
        let err = Seed::parse(bad).unwrap_err();
        assert!(
            matches!(err, ManifoldError::InvalidSeed(_)),
            "{bad:?} gave {err}"
        );
    }
}

#[test]
fn rejects_impossible_calendar_dates() {
    for bad in ["2023-02-29", "2024-13-01", "2024-00-10", "2024-04-31"] {
        assert!(matches!(
            Seed::parse(bad),
            Err(ManifoldError::InvalidSeed(_))
        ));
    }
    assert!(Seed::parse("2024-02-29").is_ok());
}

#[test]
fn from_date_round_trips_through_text() {
    let date = NaiveDate::from_ymd_opt(2030, 3, 9).unwrap();
    let seed = Seed::from_date(date).unwrap();
    assert_eq!(seed.as_str(), "2030-03-09");
    assert_eq!("2030-03-09".parse::<Seed>().unwrap(), seed);
}

#[test]
fn today_is_a_valid_seed() {
    let seed = Seed::today().unwrap();
    assert_eq!(seed.as_str().len(), 10);
}
