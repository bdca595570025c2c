use chrono::{NaiveDate, NaiveDateTime};
use stellium_chart::{BirthMoment, Error, GeoLocation, parse_local_time};

fn at(y: i32, m: u32, d: u32, hh: u32, mm: u32, ss: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_opt(hh, mm, ss)
        .unwrap()
}

#[test]
fn local_time_accepts_iso_8601_variants() {
    assert_eq!(
        parse_local_time("1994-01-11T07:33:00").unwrap(),
        at(1994, 1, 11, 7, 33, 0)
    );
    assert_eq!(
        parse_local_time("1994-01-11T07:33").unwrap(),
        at(1994, 1, 11, 7, 33, 0)
    );
    assert_eq!(
        parse_local_time(" 1994-01-11 07:33:15 ").unwrap(),
        at(1994, 1, 11, 7, 33, 15)
    );
    assert_eq!(
        parse_local_time("1994-01-11").unwrap(),
        at(1994, 1, 11, 0, 0, 0)
    );
}

#[test]
fn local_time_rejects_other_formats() {
    for input in ["11/01/1994 07:33", "1994-13-01T00:00:00", "yesterday", ""] {
        let err = parse_local_time(input).unwrap_err();
        assert!(
            matches!(err, Error::InvalidLocalTime { input: ref got } if got == input),
            "{input}"
        );
    }
}

#[test]
fn location_parses_lat_lon_pairs() {
    let loc = GeoLocation::parse("40.7128, -74.0060").unwrap();
    assert_eq!(loc.latitude, 40.7128);
    assert_eq!(loc.longitude, -74.006);
}

#[test]
fn location_rejects_malformed_or_out_of_range_input() {
    for input in ["40.7128", "north,west", "91,0", "0,-181", ""] {
        assert!(
            matches!(GeoLocation::parse(input), Err(Error::InvalidLocation { .. })),
            "{input}"
        );
    }
}

#[test]
fn invalid_location_message_names_the_expected_format() {
    let err = GeoLocation::parse("here").unwrap_err();
    let message = err.to_string();
    assert!(message.contains("here"));
    assert!(message.contains("'LAT,LON'"));
}

#[test]
fn birth_moment_checks_time_before_location() {
    let moment = BirthMoment::parse("2000-06-21T12:00:00", "51.5,-0.12").unwrap();
    assert_eq!(moment.local_time, at(2000, 6, 21, 12, 0, 0));
    assert_eq!(moment.location.latitude, 51.5);

    assert!(matches!(
        BirthMoment::parse("noon", "nowhere"),
        Err(Error::InvalidLocalTime { .. })
    ));
}
