use holidayboard_core::calendar::{
    self, EASTER_MIN_YEAR, days_in_month, easter_date, nth_weekday_of_month, weekday_occurrence,
};
use holidayboard_core::holiday::{Holiday, HolidayRegistry, HolidayRule};
use holidayboard_core::protocols::rdm::{
    CommandClass, DeviceUid, RdmCommand, build_frame, layout, writer,
};
use proptest::prelude::*;
use time::{Date, Duration, Month};

fn month_strategy() -> impl Strategy<Value = u8> {
    0u8..12
}

fn weekday_strategy() -> impl Strategy<Value = u8> {
    0u8..7
}

fn occurrence_strategy() -> impl Strategy<Value = i32> {
    prop_oneof![1i32..=5, -5i32..=-1]
}

fn date_strategy() -> impl Strategy<Value = Date> {
    (1900i32..2200, 1u16..=365).prop_map(|(year, ordinal)| {
        Date::from_ordinal_date(year, ordinal).expect("ordinal 1..=365 always exists")
    })
}

fn command_class_strategy() -> impl Strategy<Value = CommandClass> {
    prop_oneof![
        Just(CommandClass::Discovery),
        Just(CommandClass::Get),
        Just(CommandClass::Set),
    ]
}

/// First (or last) matching weekday found by walking the month day by day.
fn naive_nth_weekday(year: i32, month: u8, weekday: u8, occurrence: i32) -> Date {
    let last = days_in_month(month, year).unwrap();
    let month_value = calendar::month_from_index(month).unwrap();
    let target = calendar::weekday_from_index(weekday).unwrap();
    let mut days: Vec<u8> = (1..=last).collect();
    if occurrence < 0 {
        days.reverse();
    }
    let edge = days
        .into_iter()
        .map(|day| Date::from_calendar_date(year, month_value, day).unwrap())
        .find(|date| date.weekday() == target)
        .unwrap();
    let weeks = i64::from(occurrence.unsigned_abs() - 1) * 7;
    if occurrence > 0 {
        edge + Duration::days(weeks)
    } else {
        edge - Duration::days(weeks)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn february_has_29_days_exactly_in_leap_years(year in 1i32..=9999) {
        let leap = year % 4 == 0 && (year % 100 != 0 || year % 400 == 0);
        prop_assert_eq!(days_in_month(1, year).unwrap() == 29, leap);
        prop_assert_eq!(calendar::is_leap_year(year), leap);
    }

    #[test]
    fn easter_falls_between_march_22_and_april_25(year in EASTER_MIN_YEAR..=9999) {
        let easter = easter_date(year).unwrap();
        let earliest = Date::from_calendar_date(year, Month::March, 22).unwrap();
        let latest = Date::from_calendar_date(year, Month::April, 25).unwrap();
        prop_assert!(earliest <= easter && easter <= latest, "{year}: {easter}");
        prop_assert_eq!(easter.weekday(), time::Weekday::Sunday);
    }

    #[test]
    fn mardi_gras_is_47_days_before_easter(year in EASTER_MIN_YEAR..=9999) {
        let mut registry = HolidayRegistry::new();
        let easter = registry.insert(Holiday::new("Easter", HolidayRule::easter())).unwrap();
        let mardi_gras = registry
            .insert(Holiday::new("Mardi Gras", HolidayRule::offset_from(easter, -47)))
            .unwrap();

        let resolved = registry.resolve(mardi_gras, year).unwrap();
        prop_assert_eq!(resolved, easter_date(year).unwrap() - Duration::days(47));
        prop_assert_eq!(resolved.weekday(), time::Weekday::Tuesday);
    }

    #[test]
    fn nth_weekday_matches_naive_walk(
        year in 1900i32..2200,
        month in month_strategy(),
        weekday in weekday_strategy(),
        occurrence in occurrence_strategy(),
    ) {
        let month_value = calendar::month_from_index(month).unwrap();
        let target = calendar::weekday_from_index(weekday).unwrap();
        let resolved = nth_weekday_of_month(year, month_value, target, occurrence).unwrap();
        prop_assert_eq!(resolved, naive_nth_weekday(year, month, weekday, occurrence));
    }

    #[test]
    fn weekday_occurrence_lands_on_target_within_bound(
        anchor in date_strategy(),
        weekday in weekday_strategy(),
        occurrence in occurrence_strategy(),
        include_anchor in any::<bool>(),
    ) {
        let target = calendar::weekday_from_index(weekday).unwrap();
        let result = weekday_occurrence(anchor, target, occurrence, include_anchor).unwrap();
        prop_assert_eq!(result.weekday(), target);

        let distance = (result - anchor).whole_days();
        let bound = 7 * i64::from(occurrence.unsigned_abs());
        if occurrence > 0 {
            let min = if include_anchor { 0 } else { 1 };
            prop_assert!(distance >= min && distance <= bound, "distance {distance}");
        } else {
            let max = if include_anchor { 0 } else { -1 };
            prop_assert!(distance <= max && distance >= -bound, "distance {distance}");
        }
    }

    #[test]
    fn window_is_active_exactly_on_closed_interval(
        date in date_strategy(),
        lead_in in 0u32..60,
        lead_out in 0u32..60,
    ) {
        let mut registry = HolidayRegistry::new();
        let rule = HolidayRule::fixed(calendar::month_index(date.month()), date.day()).unwrap();
        let id = registry
            .insert(Holiday::new("Probe", rule).with_lead_in(lead_in).with_lead_out(lead_out))
            .unwrap();

        let year = date.year();
        let first = date - Duration::days(i64::from(lead_in));
        let last = date + Duration::days(i64::from(lead_out));
        prop_assert!(registry.is_active(id, year, first).unwrap());
        prop_assert!(registry.is_active(id, year, last).unwrap());
        prop_assert!(!registry.is_active(id, year, first - Duration::days(1)).unwrap());
        prop_assert!(!registry.is_active(id, year, last + Duration::days(1)).unwrap());
    }

    #[test]
    fn uid_round_trips_through_hex_bytes(value in 0u64..=0xFFFF_FFFF_FFFF) {
        let uid = DeviceUid::from_u64(value);
        let hex: String = uid.to_bytes().iter().map(|byte| format!("{byte:02x}")).collect();
        prop_assert_eq!(DeviceUid::parse(&hex).unwrap(), uid);

        let punctuated = format!("{:04x}:{:08x}", uid.manufacturer_id(), uid.device_id());
        prop_assert_eq!(DeviceUid::parse(&punctuated).unwrap(), uid);
        prop_assert_eq!(DeviceUid::parse(&uid.to_string()).unwrap(), uid);
    }

    #[test]
    fn built_frames_carry_a_valid_checksum(
        destination in 0u64..=0xFFFF_FFFF_FFFF,
        source in 0u64..=0xFFFF_FFFF_FFFF,
        transaction_number in any::<u8>(),
        port_id in any::<u8>(),
        sub_device in any::<u16>(),
        command_class in command_class_strategy(),
        parameter_id in any::<u16>(),
        parameter_data in proptest::collection::vec(any::<u8>(), 0..=layout::MAX_PARAMETER_DATA_LEN),
    ) {
        let command = RdmCommand {
            destination: DeviceUid::from_u64(destination),
            source: DeviceUid::from_u64(source),
            transaction_number,
            port_id,
            message_count: 0,
            sub_device,
            command_class,
            parameter_id,
            parameter_data: &parameter_data,
        };
        let frame = build_frame(&command).unwrap();
        prop_assert_eq!(frame.len(), layout::frame_len(parameter_data.len()));
        prop_assert_eq!(usize::from(frame[layout::MESSAGE_LENGTH_OFFSET]), frame.len() - 2);

        let (body, trailer) = frame.split_at(frame.len() - layout::CHECKSUM_LEN);
        prop_assert_eq!(u16::from_be_bytes([trailer[0], trailer[1]]), writer::checksum(body));
        prop_assert_eq!(build_frame(&command).unwrap(), frame);
    }
}
