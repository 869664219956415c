#![allow(dead_code)]

use flugbuch_rust::core::domain::{FlightRecord, Role, TimeOfDay};

/// A fully populated flight with the values of a typical training sortie.
///
/// Override individual fields with struct update syntax:
/// `FlightRecord { page: Some(3), ..make_flight() }`.
pub fn make_flight() -> FlightRecord {
    FlightRecord {
        id: 1,
        date: "01.01.26".to_string(),
        aircraft_type: "Aquila A211".to_string(),
        tail_number: "OE-AKW".to_string(),
        crew: "Testpilot / Instruktor".to_string(),
        departure: "LOAV".to_string(),
        destination: "LOAV".to_string(),
        takeoff_time: "10:00".to_string(),
        landing_time: "11:00".to_string(),
        block_off: "09:55".to_string(),
        block_on: "11:05".to_string(),
        landing_count: 1,
        flight_time_seconds: 3600,
        block_time_seconds: 4200,
        remarks: String::new(),
        role: Some(Role::Dual),
        time_of_day: Some(TimeOfDay::Day),
        page: Some(1),
    }
}

/// A flight contributing only block time and landings to a page.
pub fn page_flight(
    id: u32,
    block_time_seconds: u64,
    landing_count: u32,
    role: Role,
    time_of_day: TimeOfDay,
    page: u32,
) -> FlightRecord {
    FlightRecord {
        id,
        date: format!("{:02}.01.26", id % 28 + 1),
        takeoff_time: format!("{:02}:00", id % 24),
        block_time_seconds,
        landing_count,
        role: Some(role),
        time_of_day: Some(time_of_day),
        page: Some(page),
        ..make_flight()
    }
}
