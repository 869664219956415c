use std::collections::HashMap;

use crate::core::domain::{Assignment, FlightKey, FlightRecord};

/// Counts reported by [`merge_assignments_with_stats`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MergeStats {
    /// Imported flights that picked up an earlier assignment.
    pub matched: usize,
    /// Imported flights seen for the first time.
    pub unmatched: usize,
}

/// Carry user assignments from the previous flight list onto a fresh import.
///
/// Flights are matched by [`FlightKey`]. For a match, role and time of day are
/// always replaced by the earlier values (even if those are unset), while the
/// page is only replaced when the earlier flight had one. Unmatched flights keep
/// what the import gave them. The returned list has the order and length of
/// `new_flights` and replaces it.
///
/// # Example
/// ```
/// use flugbuch_rust::algorithms::merge_assignments;
/// use flugbuch_rust::core::domain::{FlightRecord, Role, TimeOfDay};
///
/// let flight = |role, time_of_day, page| FlightRecord {
///     date: "01.01.26".to_string(),
///     takeoff_time: "10:00".to_string(),
///     tail_number: "OE-AKW".to_string(),
///     role: Some(role),
///     time_of_day: Some(time_of_day),
///     page: Some(page),
///     ..Default::default()
/// };
///
/// let old = vec![flight(Role::Pic, TimeOfDay::Night, 5)];
/// let new = vec![flight(Role::Dual, TimeOfDay::Day, 1)];
///
/// let merged = merge_assignments(&old, new);
/// assert_eq!(merged[0].role, Some(Role::Pic));
/// assert_eq!(merged[0].time_of_day, Some(TimeOfDay::Night));
/// assert_eq!(merged[0].page, Some(5));
/// ```
pub fn merge_assignments(
    old_flights: &[FlightRecord],
    new_flights: Vec<FlightRecord>,
) -> Vec<FlightRecord> {
    merge_assignments_with_stats(old_flights, new_flights).0
}

/// Same as [`merge_assignments`], also reporting how many flights matched.
pub fn merge_assignments_with_stats(
    old_flights: &[FlightRecord],
    mut new_flights: Vec<FlightRecord>,
) -> (Vec<FlightRecord>, MergeStats) {
    // Later duplicates win.
    let previous: HashMap<FlightKey, Assignment> = old_flights
        .iter()
        .map(|f| (f.key(), f.assignment()))
        .collect();

    let mut stats = MergeStats::default();

    for flight in &mut new_flights {
        match previous.get(&flight.key()) {
            Some(assignment) => {
                apply_assignment(flight, assignment);
                stats.matched += 1;
            }
            None => stats.unmatched += 1,
        }
    }

    log::debug!(
        "Merged assignments: {} matched, {} new ({} previous flights)",
        stats.matched,
        stats.unmatched,
        old_flights.len()
    );

    (new_flights, stats)
}

fn apply_assignment(flight: &mut FlightRecord, assignment: &Assignment) {
    flight.role = assignment.role;
    flight.time_of_day = assignment.time_of_day;
    if let Some(page) = assignment.page {
        flight.page = Some(page);
    }
}
