use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::ops::{Add, AddAssign};

use crate::core::domain::{FlightRecord, Role, TimeOfDay};

/// Flight time and landing sums for one slice of the logbook.
///
/// `total_seconds` is always `pic_seconds + dual_seconds`: a flight's block time
/// counts once, by role, whether it was flown by day or by night.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageTotals {
    pub total_seconds: u64,
    pub pic_seconds: u64,
    pub dual_seconds: u64,
    pub day_landings: u64,
    pub night_landings: u64,
    pub night_seconds: u64,
}

impl PageTotals {
    /// Sum the contribution of a set of flights.
    pub fn from_flights<'a, I>(flights: I) -> Self
    where
        I: IntoIterator<Item = &'a FlightRecord>,
    {
        let mut totals = PageTotals::default();
        for flight in flights {
            totals.add_flight(flight);
        }
        totals
    }

    fn add_flight(&mut self, flight: &FlightRecord) {
        let block = flight.block_time_seconds;
        let landings = u64::from(flight.landing_count);

        match flight.role {
            Some(Role::Pic) => self.pic_seconds = self.pic_seconds.saturating_add(block),
            Some(Role::Dual) => self.dual_seconds = self.dual_seconds.saturating_add(block),
            None => {}
        }

        match flight.time_of_day {
            Some(TimeOfDay::Day) => self.day_landings = self.day_landings.saturating_add(landings),
            Some(TimeOfDay::Night) => {
                self.night_landings = self.night_landings.saturating_add(landings);
                self.night_seconds = self.night_seconds.saturating_add(block);
            }
            None => {}
        }

        self.total_seconds = self.pic_seconds.saturating_add(self.dual_seconds);
    }

    pub fn total_landings(&self) -> u64 {
        self.day_landings.saturating_add(self.night_landings)
    }
}

/// Field-wise sum, saturating at `u64::MAX`.
impl Add for PageTotals {
    type Output = PageTotals;

    fn add(self, rhs: PageTotals) -> PageTotals {
        let pic_seconds = self.pic_seconds.saturating_add(rhs.pic_seconds);
        let dual_seconds = self.dual_seconds.saturating_add(rhs.dual_seconds);
        PageTotals {
            total_seconds: pic_seconds.saturating_add(dual_seconds),
            pic_seconds,
            dual_seconds,
            day_landings: self.day_landings.saturating_add(rhs.day_landings),
            night_landings: self.night_landings.saturating_add(rhs.night_landings),
            night_seconds: self.night_seconds.saturating_add(rhs.night_seconds),
        }
    }
}

impl AddAssign for PageTotals {
    fn add_assign(&mut self, rhs: PageTotals) {
        *self = *self + rhs;
    }
}

/// Totals printed at the foot of one logbook page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PageSummary {
    /// Flights on this page only.
    pub current: PageTotals,
    /// Carried forward from all lower pages.
    pub previous: PageTotals,
    /// `previous + current`.
    pub total: PageTotals,
}

/// Page summaries keyed (and therefore ordered) by page number.
pub type PageSummaries = BTreeMap<u32, PageSummary>;

/// Compute per-page summaries with cumulative carry-forward.
///
/// Flights without a page (or on page `0`) are ignored. Pages are processed in
/// ascending numeric order; missing page numbers are skipped, not filled in, so
/// the carry-forward of page 3 in a `{1, 3, 5}` logbook is page 1's total.
///
/// # Arguments
/// * `flights` - Flight list in any order
///
/// # Returns
/// One [`PageSummary`] per distinct assigned page
pub fn compute_page_summaries(flights: &[FlightRecord]) -> PageSummaries {
    let pages = group_by_page(flights);

    let mut summaries = PageSummaries::new();
    let mut running = PageTotals::default();

    for (page, page_flights) in pages {
        let current = PageTotals::from_flights(page_flights);
        let previous = running;
        running += current;

        summaries.insert(
            page,
            PageSummary {
                current,
                previous,
                total: running,
            },
        );
    }

    log::debug!(
        "Computed {} page summaries from {} flights",
        summaries.len(),
        flights.len()
    );

    summaries
}

/// Pages holding more flights than fit on a printed page.
///
/// # Returns
/// `(page, flight_count)` pairs in ascending page order
pub fn overfull_pages(flights: &[FlightRecord], flights_per_page: usize) -> Vec<(u32, usize)> {
    group_by_page(flights)
        .into_iter()
        .map(|(page, page_flights)| (page, page_flights.len()))
        .filter(|&(_, count)| count > flights_per_page)
        .collect()
}

fn group_by_page(flights: &[FlightRecord]) -> BTreeMap<u32, Vec<&FlightRecord>> {
    let mut pages: BTreeMap<u32, Vec<&FlightRecord>> = BTreeMap::new();
    for flight in flights {
        if let Some(page) = flight.assigned_page() {
            pages.entry(page).or_default().push(flight);
        }
    }
    pages
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flight(block: u64, landings: u32, role: Role, time_of_day: TimeOfDay, page: Option<u32>) -> FlightRecord {
        FlightRecord {
            block_time_seconds: block,
            landing_count: landings,
            role: Some(role),
            time_of_day: Some(time_of_day),
            page,
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_input() {
        assert!(compute_page_summaries(&[]).is_empty());
    }

    #[test]
    fn test_flights_without_page_excluded() {
        let flights = vec![
            flight(3600, 1, Role::Dual, TimeOfDay::Day, None),
            flight(3600, 1, Role::Dual, TimeOfDay::Day, Some(0)),
        ];
        assert!(compute_page_summaries(&flights).is_empty());
    }

    #[test]
    fn test_dual_only() {
        let flights = vec![
            flight(3600, 2, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(1800, 3, Role::Dual, TimeOfDay::Day, Some(1)),
        ];
        let current = compute_page_summaries(&flights)[&1].current;

        assert_eq!(current.pic_seconds, 0);
        assert_eq!(current.dual_seconds, 5400);
        assert_eq!(current.total_seconds, 5400);
    }

    #[test]
    fn test_pic_only() {
        let flights = vec![flight(3600, 2, Role::Pic, TimeOfDay::Day, Some(1))];
        let current = compute_page_summaries(&flights)[&1].current;

        assert_eq!(current.dual_seconds, 0);
        assert_eq!(current.pic_seconds, 3600);
        assert_eq!(current.total_seconds, 3600);
    }

    #[test]
    fn test_mixed_roles() {
        let flights = vec![
            flight(3600, 2, Role::Pic, TimeOfDay::Day, Some(1)),
            flight(1800, 3, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(900, 1, Role::Pic, TimeOfDay::Day, Some(1)),
        ];
        let current = compute_page_summaries(&flights)[&1].current;

        assert_eq!(current.pic_seconds, 4500);
        assert_eq!(current.dual_seconds, 1800);
        assert_eq!(current.total_seconds, 6300);
    }

    #[test]
    fn test_scenario_single_page() {
        let flights = vec![
            flight(3600, 2, Role::Pic, TimeOfDay::Day, Some(1)),
            flight(1800, 3, Role::Dual, TimeOfDay::Day, Some(1)),
        ];
        let summaries = compute_page_summaries(&flights);

        assert_eq!(
            summaries[&1].current,
            PageTotals {
                total_seconds: 5400,
                pic_seconds: 3600,
                dual_seconds: 1800,
                day_landings: 5,
                night_landings: 0,
                night_seconds: 0,
            }
        );
    }

    #[test]
    fn test_landings_by_time_of_day() {
        let flights = vec![
            flight(3600, 5, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(1800, 3, Role::Dual, TimeOfDay::Night, Some(1)),
        ];
        let current = compute_page_summaries(&flights)[&1].current;

        assert_eq!(current.day_landings, 5);
        assert_eq!(current.night_landings, 3);
        assert_eq!(current.total_landings(), 8);
    }

    #[test]
    fn test_night_seconds() {
        let flights = vec![
            flight(3600, 1, Role::Dual, TimeOfDay::Night, Some(1)),
            flight(1800, 1, Role::Dual, TimeOfDay::Day, Some(1)),
        ];
        let current = compute_page_summaries(&flights)[&1].current;

        assert_eq!(current.night_seconds, 3600);
        assert_eq!(current.total_seconds, 5400);
    }

    #[test]
    fn test_unclassified_flight_contributes_nothing() {
        let unclassified = FlightRecord {
            block_time_seconds: 3600,
            landing_count: 4,
            page: Some(1),
            ..Default::default()
        };
        let summaries = compute_page_summaries(&[unclassified]);

        assert_eq!(summaries[&1].current, PageTotals::default());
    }

    #[test]
    fn test_first_page_previous_is_zero() {
        let flights = vec![flight(3600, 5, Role::Dual, TimeOfDay::Day, Some(1))];
        let summary = compute_page_summaries(&flights)[&1];

        assert_eq!(summary.previous, PageTotals::default());
        assert_eq!(summary.total, summary.current);
    }

    #[test]
    fn test_second_page_carries_first() {
        let flights = vec![
            flight(3600, 5, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(1800, 3, Role::Dual, TimeOfDay::Day, Some(2)),
        ];
        let summaries = compute_page_summaries(&flights);

        assert_eq!(summaries[&2].previous.dual_seconds, 3600);
        assert_eq!(summaries[&2].previous.day_landings, 5);
        assert_eq!(summaries[&2].total.dual_seconds, 5400);
        assert_eq!(summaries[&2].total.day_landings, 8);
    }

    #[test]
    fn test_three_pages() {
        let flights = vec![
            flight(1000, 2, Role::Pic, TimeOfDay::Day, Some(1)),
            flight(2000, 3, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(3000, 4, Role::Pic, TimeOfDay::Night, Some(2)),
            flight(4000, 5, Role::Dual, TimeOfDay::Day, Some(2)),
            flight(5000, 6, Role::Dual, TimeOfDay::Night, Some(3)),
        ];
        let total = compute_page_summaries(&flights)[&3].total;

        assert_eq!(total.total_seconds, 15000);
        assert_eq!(total.day_landings, 10);
        assert_eq!(total.night_landings, 10);
        assert_eq!(total.night_seconds, 8000);
    }

    #[test]
    fn test_non_sequential_pages() {
        let flights = vec![
            flight(3000, 3, Role::Dual, TimeOfDay::Day, Some(5)),
            flight(1000, 1, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(2000, 2, Role::Dual, TimeOfDay::Day, Some(3)),
        ];
        let summaries = compute_page_summaries(&flights);

        assert_eq!(summaries.keys().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
        assert_eq!(summaries[&3].previous, summaries[&1].total);
        assert_eq!(summaries[&3].previous.dual_seconds, 1000);
        assert_eq!(summaries[&5].total.dual_seconds, 6000);
    }

    #[test]
    fn test_zero_block_time() {
        let flights = vec![
            flight(0, 3, Role::Dual, TimeOfDay::Day, Some(1)),
            flight(3600, 1, Role::Dual, TimeOfDay::Day, Some(1)),
        ];
        let current = compute_page_summaries(&flights)[&1].current;

        assert_eq!(current.dual_seconds, 3600);
        assert_eq!(current.day_landings, 4);
    }

    #[test]
    fn test_no_drift_over_many_flights() {
        let flights: Vec<FlightRecord> = (0..100u32)
            .map(|i| flight(123, 1, Role::Dual, TimeOfDay::Day, Some(i / 10 + 1)))
            .collect();
        let summaries = compute_page_summaries(&flights);

        assert_eq!(summaries.len(), 10);
        assert_eq!(summaries[&10].total.dual_seconds, 12300);
        assert_eq!(summaries[&10].total.day_landings, 100);
    }

    #[test]
    fn test_current_plus_previous_is_total() {
        let flights = vec![
            flight(1000, 2, Role::Pic, TimeOfDay::Night, Some(2)),
            flight(2000, 3, Role::Dual, TimeOfDay::Day, Some(4)),
            flight(700, 1, Role::Pic, TimeOfDay::Day, Some(4)),
            flight(4000, 5, Role::Dual, TimeOfDay::Night, Some(9)),
        ];

        for summary in compute_page_summaries(&flights).values() {
            assert_eq!(summary.current + summary.previous, summary.total);
        }
    }

    #[test]
    fn test_huge_block_times_saturate() {
        let flights = vec![
            flight(u64::MAX, 1, Role::Pic, TimeOfDay::Night, Some(1)),
            flight(5, 1, Role::Pic, TimeOfDay::Night, Some(1)),
            flight(7, 1, Role::Dual, TimeOfDay::Day, Some(2)),
        ];
        let summaries = compute_page_summaries(&flights);

        let first = summaries[&1].current;
        assert_eq!(first.pic_seconds, u64::MAX);
        assert_eq!(first.night_seconds, u64::MAX);
        assert_eq!(first.total_seconds, u64::MAX);
        assert_eq!(first.night_landings, 2);

        let second = summaries[&2];
        assert_eq!(second.previous, first);
        assert_eq!(second.total.dual_seconds, 7);
        assert_eq!(second.total.total_seconds, u64::MAX);
    }

    #[test]
    fn test_overfull_pages() {
        let mut flights: Vec<FlightRecord> = (0..11)
            .map(|_| flight(60, 1, Role::Dual, TimeOfDay::Day, Some(2)))
            .collect();
        flights.push(flight(60, 1, Role::Dual, TimeOfDay::Day, Some(1)));
        flights.push(flight(60, 1, Role::Dual, TimeOfDay::Day, None));

        assert_eq!(overfull_pages(&flights, 10), vec![(2, 11)]);
        assert!(overfull_pages(&flights, 11).is_empty());
    }

    #[test]
    fn test_totals_serialize_camel_case() {
        let value = serde_json::to_value(PageTotals::default()).unwrap();
        assert!(value.get("picSeconds").is_some());
        assert!(value.get("nightLandings").is_some());
    }
}
