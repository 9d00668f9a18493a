// Live series store - bounded sample windows per (quantity, station)
use crate::domain::station::{self, StationCode};
use crate::domain::telemetry::{Quantity, Sample};
use std::collections::{HashMap, VecDeque};

/// Samples retained per (quantity, station) pair. Oldest entries are
/// evicted silently once the window is full.
pub const WINDOW_SIZE: usize = 10;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("unknown station code: {0}")]
    UnknownStation(String),
}

/// In-memory families of bounded buffers, one family per quantity, each
/// keyed by station code. Buffers exist only for registry stations and are
/// created up front, pre-filled with zero-valued placeholders so charts
/// render before the first message arrives.
pub struct LiveSeriesStore {
    buffers: HashMap<(Quantity, StationCode), VecDeque<Sample>>,
}

impl LiveSeriesStore {
    pub fn new() -> Self {
        Self::with_start_time(chrono::Utc::now().timestamp_millis())
    }

    /// Construct with an explicit placeholder timestamp.
    pub fn with_start_time(start_ms: i64) -> Self {
        let mut buffers = HashMap::new();
        for quantity in Quantity::ALL {
            for entry in station::all() {
                let window: VecDeque<Sample> =
                    (0..WINDOW_SIZE).map(|_| Sample::placeholder(start_ms)).collect();
                buffers.insert((quantity, entry.code), window);
            }
        }
        Self { buffers }
    }

    /// Append a sample to the buffer for `(quantity, station)`, truncating
    /// to the newest `WINDOW_SIZE` entries. Unknown station codes are
    /// rejected without mutating any buffer.
    pub fn append(
        &mut self,
        quantity: Quantity,
        station: &str,
        sample: Sample,
    ) -> Result<(), StoreError> {
        let code = StationCode::parse(station)
            .ok_or_else(|| StoreError::UnknownStation(station.to_string()))?;
        let buffer = self.buffers.entry((quantity, code)).or_default();
        buffer.push_back(sample);
        while buffer.len() > WINDOW_SIZE {
            buffer.pop_front();
        }
        Ok(())
    }

    /// Snapshot of the current buffer in arrival order, independent of
    /// subsequent mutation.
    pub fn read(&self, quantity: Quantity, code: StationCode) -> Vec<Sample> {
        self.buffers
            .get(&(quantity, code))
            .map(|buffer| buffer.iter().copied().collect())
            .unwrap_or_default()
    }
}

impl Default for LiveSeriesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> LiveSeriesStore {
        LiveSeriesStore::with_start_time(0)
    }

    #[test]
    fn buffers_start_with_a_full_window_of_placeholders() {
        let store = store();
        for quantity in Quantity::ALL {
            for entry in station::all() {
                let window = store.read(quantity, entry.code);
                assert_eq!(window.len(), WINDOW_SIZE);
                assert!(window.iter().all(|s| s.value == 0.0));
            }
        }
    }

    #[test]
    fn window_keeps_the_last_ten_samples_in_arrival_order() {
        let mut store = store();
        for i in 0..25 {
            store
                .append(Quantity::Pm10, "A1", Sample::new(i, i as f64))
                .unwrap();
        }
        let window = store.read(Quantity::Pm10, StationCode::A1);
        assert_eq!(window.len(), WINDOW_SIZE);
        let expected: Vec<Sample> = (15..25).map(|i| Sample::new(i, i as f64)).collect();
        assert_eq!(window, expected);
    }

    #[test]
    fn appends_do_not_disturb_other_stations() {
        let mut store = store();
        store
            .append(Quantity::Pm10, "A1", Sample::new(1, 42.0))
            .unwrap();
        let untouched = store.read(Quantity::Pm10, StationCode::A2);
        assert!(untouched.iter().all(|s| s.value == 0.0));
    }

    #[test]
    fn unknown_station_is_rejected_without_mutation() {
        let mut store = store();
        let before: Vec<Vec<Sample>> = Quantity::ALL
            .iter()
            .flat_map(|&q| station::all().iter().map(move |s| (q, s.code)))
            .map(|(q, code)| store.read(q, code))
            .collect();

        let err = store
            .append(Quantity::Pm25, "Z9", Sample::new(1, 1.0))
            .unwrap_err();
        assert_eq!(err, StoreError::UnknownStation("Z9".to_string()));

        let after: Vec<Vec<Sample>> = Quantity::ALL
            .iter()
            .flat_map(|&q| station::all().iter().map(move |s| (q, s.code)))
            .map(|(q, code)| store.read(q, code))
            .collect();
        assert_eq!(before, after);
    }

    #[test]
    fn read_returns_an_independent_snapshot() {
        let mut store = store();
        let snapshot = store.read(Quantity::Humidity, StationCode::A3);
        store
            .append(Quantity::Humidity, "A3", Sample::new(9, 95.0))
            .unwrap();
        assert!(snapshot.iter().all(|s| s.value == 0.0));
    }

    #[test]
    fn first_message_evicts_one_placeholder() {
        let mut store = store();
        store
            .append(Quantity::Pm10, "A1", Sample::from_wire(1_700_000_000.0, 55.0))
            .unwrap();
        let window = store.read(Quantity::Pm10, StationCode::A1);
        assert_eq!(window.len(), WINDOW_SIZE);
        assert_eq!(window[WINDOW_SIZE - 1], Sample::new(1_700_000_000_000, 55.0));
        assert_eq!(window.iter().filter(|s| s.value == 0.0).count(), WINDOW_SIZE - 1);
    }
}
