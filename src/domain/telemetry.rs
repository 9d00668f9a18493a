// Telemetry data domain models

/// Wire timestamps below this are in seconds; at or above, already in
/// milliseconds.
const MILLIS_THRESHOLD: f64 = 1e12;

/// Normalize a unit-ambiguous wire timestamp to milliseconds.
pub fn normalize_timestamp_ms(raw: f64) -> i64 {
    if raw < MILLIS_THRESHOLD {
        (raw * 1000.0).round() as i64
    } else {
        raw.round() as i64
    }
}

/// One measured sample, timestamped in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time_ms: i64,
    pub value: f64,
}

impl Sample {
    pub fn new(time_ms: i64, value: f64) -> Self {
        Self { time_ms, value }
    }

    /// Build a sample from a wire timestamp of ambiguous unit.
    pub fn from_wire(timestamp: f64, value: f64) -> Self {
        Self::new(normalize_timestamp_ms(timestamp), value)
    }

    /// Zero-valued filler shown before the first real message arrives.
    pub fn placeholder(time_ms: i64) -> Self {
        Self::new(time_ms, 0.0)
    }
}

/// One of the three measured signals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Quantity {
    Pm10,
    Pm25,
    Humidity,
}

impl Quantity {
    pub const ALL: [Quantity; 3] = [Quantity::Pm10, Quantity::Pm25, Quantity::Humidity];

    /// Broker topic carrying this quantity. Fixed, no wildcards.
    pub fn topic(self) -> &'static str {
        match self {
            Quantity::Pm10 => "highpm10topic",
            Quantity::Pm25 => "highpm25topic",
            Quantity::Humidity => "highhumiditytopic",
        }
    }

    /// Map a broker topic back to its quantity. The table is closed;
    /// anything else yields `None`.
    pub fn from_topic(topic: &str) -> Option<Quantity> {
        match topic {
            "highpm10topic" => Some(Quantity::Pm10),
            "highpm25topic" => Some(Quantity::Pm25),
            "highhumiditytopic" => Some(Quantity::Humidity),
            _ => None,
        }
    }

    pub fn chart_title(self) -> &'static str {
        match self {
            Quantity::Pm10 => "PM10 Concentration",
            Quantity::Pm25 => "PM2.5 Concentration",
            Quantity::Humidity => "Humidity",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            Quantity::Pm10 => "pm10",
            Quantity::Pm25 => "pm25",
            Quantity::Humidity => "humidity",
        }
    }
}
