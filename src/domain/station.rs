// Station registry domain model
use std::fmt;

/// Code of one of the fixed monitoring stations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum StationCode {
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
}

impl StationCode {
    pub const ALL: [StationCode; 6] = [
        StationCode::A1,
        StationCode::A2,
        StationCode::A3,
        StationCode::A4,
        StationCode::A5,
        StationCode::A6,
    ];

    /// Parse a wire station code. Codes outside the registry yield `None`.
    pub fn parse(code: &str) -> Option<StationCode> {
        match code {
            "A1" => Some(StationCode::A1),
            "A2" => Some(StationCode::A2),
            "A3" => Some(StationCode::A3),
            "A4" => Some(StationCode::A4),
            "A5" => Some(StationCode::A5),
            "A6" => Some(StationCode::A6),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StationCode::A1 => "A1",
            StationCode::A2 => "A2",
            StationCode::A3 => "A3",
            StationCode::A4 => "A4",
            StationCode::A5 => "A5",
            StationCode::A6 => "A6",
        }
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A monitoring station with its display name and assigned chart color.
#[derive(Debug, Clone, Copy)]
pub struct Station {
    pub code: StationCode,
    pub name: &'static str,
    pub color: &'static str,
}

const REGISTRY: [Station; 6] = [
    Station {
        code: StationCode::A1,
        name: "Punta del Parque",
        color: "red",
    },
    Station {
        code: StationCode::A2,
        name: "Perpetuo Socorro",
        color: "blue",
    },
    Station {
        code: StationCode::A3,
        name: "Fuente de las ranas",
        color: "green",
    },
    Station {
        code: StationCode::A4,
        name: "Hospital General",
        color: "orange",
    },
    Station {
        code: StationCode::A5,
        name: "Universidad",
        color: "purple",
    },
    Station {
        code: StationCode::A6,
        name: "Imaginalia",
        color: "brown",
    },
];

/// All registered stations, in code order.
pub fn all() -> &'static [Station] {
    &REGISTRY
}

/// Registry entry for a station code.
pub fn lookup(code: StationCode) -> &'static Station {
    &REGISTRY[code as usize]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn parse_known_codes() {
        for station in all() {
            assert_eq!(StationCode::parse(station.code.as_str()), Some(station.code));
        }
    }

    #[test]
    fn parse_rejects_unknown_codes() {
        assert_eq!(StationCode::parse("A7"), None);
        assert_eq!(StationCode::parse("B1"), None);
        assert_eq!(StationCode::parse(""), None);
    }

    #[test]
    fn registry_is_closed_and_distinct() {
        assert_eq!(all().len(), 6);
        let colors: HashSet<_> = all().iter().map(|s| s.color).collect();
        assert_eq!(colors.len(), 6);
    }

    #[test]
    fn lookup_matches_code() {
        let station = lookup(StationCode::A1);
        assert_eq!(station.name, "Punta del Parque");
        assert_eq!(station.color, "red");
        assert_eq!(lookup(StationCode::A6).name, "Imaginalia");
    }
}
