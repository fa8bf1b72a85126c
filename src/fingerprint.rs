//! Static radio fingerprint fixtures
//!
//! Each fixture ties a reference position to the access-point signal
//! strengths observed there. The set is fixed demo data; the backend only
//! ever serves it verbatim.

use serde::{Deserialize, Serialize};

use crate::position::Position;

/// One observed access-point signal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SignalSample {
    pub bssid: String,
    pub rssi: i32,
}

/// A reference fingerprint: where it was taken and what was heard there
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Fingerprint {
    pub id: String,
    pub position: Position,
    pub signals: Vec<SignalSample>,
}

/// Fixture set: (id, x, y, floor, signals)
const FIXTURES: [(&str, i32, i32, i32, &[(&str, i32)]); 5] = [
    (
        "fp_entrance",
        2,
        4,
        0,
        &[
            ("9c:3d:cf:10:22:01", -42),
            ("9c:3d:cf:10:22:02", -61),
            ("b0:95:75:44:18:0a", -74),
        ],
    ),
    (
        "fp_lobby",
        12,
        24,
        0,
        &[
            ("9c:3d:cf:10:22:01", -55),
            ("9c:3d:cf:10:22:02", -48),
            ("b0:95:75:44:18:0a", -69),
        ],
    ),
    (
        "fp_corridor_east",
        40,
        30,
        0,
        &[
            ("9c:3d:cf:10:22:02", -51),
            ("b0:95:75:44:18:0a", -58),
        ],
    ),
    (
        "fp_stairwell",
        55,
        42,
        1,
        &[
            ("b0:95:75:44:18:0a", -47),
            ("b0:95:75:44:18:0b", -63),
        ],
    ),
    (
        "fp_destination_wing",
        70,
        50,
        1,
        &[
            ("b0:95:75:44:18:0b", -44),
            ("9c:3d:cf:10:22:02", -77),
        ],
    ),
];

/// The built-in fixture set, materialized fresh for each caller
pub fn builtin() -> Vec<Fingerprint> {
    FIXTURES
        .iter()
        .map(|&(id, x, y, floor, signals)| Fingerprint {
            id: id.to_string(),
            position: Position::new(x, y, floor),
            signals: signals
                .iter()
                .map(|&(bssid, rssi)| SignalSample {
                    bssid: bssid.to_string(),
                    rssi,
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixture_ids_are_unique() {
        let fingerprints = builtin();
        let ids: HashSet<&str> = fingerprints.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(ids.len(), fingerprints.len());
    }

    #[test]
    fn test_every_fixture_has_signals() {
        for fingerprint in builtin() {
            assert!(!fingerprint.signals.is_empty());
            for signal in &fingerprint.signals {
                // Plausible RSSI range for 2.4/5 GHz access points
                assert!(signal.rssi < 0 && signal.rssi > -100);
            }
        }
    }
}
