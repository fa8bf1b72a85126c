//! Fixed waypoint catalogs
//!
//! Two disjoint catalogs keyed by navigation mode: photo waypoints for visual
//! navigation and textual landmarks for tactile navigation. Both are built
//! once at startup and never mutated; requests sample from them through
//! [`WaypointCatalog::pool`].

use std::collections::HashSet;

use crate::types::{NavigationMode, WaypointEntry};
use crate::{Error, Result};

/// Immutable waypoint catalogs, one per navigation mode
#[derive(Debug, Clone)]
pub struct WaypointCatalog {
    visual: Vec<WaypointEntry>,
    tactile: Vec<WaypointEntry>,
}

impl WaypointCatalog {
    /// Build the built-in demo catalogs
    pub fn builtin() -> Self {
        Self {
            visual: visual_entries(),
            tactile: tactile_entries(),
        }
    }

    /// Entries for the given navigation mode
    pub fn pool(&self, mode: NavigationMode) -> &[WaypointEntry] {
        match mode {
            NavigationMode::Visual => &self.visual,
            NavigationMode::Tactile => &self.tactile,
        }
    }

    /// Check catalog integrity: both pools non-empty, ids unique per pool
    pub fn validate(&self) -> Result<()> {
        for (name, pool) in [("visual", &self.visual), ("tactile", &self.tactile)] {
            if pool.is_empty() {
                return Err(Error::invalid_catalog(format!("{} catalog is empty", name)));
            }

            let mut seen = HashSet::new();
            for entry in pool {
                if !seen.insert(entry.id()) {
                    return Err(Error::invalid_catalog(format!(
                        "duplicate id '{}' in {} catalog",
                        entry.id(),
                        name
                    )));
                }
            }
        }

        Ok(())
    }
}

/// Photo waypoints for visual navigation: (id, url, description)
const VISUAL_WAYPOINTS: [(&str, &str, &str); 10] = [
    (
        "mountain_lake",
        "https://picsum.photos/seed/696/3000/2000",
        "Eine malerische Aussicht auf eine Berglandschaft mit einem See im Vordergrund",
    ),
    (
        "city_street",
        "https://picsum.photos/seed/697/3000/2000",
        "Eine belebte Stadtstraße mit hohen Gebäuden und gehenden Menschen",
    ),
    (
        "flower_closeup",
        "https://picsum.photos/seed/698/3000/2000",
        "Eine Nahaufnahme einer farbenfrohen Blume mit Tautropfen auf ihren Blütenblättern",
    ),
    (
        "beach_scene",
        "https://picsum.photos/seed/699/3000/2000",
        "Eine friedliche Strandszene mit weißem Sand und klarem blauen Wasser",
    ),
    (
        "forest_aerial",
        "https://picsum.photos/seed/700/3000/2000",
        "Eine Luftaufnahme eines dichten Waldes mit verschiedenen Grüntönen",
    ),
    (
        "vintage_cafe",
        "https://picsum.photos/seed/701/3000/2000",
        "Ein gemütliches Cafe-Interieur mit Vintage-Möbeln und warmer Beleuchtung",
    ),
    (
        "waterfall",
        "https://picsum.photos/seed/702/3000/2000",
        "Ein majestätischer Wasserfall, der in einen türkisfarbenen Pool stürzt",
    ),
    (
        "winter_landscape",
        "https://picsum.photos/seed/703/3000/2000",
        "Eine verschneite Winterlandschaft mit schneebedeckten Bäumen und einem gefrorenen See",
    ),
    (
        "sunset_ocean",
        "https://picsum.photos/seed/704/3000/2000",
        "Ein bunter Sonnenuntergang über einem ruhigen Ozean mit Segelbooten am Horizont",
    ),
    (
        "ivy_wall",
        "https://picsum.photos/seed/705/3000/2000",
        "Eine alte, mit Efeu bewachsene Steinmauer in einem üppigen Garten",
    ),
];

/// Tactile landmarks for navigation without sight: (id, description)
const TACTILE_LANDMARKS: [(&str, &str); 10] = [
    (
        "handrail_main",
        "Ein durchgehender Handlauf an der rechten Wand, aus glattem Metall, leicht gewärmt durch die Heizung darunter",
    ),
    (
        "floor_transition",
        "Übergang von Teppich zu strukturiertem Vinylboden, deutlich spürbare Kante mit Metallschiene",
    ),
    (
        "corner_guard",
        "Abgerundete Eckenschutz aus Kunststoff, vertikal verlaufend, etwa in Schulterhöhe tastbar",
    ),
    (
        "braille_sign",
        "Braille-Schild rechts neben der Tür, auf Griffhöhe montiert, enthält Raumnummer und Funktionsbeschreibung",
    ),
    (
        "textured_strip",
        "Taktiler Bodenstreifen mit Rippenstruktur, führt direkt zum Haupteingang des Gebäudeflügels",
    ),
    (
        "column_marker",
        "Runde Säule mit strukturierter Oberfläche, markiert wichtige Kreuzungspunkte im Gang",
    ),
    (
        "door_handle",
        "Schwerer Metallgriff mit charakteristischer L-Form, federt beim Herunterdrücken leicht nach oben",
    ),
    (
        "elevator_panel",
        "Aufzugsbedienfeld mit erhöhten Tasten und Braille-Beschriftung, Summer ertönt bei Tastendruck",
    ),
    (
        "bench_alcove",
        "Holzbank in einer Wandnische, glatt lackierte Oberfläche, etwa kniehoch, mit Armlehnen an beiden Seiten",
    ),
    (
        "water_fountain",
        "Trinkbrunnen aus gebürstetem Edelstahl, Bedienknopf an der Vorderseite deutlich hervorstehend",
    ),
];

fn visual_entries() -> Vec<WaypointEntry> {
    VISUAL_WAYPOINTS
        .iter()
        .map(|&(id, url, description)| WaypointEntry::Visual {
            id: id.to_string(),
            url: url.to_string(),
            description: description.to_string(),
        })
        .collect()
}

fn tactile_entries() -> Vec<WaypointEntry> {
    TACTILE_LANDMARKS
        .iter()
        .map(|&(id, description)| WaypointEntry::Tactile {
            id: id.to_string(),
            description: description.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        WaypointCatalog::builtin().validate().unwrap();
    }

    #[test]
    fn test_pools_are_disjoint() {
        let catalog = WaypointCatalog::builtin();
        let visual: HashSet<&str> = catalog
            .pool(NavigationMode::Visual)
            .iter()
            .map(|e| e.id())
            .collect();

        for entry in catalog.pool(NavigationMode::Tactile) {
            assert!(!visual.contains(entry.id()));
        }
    }

    #[test]
    fn test_pool_selects_matching_variant() {
        let catalog = WaypointCatalog::builtin();

        assert!(catalog
            .pool(NavigationMode::Visual)
            .iter()
            .all(|e| matches!(e, WaypointEntry::Visual { .. })));
        assert!(catalog
            .pool(NavigationMode::Tactile)
            .iter()
            .all(|e| matches!(e, WaypointEntry::Tactile { .. })));
    }

    #[test]
    fn test_validate_rejects_duplicate_ids() {
        let mut catalog = WaypointCatalog::builtin();
        let first = catalog.tactile[0].clone();
        catalog.tactile.push(first);

        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_empty_pool() {
        let mut catalog = WaypointCatalog::builtin();
        catalog.visual.clear();

        assert!(catalog.validate().is_err());
    }
}
