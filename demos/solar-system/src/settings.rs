//! Display toggles, read fresh every frame.

use serde::Deserialize;

/// One named toggle. The discriminant is the index the host sends with a
/// set-setting event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    Orbits,
    Trails,
    Labels,
    Glow,
    Debug,
    Prediction,
    LensFlare,
    MilkyWay,
    DwarfPlanets,
    Moons,
    Inclination,
    DistanceRuler,
    RealisticScale,
}

impl Setting {
    pub const ALL: [Setting; 13] = [
        Setting::Orbits,
        Setting::Trails,
        Setting::Labels,
        Setting::Glow,
        Setting::Debug,
        Setting::Prediction,
        Setting::LensFlare,
        Setting::MilkyWay,
        Setting::DwarfPlanets,
        Setting::Moons,
        Setting::Inclination,
        Setting::DistanceRuler,
        Setting::RealisticScale,
    ];

    pub fn from_index(index: u32) -> Option<Setting> {
        Self::ALL.get(index as usize).copied()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub show_orbits: bool,
    pub show_trails: bool,
    pub show_labels: bool,
    pub show_glow: bool,
    pub show_debug: bool,
    pub show_prediction: bool,
    pub show_lens_flare: bool,
    pub show_milky_way: bool,
    pub show_dwarf_planets: bool,
    pub show_moons: bool,
    pub show_inclination: bool,
    pub distance_ruler: bool,
    pub realistic_scale: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            show_orbits: true,
            show_trails: true,
            show_labels: false,
            show_glow: true,
            show_debug: false,
            show_prediction: true,
            show_lens_flare: true,
            show_milky_way: true,
            show_dwarf_planets: false,
            show_moons: false,
            show_inclination: false,
            distance_ruler: false,
            realistic_scale: false,
        }
    }
}

impl Settings {
    /// Parse a settings object. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    fn slot(&mut self, setting: Setting) -> &mut bool {
        match setting {
            Setting::Orbits => &mut self.show_orbits,
            Setting::Trails => &mut self.show_trails,
            Setting::Labels => &mut self.show_labels,
            Setting::Glow => &mut self.show_glow,
            Setting::Debug => &mut self.show_debug,
            Setting::Prediction => &mut self.show_prediction,
            Setting::LensFlare => &mut self.show_lens_flare,
            Setting::MilkyWay => &mut self.show_milky_way,
            Setting::DwarfPlanets => &mut self.show_dwarf_planets,
            Setting::Moons => &mut self.show_moons,
            Setting::Inclination => &mut self.show_inclination,
            Setting::DistanceRuler => &mut self.distance_ruler,
            Setting::RealisticScale => &mut self.realistic_scale,
        }
    }

    pub fn get(&self, setting: Setting) -> bool {
        match setting {
            Setting::Orbits => self.show_orbits,
            Setting::Trails => self.show_trails,
            Setting::Labels => self.show_labels,
            Setting::Glow => self.show_glow,
            Setting::Debug => self.show_debug,
            Setting::Prediction => self.show_prediction,
            Setting::LensFlare => self.show_lens_flare,
            Setting::MilkyWay => self.show_milky_way,
            Setting::DwarfPlanets => self.show_dwarf_planets,
            Setting::Moons => self.show_moons,
            Setting::Inclination => self.show_inclination,
            Setting::DistanceRuler => self.distance_ruler,
            Setting::RealisticScale => self.realistic_scale,
        }
    }

    /// Set a toggle, returning whether it changed.
    pub fn set(&mut self, setting: Setting, on: bool) -> bool {
        let slot = self.slot(setting);
        let changed = *slot != on;
        *slot = on;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let s = Settings::default();
        assert!(s.show_orbits && s.show_trails && s.show_glow);
        assert!(s.show_prediction && s.show_lens_flare && s.show_milky_way);
        assert!(!s.show_labels && !s.show_debug && !s.show_dwarf_planets);
        assert!(!s.show_moons && !s.show_inclination && !s.distance_ruler && !s.realistic_scale);
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let s = Settings::from_json(r#"{ "show_labels": true, "show_orbits": false }"#).unwrap();
        assert!(s.show_labels);
        assert!(!s.show_orbits);
        assert!(s.show_trails);
    }

    #[test]
    fn bad_json_is_an_error() {
        assert!(Settings::from_json("{ show_labels: yes").is_err());
        assert!(Settings::from_json(r#"{ "show_labels": 3 }"#).is_err());
    }

    #[test]
    fn index_order() {
        assert_eq!(Setting::from_index(0), Some(Setting::Orbits));
        assert_eq!(Setting::from_index(8), Some(Setting::DwarfPlanets));
        assert_eq!(Setting::from_index(12), Some(Setting::RealisticScale));
        assert_eq!(Setting::from_index(13), None);
    }

    #[test]
    fn set_reports_changes() {
        let mut s = Settings::default();
        assert!(s.set(Setting::Labels, true));
        assert!(!s.set(Setting::Labels, true));
        assert!(s.get(Setting::Labels));
        for setting in Setting::ALL {
            let before = s.get(setting);
            s.set(setting, !before);
            assert_eq!(s.get(setting), !before, "{setting:?}");
        }
    }
}
