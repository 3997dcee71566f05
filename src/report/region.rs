use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Rectangular area of interest drawn on the map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Region {
    pub name: String,
    pub lat_min: f64,
    pub lat_max: f64,
    pub lon_min: f64,
    pub lon_max: f64,
    pub center_lat: f64,
    pub center_lon: f64,
}

impl Default for Region {
    /// Germany
    fn default() -> Self {
        Self {
            name: "Deutschland".to_string(),
            lat_min: 47.3,
            lat_max: 55.1,
            lon_min: 5.9,
            lon_max: 15.0,
            center_lat: 51.2,
            center_lon: 10.4,
        }
    }
}

impl Region {
    pub fn contains(&self, lat: f64, lon: f64) -> bool {
        (self.lat_min..=self.lat_max).contains(&lat) && (self.lon_min..=self.lon_max).contains(&lon)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_germany_bounds() {
        let germany = Region::default();
        assert!(germany.contains(germany.center_lat, germany.center_lon));
        // Berlin
        assert!(germany.contains(52.52, 13.40));
        // Paris
        assert!(!germany.contains(48.86, 2.35));
        assert!(!germany.contains(-51.2, 10.4));
    }
}
