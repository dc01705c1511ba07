use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

/// A single reading from the positioning capability.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fix {
    pub latitude: f64,
    pub longitude: f64,
    /// Accuracy radius in metres, when the platform reports one.
    pub accuracy: Option<f64>,
}

impl From<Fix> for Coordinate {
    fn from(fix: Fix) -> Self {
        Coordinate::new(fix.latitude, fix.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fix_into_coordinate_drops_accuracy() {
        let fix = Fix {
            latitude: 47.6062,
            longitude: -122.3321,
            accuracy: Some(12.5),
        };
        let coordinate: Coordinate = fix.into();
        assert_eq!(coordinate, Coordinate::new(47.6062, -122.3321));
    }

    #[test]
    fn test_coordinate_display() {
        let coordinate = Coordinate::new(-33.8688, 151.2093);
        assert_eq!(coordinate.to_string(), "-33.868800, 151.209300");
    }
}
