use crate::problem::location::{Location, LocationIdx};

/// Dense symmetric matrix of travel costs between locations. Travel time
/// equals travel cost (unit speed), as in the Solomon benchmark instances.
#[derive(Debug, Clone)]
pub struct TravelCostMatrix {
    size: usize,
    costs: Vec<f64>,
}

impl TravelCostMatrix {
    pub fn from_euclidean(locations: &[Location]) -> Self {
        let size = locations.len();
        let mut costs = vec![0.0; size * size];

        for (from, from_location) in locations.iter().enumerate() {
            for (to, to_location) in locations.iter().enumerate().skip(from + 1) {
                let cost = from_location.euclidean_distance(to_location);
                costs[from * size + to] = cost;
                costs[to * size + from] = cost;
            }
        }

        TravelCostMatrix { size, costs }
    }

    pub fn cost(&self, from: LocationIdx, to: LocationIdx) -> f64 {
        self.costs[from.get() * self.size + to.get()]
    }

    pub fn len(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_euclidean() {
        let locations = vec![
            Location::from_cartesian(0.0, 0.0),
            Location::from_cartesian(3.0, 4.0),
            Location::from_cartesian(3.0, 0.0),
        ];

        let matrix = TravelCostMatrix::from_euclidean(&locations);

        assert_eq!(matrix.cost(LocationIdx::new(0), LocationIdx::new(0)), 0.0);
        assert_eq!(matrix.cost(LocationIdx::new(0), LocationIdx::new(1)), 5.0);
        assert_eq!(matrix.cost(LocationIdx::new(1), LocationIdx::new(0)), 5.0);
        assert_eq!(matrix.cost(LocationIdx::new(1), LocationIdx::new(2)), 4.0);
    }
}
