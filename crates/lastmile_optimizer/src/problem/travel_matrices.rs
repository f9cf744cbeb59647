use crate::error::ModelError;

/// Pairwise travel data between all nodes of a scenario, node 0 being the
/// depot. Distances are kilometers, times are minutes.
///
/// Stored as flat vectors; to find the entry for a pair of nodes use
/// `index = from * num_locations + to`.
pub struct TravelMatrices {
    distances: Vec<f64>,
    times: Vec<f64>,
    num_locations: usize,
}

impl TravelMatrices {
    /// Validates and flattens row-major matrices. The diagonal must be zero
    /// and every entry non-negative; symmetry is not required.
    pub fn new(distances: Vec<Vec<f64>>, times: Vec<Vec<f64>>) -> Result<Self, ModelError> {
        let num_locations = distances.len();

        if times.len() != num_locations {
            return Err(ModelError::MatrixSizeMismatch {
                distances: num_locations,
                times: times.len(),
            });
        }

        for matrix in [&distances, &times] {
            for (from, row) in matrix.iter().enumerate() {
                if row.len() != num_locations {
                    return Err(ModelError::RaggedMatrix {
                        row: from,
                        len: row.len(),
                        expected: num_locations,
                    });
                }

                for (to, &value) in row.iter().enumerate() {
                    if value < 0.0 || value.is_nan() {
                        return Err(ModelError::NegativeEntry { from, to });
                    }

                    if from == to && value != 0.0 {
                        return Err(ModelError::NonzeroDiagonal { node: from, value });
                    }
                }
            }
        }

        Ok(TravelMatrices {
            distances: distances.into_iter().flatten().collect(),
            times: times.into_iter().flatten().collect(),
            num_locations,
        })
    }

    #[inline(always)]
    fn index(&self, from: usize, to: usize) -> usize {
        from * self.num_locations + to
    }

    #[inline(always)]
    pub fn distance_km(&self, from: usize, to: usize) -> f64 {
        self.distances[self.index(from, to)]
    }

    #[inline(always)]
    pub fn travel_time_minutes(&self, from: usize, to: usize) -> f64 {
        self.times[self.index(from, to)]
    }

    pub fn num_locations(&self) -> usize {
        self.num_locations
    }
}
