use jiff::SignedDuration;

/// Knobs for one engine invocation. The time budget applies per attempt; the
/// escalation loop hands the same params to every attempt so a slow first
/// attempt never shrinks the budget of later ones.
#[derive(Clone, Debug)]
pub struct SearchParams {
    pub time_budget: SignedDuration,

    /// Probability of perturbing an insertion cost during construction.
    pub noise_probability: f64,

    /// Magnitude of the perturbation, as a fraction of the largest arc cost.
    pub noise_level: f64,

    /// Seed for the construction noise; fixed by default so identical inputs
    /// produce identical solutions.
    pub seed: u64,
}

impl Default for SearchParams {
    fn default() -> Self {
        SearchParams {
            time_budget: SignedDuration::from_secs(300),
            noise_probability: 0.15,
            noise_level: 0.025,
            seed: 0,
        }
    }
}

impl SearchParams {
    pub fn with_time_budget(time_budget: SignedDuration) -> Self {
        SearchParams {
            time_budget,
            ..SearchParams::default()
        }
    }
}
