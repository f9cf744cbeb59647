mod escalation;

pub use escalation::{EscalationPolicy, FeasibilitySearch};
