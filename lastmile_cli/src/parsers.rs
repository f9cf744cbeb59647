use jiff::{SignedDuration, Span, SpanRelativeTo};

/// Parses a solve time budget: "30s" / "5m" style durations, ISO 8601
/// spans, or a bare number of seconds. A budget must be strictly positive;
/// zero would let every attempt expire before construction finishes.
pub fn parse_time_budget(input: &str) -> Result<SignedDuration, String> {
    let budget = if let Ok(duration) = input.parse::<SignedDuration>() {
        duration
    } else if let Ok(duration) = input
        .parse::<Span>()
        .and_then(|span| span.to_duration(SpanRelativeTo::days_are_24_hours()))
    {
        duration
    } else if let Ok(seconds) = input.parse::<i64>() {
        SignedDuration::from_secs(seconds)
    } else {
        return Err(format!("cannot parse {input:?} as a duration"));
    };

    if budget.is_negative() || budget.is_zero() {
        return Err(String::from("time budget must be positive"));
    }

    Ok(budget)
}
