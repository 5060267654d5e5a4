//! Golden traces for the demo tribute.

use serde_json::json;
use tribute_core::scenario::{demo_tribute, run_demo};
use tribute_core::Result;

/// Runs the opening volley against a fresh demo tribute and captures the
/// before/after hitpoints plus every status report.
pub fn demo_trace() -> Result<serde_json::Value> {
    let mut donny = demo_tribute();
    let max = *donny.max_hitpoints();
    let outcome = run_demo(&mut donny)?;
    Ok(json!({
        "name": donny.name(),
        "max_hitpoints": max,
        "outcome": outcome,
        "final_hitpoints": donny.hitpoints(),
    }))
}

/// The report lines a console run of the demo prints, in order.
pub fn demo_status_lines() -> Result<Vec<String>> {
    let mut donny = demo_tribute();
    let outcome = run_demo(&mut donny)?;
    Ok(outcome
        .reports
        .iter()
        .flat_map(|report| {
            report
                .to_string()
                .lines()
                .map(str::to_owned)
                .collect::<Vec<_>>()
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace_is_deterministic() {
        let a = demo_trace().unwrap();
        let b = demo_trace().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ten_status_lines_for_five_hits() {
        let lines = demo_status_lines().unwrap();
        assert_eq!(lines.len(), 10);
        assert_eq!(lines[8], "torso hitpoints: 74");
        assert_eq!(lines[9], "total hitpoints: 64");
    }
}
