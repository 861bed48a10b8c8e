//! Markdown battle report generation.

use crate::chart::render_gap_chart;
use slipstream_sim::SimulationResult;
use stint_model::{LapTimeSeries, SimulationParameters};

const CHART_WIDTH: usize = 41;

/// Generates a human-readable report of a simulated battle.
///
/// The report includes:
/// - Scenario overview (window, gap, penalty model)
/// - The verdict, with the overtake lap when one happened
/// - Real-pace comparison of the two stints
/// - Lap-by-lap gap evolution as an ASCII chart
#[must_use]
pub fn generate_battle_report(
    pursuer: &LapTimeSeries,
    target: &LapTimeSeries,
    params: &SimulationParameters,
    result: &SimulationResult,
) -> String {
    let pursuer_name = driver_name(pursuer, "pursuer");
    let target_name = driver_name(target, "target");

    let mut report = String::new();

    // Header
    report.push_str(&format!(
        "# Battle Report: {pursuer_name} vs {target_name}\n\n"
    ));

    // Overview
    report.push_str("## Scenario\n\n");
    report.push_str(&format!("- **Start lap**: {}\n", params.start_lap));
    report.push_str(&format!("- **Initial gap**: {:.3}s\n", params.initial_gap));
    report.push_str(&format!(
        "- **Dirty air penalty**: {:.3}s/lap (charged to {target_name})\n",
        params.dirty_air_penalty
    ));
    report.push_str(&format!(
        "- **Tire decay rate**: {:.3}s/lap (charged to {target_name})\n",
        params.tire_decay_rate
    ));
    report.push_str(&format!(
        "- **Laps simulated**: {}\n\n",
        result.laps_simulated()
    ));

    // Verdict
    report.push_str("## Verdict\n\n");
    if let Some(lap) = result.overtake_lap {
        report.push_str(&format!(
            "**Overtake**: {pursuer_name} gets ahead of {target_name} on lap {lap}.\n\n"
        ));
    } else {
        report.push_str(&format!(
            "**No overtake**: {pursuer_name} never gets ahead in this window.\n\n"
        ));
    }
    report.push_str(&format!("- **Final gap**: {:.3}s\n", result.final_gap));
    report.push_str(&format!(
        "- **Closest approach**: {:.3}s\n",
        result.summary.closest_approach
    ));
    report.push_str(&format!(
        "- **Mean gap change**: {:+.3}s/lap\n\n",
        result.summary.mean_gap_change_per_lap
    ));

    // Real pace
    report.push_str("## Real Pace\n\n");
    report.push_str("| Driver | Laps | Best | Mean | Worst |\n");
    report.push_str("|--------|------|------|------|-------|\n");
    report.push_str(&pace_row(&pursuer_name, pursuer));
    report.push_str(&pace_row(&target_name, target));
    report.push('\n');

    // Gap evolution
    report.push_str("## Gap Evolution\n\n");
    report.push_str("Positive means the pursuer is behind; the marker left of the axis means ahead.\n\n");
    report.push_str("```text\n");
    report.push_str(&render_gap_chart(&result.trajectory, CHART_WIDTH));
    report.push_str("```\n");

    report
}

fn driver_name(series: &LapTimeSeries, fallback: &str) -> String {
    series
        .driver
        .clone()
        .unwrap_or_else(|| fallback.to_string())
}

fn pace_row(name: &str, series: &LapTimeSeries) -> String {
    let stats = series.stats();
    format!(
        "| {name} | {} | {:.3}s | {:.3}s | {:.3}s |\n",
        stats.lap_count, stats.best, stats.mean, stats.worst
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use slipstream_sim::Simulator;

    fn battle() -> (LapTimeSeries, LapTimeSeries, SimulationParameters, SimulationResult) {
        let pursuer = LapTimeSeries::new(52, vec![88.0, 89.5])
            .unwrap()
            .with_driver("NOR");
        let target = LapTimeSeries::new(52, vec![89.0, 89.0])
            .unwrap()
            .with_driver("RUS");
        let params = SimulationParameters::new(52, 0.5).unwrap();
        let result = Simulator::new(params.clone())
            .simulate(&pursuer, &target)
            .unwrap();
        (pursuer, target, params, result)
    }

    #[test]
    fn report_covers_overtake_battle() {
        let (pursuer, target, params, result) = battle();
        let report = generate_battle_report(&pursuer, &target, &params, &result);

        assert!(report.contains("# Battle Report: NOR vs RUS"));
        assert!(report.contains("**Start lap**: 52"));
        assert!(report.contains("gets ahead of RUS on lap 52"));
        assert!(report.contains("| NOR | 2 |"));
        assert!(report.contains("```text"));
    }

    #[test]
    fn report_without_overtake() {
        let pursuer = LapTimeSeries::new(52, vec![90.0, 89.5])
            .unwrap()
            .with_driver("NOR");
        let target = LapTimeSeries::new(52, vec![89.0, 89.0])
            .unwrap()
            .with_driver("RUS");
        let params = SimulationParameters::new(52, 2.6).unwrap();
        let result = Simulator::new(params.clone())
            .simulate(&pursuer, &target)
            .unwrap();

        let report = generate_battle_report(&pursuer, &target, &params, &result);
        assert!(report.contains("**No overtake**"));
        assert!(report.contains("**Final gap**: 3.750s"));
    }

    #[test]
    fn report_falls_back_to_role_names() {
        let (mut pursuer, mut target, params, result) = battle();
        pursuer.driver = None;
        target.driver = None;

        let report = generate_battle_report(&pursuer, &target, &params, &result);
        assert!(report.contains("# Battle Report: pursuer vs target"));
    }
}
