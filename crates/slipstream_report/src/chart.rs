//! Fixed-width ASCII rendering of a gap trajectory.

use slipstream_sim::GapTrajectory;

/// Renders a trajectory as one row per lap boundary.
///
/// Each row places an `o` marker at the scaled gap position and a `|`
/// on the zero axis; the pursuer is ahead once the marker falls left
/// of the axis. Returns an empty string for empty trajectories or a
/// width below 2.
#[must_use]
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
pub fn render_gap_chart(trajectory: &GapTrajectory, width: usize) -> String {
    let gaps = trajectory.gaps();
    if gaps.is_empty() || width < 2 {
        return String::new();
    }

    // Always include the zero axis in the scale so a crossing is
    // visible even when every gap is positive.
    let min = trajectory.min_gap().unwrap_or(0.0).min(0.0);
    let max = gaps.iter().copied().fold(0.0f64, f64::max);
    let span = (max - min).max(f64::EPSILON);

    let column = |value: f64| -> usize {
        let fraction = (value - min) / span;
        ((fraction * (width - 1) as f64).round() as usize).min(width - 1)
    };
    let zero_column = column(0.0);

    let mut out = String::new();
    for (lap, &gap) in trajectory.lap_numbers().iter().zip(gaps) {
        let mut row = vec![' '; width];
        row[zero_column] = '|';
        row[column(gap)] = 'o';
        let row: String = row.into_iter().collect();
        out.push_str(&format!("lap {lap:>3}  {row}  {gap:+7.3}s\n"));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_row_per_boundary() {
        let trajectory = GapTrajectory::from_gaps(52, vec![2.6, 1.4, -0.3]);
        let chart = render_gap_chart(&trajectory, 30);

        assert_eq!(chart.lines().count(), 3);
        assert!(chart.contains("lap  52"));
        assert!(chart.contains("lap  54"));
        assert!(chart.contains("+2.600s"));
        assert!(chart.contains("-0.300s"));
    }

    #[test]
    fn marker_crosses_axis_with_the_gap() {
        let trajectory = GapTrajectory::from_gaps(1, vec![1.0, -1.0]);
        let chart = render_gap_chart(&trajectory, 21);
        let lines: Vec<&str> = chart.lines().collect();

        let positive_row = lines[0];
        let negative_row = lines[1];
        assert!(positive_row.find('|').unwrap() < positive_row.find('o').unwrap());
        assert!(negative_row.find('o').unwrap() < negative_row.find('|').unwrap());
    }

    #[test]
    fn empty_trajectory_renders_nothing() {
        let trajectory = GapTrajectory::from_gaps(1, Vec::new());
        assert!(render_gap_chart(&trajectory, 30).is_empty());
    }

    #[test]
    fn degenerate_width_renders_nothing() {
        let trajectory = GapTrajectory::from_gaps(1, vec![1.0]);
        assert!(render_gap_chart(&trajectory, 1).is_empty());
    }
}
