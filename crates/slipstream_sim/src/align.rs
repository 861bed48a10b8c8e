//! Alignment of two lap-time series onto a common lap count.
//!
//! Real stints rarely have the same length: one car may pit, retire,
//! or simply have fewer recorded laps in the selected window. The
//! aligner truncates both series to the shorter length so the
//! recurrence can walk them index by index. Missing laps are a
//! data-quality condition the aligner truncates around; it never
//! interpolates.

use crate::error::{Error, Result};
use stint_model::LapTimeSeries;

/// Truncates both series to their common lap count.
///
/// Order is preserved; equal-length inputs come back unchanged.
///
/// # Errors
///
/// Returns [`Error::InsufficientData`] if either series is empty.
pub fn align<'a>(
    pursuer: &'a LapTimeSeries,
    target: &'a LapTimeSeries,
) -> Result<(&'a [f64], &'a [f64])> {
    if pursuer.is_empty() {
        return Err(Error::InsufficientData(
            "pursuer has no laps in the selected range".to_string(),
        ));
    }
    if target.is_empty() {
        return Err(Error::InsufficientData(
            "target has no laps in the selected range".to_string(),
        ));
    }

    let n = pursuer.len().min(target.len());
    Ok((&pursuer.times()[..n], &target.times()[..n]))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(times: &[f64]) -> LapTimeSeries {
        LapTimeSeries::new(1, times.to_vec()).unwrap()
    }

    #[test]
    fn equal_lengths_are_identity() {
        let pursuer = series(&[90.0, 89.5]);
        let target = series(&[89.0, 89.2]);

        let (p, t) = align(&pursuer, &target).unwrap();
        assert_eq!(p, pursuer.times());
        assert_eq!(t, target.times());
    }

    #[test]
    fn longer_series_is_truncated() {
        let pursuer = series(&[90.0, 89.5, 89.3, 89.1]);
        let target = series(&[89.0, 89.2]);

        let (p, t) = align(&pursuer, &target).unwrap();
        assert_eq!(p, &[90.0, 89.5]);
        assert_eq!(t.len(), 2);
    }

    #[test]
    fn empty_pursuer_is_rejected() {
        let pursuer = series(&[]);
        let target = series(&[89.0]);

        let result = align(&pursuer, &target);
        assert!(matches!(result, Err(Error::InsufficientData(_))));
    }

    #[test]
    fn empty_target_is_rejected() {
        let pursuer = series(&[90.0]);
        let target = series(&[]);

        let result = align(&pursuer, &target);
        assert!(matches!(result, Err(Error::InsufficientData(_))));
    }
}
