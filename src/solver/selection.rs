//! Weighted selection from caller-supplied draws.
//!
//! The engine never generates random numbers itself: every selection is a
//! pure function of the weights and an external draw `r` in `[0, 1)`.

use crate::error::{Result, SrteError};

/// Reject draws outside `[0, 1)`
pub(crate) fn check_draw(r: f64) -> Result<()> {
    if r.is_finite() && (0.0..1.0).contains(&r) {
        Ok(())
    } else {
        Err(SrteError::InvalidDraw(r))
    }
}

/// Pick an index with probability proportional to its weight.
///
/// Builds the cumulative table and returns the first index whose cumulative
/// weight exceeds `r * total`. Zero-weight items are never picked unless
/// every weight is zero, in which case the pick is uniform
/// (`floor(r * len)`). If some weights overflow to infinity the pick is
/// uniform among those. Returns `None` only for an empty input.
pub(crate) fn weighted_index<I>(weights: I, r: f64) -> Option<usize>
where
    I: IntoIterator<Item = f64>,
{
    let weights: Vec<f64> = weights
        .into_iter()
        .map(|w| if w.is_nan() { 0.0 } else { w.max(0.0) })
        .collect();
    if weights.is_empty() {
        return None;
    }

    let infinite: Vec<usize> = (0..weights.len()).filter(|&i| weights[i].is_infinite()).collect();
    if !infinite.is_empty() {
        return Some(infinite[uniform(r, infinite.len())]);
    }

    let mut cumulative = Vec::with_capacity(weights.len());
    let mut total = 0.0;
    for w in &weights {
        total += w;
        cumulative.push(total);
    }

    if total <= 0.0 {
        return Some(uniform(r, weights.len()));
    }

    let target = r * total;
    let index = cumulative.partition_point(|&c| c <= target);
    if index < weights.len() {
        Some(index)
    } else {
        // r * total rounded up to total: fall back to the last weighted item
        weights.iter().rposition(|&w| w > 0.0)
    }
}

fn uniform(r: f64, len: usize) -> usize {
    ((r * len as f64) as usize).min(len - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_draw() {
        assert!(check_draw(0.0).is_ok());
        assert!(check_draw(0.999).is_ok());
        assert_eq!(check_draw(1.0).unwrap_err(), SrteError::InvalidDraw(1.0));
        assert!(check_draw(-0.1).is_err());
        assert!(check_draw(f64::NAN).is_err());
    }

    #[test]
    fn test_proportional_buckets() {
        // Cumulative table: [1, 1, 4, 6]
        let weights = [1.0, 0.0, 3.0, 2.0];
        assert_eq!(weighted_index(weights, 0.0), Some(0));
        assert_eq!(weighted_index(weights, 0.16), Some(0));
        assert_eq!(weighted_index(weights, 0.17), Some(2));
        assert_eq!(weighted_index(weights, 0.5), Some(2));
        assert_eq!(weighted_index(weights, 0.67), Some(3));
        assert_eq!(weighted_index(weights, 0.99), Some(3));
    }

    #[test]
    fn test_zero_weight_never_picked() {
        let weights = [0.0, 5.0, 0.0];
        for i in 0..100 {
            assert_eq!(weighted_index(weights, i as f64 / 100.0), Some(1));
        }
    }

    #[test]
    fn test_all_zero_is_uniform() {
        let weights = [0.0; 4];
        assert_eq!(weighted_index(weights, 0.0), Some(0));
        assert_eq!(weighted_index(weights, 0.3), Some(1));
        assert_eq!(weighted_index(weights, 0.99), Some(3));
        assert_eq!(weighted_index(Vec::<f64>::new(), 0.5), None);
    }

    #[test]
    fn test_infinite_weights() {
        let weights = [1.0, f64::INFINITY, 2.0, f64::INFINITY];
        assert_eq!(weighted_index(weights, 0.2), Some(1));
        assert_eq!(weighted_index(weights, 0.7), Some(3));
    }
}
