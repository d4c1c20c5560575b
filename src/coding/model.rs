use crate::error::{HuffcError, Result};
use crate::freq::FrequencyEntry;

/// Derive the occurrence probability of every symbol from its count.
///
/// The returned vector is index-aligned with `entries`, with
/// `p[i] = count[i] / total_len`. The entries are expected to cover the whole
/// input, so the probabilities sum to 1.0.
pub fn occurrence_probabilities(entries: &[FrequencyEntry], total_len: usize) -> Result<Vec<f64>> {
    if total_len == 0 {
        return Err(HuffcError::DivisionByZero(
            "total input length is zero".to_string(),
        ));
    }

    Ok(entries
        .iter()
        .map(|e| e.count as f64 / total_len as f64)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn entries(counts: &[usize]) -> Vec<FrequencyEntry> {
        counts
            .iter()
            .enumerate()
            .map(|(i, &count)| FrequencyEntry { symbol: (b'a' + i as u8) as char, count })
            .collect()
    }

    #[test]
    fn test_probabilities_align_with_counts() {
        let probs = occurrence_probabilities(&entries(&[4, 2, 1, 1]), 8).unwrap();
        assert_eq!(probs, vec![0.5, 0.25, 0.125, 0.125]);
    }

    #[test]
    fn test_probabilities_sum_to_one() {
        let probs = occurrence_probabilities(&entries(&[7, 3, 2, 2, 1]), 15).unwrap();
        assert_relative_eq!(probs.iter().sum::<f64>(), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        assert!(matches!(
            occurrence_probabilities(&[], 0),
            Err(HuffcError::DivisionByZero(_))
        ));
    }
}
