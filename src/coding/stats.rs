use crate::error::{HuffcError, Result};

/// Information-theoretic quality of an assigned code.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeStats {
    /// Shannon entropy of the symbol distribution, in bits per symbol.
    pub entropy: f64,
    /// Expected codeword length, in bits per symbol.
    pub average_length: f64,
    /// Entropy divided by average length; 1.0 means the code is optimal.
    pub efficiency: f64,
}

/// Shannon entropy of a probability distribution, skipping zero entries.
pub fn entropy(probabilities: &[f64]) -> f64 {
    let mut entropy = 0.0;
    for &p in probabilities {
        if p > 0.0 {
            entropy -= p * p.log2();
        }
    }
    entropy
}

/// Expected codeword length under the given distribution.
///
/// `codeword_lengths` must be index-aligned with `probabilities`.
pub fn average_code_length(probabilities: &[f64], codeword_lengths: &[usize]) -> f64 {
    probabilities
        .iter()
        .zip(codeword_lengths)
        .map(|(&p, &len)| p * len as f64)
        .sum()
}

/// Compute entropy, average codeword length and efficiency in one pass.
pub fn compute_stats(probabilities: &[f64], codeword_lengths: &[usize]) -> Result<CodeStats> {
    if probabilities.len() != codeword_lengths.len() {
        return Err(HuffcError::InvalidInput(format!(
            "{} probabilities but {} codeword lengths",
            probabilities.len(),
            codeword_lengths.len()
        )));
    }

    let entropy = entropy(probabilities);
    let average_length = average_code_length(probabilities, codeword_lengths);

    // Cannot happen for a non-empty input (every codeword has length >= 1),
    // but the contract requires the guard.
    if average_length == 0.0 {
        return Err(HuffcError::DivisionByZero(
            "average codeword length is zero".to_string(),
        ));
    }

    Ok(CodeStats {
        entropy,
        average_length,
        efficiency: entropy / average_length,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_entropy_of_uniform_pair_is_one_bit() {
        assert_relative_eq!(entropy(&[0.5, 0.5]), 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_entropy_of_certain_symbol_is_zero() {
        let h = entropy(&[1.0]);
        assert!(h.abs() < 1e-12);
        assert!(!h.is_nan());
    }

    #[test]
    fn test_dyadic_distribution_is_fully_efficient() {
        let probs = [0.5, 0.25, 0.125, 0.125];
        let lens = [1, 2, 3, 3];
        let stats = compute_stats(&probs, &lens).unwrap();
        assert_relative_eq!(stats.entropy, 1.75, epsilon = 1e-9);
        assert_relative_eq!(stats.average_length, 1.75, epsilon = 1e-9);
        assert_relative_eq!(stats.efficiency, 1.0, epsilon = 1e-9);
    }

    #[test]
    fn test_single_symbol_efficiency_is_zero() {
        let stats = compute_stats(&[1.0], &[1]).unwrap();
        assert!(stats.entropy.abs() < 1e-12);
        assert_relative_eq!(stats.average_length, 1.0, epsilon = 1e-9);
        assert!(stats.efficiency.abs() < 1e-12);
        assert!(!stats.efficiency.is_nan());
    }

    #[test]
    fn test_zero_average_length_is_rejected() {
        assert!(matches!(
            compute_stats(&[1.0], &[0]),
            Err(HuffcError::DivisionByZero(_))
        ));
    }

    #[test]
    fn test_length_mismatch_is_rejected() {
        assert!(matches!(
            compute_stats(&[0.5, 0.5], &[1]),
            Err(HuffcError::InvalidInput(_))
        ));
    }
}
