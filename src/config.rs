//! Tuning knobs for the probabilistic primality searches.

/// Witness counts and thresholds for primality testing.
///
/// Candidates below `exact_search_limit` are decided by trial division, which
/// is fast and never wrong there. Above it, a candidate must survive the
/// small-prime filter, `fermat_rounds` Fermat witnesses and
/// `miller_rabin_rounds` Miller-Rabin witnesses.
///
/// # Example
///
/// ```
/// use algebrix::PrimalityConfig;
///
/// let config = PrimalityConfig::default().with_miller_rabin_rounds(20);
/// assert_eq!(config.fermat_rounds, 3);
/// assert!(config.miller_rabin_error_bound() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PrimalityConfig {
    /// Number of Fermat witnesses drawn per candidate.
    pub fermat_rounds: usize,
    /// Number of Miller-Rabin witnesses drawn per candidate.
    pub miller_rabin_rounds: usize,
    /// Values below this bound are tested exactly.
    pub exact_search_limit: u64,
}

impl Default for PrimalityConfig {
    fn default() -> Self {
        Self {
            fermat_rounds: 3,
            miller_rabin_rounds: 10,
            exact_search_limit: 1 << 31,
        }
    }
}

impl PrimalityConfig {
    /// Set the number of Fermat witnesses.
    #[must_use]
    pub fn with_fermat_rounds(mut self, rounds: usize) -> Self {
        self.fermat_rounds = rounds;
        self
    }

    /// Set the number of Miller-Rabin witnesses.
    #[must_use]
    pub fn with_miller_rabin_rounds(mut self, rounds: usize) -> Self {
        self.miller_rabin_rounds = rounds;
        self
    }

    /// Set the bound below which primality is decided exactly.
    #[must_use]
    pub fn with_exact_search_limit(mut self, limit: u64) -> Self {
        self.exact_search_limit = limit;
        self
    }

    /// Upper bound `4^-k` on the chance that a composite passes
    /// `miller_rabin_rounds` independent witnesses.
    pub fn miller_rabin_error_bound(&self) -> f64 {
        0.25f64.powi(self.miller_rabin_rounds.min(i32::MAX as usize) as i32)
    }
}
