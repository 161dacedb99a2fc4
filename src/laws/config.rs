//! Runtime configuration of law checks.

use proptest::test_runner::{Config, RngAlgorithm, TestRng, TestRunner};

/// How many cases to run, how hard to shrink, and which seed to use.
///
/// # Examples
///
/// ```rust
/// use tabula::laws::LawConfig;
///
/// let config = LawConfig::default().with_cases(32).with_seed([7; 32]);
/// assert_eq!(config.cases(), 32);
/// assert_eq!(config.seed(), Some([7; 32]));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LawConfig {
    cases: u32,
    max_shrink_iters: u32,
    seed: Option<[u8; 32]>,
}

impl LawConfig {
    /// Number of cases run per law by default.
    pub const DEFAULT_CASES: u32 = 100;

    /// Shrinking budget per falsified law by default.
    pub const DEFAULT_MAX_SHRINK_ITERS: u32 = 1024;

    /// Creates the default configuration: random seed, 100 cases per law.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cases: Self::DEFAULT_CASES,
            max_shrink_iters: Self::DEFAULT_MAX_SHRINK_ITERS,
            seed: None,
        }
    }

    /// Sets the number of successful cases required per law.
    #[must_use]
    pub const fn with_cases(mut self, cases: u32) -> Self {
        self.cases = cases;
        self
    }

    /// Sets the shrinking budget.
    #[must_use]
    pub const fn with_max_shrink_iters(mut self, max_shrink_iters: u32) -> Self {
        self.max_shrink_iters = max_shrink_iters;
        self
    }

    /// Makes every check deterministic, derived from `seed`.
    #[must_use]
    pub const fn with_seed(mut self, seed: [u8; 32]) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of cases per law.
    #[must_use]
    pub const fn cases(&self) -> u32 {
        self.cases
    }

    /// Shrinking budget.
    #[must_use]
    pub const fn max_shrink_iters(&self) -> u32 {
        self.max_shrink_iters
    }

    /// Base seed, if fixed.
    #[must_use]
    pub const fn seed(&self) -> Option<[u8; 32]> {
        self.seed
    }

    /// The `proptest` configuration, with failure persistence disabled.
    #[must_use]
    pub fn runner_config(&self) -> Config {
        Config {
            cases: self.cases,
            max_shrink_iters: self.max_shrink_iters,
            failure_persistence: None,
            ..Config::default()
        }
    }

    /// A fresh runner for the law at `position` in a flattened rule set.
    ///
    /// With a base seed, each position gets its own seed so that any law
    /// can be re-run alone and still see the same cases.
    pub(crate) fn runner_for(&self, position: usize) -> TestRunner {
        match self.seed {
            Some(seed) => TestRunner::new_with_rng(
                self.runner_config(),
                TestRng::from_seed(RngAlgorithm::ChaCha, &derive_seed(seed, position)),
            ),
            None => TestRunner::new(self.runner_config()),
        }
    }
}

impl Default for LawConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Mixes `position` into the last eight bytes of `seed` (splitmix64 step).
fn derive_seed(seed: [u8; 32], position: usize) -> [u8; 32] {
    let mut derived = seed;
    let mut tail = [0_u8; 8];
    tail.copy_from_slice(&seed[24..]);
    let mut mixed = u64::from_le_bytes(tail)
        .wrapping_add((position as u64).wrapping_mul(0x9E37_79B9_7F4A_7C15));
    mixed = (mixed ^ (mixed >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    mixed = (mixed ^ (mixed >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    mixed ^= mixed >> 31;
    derived[24..].copy_from_slice(&mixed.to_le_bytes());
    derived
}
