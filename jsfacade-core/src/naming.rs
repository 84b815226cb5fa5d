//! Unique function names for generated scripts.

use std::sync::{
    Arc, Mutex, OnceLock,
    atomic::{AtomicU64, Ordering},
};

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Prefix of every generated function name.
pub const FUNCTION_PREFIX: &str = "ajs";

/// Range the counter base is drawn from.
const BASE_RANGE: std::ops::RangeInclusive<u64> = 10_000..=99_999;

/// Upper bound of the random name suffix.
const SUFFIX_MAX: u32 = i32::MAX as u32;

#[derive(Debug)]
enum Suffix {
    Random(Mutex<StdRng>),
    None,
}

/// Counter-backed source of unique function names.
///
/// Names are `ajs<counter><suffix>`. The counter advances on every builder
/// construction and every generated name; the suffix is random unless the
/// generator is [`sequential`](Self::sequential). Uniqueness holds within one
/// process only.
///
/// # Example
///
/// ```
/// use jsfacade_core::NameGenerator;
///
/// let names = NameGenerator::sequential(100);
/// assert_eq!(names.function_name(), "ajs101");
/// names.bump();
/// assert_eq!(names.function_name(), "ajs103");
/// ```
#[derive(Debug)]
pub struct NameGenerator {
    counter: AtomicU64,
    suffix: Suffix,
}

impl NameGenerator {
    /// A generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(StdRng::from_os_rng())
    }

    /// A deterministic generator: the same seed yields the same names.
    pub fn seeded(seed: u64) -> Self {
        Self::from_rng(StdRng::seed_from_u64(seed))
    }

    /// A generator without random suffix, counting up from `base`.
    pub fn sequential(base: u64) -> Self {
        Self {
            counter: AtomicU64::new(base),
            suffix: Suffix::None,
        }
    }

    /// The process-wide shared generator.
    pub fn global() -> Arc<NameGenerator> {
        static GLOBAL: OnceLock<Arc<NameGenerator>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(NameGenerator::new())).clone()
    }

    fn from_rng(mut rng: StdRng) -> Self {
        let base = rng.random_range(BASE_RANGE);
        Self {
            counter: AtomicU64::new(base),
            suffix: Suffix::Random(Mutex::new(rng)),
        }
    }

    /// Advance the counter and return the new value.
    pub fn bump(&self) -> u64 {
        self.counter.fetch_add(1, Ordering::Relaxed) + 1
    }

    /// Current counter value.
    pub fn current(&self) -> u64 {
        self.counter.load(Ordering::Relaxed)
    }

    /// Generate the next unique function name.
    pub fn function_name(&self) -> String {
        let id = self.bump();
        let name = match &self.suffix {
            Suffix::Random(rng) => {
                let suffix = rng
                    .lock()
                    .unwrap_or_else(|poisoned| poisoned.into_inner())
                    .random_range(0..=SUFFIX_MAX);
                format!("{}{}{}", FUNCTION_PREFIX, id, suffix)
            }
            Suffix::None => format!("{}{}", FUNCTION_PREFIX, id),
        };
        tracing::trace!(name = %name, "generated function name");
        name
    }
}

impl Default for NameGenerator {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_names() {
        let names = NameGenerator::sequential(10);
        assert_eq!(names.function_name(), "ajs11");
        assert_eq!(names.function_name(), "ajs12");
        assert_eq!(names.current(), 12);
    }

    #[test]
    fn test_bump_advances_counter() {
        let names = NameGenerator::sequential(0);
        assert_eq!(names.bump(), 1);
        assert_eq!(names.bump(), 2);
        assert_eq!(names.function_name(), "ajs3");
    }

    #[test]
    fn test_seeded_is_deterministic() {
        let a = NameGenerator::seeded(42);
        let b = NameGenerator::seeded(42);
        assert_eq!(a.current(), b.current());
        assert_eq!(a.function_name(), b.function_name());
        assert_eq!(a.function_name(), b.function_name());
    }

    #[test]
    fn test_random_base_in_range() {
        let names = NameGenerator::new();
        assert!(BASE_RANGE.contains(&names.current()));
    }

    #[test]
    fn test_names_are_distinct() {
        let names = NameGenerator::new();
        let first = names.function_name();
        let second = names.function_name();
        assert!(first.starts_with(FUNCTION_PREFIX));
        assert_ne!(first, second);
    }

    #[test]
    fn test_global_is_shared() {
        let a = NameGenerator::global();
        let b = NameGenerator::global();
        assert!(Arc::ptr_eq(&a, &b));
    }
}
