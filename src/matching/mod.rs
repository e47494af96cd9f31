pub mod cache_matcher;
pub mod eligibility;
pub mod key;
pub mod outcome;

pub use cache_matcher::{CacheMatcher, CacheNotConfigured};
pub use outcome::{CachedOutcome, CorruptEntry};
