//! In-process fixed-window rate limiting

mod in_memory;


pub use in_memory::InMemoryRateLimiter;
