//! Request guard subsystem.
//!
//! # Data Flow
//! ```text
//! Incoming guarded request
//!     → rate_limit.rs (per-route sliding-window budget)
//!     → input_filter.rs (denylist scan over query values)
//!     → allowed: forwarded upstream
//!     → rejected: 429 or 400, no upstream call
//! ```
//!
//! # Design Decisions
//! - Guard order is fixed: rate limit first, then input filter
//! - Rejections are terminal and side-effect free
//! - Guard state lives in process memory only; a restart clears it

pub mod input_filter;
pub mod rate_limit;

pub use input_filter::validate;
pub use rate_limit::RateLimiter;
