//! Prebuilt effect timelines and per-frame helpers.
//!
//! Each submodule packages the tuning constants and timeline builders for
//! one visual effect. The constants are data, not policy: callers can build
//! their own timelines with different numbers, these are the stock ones.

pub mod cosmic;
pub mod parallax;
pub mod tear;
