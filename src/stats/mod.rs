//! Derived statistics over a habit snapshot. Everything here is a pure function of the
//! collection and a date window, so the views can recompute freely and tests can pin the
//! reference date.

pub mod activity;
pub mod weekly;
