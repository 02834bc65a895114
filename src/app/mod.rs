//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - Model state (pure, in the library's model module)
//! - Measurement (the probe-backed `BufferMeasurer`)
//! - Handlers (in src/handlers/)
//! - UI rendering (in src/ui/)

pub(crate) mod navigation;
pub(crate) mod readiness;
