//! Operations module for publishing firmware
//!
//! This module provides the high-level workflow the commands drive:
//! - PublishOperation: fetch baseline, apply retention, rebuild manifest
//!
//! The operation coordinates with:
//! - Baseline: fetching the previously published tree (from baseline module)
//! - Retention: deciding and copying what survives (from retention module)
//! - Manifest: rebuilding the index (from manifest module)
//! - UI: Progress reporting (from ui module)

pub mod publish;
