//! Command-line front-end for the intelligence store.

pub mod intel_cmd;
