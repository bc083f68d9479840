//! Core library for MediMate, a small smart-health companion.
//!
//! The [`features`] module holds the three user-facing workflows (symptom
//! triage, BMI evaluation, and health-report generation) plus the axum
//! router exposing them. [`config`], [`error`], and [`telemetry`] carry the
//! service plumbing shared by every entry point.

pub mod config;
pub mod error;
pub mod features;
pub mod telemetry;
