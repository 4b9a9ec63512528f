//! Prenatal Vitals Test Suite
//!
//! Scenario and property tests for the alert evaluator and the contraction
//! pattern analyzer:
//! - Clinical scenarios across a pregnancy timeline
//! - Contraction timer sessions from first tightening to active labor
//! - Property-based tests for ordering, bounds and determinism

pub mod fixtures;

pub mod vitals_scenarios;
