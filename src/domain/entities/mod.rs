//! # Domain Entities Module

pub mod integrations;
