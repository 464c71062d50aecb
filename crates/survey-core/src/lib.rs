//! # survey-core
//!
//! Core types and error types for the survey store.
//!
//! This crate provides the foundational types shared across all survey crates:
//! - Entity structs for users, forms, assignments and the normalized form structure
//! - Workflow state enums for forms and assignments
//! - Pagination requests with clamped limits
//! - Cross-cutting error types
//! - List envelope types returned by the CLI

pub mod entities;
pub mod enums;
pub mod errors;
pub mod page;
pub mod responses;
