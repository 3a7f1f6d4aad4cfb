//! Domain layer - Core business logic
//!
//! This module contains the core domain entities, repository traits,
//! and domain services. It has no dependency on concrete devices.

pub mod entities;
pub mod repositories;
pub mod services;
