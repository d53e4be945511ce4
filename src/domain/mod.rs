//! Domain Layer
//!
//! The pipeline's logic without direct I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Combination specs, stage outputs, the token ledger
//! - `value_objects/` - Stages, path categories, safe relative paths
//! - `services/` - Comment stripping, path classification, bundling,
//!   change detection
//! - `ports/` - Interface definitions for infrastructure
//!
//! ## Design Principles
//!
//! 1. **No I/O** - This layer never touches the file system or network directly
//! 2. **Pure Functions** - Services are stateless and testable
//! 3. **Ports & Adapters** - All I/O goes through trait-defined ports

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
