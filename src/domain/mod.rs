//! Domain Layer
//!
//! The deployment model without process or network I/O.
//!
//! ## Structure
//!
//! - `entities/` - Compose document and deployment record
//! - `value_objects/` - Validated names, ports, revisions, hashes, targets
//! - `services/` - Routing resolver, descriptor builder, remote operations
//! - `ports/` - Interfaces implemented by the infrastructure layer
//!
//! ## Design Principles
//!
//! 1. **No direct I/O** - remote and local side effects go through ports
//! 2. **Pure Functions** - routing and descriptor building are deterministic
//! 3. **Ports & Adapters** - SSH, docker, sops and git are swappable

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
