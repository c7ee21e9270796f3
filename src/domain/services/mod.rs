//! Domain Services
//!
//! Naming, descriptor building and the named remote operations.
//! Routing and descriptor building have no I/O; remote operations only talk
//! through the session and transfer ports.

mod descriptor;
mod remote_ops;
mod routing;

pub use descriptor::{build_descriptor, render, DescriptorError};
pub use remote_ops::{
    activate_command, shell_quote, RemoteOperations, COMPOSE_FILE, COMPOSE_PROJECT,
    ENCRYPTED_ENV_FILE,
};
pub use routing::{default_hostname, Route, RoutingSettings};
