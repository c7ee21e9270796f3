//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod deploy_events;
pub mod file_transfer;
pub mod image_publisher;
pub mod prompter;
pub mod record_repository;
pub mod remote_session;
pub mod secret_encryptor;
pub mod version_control;

pub use deploy_events::{DeployEvent, DeployEventSink, NoopEventSink, Stage};
pub use file_transfer::{FileTransfer, TransferError};
pub use image_publisher::{ImagePublisher, PublishError, PublishRequest};
pub use prompter::{PromptError, Prompter};
pub use record_repository::{RecordError, RecordRepository};
pub use remote_session::{CommandOutput, RemoteConnector, RemoteError, RemoteSession};
pub use secret_encryptor::{SecretEncryptor, SecretError};
pub use version_control::{VcsError, VersionControl};
