//! Secrets audit trail pipeline.
//!
//! A notification arrives from SNS, gets decoded by a [`NotificationParser`]
//! into an [`AuditRecord`], and is written to DynamoDB by an [`AuditStore`].
//! Nothing that goes wrong along the way fails the invocation; see [`Outcome`].

pub mod config;
pub mod db;
pub mod handler;
pub mod models;
pub mod parser;
pub mod telemetry;

pub use config::{Config, ConfigError};
pub use db::{AuditStore, DynamoDbStore, StoreError};
pub use handler::{Outcome, Receiver, handle_invocation};
pub use models::{AuditRecord, InvocationResponse, SnsNotification};
pub use parser::{NotificationParser, SkipReason, jira::JiraParser, secretsmanager::SecretsManagerParser};
