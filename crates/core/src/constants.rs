//! Shared constants for objscope.
//!
//! Timeouts and pool limits live here so the binary, the router and the
//! storage layer agree on them.

use std::time::Duration;

/// Separator between a package identifier and the rest of an object type.
pub const PACKAGE_TYPE_SEPARATOR: &str = "::";

/// Deadline for the `/health` store ping.
pub const HEALTH_PING_TIMEOUT: Duration = Duration::from_secs(2);

/// Deadline for the per-package aggregation query.
pub const OBJECT_COUNT_TIMEOUT: Duration = Duration::from_secs(5);

/// Deadline for the connectivity check performed once at startup.
pub const STARTUP_PING_TIMEOUT: Duration = Duration::from_secs(5);

/// PostgreSQL connection pool: maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 10;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 5;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Port used when `PORT` is unset or invalid.
pub const DEFAULT_PORT: u16 = 8080;

/// Bind address used when `HOST` is unset.
pub const DEFAULT_HOST: &str = "0.0.0.0";
