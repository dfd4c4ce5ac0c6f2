//! Connection options for the MySQL driver

use mysql_async::{OptsBuilder, PoolConstraints, PoolOpts};

/// Default MySQL TCP port
pub const DEFAULT_PORT: u16 = 3306;

/// Options needed to reach a MySQL server.
///
/// # Example
///
/// ```
/// use sqlts::ConnectOptions;
///
/// let options = ConnectOptions::new("localhost", "root")
///     .password("secret")
///     .port(3307);
/// assert_eq!(options.port, 3307);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectOptions {
    pub host: String,
    pub user: String,
    pub password: Option<String>,
    pub port: u16,
    /// Unix socket path; takes precedence over TCP when set
    pub socket_path: Option<String>,
}

impl ConnectOptions {
    /// Create options for `user` on `host` with the default port.
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: None,
            port: DEFAULT_PORT,
            socket_path: None,
        }
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set the TCP port.
    pub fn port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Connect through a Unix socket instead of TCP.
    pub fn socket_path(mut self, path: impl Into<String>) -> Self {
        self.socket_path = Some(path.into());
        self
    }

    /// Build driver options that select `database` on connect.
    ///
    /// The pool is capped at one connection: introspection runs one query at
    /// a time.
    pub fn to_opts(&self, database: &str) -> OptsBuilder {
        let pool_opts = match PoolConstraints::new(0, 1) {
            Some(constraints) => PoolOpts::default().with_constraints(constraints),
            None => PoolOpts::default(),
        };

        OptsBuilder::default()
            .ip_or_hostname(self.host.clone())
            .tcp_port(self.port)
            .user(Some(self.user.clone()))
            .pass(self.password.clone())
            .socket(self.socket_path.clone())
            .db_name(Some(database.to_string()))
            .pool_opts(pool_opts)
    }
}
