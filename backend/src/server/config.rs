//! HTTP server configuration object and helpers.

use courses_backend::config::AuthSettings;
use courses_backend::outbound::persistence::DbPool;

/// Builder-style configuration for creating the HTTP server.
pub struct ServerConfig {
    pub(crate) auth: AuthSettings,
    pub(crate) bind_addr: (String, u16),
    pub(crate) graphiql: bool,
    pub(crate) db_pool: Option<DbPool>,
}

impl ServerConfig {
    #[must_use]
    pub fn new(auth: AuthSettings, bind_addr: (String, u16), graphiql: bool) -> Self {
        Self {
            auth,
            bind_addr,
            graphiql,
            db_pool: None,
        }
    }

    /// Attach a database connection pool for persistence adapters.
    ///
    /// Without one the server keeps users, courses and teachers in memory.
    #[must_use]
    pub fn with_db_pool(mut self, pool: DbPool) -> Self {
        self.db_pool = Some(pool);
        self
    }
}
