use clap::Parser;

/// The default database: a local SQLite file, created if it doesn't exist yet.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://app.db?mode=rwc";

#[derive(clap::Args, Debug, Clone)]
#[command(next_help_heading = "Database")]
#[group(id = "database")]
pub struct Database {
    /// The database connection string
    #[arg(id = "db-url", long, env = "DATABASE_URL", default_value = DEFAULT_DATABASE_URL)]
    pub url: String,
    #[arg(id = "db-max-conn", long, env = "DB_MAX_CONN", default_value_t = 75)]
    pub max_conn: u32,
    #[arg(id = "db-min-conn", long, env = "DB_MIN_CONN", default_value_t = 25)]
    pub min_conn: u32,
    /// Timeout when connecting, in seconds
    #[arg(
        id = "db-connect-timeout",
        long,
        env = "DB_CONNECT_TIMEOUT",
        default_value_t = 8
    )]
    pub connect_timeout: u64,
    /// Timeout when acquiring a connection from the pool, in seconds
    #[arg(
        id = "db-acquire-timeout",
        long,
        env = "DB_ACQUIRE_TIMEOUT",
        default_value_t = 8
    )]
    pub acquire_timeout: u64,
    /// Maximum lifetime of a pooled connection, in seconds
    #[arg(
        id = "db-max-lifetime",
        long,
        env = "DB_MAX_LIFETIME",
        default_value_t = 1800
    )]
    pub max_lifetime: u64,
    /// Time a pooled connection may stay idle, in seconds
    #[arg(
        id = "db-idle-timeout",
        long,
        env = "DB_IDLE_TIMEOUT",
        default_value_t = 600
    )]
    pub idle_timeout: u64,
}

impl Default for Database {
    fn default() -> Self {
        Self {
            url: DEFAULT_DATABASE_URL.into(),
            max_conn: 75,
            min_conn: 25,
            connect_timeout: 8,
            acquire_timeout: 8,
            max_lifetime: 1800,
            idle_timeout: 600,
        }
    }
}

impl Database {
    /// Load the configuration from the environment only, ignoring the command line.
    pub fn from_env() -> Result<Database, clap::Error> {
        #[derive(Parser)]
        struct Config {
            #[command(flatten)]
            database: Database,
        }

        Ok(Config::try_parse_from(["superheroes"])?.database)
    }
}
