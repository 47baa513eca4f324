use std::env;

pub const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, Clone)]
pub struct Config {
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub user: String,
    pub password: String,
    pub name: String,
}

impl Config {
    /// Read connection settings from the `POSTGRES_*` environment variables.
    ///
    /// Only the port is parsed; every other value is handed to the connection
    /// attempt as-is, so a missing host or bad credentials surface as a
    /// startup connection failure rather than a config error.
    pub fn from_env() -> Self {
        Self {
            database: DatabaseConfig {
                host: env::var("POSTGRES_HOST").unwrap_or_default(),
                port: parse_port(env::var("POSTGRES_PORT").ok().as_deref()),
                user: env::var("POSTGRES_USER").unwrap_or_default(),
                password: env::var("POSTGRES_PASSWORD").unwrap_or_default(),
                name: env::var("POSTGRES_DB").unwrap_or_default(),
            },
        }
    }
}

/// Unset, empty, or non-numeric values fall back to the Postgres default.
fn parse_port(raw: Option<&str>) -> u16 {
    raw.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_DB_PORT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_port_valid() {
        assert_eq!(parse_port(Some("5433")), 5433);
        assert_eq!(parse_port(Some("15432")), 15432);
    }

    #[test]
    fn test_parse_port_unset_defaults() {
        assert_eq!(parse_port(None), DEFAULT_DB_PORT);
    }

    #[test]
    fn test_parse_port_invalid_defaults() {
        assert_eq!(parse_port(Some("")), DEFAULT_DB_PORT);
        assert_eq!(parse_port(Some("not-a-port")), DEFAULT_DB_PORT);
        assert_eq!(parse_port(Some("5432.5")), DEFAULT_DB_PORT);
        assert_eq!(parse_port(Some("-1")), DEFAULT_DB_PORT);
        // Out of u16 range
        assert_eq!(parse_port(Some("70000")), DEFAULT_DB_PORT);
    }

    // The only test that touches the process environment; keeping it to one
    // avoids races between parallel tests over the shared env.
    #[test]
    fn test_from_env_reads_all_fields() {
        env::set_var("POSTGRES_HOST", "db.internal");
        env::set_var("POSTGRES_PORT", "6432");
        env::set_var("POSTGRES_USER", "app");
        env::set_var("POSTGRES_PASSWORD", "secret");
        env::set_var("POSTGRES_DB", "appdb");

        let cfg = Config::from_env();
        assert_eq!(cfg.database.host, "db.internal");
        assert_eq!(cfg.database.port, 6432);
        assert_eq!(cfg.database.user, "app");
        assert_eq!(cfg.database.password, "secret");
        assert_eq!(cfg.database.name, "appdb");

        env::remove_var("POSTGRES_HOST");
        env::remove_var("POSTGRES_PORT");
        env::remove_var("POSTGRES_USER");
        env::remove_var("POSTGRES_PASSWORD");
        env::remove_var("POSTGRES_DB");
    }
}
