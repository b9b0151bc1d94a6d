use crate::models::{Engine, EnvironmentVariables};

/// The credential tuple needed to address a database service: account,
/// password, and the database to open.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    pub user: String,
    pub password: String,
    pub database: String,
}

impl Credentials {
    /// Derives the credential tuple from a service container's environment,
    /// following the defaulting rules of the official images:
    ///
    /// - mysql/mariadb: a dedicated `*_USER`/`*_PASSWORD` pair wins;
    ///   otherwise fall back to `root` with the `*_ROOT_PASSWORD`. The
    ///   database comes from `*_DATABASE`.
    /// - postgres: the user defaults to `postgres`, the database defaults to
    ///   the user, the password is required.
    ///
    /// Returns `None` when no password or no database name can be derived.
    pub fn derive(engine: Engine, env: &EnvironmentVariables) -> Option<Credentials> {
        match engine {
            Engine::MariaDb | Engine::MySql => {
                // The mariadb image accepts both spellings, so coalesce
                let user = env.mariadb_user.clone().or_else(|| env.mysql_user.clone());
                let password = env
                    .mariadb_password
                    .clone()
                    .or_else(|| env.mysql_password.clone());
                let root_password = env
                    .mariadb_root_password
                    .clone()
                    .or_else(|| env.mysql_root_password.clone());

                let (user, password) = user
                    .zip(password)
                    .or_else(|| root_password.map(|p| ("root".to_string(), p)))?;
                let database = env
                    .mariadb_database
                    .clone()
                    .or_else(|| env.mysql_database.clone())?;

                Some(Credentials {
                    user,
                    password,
                    database,
                })
            }
            Engine::Postgres => {
                let user = env
                    .postgres_user
                    .clone()
                    .unwrap_or_else(|| "postgres".to_string());
                let password = env.postgres_password.clone()?;
                let database = env.postgres_db.clone().unwrap_or_else(|| user.clone());

                Some(Credentials {
                    user,
                    password,
                    database,
                })
            }
        }
    }
}
