use std::collections::HashMap;

use bollard::secret::ContainerInspectResponse;

pub const ENV_VAR_MYSQL_USER: &str = "MYSQL_USER";
pub const ENV_VAR_MYSQL_PASSWORD: &str = "MYSQL_PASSWORD";
pub const ENV_VAR_MYSQL_DATABASE: &str = "MYSQL_DATABASE";
pub const ENV_VAR_MYSQL_ROOT_PASSWORD: &str = "MYSQL_ROOT_PASSWORD";
pub const ENV_VAR_MARIADB_USER: &str = "MARIADB_USER";
pub const ENV_VAR_MARIADB_PASSWORD: &str = "MARIADB_PASSWORD";
pub const ENV_VAR_MARIADB_DATABASE: &str = "MARIADB_DATABASE";
pub const ENV_VAR_MARIADB_ROOT_PASSWORD: &str = "MARIADB_ROOT_PASSWORD";
pub const ENV_VAR_POSTGRES_USER: &str = "POSTGRES_USER";
pub const ENV_VAR_POSTGRES_PASSWORD: &str = "POSTGRES_PASSWORD";
pub const ENV_VAR_POSTGRES_DB: &str = "POSTGRES_DB";

/// The credential environment variables documented by the official `mysql`,
/// `mariadb`, and `postgres` images.
///
/// A container only carries the variables of its own engine family; the rest
/// stay `None`.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EnvironmentVariables {
    pub mysql_user: Option<String>,
    pub mysql_password: Option<String>,
    pub mysql_database: Option<String>,
    pub mysql_root_password: Option<String>,

    pub mariadb_user: Option<String>,
    pub mariadb_password: Option<String>,
    pub mariadb_database: Option<String>,
    pub mariadb_root_password: Option<String>,

    pub postgres_user: Option<String>,
    pub postgres_password: Option<String>,
    pub postgres_db: Option<String>,
}

impl From<&ContainerInspectResponse> for EnvironmentVariables {
    fn from(value: &ContainerInspectResponse) -> Self {
        let mut environment_variables = EnvironmentVariables::default();

        // The inspect response carries env as a vector of KEY=VALUE strings
        let Some(Some(container_environment_variables_vec)) = value.config.as_ref().map(|c| &c.env)
        else {
            return environment_variables;
        };

        let env = container_environment_variables_vec
            .iter()
            .filter_map(|e| e.split_once("="))
            .collect::<HashMap<&str, &str>>();

        environment_variables.mysql_user = get_value(&env, ENV_VAR_MYSQL_USER);
        environment_variables.mysql_password = get_value(&env, ENV_VAR_MYSQL_PASSWORD);
        environment_variables.mysql_database = get_value(&env, ENV_VAR_MYSQL_DATABASE);
        environment_variables.mysql_root_password = get_value(&env, ENV_VAR_MYSQL_ROOT_PASSWORD);
        environment_variables.mariadb_user = get_value(&env, ENV_VAR_MARIADB_USER);
        environment_variables.mariadb_password = get_value(&env, ENV_VAR_MARIADB_PASSWORD);
        environment_variables.mariadb_database = get_value(&env, ENV_VAR_MARIADB_DATABASE);
        environment_variables.mariadb_root_password =
            get_value(&env, ENV_VAR_MARIADB_ROOT_PASSWORD);
        environment_variables.postgres_user = get_value(&env, ENV_VAR_POSTGRES_USER);
        environment_variables.postgres_password = get_value(&env, ENV_VAR_POSTGRES_PASSWORD);
        environment_variables.postgres_db = get_value(&env, ENV_VAR_POSTGRES_DB);

        environment_variables
    }
}

fn get_value(hash_map: &HashMap<&str, &str>, key: &str) -> Option<String> {
    hash_map.get(key).map(|v| v.to_string())
}
