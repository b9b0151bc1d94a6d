use bollard::secret::{
    ContainerConfig, ContainerInspectResponse, ContainerState, ContainerStateStatusEnum,
    ContainerSummary, NetworkSettings, PortBinding,
};
use maplit::hashmap;

pub fn create_container_summary(id: &str, name: &str) -> ContainerSummary {
    ContainerSummary {
        id: Some(id.to_string()),
        names: Some(vec![format!("/{}", name)]),
        ..Default::default()
    }
}

pub fn mariadb_env(root_password: &str) -> Vec<String> {
    vec![
        format!("MARIADB_ROOT_PASSWORD={root_password}"),
        "MARIADB_DATABASE=mydb".to_string(),
        "PATH=/usr/bin:/bin".to_string(),
    ]
}

pub fn mysql_env(user: &str, password: &str, database: &str) -> Vec<String> {
    vec![
        format!("MYSQL_USER={user}"),
        format!("MYSQL_PASSWORD={password}"),
        format!("MYSQL_DATABASE={database}"),
        "MYSQL_ROOT_PASSWORD=rootsecret".to_string(),
    ]
}

pub fn postgres_env(password: &str) -> Vec<String> {
    vec![format!("POSTGRES_PASSWORD={password}")]
}

pub fn create_inspect_response(
    id: &str,
    app: &str,
    service: &str,
    image: &str,
    env: Vec<String>,
    host_port: Option<u16>,
) -> ContainerInspectResponse {
    let ports = host_port.map(|port| {
        hashmap! {
            format!("{port}/tcp") => Some(vec![
                PortBinding {
                    host_ip: Some("0.0.0.0".to_string()),
                    host_port: Some(port.to_string()),
                }
            ])
        }
    });

    ContainerInspectResponse {
        id: Some(id.to_string()),
        name: Some(format!("/{app}-{service}-1")),
        config: Some(ContainerConfig {
            image: Some(image.to_string()),
            labels: Some(hashmap! {
                "com.docker.compose.project".to_string() => app.to_string(),
                "com.docker.compose.service".to_string() => service.to_string(),
            }),
            env: Some(env),
            ..Default::default()
        }),
        state: Some(ContainerState {
            status: Some(ContainerStateStatusEnum::RUNNING),
            ..Default::default()
        }),
        network_settings: Some(NetworkSettings {
            ports,
            ..Default::default()
        }),
        ..Default::default()
    }
}
