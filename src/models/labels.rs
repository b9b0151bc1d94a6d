use bollard::secret::ContainerInspectResponse;

pub const COMPOSE_PROJECT_LABEL_KEY: &str = "com.docker.compose.project";
pub const COMPOSE_SERVICE_LABEL_KEY: &str = "com.docker.compose.service";

/// The compose labels that tie a container to an application.
///
/// `project` is the application name, `service` is the name the service was
/// given in the compose file. Compose sets both on every container it
/// creates; a container missing either does not belong to any app.
#[derive(Debug, PartialEq, Eq)]
pub struct ComposeLabels {
    pub project: String,
    pub service: String,
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GetComposeLabelsError {
    #[error("Missing container labels")]
    MissingContainerLabels,
    #[error("Not a compose service")]
    NotAComposeService,
}

impl TryFrom<&ContainerInspectResponse> for ComposeLabels {
    type Error = GetComposeLabelsError;

    fn try_from(value: &ContainerInspectResponse) -> Result<Self, Self::Error> {
        let container_labels = value
            .config
            .as_ref()
            .ok_or(GetComposeLabelsError::MissingContainerLabels)?
            .labels
            .as_ref()
            .ok_or(GetComposeLabelsError::MissingContainerLabels)?;

        let project = container_labels
            .get(COMPOSE_PROJECT_LABEL_KEY)
            .ok_or(GetComposeLabelsError::NotAComposeService)?;
        let service = container_labels
            .get(COMPOSE_SERVICE_LABEL_KEY)
            .ok_or(GetComposeLabelsError::NotAComposeService)?;

        Ok(ComposeLabels {
            project: project.clone(),
            service: service.clone(),
        })
    }
}
