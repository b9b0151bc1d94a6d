use bollard::secret::ContainerInspectResponse;

use crate::models::{
    ComposeLabels, Credentials, Engine, EnvironmentVariables, GetComposeLabelsError,
    GetServicePortBindingError, GetStateError, ServicePortBinding, State,
};

/// One service container of a compose application.
///
/// Read-only input to connection resolution: the engine stays the free-form
/// image reference here, and `port_binding`/`credentials` are optional
/// because their absence is a resolution failure, not a parsing failure.
#[derive(Debug)]
pub struct Service {
    // Identifiers
    pub container_id: String,
    pub app: String,
    pub name: String,

    // Docker specific
    pub state: State,
    pub image: String,
    pub port_binding: Option<ServicePortBinding>,

    // Database credentials, when derivable from the container environment
    pub credentials: Option<Credentials>,
}

#[derive(Debug, thiserror::Error)]
pub enum IntoServiceError {
    #[error("Container ID is missing")]
    MissingContainerId,
    #[error("Container image is missing")]
    MissingImage,
    #[error(transparent)]
    ComposeLabels(#[from] GetComposeLabelsError),
    #[error(transparent)]
    PortBinding(#[from] GetServicePortBindingError),
    #[error(transparent)]
    State(#[from] GetStateError),
}

impl TryFrom<ContainerInspectResponse> for Service {
    type Error = IntoServiceError;

    fn try_from(value: ContainerInspectResponse) -> Result<Self, Self::Error> {
        let container_id = value
            .id
            .as_ref()
            .ok_or(IntoServiceError::MissingContainerId)?
            .clone();

        // The configured image reference (e.g. mariadb:10.4), not the image ID
        let image = value
            .config
            .as_ref()
            .and_then(|c| c.image.clone())
            .ok_or(IntoServiceError::MissingImage)?;

        let ComposeLabels { project, service } = ComposeLabels::try_from(&value)?;
        let port_binding = ServicePortBinding::try_from(&value)?;
        let state = State::try_from(&value)?;

        // Credentials only make sense for a recognized engine; an unknown
        // image simply yields none
        let environment_variables = EnvironmentVariables::from(&value);
        let credentials = Engine::detect(&image)
            .and_then(|engine| Credentials::derive(engine, &environment_variables));

        Ok(Service {
            container_id,
            app: project,
            name: service,
            state,
            image,
            port_binding,
            credentials,
        })
    }
}
