use bollard::query_parameters::InspectContainerOptions;

use crate::{
    client::Client,
    docker::DockerInspectContainer,
    models::{IntoServiceError, Service},
};

#[derive(Debug, thiserror::Error)]
pub enum GetServiceError {
    #[error("Failed to inspect container: {0}")]
    ContainerInspect(#[from] bollard::errors::Error),
    #[error("The container is not a compose service: {0}")]
    IntoService(#[from] IntoServiceError),
}

impl<D: DockerInspectContainer> Client<D> {
    /// Inspects a container and reads it as a compose service.
    ///
    /// # Arguments
    ///
    /// * `container_id_or_name` - The ID or name of the container to inspect.
    pub async fn get_service(
        &self,
        container_id_or_name: &str,
    ) -> Result<Service, GetServiceError> {
        let container_inspect_response = self
            .docker
            .inspect_container(container_id_or_name, None::<InspectContainerOptions>)
            .await?;

        Ok(container_inspect_response.try_into()?)
    }
}
