use bollard::query_parameters::ListContainersOptionsBuilder;
use maplit::hashmap;

use crate::{
    client::Client,
    docker::{DockerInspectContainer, DockerListContainers},
    models::{COMPOSE_PROJECT_LABEL_KEY, Service},
};

use super::GetServiceError;

impl<D: DockerListContainers + DockerInspectContainer> Client<D> {
    /// Lists the service containers of a compose application, in the order
    /// the Docker daemon returns them.
    ///
    /// Stopped services are included; whether a service is usable is decided
    /// at resolution time, not here.
    pub async fn list_services(&self, app: &str) -> Result<Vec<Service>, GetServiceError> {
        // Filter for containers carrying the app's compose project label
        let list_container_options = ListContainersOptionsBuilder::default()
            .all(true)
            .filters(&hashmap! {
                "label" => vec![format!("{}={}", COMPOSE_PROJECT_LABEL_KEY, app)],
            })
            .build();

        let container_summaries = self
            .docker
            .list_containers(Some(list_container_options))
            .await?;

        let mut services = Vec::with_capacity(container_summaries.len());

        for container_summary in container_summaries {
            // The ID should always be present; skip the summary if not
            if let Some(container_id) = container_summary.id {
                let service = self.get_service(container_id.as_ref()).await?;
                services.push(service);
            }
        }

        Ok(services)
    }
}
