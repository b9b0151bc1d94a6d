use std::fmt::Display;

use bollard::secret::{ContainerInspectResponse, ContainerStateStatusEnum};

/// The state of the service container (from the Docker API)
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    Created,
    Dead,
    Exited,
    Paused,
    Removing,
    Restarting,
    Running,
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum GetStateError {
    #[error("Missing state")]
    MissingState,
    #[error("Empty state")]
    EmptyState,
}

impl TryFrom<&ContainerInspectResponse> for State {
    type Error = GetStateError;

    fn try_from(value: &ContainerInspectResponse) -> Result<Self, Self::Error> {
        let status = value
            .state
            .as_ref()
            .and_then(|s| s.status)
            .ok_or(GetStateError::MissingState)?;

        Ok(match status {
            ContainerStateStatusEnum::CREATED => State::Created,
            ContainerStateStatusEnum::DEAD => State::Dead,
            ContainerStateStatusEnum::EXITED => State::Exited,
            ContainerStateStatusEnum::PAUSED => State::Paused,
            ContainerStateStatusEnum::REMOVING => State::Removing,
            ContainerStateStatusEnum::RESTARTING => State::Restarting,
            ContainerStateStatusEnum::RUNNING => State::Running,
            ContainerStateStatusEnum::EMPTY => return Err(GetStateError::EmptyState),
        })
    }
}

impl Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            State::Created => write!(f, "created"),
            State::Dead => write!(f, "dead"),
            State::Exited => write!(f, "exited"),
            State::Paused => write!(f, "paused"),
            State::Removing => write!(f, "removing"),
            State::Restarting => write!(f, "restarting"),
            State::Running => write!(f, "running"),
        }
    }
}
