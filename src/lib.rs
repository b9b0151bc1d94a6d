#![doc = include_str!("../README.md")]

mod client;
mod docker;
pub mod launcher;
pub mod models;
#[cfg(test)]
mod test_utils;

pub use client::{Client, GetServiceError, ResolveConnectionError};
pub use docker::{DockerInspectContainer, DockerListContainers};
