use bollard::Docker;

mod get_service;
mod list_services;
mod resolve_connection;

pub use get_service::GetServiceError;
pub use resolve_connection::ResolveConnectionError;

/// The main entry point for resolving a compose application's database
/// connection.
///
/// `Client` wraps a Docker handle (from the `bollard` crate) and exposes the
/// service enumeration and connection resolution operations. It performs no
/// side effects itself; launching TablePlus is the caller's job, using
/// [`crate::launcher`] with the resolved URI.
///
/// # Examples
///
/// See the [module-level documentation](crate) for a complete example.
pub struct Client<D = Docker> {
    docker: D,
}

impl<D> Client<D> {
    /// Creates a new client.
    ///
    /// # Arguments
    ///
    /// * `docker` - A connected Docker client instance from the `bollard`
    ///   crate, or any implementation of the Docker operation traits (used to
    ///   inject mocks in tests)
    pub fn new(docker: D) -> Client<D> {
        Client { docker }
    }
}
