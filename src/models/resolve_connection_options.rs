use crate::models::ServiceFilter;

/// Options for resolving a compose application's database connection.
///
/// # Examples
///
/// ```
/// use tableplus_local::models::{ResolveConnectionOptions, ServiceFilter};
///
/// let options = ResolveConnectionOptions::builder()
///     .app("myapp")
///     .filter(ServiceFilter::new(["db"]))
///     .build();
/// ```
#[derive(Debug, Clone, PartialEq, typed_builder::TypedBuilder)]
#[builder(doc)]
pub struct ResolveConnectionOptions {
    /// Compose project whose services are searched
    #[builder(setter(into))]
    pub app: String,
    /// Which service names count as the database service
    #[builder(default)]
    pub filter: ServiceFilter,
}
