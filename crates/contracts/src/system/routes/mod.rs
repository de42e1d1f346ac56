pub mod component;
pub mod descriptor;
pub mod issue;
pub mod pattern;
pub mod registry;
pub mod response;
pub mod table;

pub use component::AdminComponent;
pub use descriptor::{RouteDefinition, RouteDescriptor, RouteMeta};
pub use issue::{IssueKind, RouteIssue};
pub use registry::{RegistryError, RouteMatch, RouteRegistry};
pub use response::*;
