mod destination;
mod domain;
mod route;
mod snapshot;
mod space;

pub use destination::{App, Destination, Process};
pub use domain::Domain;
pub use route::Route;
pub use snapshot::RouteSnapshot;
pub use space::{Organization, Space};
