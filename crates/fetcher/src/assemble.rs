//! Join, validate and normalize fetched control-plane resources

use std::collections::HashMap;

use routesync_core::{
    App, CcDestination, CcDomain, CcRoute, CcSpace, Destination, Domain, Organization, Process,
    Route, RouteSnapshot, Space,
};

use crate::error::ReferentialError;

/// Resolve every route against the fetched domains and spaces
///
/// Routes keep their listing order. The first route whose domain or space
/// cannot be found rejects the whole snapshot. Duplicate GUIDs in `domains`
/// or `spaces` are not an error: the last entry wins.
pub fn assemble_snapshot(
    routes: &[CcRoute],
    domains: &[CcDomain],
    spaces: &[CcSpace],
) -> Result<RouteSnapshot, ReferentialError> {
    let domains_by_guid: HashMap<&str, &CcDomain> =
        domains.iter().map(|d| (d.guid.as_str(), d)).collect();
    let spaces_by_guid: HashMap<&str, &CcSpace> =
        spaces.iter().map(|s| (s.guid.as_str(), s)).collect();

    let routes = routes
        .iter()
        .map(|route| {
            let domain = domains_by_guid
                .get(route.domain_guid())
                .ok_or_else(|| ReferentialError::missing_domain(&route.guid, route.domain_guid()))?;
            let space = spaces_by_guid
                .get(route.space_guid())
                .ok_or_else(|| ReferentialError::missing_space(&route.guid, route.space_guid()))?;

            Ok(resolve_route(route, domain, space))
        })
        .collect::<Result<Vec<_>, ReferentialError>>()?;

    Ok(RouteSnapshot::new(routes))
}

fn resolve_route(route: &CcRoute, domain: &CcDomain, space: &CcSpace) -> Route {
    Route {
        guid: route.guid.clone(),
        host: route.host.to_lowercase(),
        path: route.path.clone(),
        url: normalize_url(&route.url),
        domain: Domain {
            guid: domain.guid.clone(),
            name: domain.name.to_lowercase(),
            internal: domain.internal,
        },
        space: Space {
            guid: space.guid.clone(),
            organization: Organization {
                guid: space.organization_guid().to_string(),
            },
        },
        destinations: route.destinations.iter().map(resolve_destination).collect(),
    }
}

fn resolve_destination(dest: &CcDestination) -> Destination {
    Destination {
        guid: dest.guid.clone(),
        app: App {
            guid: dest.app.guid.clone(),
            process: Process {
                process_type: dest.app.process.process_type.clone(),
            },
        },
        port: dest.port,
        weight: dest.weight,
    }
}

/// Lower-case the FQDN part of a route url; the path part keeps its case
fn normalize_url(url: &str) -> String {
    match url.find('/') {
        Some(idx) => {
            let (fqdn, path) = url.split_at(idx);
            format!("{}{}", fqdn.to_lowercase(), path)
        }
        None => url.to_lowercase(),
    }
}
