use axum::http::Method;
use eventia_shared::GatewayConfig;

/// How a matched route forwards the request downstream.
#[derive(Debug, Clone, PartialEq)]
pub enum RouteKind {
    /// The prefix-stripped remainder of the path is appended to the
    /// service base URL verbatim (asistente, proveedor, organizador).
    Passthrough,
    /// The JSON body is forwarded to a fixed downstream path; the
    /// incoming path must match the prefix exactly (login, register).
    Fixed { target: &'static str },
}

/// One downstream service entry. Constructed once at startup from
/// configuration and immutable afterwards.
#[derive(Debug, Clone)]
pub struct ServiceRoute {
    pub name: &'static str,
    pub prefix: &'static str,
    pub method: Method,
    pub base_url: String,
    pub kind: RouteKind,
}

/// The gateway dispatch table. Prefixes are disjoint, so at most one
/// route matches any incoming path; `resolve` still picks the longest
/// match to keep that property independent of table order.
pub struct RouteTable {
    routes: Vec<ServiceRoute>,
}

/// Names of the downstream services, as reported by the gateway health
/// endpoint.
pub const SERVICE_NAMES: [&str; 5] = [
    "auth-login",
    "auth-registro",
    "asistente",
    "proveedor",
    "organizador",
];

impl RouteTable {
    pub fn from_config(config: &GatewayConfig) -> Self {
        let routes = vec![
            ServiceRoute {
                name: "auth-registro",
                prefix: "/api/v1/authregistro/register",
                method: Method::POST,
                base_url: config.auth_registro_url.clone(),
                kind: RouteKind::Fixed { target: "/register" },
            },
            ServiceRoute {
                name: "auth-login",
                prefix: "/api/v1/authlogin/login",
                method: Method::POST,
                base_url: config.auth_login_url.clone(),
                kind: RouteKind::Fixed { target: "/login" },
            },
            ServiceRoute {
                name: "asistente",
                prefix: "/api/v1/asistente",
                method: Method::GET,
                base_url: config.asistente_url.clone(),
                kind: RouteKind::Passthrough,
            },
            ServiceRoute {
                name: "proveedor",
                prefix: "/api/v1/proveedor",
                method: Method::GET,
                base_url: config.proveedor_url.clone(),
                kind: RouteKind::Passthrough,
            },
            ServiceRoute {
                name: "organizador",
                prefix: "/api/v1/organizador",
                method: Method::GET,
                base_url: config.organizador_url.clone(),
                kind: RouteKind::Passthrough,
            },
        ];

        Self { routes }
    }

    /// Longest-prefix match. Returns the route and the prefix-stripped
    /// remainder of the path (empty for fixed routes).
    pub fn resolve<'a>(&'a self, path: &'a str) -> Option<(&'a ServiceRoute, &'a str)> {
        self.routes
            .iter()
            .filter_map(|route| Self::match_route(path, route).map(|rest| (route, rest)))
            .max_by_key(|(route, _)| route.prefix.len())
    }

    fn match_route<'a>(path: &'a str, route: &ServiceRoute) -> Option<&'a str> {
        match route.kind {
            // Fixed routes match their path exactly.
            RouteKind::Fixed { .. } => (path == route.prefix).then_some(""),
            // Passthrough routes match on a path-segment boundary.
            RouteKind::Passthrough => {
                if path == route.prefix {
                    return Some("");
                }
                path.strip_prefix(route.prefix)
                    .and_then(|rest| rest.strip_prefix('/'))
            }
        }
    }
}
