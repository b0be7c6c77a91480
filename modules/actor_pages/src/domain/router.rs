//! Hostname-based tenant routing
//!
//! A pure function from (host, path) to a [`RouteDecision`]. The request
//! rewriting itself lives in the REST layer.

use std::str::FromStr;

use http::uri::Authority;

use crate::config::Config;
use crate::contract::RouteDecision;
use crate::domain::validation::validate_slug;

#[derive(Debug, thiserror::Error)]
enum HostError {
    #[error("invalid host: {0}")]
    Invalid(#[from] http::uri::InvalidUri),
    #[error("host carries user info")]
    UserInfo,
}

/// Routes requests by hostname
#[derive(Debug, Clone)]
pub struct TenantRouter {
    root_domain: String,
    dashboard_prefix: String,
    tenant_prefix: String,
    dashboard_subdomains: Vec<String>,
    marketing_subdomains: Vec<String>,
    local_hosts: Vec<String>,
    passthrough_prefixes: Vec<String>,
}

impl Default for TenantRouter {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl TenantRouter {
    pub fn new(config: &Config) -> Self {
        let lower = |v: &[String]| -> Vec<String> {
            v.iter().map(|s| s.to_ascii_lowercase()).collect()
        };
        Self {
            root_domain: config.root_domain.trim_matches('.').to_ascii_lowercase(),
            dashboard_prefix: trim_prefix(&config.dashboard_prefix),
            tenant_prefix: trim_prefix(&config.tenant_prefix),
            dashboard_subdomains: lower(&config.dashboard_subdomains),
            marketing_subdomains: lower(&config.marketing_subdomains),
            local_hosts: lower(&config.local_hosts),
            passthrough_prefixes: config.passthrough_prefixes.clone(),
        }
    }

    pub fn root_domain(&self) -> &str {
        &self.root_domain
    }

    /// Path prefix tenant pages are rewritten under, e.g. `/site`
    pub fn tenant_prefix(&self) -> &str {
        &self.tenant_prefix
    }

    /// Decide where a request is served from.
    ///
    /// Never fails: an unparseable host passes through and is logged at warn.
    pub fn route(&self, host: &str, path: &str) -> RouteDecision {
        match self.try_route(host, path) {
            Ok(decision) => decision,
            Err(e) => {
                tracing::warn!(host, path, error = %e, "Host could not be parsed, passing through");
                RouteDecision::PassThrough
            }
        }
    }

    fn try_route(&self, host: &str, path: &str) -> Result<RouteDecision, HostError> {
        let path = if path.is_empty() { "/" } else { path };
        if self.is_passthrough_path(path) {
            return Ok(RouteDecision::PassThrough);
        }

        let host = host.trim();
        if host.is_empty() {
            return Ok(RouteDecision::PassThrough);
        }
        let authority = Authority::from_str(host)?;
        if authority.as_str().contains('@') {
            return Err(HostError::UserInfo);
        }
        let hostname = authority.host().trim_end_matches('.').to_ascii_lowercase();

        if self.local_hosts.contains(&hostname) {
            return Ok(RouteDecision::PassThrough);
        }
        if hostname == self.root_domain {
            return Ok(RouteDecision::Marketing);
        }

        let Some(subdomain) = hostname
            .strip_suffix(self.root_domain.as_str())
            .and_then(|rest| rest.strip_suffix('.'))
        else {
            return Ok(RouteDecision::PassThrough);
        };

        if self.marketing_subdomains.iter().any(|s| s == subdomain) {
            return Ok(RouteDecision::Marketing);
        }

        if self.dashboard_subdomains.iter().any(|s| s == subdomain) {
            let path = if has_prefix(path, &self.dashboard_prefix) {
                path.to_string()
            } else {
                join(&self.dashboard_prefix, path)
            };
            return Ok(RouteDecision::Dashboard { path });
        }

        if subdomain.contains('.') || validate_slug(subdomain).is_err() {
            return Ok(RouteDecision::PassThrough);
        }

        let base = format!("{}/{}", self.tenant_prefix, subdomain);
        Ok(RouteDecision::TenantPage {
            slug: subdomain.to_string(),
            path: join(&base, path),
        })
    }

    fn is_passthrough_path(&self, path: &str) -> bool {
        self.passthrough_prefixes
            .iter()
            .any(|prefix| match prefix.strip_suffix('/') {
                // "/api/" also covers a bare "/api"
                Some(dir) => path == dir || path.starts_with(prefix.as_str()),
                None => path.starts_with(prefix.as_str()),
            })
    }
}

fn trim_prefix(prefix: &str) -> String {
    format!("/{}", prefix.trim_matches('/'))
}

/// `path` is exactly `prefix` or below it
fn has_prefix(path: &str, prefix: &str) -> bool {
    path.strip_prefix(prefix)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'))
}

/// `base` followed by `path`, where `/` adds nothing
fn join(base: &str, path: &str) -> String {
    if path == "/" {
        base.to_string()
    } else if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn router() -> TenantRouter {
        TenantRouter::default()
    }

    #[test]
    fn root_and_www_are_marketing() {
        assert_eq!(router().route("actorpage101.site", "/"), RouteDecision::Marketing);
        assert_eq!(
            router().route("www.actorpage101.site", "/pricing"),
            RouteDecision::Marketing
        );
        assert_eq!(
            router().route("ActorPage101.Site:443", "/"),
            RouteDecision::Marketing
        );
    }

    #[test]
    fn app_subdomain_rewrites_into_dashboard() {
        assert_eq!(
            router().route("app.actorpage101.site", "/billing"),
            RouteDecision::Dashboard {
                path: "/dashboard/billing".into()
            }
        );
        assert_eq!(
            router().route("app.actorpage101.site", "/"),
            RouteDecision::Dashboard {
                path: "/dashboard".into()
            }
        );
        assert_eq!(
            router().route("app.actorpage101.site", "/dashboard/pages"),
            RouteDecision::Dashboard {
                path: "/dashboard/pages".into()
            }
        );
        assert_eq!(
            router().route("app.actorpage101.site", "/dashboards"),
            RouteDecision::Dashboard {
                path: "/dashboard/dashboards".into()
            }
        );
    }

    #[test]
    fn tenant_subdomain_rewrites_into_site() {
        assert_eq!(
            router().route("jordan.actorpage101.site", "/"),
            RouteDecision::TenantPage {
                slug: "jordan".into(),
                path: "/site/jordan".into()
            }
        );
        assert_eq!(
            router().route("jordan.actorpage101.site", "/reels"),
            RouteDecision::TenantPage {
                slug: "jordan".into(),
                path: "/site/jordan/reels".into()
            }
        );
    }

    #[test]
    fn local_and_foreign_hosts_pass_through() {
        assert_eq!(router().route("localhost:3000", "/"), RouteDecision::PassThrough);
        assert_eq!(
            router().route("127.0.0.1:8080", "/site/jordan"),
            RouteDecision::PassThrough
        );
        assert_eq!(router().route("example.com", "/"), RouteDecision::PassThrough);
        assert_eq!(
            router().route("notactorpage101.site", "/"),
            RouteDecision::PassThrough
        );
    }

    #[test]
    fn static_paths_are_never_rewritten() {
        for path in ["/_next/static/chunk.js", "/favicon.ico", "/robots.txt", "/api/pages"] {
            assert_eq!(
                router().route("jordan.actorpage101.site", path),
                RouteDecision::PassThrough,
                "{path}"
            );
        }
    }

    #[test]
    fn directory_prefixes_cover_their_bare_path() {
        for path in ["/api", "/static", "/assets"] {
            assert_eq!(
                router().route("jordan.actorpage101.site", path),
                RouteDecision::PassThrough,
                "{path}"
            );
        }
        assert_eq!(
            router().route("jordan.actorpage101.site", "/apiary"),
            RouteDecision::TenantPage {
                slug: "jordan".into(),
                path: "/site/jordan/apiary".into()
            }
        );
    }

    #[test]
    fn nested_or_invalid_subdomains_pass_through() {
        assert_eq!(
            router().route("a.b.actorpage101.site", "/"),
            RouteDecision::PassThrough
        );
        assert_eq!(
            router().route("-bad-.actorpage101.site", "/"),
            RouteDecision::PassThrough
        );
    }

    #[test]
    fn unparseable_host_fails_open() {
        assert_eq!(router().route("bad host", "/"), RouteDecision::PassThrough);
        assert_eq!(router().route("", "/"), RouteDecision::PassThrough);
        assert_eq!(
            router().route("user@jordan.actorpage101.site", "/"),
            RouteDecision::PassThrough
        );
    }

    #[test]
    fn custom_config_is_honoured() {
        let config = Config {
            root_domain: "pages.test".into(),
            dashboard_subdomains: vec!["app".into(), "admin".into()],
            ..Config::default()
        };
        let router = TenantRouter::new(&config);
        assert_eq!(
            router.route("admin.pages.test", "/users"),
            RouteDecision::Dashboard {
                path: "/dashboard/users".into()
            }
        );
        assert_eq!(
            router.route("jordan.pages.test", "/"),
            RouteDecision::TenantPage {
                slug: "jordan".into(),
                path: "/site/jordan".into()
            }
        );
    }
}
