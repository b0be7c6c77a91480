//! Configuration for the actor pages module

use serde::Deserialize;

/// Actor pages configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Domain tenant pages are served under
    #[serde(default = "default_root_domain")]
    pub root_domain: String,

    /// Path prefix of the authenticated dashboard subtree
    #[serde(default = "default_dashboard_prefix")]
    pub dashboard_prefix: String,

    /// Path prefix of the public tenant-page route
    #[serde(default = "default_tenant_prefix")]
    pub tenant_prefix: String,

    /// Subdomains rewritten into the dashboard
    #[serde(default = "default_dashboard_subdomains")]
    pub dashboard_subdomains: Vec<String>,

    /// Subdomains served as the marketing site
    #[serde(default = "default_marketing_subdomains")]
    pub marketing_subdomains: Vec<String>,

    /// Hosts passed through untouched for local development
    #[serde(default = "default_local_hosts")]
    pub local_hosts: Vec<String>,

    /// Paths never rewritten (static assets, framework internals)
    #[serde(default = "default_passthrough_prefixes")]
    pub passthrough_prefixes: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            root_domain: default_root_domain(),
            dashboard_prefix: default_dashboard_prefix(),
            tenant_prefix: default_tenant_prefix(),
            dashboard_subdomains: default_dashboard_subdomains(),
            marketing_subdomains: default_marketing_subdomains(),
            local_hosts: default_local_hosts(),
            passthrough_prefixes: default_passthrough_prefixes(),
        }
    }
}

fn default_root_domain() -> String {
    "actorpage101.site".to_string()
}

fn default_dashboard_prefix() -> String {
    "/dashboard".to_string()
}

fn default_tenant_prefix() -> String {
    "/site".to_string()
}

fn default_dashboard_subdomains() -> Vec<String> {
    vec!["app".to_string()]
}

fn default_marketing_subdomains() -> Vec<String> {
    vec!["www".to_string()]
}

fn default_local_hosts() -> Vec<String> {
    vec!["localhost".to_string(), "127.0.0.1".to_string()]
}

fn default_passthrough_prefixes() -> Vec<String> {
    [
        "/_next/static",
        "/_next/image",
        "/favicon.ico",
        "/robots.txt",
        "/sitemap.xml",
        "/static/",
        "/assets/",
        "/api/",
    ]
    .iter()
    .map(|p| p.to_string())
    .collect()
}
