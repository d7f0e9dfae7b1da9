//! Development server options and proxy rules.

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DevServerOptions {
    pub host: String,

    pub port: u16,

    /// Serve over TLS
    #[serde(default)]
    pub https: bool,

    /// Open a browser once the server is listening
    #[serde(default)]
    pub open: bool,

    /// Hot replacement without falling back to a full reload
    #[serde(default)]
    pub hot_only: bool,

    #[serde(default)]
    pub proxy: Vec<ProxyRule>,
}

impl DevServerOptions {
    /// `host:port` the server binds to.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// First rule whose prefix matches `path`.
    pub fn route(&self, path: &str) -> Option<&ProxyRule> {
        self.proxy.iter().find(|rule| rule.matches(path))
    }

    /// Upstream URL for `path`, or `None` when the dev server handles it.
    pub fn forward(&self, path: &str) -> Option<String> {
        self.route(path).and_then(|rule| rule.forward(path))
    }
}

/// Forwards requests under `path_prefix` to `target`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProxyRule {
    pub path_prefix: String,

    /// Upstream origin, e.g. `http://localhost:3000/`
    pub target: String,

    /// Regex applied to the request path before forwarding
    #[serde(default)]
    pub rewrite_from: Option<String>,

    /// Replacement for `rewrite_from`, `$1`-style groups allowed
    #[serde(default)]
    pub rewrite_to: String,

    /// Rewrite the `Origin` header to the target origin
    #[serde(default)]
    pub change_origin: bool,
}

impl ProxyRule {
    /// Rule forwarding `prefix` to `target` with the path left as is.
    pub fn preserving(prefix: impl Into<String>, target: impl Into<String>) -> Self {
        let prefix = prefix.into();
        Self {
            rewrite_from: Some(format!("^{}", regex::escape(&prefix))),
            rewrite_to: prefix.clone(),
            path_prefix: prefix,
            target: target.into(),
            change_origin: true,
        }
    }

    pub fn matches(&self, path: &str) -> bool {
        path.starts_with(&self.path_prefix)
    }

    /// Path after the rewrite. An uncompilable pattern leaves the path
    /// untouched; validation reports it.
    pub fn rewrite_path(&self, path: &str) -> String {
        match self.rewrite_from.as_deref().map(Regex::new) {
            Some(Ok(re)) => re.replace(path, self.rewrite_to.as_str()).into_owned(),
            _ => path.to_string(),
        }
    }

    /// Upstream URL for `path`, `None` if the rule does not apply.
    ///
    /// # Example
    ///
    /// ```
    /// use kiln_config::ProxyRule;
    ///
    /// let rule = ProxyRule::preserving("/gxyundata", "http://localhost:3000/");
    /// assert_eq!(
    ///     rule.forward("/gxyundata/list?page=2").as_deref(),
    ///     Some("http://localhost:3000/gxyundata/list?page=2"),
    /// );
    /// assert!(rule.forward("/api/list").is_none());
    /// ```
    pub fn forward(&self, path: &str) -> Option<String> {
        if !self.matches(path) {
            return None;
        }
        let rewritten = self.rewrite_path(path);
        let base = self.target.trim_end_matches('/');
        if rewritten.starts_with('/') {
            Some(format!("{base}{rewritten}"))
        } else {
            Some(format!("{base}/{rewritten}"))
        }
    }

    /// `Origin` header sent upstream, when it is rewritten.
    pub fn upstream_origin(&self) -> Option<String> {
        if !self.change_origin {
            return None;
        }
        let (scheme, rest) = self.target.split_once("://")?;
        let authority = rest.split('/').next().unwrap_or(rest);
        Some(format!("{scheme}://{authority}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn data_rule() -> ProxyRule {
        ProxyRule::preserving("/gxyundata", "http://localhost:3000/")
    }

    #[test]
    fn preserving_rule_keeps_prefix() {
        let rule = data_rule();
        assert_eq!(rule.rewrite_from.as_deref(), Some("^/gxyundata"));
        assert_eq!(rule.rewrite_to, "/gxyundata");
        assert_eq!(rule.rewrite_path("/gxyundata/a/b"), "/gxyundata/a/b");
        assert!(rule.change_origin);
    }

    #[test]
    fn forward_joins_without_double_slash() {
        assert_eq!(
            data_rule().forward("/gxyundata").as_deref(),
            Some("http://localhost:3000/gxyundata")
        );
    }

    #[test]
    fn rewrite_can_strip_prefix() {
        let rule = ProxyRule {
            path_prefix: "/api".into(),
            target: "http://backend:8000".into(),
            rewrite_from: Some("^/api".into()),
            rewrite_to: String::new(),
            change_origin: false,
        };
        assert_eq!(
            rule.forward("/api/users").as_deref(),
            Some("http://backend:8000/users")
        );
        assert!(rule.upstream_origin().is_none());
    }

    #[test]
    fn origin_is_scheme_and_authority() {
        assert_eq!(
            data_rule().upstream_origin().as_deref(),
            Some("http://localhost:3000")
        );
    }

    #[test]
    fn server_routes_first_matching_rule() {
        let server = DevServerOptions {
            host: "0.0.0.0".into(),
            port: 8080,
            https: false,
            open: false,
            hot_only: false,
            proxy: vec![data_rule()],
        };
        assert_eq!(server.address(), "0.0.0.0:8080");
        assert!(server.route("/gxyundata/x").is_some());
        assert!(server.forward("/index.html").is_none());
    }
}
