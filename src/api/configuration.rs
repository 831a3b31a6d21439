//! Request descriptors for the two upstream calls.
//!
//! Both builders are pure: identical inputs give identical descriptors and
//! nothing here touches the network.

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use std::collections::BTreeMap;
use url::form_urlencoded;

pub const AUTHORITY: &str = "https://login.microsoftonline.com";
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded;charset=UTF-8";
pub const JSON_CONTENT_TYPE: &str = "application/json";

/// Method, URL, headers and body of one outbound request.
#[derive(Clone, PartialEq, Eq)]
pub struct RequestDescriptor {
    pub method: Method,
    pub url: String,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

impl RequestDescriptor {
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

// body and Authorization carry credentials
impl std::fmt::Debug for RequestDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let headers: BTreeMap<&str, &str> = self
            .headers
            .iter()
            .map(|(name, value)| {
                if name.eq_ignore_ascii_case("authorization") {
                    (name.as_str(), "[REDACTED]")
                } else {
                    (name.as_str(), value.as_str())
                }
            })
            .collect();

        let body = if self.body.is_empty() {
            ""
        } else {
            "[REDACTED]"
        };

        f.debug_struct("RequestDescriptor")
            .field("method", &self.method)
            .field("url", &self.url)
            .field("headers", &headers)
            .field("body", &body)
            .finish()
    }
}

/// Single DNS label: ASCII alphanumerics and inner hyphens, at most 63 bytes.
#[must_use]
pub fn is_host_label(value: &str) -> bool {
    !value.is_empty()
        && value.len() <= 63
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'-')
}

/// Dot-separated DNS labels, e.g. a tenant GUID or `contoso.onmicrosoft.com`.
#[must_use]
pub fn is_host_name(value: &str) -> bool {
    value.len() <= 253 && value.split('.').all(is_host_label)
}

/// Token request for the client-credentials grant.
#[must_use]
pub fn auth(tenant_id: &str, client_id: &str, client_secret: &SecretString) -> RequestDescriptor {
    let scope = format!("api://{client_id}/.default");

    let body = form_urlencoded::Serializer::new(String::new())
        .append_pair("client_id", client_id)
        .append_pair("client_secret", client_secret.expose_secret())
        .append_pair("grant_type", "client_credentials")
        .append_pair("scope", &scope)
        .finish();

    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), FORM_CONTENT_TYPE.to_string());

    RequestDescriptor {
        method: Method::POST,
        url: format!("{AUTHORITY}/{tenant_id}/oauth2/v2.0/token"),
        headers,
        body,
    }
}

/// Authenticated health check against the function app.
#[must_use]
pub fn ping(token: &SecretString, function_name: &str) -> RequestDescriptor {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), JSON_CONTENT_TYPE.to_string());
    headers.insert(
        "Authorization".to_string(),
        format!("Bearer {}", token.expose_secret()),
    );

    RequestDescriptor {
        method: Method::GET,
        url: format!("https://{function_name}.azurewebsites.net/api/ping"),
        headers,
        body: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(value: &str) -> SecretString {
        SecretString::from(value.to_string())
    }

    #[test]
    fn auth_targets_tenant_token_endpoint() {
        let request = auth("contoso", "app-id", &secret("shh"));
        assert_eq!(request.method, Method::POST);
        assert_eq!(
            request.url,
            "https://login.microsoftonline.com/contoso/oauth2/v2.0/token"
        );
        assert_eq!(request.header("content-type"), Some(FORM_CONTENT_TYPE));
        assert_eq!(request.header("Authorization"), None);
    }

    #[test]
    fn auth_body_is_form_encoded() {
        let request = auth("contoso", "app-id", &secret("a&b=c d"));
        let pairs: Vec<(String, String)> = form_urlencoded::parse(request.body.as_bytes())
            .into_owned()
            .collect();

        assert_eq!(
            pairs,
            vec![
                ("client_id".to_string(), "app-id".to_string()),
                ("client_secret".to_string(), "a&b=c d".to_string()),
                ("grant_type".to_string(), "client_credentials".to_string()),
                ("scope".to_string(), "api://app-id/.default".to_string()),
            ]
        );
        assert!(request.body.contains("scope=api%3A%2F%2Fapp-id%2F.default"));
    }

    #[test]
    fn auth_is_deterministic() {
        let first = auth("contoso", "app-id", &secret("shh"));
        let second = auth("contoso", "app-id", &secret("shh"));
        assert_eq!(first, second);
    }

    #[test]
    fn ping_targets_function_app() {
        let request = ping(&secret("abc"), "my-func");
        assert_eq!(request.method, Method::GET);
        assert_eq!(request.url, "https://my-func.azurewebsites.net/api/ping");
        assert_eq!(request.header("Authorization"), Some("Bearer abc"));
        assert_eq!(request.header("Content-Type"), Some(JSON_CONTENT_TYPE));
        assert!(request.body.is_empty());
        assert_eq!(ping(&secret("abc"), "my-func"), request);
    }

    #[test]
    fn host_label_accepts_app_names() {
        assert!(is_host_label("my-func"));
        assert!(is_host_label("Func01"));
        assert!(!is_host_label(""));
        assert!(!is_host_label("-func"));
        assert!(!is_host_label("func-"));
        assert!(!is_host_label("evil.example/x?"));
        assert!(!is_host_label("a.b"));
        assert!(!is_host_label(&"a".repeat(64)));
    }

    #[test]
    fn host_name_accepts_tenant_forms() {
        assert!(is_host_name("72f988bf-86f1-41af-91ab-2d7cd011db47"));
        assert!(is_host_name("contoso.onmicrosoft.com"));
        assert!(is_host_name("common"));
        assert!(!is_host_name("contoso/../x"));
        assert!(!is_host_name("contoso..com"));
        assert!(!is_host_name("user@contoso"));
        assert!(!is_host_name(""));
    }

    #[test]
    fn debug_redacts_credentials() {
        let token = format!("{:?}", ping(&secret("abc"), "my-func"));
        assert!(token.contains("[REDACTED]"));
        assert!(!token.contains("Bearer abc"));

        let login = format!("{:?}", auth("contoso", "app-id", &secret("shh")));
        assert!(!login.contains("shh"));
        assert!(login.contains("login.microsoftonline.com"));
    }
}
