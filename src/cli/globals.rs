use crate::host::{self, Context, DataSource};
use secrecy::{ExposeSecret, SecretString};

/// Settings collected from the command line and environment.
#[derive(Debug, Clone)]
pub struct GlobalArgs {
    pub tenant_id: String,
    pub client_id: String,
    pub client_secret: SecretString,
    pub function_name: Option<String>,
}

impl GlobalArgs {
    #[must_use]
    pub fn new(tenant_id: String, client_id: String) -> Self {
        Self {
            tenant_id,
            client_id,
            client_secret: SecretString::default(),
            function_name: None,
        }
    }

    pub fn set_secret(&mut self, secret: SecretString) {
        self.client_secret = secret;
    }

    pub fn set_function_name(&mut self, name: String) {
        self.function_name = Some(name);
    }
}

impl DataSource for GlobalArgs {
    fn setting(&self, name: &str) -> Option<String> {
        match name {
            host::TENANT_ID => Some(self.tenant_id.clone()),
            host::CLIENT_ID => Some(self.client_id.clone()),
            host::CLIENT_SECRET => Some(self.client_secret.expose_secret().to_string()),
            host::FUNCTION_NAME => self.function_name.clone(),
            _ => None,
        }
    }
}

impl Context for GlobalArgs {
    fn data_source(&self) -> &dyn DataSource {
        self
    }
}
