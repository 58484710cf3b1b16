use crate::config::{ApiConfig, Environment};

#[derive(Clone, Debug)]
pub struct ApiState {
    pub environment: Environment,
}

impl ApiState {
    pub const fn new(config: &ApiConfig) -> Self {
        Self {
            environment: config.env,
        }
    }
}
