//! Typed detection of the environment the lambda is deployed to

use ingest_env_var::VarNameErr;
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

mod var {
    ingest_env_var::env_var!(
        #[derive(Clone)]
        pub struct Environment;
    );
}

/// The environment the lambda is running in
#[derive(serde::Serialize, serde::Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    /// Production environment
    #[serde(rename = "prod")]
    Production,
    /// Dev and or staging environment
    #[serde(rename = "dev")]
    Develop,
    /// Running on a developer machine, e.g. under `cargo lambda watch`
    #[serde(rename = "local")]
    Local,
}

/// An error which can occur when constructing an [Environment]
#[derive(Debug, Error)]
pub enum EnvironmentErr {
    /// `ENVIRONMENT` could not be read
    #[error(transparent)]
    Var(#[from] VarNameErr),
    /// `ENVIRONMENT` held an unrecognised value
    #[error(transparent)]
    InvalidValue(#[from] UnknownValue),
}

impl Environment {
    /// Reads the environment from the `ENVIRONMENT` variable
    #[tracing::instrument(err, level = tracing::Level::TRACE)]
    pub fn new_from_env() -> Result<Self, EnvironmentErr> {
        let v = var::Environment::new()?;
        Ok(Self::from_str(&v)?)
    }

    /// Reads the environment, falling back to [Environment::Production] when it is unset or invalid
    pub fn new_or_prod() -> Self {
        Self::new_from_env().unwrap_or(Environment::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Production => write!(f, "prod"),
            Environment::Develop => write!(f, "dev"),
            Environment::Local => write!(f, "local"),
        }
    }
}

/// A value which cannot be converted into an [Environment]
#[derive(Debug, Error, PartialEq, Eq)]
#[error("could not convert {0} into an environment value")]
pub struct UnknownValue(String);

impl FromStr for Environment {
    type Err = UnknownValue;

    fn from_str(environment: &str) -> Result<Self, UnknownValue> {
        match environment {
            "prod" => Ok(Environment::Production),
            "dev" => Ok(Environment::Develop),
            "local" => Ok(Environment::Local),
            s => Err(UnknownValue(s.to_string())),
        }
    }
}
