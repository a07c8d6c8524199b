#![deny(missing_docs)]
//! Standard initialization for the ingest lambda binaries.
//! Loads `.env`, installs the panic hook and configures tracing for the current [Environment].

pub mod environment;

pub use environment::Environment;

/// Describes how a binary should be initialized
#[derive(Debug)]
pub struct IngestEntrypoint {
    env: Environment,
}

impl Default for IngestEntrypoint {
    fn default() -> Self {
        IngestEntrypoint {
            env: Environment::new_or_prod(),
        }
    }
}

/// Sentinel which guarantees that [IngestEntrypoint::init] was called
#[derive(Debug)]
pub struct InitializedEntrypoint {
    env: Environment,
}

impl InitializedEntrypoint {
    /// The environment the binary was initialized for
    pub fn environment(&self) -> Environment {
        self.env
    }
}

impl IngestEntrypoint {
    /// Create a new instance for an explicit [Environment]
    pub fn new(env: Environment) -> Self {
        Self { env }
    }

    /// Consume self, initialize this binary, and return a proof that it was initialized
    pub fn init(self) -> InitializedEntrypoint {
        dotenv::dotenv().ok();
        std::panic::set_hook(Box::new(tracing_panic::panic_hook));

        match self.env {
            Environment::Local => {
                tracing_subscriber::fmt()
                    .with_ansi(true)
                    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .pretty()
                    .init();
            }
            // cloudwatch wants one json object per line
            Environment::Production | Environment::Develop => {
                tracing_subscriber::fmt()
                    .with_ansi(false)
                    .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
                    .with_file(true)
                    .with_line_number(true)
                    .json()
                    .with_current_span(true)
                    .with_span_list(false)
                    .flatten_event(true)
                    .init();
            }
        }

        tracing::trace!(environment=%self.env, "entrypoint initialized");

        InitializedEntrypoint { env: self.env }
    }
}
