#![deny(missing_docs)]
//! Typed access to environment variables.
//!
//! [env_var] declares a newtype whose name maps to an upper snake case variable,
//! e.g. `TableName` reads `TABLE_NAME`. Holding an instance proves the variable was present
//! when it was constructed.

#[doc(hidden)]
pub use paste;
use thiserror::Error;



#[cfg(test)]
pub use testing_harness::read_env;

/// Reads the named variable from the process environment.
#[cfg(not(test))]
pub fn read_env(name: &'static str) -> Result<String, VarNameErr> {
    std::env::var(name).map_err(|err| VarNameErr { var_name: name, err })
}

/// Produced when a declared environment variable cannot be read
#[derive(Debug, Error)]
#[error("could not read environment variable {var_name}: {err}")]
pub struct VarNameErr {
    var_name: &'static str,
    #[source]
    err: std::env::VarError,
}

impl VarNameErr {
    /// The name of the variable that failed to resolve
    pub fn var_name(&self) -> &'static str {
        self.var_name
    }

    /// True when the variable was simply not set
    pub fn is_missing(&self) -> bool {
        matches!(self.err, std::env::VarError::NotPresent)
    }
}

/// Declares a newtype backed by an environment variable.
///
/// Callers must depend on `tracing`, the generated constructor is instrumented.
///
/// ```ignore
/// ingest_env_var::env_var!(
///     #[derive(Clone)]
///     pub struct TableName;
/// );
///
/// let table = TableName::new()?;
/// println!("{}", &*table);
/// ```
#[macro_export]
macro_rules! env_var {
    (
        $(#[$attr:meta])*
        $v:vis struct $n:ident;
    ) => {
        $crate::paste::paste! {
            #[doc = "The value of the `" $n:snake:upper "` environment variable."]
            $(#[$attr])*
            $v struct $n(std::sync::Arc<str>);

            impl $n {
                #[doc = "The name of the backing environment variable"]
                #[allow(dead_code)]
                $v const NAME: &'static str = stringify!([<$n:snake:upper>]);

                #[doc = "Reads `" $n:snake:upper "` from the environment."]
                #[allow(dead_code)]
                #[tracing::instrument(err)]
                $v fn new() -> Result<Self, $crate::VarNameErr> {
                    let value = $crate::read_env(Self::NAME)?;
                    Ok(Self(std::sync::Arc::from(value)))
                }

                #[doc = "Builds an instance from a literal value"]
                #[cfg(test)]
                #[allow(dead_code)]
                $v fn new_testing(value: &str) -> Self {
                    Self(std::sync::Arc::from(value))
                }

                #[doc = "Returns a shared handle to the value"]
                #[allow(dead_code)]
                $v fn as_arc(&self) -> std::sync::Arc<str> {
                    self.0.clone()
                }
            }

            impl std::ops::Deref for $n {
                type Target = str;

                fn deref(&self) -> &Self::Target {
                    &self.0
                }
            }

            impl std::convert::AsRef<str> for $n {
                fn as_ref(&self) -> &str {
                    &self.0
                }
            }

            impl std::fmt::Display for $n {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    f.write_str(&self.0)
                }
            }
        }
    };
}
