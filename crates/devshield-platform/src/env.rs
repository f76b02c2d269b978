//! Environment variable probe and the local implementation.
//!
//! Probes are read-only: the only environment fact any detector consumes
//! is whether a variable is set and non-empty (the `DYLD_INSERT_LIBRARIES`
//! injection signal).

/// Read access to process environment variables.
pub trait EnvProbe: Send + Sync {
    /// The value of an environment variable, or `None` if it is not set.
    fn get_var(&self, name: &str) -> Option<String>;
}

/// Native environment probe using [`std::env`].
pub struct LocalEnvProbe;

impl EnvProbe for LocalEnvProbe {
    fn get_var(&self, name: &str) -> Option<String> {
        std::env::var(name).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_var_existing() {
        let env = LocalEnvProbe;
        // PATH is universally available on all platforms.
        assert!(env.get_var("PATH").is_some());
    }

    #[test]
    fn get_var_missing() {
        let env = LocalEnvProbe;
        assert!(env.get_var("DEVSHIELD_DEFINITELY_NOT_SET_12345").is_none());
    }
}
