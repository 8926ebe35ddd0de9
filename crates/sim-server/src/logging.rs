use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber. Fails if one is already set or the
/// filter directive does not parse.
pub fn init(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_new(filter)?;
    fmt().with_env_filter(filter).with_target(true).try_init()
}

#[cfg(test)]
mod tests {
    use super::init;

    #[test]
    fn init_rejects_malformed_directive() {
        assert!(init("runtime=loud").is_err());
    }

    #[test]
    fn second_init_fails_once_a_subscriber_is_set() {
        // The first call may lose the race to another test in this binary;
        // either way a global subscriber exists afterwards.
        let _ = init("runtime=debug,api=info,warn");

        assert!(init("info").is_err());
    }
}
