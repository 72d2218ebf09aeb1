//! Logger initialisation for the binary and tests.
//!
//! The verbosity flag picks the default filter; `RUST_LOG` overrides it.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter for the given verbosity.
#[must_use]
pub const fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Installs the global logger.
///
/// Returns `false` when a logger was already installed, so tests can call
/// this repeatedly.
#[must_use]
pub fn init(verbose: bool) -> bool {
    let env = Env::default().default_filter_or(default_level(verbose).to_string());
    Builder::from_env(env)
        .format_timestamp(None)
        .format_target(true)
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serial_test::serial;

    #[rstest]
    #[case(true, LevelFilter::Debug)]
    #[case(false, LevelFilter::Info)]
    fn verbosity_selects_level(#[case] verbose: bool, #[case] expected: LevelFilter) {
        assert_eq!(default_level(verbose), expected);
    }

    #[rstest]
    #[serial]
    fn second_init_is_tolerated() {
        let first = init(true);
        let second = init(false);
        assert!(!second, "logger installed twice (first install: {first})");
    }
}
