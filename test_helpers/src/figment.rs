//! Wrappers around [`figment::Jail`] for configuration tests.
//!
//! A jail gives each test a scratch working directory and restores any
//! environment variables it sets, so layer precedence can be exercised
//! without leaking state between tests.

use anyhow::{Result, anyhow};

/// Runs `f` inside a fresh [`figment::Jail`] and hands back its value.
///
/// # Errors
///
/// Returns an error when the jail cannot be set up or `f` fails.
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut produced = None;
    figment::Jail::try_with(|jail| {
        produced = Some(f(jail)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    produced.ok_or_else(|| anyhow!("jail closure produced no value"))
}

/// Converts an arbitrary error into a [`figment::Error`] so it can cross the
/// jail boundary with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "used with map_err, which hands over the error by value"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
