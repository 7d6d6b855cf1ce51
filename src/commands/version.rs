use crate::error::{CommandResult, SiliconError};

pub const PREFIX: &str = "v";
pub const FALLBACK_VERSION: &str = "0.0.0";

/// Package version recorded by cargo at build time.
pub fn package_version() -> CommandResult<&'static str> {
    lookup(option_env!("CARGO_PKG_VERSION"))
}

fn lookup(version: Option<&'static str>) -> CommandResult<&'static str> {
    version
        .filter(|version| !version.is_empty())
        .ok_or(SiliconError::VersionUnavailable)
}

/// Returns `v{version}`, falling back to `v0.0.0` when no version is known.
pub fn message() -> String {
    render(package_version())
}

fn render(version: CommandResult<&str>) -> String {
    let version = version.unwrap_or_else(|err| {
        tracing::debug!(%err, "using fallback version");
        FALLBACK_VERSION
    });
    format!("{PREFIX}{version}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_package_version() {
        assert_eq!(message(), format!("v{}", env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn missing_version_falls_back() {
        assert_eq!(render(lookup(None)), "v0.0.0");
    }

    #[test]
    fn empty_version_falls_back() {
        assert!(matches!(lookup(Some("")), Err(SiliconError::VersionUnavailable)));
        assert_eq!(render(lookup(Some(""))), "v0.0.0");
    }
}
