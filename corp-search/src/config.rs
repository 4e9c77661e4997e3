use std::path::PathBuf;

/// Host settings, read from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub port: u16,
    /// JSON list of corporations. The built in directory is used when unset.
    pub directory: Option<PathBuf>,
    /// Where the wasm bundle of the client was built to
    pub pkg_dir: PathBuf,
}

impl HostConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let port = lookup("PORT")
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(8080);
        Self {
            port,
            directory: lookup("CORP_SEARCH_DIRECTORY").map(PathBuf::from),
            pkg_dir: lookup("CORP_SEARCH_PKG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./target/site/pkg")),
        }
    }
}
