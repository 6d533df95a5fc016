use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;

/// Disk backend types
///
/// This enum names the available storage backends. It lives in core because
/// it's used by configuration as well as the storage crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiskBackend {
    Local,
    S3,
}

impl FromStr for DiskBackend {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(DiskBackend::Local),
            "s3" => Ok(DiskBackend::S3),
            _ => Err(anyhow::anyhow!("Invalid disk backend: {}", s)),
        }
    }
}

impl Display for DiskBackend {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DiskBackend::Local => write!(f, "local"),
            DiskBackend::S3 => write!(f, "s3"),
        }
    }
}
