// src/model/artifact.rs
use sha2::{Digest, Sha256};
use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// Failures while loading a model or encoder file. These stop the process.
#[derive(Debug)]
pub enum ArtifactError {
    Io { path: String, msg: String },
    Json(String),
    /// The file parsed but doesn't match the feature schema.
    Contract(String),
}

impl fmt::Display for ArtifactError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactError::Io { path, msg } => write!(f, "Failed to read {path}: {msg}"),
            ArtifactError::Json(msg) => write!(f, "Artifact JSON error: {msg}"),
            ArtifactError::Contract(msg) => write!(f, "Artifact contract violation: {msg}"),
        }
    }
}

impl Error for ArtifactError {}

impl From<serde_json::Error> for ArtifactError {
    fn from(e: serde_json::Error) -> Self {
        ArtifactError::Json(e.to_string())
    }
}

/// Raw bytes of an artifact along with their SHA-256.
#[derive(Debug)]
pub struct ArtifactBytes {
    pub bytes: Vec<u8>,
    pub sha256: String,
}

pub fn read_artifact(path: &Path) -> Result<ArtifactBytes, ArtifactError> {
    let bytes = fs::read(path).map_err(|e| ArtifactError::Io {
        path: path.display().to_string(),
        msg: e.to_string(),
    })?;
    let sha256 = fingerprint(&bytes);
    Ok(ArtifactBytes { bytes, sha256 })
}

/// Lowercase hex SHA-256, used to tell artifact versions apart in logs.
pub fn fingerprint(bytes: &[u8]) -> String {
    let digest = Sha256::digest(bytes);
    digest.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn fingerprint_is_known_sha256() {
        assert_eq!(
            fingerprint(b"abc"),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn read_artifact_hashes_file_contents() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"abc").unwrap();

        let artifact = read_artifact(file.path()).unwrap();
        assert_eq!(artifact.bytes, b"abc");
        assert_eq!(artifact.sha256, fingerprint(b"abc"));
    }

    #[test]
    fn missing_file_names_the_path() {
        let err = read_artifact(Path::new("does/not/exist.json")).unwrap_err();
        assert!(err.to_string().contains("does/not/exist.json"));
    }
}
