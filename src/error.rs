use thiserror::Error;

/// Error type for `trustify-manifest`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// Attestation type id not present in the registry
    #[error("Unknown attestation type: {0}")]
    UnknownAttestationType(String),
    /// Attestation type id registered twice
    #[error("Attestation type already registered: {0}")]
    DuplicateAttestationType(String),
    /// Issuer id is not a syntactically valid DID
    #[error("Invalid issuer DID `{0}`: {1}")]
    InvalidIssuer(String, #[source] crate::did::InvalidDid),
}
