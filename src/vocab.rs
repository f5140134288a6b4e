//! Fixed vocabulary emitted into issuance and exchange documents.
//!
//! These identifiers are part of the external interop contract and are
//! emitted verbatim, never derived or altered.

// Credential Manifest / Presentation Exchange envelope types
pub const CREDENTIAL_APPLICATION_TYPE_NAME: &str = "CredentialApplication";
pub const CREDENTIAL_RESPONSE_TYPE_NAME: &str = "CredentialResponse";
pub const PRESENTATION_SUBMISSION_TYPE_NAME: &str = "PresentationSubmission";

// Credential issuance / exchange
pub const CREDENTIAL_OFFER_TYPE_NAME: &str = "CredentialOffer";
pub const VERIFICATION_REQUEST_TYPE_NAME: &str = "VerificationRequest";

// Verifiable Credentials
pub const VERIFIABLE_CREDENTIAL_TYPE_NAME: &str = "VerifiableCredential";
pub const VERIFIABLE_PRESENTATION_TYPE_NAME: &str = "VerifiablePresentation";
pub const VC_CONTEXT_URI: &str = "https://www.w3.org/2018/credentials/v1";

// Trustify vocabulary
pub const TRUSTIFY_VOCAB_URI: &str = "https://trustify.id/identity/";

/// Credential Manifest specification version built manifests declare.
pub const CREDENTIAL_MANIFEST_SPEC_VERSION: &str =
    "https://identity.foundation/credential-manifest/spec/v1.0.0/";

/// Base URI under which attestation schemas are published. Output
/// descriptor schema URIs are `{base}/{type id}`.
pub const ATTESTATION_SCHEMA_BASE_URI: &str = "https://trustify.id/definitions/schemas/0.0.1";
