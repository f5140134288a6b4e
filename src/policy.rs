//! Policy facts derived from a manifest.

use crate::attestation::AttestationRegistry;
use crate::error::Error;
use crate::manifest::CredentialManifest;

/// Whether credentials issued against this manifest must be revocable.
///
/// The manifest does not carry the flag itself; it is re-derived from
/// the registered descriptor matching `output_descriptors[0]` by
/// schema URI or credential id. A manifest that matches no registered
/// type is an error, never a silent `false`.
pub fn requires_revocable_credentials(
    registry: &AttestationRegistry,
    manifest: &CredentialManifest,
) -> Result<bool, Error> {
    let output = manifest
        .output_descriptors
        .first()
        .ok_or_else(|| Error::UnknownAttestationType(manifest.id.clone()))?;
    let descriptor = registry
        .descriptor_for_output(&output.id, &output.schema)
        .ok_or_else(|| Error::UnknownAttestationType(output.id.clone()))?;
    Ok(descriptor.revocable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attestation::{registry, CREDIT_SCORE_ATTESTATION, KYC_AML_ATTESTATION};
    use crate::manifest::{build_manifest, Issuer};

    const ISSUER_DID: &str = "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";

    #[test]
    fn kyc_requires_revocable_credentials() {
        let manifest =
            build_manifest(registry(), KYC_AML_ATTESTATION, Issuer::new(ISSUER_DID)).unwrap();
        assert!(requires_revocable_credentials(registry(), &manifest).unwrap());
    }

    #[test]
    fn credit_score_does_not() {
        let manifest =
            build_manifest(registry(), CREDIT_SCORE_ATTESTATION, Issuer::new(ISSUER_DID))
                .unwrap();
        assert!(!requires_revocable_credentials(registry(), &manifest).unwrap());
    }

    #[test]
    fn tampered_schema_falls_back_to_credential_id() {
        let mut manifest =
            build_manifest(registry(), KYC_AML_ATTESTATION, Issuer::new(ISSUER_DID)).unwrap();
        manifest.output_descriptors[0].schema = "https://elsewhere.example/schema".to_string();
        assert!(requires_revocable_credentials(registry(), &manifest).unwrap());
    }

    #[test]
    fn unmatchable_manifest_is_an_error() {
        let mut manifest =
            build_manifest(registry(), KYC_AML_ATTESTATION, Issuer::new(ISSUER_DID)).unwrap();
        manifest.output_descriptors[0].schema = "https://elsewhere.example/schema".to_string();
        manifest.output_descriptors[0].id = "SomethingElse".to_string();
        let err = requires_revocable_credentials(registry(), &manifest).unwrap_err();
        assert!(matches!(err, Error::UnknownAttestationType(id) if id == "SomethingElse"));
    }

    #[test]
    fn manifest_without_output_descriptors_is_an_error() {
        let mut manifest =
            build_manifest(registry(), KYC_AML_ATTESTATION, Issuer::new(ISSUER_DID)).unwrap();
        manifest.output_descriptors.clear();
        let err = requires_revocable_credentials(registry(), &manifest).unwrap_err();
        assert!(matches!(err, Error::UnknownAttestationType(_)));
    }
}
