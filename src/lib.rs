//! Construction and validation of [Credential Manifest] documents for
//! the trustify issuance service.
//!
//! A manifest describes what an issuer offers (output descriptors with
//! wallet display hints) and what it requires from the holder: an
//! embedded [Presentation Exchange] definition proving control of the
//! DID the credential will be issued to. Manifests are composed from
//! declarative [`AttestationDescriptor`] metadata held in an
//! [`AttestationRegistry`], so supporting a new attestation type is a
//! registry entry rather than new code. Structural validation is
//! path-based ([`has_paths`]), not full JSON Schema.
//!
//! [Credential Manifest]: https://identity.foundation/credential-manifest/
//! [Presentation Exchange]: https://identity.foundation/presentation-exchange/
//!
//! ```
//! use trustify_manifest::{
//!     build_manifest, registry, requires_revocable_credentials, validate_manifest_format,
//!     Issuer, KYC_AML_ATTESTATION,
//! };
//!
//! let issuer = Issuer::with_name(
//!     "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp",
//!     "Issuer Inc.",
//! );
//! let manifest = build_manifest(registry(), KYC_AML_ATTESTATION, issuer)?;
//! assert_eq!(manifest.id, "KYCAMLManifest");
//!
//! let value = serde_json::to_value(&manifest)?;
//! assert!(validate_manifest_format(&value));
//! assert!(requires_revocable_credentials(registry(), &manifest)?);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod attestation;
pub mod did;
pub mod error;
pub mod manifest;
pub mod path;
pub mod policy;
pub mod presentation;
pub mod vocab;

pub use attestation::{
    registry, AttestationDescriptor, AttestationRegistry, DescriptorProperty, PropertyValueType,
    CREDIT_SCORE_ATTESTATION, KYC_AML_ATTESTATION,
};
pub use error::Error;
pub use manifest::{
    build_manifest, validate_manifest_format, CredentialManifest, DataDisplay, DisplayMapping,
    Issuer, LabeledDisplayMapping, OutputDescriptor, PropertySchema, REQUIRED_MANIFEST_PATHS,
};
pub use path::{has_paths, resolve_path};
pub use policy::requires_revocable_credentials;
pub use presentation::{
    proof_of_control_presentation_definition, ClaimFormat, ConstraintField, InputConstraints,
    InputDescriptor, JwtFormat, PresentationDefinition,
    PROOF_OF_CONTROL_PRESENTATION_DEFINITION_ID,
};
