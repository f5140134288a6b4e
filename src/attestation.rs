//! Attestation types and their descriptor metadata.
//!
//! Everything manifest construction and policy inference need to know
//! about an attestation type lives in its [`AttestationDescriptor`]:
//! display text, wallet rendering hints, and the revocation policy.
//! Adding an attestation type is a new registry entry, never new
//! control flow at the call sites.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::vocab::ATTESTATION_SCHEMA_BASE_URI;

/// Type id of the KYC/AML attestation built into the registry.
pub const KYC_AML_ATTESTATION: &str = "KYCAMLAttestation";
/// Type id of the credit/reputation-score attestation built into the
/// registry.
pub const CREDIT_SCORE_ATTESTATION: &str = "CreditScoreAttestation";

/// Value type of a displayed credential property, rendered to the
/// property schema fragment of the output descriptor.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum PropertyValueType {
    String,
    Number,
    Boolean,
    DateTime,
}

/// One wallet-displayable property of an issued credential.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DescriptorProperty {
    pub label: String,
    /// Candidate paths into the issued credential, in order.
    pub path: Vec<String>,
    pub value_type: PropertyValueType,
}

/// Declarative description of an attestation type: the single source of
/// truth for both manifest construction and policy inference.
///
/// Manifest, credential and schema identifiers are not stored; they are
/// derived from `type_id`, so a descriptor cannot carry a free-form
/// schema URI.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AttestationDescriptor {
    /// Attestation type id, e.g. `KYCAMLAttestation`.
    pub type_id: String,
    /// Short display name, e.g. `KYC/AML`.
    pub display_name: String,
    /// One-line description of what the attestation asserts.
    pub description: String,
    /// Longer wallet-facing text for the credential display section.
    pub display_description: String,
    /// Candidate paths for the display subtitle, in order. First match
    /// wins, resolved by the consuming wallet.
    pub subtitle_paths: Vec<String>,
    /// Subtitle shown when none of the candidate paths resolve.
    pub subtitle_fallback: String,
    /// Displayed properties, in rendering order.
    pub properties: Vec<DescriptorProperty>,
    /// Whether credentials issued for this type must be revocable.
    pub revocable: bool,
}

impl AttestationDescriptor {
    // `KYCAMLAttestation` identifiers compose over `KYCAML`; a type id
    // without the suffix is its own prefix.
    fn id_prefix(&self) -> &str {
        self.type_id
            .strip_suffix("Attestation")
            .unwrap_or(&self.type_id)
    }

    /// Manifest id for this attestation type, e.g. `KYCAMLManifest`.
    pub fn manifest_id(&self) -> String {
        format!("{}Manifest", self.id_prefix())
    }

    /// Output descriptor id for this attestation type, e.g.
    /// `KYCAMLCredential`.
    pub fn credential_id(&self) -> String {
        format!("{}Credential", self.id_prefix())
    }

    /// Schema URI for this attestation type, derived from the fixed
    /// publication base.
    pub fn schema_uri(&self) -> String {
        format!("{}/{}", ATTESTATION_SCHEMA_BASE_URI, self.type_id)
    }
}

/// Registry of attestation types known to the issuance service.
#[derive(Debug, Clone, Default)]
pub struct AttestationRegistry {
    descriptors: BTreeMap<String, AttestationDescriptor>,
}

impl AttestationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an attestation type. A second registration for the
    /// same type id is a configuration error and is rejected, leaving
    /// the existing entry untouched.
    pub fn register(&mut self, descriptor: AttestationDescriptor) -> Result<(), Error> {
        if self.descriptors.contains_key(&descriptor.type_id) {
            return Err(Error::DuplicateAttestationType(descriptor.type_id));
        }
        self.descriptors
            .insert(descriptor.type_id.clone(), descriptor);
        Ok(())
    }

    pub fn get(&self, type_id: &str) -> Option<&AttestationDescriptor> {
        self.descriptors.get(type_id)
    }

    /// Resolves a type id, failing for types never registered.
    pub fn lookup(&self, type_id: &str) -> Result<&AttestationDescriptor, Error> {
        self.get(type_id)
            .ok_or_else(|| Error::UnknownAttestationType(type_id.to_string()))
    }

    /// Finds the descriptor a built output descriptor came from, by
    /// derived schema URI first, derived credential id second.
    pub fn descriptor_for_output(
        &self,
        credential_id: &str,
        schema: &str,
    ) -> Option<&AttestationDescriptor> {
        self.descriptors
            .values()
            .find(|descriptor| descriptor.schema_uri() == schema)
            .or_else(|| {
                self.descriptors
                    .values()
                    .find(|descriptor| descriptor.credential_id() == credential_id)
            })
    }

    pub fn type_ids(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    pub fn descriptors(&self) -> impl Iterator<Item = &AttestationDescriptor> {
        self.descriptors.values()
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

fn kyc_aml_descriptor() -> AttestationDescriptor {
    AttestationDescriptor {
        type_id: KYC_AML_ATTESTATION.to_string(),
        display_name: "KYC/AML".to_string(),
        description: "Attestation that the issuer has completed KYC/AML verification for this subject"
            .to_string(),
        display_description: "The KYC authority processes Know Your Customer and Anti-Money Laundering analysis, potentially employing a number of internal and external vendor providers."
            .to_string(),
        subtitle_paths: vec!["$.approvalDate".to_string(), "$.vc.approvalDate".to_string()],
        subtitle_fallback: "Includes date of approval".to_string(),
        properties: vec![
            DescriptorProperty {
                label: "Process".to_string(),
                path: vec!["$.KYCAMLAttestation.process".to_string()],
                value_type: PropertyValueType::String,
            },
            DescriptorProperty {
                label: "Approved At".to_string(),
                path: vec!["$.KYCAMLAttestation.approvalDate".to_string()],
                value_type: PropertyValueType::DateTime,
            },
        ],
        revocable: true,
    }
}

fn credit_score_descriptor() -> AttestationDescriptor {
    AttestationDescriptor {
        type_id: CREDIT_SCORE_ATTESTATION.to_string(),
        display_name: "Credit Score".to_string(),
        description: "Attestation that the issuer has performed a Reputation Score check for this subject"
            .to_string(),
        display_description: "The Reputation Score authority processes credit worthiness analysis, potentially employing a number of internal and external vendor providers."
            .to_string(),
        subtitle_paths: vec!["$.CreditScoreAttestation.scoreType".to_string()],
        subtitle_fallback: "Includes reputation score".to_string(),
        properties: vec![
            DescriptorProperty {
                label: "Score".to_string(),
                path: vec!["$.CreditScoreAttestation.score".to_string()],
                value_type: PropertyValueType::Number,
            },
            DescriptorProperty {
                label: "Score Type".to_string(),
                path: vec!["$.CreditScoreAttestation.scoreType".to_string()],
                value_type: PropertyValueType::String,
            },
            DescriptorProperty {
                label: "Provider".to_string(),
                path: vec!["$.CreditScoreAttestation.provider".to_string()],
                value_type: PropertyValueType::String,
            },
        ],
        revocable: false,
    }
}

lazy_static::lazy_static! {
    static ref REGISTRY: AttestationRegistry = {
        let mut registry = AttestationRegistry::new();
        registry.register(kyc_aml_descriptor()).unwrap();
        registry.register(credit_score_descriptor()).unwrap();
        registry
    };
}

/// The process-wide registry, populated with the built-in attestation
/// types before any reader can observe it and read-only thereafter.
pub fn registry() -> &'static AttestationRegistry {
    &REGISTRY
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom_descriptor(type_id: &str) -> AttestationDescriptor {
        AttestationDescriptor {
            type_id: type_id.to_string(),
            display_name: "Custom".to_string(),
            description: "A custom check".to_string(),
            display_description: "Custom check details.".to_string(),
            subtitle_paths: vec![],
            subtitle_fallback: "Custom".to_string(),
            properties: vec![],
            revocable: false,
        }
    }

    #[test]
    fn builtin_registry_contents() {
        let registry = registry();
        assert_eq!(registry.len(), 2);
        assert!(registry.lookup(KYC_AML_ATTESTATION).unwrap().revocable);
        assert!(!registry.lookup(CREDIT_SCORE_ATTESTATION).unwrap().revocable);
        assert_eq!(
            registry.type_ids().collect::<Vec<_>>(),
            vec![CREDIT_SCORE_ATTESTATION, KYC_AML_ATTESTATION]
        );
    }

    #[test]
    fn lookup_unknown_type() {
        let err = registry().lookup("PassportAttestation").unwrap_err();
        assert!(matches!(err, Error::UnknownAttestationType(id) if id == "PassportAttestation"));
    }

    #[test]
    fn register_rejects_duplicate() {
        let mut registry = AttestationRegistry::new();
        registry.register(custom_descriptor("CustomAttestation")).unwrap();
        let err = registry
            .register(custom_descriptor("CustomAttestation"))
            .unwrap_err();
        assert!(matches!(err, Error::DuplicateAttestationType(_)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn derived_identifiers() {
        let descriptor = registry().lookup(KYC_AML_ATTESTATION).unwrap();
        assert_eq!(descriptor.manifest_id(), "KYCAMLManifest");
        assert_eq!(descriptor.credential_id(), "KYCAMLCredential");
        assert_eq!(
            descriptor.schema_uri(),
            "https://trustify.id/definitions/schemas/0.0.1/KYCAMLAttestation"
        );
    }

    #[test]
    fn derived_identifiers_without_suffix() {
        let descriptor = custom_descriptor("CustomCheck");
        assert_eq!(descriptor.manifest_id(), "CustomCheckManifest");
        assert_eq!(descriptor.credential_id(), "CustomCheckCredential");
    }

    #[test]
    fn reverse_lookup_by_schema_then_credential_id() {
        let registry = registry();
        let kyc = registry.lookup(KYC_AML_ATTESTATION).unwrap();

        let by_schema = registry
            .descriptor_for_output("SomethingElse", &kyc.schema_uri())
            .unwrap();
        assert_eq!(by_schema.type_id, KYC_AML_ATTESTATION);

        let by_credential_id = registry
            .descriptor_for_output(&kyc.credential_id(), "https://elsewhere.example/schema")
            .unwrap();
        assert_eq!(by_credential_id.type_id, KYC_AML_ATTESTATION);

        assert!(registry
            .descriptor_for_output("SomethingElse", "https://elsewhere.example/schema")
            .is_none());
    }
}
