//! Presentation Exchange documents.
//!
//! The subset of [Presentation Exchange] a manifest embeds: a
//! presentation definition with input descriptors and constraint
//! fields, plus the claim format designations shared with the manifest
//! itself.
//!
//! [Presentation Exchange]: https://identity.foundation/presentation-exchange/

use std::collections::HashMap as Map;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Id of the fixed presentation definition embedded in every built
/// manifest.
pub const PROOF_OF_CONTROL_PRESENTATION_DEFINITION_ID: &str =
    "ProofOfControlPresentationDefinition";

/// Claim format designations supported by an issuer or verifier.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct ClaimFormat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_vc: Option<JwtFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jwt_vp: Option<JwtFormat>,
}

/// Accepted algorithms for a JWT claim format entry.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct JwtFormat {
    pub alg: Vec<String>,
}

impl JwtFormat {
    /// Format entry for EdDSA-signed JWTs, the only algorithm the
    /// issuance service signs with.
    pub fn eddsa() -> Self {
        Self {
            alg: vec!["EdDSA".to_string()],
        }
    }
}

/// What proofs a verifier or issuer requires from a credential holder.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PresentationDefinition {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ClaimFormat>,
    pub input_descriptors: Vec<InputDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub property_set: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct InputDescriptor {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<InputConstraints>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub property_set: Option<Map<String, Value>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct InputConstraints {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fields: Option<Vec<ConstraintField>>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct ConstraintField {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub path: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub purpose: Option<String>,
}

/// The presentation definition embedded in every built manifest,
/// requiring the holder to prove control of the DID the credential
/// will be issued to.
///
/// Returns a fresh owned value each call; manifests must be
/// independently serializable and no shared instance exists to mutate.
pub fn proof_of_control_presentation_definition() -> PresentationDefinition {
    PresentationDefinition {
        id: PROOF_OF_CONTROL_PRESENTATION_DEFINITION_ID.to_string(),
        format: Some(ClaimFormat {
            jwt_vc: None,
            jwt_vp: Some(JwtFormat::eddsa()),
        }),
        input_descriptors: vec![InputDescriptor {
            id: "proofOfIdentifierControlVP".to_string(),
            name: Some("Proof of Control Verifiable Presentation".to_string()),
            purpose: Some(
                "A Verifiable Presentation establishing proof of identifier control over the DID."
                    .to_string(),
            ),
            constraints: Some(InputConstraints {
                fields: Some(vec![ConstraintField {
                    id: Some("holder".to_string()),
                    path: vec!["$.holder".to_string()],
                    purpose: Some(
                        "The VP should contain a DID in the holder, which is the same DID that signs the VP. This DID will be used as the subject of the issued VC."
                            .to_string(),
                    ),
                }]),
            }),
            property_set: None,
        }],
        property_set: None,
    }
}
