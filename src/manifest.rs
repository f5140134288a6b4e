//! Credential Manifest documents: construction and structural
//! validation.
//!
//! A [Credential Manifest] describes what an issuer offers (output
//! descriptors with wallet display hints) and what it requires from
//! the holder (an embedded presentation definition). Manifests are
//! composed from registered [`AttestationDescriptor`] metadata and are
//! value objects: built fresh per call, never mutated afterwards.
//!
//! [Credential Manifest]: https://identity.foundation/credential-manifest/

use std::collections::HashMap as Map;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::attestation::{AttestationDescriptor, AttestationRegistry, PropertyValueType};
use crate::did;
use crate::error::Error;
use crate::path::has_paths;
use crate::presentation::{
    proof_of_control_presentation_definition, ClaimFormat, JwtFormat, PresentationDefinition,
};
use crate::vocab::CREDENTIAL_MANIFEST_SPEC_VERSION;

/// Issuing entity as embedded in a manifest: a DID plus optional
/// display properties to assist identity wallets rendering the
/// interaction.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Issuer {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub property_set: Option<Map<String, Value>>,
}

impl Issuer {
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_string(),
            name: None,
            property_set: None,
        }
    }

    pub fn with_name(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: Some(name.to_string()),
            property_set: None,
        }
    }
}

/// A Credential Manifest document.
///
/// `format` and `presentation_definition` are optional in the wire
/// format; the builder always populates both.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CredentialManifest {
    pub id: String,
    pub spec_version: String,
    pub issuer: Issuer,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<ClaimFormat>,
    pub output_descriptors: Vec<OutputDescriptor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub presentation_definition: Option<PresentationDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub property_set: Option<Map<String, Value>>,
}

/// Shape and display of one credential type the issuer offers.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct OutputDescriptor {
    pub id: String,
    pub schema: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display: Option<DataDisplay>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub styles: Option<Map<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    #[serde(flatten)]
    pub property_set: Option<Map<String, Value>>,
}

/// How a wallet should render the issued credential.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
pub struct DataDisplay {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<DisplayMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<DisplayMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<DisplayMapping>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<Vec<LabeledDisplayMapping>>,
}

/// A display value: literal text, or an ordered list of candidate
/// paths into the credential with an optional fallback. First match
/// wins; evaluation is the consuming wallet's job.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum DisplayMapping {
    Text {
        text: String,
    },
    Paths {
        path: Vec<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        fallback: Option<String>,
    },
}

impl DisplayMapping {
    pub fn text(text: &str) -> Self {
        Self::Text {
            text: text.to_string(),
        }
    }

    pub fn paths(path: &[String], fallback: &str) -> Self {
        Self::Paths {
            path: path.to_vec(),
            fallback: Some(fallback.to_string()),
        }
    }
}

/// A labeled display value with its property schema fragment.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct LabeledDisplayMapping {
    pub label: String,
    pub path: Vec<String>,
    pub schema: PropertySchema,
}

/// Schema fragment for a displayed value, e.g. `{"type": "string",
/// "format": "date-time"}`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PropertySchema {
    #[serde(rename = "type")]
    pub type_: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

impl PropertySchema {
    pub fn of(value_type: PropertyValueType) -> Self {
        let (type_, format) = match value_type {
            PropertyValueType::String => ("string", None),
            PropertyValueType::Number => ("number", None),
            PropertyValueType::Boolean => ("boolean", None),
            PropertyValueType::DateTime => ("string", Some("date-time")),
        };
        Self {
            type_: type_.to_string(),
            format: format.map(str::to_string),
        }
    }
}

fn output_descriptor(descriptor: &AttestationDescriptor) -> OutputDescriptor {
    let title = format!("{} Attestation", descriptor.display_name);
    let display = DataDisplay {
        title: Some(DisplayMapping::text(&title)),
        subtitle: Some(DisplayMapping::paths(
            &descriptor.subtitle_paths,
            &descriptor.subtitle_fallback,
        )),
        description: Some(DisplayMapping::text(&descriptor.display_description)),
        properties: Some(
            descriptor
                .properties
                .iter()
                .map(|property| LabeledDisplayMapping {
                    label: property.label.clone(),
                    path: property.path.clone(),
                    schema: PropertySchema::of(property.value_type),
                })
                .collect(),
        ),
    };
    OutputDescriptor {
        id: descriptor.credential_id(),
        schema: descriptor.schema_uri(),
        name: Some(title),
        description: Some(descriptor.description.clone()),
        display: Some(display),
        styles: Some(Map::new()),
        property_set: None,
    }
}

/// Builds the Credential Manifest for a registered attestation type.
///
/// Identical inputs yield equal documents. Fails for a type id that
/// was never registered and for an issuer id that is not a
/// syntactically valid DID.
pub fn build_manifest(
    registry: &AttestationRegistry,
    type_id: &str,
    issuer: Issuer,
) -> Result<CredentialManifest, Error> {
    let descriptor = registry.lookup(type_id)?;
    did::validate(&issuer.id).map_err(|e| Error::InvalidIssuer(issuer.id.clone(), e))?;

    Ok(CredentialManifest {
        id: descriptor.manifest_id(),
        spec_version: CREDENTIAL_MANIFEST_SPEC_VERSION.to_string(),
        issuer,
        format: Some(ClaimFormat {
            jwt_vc: Some(JwtFormat::eddsa()),
            jwt_vp: Some(JwtFormat::eddsa()),
        }),
        output_descriptors: vec![output_descriptor(descriptor)],
        presentation_definition: Some(proof_of_control_presentation_definition()),
        property_set: None,
    })
}

/// Paths every Credential Manifest must resolve, whatever else it
/// carries.
pub const REQUIRED_MANIFEST_PATHS: [&str; 6] = [
    "id",
    "spec_version",
    "issuer.id",
    "output_descriptors[0]",
    "output_descriptors[0].id",
    "output_descriptors[0].schema",
];

/// Checks a candidate document against the bare-minimum Credential
/// Manifest shape. Optional sections (`format`,
/// `presentation_definition`) may be absent; a candidate that is not
/// an object is simply `false`.
pub fn validate_manifest_format(candidate: &Value) -> bool {
    has_paths(candidate, &REQUIRED_MANIFEST_PATHS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attestation::{registry, CREDIT_SCORE_ATTESTATION, KYC_AML_ATTESTATION};
    use serde_json::json;

    const ISSUER_DID: &str = "did:key:z6MkiTBz1ymuepAQ4HEHYSF1H8quG5GLVVQR3djdX3mDooWp";

    fn kyc_manifest() -> CredentialManifest {
        build_manifest(
            registry(),
            KYC_AML_ATTESTATION,
            Issuer::with_name(ISSUER_DID, "Issuer Inc."),
        )
        .unwrap()
    }

    #[test]
    fn builds_kyc_manifest() {
        let manifest = kyc_manifest();
        assert_eq!(manifest.id, "KYCAMLManifest");
        assert_eq!(
            manifest.spec_version,
            "https://identity.foundation/credential-manifest/spec/v1.0.0/"
        );
        assert_eq!(manifest.issuer.id, ISSUER_DID);

        let output = &manifest.output_descriptors[0];
        assert_eq!(output.id, "KYCAMLCredential");
        assert!(output.schema.ends_with("/KYCAMLAttestation"));
        assert_eq!(output.styles, Some(Map::new()));

        let format = manifest.format.as_ref().unwrap();
        assert!(format.jwt_vc.as_ref().unwrap().alg.contains(&"EdDSA".to_string()));
        assert!(format.jwt_vp.as_ref().unwrap().alg.contains(&"EdDSA".to_string()));
    }

    #[test]
    fn display_follows_descriptor_order() {
        let manifest = kyc_manifest();
        let display = manifest.output_descriptors[0].display.as_ref().unwrap();

        assert_eq!(display.title, Some(DisplayMapping::text("KYC/AML Attestation")));
        assert_eq!(
            display.subtitle,
            Some(DisplayMapping::Paths {
                path: vec!["$.approvalDate".to_string(), "$.vc.approvalDate".to_string()],
                fallback: Some("Includes date of approval".to_string()),
            })
        );

        let properties = display.properties.as_ref().unwrap();
        let labels: Vec<_> = properties.iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["Process", "Approved At"]);
        assert_eq!(
            properties[1].schema,
            PropertySchema {
                type_: "string".to_string(),
                format: Some("date-time".to_string()),
            }
        );
    }

    #[test]
    fn build_is_deterministic() {
        let first = kyc_manifest();
        let second = kyc_manifest();
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_value(&first).unwrap(),
            serde_json::to_value(&second).unwrap()
        );
    }

    #[test]
    fn build_unknown_type() {
        let err = build_manifest(registry(), "PassportAttestation", Issuer::new(ISSUER_DID))
            .unwrap_err();
        assert!(matches!(err, Error::UnknownAttestationType(_)));
    }

    #[test]
    fn build_invalid_issuer() {
        let err = build_manifest(
            registry(),
            KYC_AML_ATTESTATION,
            Issuer::new("not-a-did"),
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidIssuer(id, _) if id == "not-a-did"));
    }

    #[test]
    fn built_manifests_validate() {
        for type_id in registry().type_ids() {
            let manifest =
                build_manifest(registry(), type_id, Issuer::new(ISSUER_DID)).unwrap();
            let value = serde_json::to_value(&manifest).unwrap();
            assert!(validate_manifest_format(&value), "{type_id} manifest invalid");
        }
    }

    #[test]
    fn optional_sections_may_be_absent() {
        let mut value = serde_json::to_value(kyc_manifest()).unwrap();
        let object = value.as_object_mut().unwrap();
        object.remove("format");
        object.remove("presentation_definition");
        assert!(validate_manifest_format(&value));
    }

    #[test]
    fn missing_required_keys_rejected() {
        let complete = serde_json::to_value(kyc_manifest()).unwrap();
        for key in ["id", "spec_version", "issuer", "output_descriptors"] {
            let mut value = complete.clone();
            value.as_object_mut().unwrap().remove(key);
            assert!(!validate_manifest_format(&value), "valid without {key}");
        }
    }

    #[test]
    fn non_object_candidates_rejected() {
        assert!(!validate_manifest_format(&json!(null)));
        assert!(!validate_manifest_format(&json!("KYCAMLManifest")));
        assert!(!validate_manifest_format(&json!([])));
    }

    #[test]
    fn empty_output_descriptors_rejected() {
        let mut value = serde_json::to_value(kyc_manifest()).unwrap();
        value["output_descriptors"] = json!([]);
        assert!(!validate_manifest_format(&value));
    }

    #[test]
    fn display_mapping_forms() {
        assert_eq!(
            serde_json::to_value(DisplayMapping::text("KYC/AML Attestation")).unwrap(),
            json!({ "text": "KYC/AML Attestation" })
        );
        let mapping: DisplayMapping = serde_json::from_value(json!({
            "path": ["$.approvalDate"],
            "fallback": "Includes date of approval"
        }))
        .unwrap();
        assert!(matches!(mapping, DisplayMapping::Paths { .. }));
    }

    #[test]
    fn credit_score_manifest_ids() {
        let manifest = build_manifest(
            registry(),
            CREDIT_SCORE_ATTESTATION,
            Issuer::new(ISSUER_DID),
        )
        .unwrap();
        assert_eq!(manifest.id, "CreditScoreManifest");
        assert_eq!(manifest.output_descriptors[0].id, "CreditScoreCredential");
    }
}
