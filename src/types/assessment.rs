//! Assessment records produced by the advice service
//!
//! The model replies with `shouldSeeDoctor` as either a boolean or the name
//! of a specialist. That field is decoded into [`Referral`] at the boundary
//! so nothing past deserialization has to inspect a `bool | string`.

use serde::de::Deserializer;
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Structured health guidance for one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assessment {
    /// Short description of the likely issue
    pub issue: String,

    /// Free-form urgency label, usually "Low", "Medium" or "High"
    pub urgency: String,

    /// What the user should do next
    pub advice: String,

    /// Whether, and whom, the user should see
    #[serde(rename = "shouldSeeDoctor", default)]
    pub referral: Referral,
}

impl Assessment {
    /// Build the Hindi record from translated `issue` and `advice`.
    ///
    /// `urgency` and `referral` are carried over untouched.
    pub fn with_translation(&self, issue: String, advice: String) -> Self {
        Self {
            issue,
            urgency: self.urgency.clone(),
            advice,
            referral: self.referral.clone(),
        }
    }

    /// Styling class of the urgency label
    pub fn urgency_level(&self) -> UrgencyLevel {
        UrgencyLevel::classify(&self.urgency)
    }
}

/// Recommendation to see a doctor
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Referral {
    /// Nothing suggests a visit is needed
    #[default]
    NoReferral,

    /// See a doctor, no particular specialty
    GenericReferral,

    /// See the named specialist
    SpecialistReferral(String),
}

impl Referral {
    pub fn is_referral(&self) -> bool {
        !matches!(self, Referral::NoReferral)
    }

    pub fn specialist(&self) -> Option<&str> {
        match self {
            Referral::SpecialistReferral(name) => Some(name),
            _ => None,
        }
    }
}

/// Wire shape of `shouldSeeDoctor`
#[derive(Deserialize)]
#[serde(untagged)]
enum ReferralWire {
    Flag(bool),
    Named(String),
}

impl From<Option<ReferralWire>> for Referral {
    fn from(wire: Option<ReferralWire>) -> Self {
        match wire {
            Some(ReferralWire::Flag(true)) => Referral::GenericReferral,
            Some(ReferralWire::Named(name)) if !name.trim().is_empty() => {
                Referral::SpecialistReferral(name.trim().to_string())
            }
            _ => Referral::NoReferral,
        }
    }
}

impl<'de> Deserialize<'de> for Referral {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<ReferralWire>::deserialize(deserializer).map(Referral::from)
    }
}

impl Serialize for Referral {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Referral::NoReferral => serializer.serialize_bool(false),
            Referral::GenericReferral => serializer.serialize_bool(true),
            Referral::SpecialistReferral(name) => serializer.serialize_str(name),
        }
    }
}

/// Urgency bucket used to pick a color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UrgencyLevel {
    Low,
    Medium,
    High,
    Unknown,
}

impl UrgencyLevel {
    /// Case-insensitive match on the leading word of the label
    pub fn classify(label: &str) -> Self {
        let normalized = label.trim().to_ascii_lowercase();
        let head = normalized.split_whitespace().next().unwrap_or("");
        match head {
            "low" => UrgencyLevel::Low,
            "medium" | "moderate" => UrgencyLevel::Medium,
            "high" | "urgent" | "emergency" => UrgencyLevel::High,
            _ => UrgencyLevel::Unknown,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> Assessment {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_specialist_referral_from_string() {
        let a = decode(json!({
            "issue": "Chest pain",
            "urgency": "High",
            "advice": "Rest and seek care.",
            "shouldSeeDoctor": "Cardiologist"
        }));
        assert_eq!(a.referral, Referral::SpecialistReferral("Cardiologist".to_string()));
        assert_eq!(a.referral.specialist(), Some("Cardiologist"));
    }

    #[test]
    fn test_generic_referral_from_true() {
        let a = decode(json!({
            "issue": "Fever",
            "urgency": "Medium",
            "advice": "Hydrate.",
            "shouldSeeDoctor": true
        }));
        assert_eq!(a.referral, Referral::GenericReferral);
        assert!(a.referral.is_referral());
    }

    #[test]
    fn test_no_referral_variants() {
        for value in [json!(false), json!(""), json!("   "), serde_json::Value::Null] {
            let a = decode(json!({
                "issue": "Cold",
                "urgency": "Low",
                "advice": "Sleep.",
                "shouldSeeDoctor": value
            }));
            assert_eq!(a.referral, Referral::NoReferral);
        }
    }

    #[test]
    fn test_missing_referral_defaults() {
        let a = decode(json!({ "issue": "Cold", "urgency": "Low", "advice": "Sleep." }));
        assert_eq!(a.referral, Referral::NoReferral);
        assert!(!a.referral.is_referral());
    }

    #[test]
    fn test_referral_serializes_to_wire_shape() {
        assert_eq!(serde_json::to_value(Referral::NoReferral).unwrap(), json!(false));
        assert_eq!(serde_json::to_value(Referral::GenericReferral).unwrap(), json!(true));
        assert_eq!(
            serde_json::to_value(Referral::SpecialistReferral("ENT".to_string())).unwrap(),
            json!("ENT")
        );
    }

    #[test]
    fn test_with_translation_keeps_urgency_and_referral() {
        let original = Assessment {
            issue: "Headache".to_string(),
            urgency: "Low".to_string(),
            advice: "Drink water.".to_string(),
            referral: Referral::SpecialistReferral("Neurologist".to_string()),
        };
        let hindi = original.with_translation("सिरदर्द".to_string(), "पानी पिएं।".to_string());
        assert_eq!(hindi.issue, "सिरदर्द");
        assert_eq!(hindi.advice, "पानी पिएं।");
        assert_eq!(hindi.urgency, original.urgency);
        assert_eq!(hindi.referral, original.referral);
    }

    #[test]
    fn test_urgency_classification() {
        assert_eq!(UrgencyLevel::classify("Low"), UrgencyLevel::Low);
        assert_eq!(UrgencyLevel::classify("  MEDIUM "), UrgencyLevel::Medium);
        assert_eq!(UrgencyLevel::classify("high - go now"), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::classify("Emergency"), UrgencyLevel::High);
        assert_eq!(UrgencyLevel::classify(""), UrgencyLevel::Unknown);
        assert_eq!(UrgencyLevel::classify("whenever"), UrgencyLevel::Unknown);
    }
}
