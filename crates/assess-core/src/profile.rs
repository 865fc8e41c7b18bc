use crate::types::Phase;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Version written into every saved profile. Files without the key were
/// produced before versioning and are read as version 1.
pub const SCHEMA_VERSION: u32 = 1;

// ---------------------------------------------------------------------------
// Organization basics
// ---------------------------------------------------------------------------

/// Single-select answers are kept as the raw option value. Values the form
/// does not offer still load; they are only skipped when drawn.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrganizationBasics {
    #[serde(default)]
    pub organization_name: String,
    #[serde(default)]
    pub organization_size: Option<String>,
    #[serde(default, deserialize_with = "string_or_number")]
    pub year_founded: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub is_remote: bool,
    #[serde(default)]
    pub identity: Vec<String>,
    #[serde(default)]
    pub legal_structure: Option<String>,
    #[serde(default)]
    pub funding_sources: Vec<String>,
}

/// A fully-formed basics record as captured from the form.
pub type BasicsInput = OrganizationBasics;

/// Older saves wrote the founding year as a bare number.
fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "yearFounded must be text or a number, got {other}"
        ))),
    }
}

// ---------------------------------------------------------------------------
// Phases
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phase1 {
    #[serde(default, alias = "theBasics")]
    pub organization_basics: Option<OrganizationBasics>,
    #[serde(default)]
    pub current_state: Option<Value>,
    #[serde(default)]
    pub future_state: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase2 {
    #[serde(default)]
    pub initiatives: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Phase3 {
    #[serde(default)]
    pub roadmap: Vec<Value>,
}

// ---------------------------------------------------------------------------
// Profile
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub phase1: Phase1,
    #[serde(default)]
    pub phase2: Phase2,
    #[serde(default)]
    pub phase3: Phase3,
}

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

impl Default for Profile {
    fn default() -> Self {
        Self::default_profile()
    }
}

impl Profile {
    /// A fresh profile with every phase empty. Each call builds new owned
    /// data, so mutating one instance never shows through another.
    pub fn default_profile() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            phase1: Phase1::default(),
            phase2: Phase2::default(),
            phase3: Phase3::default(),
        }
    }

    pub fn basics(&self) -> Option<&OrganizationBasics> {
        self.phase1.organization_basics.as_ref()
    }

    /// The organization name, trimmed, if one has been entered.
    pub fn organization_name(&self) -> Option<&str> {
        self.basics()
            .map(|b| b.organization_name.trim())
            .filter(|name| !name.is_empty())
    }

    /// Whether the data behind a phase step has been filled in.
    pub fn has_data_for(&self, phase: Phase) -> bool {
        match phase {
            Phase::Basics => self.phase1.organization_basics.is_some(),
            Phase::CurrentState => is_present(self.phase1.current_state.as_ref()),
            Phase::FutureState => is_present(self.phase1.future_state.as_ref()),
            Phase::Initiatives => !self.phase2.initiatives.is_empty(),
            Phase::Roadmap => !self.phase3.roadmap.is_empty(),
        }
    }
}

fn is_present(value: Option<&Value>) -> bool {
    !matches!(value, None | Some(Value::Null))
}
