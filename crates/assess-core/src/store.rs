use crate::error::{AssessError, Result};
use crate::profile::{BasicsInput, Profile, SCHEMA_VERSION};
use serde_json::Value;

/// Holds the single current profile.
///
/// The profile is only ever swapped wholesale (`reset`, `replace`) or has its
/// basics record overwritten (`commit_basics`). `revision` increases on every
/// change so a renderer can tell whether what it last drew is stale.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    current: Profile,
    revision: u64,
}

impl Default for ProfileStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore {
    pub fn new() -> Self {
        Self::with_profile(Profile::default_profile())
    }

    pub fn with_profile(profile: Profile) -> Self {
        Self {
            current: profile,
            revision: 0,
        }
    }

    pub fn get(&self) -> &Profile {
        &self.current
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn reset(&mut self) {
        self.current = Profile::default_profile();
        self.bump();
        tracing::debug!(revision = self.revision, "profile reset to default");
    }

    /// Validate `candidate` as a profile and, only if it passes, make it the
    /// current one. On error the current profile is left exactly as it was.
    pub fn replace(&mut self, candidate: Value) -> Result<()> {
        let profile = validate_candidate(candidate)?;
        self.current = profile;
        self.bump();
        tracing::debug!(revision = self.revision, "profile replaced");
        Ok(())
    }

    /// Overwrite the basics record with `input`. Fields from an earlier
    /// commit never survive into the new record.
    pub fn commit_basics(&mut self, input: BasicsInput) {
        self.current.phase1.organization_basics = Some(input);
        self.bump();
        tracing::debug!(revision = self.revision, "basics committed");
    }

    fn bump(&mut self) {
        self.revision += 1;
    }
}

fn validate_candidate(candidate: Value) -> Result<Profile> {
    let Some(obj) = candidate.as_object() else {
        return Err(AssessError::Schema(format!(
            "expected a JSON object at the top level, found {}",
            kind_of(&candidate)
        )));
    };
    match obj.get("phase1") {
        Some(Value::Object(_)) => {}
        Some(other) => {
            return Err(AssessError::Schema(format!(
                "'phase1' must be an object, found {}",
                kind_of(other)
            )))
        }
        None => return Err(AssessError::Schema("missing 'phase1' section".to_string())),
    }
    if let Some(version) = obj.get("schemaVersion") {
        match version.as_u64() {
            Some(v) if v <= u64::from(SCHEMA_VERSION) && v > 0 => {}
            Some(v) => {
                return Err(AssessError::Schema(format!(
                    "unsupported schemaVersion {v} (this build reads up to {SCHEMA_VERSION})"
                )))
            }
            None => {
                return Err(AssessError::Schema(
                    "'schemaVersion' must be a positive integer".to_string(),
                ))
            }
        }
    }
    serde_json::from_value(candidate).map_err(|e| AssessError::Schema(e.to_string()))
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
