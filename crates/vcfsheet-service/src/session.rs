//! Parsed uploads parked on disk between the upload and convert steps.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use vcfsheet_rfc::rfc::vcard::{ContactRecord, FieldGroups, ParsedDocument};

use crate::error::{ServiceError, ServiceResult};

/// What an upload leaves behind for the preview and convert steps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionData {
    /// Sanitized name of the uploaded file.
    pub filename: String,
    pub contacts: Vec<ContactRecord>,
    /// Every field name, sorted.
    pub all_fields: Vec<String>,
    /// Field names bucketed into presentation groups.
    pub field_suggestions: FieldGroups,
}

impl SessionData {
    #[must_use]
    pub fn from_document(filename: impl Into<String>, doc: ParsedDocument) -> Self {
        Self {
            filename: filename.into(),
            all_fields: doc.fields.to_sorted_vec(),
            field_suggestions: doc.groups,
            contacts: doc.contacts,
        }
    }

    /// The first `limit` contacts.
    #[must_use]
    pub fn preview(&self, limit: usize) -> &[ContactRecord] {
        &self.contacts[..limit.min(self.contacts.len())]
    }
}

/// JSON-file session store, one `<uuid>.json` per session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    dir: PathBuf,
}

impl SessionStore {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, id: Uuid) -> PathBuf {
        self.dir.join(format!("{id}.json"))
    }

    /// Only canonical UUIDs name a session; anything else never touches the filesystem.
    fn parse_id(raw: &str) -> ServiceResult<Uuid> {
        Uuid::parse_str(raw).map_err(|_err| ServiceError::SessionNotFound(raw.to_string()))
    }

    /// ## Summary
    /// Persists `data` under a fresh session id.
    ///
    /// ## Errors
    /// Returns an error if serialization or the file write fails.
    #[tracing::instrument(skip_all, fields(filename = %data.filename, contacts = data.contacts.len()))]
    pub async fn create(&self, data: &SessionData) -> ServiceResult<Uuid> {
        let id = Uuid::new_v4();
        let json = serde_json::to_vec_pretty(data)?;
        tokio::fs::write(self.path_for(id), json).await?;

        tracing::info!(session_id = %id, "Session created");
        Ok(id)
    }

    /// ## Summary
    /// Loads a session by its id string.
    ///
    /// ## Errors
    /// Returns `ServiceError::SessionNotFound` for malformed or unknown ids,
    /// and I/O or JSON errors for unreadable session files.
    #[tracing::instrument(skip(self))]
    pub async fn load(&self, raw_id: &str) -> ServiceResult<SessionData> {
        let id = Self::parse_id(raw_id)?;

        let bytes = match tokio::fs::read(self.path_for(id)).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!("Session file missing");
                return Err(ServiceError::SessionNotFound(raw_id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// ## Summary
    /// Deletes a session. Removing an unknown session is not an error.
    ///
    /// ## Errors
    /// Returns an error if the id is malformed or the file cannot be removed.
    #[tracing::instrument(skip(self))]
    pub async fn remove(&self, raw_id: &str) -> ServiceResult<()> {
        let id = Self::parse_id(raw_id)?;

        match tokio::fs::remove_file(self.path_for(id)).await {
            Ok(()) => {
                tracing::debug!("Session removed");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
