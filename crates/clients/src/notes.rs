use crate::wire::NoteWire;
use crate::{Fetched, ServiceEndpoint};
use async_trait::async_trait;
use mediscreen_core::constants::NOTES_BY_PATIENT_PATH;
use mediscreen_core::{Collaborator, CoreResult, Note, NotesRepository};
use std::time::Duration;

/// Clinical notes store reached over HTTP.
///
/// `GET {base}/notes/patient/{id}` returns the patient's notes. The store answers 404 for a
/// patient it holds no notes for, which is read as an empty collection.
#[derive(Clone, Debug)]
pub struct HttpNotesRepository {
    endpoint: ServiceEndpoint,
}

impl HttpNotesRepository {
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new(Collaborator::Notes, base_url, timeout)?,
        })
    }
}

#[async_trait]
impl NotesRepository for HttpNotesRepository {
    async fn notes_for_patient(&self, patient_id: &str) -> CoreResult<Vec<Note>> {
        let Some(url) = self.endpoint.url(NOTES_BY_PATIENT_PATH, &[patient_id]) else {
            return Ok(Vec::new());
        };
        let notes = match self.endpoint.get_json::<Vec<NoteWire>>(url).await? {
            Fetched::Found(wires) => wires.into_iter().map(Note::from).collect(),
            Fetched::Missing => Vec::new(),
        };
        Ok(notes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn_stub};
    use axum::extract::Path;
    use axum::http::StatusCode;
    use axum::response::IntoResponse;
    use axum::routing::get;
    use axum::{Json, Router};
    use mediscreen_core::AssessmentError;
    use serde_json::json;

    async fn notes_by_patient(Path(id): Path<String>) -> impl IntoResponse {
        match id.as_str() {
            "3" => Json(json!([
                {"id": "a1", "patientId": 3, "note": "Smoker, Abnormal cholesterol",
                 "creationDate": "2024-01-05"},
                {"id": "a2", "patientId": 3, "note": "Dizziness reported"},
            ]))
            .into_response(),
            "8" => Json(json!([])).into_response(),
            "503" => StatusCode::SERVICE_UNAVAILABLE.into_response(),
            _ => StatusCode::NOT_FOUND.into_response(),
        }
    }

    async fn repository() -> HttpNotesRepository {
        let router = Router::new()
            .route("/notes/patient", get(|| async { StatusCode::INTERNAL_SERVER_ERROR }))
            .route("/notes/patient/:id", get(notes_by_patient));
        let base = spawn_stub(router).await;
        HttpNotesRepository::new(&base, Duration::from_secs(2)).unwrap()
    }

    #[tokio::test]
    async fn test_notes_are_returned_in_order() {
        let notes = repository().await.notes_for_patient("3").await.unwrap();

        let bodies: Vec<&str> = notes.iter().map(|n| n.body.as_str()).collect();
        assert_eq!(bodies, vec!["Smoker, Abnormal cholesterol", "Dizziness reported"]);
        assert_eq!(notes[0].id, "a1");
        assert!(notes[0].created.is_some());
        assert!(notes[1].created.is_none());
    }

    #[tokio::test]
    async fn test_empty_array_is_empty() {
        let notes = repository().await.notes_for_patient("8").await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_404_is_read_as_no_notes() {
        let notes = repository().await.notes_for_patient("77").await.unwrap();
        assert!(notes.is_empty());
    }

    #[tokio::test]
    async fn test_dot_segment_ids_have_no_notes() {
        let repository = repository().await;
        for id in [".", ".."] {
            let notes = repository.notes_for_patient(id).await.unwrap();
            assert!(notes.is_empty());
        }
    }

    #[tokio::test]
    async fn test_server_error_is_unavailable() {
        let err = repository().await.notes_for_patient("503").await.unwrap_err();
        assert!(matches!(
            err,
            AssessmentError::CollaboratorUnavailable {
                collaborator: Collaborator::Notes,
                ..
            }
        ));
    }

    #[tokio::test]
    async fn test_unreachable_store_is_unavailable() {
        let base = closed_port_url().await;
        let repository = HttpNotesRepository::new(&base, Duration::from_secs(2)).unwrap();

        let err = repository.notes_for_patient("3").await.unwrap_err();
        assert!(matches!(err, AssessmentError::CollaboratorUnavailable { .. }));
    }
}
