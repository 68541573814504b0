use crate::wire::PatientWire;
use crate::{Fetched, ServiceEndpoint};
use async_trait::async_trait;
use mediscreen_core::constants::PATIENTS_PATH;
use mediscreen_core::{
    AssessmentError, Collaborator, CoreResult, IdentifiedPatient, PatientDirectory, PatientProfile,
};
use std::time::Duration;

/// Patient registry reached over HTTP.
///
/// - `GET {base}/patients/{id}` returns one patient or 404.
/// - `GET {base}/patients?familyName={name}` returns a (possibly empty) array.
#[derive(Clone, Debug)]
pub struct HttpPatientDirectory {
    endpoint: ServiceEndpoint,
}

impl HttpPatientDirectory {
    pub fn new(base_url: &str, timeout: Duration) -> CoreResult<Self> {
        Ok(Self {
            endpoint: ServiceEndpoint::new(Collaborator::Patients, base_url, timeout)?,
        })
    }
}

#[async_trait]
impl PatientDirectory for HttpPatientDirectory {
    async fn get_patient(&self, patient_id: &str) -> CoreResult<PatientProfile> {
        let Some(url) = self.endpoint.url(PATIENTS_PATH, &[patient_id]) else {
            return Err(AssessmentError::PatientNotFound(patient_id.to_string()));
        };
        match self.endpoint.get_json::<PatientWire>(url).await? {
            Fetched::Found(wire) => wire.into_profile(),
            Fetched::Missing => Err(AssessmentError::PatientNotFound(patient_id.to_string())),
        }
    }

    async fn find_by_family_name(&self, family_name: &str) -> CoreResult<Vec<IdentifiedPatient>> {
        let Some(mut url) = self.endpoint.url(PATIENTS_PATH, &[]) else {
            return Ok(Vec::new());
        };
        url.query_pairs_mut().append_pair("familyName", family_name);

        let wires = match self.endpoint.get_json::<Vec<PatientWire>>(url).await? {
            Fetched::Found(wires) => wires,
            Fetched::Missing => return Ok(Vec::new()),
        };

        wires
            .into_iter()
            .map(|wire| -> CoreResult<IdentifiedPatient> {
                let id = wire.id.clone().ok_or_else(|| {
                    AssessmentError::unavailable(
                        Collaborator::Patients,
                        "patient search result without an id",
                    )
                })?;
                Ok(IdentifiedPatient {
                    id: id.to_string(),
                    profile: wire.into_profile()?,
                })
            })
            .collect()
    }
}
