//! HTTP client for the Medication Records Service.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{MedicationRecords, ServiceError};
use crate::config::ServiceConfig;
use crate::models::{IntakeLogEntry, Medication, MedicationInput, Patient};

/// REST client against a records service instance.
pub struct HttpMedicationRecords {
    base_url: String,
    client: reqwest::Client,
    timeout_secs: u64,
}

impl HttpMedicationRecords {
    pub fn new(config: &ServiceConfig) -> Self {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            client,
            timeout_secs: config.timeout_secs,
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request_error(&self, e: reqwest::Error) -> ServiceError {
        if e.is_connect() {
            ServiceError::Connection(self.base_url.clone())
        } else if e.is_timeout() {
            ServiceError::Timeout(self.timeout_secs)
        } else {
            ServiceError::Transport(e.to_string())
        }
    }

    async fn check(response: reqwest::Response) -> Result<reqwest::Response, ServiceError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ServiceError> {
        let url = self.url(path);
        tracing::debug!(%url, "records service GET");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::ResponseParsing(e.to_string()))
    }
}

/// Response body for `GET /medications/{id}/adherence`.
#[derive(Deserialize)]
struct AdherenceResponse {
    adherence: String,
}

/// Request body for `POST /medications/`.
#[derive(Serialize)]
struct CreateMedicationRequest<'a> {
    user_id: Uuid,
    name: &'a str,
    dosage: &'a str,
    frequency: &'a str,
}

/// Request body for `PUT /medications/{id}`.
#[derive(Serialize)]
struct UpdateMedicationRequest<'a> {
    name: &'a str,
    dosage: &'a str,
    frequency: &'a str,
}

impl MedicationRecords for HttpMedicationRecords {
    async fn list_patients_for_caretaker(
        &self,
        _caretaker_id: Uuid,
    ) -> Result<Vec<Patient>, ServiceError> {
        // The service scopes this route by the authenticated caretaker.
        self.get_json("/caretaker/patients").await
    }

    async fn list_medications(&self, patient_id: Uuid) -> Result<Vec<Medication>, ServiceError> {
        self.get_json(&format!("/medications/{patient_id}")).await
    }

    async fn medication_adherence(&self, medication_id: Uuid) -> Result<String, ServiceError> {
        let response: AdherenceResponse = self
            .get_json(&format!("/medications/{medication_id}/adherence"))
            .await?;
        Ok(response.adherence)
    }

    async fn medication_history(
        &self,
        medication_id: Uuid,
    ) -> Result<Vec<IntakeLogEntry>, ServiceError> {
        self.get_json(&format!("/medications/{medication_id}/history"))
            .await
    }

    async fn mark_medication_taken(&self, medication_id: Uuid) -> Result<(), ServiceError> {
        let url = self.url(&format!("/medications/{medication_id}/mark-taken"));
        tracing::debug!(%medication_id, "marking medication taken");
        let response = self
            .client
            .patch(&url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        Self::check(response).await?;
        Ok(())
    }

    async fn create_medication(
        &self,
        patient_id: Uuid,
        input: &MedicationInput,
    ) -> Result<Medication, ServiceError> {
        let url = self.url("/medications/");
        let body = CreateMedicationRequest {
            user_id: patient_id,
            name: &input.name,
            dosage: &input.dosage,
            frequency: &input.frequency,
        };
        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::ResponseParsing(e.to_string()))
    }

    async fn update_medication(
        &self,
        medication_id: Uuid,
        input: &MedicationInput,
    ) -> Result<Medication, ServiceError> {
        let url = self.url(&format!("/medications/{medication_id}"));
        let body = UpdateMedicationRequest {
            name: &input.name,
            dosage: &input.dosage,
            frequency: &input.frequency,
        };
        let response = self
            .client
            .put(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        let response = Self::check(response).await?;
        response
            .json()
            .await
            .map_err(|e| ServiceError::ResponseParsing(e.to_string()))
    }

    async fn delete_medication(&self, medication_id: Uuid) -> Result<(), ServiceError> {
        let url = self.url(&format!("/medications/{medication_id}"));
        tracing::debug!(%medication_id, "deleting medication");
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .map_err(|e| self.request_error(e))?;
        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_joins_base_and_path() {
        let client = HttpMedicationRecords::new(&ServiceConfig::new("http://records.example/", 5));
        assert_eq!(
            client.url("/caretaker/patients"),
            "http://records.example/caretaker/patients"
        );
    }

    #[test]
    fn adherence_response_shape() {
        let parsed: AdherenceResponse =
            serde_json::from_str(r#"{"adherence": "82%"}"#).unwrap();
        assert_eq!(parsed.adherence, "82%");
    }

    #[test]
    fn create_request_carries_owner() {
        let patient_id = Uuid::new_v4();
        let body = CreateMedicationRequest {
            user_id: patient_id,
            name: "Metformin",
            dosage: "500mg",
            frequency: "Twice daily",
        };
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["user_id"], patient_id.to_string());
        assert_eq!(json["name"], "Metformin");
    }
}
