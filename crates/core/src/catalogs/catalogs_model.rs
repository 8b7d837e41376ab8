//! Catalog domain models.
//!
//! Read-only reference records fetched from the billing backend to populate
//! the form's selection inputs. Nothing here is ever written back.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::constants::UNKNOWN_REFERENCE_LABEL;

/// A patient record from the patient catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub patient_id: i64,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl Patient {
    /// Display name in the "Last, First" form the claim form shows.
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.last_name, self.first_name)
    }
}

/// A provider record from the provider catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Provider {
    pub provider_id: i64,
    pub provider_name: String,
    #[serde(default)]
    pub specialty: Option<String>,
    #[serde(default)]
    pub phone_number: Option<String>,
}

impl Provider {
    pub fn display_name(&self) -> &str {
        &self.provider_name
    }
}

/// A billable service (CPT code) from the service catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub service_id: i64,
    pub cpt_code: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub standard_charge: Option<Decimal>,
}

impl Service {
    /// Display label: the CPT code, with the description appended when the
    /// catalog carries one.
    pub fn display_name(&self) -> String {
        match &self.description {
            Some(description) if !description.is_empty() => {
                format!("{} - {}", self.cpt_code, description)
            }
            _ => self.cpt_code.clone(),
        }
    }
}

/// The three catalogs fetched for one form session.
///
/// Holds id-keyed indexes for name resolution. Unknown ids resolve to a
/// placeholder label rather than failing: a claim may reference a record
/// that was deleted from its catalog after the claim was filed.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    patients: Vec<Patient>,
    providers: Vec<Provider>,
    services: Vec<Service>,
    patients_by_id: HashMap<i64, usize>,
    providers_by_id: HashMap<i64, usize>,
    services_by_id: HashMap<i64, usize>,
}

impl CatalogSet {
    pub fn new(patients: Vec<Patient>, providers: Vec<Provider>, services: Vec<Service>) -> Self {
        let patients_by_id = patients
            .iter()
            .enumerate()
            .map(|(i, p)| (p.patient_id, i))
            .collect();
        let providers_by_id = providers
            .iter()
            .enumerate()
            .map(|(i, p)| (p.provider_id, i))
            .collect();
        let services_by_id = services
            .iter()
            .enumerate()
            .map(|(i, s)| (s.service_id, i))
            .collect();
        Self {
            patients,
            providers,
            services,
            patients_by_id,
            providers_by_id,
            services_by_id,
        }
    }

    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn services(&self) -> &[Service] {
        &self.services
    }

    pub fn patient(&self, patient_id: i64) -> Option<&Patient> {
        self.patients_by_id
            .get(&patient_id)
            .map(|&i| &self.patients[i])
    }

    pub fn provider(&self, provider_id: i64) -> Option<&Provider> {
        self.providers_by_id
            .get(&provider_id)
            .map(|&i| &self.providers[i])
    }

    pub fn service(&self, service_id: i64) -> Option<&Service> {
        self.services_by_id
            .get(&service_id)
            .map(|&i| &self.services[i])
    }

    pub fn patient_name(&self, patient_id: i64) -> String {
        self.patient(patient_id)
            .map(Patient::display_name)
            .unwrap_or_else(|| UNKNOWN_REFERENCE_LABEL.to_string())
    }

    pub fn provider_name(&self, provider_id: i64) -> String {
        self.provider(provider_id)
            .map(|p| p.display_name().to_string())
            .unwrap_or_else(|| UNKNOWN_REFERENCE_LABEL.to_string())
    }

    pub fn service_name(&self, service_id: i64) -> String {
        self.service(service_id)
            .map(Service::display_name)
            .unwrap_or_else(|| UNKNOWN_REFERENCE_LABEL.to_string())
    }
}
