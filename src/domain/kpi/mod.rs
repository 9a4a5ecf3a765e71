//! KPI module - process indicators.
//!
//! KPIs are read-mostly from this core's perspective: they are listed
//! alongside documents and have no lifecycle. The core never fabricates
//! one; every KPI comes from the remote store.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::KpiId;

use super::document::Process;

/// Reporting cadence of a KPI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReportingCadence {
    #[serde(rename = "MENSUAL")]
    Monthly,
    #[serde(rename = "TRIMESTRAL")]
    Quarterly,
    #[serde(rename = "SEMESTRAL")]
    Semiannual,
    #[serde(rename = "ANUAL")]
    Annual,
}

/// A process performance indicator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Kpi {
    pub id: KpiId,
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "proceso")]
    pub process: Process,
    #[serde(rename = "subproceso")]
    pub subprocess: Option<String>,
    #[serde(rename = "meta")]
    pub target: f64,
    #[serde(rename = "unidad")]
    pub unit: String,
    #[serde(rename = "periodicidad")]
    pub cadence: ReportingCadence,
    #[serde(rename = "responsableNombre")]
    pub responsible_name: String,
}
