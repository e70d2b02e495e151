//! Explicit dashboard configuration. The sheet reference and column schema
//! travel together as one context value instead of process-wide globals;
//! launchers provide it via Dioxus context and deployments can override it
//! with their own JSON.

use serde::{Deserialize, Serialize};

use api::SheetSource;

use super::schema::SheetSchema;

/// Public demo sheet the dashboard points at out of the box.
const DEMO_SPREADSHEET_ID: &str = "1RkARFZeSAL79kjdE9muNTdZZkf4xsVmQW3geUV_rqsQ";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    pub source: SheetSource,
    #[serde(default)]
    pub schema: SheetSchema,
}

impl DashboardConfig {
    pub fn from_json(text: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(text)
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            source: SheetSource::csv_export(DEMO_SPREADSHEET_ID, 0),
            schema: SheetSchema::default_rankings(),
        }
    }
}
