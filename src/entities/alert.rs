use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{invalid_input_error, Error};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reporter_name: String,
    pub confirms: u32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAlert {
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub latitude: f64,
    pub longitude: f64,
    pub reporter_name: String,
}

impl NewAlert {
    pub fn validate(&self) -> Result<(), Error> {
        if self.kind.trim().is_empty() {
            return Err(invalid_input_error("type must not be empty"));
        }
        if self.description.trim().is_empty() {
            return Err(invalid_input_error("description must not be empty"));
        }
        if self.reporter_name.trim().is_empty() {
            return Err(invalid_input_error("reporterName must not be empty"));
        }
        if !(-90.0..=90.0).contains(&self.latitude) {
            return Err(invalid_input_error("latitude must be within -90..=90"));
        }
        if !(-180.0..=180.0).contains(&self.longitude) {
            return Err(invalid_input_error("longitude must be within -180..=180"));
        }

        Ok(())
    }
}

/// The list view of an alert, with its age rendered for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AlertSummary {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: String,
    pub description: String,
    pub time: String,
    pub reporter: String,
    pub confirms: u32,
    pub lat: f64,
    pub lng: f64,
}

impl Alert {
    pub fn new(id: i64, alert: NewAlert, confirms: u32, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            kind: alert.kind,
            description: alert.description,
            latitude: alert.latitude,
            longitude: alert.longitude,
            reporter_name: alert.reporter_name,
            confirms,
            is_active: true,
            created_at,
        }
    }

    pub fn confirm(&mut self) {
        self.confirms += 1;
    }

    pub fn summary(&self, now: DateTime<Utc>) -> AlertSummary {
        AlertSummary {
            id: self.id,
            kind: self.kind.clone(),
            description: self.description.clone(),
            time: time_ago(self.created_at, now),
            reporter: self.reporter_name.clone(),
            confirms: self.confirms,
            lat: self.latitude,
            lng: self.longitude,
        }
    }
}

pub fn time_ago(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - then).num_minutes();

    if minutes < 1 {
        "just now".into()
    } else if minutes < 60 {
        format!("{} mins ago", minutes)
    } else if minutes < 1440 {
        let hours = minutes / 60;
        format!("{} {} ago", hours, if hours == 1 { "hour" } else { "hours" })
    } else {
        let days = minutes / 1440;
        format!("{} {} ago", days, if days == 1 { "day" } else { "days" })
    }
}
