use crate::models::DashboardData;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum DataError {
    #[error("Could not read dashboard data {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Invalid dashboard data: {0}")]
    Json(#[from] serde_json::Error),
}

pub type DataResult<T> = Result<T, DataError>;

impl DashboardData {
    pub fn from_json(json: &str) -> DataResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> DataResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| DataError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let data = Self::from_json(&json)?;
        debug!(
            path = %path.display(),
            stats = data.stats.len(),
            quick_actions = data.quick_actions.len(),
            appointments = data.appointments.len(),
            "loaded dashboard data"
        );
        Ok(data)
    }

    /// Loads from `path` when given, otherwise falls back to the sample set.
    pub fn load(path: Option<&Path>) -> DataResult<Self> {
        match path {
            Some(path) => Self::from_path(path),
            None => Ok(Self::default()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icon::Icon;
    use crate::models::{AppointmentStatus, ColorToken};
    use std::io::Write;

    const CUSTOM: &str = r#"{
        "stats": [
            { "title": "Open Notes", "value": "5", "icon": "Clock", "color": "purple" }
        ],
        "quick_actions": [],
        "appointments": [
            { "time": "8:00 AM", "patient": "Ana Ruiz", "session_type": "Intake", "status": "completed" },
            { "time": "9:00 AM", "patient": "Tom Ng", "session_type": "CBT Session", "status": "pending" }
        ]
    }"#;

    #[test]
    fn sample_data_survives_json() {
        let data = DashboardData::default();
        let json = serde_json::to_string(&data).unwrap();
        assert_eq!(DashboardData::from_json(&json).unwrap(), data);
    }

    #[test]
    fn reads_custom_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUSTOM.as_bytes()).unwrap();

        let data = DashboardData::load(Some(file.path())).unwrap();
        assert_eq!(data.stats[0].icon, Icon::Clock);
        assert_eq!(data.stats[0].color, ColorToken::Purple);
        assert!(data.quick_actions.is_empty());
        assert_eq!(data.appointments[0].status, AppointmentStatus::Completed);
        assert_eq!(data.appointments[1].status, AppointmentStatus::Upcoming);
    }

    #[test]
    fn no_path_means_sample_data() {
        assert_eq!(DashboardData::load(None).unwrap(), DashboardData::default());
    }

    #[test]
    fn missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = DashboardData::from_path(dir.path().join("missing.json")).unwrap_err();
        assert!(matches!(err, DataError::Io { .. }));
    }

    #[test]
    fn malformed_file_is_json_error() {
        let err = DashboardData::from_json("{ \"stats\": 3 }").unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }

    #[test]
    fn unknown_color_family_is_rejected() {
        let teal = CUSTOM.replace("\"purple\"", "\"teal\"");
        let err = DashboardData::from_json(&teal).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(CUSTOM.replace("\"purple\"", r#""teal\" onclick=x""#).as_bytes())
            .unwrap();
        let err = DashboardData::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, DataError::Json(_)));
    }
}
