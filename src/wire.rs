use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::PredictionInput;

#[derive(Debug, thiserror::Error)]
pub enum WireError {
    #[error("malformed prediction payload: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Envelope as returned by the remote prediction service. Dates are ISO
/// `YYYY-MM-DD`; anything else is rejected at decode time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictionEnvelope {
    pub data: PredictionData,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionData {
    pub prediction: PredictedWindow,
    pub pregnancy_ability: PregnancyAbility,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictedWindow {
    pub predicted_start_date: NaiveDate,
    pub predicted_end_date: NaiveDate,
    pub cycle_length: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PregnancyAbility {
    pub fertile_window_start: NaiveDate,
    pub fertile_window_end: NaiveDate,
    pub pregnancy_percent: f32,
}

impl PredictionEnvelope {
    /// Flatten the two-part envelope into derivation input.
    pub fn into_input(self) -> PredictionInput {
        PredictionInput {
            predicted_start: self.data.prediction.predicted_start_date,
            predicted_end: self.data.prediction.predicted_end_date,
            cycle_length: self.data.prediction.cycle_length,
            fertile_start: self.data.pregnancy_ability.fertile_window_start,
            fertile_end: self.data.pregnancy_ability.fertile_window_end,
            pregnancy_percent: self.data.pregnancy_ability.pregnancy_percent,
        }
    }
}

/// Decode a raw service response into derivation input.
pub fn decode_prediction(json: &str) -> Result<PredictionInput, WireError> {
    let envelope: PredictionEnvelope = serde_json::from_str(json)?;
    Ok(envelope.into_input())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "data": {
            "prediction": {
                "predictedStartDate": "2025-08-01",
                "predictedEndDate": "2025-08-05",
                "cycleLength": 28
            },
            "pregnancyAbility": {
                "fertileWindowStart": "2025-08-12",
                "fertileWindowEnd": "2025-08-16",
                "pregnancyPercent": 22.5
            }
        }
    }"#;

    #[test]
    fn decodes_service_payload() {
        let input = decode_prediction(SAMPLE).unwrap();
        assert_eq!(
            input.predicted_start,
            NaiveDate::from_ymd_opt(2025, 8, 1).unwrap()
        );
        assert_eq!(
            input.predicted_end,
            NaiveDate::from_ymd_opt(2025, 8, 5).unwrap()
        );
        assert_eq!(input.cycle_length, 28);
        assert_eq!(
            input.fertile_start,
            NaiveDate::from_ymd_opt(2025, 8, 12).unwrap()
        );
        assert_eq!(
            input.fertile_end,
            NaiveDate::from_ymd_opt(2025, 8, 16).unwrap()
        );
        assert_eq!(input.pregnancy_percent, 22.5);
    }

    #[test]
    fn rejects_malformed_date() {
        let bad = SAMPLE.replace("2025-08-01", "2025-13-40");
        assert!(decode_prediction(&bad).is_err());
    }

    #[test]
    fn rejects_missing_field() {
        let bad = SAMPLE.replace("\"cycleLength\": 28", "\"cycleDays\": 28");
        assert!(decode_prediction(&bad).is_err());
    }
}
