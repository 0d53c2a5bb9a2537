//! Trip request model

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Parameters of one trip search, as collected from the CLI
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripRequest {
    pub origin: String,
    pub destination: String,
    pub depart: NaiveDate,
    pub ret: Option<NaiveDate>,
    pub travelers: u32,
    pub currency: String,
}

impl TripRequest {
    /// Validate the request before any model call is made
    pub fn validate(&self) -> Result<(), String> {
        if self.origin.trim().is_empty() || self.destination.trim().is_empty() {
            return Err("❌ Origin and destination cannot be empty".to_string());
        }

        if self.origin.trim().eq_ignore_ascii_case(self.destination.trim()) {
            return Err("❌ Origin and destination must be different".to_string());
        }

        if self.travelers == 0 {
            return Err("❌ At least one traveler is required".to_string());
        }

        if let Some(ret) = self.ret {
            if ret < self.depart {
                return Err(format!(
                    "❌ Return date {} is before departure date {}",
                    ret, self.depart
                ));
            }
        }

        Ok(())
    }

    /// Nights between departure and return, or `None` for a one-way trip
    pub fn nights(&self) -> Option<i64> {
        self.ret.map(|ret| (ret - self.depart).num_days())
    }

    /// "MNL → NRT" style label used in tables and summaries
    pub fn route(&self) -> String {
        format!("{} → {}", self.origin, self.destination)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request() -> TripRequest {
        TripRequest {
            origin: "MNL".to_string(),
            destination: "NRT".to_string(),
            depart: NaiveDate::from_ymd_opt(2025, 7, 10).unwrap(),
            ret: Some(NaiveDate::from_ymd_opt(2025, 7, 17).unwrap()),
            travelers: 2,
            currency: "USD".to_string(),
        }
    }

    #[test]
    fn test_valid_request() {
        assert!(request().validate().is_ok());
        assert_eq!(request().nights(), Some(7));
    }

    #[test]
    fn test_same_origin_destination_rejected() {
        let mut req = request();
        req.destination = "mnl".to_string();
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_return_before_departure_rejected() {
        let mut req = request();
        req.ret = Some(NaiveDate::from_ymd_opt(2025, 7, 1).unwrap());
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_zero_travelers_rejected() {
        let mut req = request();
        req.travelers = 0;
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_one_way_has_no_nights() {
        let mut req = request();
        req.ret = None;
        assert!(req.validate().is_ok());
        assert_eq!(req.nights(), None);
    }
}
