//! Row types read from the store and request types parsed from JSON bodies.

use crate::error::AppError;
use crate::service::RequestValidator;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Serialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Crop {
    pub crop_id: i32,
    pub crop_name: String,
}

#[derive(Serialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct District {
    pub district_id: i32,
    pub name: String,
}

#[derive(Serialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Subdistrict {
    pub subdistrict_id: i32,
    pub name: String,
}

#[derive(Serialize, sqlx::FromRow, Debug, Clone, PartialEq)]
pub struct Soil {
    pub soil_id: i32,
    pub soil_name: String,
}

/// Stored credentials for one user, looked up by email.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct UserCredentials {
    pub id: i32,
    pub password_hash: String,
}

const ALL_FIELDS_REQUIRED: &str = "All fields are required";

#[derive(Debug, Clone)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupRequest {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["name", "email", "password"], ALL_FIELDS_REQUIRED)?;
        Ok(Self {
            name: RequestValidator::text(body, "name")?,
            email: RequestValidator::text(body, "email")?,
            password: RequestValidator::text(body, "password")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["email", "password"], "Email and password required")?;
        Ok(Self {
            email: RequestValidator::text(body, "email")?,
            password: RequestValidator::text(body, "password")?,
        })
    }
}

/// Location and soil used for the suitability lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldQuery {
    pub district: i32,
    pub subdistrict: i32,
    pub soil: i32,
}

impl FieldQuery {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(
            body,
            &["district", "subdistrict", "soil"],
            "Please select district, subdistrict, and soil",
        )?;
        Ok(Self {
            district: RequestValidator::id(body, "district")?,
            subdistrict: RequestValidator::id(body, "subdistrict")?,
            soil: RequestValidator::id(body, "soil")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAdvisory {
    pub crop: i32,
    pub district: i32,
    pub subdistrict: i32,
    pub soil: i32,
    pub severity: String,
}

impl NewAdvisory {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(
            body,
            &["crop", "district", "subdistrict", "soil", "severity"],
            ALL_FIELDS_REQUIRED,
        )?;
        Ok(Self {
            crop: RequestValidator::id(body, "crop")?,
            district: RequestValidator::id(body, "district")?,
            subdistrict: RequestValidator::id(body, "subdistrict")?,
            soil: RequestValidator::id(body, "soil")?,
            severity: RequestValidator::text(body, "severity")?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdvisoryLookup {
    pub crop: i32,
    pub severity: String,
}

impl AdvisoryLookup {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["crop", "severity"], "Crop ID and severity are required")?;
        Ok(Self {
            crop: RequestValidator::id(body, "crop")?,
            severity: RequestValidator::text(body, "severity")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

impl ContactMessage {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        RequestValidator::require(body, &["name", "email", "message"], ALL_FIELDS_REQUIRED)?;
        Ok(Self {
            name: RequestValidator::text(body, "name")?,
            email: RequestValidator::text(body, "email")?,
            message: RequestValidator::text(body, "message")?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct PriceTrendsRequest {
    pub crops: Vec<String>,
}

impl PriceTrendsRequest {
    pub fn parse(body: &Map<String, Value>) -> Result<Self, AppError> {
        Ok(Self {
            crops: RequestValidator::string_list(body, "crops", "No crops selected")?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn obj(v: Value) -> Map<String, Value> {
        v.as_object().cloned().unwrap()
    }

    #[test]
    fn advisory_accepts_string_ids() {
        let req = NewAdvisory::parse(&obj(json!({
            "crop": "1", "district": 2, "subdistrict": "3", "soil": 4, "severity": "High"
        })))
        .unwrap();
        assert_eq!(
            req,
            NewAdvisory { crop: 1, district: 2, subdistrict: 3, soil: 4, severity: "High".into() }
        );
    }

    #[test]
    fn missing_field_uses_endpoint_message() {
        let err = AdvisoryLookup::parse(&obj(json!({ "crop": 1 }))).unwrap_err();
        assert_eq!(err.public_message(), "Crop ID and severity are required");
        let err = FieldQuery::parse(&obj(json!({ "district": 1, "soil": 2 }))).unwrap_err();
        assert_eq!(err.public_message(), "Please select district, subdistrict, and soil");
    }

    #[test]
    fn crop_rows_serialize_with_column_names() {
        let crop = Crop { crop_id: 1, crop_name: "Wheat".into() };
        assert_eq!(serde_json::to_value(crop).unwrap(), json!({ "crop_id": 1, "crop_name": "Wheat" }));
    }

    #[test]
    fn price_request_requires_crops() {
        let err = PriceTrendsRequest::parse(&obj(json!({}))).unwrap_err();
        assert_eq!(err.public_message(), "No crops selected");
    }
}
