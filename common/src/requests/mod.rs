use serde::Serialize;

use crate::model::book::{BookData, Recommendation};

/// Request payload for `PUT /api/stay/{id}`.
/// Carries every host-editable field; the identifier travels in the path and
/// the access password is never client-writable. The recommendations list
/// replaces the stored set in full.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStayRequest {
    pub arrival_time: String,
    pub access_instructions: String,
    pub arrival_additional_info: String,
    pub departure_time: String,
    pub exit_instructions: String,
    pub departure_additional_info: String,
    pub wifi_name: String,
    pub wifi_password: String,
    pub house_rules: String,
    pub owner_contact: String,
    pub owner_name: String,
    pub general_info: String,
    pub recommendations: Vec<Recommendation>,
}

impl UpdateStayRequest {
    pub fn from_book(book: &BookData) -> Self {
        UpdateStayRequest {
            arrival_time: book.arrival_time.clone(),
            access_instructions: book.access_instructions.clone(),
            arrival_additional_info: book.arrival_additional_info.clone(),
            departure_time: book.departure_time.clone(),
            exit_instructions: book.exit_instructions.clone(),
            departure_additional_info: book.departure_additional_info.clone(),
            wifi_name: book.wifi_name.clone(),
            wifi_password: book.wifi_password.clone(),
            house_rules: book.house_rules.clone(),
            owner_contact: book.owner_contact.clone(),
            owner_name: book.owner_name.clone(),
            general_info: book.general_info.clone(),
            recommendations: book.recommendations.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::book::RecommendationKind;

    #[test]
    fn update_payload_has_no_id_and_no_password() {
        let book = BookData {
            id: Some("abc123".to_string()),
            access_password: Some("s3cret".to_string()),
            arrival_time: "15:00".to_string(),
            recommendations: vec![Recommendation {
                id: Some("r1".to_string()),
                name: "Chez Louise".to_string(),
                address: String::new(),
                description: String::new(),
                kind: RecommendationKind::Bar,
            }],
            ..BookData::default()
        };
        let value = serde_json::to_value(UpdateStayRequest::from_book(&book)).unwrap();
        assert!(value.get("id").is_none());
        assert!(value.get("accessPassword").is_none());
        assert_eq!(value["arrivalTime"], "15:00");
        assert_eq!(value["recommendations"][0]["type"], "BAR");
    }
}
