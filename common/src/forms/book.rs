use validator::{Validate, ValidationError, ValidationErrors};

use crate::model::book::{BookData, Recommendation, RecommendationKind};

/// Editable mirror of one [`Recommendation`].
///
/// `kind` stays an `Option` because a freshly added row has nothing selected;
/// validation requires one of the five real categories before submit.
#[derive(Debug, Clone, Default, Validate)]
pub struct RecommendationForm {
    pub id: Option<String>,
    #[validate(custom(function = "not_blank", message = "Le nom est requis"))]
    pub name: String,
    pub address: String,
    pub description: String,
    #[validate(
        required(message = "Le type est requis"),
        custom(function = "known_kind", message = "Le type est requis")
    )]
    pub kind: Option<RecommendationKind>,
}

impl RecommendationForm {
    pub fn from_recommendation(rec: &Recommendation) -> Self {
        RecommendationForm {
            id: rec.id.clone(),
            name: rec.name.clone(),
            address: rec.address.clone(),
            description: rec.description.clone(),
            kind: Some(rec.kind),
        }
    }

    /// Converts back to the model. Called after validation; an unselected
    /// category degrades to [`RecommendationKind::Other`], which validation
    /// has already ruled out on the submit path.
    pub fn to_recommendation(&self) -> Recommendation {
        Recommendation {
            id: self.id.clone(),
            name: self.name.clone(),
            address: self.address.clone(),
            description: self.description.clone(),
            kind: self.kind.unwrap_or(RecommendationKind::Other),
        }
    }

    pub fn set(&mut self, field: RecField, value: String) {
        match field {
            RecField::Name => self.name = value,
            RecField::Address => self.address = value,
            RecField::Description => self.description = value,
            RecField::Kind => self.kind = RecommendationKind::from_wire(&value),
        }
    }

    pub fn get(&self, field: RecField) -> &str {
        match field {
            RecField::Name => &self.name,
            RecField::Address => &self.address,
            RecField::Description => &self.description,
            RecField::Kind => self.kind.map(RecommendationKind::wire_value).unwrap_or(""),
        }
    }
}

/// Validation schema for the booklet edit form.
///
/// Required fields fail with their own French message when blank after
/// trimming; optional fields pass through. The recommendations list validates
/// each entry in place, so errors stay addressable by row index.
#[derive(Debug, Clone, Default, Validate)]
pub struct BookForm {
    pub id: Option<String>,

    // Arrivée
    #[validate(custom(function = "not_blank", message = "L'heure d'arrivée est requise"))]
    pub arrival_time: String,
    #[validate(custom(function = "not_blank", message = "Les instructions d'accès sont requises"))]
    pub access_instructions: String,
    pub arrival_additional_info: String,

    // Départ
    #[validate(custom(function = "not_blank", message = "L'heure de départ est requise"))]
    pub departure_time: String,
    #[validate(custom(function = "not_blank", message = "Les instructions de sortie sont requises"))]
    pub exit_instructions: String,
    pub departure_additional_info: String,

    // Hébergement
    #[validate(custom(function = "not_blank", message = "Le nom du réseau WiFi est requis"))]
    pub wifi_name: String,
    #[validate(custom(function = "not_blank", message = "Le mot de passe WiFi est requis"))]
    pub wifi_password: String,
    #[validate(custom(function = "not_blank", message = "Les règles de la maison sont requises"))]
    pub house_rules: String,
    #[validate(custom(function = "not_blank", message = "Le contact du propriétaire est requis"))]
    pub owner_contact: String,
    #[validate(custom(function = "not_blank", message = "Le nom du propriétaire est requis"))]
    pub owner_name: String,
    pub general_info: String,

    // Recommandations
    #[validate(nested)]
    pub recommendations: Vec<RecommendationForm>,
}

impl BookForm {
    /// Seeds the form from an existing record, or a blank draft when `None`.
    pub fn from_book(book: Option<&BookData>) -> Self {
        match book {
            None => BookForm::default(),
            Some(book) => BookForm {
                id: book.id.clone(),
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
                recommendations: book
                    .recommendations
                    .iter()
                    .map(RecommendationForm::from_recommendation)
                    .collect(),
            },
        }
    }

    pub fn to_book(&self) -> BookData {
        BookData {
            id: self.id.clone(),
            arrival_time: self.arrival_time.clone(),
            access_instructions: self.access_instructions.clone(),
            arrival_additional_info: self.arrival_additional_info.clone(),
            departure_time: self.departure_time.clone(),
            exit_instructions: self.exit_instructions.clone(),
            departure_additional_info: self.departure_additional_info.clone(),
            wifi_name: self.wifi_name.clone(),
            wifi_password: self.wifi_password.clone(),
            house_rules: self.house_rules.clone(),
            owner_contact: self.owner_contact.clone(),
            owner_name: self.owner_name.clone(),
            general_info: self.general_info.clone(),
            access_password: None,
            recommendations: self
                .recommendations
                .iter()
                .map(RecommendationForm::to_recommendation)
                .collect(),
        }
    }

    /// Submit-time entry point: validates, then converts to the model.
    pub fn validated_book(&self) -> Result<BookData, ValidationErrors> {
        self.validate()?;
        Ok(self.to_book())
    }

    pub fn set(&mut self, field: BookField, value: String) {
        match field {
            BookField::ArrivalTime => self.arrival_time = value,
            BookField::AccessInstructions => self.access_instructions = value,
            BookField::ArrivalAdditionalInfo => self.arrival_additional_info = value,
            BookField::DepartureTime => self.departure_time = value,
            BookField::ExitInstructions => self.exit_instructions = value,
            BookField::DepartureAdditionalInfo => self.departure_additional_info = value,
            BookField::WifiName => self.wifi_name = value,
            BookField::WifiPassword => self.wifi_password = value,
            BookField::HouseRules => self.house_rules = value,
            BookField::OwnerContact => self.owner_contact = value,
            BookField::OwnerName => self.owner_name = value,
            BookField::GeneralInfo => self.general_info = value,
        }
    }

    pub fn get(&self, field: BookField) -> &str {
        match field {
            BookField::ArrivalTime => &self.arrival_time,
            BookField::AccessInstructions => &self.access_instructions,
            BookField::ArrivalAdditionalInfo => &self.arrival_additional_info,
            BookField::DepartureTime => &self.departure_time,
            BookField::ExitInstructions => &self.exit_instructions,
            BookField::DepartureAdditionalInfo => &self.departure_additional_info,
            BookField::WifiName => &self.wifi_name,
            BookField::WifiPassword => &self.wifi_password,
            BookField::HouseRules => &self.house_rules,
            BookField::OwnerContact => &self.owner_contact,
            BookField::OwnerName => &self.owner_name,
            BookField::GeneralInfo => &self.general_info,
        }
    }
}

/// Path of one top-level booklet field, as addressed in the error tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookField {
    ArrivalTime,
    AccessInstructions,
    ArrivalAdditionalInfo,
    DepartureTime,
    ExitInstructions,
    DepartureAdditionalInfo,
    WifiName,
    WifiPassword,
    HouseRules,
    OwnerContact,
    OwnerName,
    GeneralInfo,
}

impl BookField {
    /// The nine fields validation refuses to leave blank.
    pub const REQUIRED: [BookField; 9] = [
        BookField::ArrivalTime,
        BookField::AccessInstructions,
        BookField::DepartureTime,
        BookField::ExitInstructions,
        BookField::WifiName,
        BookField::WifiPassword,
        BookField::HouseRules,
        BookField::OwnerContact,
        BookField::OwnerName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BookField::ArrivalTime => "arrival_time",
            BookField::AccessInstructions => "access_instructions",
            BookField::ArrivalAdditionalInfo => "arrival_additional_info",
            BookField::DepartureTime => "departure_time",
            BookField::ExitInstructions => "exit_instructions",
            BookField::DepartureAdditionalInfo => "departure_additional_info",
            BookField::WifiName => "wifi_name",
            BookField::WifiPassword => "wifi_password",
            BookField::HouseRules => "house_rules",
            BookField::OwnerContact => "owner_contact",
            BookField::OwnerName => "owner_name",
            BookField::GeneralInfo => "general_info",
        }
    }
}

/// Path of one field inside a recommendation row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecField {
    Name,
    Address,
    Description,
    Kind,
}

impl RecField {
    pub fn name(self) -> &'static str {
        match self {
            RecField::Name => "name",
            RecField::Address => "address",
            RecField::Description => "description",
            RecField::Kind => "kind",
        }
    }
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("required"));
    }
    Ok(())
}

fn known_kind(kind: &RecommendationKind) -> Result<(), ValidationError> {
    match kind {
        RecommendationKind::Other => Err(ValidationError::new("invalid_kind")),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{field_message, item_message};

    fn valid_form() -> BookForm {
        let mut form = BookForm::default();
        form.set(BookField::ArrivalTime, "15:00".to_string());
        form.set(BookField::AccessInstructions, "Boîte à clés, code 4521".to_string());
        form.set(BookField::DepartureTime, "11:00".to_string());
        form.set(BookField::ExitInstructions, "Clés sur la table".to_string());
        form.set(BookField::WifiName, "Livebox-1234".to_string());
        form.set(BookField::WifiPassword, "soleil2024".to_string());
        form.set(BookField::HouseRules, "Pas de fête".to_string());
        form.set(BookField::OwnerContact, "06 12 34 56 78".to_string());
        form.set(BookField::OwnerName, "Jean Dupont".to_string());
        form.recommendations.push(RecommendationForm {
            id: None,
            name: "Chez Louise".to_string(),
            address: "12 rue du Port".to_string(),
            description: String::new(),
            kind: Some(RecommendationKind::Restaurant),
        });
        form
    }

    #[test]
    fn complete_form_validates() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn each_required_field_rejects_blank() {
        for field in BookField::REQUIRED {
            let mut form = valid_form();
            form.set(field, "   ".to_string());
            let errors = form.validate().unwrap_err();
            assert!(
                field_message(&errors, field.name()).is_some(),
                "expected an error on {}",
                field.name()
            );
        }
    }

    #[test]
    fn optional_fields_may_stay_empty() {
        let mut form = valid_form();
        form.set(BookField::ArrivalAdditionalInfo, String::new());
        form.set(BookField::DepartureAdditionalInfo, String::new());
        form.set(BookField::GeneralInfo, String::new());
        assert!(form.validate().is_ok());
    }

    #[test]
    fn recommendation_without_name_rejects() {
        let mut form = valid_form();
        form.recommendations[0].name = String::new();
        let errors = form.validate().unwrap_err();
        assert_eq!(
            item_message(&errors, "recommendations", 0, RecField::Name.name()),
            Some("Le nom est requis")
        );
    }

    #[test]
    fn recommendation_without_category_rejects() {
        let mut form = valid_form();
        form.recommendations[0].kind = None;
        let errors = form.validate().unwrap_err();
        assert_eq!(
            item_message(&errors, "recommendations", 0, RecField::Kind.name()),
            Some("Le type est requis")
        );
    }

    #[test]
    fn unknown_category_counts_as_invalid() {
        let mut form = valid_form();
        form.recommendations[0].kind = Some(RecommendationKind::Other);
        let errors = form.validate().unwrap_err();
        assert_eq!(
            item_message(&errors, "recommendations", 0, RecField::Kind.name()),
            Some("Le type est requis")
        );
    }

    #[test]
    fn empty_recommendations_are_fine() {
        let mut form = valid_form();
        form.recommendations.clear();
        assert!(form.validate().is_ok());
    }

    #[test]
    fn required_message_is_field_specific() {
        let mut form = valid_form();
        form.set(BookField::WifiPassword, String::new());
        let errors = form.validate().unwrap_err();
        assert_eq!(
            field_message(&errors, BookField::WifiPassword.name()),
            Some("Le mot de passe WiFi est requis")
        );
    }

    #[test]
    fn conversion_round_trips_through_the_model() {
        let form = valid_form();
        let book = form.validated_book().unwrap();
        assert_eq!(book.arrival_time, "15:00");
        assert_eq!(book.recommendations.len(), 1);
        assert_eq!(book.recommendations[0].kind, RecommendationKind::Restaurant);

        let reseeded = BookForm::from_book(Some(&book));
        assert_eq!(reseeded.get(BookField::OwnerName), "Jean Dupont");
        assert_eq!(reseeded.recommendations[0].kind, Some(RecommendationKind::Restaurant));
    }

    #[test]
    fn seeding_from_none_gives_a_blank_draft() {
        let form = BookForm::from_book(None);
        assert_eq!(form.id, None);
        assert_eq!(form.get(BookField::ArrivalTime), "");
        assert!(form.recommendations.is_empty());
    }

    #[test]
    fn rec_setter_parses_select_values() {
        let mut rec = RecommendationForm::default();
        rec.set(RecField::Kind, "TOURISM".to_string());
        assert_eq!(rec.kind, Some(RecommendationKind::Tourism));
        rec.set(RecField::Kind, String::new());
        assert_eq!(rec.kind, None);
    }
}
