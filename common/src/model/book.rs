use serde::{Deserialize, Serialize};

/// Category of a guest recommendation.
///
/// The wire format uses SCREAMING_SNAKE_CASE tags (`"RESTAURANT"`, ...). The
/// backend owns the enumeration; any tag this client does not know about
/// deserializes to [`RecommendationKind::Other`] so an otherwise valid booklet
/// still renders instead of failing wholesale. `Other` is never offered by the
/// edit form and is rejected by its validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationKind {
    Restaurant,
    Activity,
    Bar,
    Tourism,
    Grocery,
    #[serde(other)]
    Other,
}

impl RecommendationKind {
    /// The closed enumeration the edit form offers, in display order.
    pub const ALL: [RecommendationKind; 5] = [
        RecommendationKind::Restaurant,
        RecommendationKind::Activity,
        RecommendationKind::Bar,
        RecommendationKind::Tourism,
        RecommendationKind::Grocery,
    ];

    /// Tag used on the wire and as the `<option>` value in the edit form.
    pub fn wire_value(self) -> &'static str {
        match self {
            RecommendationKind::Restaurant => "RESTAURANT",
            RecommendationKind::Activity => "ACTIVITY",
            RecommendationKind::Bar => "BAR",
            RecommendationKind::Tourism => "TOURISM",
            RecommendationKind::Grocery => "GROCERY",
            RecommendationKind::Other => "OTHER",
        }
    }

    /// Parses a wire tag back into a kind. Only the five real categories
    /// parse; anything else (including the empty select placeholder) is
    /// `None`.
    pub fn from_wire(value: &str) -> Option<Self> {
        RecommendationKind::ALL
            .into_iter()
            .find(|kind| kind.wire_value() == value)
    }

    /// French display label shown to guests.
    pub fn label(self) -> &'static str {
        match self {
            RecommendationKind::Restaurant => "Restaurant",
            RecommendationKind::Activity => "Activité",
            RecommendationKind::Bar => "Bar",
            RecommendationKind::Tourism => "Tourisme",
            RecommendationKind::Grocery => "Épicerie",
            RecommendationKind::Other => "Autre",
        }
    }
}

/// A place or activity the host suggests to guests.
///
/// Owned exclusively by its parent [`BookData`]; the backend assigns `id`
/// once persisted and may reassign it on every full-replace update, so the
/// identifier must not be treated as stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recommendation {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type")]
    pub kind: RecommendationKind,
}

/// The welcome booklet for one stay: everything a guest needs on arrival.
///
/// A record without `id` is a draft that only exists client-side; the backend
/// assigns `id` (and, for protected booklets, `access_password`) on creation.
/// Optional free-text fields default to the empty string so a partially
/// filled backend response still maps onto the full form.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    // Arrivée
    pub arrival_time: String,
    pub access_instructions: String,
    #[serde(default)]
    pub arrival_additional_info: String,

    // Départ
    pub departure_time: String,
    pub exit_instructions: String,
    #[serde(default)]
    pub departure_additional_info: String,

    // Hébergement
    pub wifi_name: String,
    pub wifi_password: String,
    pub house_rules: String,
    pub owner_contact: String,
    pub owner_name: String,
    #[serde(default)]
    pub general_info: String,

    // Sécurité
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_password: Option<String>,

    // Recommandations
    #[serde(default)]
    pub recommendations: Vec<Recommendation>,
}

impl BookData {
    /// House rules are stored as one string, one rule per line. Yields the
    /// rules in order, skipping blank lines.
    pub fn house_rule_lines(&self) -> impl Iterator<Item = &str> {
        self.house_rules
            .lines()
            .filter(|line| !line.trim().is_empty())
    }

    /// A persisted record can be updated in place; a draft must be created.
    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}
