use serde::{Deserialize, Serialize};

pub const PLACEHOLDER_PROFILE_PIC: &str = "https://via.placeholder.com/150?text=Doctor";
pub const MAX_SUGGESTIONS: usize = 3;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Availability {
    pub clinic: bool,
    pub video: bool,
}

/// Canonical doctor record. Built only by the normalizer, read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub specialties: Vec<String>,
    pub experience_years: u32,
    pub fee_amount: u32,
    pub city: String,
    pub availability: Availability,
    pub profile_pic_url: String,
}

impl Doctor {
    pub fn photo_or_placeholder(&self) -> &str {
        if self.profile_pic_url.is_empty() {
            PLACEHOLDER_PROFILE_PIC
        } else {
            &self.profile_pic_url
        }
    }

    pub fn offers(&self, consultation: ConsultationType) -> bool {
        match consultation {
            ConsultationType::Video => self.availability.video,
            ConsultationType::Clinic => self.availability.clinic,
            ConsultationType::None => true,
        }
    }

    pub fn name_contains(&self, folded_query: &str) -> bool {
        self.name.to_lowercase().contains(folded_query)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsultationType {
    Video,
    Clinic,
    #[default]
    None,
}

impl ConsultationType {
    /// Query-string value; `None` has no representation.
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            ConsultationType::Video => Some("video"),
            ConsultationType::Clinic => Some("clinic"),
            ConsultationType::None => None,
        }
    }

    pub fn from_param(raw: &str) -> Self {
        match raw {
            "video" => ConsultationType::Video,
            "clinic" => ConsultationType::Clinic,
            _ => ConsultationType::None,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortBy {
    Fees,
    Experience,
    #[default]
    None,
}

impl SortBy {
    pub fn as_param(&self) -> Option<&'static str> {
        match self {
            SortBy::Fees => Some("fees"),
            SortBy::Experience => Some("experience"),
            SortBy::None => None,
        }
    }

    pub fn from_param(raw: &str) -> Self {
        match raw {
            "fees" => SortBy::Fees,
            "experience" => SortBy::Experience,
            _ => SortBy::None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            SortBy::Fees => Some("Fees (Low to High)"),
            SortBy::Experience => Some("Experience (High to Low)"),
            SortBy::None => None,
        }
    }
}

/// Complete set of user-selectable criteria. Every field always holds a
/// value; "unset" is the `None` variant or an empty collection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterState {
    pub consultation_type: ConsultationType,
    pub specialties: Vec<String>,
    pub sort_by: SortBy,
    pub search_query: String,
}

impl FilterState {
    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }

    /// Shallow merge: fields present in `update` replace the current ones.
    pub fn merge(&mut self, update: FilterUpdate) {
        if let Some(consultation_type) = update.consultation_type {
            self.consultation_type = consultation_type;
        }
        if let Some(specialties) = update.specialties {
            self.specialties = specialties;
        }
        if let Some(sort_by) = update.sort_by {
            self.sort_by = sort_by;
        }
        if let Some(search_query) = update.search_query {
            self.search_query = search_query;
        }
    }
}

/// Partial filter change. Absent fields leave the current value untouched;
/// clearing a selection is expressed with the explicit `none` variant.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct FilterUpdate {
    pub consultation_type: Option<ConsultationType>,
    pub specialties: Option<Vec<String>>,
    pub sort_by: Option<SortBy>,
    pub search_query: Option<String>,
}

impl FilterUpdate {
    pub fn consultation(consultation_type: ConsultationType) -> Self {
        Self {
            consultation_type: Some(consultation_type),
            ..Self::default()
        }
    }

    pub fn specialties<I, S>(specialties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            specialties: Some(specialties.into_iter().map(Into::into).collect()),
            ..Self::default()
        }
    }

    pub fn sort(sort_by: SortBy) -> Self {
        Self {
            sort_by: Some(sort_by),
            ..Self::default()
        }
    }

    pub fn search(query: impl Into<String>) -> Self {
        Self {
            search_query: Some(query.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchSuggestion {
    pub id: String,
    pub name: String,
}

/// Everything the presentation layer reads from the directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DirectoryView {
    pub doctors: Vec<Doctor>,
    pub total: usize,
    pub loading: bool,
    pub error: Option<String>,
    pub filters: FilterState,
    pub specialty_options: Vec<String>,
    pub sort_label: Option<String>,
    pub summary: String,
    pub url: String,
}
