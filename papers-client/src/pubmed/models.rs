use serde::{Deserialize, Deserializer, Serialize};

/// Author entry from an ESummary document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    /// Display name as supplied by PubMed (e.g. "Zhu N")
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
    /// Free-text institutional affiliation, if PubMed supplied one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub affiliation: Option<String>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl Author {
    pub fn new<N: Into<String>>(name: N, affiliation: Option<&str>) -> Self {
        Self {
            name: name.into(),
            affiliation: affiliation.map(str::to_string),
        }
    }

    /// Single-line rendering used in CSV cells: `name` or `name (affiliation)`
    pub fn display_label(&self) -> String {
        match self.affiliation.as_deref().map(str::trim) {
            Some(aff) if !aff.is_empty() && self.name.is_empty() => aff.to_string(),
            Some(aff) if !aff.is_empty() => format!("{} ({})", self.name, aff),
            _ => self.name.clone(),
        }
    }
}

/// Normalized paper metadata with derived company affiliations
///
/// Serialized field names match the CSV column headers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaperRecord {
    #[serde(rename = "PubmedID")]
    pub pubmed_id: String,
    #[serde(rename = "Title")]
    pub title: String,
    /// Free-form date string as supplied by PubMed (e.g. "2020 Feb")
    #[serde(rename = "Publication Date")]
    pub publication_date: String,
    #[serde(rename = "Authors")]
    pub authors: Vec<Author>,
    #[serde(rename = "Company Affiliation(s)")]
    pub company_affiliations: Vec<String>,
    #[serde(rename = "Corresponding Author Email")]
    pub corresponding_author_email: String,
}

impl PaperRecord {
    pub fn has_company_affiliation(&self) -> bool {
        !self.company_affiliations.is_empty()
    }
}
