use serde::{Deserialize, Serialize};

/// Client-facing shape of one exhibition record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionResponse {
    #[serde(rename = "ExhibitionID")]
    pub exhibition_id: Option<String>,
    #[serde(rename = "ExhibitionName")]
    pub exhibition_name: Option<String>,
    #[serde(rename = "ExhibitionLength")]
    pub exhibition_length: Option<String>,
    #[serde(rename = "ExhibitionImage")]
    pub exhibition_image: Option<String>,
    #[serde(rename = "ExhibitionPublic")]
    pub exhibition_public: Option<String>,
    #[serde(rename = "ExhibitContent")]
    pub exhibit_content: Option<Vec<ExhibitContentResponse>>,
}

/// Client-facing shape of one item inside an exhibition's content list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitContentResponse {
    #[serde(rename = "CreationDate")]
    pub creation_date: Option<String>,
    #[serde(rename = "ItemCreditline")]
    pub item_creditline: Option<String>,
    #[serde(rename = "ItemDepartment")]
    pub item_department: Option<String>,
    #[serde(rename = "ItemID")]
    pub item_id: Option<String>,
    #[serde(rename = "ItemClassification")]
    pub item_classification: Option<String>,
    #[serde(rename = "ItemTechnique")]
    pub item_technique: Option<String>,
    #[serde(rename = "ItemTitle")]
    pub item_title: Option<String>,
    #[serde(rename = "ItemURL")]
    pub item_url: Option<String>,
    #[serde(rename = "ItemObjectLink")]
    pub item_object_link: Option<String>,
    #[serde(rename = "ItemCentury")]
    pub item_century: Option<String>,
}

/// Success body: `{"exhibitions": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionsBody {
    pub exhibitions: Exhibitions,
}

/// Older clients expect an empty string rather than an empty list when
/// nothing matched, so the empty case has its own variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Exhibitions {
    List(Vec<ExhibitionResponse>),
    LegacyEmpty(String),
}

impl ExhibitionsBody {
    #[must_use]
    pub fn new(exhibitions: Vec<ExhibitionResponse>, legacy_wire_compat: bool) -> Self {
        let exhibitions = if exhibitions.is_empty() && legacy_wire_compat {
            Exhibitions::LegacyEmpty(String::new())
        } else {
            Exhibitions::List(exhibitions)
        };
        Self { exhibitions }
    }
}

/// Failure body: `{"message": ...}` plus `error` for server-side failures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
