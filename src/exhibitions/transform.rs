//! Raw record to response shaping. Pure: no I/O, no state.

use crate::core::models::{ExhibitContentResponse, ExhibitionResponse};
use crate::storage::{AttrValue, Item, ItemExt};

#[must_use]
pub fn transform_exhibitions(items: &[Item]) -> Vec<ExhibitionResponse> {
    items.iter().map(transform_exhibition).collect()
}

#[must_use]
pub fn transform_exhibition(item: &Item) -> ExhibitionResponse {
    ExhibitionResponse {
        exhibition_id: item.n("ExhibitionID").map(str::to_string),
        exhibition_name: item.s("ExhibitionName").map(str::to_string),
        exhibition_length: item.n("ExhibitionLength").map(str::to_string),
        exhibition_image: item.s("ExhibitionImage").map(str::to_string),
        // Older records store the flag as a number, newer ones as text.
        exhibition_public: item
            .n("ExhibitionPublic")
            .or_else(|| item.s("ExhibitionPublic"))
            .map(str::to_string),
        exhibit_content: item
            .l("ExhibitContent")
            .map(|content| content.iter().map(transform_content).collect()),
    }
}

fn transform_content(value: &AttrValue) -> ExhibitContentResponse {
    let Some(content) = value.as_m() else {
        return ExhibitContentResponse::default();
    };

    ExhibitContentResponse {
        creation_date: content.text("CreationDate"),
        item_creditline: content.text("ItemCreditline"),
        item_department: content.text("ItemDepartment"),
        item_id: content.text("ItemID"),
        item_classification: content.text("ItemClassification"),
        item_technique: content.text("ItemTechnique"),
        item_title: content.text("ItemTitle"),
        item_url: content.text("ItemImageURL"),
        item_object_link: content.text("ItemObjectLink"),
        item_century: content.text("ItemCentury"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn non_map_content_entries_become_empty_items() {
        let mut item = Item::new();
        item.insert(
            "ExhibitContent".into(),
            AttrValue::L(vec![AttrValue::from("stray"), AttrValue::Null]),
        );

        let out = transform_exhibition(&item);
        let content = out.exhibit_content.unwrap();
        assert_eq!(content.len(), 2);
        assert!(content.iter().all(|c| *c == ExhibitContentResponse::default()));
    }

    #[test]
    fn mistyped_top_level_fields_are_null() {
        let mut item = Item::new();
        item.insert("ExhibitionID".into(), AttrValue::from("42"));
        item.insert("ExhibitionName".into(), AttrValue::N("5".into()));
        item.insert("ExhibitContent".into(), AttrValue::from("not a list"));

        let out = transform_exhibition(&item);
        assert_eq!(out.exhibition_id, None);
        assert_eq!(out.exhibition_name, None);
        assert_eq!(out.exhibit_content, None);
    }
}
