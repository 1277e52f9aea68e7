//! Tag listing and filtering.

use serde::{Deserialize, Serialize};

use super::NoVariables;
use crate::domain::Tag;

/// Data of [`Tags`] and [`FilterTags`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TagsData {
    /// Matching tags.
    pub tags: Vec<Tag>,
}

operation! {
    query
    /// All tags with their related tags.
    Tags = "Tags" {
        document: concat!(
            "query Tags {\n",
            "  tags {\n",
            "    related {\n",
            "      ...TagFragment\n",
            "    }\n",
            "    ...TagFragment\n",
            "  }\n",
            "}\n",
            tag_fragment!()
        ),
        variables: NoVariables,
        data: TagsData,
    }
}

/// Variables of [`FilterTags`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterTagsVariables {
    /// Prefix typed by the user.
    pub filter: String,
}

operation! {
    query
    /// Tags matching a typed prefix, used for autocompletion.
    FilterTags = "FilterTags" {
        document: concat!(
            "query FilterTags($filter: String) {\n",
            "  tags(filter: $filter) {\n",
            "    ...TagFragment\n",
            "  }\n",
            "}\n",
            tag_fragment!()
        ),
        variables: FilterTagsVariables,
        data: TagsData,
    }
}
