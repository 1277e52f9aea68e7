//! Group membership listing.

use pagination::PageRequest;
use serde::{Deserialize, Serialize};

use crate::domain::Group;

/// Variables of [`GroupMembers`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupMembersVariables {
    /// Federated group handle (`name` or `name@domain`).
    pub group_name: String,
    /// Comma-separated role filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<String>,
    /// Page number, starting at 1.
    pub page: u32,
    /// Members per page.
    pub limit: u32,
}

impl GroupMembersVariables {
    /// Members of `group_name` for the given page.
    pub fn new(group_name: impl Into<String>, page: PageRequest) -> Self {
        Self {
            group_name: group_name.into(),
            roles: None,
            page: page.page(),
            limit: page.limit(),
        }
    }
}

/// Data of [`GroupMembers`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GroupMembersData {
    /// The group with its member page.
    pub group: Group,
}

operation! {
    query
    /// One page of a group's members.
    GroupMembers = "GroupMembers" {
        document: concat!(
            "query GroupMembers($groupName: String!, $roles: String, $page: Int, $limit: Int) {\n",
            "  group(preferredUsername: $groupName) {\n",
            "    ...ActorFragment\n",
            "    membersCount\n",
            "    members(page: $page, limit: $limit, roles: $roles) {\n",
            "      total\n",
            "      elements {\n",
            "        id\n",
            "        role\n",
            "        actor { ...ActorFragment }\n",
            "      }\n",
            "    }\n",
            "  }\n",
            "}\n",
            actor_fragment!()
        ),
        variables: GroupMembersVariables,
        data: GroupMembersData,
    }
}
