//! Actor-family snapshots: persons, groups, applications and memberships.
//!
//! Actors are identified by an opaque `id`. Every field besides `id` and
//! `preferredUsername` may be absent because each query requests its own
//! subset of the actor fields.

use pagination::Paginated;
use serde::{Deserialize, Serialize};

use super::address::Address;
use super::media::Media;

/// Kind of addressable identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActorType {
    /// A human user profile.
    Person,
    /// A group of members.
    Group,
    /// A registered third-party application.
    Application,
    /// An organisation account.
    Organisation,
    /// A service or bot account.
    Service,
}

/// An actor as projected by the actor fragment.
///
/// # Examples
/// ```
/// use client::domain::Actor;
///
/// let actor: Actor = serde_json::from_str(
///     r#"{"id": "1", "preferredUsername": "tcit", "domain": "framapiaf.org"}"#,
/// )
/// .expect("valid actor");
/// assert_eq!(actor.username_with_domain(), "@tcit@framapiaf.org");
/// assert_eq!(actor.display_name(), "@tcit@framapiaf.org");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Actor {
    /// Opaque identifier.
    pub id: String,
    /// Handle without the leading `@`.
    pub preferred_username: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Home instance for remote actors, `None` for local ones.
    #[serde(default)]
    pub domain: Option<String>,
    /// Profile summary (HTML).
    #[serde(default)]
    pub summary: Option<String>,
    /// Canonical URL.
    #[serde(default)]
    pub url: Option<String>,
    /// Avatar picture.
    #[serde(default)]
    pub avatar: Option<Media>,
    /// Kind of actor, when requested.
    #[serde(default, rename = "type")]
    pub actor_type: Option<ActorType>,
}

impl Actor {
    /// Federated handle: `@user` for local actors, `@user@domain` otherwise.
    #[must_use]
    pub fn username_with_domain(&self) -> String {
        match self.domain.as_deref().filter(|domain| !domain.is_empty()) {
            Some(domain) => format!("@{}@{domain}", self.preferred_username),
            None => format!("@{}", self.preferred_username),
        }
    }

    /// Name to show in listings: the display name when set, else the handle.
    #[must_use]
    pub fn display_name(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => self.username_with_domain(),
        }
    }

    /// Display name followed by the handle, as shown on profile headers.
    #[must_use]
    pub fn display_name_and_username(&self) -> String {
        match self.name.as_deref().map(str::trim) {
            Some(name) if !name.is_empty() => {
                format!("{name} ({})", self.username_with_domain())
            }
            _ => self.username_with_domain(),
        }
    }
}

/// Persons carry no fields beyond the actor projection.
pub type Person = Actor;

/// A group with its optional collections and counters.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    /// Actor fields shared with every identity.
    #[serde(flatten)]
    pub actor: Actor,
    /// Banner picture.
    #[serde(default)]
    pub banner: Option<Media>,
    /// Number of followers, when requested.
    #[serde(default)]
    pub followers_count: Option<u64>,
    /// Number of members, when requested.
    #[serde(default)]
    pub members_count: Option<u64>,
    /// Location the group is attached to.
    #[serde(default)]
    pub physical_address: Option<Address>,
    /// Member page, when requested.
    #[serde(default)]
    pub members: Option<Paginated<Member>>,
}

/// A third-party application registered against the instance.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    /// Opaque identifier.
    pub id: String,
    /// Application name.
    pub name: String,
    /// OAuth client identifier.
    #[serde(default)]
    pub client_id: Option<String>,
    /// Application home page.
    #[serde(default)]
    pub website: Option<String>,
}

/// Role of an actor inside a group.
///
/// The server uses several spellings for what the client treats as one
/// role; the aliases fold them into this closed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
pub enum MemberRole {
    /// Invited or awaiting approval.
    #[serde(rename = "PENDING", alias = "NOT_APPROVED", alias = "INVITED")]
    Pending,
    /// Regular member.
    #[serde(rename = "MEMBER")]
    Member,
    /// Can moderate group content.
    #[serde(rename = "MODERATOR")]
    Moderator,
    /// Administers the group.
    #[serde(rename = "ADMIN", alias = "ADMINISTRATOR", alias = "CREATOR")]
    Admin,
    /// Membership request turned down.
    #[serde(rename = "REJECTED")]
    Rejected,
}

impl MemberRole {
    /// Whether the role grants moderation rights.
    #[must_use]
    pub const fn can_moderate(self) -> bool {
        matches!(self, Self::Moderator | Self::Admin)
    }

    /// Whether the membership is effective (neither pending nor rejected).
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Pending | Self::Rejected)
    }
}

/// Membership of one actor in a group.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Member {
    /// Opaque identifier.
    pub id: String,
    /// The member.
    pub actor: Actor,
    /// The member's role.
    pub role: MemberRole,
}

#[cfg(test)]
mod tests {
    //! Actor decoding and display helpers.

    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn actor(name: Option<&str>, domain: Option<&str>) -> Actor {
        serde_json::from_value(json!({
            "id": "42",
            "preferredUsername": "alice",
            "name": name,
            "domain": domain,
        }))
        .expect("actor should decode")
    }

    #[rstest]
    #[case::local(None, "@alice")]
    #[case::remote(Some("example.org"), "@alice@example.org")]
    #[case::blank_domain(Some(""), "@alice")]
    fn formats_federated_handle(#[case] domain: Option<&str>, #[case] expected: &str) {
        assert_eq!(actor(None, domain).username_with_domain(), expected);
    }

    #[rstest]
    #[case::named(Some("Alice"), "Alice")]
    #[case::blank_name(Some("  "), "@alice")]
    #[case::unnamed(None, "@alice")]
    fn display_name_falls_back_to_handle(#[case] name: Option<&str>, #[case] expected: &str) {
        assert_eq!(actor(name, None).display_name(), expected);
    }

    #[test]
    fn display_name_and_username_combines_both() {
        assert_eq!(
            actor(Some("Alice"), Some("example.org")).display_name_and_username(),
            "Alice (@alice@example.org)"
        );
    }

    #[rstest]
    #[case::pending("PENDING", MemberRole::Pending)]
    #[case::not_approved("NOT_APPROVED", MemberRole::Pending)]
    #[case::invited("INVITED", MemberRole::Pending)]
    #[case::member("MEMBER", MemberRole::Member)]
    #[case::moderator("MODERATOR", MemberRole::Moderator)]
    #[case::admin("ADMIN", MemberRole::Admin)]
    #[case::administrator("ADMINISTRATOR", MemberRole::Admin)]
    #[case::creator("CREATOR", MemberRole::Admin)]
    #[case::rejected("REJECTED", MemberRole::Rejected)]
    fn member_roles_fold_server_spellings(#[case] wire: &str, #[case] expected: MemberRole) {
        let role: MemberRole = serde_json::from_value(json!(wire)).expect("role should decode");
        assert_eq!(role, expected);
    }

    #[test]
    fn unknown_member_roles_fail_closed() {
        let result = serde_json::from_value::<MemberRole>(json!("OWNER"));
        assert!(result.is_err(), "roles outside the closed set must not decode");
    }

    #[test]
    fn group_decodes_flattened_actor_and_members() {
        let group: Group = serde_json::from_value(json!({
            "id": "7",
            "preferredUsername": "hikers",
            "name": "Hikers",
            "type": "GROUP",
            "membersCount": 2,
            "members": {
                "total": 2,
                "elements": [
                    { "id": "m1", "role": "ADMINISTRATOR",
                      "actor": { "id": "1", "preferredUsername": "alice" } }
                ]
            }
        }))
        .expect("group should decode");

        assert_eq!(group.actor.actor_type, Some(ActorType::Group));
        assert_eq!(group.members_count, Some(2));
        let members = group.members.expect("members requested");
        assert_eq!(members.total(), 2);
        assert!(members.iter().all(|member| member.role.can_moderate()));
    }

    #[test]
    fn rejected_membership_keeps_the_page_decodable() {
        let group: Group = serde_json::from_value(json!({
            "id": "7",
            "preferredUsername": "hikers",
            "type": "GROUP",
            "members": {
                "total": 2,
                "elements": [
                    { "id": "m1", "role": "MEMBER",
                      "actor": { "id": "1", "preferredUsername": "alice" } },
                    { "id": "m2", "role": "REJECTED",
                      "actor": { "id": "2", "preferredUsername": "bob" } }
                ]
            }
        }))
        .expect("group with a rejected member should decode");

        let members = group.members.expect("members requested");
        let active: Vec<&str> = members
            .iter()
            .filter(|member| member.role.is_active())
            .map(|member| member.id.as_str())
            .collect();
        assert_eq!(active, vec!["m1"]);
        assert_eq!(members.total(), 2);
    }
}
