// Turbonomic REST API types
//
// `Group` and `Policy` mirror the JSON the server returns; fields use
// `#[serde(default)]` liberally because responses omit whatever is unset.
// `GroupUpdate` is the body we PUT to replace a group's criteria.

use serde::{Deserialize, Serialize};

use crate::leaf::{self, LeafError, LeafToken};

// ── Read side ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub rel: String,
    #[serde(default)]
    pub href: String,
}

/// A group as returned by search and update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Group {
    pub links: Vec<Link>,
    pub uuid: String,
    pub display_name: String,
    pub class_name: String,
    pub entities_count: u64,
    pub members_count: u64,
    pub group_type: String,
    pub severity: Option<String>,
    pub is_static: bool,
    pub logical_operator: Option<String>,
    pub environment_type: Option<String>,
}

/// A placement policy linking a consumer group to a provider group.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Policy {
    pub links: Vec<Link>,
    pub uuid: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub policy_type: String,
    pub name: String,
    pub enabled: bool,
    pub capacity: Option<u64>,
    pub commodity_type: Option<String>,
    #[serde(alias = "ConsumerGroup")]
    pub consumer_group: Option<Group>,
    #[serde(alias = "ProviderGroup")]
    pub provider_group: Option<Group>,
}

/// `GET /vmturbo/rest/search` returns an array, but some builds return a
/// bare object when exactly one entity matches.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub(crate) enum SearchResponse {
    Many(Vec<Group>),
    One(Box<Group>),
}

impl SearchResponse {
    pub(crate) fn into_groups(self) -> Vec<Group> {
        match self {
            Self::Many(groups) => groups,
            Self::One(group) => vec![*group],
        }
    }
}

// ── Write side ───────────────────────────────────────────────────────

/// Name and criteria template for the group kept in sync with link-down
/// events. Every field can be overridden from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupTemplate {
    /// Display name used both to find the group and in the update body.
    pub name: String,
    pub group_type: String,
    pub filter_type: String,
    pub exp_type: String,
    pub case_sensitive: bool,
}

impl Default for GroupTemplate {
    fn default() -> Self {
        Self {
            name: "PMs_CandidLinkDown".into(),
            group_type: "PhysicalMachine".into(),
            filter_type: "pmsBySwitch".into(),
            exp_type: "EQ".into(),
            case_sensitive: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Criterion {
    pub exp_type: String,
    pub exp_val: String,
    pub filter_type: String,
    pub case_sensitive: bool,
}

/// `PUT /vmturbo/rest/group/{uuid}` body: a dynamic group with one criterion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUpdate {
    pub is_static: bool,
    pub member_uuid_list: Vec<String>,
    pub display_name: String,
    pub group_type: String,
    pub criteria_list: Vec<Criterion>,
}

impl GroupUpdate {
    /// Build the body from already-derived leaf tokens.
    pub fn new(template: &GroupTemplate, tokens: &[LeafToken]) -> Self {
        Self {
            is_static: false,
            member_uuid_list: Vec::new(),
            display_name: template.name.clone(),
            group_type: template.group_type.clone(),
            criteria_list: vec![Criterion {
                exp_type: template.exp_type.clone(),
                exp_val: leaf::member_filter(tokens),
                filter_type: template.filter_type.clone(),
                case_sensitive: template.case_sensitive,
            }],
        }
    }

    /// Derive leaf tokens from interface DNs and build the body.
    pub fn from_dns<S: AsRef<str>>(template: &GroupTemplate, dns: &[S]) -> Result<Self, LeafError> {
        let tokens = leaf::leaf_tokens(dns)?;
        Ok(Self::new(template, &tokens))
    }

    /// The filter value carried by the single criterion.
    pub fn filter(&self) -> &str {
        self.criteria_list
            .first()
            .map_or("", |c| c.exp_val.as_str())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn update_body_matches_wire_shape() {
        let body = GroupUpdate::from_dns(
            &GroupTemplate::default(),
            &["topology/pod-1/node-101/x", "topology/pod-1/node-102/sys/phys-[eth1/1]"],
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({
                "isStatic": false,
                "memberUuidList": [],
                "displayName": "PMs_CandidLinkDown",
                "groupType": "PhysicalMachine",
                "criteriaList": [{
                    "expType": "EQ",
                    "expVal": "leaf-101|leaf-102",
                    "filterType": "pmsBySwitch",
                    "caseSensitive": false
                }]
            })
        );
    }

    #[test]
    fn empty_dn_list_gives_empty_filter() {
        let body = GroupUpdate::from_dns::<&str>(&GroupTemplate::default(), &[]).unwrap();
        assert_eq!(body.filter(), "");
        assert_eq!(body.criteria_list.len(), 1);
    }

    #[test]
    fn template_overrides_flow_into_body() {
        let template = GroupTemplate {
            name: "Leafs_Down".into(),
            filter_type: "pmsByName".into(),
            case_sensitive: true,
            ..GroupTemplate::default()
        };
        let body = GroupUpdate::from_dns(&template, &["a/b/node-7/c"]).unwrap();
        assert_eq!(body.display_name, "Leafs_Down");
        assert_eq!(body.criteria_list[0].filter_type, "pmsByName");
        assert!(body.criteria_list[0].case_sensitive);
        assert_eq!(body.filter(), "leaf-7");
    }

    #[test]
    fn malformed_dn_rejects_body() {
        let err = GroupUpdate::from_dns(&GroupTemplate::default(), &["short/dn"]).unwrap_err();
        assert!(matches!(err, LeafError::TooFewSegments { segments: 2, .. }));
    }

    #[test]
    fn policy_decodes_nested_groups() {
        let policy: Policy = serde_json::from_value(json!({
            "uuid": "p-1",
            "displayName": "Avoid down leafs",
            "type": "BIND_TO_COMPLEMENTARY_GROUP",
            "name": "avoid-down-leafs",
            "enabled": true,
            "commodityType": "ClusterCommodity",
            "consumerGroup": { "uuid": "g-vm", "displayName": "VMs", "groupType": "VirtualMachine" },
            "providerGroup": { "uuid": "g-pm", "displayName": "PMs_CandidLinkDown", "isStatic": false }
        }))
        .unwrap();

        assert_eq!(policy.policy_type, "BIND_TO_COMPLEMENTARY_GROUP");
        assert_eq!(policy.consumer_group.unwrap().group_type, "VirtualMachine");
        assert_eq!(policy.provider_group.unwrap().uuid, "g-pm");
    }
}
