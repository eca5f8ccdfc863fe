//! N-API bindings for the Node.js front end

use napi_derive::napi;

use crate::audit::audit_household;
use crate::components::Member;
use crate::tree::build_family_tree;

#[napi(object)]
pub struct JsMember {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
}

#[napi(object)]
pub struct JsTreeNode {
    pub id: String,
    pub name: String,
    pub role: String,
    pub parents: Vec<String>,
    pub relation: String,
}

fn to_members(members: Vec<JsMember>) -> Vec<Member> {
    members
        .into_iter()
        .map(|m| Member::new(m.id, m.first_name, m.last_name, m.role))
        .collect()
}

#[napi(js_name = "buildFamilyTree")]
pub fn build_family_tree_js(members: Vec<JsMember>) -> Vec<JsTreeNode> {
    let members = to_members(members);
    build_family_tree(&members)
        .into_nodes()
        .into_iter()
        .map(|node| JsTreeNode {
            id: node.id.0,
            name: node.name,
            role: node.role,
            parents: node.parents.into_iter().map(|p| p.0).collect(),
            relation: node.relation.as_str().to_string(),
        })
        .collect()
}

/// Human-readable audit findings, empty when the household is clean.
#[napi(js_name = "auditHousehold")]
pub fn audit_household_js(members: Vec<JsMember>) -> Vec<String> {
    audit_household(&to_members(members))
        .iter()
        .map(ToString::to_string)
        .collect()
}
