use std::collections::HashSet;

use crate::model::{Category, DecisionTree, FaqCatalog, TreeNode, TreeOption};

pub const ROOT_NODE_ID: &str = "root";
pub const ROOT_PROMPT: &str = "What do you need help with?";

pub fn menu_node_id(category_id: &str) -> String {
    format!("{}-menu", category_id)
}

/// Build both artifacts from the extracted categories.
pub fn build_artifacts(categories: Vec<Category>) -> (FaqCatalog, DecisionTree) {
    let tree = build_decision_tree(&categories);
    (FaqCatalog { categories }, tree)
}

/// Root menu first, then one menu per category in catalog order.
pub fn build_decision_tree(categories: &[Category]) -> DecisionTree {
    let mut root_options = Vec::with_capacity(categories.len());
    let mut menus = Vec::with_capacity(categories.len());

    for cat in categories {
        let node_id = menu_node_id(&cat.id);
        root_options.push(TreeOption::Next {
            label: cat.title.clone(),
            next_node_id: node_id.clone(),
        });
        menus.push(TreeNode {
            id: node_id,
            prompt: format!("{} topics:", cat.title),
            options: cat
                .faqs
                .iter()
                .map(|faq| TreeOption::Faq {
                    label: faq.question.clone(),
                    faq_id: faq.id.clone(),
                })
                .collect(),
        });
    }

    let mut nodes = Vec::with_capacity(menus.len() + 1);
    nodes.push(TreeNode {
        id: ROOT_NODE_ID.to_string(),
        prompt: ROOT_PROMPT.to_string(),
        options: root_options,
    });
    nodes.extend(menus);
    DecisionTree { nodes }
}

/// Check the cross-references between a catalog and its tree.
/// Returns one message per violation; empty means consistent.
pub fn validate(catalog: &FaqCatalog, tree: &DecisionTree) -> Vec<String> {
    let mut problems = Vec::new();
    let node_ids: HashSet<&str> = tree.nodes.iter().map(|n| n.id.as_str()).collect();

    match tree.nodes.first() {
        Some(root) if root.id == ROOT_NODE_ID => {
            if root.options.len() != catalog.categories.len() {
                problems.push(format!(
                    "root has {} options for {} categories",
                    root.options.len(),
                    catalog.categories.len()
                ));
            }
        }
        _ => problems.push("first node is not the root".to_string()),
    }

    if tree.nodes.len() != catalog.categories.len() + 1 {
        problems.push(format!(
            "expected {} nodes, found {}",
            catalog.categories.len() + 1,
            tree.nodes.len()
        ));
    }

    for cat in &catalog.categories {
        let menu_id = menu_node_id(&cat.id);
        let Some(menu) = tree.nodes.iter().find(|n| n.id == menu_id) else {
            problems.push(format!("category {:?} has no menu node", cat.id));
            continue;
        };
        let faq_ids: HashSet<&str> = cat.faqs.iter().map(|f| f.id.as_str()).collect();
        for opt in &menu.options {
            if let TreeOption::Faq { faq_id, .. } = opt {
                if !faq_ids.contains(faq_id.as_str()) {
                    problems.push(format!(
                        "{}: {:?} -> faqId {:?} not in category",
                        menu_id,
                        opt.label(),
                        faq_id
                    ));
                }
            }
        }
    }

    for node in &tree.nodes {
        for opt in &node.options {
            if let TreeOption::Next { next_node_id, .. } = opt {
                if !node_ids.contains(next_node_id.as_str()) {
                    problems.push(format!(
                        "{}: {:?} -> nextNodeId {:?} is dangling",
                        node.id,
                        opt.label(),
                        next_node_id
                    ));
                }
            }
        }
    }

    problems
}
