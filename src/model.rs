use serde::{Deserialize, Serialize};

/// One structurally distinct unit of answer content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AnswerBlock {
    Paragraph { text: String },
    Note { text: String },
    Steps { items: Vec<String> },
    Subheading { text: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    #[serde(rename = "answerBlocks")]
    pub answer_blocks: Vec<AnswerBlock>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub title: String,
    pub faqs: Vec<Faq>,
}

/// Root of `faqs.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqCatalog {
    pub categories: Vec<Category>,
}

/// A menu entry: either a jump to another node or a leaf resolving to an FAQ.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeOption {
    Next {
        label: String,
        #[serde(rename = "nextNodeId")]
        next_node_id: String,
    },
    Faq {
        label: String,
        #[serde(rename = "faqId")]
        faq_id: String,
    },
}

impl TreeOption {
    pub fn label(&self) -> &str {
        match self {
            TreeOption::Next { label, .. } | TreeOption::Faq { label, .. } => label,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub id: String,
    pub prompt: String,
    pub options: Vec<TreeOption>,
}

/// Root of `decision_tree.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub nodes: Vec<TreeNode>,
}
