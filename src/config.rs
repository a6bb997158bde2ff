use std::env;
use std::path::PathBuf;

const DEFAULT_SOURCE: &str = "marinenet-faq-raw.html";
const DEFAULT_FAQS: &str = "faqs.json";
const DEFAULT_TREE: &str = "decision_tree.json";

/// Where the pipeline reads the page and writes its two artifacts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    pub source: PathBuf,
    pub faqs_out: PathBuf,
    pub tree_out: PathBuf,
}

impl Paths {
    /// CLI value, then environment, then the built-in default.
    pub fn resolve(
        source: Option<PathBuf>,
        faqs_out: Option<PathBuf>,
        tree_out: Option<PathBuf>,
    ) -> Self {
        Paths {
            source: pick(source, "FAQ_SOURCE_PATH", DEFAULT_SOURCE),
            faqs_out: pick(faqs_out, "FAQ_CATALOG_PATH", DEFAULT_FAQS),
            tree_out: pick(tree_out, "FAQ_TREE_PATH", DEFAULT_TREE),
        }
    }
}

fn pick(flag: Option<PathBuf>, var: &str, default: &str) -> PathBuf {
    flag.or_else(|| env::var(var).ok().filter(|v| !v.is_empty()).map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(default))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_win() {
        let p = Paths::resolve(
            Some("in.html".into()),
            Some("out/f.json".into()),
            Some("out/t.json".into()),
        );
        assert_eq!(p.source, PathBuf::from("in.html"));
        assert_eq!(p.faqs_out, PathBuf::from("out/f.json"));
        assert_eq!(p.tree_out, PathBuf::from("out/t.json"));
    }

    #[test]
    fn falls_back_to_default() {
        // variable name nobody sets
        assert_eq!(
            pick(None, "FAQ_EXTRACTOR_TEST_UNSET_VAR", DEFAULT_TREE),
            PathBuf::from("decision_tree.json")
        );
    }
}
