use similar::TextDiff;
use std::path::Path;

use super::splice::SplicePlan;

/// Render a unified diff of a planned splice
pub fn unified_preview(plan: &SplicePlan, path: &Path, context_lines: usize) -> String {
    let name = path.display().to_string();
    TextDiff::from_lines(&plan.original, &plan.updated)
        .unified_diff()
        .context_radius(context_lines)
        .header(&format!("a/{}", name), &format!("b/{}", name))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::region::Marker;
    use crate::diff::splice::plan_splice;

    #[test]
    fn test_preview_shows_removed_and_inserted_lines() {
        let content = "keep\nBEGIN\nold markup\nEND\ntail\n";
        let plan = plan_splice(
            content,
            &Marker::new("BEGIN").unwrap(),
            &Marker::new("END").unwrap(),
            "<Extracted />\n",
            Path::new("page.jsx"),
        )
        .unwrap();

        let preview = unified_preview(&plan, Path::new("page.jsx"), 1);
        assert!(preview.starts_with("--- a/page.jsx\n+++ b/page.jsx\n"));
        assert!(preview.contains("-BEGIN\n"));
        assert!(preview.contains("-old markup\n"));
        assert!(preview.contains("+<Extracted />\n"));
        assert!(preview.contains(" END\n"));
        assert!(!preview.contains("tail"));
    }
}
