//! Scan & tag-extraction commands.

use colored::Colorize;
use easyscan_core::{EasyscanConfig, OutputFormat, ScanResult, TypeMatch};
use std::path::Path;

pub(crate) fn cmd_scan(
    path: &Path,
    all: bool,
    json: bool,
    config: &EasyscanConfig,
) -> anyhow::Result<()> {
    let is_dir = path.is_dir();
    let all_structs = all || config.scan.all_structs;
    let result = easyscan_index::scan(path, is_dir, all_structs)?;

    let format = if json {
        OutputFormat::Json
    } else {
        config.output.format
    };
    match format {
        OutputFormat::Json => println!("{}", render_json(&result, config.output.pretty)?),
        OutputFormat::Human => print!("{}", render_human(&result)),
    }
    Ok(())
}

pub(crate) fn cmd_tags(text: &str) {
    let text = text.replace("\\n", "\n");
    match easyscan_index::extract_tags(&text) {
        Some(tags) => {
            for tag in tags {
                println!("{:?}", tag);
            }
        }
        None => println!("No directive found."),
    }
}

fn render_json(result: &ScanResult, pretty: bool) -> anyhow::Result<String> {
    Ok(if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    })
}

fn render_human(result: &ScanResult) -> String {
    let mut out = format!(
        "Package {} ({})\n",
        result.package_name.bold(),
        result.package_path
    );
    if result.matches.is_empty() {
        out.push_str("  No types selected.\n");
        return out;
    }
    for m in &result.matches {
        out.push_str(&format!("  {}\n", render_match(m)));
    }
    out
}

fn render_match(m: &TypeMatch) -> String {
    match &m.tags {
        Some(tags) => format!("{} [{}]", m.name.green(), tags.join(",")),
        None => format!("{} {}", m.name.green(), "(all)".dimmed()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScanResult {
        let mut result = ScanResult::new("example.com/app/models", true);
        result.package_name = "models".into();
        result
            .matches
            .push(TypeMatch::new("User", Some(vec!["json".into(), "skip".into()])));
        result.matches.push(TypeMatch::new("Order", None));
        result
    }

    #[test]
    fn human_output_lists_matches() {
        colored::control::set_override(false);
        let out = render_human(&sample());
        assert!(out.contains("Package models (example.com/app/models)"));
        assert!(out.contains("User [json,skip]"));
        assert!(out.contains("Order (all)"));
    }

    #[test]
    fn human_output_when_empty() {
        colored::control::set_override(false);
        let out = render_human(&ScanResult::new("example.com/x", false));
        assert!(out.contains("No types selected."));
    }

    #[test]
    fn json_output_roundtrips() {
        let json = render_json(&sample(), false).unwrap();
        assert!(!json.contains('\n'));
        let parsed: ScanResult = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, sample());
    }

    #[test]
    fn renders_a_scanned_module() {
        let tmp = tempfile::TempDir::new().unwrap();
        std::fs::write(tmp.path().join("go.mod"), "module example.com/app\n").unwrap();
        std::fs::write(
            tmp.path().join("user.go"),
            "package app\n\n// easyjson:json\ntype User struct{}\n\ntype Order struct{}\n",
        )
        .unwrap();

        let result = easyscan_index::scan(tmp.path(), true, true).unwrap();

        colored::control::set_override(false);
        let human = render_human(&result);
        assert!(human.contains("Package app (example.com/app)"));
        assert!(human.contains("User [json]"));
        assert!(human.contains("Order (all)"));

        let json: serde_json::Value =
            serde_json::from_str(&render_json(&result, true).unwrap()).unwrap();
        assert_eq!(json["package_path"], "example.com/app");
        assert_eq!(json["matches"][0]["name"], "User");
        assert_eq!(json["matches"][0]["tags"][0], "json");
        assert!(json["matches"][1]["tags"].is_null());
    }
}
