//! easyscan-bench: Criterion benchmark harnesses for easyscan.
//!
//! Covers tag extraction and end-to-end package scans.

/// Go source for a package with `types` struct declarations, every third one
/// carrying a directive and every fifth one a scalar.
pub fn synthetic_package_source(package: &str, types: usize) -> String {
    let mut src = format!("package {package}\n\nimport \"time\"\n");
    for i in 0..types {
        src.push('\n');
        if i % 3 == 0 {
            src.push_str(&format!("// Type{i} is generated.\n// easyjson:json\n"));
        }
        if i % 5 == 0 {
            src.push_str(&format!("type Type{i} int64\n"));
        } else {
            src.push_str(&format!(
                "type Type{i} struct {{\n\tID int64\n\tName string\n\tCreated time.Time\n}}\n"
            ));
        }
    }
    src
}
