//! Lint: presentation modules must not touch the DOM.
//!
//! Every render branch is asserted against a `TestBackend` buffer in unit
//! tests, which only works while rendering stays a pure function of state
//! and frame. A `web_sys` call sneaking into a presentation module would
//! compile fine and then panic on native test runs (wasm-bindgen imports
//! cannot be called off-wasm), so the boundary is enforced at the source
//! level: DOM access belongs in `main.rs` only.
//!
//! This test scans the presentation modules and flags any non-comment
//! line that mentions `web_sys`.

use std::fs;
use std::path::Path;

/// Modules that must stay DOM-free.
const PRESENTATION_MODULES: [&str; 6] = [
    "src/render.rs",
    "src/chart.rs",
    "src/widgets.rs",
    "src/theme.rs",
    "src/input.rs",
    "src/time.rs",
];

/// Scan source for non-comment lines that mention `web_sys`.
fn find_dom_access(source: &str) -> Vec<(usize, String)> {
    let mut violations = Vec::new();

    for (line_num_0, line) in source.lines().enumerate() {
        let trimmed = line.trim();

        // Skip comments
        if trimmed.starts_with("//") || trimmed.starts_with("//!") || trimmed.starts_with("///") {
            continue;
        }

        if trimmed.contains("web_sys") {
            violations.push((line_num_0 + 1, trimmed.to_string()));
        }
    }

    violations
}

#[test]
fn presentation_modules_do_not_touch_the_dom() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let mut all_violations = Vec::new();

    for module in PRESENTATION_MODULES {
        let path = root.join(module);
        let source = fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("cannot read {}: {}", path.display(), e));
        for (line_num, line) in find_dom_access(&source) {
            all_violations.push((module, line_num, line));
        }
    }

    if !all_violations.is_empty() {
        let mut msg = String::from(
            "Found web_sys access in presentation modules.\n\
             DOM access belongs in main.rs; rendering must stay a pure\n\
             function of state so TestBackend tests keep working.\n\n",
        );
        for (file, line_num, line) in &all_violations {
            msg.push_str(&format!("  {}:{}: {}\n", file, line_num, line));
        }
        panic!("{}", msg);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_use_statement() {
        let source = "use web_sys::window;";
        assert_eq!(find_dom_access(source).len(), 1);
    }

    #[test]
    fn detects_qualified_call() {
        let source = r#"    let w = web_sys::window().unwrap();"#;
        assert_eq!(find_dom_access(source).len(), 1);
    }

    #[test]
    fn ignores_comments() {
        let source = "// web_sys is off-limits here\n//! web_sys too\n/// and web_sys here";
        assert!(find_dom_access(source).is_empty());
    }

    #[test]
    fn clean_source_passes() {
        let source = "fn render() {\n    let x = 1;\n}\n";
        assert!(find_dom_access(source).is_empty());
    }

    #[test]
    fn reports_one_based_line_numbers() {
        let source = "fn a() {}\nuse web_sys::Window;";
        let violations = find_dom_access(source);
        assert_eq!(violations[0].0, 2);
    }
}
