use formulary_kernel::registry_check;

pub fn run(json_output: bool) {
    let report = registry_check();

    if json_output {
        let rendered = serde_json::to_string_pretty(&report).unwrap_or_else(|err| {
            eprintln!("error: failed to render registry-check payload: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
    } else {
        println!("formulary registry-check");
        println!("  Check kind: {}", report.check_kind);
        println!("  Registry kind: {}", report.registry_kind);
        println!("  Result: {}", report.result);
        println!("  Operations: {}", report.operation_count);
        println!("  Issues: {}", report.issues.len());
        for issue in &report.issues {
            println!(
                "    - [{}] {}: {}",
                issue.failure_class, issue.path, issue.message
            );
        }
        println!("  Semantic digest: {}", report.semantic_digest);
    }

    if !report.accepted() {
        std::process::exit(1);
    }
}
