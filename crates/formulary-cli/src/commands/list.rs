use formulary_kernel::{Category, list_operations, operations_in};

pub fn run(category: Option<Category>, json_output: bool) {
    let rows = match category {
        Some(category) => operations_in(category),
        None => list_operations(),
    };

    if json_output {
        let rendered = serde_json::to_string_pretty(&rows).unwrap_or_else(|err| {
            eprintln!("error: failed to render operation list: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
        return;
    }

    println!("formulary list");
    if let Some(category) = category {
        println!("  Category: {category}");
    }
    println!("  Operations: {}", rows.len());
    for row in &rows {
        println!("  - {} ({})", row.id, row.required_params.join(", "));
    }
}
