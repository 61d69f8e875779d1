use formulary_kernel::operation_info;

pub fn run(operation: String, json_output: bool) {
    let info = operation_info(super::resolve_operation(&operation));

    if json_output {
        let rendered = serde_json::to_string_pretty(&info).unwrap_or_else(|err| {
            eprintln!("error: failed to render operation info: {err}");
            std::process::exit(2);
        });
        println!("{rendered}");
        return;
    }

    println!("formulary describe");
    println!("  Operation: {}", info.id);
    println!("  Name: {}", info.display_name);
    println!("  Category: {}", info.category);
    println!("  Summary: {}", info.summary);
    println!("  Required params: {}", info.required_params.join(", "));
}
