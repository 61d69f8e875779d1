use formulary_kernel::{
    Category, OPERATION_REGISTRY_KIND, OperationId, operation_registry_json,
};

pub fn run(json_output: bool) {
    if json_output {
        let rendered =
            serde_json::to_string_pretty(&operation_registry_json()).unwrap_or_else(|err| {
                eprintln!("error: failed to render operation-registry json: {err}");
                std::process::exit(2);
            });
        println!("{rendered}");
        return;
    }

    println!("formulary registry");
    println!("  Registry kind: {OPERATION_REGISTRY_KIND}");
    println!("  Operations: {}", OperationId::COUNT);
    for category in Category::ALL {
        let count = OperationId::ALL
            .iter()
            .filter(|id| id.category() == category)
            .count();
        println!("    {category}: {count}");
    }
}
