use formulary_kernel::{
    Argument, Arguments, DispatchError, DispatchErrorKind, OperationId, Outcome, execute_named,
};
use serde::Serialize;
use std::process;

pub struct Args {
    pub operation: String,
    pub args: Vec<String>,
    pub args_json: Option<String>,
    pub json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecPayload {
    schema: u32,
    operation: String,
    result: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<Outcome>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ExecError>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ExecError {
    kind: DispatchErrorKind,
    message: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    names: Vec<String>,
}

impl From<&DispatchError> for ExecError {
    fn from(err: &DispatchError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
            names: err.names().to_vec(),
        }
    }
}

fn usage_error(message: String) -> ! {
    eprintln!("error: {message}");
    process::exit(2);
}

fn parse_bundle(args_json: Option<&str>, pairs: &[String]) -> Arguments {
    let mut bundle = match args_json {
        Some(text) => serde_json::from_str::<Arguments>(text).unwrap_or_else(|err| {
            usage_error(format!(
                "--args-json must be an object of numbers or number arrays: {err}"
            ))
        }),
        None => Arguments::new(),
    };

    for pair in pairs {
        let Some((name, raw)) = pair.split_once('=') else {
            usage_error(format!("--arg expects NAME=VALUE, got `{pair}`"));
        };
        let value = serde_json::from_str::<Argument>(raw.trim()).unwrap_or_else(|err| {
            usage_error(format!(
                "--arg {name}: value must be a number or an array of numbers: {err}"
            ))
        });
        bundle.insert(name.trim(), value);
    }
    bundle
}

pub fn run(args: Args) {
    let bundle = parse_bundle(args.args_json.as_deref(), &args.args);
    let operation = args
        .operation
        .parse::<OperationId>()
        .map(|id| id.as_str().to_string())
        .unwrap_or_else(|_| args.operation.trim().to_string());
    let outcome = execute_named(&args.operation, &bundle);

    if args.json {
        let payload = match &outcome {
            Ok(value) => ExecPayload {
                schema: 1,
                operation,
                result: "ok",
                value: Some(value.clone()),
                error: None,
            },
            Err(err) => ExecPayload {
                schema: 1,
                operation,
                result: "failed",
                value: None,
                error: Some(ExecError::from(err)),
            },
        };
        let rendered = serde_json::to_string_pretty(&payload).unwrap_or_else(|err| {
            eprintln!("error: failed to render exec payload: {err}");
            process::exit(2);
        });
        println!("{rendered}");
    } else {
        match &outcome {
            Ok(value) => {
                println!("formulary exec");
                println!("  Operation: {operation}");
                println!("  Result: {value}");
            }
            Err(err) => eprintln!("error: {err}"),
        }
    }

    if outcome.is_err() {
        process::exit(1);
    }
}
