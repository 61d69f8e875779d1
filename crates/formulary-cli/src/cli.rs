use clap::{Parser, Subcommand, ValueEnum};
use formulary_kernel::Category;

#[derive(Parser)]
#[command(
    name = "formulary",
    about = "Formulary: strict-contract dispatch over a closed catalog of numeric formulas",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List catalog operations with their required parameters
    List {
        /// Restrict the listing to one category
        #[arg(long, value_enum)]
        category: Option<CategoryArg>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Describe one operation
    Describe {
        /// Operation token (e.g. `area_circle`)
        operation: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Execute one operation against a named argument bundle
    Exec {
        /// Operation token (e.g. `add`)
        operation: String,

        /// Named argument as `name=value`; value is a JSON number or array
        #[arg(long = "arg", value_name = "NAME=VALUE")]
        args: Vec<String>,

        /// Whole argument bundle as a JSON object, merged before `--arg`
        #[arg(long = "args-json", value_name = "JSON")]
        args_json: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Emit the operation registry as JSON
    Registry {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the operation registry for drift and emit a deterministic report
    RegistryCheck {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CategoryArg {
    #[value(name = "arithmetic")]
    Arithmetic,
    #[value(name = "geometry")]
    Geometry,
    #[value(name = "volumes")]
    Volumes,
    #[value(name = "trigonometry")]
    Trigonometry,
    #[value(name = "logarithms")]
    Logarithms,
    #[value(name = "statistics")]
    Statistics,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Arithmetic => Category::Arithmetic,
            CategoryArg::Geometry => Category::Geometry,
            CategoryArg::Volumes => Category::Volumes,
            CategoryArg::Trigonometry => Category::Trigonometry,
            CategoryArg::Logarithms => Category::Logarithms,
            CategoryArg::Statistics => Category::Statistics,
        }
    }
}
