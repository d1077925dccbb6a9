use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Just the clamped number
    #[default]
    Plain,
    /// Bounds, input and result as a JSON object
    Json,
}
