use super::genotype_from;
use clap::Args;
use gnomic_core::{Config, OutputFormat};
use gnomic_genotype::{Change, Genotype};
use gnomic_notation::{formatter_for, Formatter, GnomicFormatter};

#[derive(Args)]
pub struct ParseArgs {
    /// Genotype definitions; each one applies on top of the previous
    #[arg(required = true, allow_hyphen_values = true, value_name = "DEFINITION")]
    pub definitions: Vec<String>,

    /// Output format (defaults to the configured one)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Print single-feature insertions and deletions instead of the change list
    #[arg(long)]
    pub flatten: bool,

    /// Keep fusions whole when flattening
    #[arg(long, requires = "flatten")]
    pub fusions: bool,
}

pub fn run(args: ParseArgs, config: &Config) -> anyhow::Result<()> {
    let genotype = genotype_from(&args.definitions, &config.notation)?;
    let format = args.format.unwrap_or(config.output.format);
    let fusions = args.fusions || config.output.fusions;

    println!("{}", render(&genotype, format, args.flatten.then_some(fusions))?);
    Ok(())
}

/// Render the change list, or its flattened form when `flatten` holds the
/// fusion setting.
pub fn render(genotype: &Genotype, format: OutputFormat, flatten: Option<bool>) -> anyhow::Result<String> {
    let Some(fusions) = flatten else {
        return Ok(formatter_for(format).format_genotype(genotype));
    };

    let formatter = formatter_for(format);
    let mut flat: Vec<Change> = genotype.flattened_changes(fusions).into_iter().collect();
    flat.sort_by_cached_key(|change| GnomicFormatter.format_change(change));

    Ok(match format {
        OutputFormat::Json => serde_json::to_string_pretty(&flat)?,
        _ => flat
            .iter()
            .map(|change| formatter.format_change(change))
            .collect::<Vec<_>>()
            .join(" "),
    })
}
