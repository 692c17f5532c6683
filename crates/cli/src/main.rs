use anyhow::{Context, Result, bail};
use catalog::parser::{parse_color, parse_size};
use catalog::{Catalog, Color, Product, Size};
use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use filtering::specifications::{AcceptAll, AndSpecification, ColorSpecification, SizeSpecification};
use filtering::{Filter, LinearFilter, NaiveFilter, Specification};
use std::path::{Path, PathBuf};

/// spec-filter - filter a product catalog with composable specifications
#[derive(Parser)]
#[command(name = "spec-filter")]
#[command(about = "Filter a product catalog by color and size", long_about = None)]
struct Cli {
    /// Catalog file (`name::color::size` lines, or a .json array).
    /// Uses the built-in sample catalog when omitted.
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show every product in the catalog
    List,

    /// Show products matching all of the given criteria
    Filter {
        /// Keep only products of this color (red, green, blue)
        #[arg(long, value_parser = parse_color)]
        color: Option<Color>,

        /// Keep only products of this size (small, medium, large)
        #[arg(long, value_parser = parse_size)]
        size: Option<Size>,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Walk through color, size and combined filtering
    Demo,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let catalog = load_catalog(cli.catalog.as_deref())?;

    match cli.command {
        Commands::List => handle_list(&catalog),
        Commands::Filter {
            color,
            size,
            format,
        } => handle_filter(&catalog, color, size, format)?,
        Commands::Demo => handle_demo(&catalog)?,
    }

    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<Catalog> {
    match path {
        Some(path) => {
            let catalog = Catalog::load_from_file(path)
                .with_context(|| format!("Failed to load catalog from {}", path.display()))?;
            tracing::info!("Loaded {} products from {}", catalog.len(), path.display());
            Ok(catalog)
        }
        None => {
            tracing::debug!("No catalog given, using the built-in sample");
            Ok(Catalog::sample())
        }
    }
}

/// Handle the 'list' command
fn handle_list(catalog: &Catalog) {
    let products: Vec<&Product> = catalog.products().iter().collect();
    print!("{}", render_products("Catalog", &products));
}

/// Handle the 'filter' command
fn handle_filter(
    catalog: &Catalog,
    color: Option<Color>,
    size: Option<Size>,
    format: OutputFormat,
) -> Result<()> {
    let spec = build_specification(color, size);
    let matches = LinearFilter.filter(catalog.products(), &spec);
    tracing::debug!(
        "{} of {} products match {}",
        matches.len(),
        catalog.len(),
        spec.describe()
    );

    match format {
        OutputFormat::Text => {
            let title = format!("Products matching {}", spec.describe());
            print!("{}", render_products(&title, &matches));
        }
        OutputFormat::Json => println!("{}", render_json(&matches)?),
    }
    Ok(())
}

/// Handle the 'demo' command
fn handle_demo(catalog: &Catalog) -> Result<()> {
    let naive = NaiveFilter.by_color(catalog.products(), Color::Green);
    let better = LinearFilter.filter(catalog.products(), &ColorSpecification::new(Color::Green));
    if naive != better {
        bail!("naive and specification-based color filters disagree");
    }

    println!("{}", "Open-closed filtering".bold().blue());
    for line in demo_lines(catalog) {
        println!("{} {}", "•".green(), line);
    }
    println!(
        "{} naive color filter agrees ({} green products)",
        "✓".green(),
        naive.len()
    );
    Ok(())
}

/// Combine the optional criteria into one specification.
///
/// With no criteria every product matches.
fn build_specification(color: Option<Color>, size: Option<Size>) -> Box<dyn Specification<Product>> {
    match (color, size) {
        (Some(color), Some(size)) => {
            Box::new(ColorSpecification::new(color).and(SizeSpecification::new(size)))
        }
        (Some(color), None) => Box::new(ColorSpecification::new(color)),
        (None, Some(size)) => Box::new(SizeSpecification::new(size)),
        (None, None) => Box::new(AcceptAll),
    }
}

/// Green things, large things, then things that are both.
fn demo_lines(catalog: &Catalog) -> Vec<String> {
    let green = ColorSpecification::new(Color::Green);
    let large = SizeSpecification::new(Size::Large);
    let green_and_large = AndSpecification::new(&green, &large);

    let mut lines = Vec::new();
    for product in LinearFilter.filter(catalog.products(), &green) {
        lines.push(format!("{} is green", product.name));
    }
    for product in LinearFilter.filter(catalog.products(), &large) {
        lines.push(format!("{} is large", product.name));
    }
    for product in LinearFilter.filter(catalog.products(), &green_and_large) {
        lines.push(format!("{} is large and green", product.name));
    }
    lines
}

fn render_json(products: &[&Product]) -> Result<String> {
    serde_json::to_string_pretty(products).context("Failed to serialize matching products")
}

fn render_products(title: &str, products: &[&Product]) -> String {
    let mut out = format!("{}\n", format!("{title} ({})", products.len()).bold().blue());
    if products.is_empty() {
        out.push_str(&format!("  {}\n", "no products".dimmed()));
    }
    for (rank, product) in products.iter().enumerate() {
        out.push_str(&format!(
            "{}. {} ({}, {})\n",
            (rank + 1).to_string().green(),
            product.name,
            product.color,
            product.size
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_lines_for_sample() {
        assert_eq!(
            demo_lines(&Catalog::sample()),
            vec![
                "Apple is green",
                "Tree is green",
                "Tree is large",
                "House is large",
                "Tree is large and green",
            ]
        );
    }

    #[test]
    fn test_build_specification() {
        let catalog = Catalog::sample();
        let count = |spec: Box<dyn Specification<Product>>| {
            LinearFilter.filter(catalog.products(), &spec).len()
        };

        assert_eq!(count(build_specification(None, None)), 3);
        assert_eq!(count(build_specification(Some(Color::Green), None)), 2);
        assert_eq!(count(build_specification(None, Some(Size::Small))), 1);
        assert_eq!(count(build_specification(Some(Color::Blue), Some(Size::Small))), 0);
        assert_eq!(
            build_specification(Some(Color::Green), Some(Size::Large)).describe(),
            "color = green and size = large"
        );
    }

    #[test]
    fn test_render_products() {
        let catalog = Catalog::sample();
        let products: Vec<&Product> = catalog.products().iter().collect();

        let rendered = render_products("Catalog", &products);
        assert!(rendered.contains("House (blue, large)"));
        assert_eq!(rendered.lines().count(), 4);

        let empty = render_products("Nothing", &[]);
        assert!(empty.contains("no products"));
    }

    #[test]
    fn test_render_json_for_large_products() {
        let catalog = Catalog::sample();
        let spec = build_specification(None, Some(Size::Large));
        let matches = LinearFilter.filter(catalog.products(), &spec);

        let json = render_json(&matches).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                { "name": "Tree", "color": "green", "size": "large" },
                { "name": "House", "color": "blue", "size": "large" },
            ])
        );

        assert_eq!(render_json(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_cli_parses_filter_args() {
        let cli = Cli::try_parse_from([
            "spec-filter",
            "filter",
            "--color",
            "Green",
            "--size",
            "large",
            "--format",
            "json",
        ])
        .unwrap();

        match cli.command {
            Commands::Filter { color, size, format } => {
                assert_eq!(color, Some(Color::Green));
                assert_eq!(size, Some(Size::Large));
                assert_eq!(format, OutputFormat::Json);
            }
            _ => panic!("expected filter command"),
        }
    }

    #[test]
    fn test_cli_rejects_unknown_color() {
        assert!(Cli::try_parse_from(["spec-filter", "filter", "--color", "purple"]).is_err());
    }

    #[test]
    fn test_load_catalog_error_has_context() {
        let err = load_catalog(Some(Path::new("missing/catalog.dat"))).unwrap_err();
        assert!(err.to_string().contains("Failed to load catalog"));
    }
}
