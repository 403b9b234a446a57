use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use vc_app::{AppResult, SettlementReport, settle_ticket, ticket_service};
use vc_correction::{CorrectionEngine, CrudeClass, Reading, RoofConstants};

#[derive(Parser)]
#[command(name = "vc-cli")]
#[command(about = "Petroleum tank volume correction and settlement", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate ticket file syntax, structure and reading measurements
    Validate {
        /// Path to the ticket YAML or JSON file
        ticket_path: PathBuf,
    },
    /// List readings in a ticket
    Readings {
        /// Path to the ticket YAML or JSON file
        ticket_path: PathBuf,
    },
    /// Correct every reading and movement of a ticket
    Settle {
        /// Path to the ticket YAML or JSON file
        ticket_path: PathBuf,
        /// Report format
        #[arg(long, value_enum, default_value_t = ReportFormat::Table)]
        format: ReportFormat,
        /// Output file path (optional, defaults to stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Correct a single reading given on the command line
    Compute(ComputeArgs),
}

#[derive(Clone, Copy, ValueEnum)]
enum ReportFormat {
    Table,
    Yaml,
    Json,
}

#[derive(clap::Args)]
struct ComputeArgs {
    /// Crude classification code (A, B or D)
    #[arg(long)]
    class: CrudeClass,
    /// API gravity at 60 °F
    #[arg(long)]
    api60: f64,
    /// Liquid temperature in °F
    #[arg(long)]
    liquid_temp: f64,
    /// Ambient temperature in °F
    #[arg(long)]
    ambient_temp: f64,
    /// Total observed volume
    #[arg(long)]
    tov: f64,
    /// Free-water volume
    #[arg(long, default_value_t = 0.0)]
    water_tov: f64,
    /// Shell lamination temperature in °F
    #[arg(long)]
    lamination_temp: f64,
    /// Floating-roof reference gravity
    #[arg(long, default_value_t = 0.0)]
    kfra1: f64,
    /// Floating-roof volume per °API
    #[arg(long, default_value_t = 0.0)]
    kfra2: f64,
    /// Water and sediment, percent
    #[arg(long, default_value_t = 0.0)]
    bsw: f64,
    /// Liquid level
    #[arg(long, default_value_t = 0.0)]
    gauge: f64,
    /// Free-water level
    #[arg(long, default_value_t = 0.0)]
    water_gauge: f64,
}

fn main() -> AppResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { ticket_path } => cmd_validate(&ticket_path),
        Commands::Readings { ticket_path } => cmd_readings(&ticket_path),
        Commands::Settle {
            ticket_path,
            format,
            output,
        } => cmd_settle(&ticket_path, format, output.as_deref()),
        Commands::Compute(args) => cmd_compute(&args),
    }
}

fn cmd_validate(ticket_path: &Path) -> AppResult<()> {
    println!("Validating ticket: {}", ticket_path.display());
    let ticket = ticket_service::load_ticket(ticket_path)?;
    ticket_service::validate_ticket(&ticket)?;
    println!("✓ Ticket is valid");
    Ok(())
}

fn cmd_readings(ticket_path: &Path) -> AppResult<()> {
    let ticket = ticket_service::load_ticket(ticket_path)?;
    let readings = ticket_service::list_readings(&ticket);

    if readings.is_empty() {
        println!("No readings found in ticket");
    } else {
        println!("Readings in ticket:");
        for r in readings {
            println!(
                "  {} - {} ({}), class {}, TOV {:.2}, water {:.2}, API {:.1} at {:.1} °F",
                r.id,
                r.tank_id,
                r.tank_name,
                r.classification,
                r.tov,
                r.water_tov,
                r.api60,
                r.liquid_temp_f
            );
        }
    }
    Ok(())
}

fn cmd_settle(ticket_path: &Path, format: ReportFormat, output: Option<&Path>) -> AppResult<()> {
    let ticket = ticket_service::load_ticket(ticket_path)?;
    let report = settle_ticket(&ticket, &CorrectionEngine::new())?;

    let rendered = match format {
        ReportFormat::Table => render_table(&report),
        ReportFormat::Yaml => report.to_yaml()?,
        ReportFormat::Json => report.to_json()?,
    };

    if let Some(path) = output {
        std::fs::write(path, rendered)?;
        println!(
            "✓ Settled {} readings and {} movements to {}",
            report.readings.len(),
            report.movements.len(),
            path.display()
        );
    } else {
        print!("{}", rendered);
    }

    Ok(())
}

fn render_table(report: &SettlementReport) -> String {
    let mut out = String::new();
    out.push_str(&format!("Settlement: {}\n", report.ticket_name));
    for (label, value) in report.load.entries() {
        out.push_str(&format!("  {:<13}{}\n", format!("{label}:"), value));
    }
    out.push_str(&format!("  Generated:   {}\n", report.generated_at));
    out.push_str(&format!("  Engine:      {}\n", report.engine_version));
    out.push_str(&format!("  Fingerprint: {}\n", report.input_fingerprint));

    out.push_str("\nReadings:\n");
    out.push_str(&format!(
        "  {:<16} {:<8} {:>5} {:>8} {:>8} {:>6} {:>8} {:>12} {:>12} {:>12}\n",
        "reading", "tank", "class", "CTL", "CTSh", "API", "FRA", "GOV", "GSV", "NSV"
    ));
    for r in &report.readings {
        out.push_str(&format!(
            "  {:<16} {:<8} {:>5} {:>8.5} {:>8.5} {:>6.1} {:>8.2} {:>12.4} {:>12.2} {:>12.2}\n",
            r.reading_id,
            r.tank_id,
            r.classification,
            r.result.ctl,
            r.result.ctsh,
            r.result.observed_api,
            r.result.roof_adjustment,
            r.result.gov,
            r.result.gsv,
            r.result.nsv
        ));
    }

    if !report.movements.is_empty() {
        out.push_str("\nMovements:\n");
        out.push_str(&format!(
            "  {:<16} {:<8} {:>12} {:>10} {:>12} {:>12}\n",
            "movement", "tank", "TOV", "water", "GSV", "NSV"
        ));
        for m in &report.movements {
            out.push_str(&format!(
                "  {:<16} {:<8} {:>12.2} {:>10.2} {:>12.2} {:>12.2}\n",
                m.movement_id, m.tank_id, m.delta.tov, m.delta.free_water, m.delta.gsv, m.delta.nsv
            ));
        }
    }

    out
}

fn cmd_compute(args: &ComputeArgs) -> AppResult<()> {
    let reading = Reading {
        classification: args.class,
        gauge: args.gauge,
        tov: args.tov,
        water_gauge: args.water_gauge,
        water_tov: args.water_tov,
        liquid_temp_f: args.liquid_temp,
        ambient_temp_f: args.ambient_temp,
        api60: args.api60,
        bsw_percent: args.bsw,
    };
    let roof = RoofConstants::new(args.kfra1, args.kfra2, args.lamination_temp);

    let result = CorrectionEngine::new().compute(&reading, &roof)?;

    println!("Class {} at API {:.1}:", reading.classification, reading.api60);
    println!("  CTL:          {:.5}", result.ctl);
    println!("  CTSh:         {:.5}", result.ctsh);
    println!("  Observed API: {:.1}", result.observed_api);
    println!("  FRA:          {:.2}", result.roof_adjustment);
    println!("  GOV:          {:.4}", result.gov);
    println!("  GSV:          {:.2}", result.gsv);
    println!("  NSV:          {:.2}", result.nsv);
    Ok(())
}
