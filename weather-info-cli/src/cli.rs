use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use inquire::{Select, Text};

use weather_info_core::{
    Config, HistoryStore, LocationQuery, LookupError, Unit, WeatherClient, WeatherReport,
    WeatherService,
};

/// Top-level CLI struct.
#[derive(Debug, Parser)]
#[command(name = "weather-info", version, about = "Weather lookup with forecast and history")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UnitArg {
    Celsius,
    Fahrenheit,
}

impl From<UnitArg> for Unit {
    fn from(value: UnitArg) -> Self {
        match value {
            UnitArg::Celsius => Unit::Celsius,
            UnitArg::Fahrenheit => Unit::Fahrenheit,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Store the OpenWeather API key.
    Configure,

    /// Show current weather and a short forecast for a location.
    Show {
        /// City name, or "city,country".
        location: String,

        /// Display unit for temperature and wind speed.
        #[arg(long, value_enum, default_value_t = UnitArg::Celsius)]
        unit: UnitArg,
    },

    /// Interactive session: repeated lookups with a running history.
    Session,
}

impl Cli {
    pub async fn run(self) -> anyhow::Result<()> {
        match self.command {
            Command::Configure => configure(),
            Command::Show { location, unit } => show(location, unit.into()).await,
            Command::Session => session().await,
        }
    }
}

fn configure() -> anyhow::Result<()> {
    let mut config = Config::load()?;

    let api_key = Text::new("OpenWeather API key:")
        .prompt()
        .context("Failed to read API key")?;
    if api_key.trim().is_empty() {
        anyhow::bail!("API key must not be empty.");
    }

    config.set_api_key(api_key.trim().to_string());
    config.save()?;

    println!("Saved to {}", Config::config_file_path()?.display());
    Ok(())
}

fn build_service() -> anyhow::Result<WeatherService<WeatherClient>> {
    let config = Config::load()?;
    let api_key = config.resolved_api_key()?;
    let client = WeatherClient::new(api_key).context("Failed to build HTTP client")?;
    Ok(WeatherService::new(client))
}

async fn show(location: String, unit: Unit) -> anyhow::Result<()> {
    let service = build_service()?;
    let query = LocationQuery::new(location, unit)?;

    match service.lookup(&query).await {
        Ok(report) => {
            print_report(&report);
            Ok(())
        }
        Err(err) => Err(anyhow::anyhow!(render_lookup_error(&err))),
    }
}

async fn session() -> anyhow::Result<()> {
    let service = build_service()?;

    println!("Enter a location per lookup; leave empty to quit.");
    loop {
        let location = Text::new("Location:")
            .prompt()
            .context("Failed to read location")?;
        if location.trim().is_empty() {
            break;
        }

        let unit = Select::new("Unit:", Unit::all().to_vec())
            .prompt()
            .context("Failed to read unit")?;

        let query = match LocationQuery::new(location, unit) {
            Ok(query) => query,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        match service.lookup(&query).await {
            Ok(report) => print_report(&report),
            Err(err) => eprintln!("{}", render_lookup_error(&err)),
        }

        print_history(service.history());
    }

    Ok(())
}

fn render_lookup_error(err: &LookupError) -> String {
    match err {
        LookupError::LocationNotFound => "Error: Location not found".to_string(),
        LookupError::RequestFailed(detail) => format!("Error: {detail}"),
    }
}

fn print_report(report: &WeatherReport) {
    let symbol = report.unit.symbol();

    println!();
    println!("{} [{}]", report.current.city_name, report.icon.file_name());
    println!("  Temperature: {:.2} {symbol}", report.current.temperature);
    println!("  Humidity:    {} %", report.current.humidity_pct);
    println!(
        "  Wind Speed:  {:.2} {}",
        report.wind_speed, report.wind_label
    );
    println!("  Condition:   {}", report.current.condition);

    if let Some(detail) = &report.forecast_error {
        eprintln!("Forecast unavailable: {detail}");
    } else if !report.forecast.is_empty() {
        println!("Forecast:");
        for row in &report.forecast {
            println!(
                "  {}  {:.2}{symbol}  [{}]",
                row.time_of_day,
                row.temperature,
                row.icon.file_name()
            );
        }
    }
    println!();
}

fn print_history(history: &HistoryStore) {
    let entries = history.all();
    if entries.is_empty() {
        return;
    }

    println!("History:");
    for entry in entries {
        println!(
            "  {}  {:.2}{}  [{}]",
            entry.label,
            entry.temperature,
            entry.unit.symbol(),
            entry.icon.file_name()
        );
    }
    println!();
}
