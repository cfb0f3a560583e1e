//! Geodex application runtime: wires settings, theme, loader and index
//! together and dispatches CLI commands.
//!
//! Everything here is presentation glue. The renderers produce plain lines
//! of text from core results and stay deliberately dumb; the data/query
//! layer underneath never prints.

use crate::args::{Cli, Command};
use crate::index::CountryIndex;
use crate::logic;
use crate::nav::{Navigator, Resolution};
use crate::sources::{self, DataSources, LoadProgress};
use crate::state::{AppContext, Country};
use crate::theme::{self, ThemePref};
use crate::util::config::Settings;
use crate::util::format_number;

/// Boxed error alias used by the runtime entrypoint.
type Result<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Loading signal for interactive runs: a single status line on stderr so
/// stdout stays clean for the actual results.
struct StderrProgress;

impl LoadProgress for StderrProgress {
    fn show_loading(&self, active: bool) {
        if active {
            eprintln!("Loading countries…");
        }
    }
}

/// What: Run the application for one CLI invocation.
///
/// Inputs:
/// - `cli`: Parsed command line.
///
/// Output:
/// - `Ok(())` in all data paths; the loader degrades instead of failing, and
///   lookup misses are user-visible text rather than errors.
pub async fn run(cli: Cli) -> Result<()> {
    let config_dir = theme::config_dir();
    let cache_dir = theme::cache_dir();
    let settings = Settings::load_from(&config_dir);
    let theme_pref = ThemePref::load_from(&config_dir);

    // Theme maintenance needs no dataset at all.
    if let Some(Command::Theme { toggle }) = &cli.command {
        let pref = if *toggle {
            let next = theme_pref.toggled();
            next.save_to(&config_dir);
            next
        } else {
            theme_pref
        };
        println!("Theme: {}", pref.as_str());
        return Ok(());
    }

    let refresh = matches!(
        cli.command,
        Some(Command::List { refresh: true, .. } | Command::Show { refresh: true, .. })
    );
    let data_sources = DataSources::from_settings(&settings, refresh);
    let countries = sources::load(&data_sources, &cache_dir, &StderrProgress).await;
    let mut ctx = AppContext::new(countries, theme_pref);

    match cli.command {
        None => print!("{}", render_list(&ctx.index, None, None)),
        Some(Command::List { region, search, .. }) => {
            print!(
                "{}",
                render_list(&ctx.index, region.as_deref(), search.as_deref())
            );
        }
        Some(Command::Show { code, .. }) => {
            ctx.nav = Navigator::open_detail(code);
            println!("{}", render_current(&ctx));
        }
        Some(Command::Regions) => {
            for region in ctx.index.regions() {
                println!("{region}");
            }
        }
        Some(Command::Theme { .. }) => {}
    }
    Ok(())
}

/// Substitute `N/A` for empty display fields.
fn or_na(value: &str) -> &str {
    if value.is_empty() { "N/A" } else { value }
}

/// What: Render the filtered country list plus the results-count line.
///
/// Inputs:
/// - `index`: The country index.
/// - `region` / `search`: Optional filter inputs straight from the CLI.
///
/// Output:
/// - One line per surviving country (marked name when the search matched on
///   the name), a closing count line, and a no-results indicator when the
///   filters matched nothing. An unpopulated index gets its own message so
///   "zero matches" and "no data" stay distinguishable.
fn render_list(index: &CountryIndex, region: Option<&str>, search: Option<&str>) -> String {
    if index.is_empty() {
        return "No country data available.\n".to_string();
    }
    let outcome = logic::filter(index, region.unwrap_or(""), search.unwrap_or(""));
    let mut out = String::new();
    if outcome.is_empty() {
        out.push_str("No countries match your search.\n");
    } else {
        for c in &outcome.items {
            out.push_str(&format!(
                "{} | Population: {} | Region: {} | Capital: {}\n",
                outcome.display_name(c),
                format_number(c.population),
                or_na(&c.region),
                or_na(&c.capital),
            ));
        }
    }
    out.push_str(&outcome.count_label());
    out.push('\n');
    out
}

/// What: Render the detail view for the current navigation entry.
///
/// Inputs:
/// - `ctx`: Application context (index + navigator).
///
/// Output:
/// - The country detail block, or the "No country selected." /
///   "Country not found." message matching the resolution.
fn render_current(ctx: &AppContext) -> String {
    match ctx.nav.resolve_current(&ctx.index) {
        Resolution::NoneSelected => "No country selected.".to_string(),
        Resolution::NotFound(_) => "Country not found.".to_string(),
        Resolution::Found(country) => render_detail(country, &ctx.index),
    }
}

/// What: Render one country's detail block.
///
/// Inputs:
/// - `country`: The resolved record.
/// - `index`: Index for resolving border codes to names.
///
/// Output:
/// - A multi-line block with the labelled detail fields, border countries
///   resolved to their names where possible.
fn render_detail(country: &Country, index: &CountryIndex) -> String {
    let currencies = join_or_na(country.currencies.iter().map(|c| c.name.as_str()));
    let languages = join_or_na(country.languages.iter().map(|l| l.name.as_str()));
    let domains = join_or_na(country.top_level_domain.iter().map(String::as_str));

    let borders = if country.borders.is_empty() {
        "None".to_string()
    } else {
        index
            .border_links(country)
            .iter()
            .map(|link| link.label.clone())
            .collect::<Vec<_>>()
            .join(", ")
    };

    format!(
        "{}\n  Native Name: {}\n  Population: {}\n  Region: {}\n  Sub Region: {}\n  Capital: {}\n  Top Level Domain: {}\n  Currencies: {}\n  Languages: {}\n  Border Countries: {}",
        country.name,
        or_na(&country.native_name),
        format_number(country.population),
        or_na(&country.region),
        or_na(&country.subregion),
        or_na(&country.capital),
        domains,
        currencies,
        languages,
        borders,
    )
}

/// Join non-empty items with `, `, or `N/A` when nothing remains.
fn join_or_na<'a>(items: impl Iterator<Item = &'a str>) -> String {
    let joined: Vec<&str> = items.filter(|s| !s.is_empty()).collect();
    if joined.is_empty() {
        "N/A".to_string()
    } else {
        joined.join(", ")
    }
}
