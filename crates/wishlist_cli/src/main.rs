use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, ValueEnum};
use log::LevelFilter;
use simplelog::{ColorChoice, Config as LogConfig, TermLogger, TerminalMode};

use wishlist_core::client::StoreClient;
use wishlist_core::filter::{self, Criteria};
use wishlist_core::lists::{self, CuratedList};
use wishlist_core::{fetch, prices, snapshot};
use wishlist_render::{CsvOptions, QuoteStyle, project_json, render_csv, render_json_pretty};

const FIELD_HELP: &str = "\
Available wishlist fields, see JSON output:
    name, capsule, review_score, review_desc, reviews_total, reviews_percent,
    release_date, release_string, platform_icons, subs, type, screenshots,
    review_css, priority, added, background, rank, tags, is_free_game,
    deck_compat, win, mac, linux, free, prerelease

Additional fields provided for CSV output:
    gameid, link, released

Additional fields when using --prices to fetch price information:
    initial, final, discount_percent, initial_formatted, final_formatted, currency";

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum PlatformArg {
    Linux,
    Win,
    Mac,
}

impl PlatformArg {
    fn field_name(self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Win => "win",
            Self::Mac => "mac",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum TypeArg {
    Game,
    Dlc,
    Mod,
    Demo,
    Application,
    Music,
}

impl TypeArg {
    fn field_name(self) -> &'static str {
        match self {
            Self::Game => "game",
            Self::Dlc => "dlc",
            Self::Mod => "mod",
            Self::Demo => "demo",
            Self::Application => "application",
            Self::Music => "music",
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum QuoteArg {
    Never,
    Minimal,
    Always,
}

impl QuoteArg {
    fn style(self) -> QuoteStyle {
        match self {
            Self::Never => QuoteStyle::Never,
            Self::Minimal => QuoteStyle::Minimal,
            Self::Always => QuoteStyle::Always,
        }
    }
}

#[derive(Debug, Parser)]
#[command(author, version, about = "Export your Steam wishlist", after_help = FIELD_HELP)]
struct Cli {
    /// Steam user id, a 17 digit number. See
    /// https://help.steampowered.com/en/faqs/view/2816-BE67-5B69-0FEC.
    /// Optional when --load is given.
    #[arg(value_name = "userid")]
    userid: Option<String>,
    /// Value of the steamLoginSecure browser cookie, required for a
    /// private wishlist
    #[arg(short, long, value_name = "cookie")]
    cookie: Option<String>,
    /// Don't report progress on stderr
    #[arg(short, long)]
    quiet: bool,
    /// Output JSON (default)
    #[arg(short, long)]
    json: bool,
    /// Output CSV
    #[arg(short = 't', long, conflicts_with = "json")]
    csv: bool,
    /// Comma-separated list of fields to include
    #[arg(short, long, value_name = "fields")]
    fields: Option<String>,
    /// Field separator used for CSV output (default tab)
    #[arg(short, long, default_value = "\t", value_name = "separator")]
    separator: String,
    /// CSV quoting style (never escapes delimiters occurring in fields)
    #[arg(long, default_value = "never")]
    quote: QuoteArg,
    /// Sort by field
    #[arg(long, value_name = "field", help_heading = "Sorting (CSV)")]
    sort: Option<String>,
    /// Sort numerically
    #[arg(long, visible_alias = "numeric", help_heading = "Sorting (CSV)")]
    num: bool,
    /// Reverse sort
    #[arg(long, help_heading = "Sorting (CSV)")]
    reverse: bool,
    /// Save unprocessed wishlist to file
    #[arg(long, value_name = "file")]
    save: Option<PathBuf>,
    /// Load saved wishlist (made with --save) from file instead of
    /// downloading
    #[arg(long, value_name = "file", conflicts_with = "save")]
    load: Option<PathBuf>,
    /// Supported platform. Can be repeated for multiple platforms
    #[arg(short, long, help_heading = "Filters")]
    platform: Vec<PlatformArg>,
    /// Free games only
    #[arg(long, help_heading = "Filters")]
    free: bool,
    /// Non-free games only
    #[arg(long, help_heading = "Filters")]
    no_free: bool,
    /// Games with demos only
    #[arg(long, help_heading = "Filters")]
    demo: bool,
    /// Games with achievements only
    #[arg(long, help_heading = "Filters")]
    achievements: bool,
    /// Games with trading cards only
    #[arg(long, help_heading = "Filters")]
    cards: bool,
    /// Released games only
    #[arg(long, help_heading = "Filters")]
    released: bool,
    /// Unreleased games only
    #[arg(long, help_heading = "Filters")]
    no_released: bool,
    /// Early access games only
    #[arg(long, help_heading = "Filters")]
    early: bool,
    /// No early access games
    #[arg(long, help_heading = "Filters")]
    no_early: bool,
    /// Type of app. Can be repeated for multiple types
    #[arg(long = "type", help_heading = "Filters")]
    types: Vec<TypeArg>,
    /// List only games with this tag. Can be repeated for multiple tags.
    /// Case-insensitive, spaces and non-alphabetic characters are ignored
    #[arg(long, help_heading = "Filters")]
    tag: Vec<String>,
    /// List only games with a Steam Deck compatibility rating of <int> or
    /// higher
    #[arg(long, value_name = "int", help_heading = "Filters",
          value_parser = clap::value_parser!(i64).range(0..=3))]
    deck: Option<i64>,
    /// Fetch current prices and discounts from the store for the given 2
    /// letter country code. With --load, prices come from the file unless
    /// it contains none
    #[arg(long, value_name = "country code", help_heading = "Price information")]
    prices: Option<String>,
    /// With --load, fetch up to date prices from the store instead of
    /// using prices from the loaded file
    #[arg(long, help_heading = "Price information")]
    refresh: bool,
    /// List games with a discount percentage of <int> or more
    #[arg(long, value_name = "int", help_heading = "Price filters",
          value_parser = clap::value_parser!(i64).range(0..=100))]
    discount: Option<i64>,
    /// List games with a price of <int> or less, in cents (for example
    /// $19.99 is 1999)
    #[arg(long, value_name = "int", help_heading = "Price filters",
          value_parser = clap::value_parser!(i64).range(0..))]
    price: Option<i64>,
}

fn criteria_from_cli(cli: &Cli) -> Criteria {
    Criteria {
        platforms: cli
            .platform
            .iter()
            .map(|p| p.field_name().to_string())
            .collect(),
        types: cli.types.iter().map(|t| t.field_name().to_string()).collect(),
        free: cli.free,
        no_free: cli.no_free,
        released: cli.released,
        no_released: cli.no_released,
        early: cli.early,
        no_early: cli.no_early,
        tags: cli.tag.clone(),
        discount: cli.discount,
        price: cli.price,
        deck: cli.deck,
    }
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let code = match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
                _ => 1,
            };
            let _ = e.print();
            process::exit(code);
        }
    };

    let level = if cli.quiet {
        LevelFilter::Warn
    } else {
        LevelFilter::Info
    };
    let _ = TermLogger::init(
        level,
        LogConfig::default(),
        TerminalMode::Stderr,
        ColorChoice::Never,
    );

    if cli.userid.is_none() && cli.load.is_none() {
        eprintln!("Missing <userid> or --load");
        eprintln!();
        eprintln!("{}", Cli::command().render_help());
        process::exit(1);
    }

    let client = StoreClient::new(cli.cookie.clone()).unwrap_or_else(|e| {
        eprintln!("Error: {e}");
        process::exit(1);
    });

    let mut wishlist = match &cli.load {
        Some(path) => snapshot::load(path).unwrap_or_else(|e| {
            eprintln!("Error loading wishlist: {e}");
            process::exit(1);
        }),
        None => {
            let userid = cli.userid.as_deref().expect("checked above");
            fetch::fetch_wishlist(&client, userid).unwrap_or_else(|e| {
                eprintln!("Error: {e}");
                process::exit(1);
            })
        }
    };

    if let Some(country) = &cli.prices {
        let fresh_needed = cli.load.is_none() || cli.refresh || !prices::has_price_data(&wishlist);
        if fresh_needed {
            prices::enrich_prices(&client, &mut wishlist, country).unwrap_or_else(|e| {
                eprintln!("Error fetching prices: {e}");
                process::exit(1);
            });
        }
    }

    if let Some(path) = &cli.save {
        snapshot::save(&wishlist, path).unwrap_or_else(|e| {
            eprintln!("Error saving wishlist: {e}");
            process::exit(1);
        });
    }

    let mut wanted_lists = Vec::new();
    if cli.demo {
        wanted_lists.push(CuratedList::Demos);
    }
    if cli.cards {
        wanted_lists.push(CuratedList::Cards);
    }
    if cli.achievements {
        wanted_lists.push(CuratedList::Achievements);
    }
    let filter_lists = lists::load_lists(&client, &wanted_lists).unwrap_or_else(|e| {
        eprintln!("Error loading filter list: {e}");
        process::exit(1);
    });

    let criteria = criteria_from_cli(&cli);
    let wishlist = filter::apply(&wishlist, &criteria, &filter_lists);

    let wanted_fields: Option<Vec<String>> = cli
        .fields
        .as_deref()
        .filter(|s| !s.is_empty())
        .map(|s| s.split(',').map(str::to_string).collect());

    if cli.csv {
        let options = CsvOptions {
            separator: cli.separator.clone(),
            quote: cli.quote.style(),
            sort: cli.sort.clone(),
            numeric: cli.num,
            reverse: cli.reverse,
        };
        print!("{}", render_csv(&wishlist, wanted_fields.as_deref(), &options));
    } else {
        let value = project_json(&wishlist, wanted_fields.as_deref());
        let rendered = render_json_pretty(&value).unwrap_or_else(|e| {
            eprintln!("Error rendering JSON output: {e}");
            process::exit(1);
        });
        println!("{rendered}");
    }
}
