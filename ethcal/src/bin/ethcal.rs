extern crate ethcal as lib;

use chrono::Datelike;
use flexi_logger::{FileSpec, Logger};
use lib::core::data_parsers::parse_ymd;
use lib::core::Language;
use lib::engine::{Api, CalendarEngine, MonthView, Request};
use lib::holidays::HolidayTag;
use lib::time::{EthiopianDate, Weekday};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "ethcal",
    about = "Ethiopian calendar: month views, date conversion, and holidays."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "d",
        long = "dataset",
        help = "holiday dataset file, overrides the config",
        parse(from_os_str)
    )]
    pub dataset: Option<PathBuf>,

    #[structopt(short = "l", long = "language", help = "english or amharic")]
    pub language: Option<Language>,

    #[structopt(short = "j", long = "json", help = "print JSON responses")]
    pub json: bool,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,

    #[structopt(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, StructOpt)]
pub enum Command {
    /// Show a month; defaults to the current one.
    Month {
        /// Ethiopian year.
        year: Option<i32>,
        /// Month index, 0 (Meskerem) to 12 (Pagume).
        index: Option<i32>,
    },
    /// Convert an Ethiopian date (yyyy-mm-dd) to Gregorian.
    Convert { date: String },
    /// Convert a Gregorian date (yyyy-mm-dd) to Ethiopian; defaults to today.
    Reverse { date: Option<String> },
    /// Show a holiday by key.
    Holiday { key: String },
    /// List every holiday of an Ethiopian year; public holidays are starred.
    Holidays { year: Option<i32> },
    /// Show the Bahire Hasab of an Ethiopian year.
    BahireHasab { year: Option<i32> },
    /// Answer JSON requests read line by line from stdin.
    Serve,
}

fn main() {
    if let Err(e) = run(Args::from_args()) {
        eprintln!("ethcal: {e}");
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = lib::load_suitable_config(args.configfile.as_deref())?;
    if let Some(dataset) = args.dataset {
        config.dataset = Some(dataset);
    }
    if let Some(language) = args.language {
        config.language = language;
    }

    const DEFAULT_LOG_LEVEL: &str = if cfg!(debug_assertions) {
        "debug"
    } else {
        "warn"
    };
    let level = config.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL);
    let mut logger = Logger::try_with_env_or_str(level)?;
    if let Some(log_file) = args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }
    let _logger = logger.start()?;

    let api = config.api()?;
    let lang = config.language;

    if let Command::Serve = args.cmd {
        return serve(&api);
    }

    let today = today(api.engine())?;
    let request = match args.cmd {
        Command::Month { year, index } => Request::Month {
            year: year.unwrap_or(today.year()),
            month_idx: index.unwrap_or(today.month() as i32 - 1),
        },
        Command::Convert { date } => {
            let (year, month, day) = parse_ymd(&date)?;
            Request::Convert {
                year,
                month: month.into(),
                day: day.into(),
            }
        }
        Command::Reverse { date } => {
            let (year, month, day) = match date {
                Some(date) => parse_ymd(&date)?,
                None => today.to_gregorian().ymd(),
            };
            Request::ConvertReverse {
                year,
                month: month.into(),
                day: day.into(),
            }
        }
        Command::Holiday { key } => Request::Holiday { key },
        Command::BahireHasab { year } => Request::BahireHasab {
            year: year.unwrap_or(today.year()),
        },
        Command::Holidays { year } => {
            return print_year(api.engine(), year.unwrap_or(today.year()), lang);
        }
        Command::Serve => unreachable!("handled above"),
    };

    if args.json {
        let response = api.dispatch(&request);
        println!("{}", serde_json::to_string_pretty(&response)?);
        if !response.ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    print_text(&api, &request, lang)
}

/// Today's Ethiopian date from the local clock.
fn today(engine: &CalendarEngine) -> Result<EthiopianDate, lib::core::Error> {
    let now = chrono::Local::now().date_naive();
    engine.convert_reverse(now.year(), now.month() as u8, now.day() as u8)
}

fn serve(api: &Api) -> Result<(), Box<dyn std::error::Error>> {
    log::info!("serving JSON requests on stdin");
    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        writeln!(out, "{}", api.handle_json(&line))?;
        out.flush()?;
    }
    log::info!("stdin closed");
    Ok(())
}

fn print_text(api: &Api, request: &Request, lang: Language) -> Result<(), Box<dyn std::error::Error>> {
    let engine = api.engine();
    match request {
        Request::Month { year, month_idx } => {
            let view = engine.month_view(*year, *month_idx)?;
            print_month(engine, &view, lang);
        }
        Request::Convert { year, month, day } => {
            let date = EthiopianDate::new(*year, *month as u8, *day as u8)?;
            let gregorian = engine.convert(*year, date.month(), date.day())?;
            println!(
                "{} {} {} = {}, {}",
                date.day(),
                date.month_enum().name(lang),
                date.year(),
                gregorian.weekday().name(lang),
                gregorian.long_format()
            );
        }
        Request::ConvertReverse { year, month, day } => {
            let date = engine.convert_reverse(*year, *month as u8, *day as u8)?;
            println!(
                "{}, {} {} {} ({})",
                date.weekday().name(lang),
                date.day(),
                date.month_enum().name(lang),
                date.year(),
                lib::time::Evangelist::of_year(date.year()).name(lang)
            );
        }
        Request::Holiday { key } => {
            let record = engine.holiday_detail(key)?;
            println!("{}", record.name.get(lang));
            if let lib::holidays::HolidayDate::Fixed { month, day } = record.date {
                if let Some(m) = lib::time::EthiopianMonth::from_number(month) {
                    println!("{day} {}", m.name(lang));
                }
            }
            println!();
            println!("{}", record.description.get(lang));
        }
        Request::BahireHasab { year } => {
            let bh = engine.bahire_hasab(*year)?;
            println!("Bahire Hasab {year} ({})", bh.evangelist.name(lang));
            println!("  amete alem    {}", bh.amete_alem);
            println!("  metene rabiet {}", bh.metene_rabiet);
            println!("  tinte qemer   {} ({})", bh.tinte_qemer, bh.new_year_weekday().name(lang));
            println!("  medeb         {}", bh.medeb);
            println!("  wenber        {}", bh.wenber);
            println!("  abektie       {}", bh.abektie);
            println!("  metqi         {}", bh.metqi);
            println!("  tewsak        {}", bh.tewsak);
            println!("  mebaja hamer  {}", bh.mebaja_hamer);
            for feast in engine.movable_feasts(*year)? {
                let name = engine
                    .holiday_detail(&feast.key)
                    .map(|r| r.name.get(lang).to_string())
                    .unwrap_or_else(|_| feast.key.clone());
                println!(
                    "  {:>2} {:<8} {}  {}",
                    feast.date.day(),
                    feast.date.month_enum().name(lang),
                    feast.date.to_gregorian(),
                    name
                );
            }
        }
    }
    Ok(())
}

fn print_month(engine: &CalendarEngine, view: &MonthView, lang: Language) {
    println!(
        "{} {} ({})",
        view.month_name(lang),
        view.year(),
        view.evangelist().name(lang)
    );
    let header: Vec<String> = (0..7)
        .filter_map(Weekday::from_sunday_index)
        .map(|w| w.english_name()[..2].to_string())
        .collect();
    println!("{}", header.join(" "));

    let mut line = "   ".repeat(view.start_col() as usize);
    for cell in &view.grid {
        let mark = if cell.holidays.is_empty() { ' ' } else { '*' };
        line.push_str(&format!("{:>2}{mark}", cell.day));
        if cell.weekday == Weekday::Saturday {
            println!("{}", line.trim_end());
            line.clear();
        }
    }
    if !line.is_empty() {
        println!("{}", line.trim_end());
    }

    for (day, keys) in &view.holidays {
        for key in keys {
            let name = engine
                .holiday_detail(key)
                .map(|r| r.name.get(lang).to_string())
                .unwrap_or_else(|_| key.clone());
            println!("{day:>3}  {name}");
        }
    }
}

fn print_year(engine: &CalendarEngine, year: i32, lang: Language) -> Result<(), Box<dyn std::error::Error>> {
    for occurrence in engine.holidays_for_year(year)? {
        let record = engine.holiday_detail(&occurrence.key).ok();
        let name = record
            .map(|r| r.name.get(lang).to_string())
            .unwrap_or_else(|| occurrence.key.clone());
        let public = record.is_some_and(|r| r.has_tag(HolidayTag::Public));
        println!(
            "{:>2} {:<8} {} {} {}{}",
            occurrence.date.day(),
            occurrence.date.month_enum().name(lang),
            occurrence.gregorian,
            if public { '*' } else { ' ' },
            name,
            if occurrence.movable { " (movable)" } else { "" }
        );
    }
    Ok(())
}
