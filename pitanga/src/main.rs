mod analysis;
mod app;
mod error;
#[cfg(test)]
mod fixtures;
mod layout;
mod loader;
mod menu;
mod nav;
mod report;
mod settings;
mod sheet_screen;
mod summary;
mod table;

use app::PitangaApp;
use clap::Parser;
use eframe::NativeOptions;
use settings::Settings;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pitanga")]
#[command(about = "Maria Pitanga analysis center: summarize .xlsx, .xls and .csv files")]
#[command(version)]
struct Args {
    /// Spreadsheet to preselect
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Print the analysis of FILE to stdout instead of opening a window
    #[arg(long, requires = "file")]
    print: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

fn main() -> eframe::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose, args.quiet);

    let settings = Settings::load();

    if args.print {
        let report = analysis::analyse(args.file.as_deref(), &settings.load_options());
        for line in report.lines() {
            println!("{}", line);
        }
        return Ok(());
    }

    let options = NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([500.0, 600.0])
            .with_min_inner_size([360.0, 320.0])
            .with_title("Maria Pitanga - Açaí e Gelatos"),
        ..Default::default()
    };
    let initial_file = args.file;
    eframe::run_native(
        "pitanga",
        options,
        Box::new(move |cc| {
            pitangacore::PitangaTheme::default().apply(&cc.egui_ctx);
            let mut app = PitangaApp::new(cc, settings);
            if let Some(path) = initial_file {
                if path.exists() {
                    app.open_file(path);
                } else {
                    log::warn!("ignoring missing file {:?}", path);
                }
            }
            Box::new(app)
        }),
    )
}

fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "[{} {}] {}", record.level(), record.target(), record.args()))
        .init();
}
