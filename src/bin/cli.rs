//! Z-Xin tools CLI
//!
//! Runs one homework deadline scan per invocation; schedule it externally
//! (cron, systemd timer) and never run two scans on one output directory
//! at the same time.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use zxin_tools::{
    error::{AppError, Result},
    models::{Config, ScanConfig, ScanOutcome},
    pipeline::DeadlineScanner,
    services::{
        CourseProvider, PortalClient, PortalCourseProvider, StaticCourseProvider, export_courses,
        notify,
    },
    storage::{KnownIdStore, LocalStorage, Storage, keys},
};

/// Z-Xin course portal tools
#[derive(Parser, Debug)]
#[command(
    name = "zxin",
    version,
    about = "Homework deadline reminders for the Z-Xin course portal"
)]
struct Cli {
    /// Path to directory containing config.toml
    #[arg(short, long, default_value = "storage")]
    storage_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Scan homework deadlines and send reminders
    Scan {
        /// Remind about unsubmitted work due within this many days
        #[arg(long)]
        threshold_days: Option<f64>,

        /// Replay a saved course_data.json instead of calling the portal
        #[arg(long)]
        from_file: Option<PathBuf>,
    },

    /// Fetch joined courses and save the raw response
    Courses,

    /// Show the logged-in user's profile
    User,

    /// Validate configuration files
    Validate,

    /// Show output directory state
    Info,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

fn portal_client(config: &Config) -> Result<Arc<PortalClient>> {
    if !config.has_credentials() {
        return Err(AppError::config(format!(
            "Missing credentials: set [account] in config.toml or {} / {}",
            zxin_tools::models::USERNAME_ENV,
            zxin_tools::models::PASSWORD_ENV
        )));
    }
    Ok(Arc::new(PortalClient::new(&config.api, config.account.clone())?))
}

/// Main entry point for the CLI application.
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.storage_dir.join("config.toml");
    let config = Config::load_or_default(&config_path).with_env_overrides();
    log::info!("Loaded configuration from {}", cli.storage_dir.display());

    let storage = Arc::new(LocalStorage::new(&config.paths.output));

    match cli.command {
        Command::Scan {
            threshold_days,
            from_file,
        } => {
            config.validate()?;
            let threshold = match threshold_days {
                Some(days) => ScanConfig::check_threshold_days(days)?,
                None => config.scan.threshold_days,
            };

            let provider: Arc<dyn CourseProvider> = match from_file {
                Some(path) => {
                    log::info!("Replaying course data from {}", path.display());
                    Arc::new(StaticCourseProvider::from_file(&path)?)
                }
                None => Arc::new(PortalCourseProvider::new(portal_client(&config)?)),
            };
            let notifier = notify::from_config(&config.notify)?;
            let scanner = DeadlineScanner::new(provider, notifier, storage, config.scan.clone())?;

            match scanner.scan_with_threshold(threshold).await {
                ScanOutcome::NoData => {
                    return Err(AppError::fetch("no course data available"));
                }
                ScanOutcome::Completed(report) => {
                    for item in &report.upcoming {
                        println!(
                            "{} | {} | {} | {}",
                            item.course_name,
                            item.title,
                            item.end_time_local.format("%Y-%m-%d %H:%M"),
                            item.remaining_time
                        );
                    }
                    log::info!(
                        "{} items, {} upcoming, {} new",
                        report.total,
                        report.upcoming.len(),
                        report.new_ids.len()
                    );
                    if !report.is_clean() {
                        log::warn!(
                            "Scan degraded: {} skipped, {} notifications failed, {} writes failed",
                            report.skipped.len(),
                            report.notify_failures,
                            report.write_failures.len()
                        );
                    }
                }
            }
        }

        Command::Courses => {
            let provider = PortalCourseProvider::new(portal_client(&config)?);
            let count = export_courses(&provider, storage.as_ref()).await?;
            log::info!(
                "Saved {} homework items to {}",
                count,
                storage.path(keys::COURSE_DATA).display()
            );
        }

        Command::User => {
            let info = portal_client(&config)?.user_info().await?;
            println!("username:  {}", info.username);
            println!("nickname:  {}", info.nickname);
            println!("email:     {}", info.email);
            println!("college:   {}", info.college);
            println!("classroom: {}", info.classroom);
            println!("grade:     {}", info.grade);
        }

        Command::Validate => {
            log::info!("Validating configuration...");

            if let Err(e) = config.validate() {
                log::error!("Config validation failed: {}", e);
                return Err(e);
            }
            log::info!("✓ Config OK");
            if !config.has_credentials() {
                log::warn!("No credentials configured; only --from-file scans will work");
            }
        }

        Command::Info => {
            log::info!("Output directory: {}", storage.root().display());

            let known = KnownIdStore::new(storage.clone() as Arc<dyn Storage>)
                .load()
                .await;
            log::info!("Known homework ids: {}", known.len());

            match storage.load_document(keys::ALL_HOMEWORK).await {
                Ok(Some(doc)) => {
                    let count = doc
                        .get("all_homework")
                        .and_then(|v| v.as_array())
                        .map(|a| a.len())
                        .unwrap_or(0);
                    log::info!("Last scan recorded {} homework items", count);
                }
                Ok(None) => log::info!("No scan output found yet."),
                Err(e) => log::warn!("Cannot read {}: {}", keys::ALL_HOMEWORK, e),
            }
        }
    }

    log::info!("Done!");

    Ok(())
}
