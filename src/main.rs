use clap::Parser;

use cinema_booking::utils::{logger, validation::Validate};
use cinema_booking::{BookingSession, CliConfig, FsTicketSink, StdioConsole, Theater};

fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting cinema-booking CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 解析並驗證配置
    let settings = match cli.resolve() {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Failed to resolve configuration: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };
    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    // 載入片單和場次
    let mut theater = Theater::new();
    let movies = theater.load_movies_from_path(&settings.movies_file)?;
    tracing::info!("Loaded {} movies from {}", movies, settings.movies_file);
    for line in theater.movie_lines() {
        tracing::debug!("{}", line);
    }

    let showtimes = theater.load_showtimes_from_path(&settings.showtimes_file)?;
    tracing::info!(
        "Loaded {} showtimes from {}",
        showtimes,
        settings.showtimes_file
    );

    // 互動訂票流程
    let console = StdioConsole;
    let tickets = FsTicketSink::new(&settings.ticket_dir);
    let mut session = BookingSession::new(console, tickets);

    match session.run(&mut theater) {
        Ok(seats) if seats.is_empty() => {
            tracing::info!("Session finished with no seats booked");
        }
        Ok(seats) => {
            tracing::info!("✅ Booked {} seat(s), tickets written to {}", seats.len(), settings.ticket_dir);
            println!("✅ Booked {} seat(s).", seats.len());
        }
        Err(e) => {
            tracing::error!("❌ Booking session failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }

    Ok(())
}
