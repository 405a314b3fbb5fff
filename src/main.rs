// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! carrent CLI - Car Rental API Client
//!
//! Drives every frontend action from the terminal. The session cookies are
//! kept in a JSON file between runs.

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;
use std::sync::Arc;

use anyhow::Context as _;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use carrent::{
    ApiClient, ConsoleView, CookieJar, Endpoints, Frontend, HttpClient, HttpClientConfig,
};

/// Environment variable naming the session file
const SESSION_FILE_ENV: &str = "CARRENT_SESSION_FILE";
const DEFAULT_SESSION_FILE: &str = ".carrent-session.json";
/// Log filter used when `RUST_LOG` is unset or unparsable
const DEFAULT_LOG_FILTER: &str = "carrent=info";

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(env::var(EnvFilter::DEFAULT_ENV).ok()))
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = env::args().collect();

    if args.len() < 2 {
        print_usage();
        return ExitCode::from(1);
    }

    match args[1].as_str() {
        "--help" | "-h" | "help" => {
            print_usage();
            ExitCode::SUCCESS
        }
        "--version" | "-v" | "version" => {
            println!("carrent {}", carrent::VERSION);
            ExitCode::SUCCESS
        }
        cmd => run(cmd, &args[2..]).await,
    }
}

/// `RUST_LOG` wins over the default filter when it parses
fn log_filter(rust_log: Option<String>) -> EnvFilter {
    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

fn print_usage() {
    println!(
        r#"carrent - Car Rental API Client

USAGE:
    carrent <COMMAND> [ARGS]

COMMANDS:
    sign-in <login> <password>          Sign in and store the session
    sign-out                            Forget the session
    register <login> <password>         Create a user
    whoami                              Show the stored session
    book <start-office> <end-office> <car-uuid> <start> <end> <cc-number> <price>
                                        Book a car
    cancel <booking-id>                 Cancel a booking
    finish <booking-id>                 End a booking
    cars                                List cars
    car <car-uuid>                      Show where a car is available
    create-car <brand> <model> <type> <power>
                                        Add a car to the catalogue
    delete-car <car-uuid>               Remove a car from every office
    add-office <location>               Open an office
    add-car <office-id> <car-uuid> <available-from>
                                        Place a car in an office

ENVIRONMENT:
    CARRENT_SIGN_IN_ENDPOINT    default http://localhost:7771/auth
    CARRENT_REGISTER_ENDPOINT   default http://localhost:7771/register
    CARRENT_CARS_ENDPOINT       default http://localhost:7779/cars
    CARRENT_BOOKING_ENDPOINT    default http://localhost:7779/booking
    CARRENT_OFFICES_ENDPOINT    default http://localhost:7779/offices
    CARRENT_SESSION_FILE        default .carrent-session.json
    RUST_LOG                    log filter, default carrent=info
"#
    );
}

/// Why a command did not succeed
enum Failure {
    /// Bad arguments; usage hint to print
    Usage(String),
    /// Backend or transport error, already shown by the view
    Shown,
}

impl From<carrent::Error> for Failure {
    fn from(_: carrent::Error) -> Self {
        Failure::Shown
    }
}

struct Cli {
    session_file: PathBuf,
    jar: Arc<CookieJar>,
    front: Frontend<ConsoleView>,
}

impl Cli {
    fn load() -> anyhow::Result<Self> {
        let session_file = env::var_os(SESSION_FILE_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SESSION_FILE));

        let endpoints = Endpoints::from_env().context("reading endpoint configuration")?;
        let jar = Arc::new(
            CookieJar::load(&session_file)
                .with_context(|| format!("loading session from {}", session_file.display()))?,
        );
        let http = HttpClient::with_store(HttpClientConfig::default(), jar.clone())
            .context("building HTTP client")?;
        debug!(?endpoints, session_file = %session_file.display(), "configuration loaded");

        Ok(Self {
            session_file,
            jar,
            front: Frontend::new(ApiClient::with_http(http, endpoints), ConsoleView),
        })
    }

    fn save(&self) -> anyhow::Result<()> {
        self.jar
            .save(&self.session_file)
            .with_context(|| format!("saving session to {}", self.session_file.display()))
    }
}

async fn run(cmd: &str, args: &[String]) -> ExitCode {
    let cli = match Cli::load() {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("Failed to start: {:#}", e);
            return ExitCode::from(1);
        }
    };

    let outcome = dispatch(&cli.front, cmd, args).await;

    if let Err(e) = cli.save() {
        eprintln!("{:#}", e);
        return ExitCode::from(1);
    }

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(Failure::Usage(hint)) => {
            eprintln!("{}", hint);
            ExitCode::from(1)
        }
        Err(Failure::Shown) => ExitCode::from(1),
    }
}

/// Check the argument count for a command
fn arity<'a>(cmd: &str, args: &'a [String], names: &[&str]) -> Result<&'a [String], Failure> {
    if args.len() == names.len() {
        Ok(args)
    } else {
        let placeholders: Vec<String> = names.iter().map(|n| format!("<{}>", n)).collect();
        Err(Failure::Usage(format!(
            "Usage: carrent {} {}",
            cmd,
            placeholders.join(" ")
        )))
    }
}

fn number<T: FromStr>(name: &str, value: &str) -> Result<T, Failure> {
    value
        .trim()
        .parse()
        .map_err(|_| Failure::Usage(format!("{} must be a number, got '{}'", name, value)))
}

async fn dispatch(front: &Frontend<ConsoleView>, cmd: &str, args: &[String]) -> Result<(), Failure> {
    match cmd {
        "sign-in" => {
            let a = arity(cmd, args, &["login", "password"])?;
            let session = front.sign_in(&a[0], &a[1]).await?;
            println!(
                "Signed in as {}{}",
                session.user,
                if session.is_admin { " (admin)" } else { "" }
            );
        }
        "sign-out" => {
            arity(cmd, args, &[])?;
            front.sign_out();
            println!("Signed out");
        }
        "register" => {
            let a = arity(cmd, args, &["login", "password"])?;
            front.register(&a[0], &a[1]).await?;
        }
        "whoami" => {
            arity(cmd, args, &[])?;
            match front.session() {
                Some(session) => println!(
                    "{}{}",
                    session.user,
                    if session.is_admin { " (admin)" } else { "" }
                ),
                None => println!("Not signed in"),
            }
        }
        "book" => {
            let a = arity(
                cmd,
                args,
                &["start-office", "end-office", "car-uuid", "start", "end", "cc-number", "price"],
            )?;
            let start = number("start", &a[3])?;
            let end = number("end", &a[4])?;
            let price = number("price", &a[6])?;
            front
                .make_booking(&a[0], &a[1], &a[2], start, end, &a[5], price)
                .await?;
            println!("Booked {}", a[2]);
        }
        "cancel" => {
            let a = arity(cmd, args, &["booking-id"])?;
            front.cancel_booking(&a[0]).await?;
            println!("Cancelled booking {}", a[0]);
        }
        "finish" => {
            let a = arity(cmd, args, &["booking-id"])?;
            front.end_booking(&a[0]).await?;
            println!("Finished booking {}", a[0]);
        }
        "cars" => {
            arity(cmd, args, &[])?;
            let cars = front.list_cars().await?;
            println!("=== Cars ({}) ===", cars.len());
            for car in &cars {
                println!(
                    "  {} {} {} ({}, {} hp)",
                    car.uuid, car.brand, car.model, car.car_type, car.power
                );
            }
        }
        "car" => {
            let a = arity(cmd, args, &["car-uuid"])?;
            let availability = front.car_availability(&a[0]).await?;
            println!(
                "Available in office {} from {}",
                availability.last_available.office_id, availability.last_available.from
            );
            for stay in &availability.offices {
                println!(
                    "  office {}: {} - {}",
                    stay.office_id,
                    stay.from,
                    stay.to.map(|t| t.to_string()).unwrap_or_else(|| "?".into())
                );
            }
        }
        "create-car" => {
            let a = arity(cmd, args, &["brand", "model", "type", "power"])?;
            let power = number("power", &a[3])?;
            front.create_car(&a[0], &a[1], &a[2], power).await?;
            println!("Created {} {}", a[0], a[1]);
        }
        "delete-car" => {
            let a = arity(cmd, args, &["car-uuid"])?;
            front.delete_car_completely(&a[0]).await?;
            println!("Deleted car {}", a[0]);
        }
        "add-office" => {
            let a = arity(cmd, args, &["location"])?;
            front.add_office(&a[0]).await?;
            println!("Added office in {}", a[0]);
        }
        "add-car" => {
            let a = arity(cmd, args, &["office-id", "car-uuid", "available-from"])?;
            let available_from = number("available-from", &a[2])?;
            front.add_car(&a[0], &a[1], available_from).await?;
            println!("Placed car {} in office {}", a[1], a[0]);
        }
        other => {
            print_usage();
            return Err(Failure::Usage(format!("Unknown command: {}", other)));
        }
    }
    Ok(())
}
