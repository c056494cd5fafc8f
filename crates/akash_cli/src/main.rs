use std::fmt::Display;
use std::path::PathBuf;

use akash_rs::astronomy::{
    MoonPhaseName, ObserverLocation, julian_day_to_gregorian_date_time, moon_elongation_deg,
    moon_phase,
};
use akash_rs::bodies::moon_equatorial_position;
use akash_rs::bodies::sun_equatorial_position;
use akash_rs::stars::{StarProjector, brightest};
use akash_rs::{AkashConfig, GregorianDateTime, checked};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(name = "akash", about = "Sun, Moon and star positions for a simulated sky")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// UTC calendar instant to Julian Day
    Jd {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        utc: String,
    },
    /// Julian Day to UTC calendar instant
    Calendar {
        /// Julian Day
        #[arg(allow_hyphen_values = true)]
        jd: f64,
    },
    /// Horizontal position of the Sun
    Sun {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Observer latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
    },
    /// Horizontal position of the Moon
    Moon {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Observer latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
    },
    /// Lunar phase
    Phase {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
    },
    /// Brightest catalog stars projected onto the local sky
    Stars {
        /// UTC datetime (YYYY-MM-DDThh:mm:ssZ)
        #[arg(long)]
        date: String,
        /// Observer longitude in degrees, east positive
        #[arg(long, allow_hyphen_values = true)]
        lon: f64,
        /// Observer latitude in degrees, north positive
        #[arg(long, allow_hyphen_values = true)]
        lat: f64,
        /// Number of stars to list
        #[arg(long, default_value = "10")]
        count: usize,
    },
    /// Drive a simulated clock from a TOML config and print the sky each step
    Simulate {
        /// Path to config TOML
        #[arg(long)]
        config: PathBuf,
        /// Number of clock updates
        #[arg(long, default_value = "10")]
        steps: u32,
        /// Wall-clock seconds per update (multiplied by the time scale)
        #[arg(long, default_value = "1.0", allow_hyphen_values = true)]
        dt: f64,
    },
}

fn fail(e: impl Display) -> ! {
    eprintln!("Error: {e}");
    std::process::exit(1);
}

fn parse_utc(s: &str) -> GregorianDateTime {
    s.parse().unwrap_or_else(|e| fail(e))
}

fn julian_day_of(s: &str) -> f64 {
    let t = parse_utc(s);
    checked::julian_day(t.year, t.month, t.day, t.hour, t.minute, t.second)
        .unwrap_or_else(|e| fail(e))
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Jd { utc } => {
            let jd = julian_day_of(&utc);
            println!("{jd:.6}");
        }

        Commands::Calendar { jd } => {
            if !jd.is_finite() {
                fail(format!("Julian Day must be finite, got {jd}"));
            }
            println!("{}", julian_day_to_gregorian_date_time(jd));
        }

        Commands::Sun { date, lon, lat } => {
            let jd = julian_day_of(&date);
            let observer = ObserverLocation::new(lat, lon);
            let h = checked::sun_position(jd, &observer).unwrap_or_else(|e| fail(e));
            let eq = sun_equatorial_position(jd);
            println!("JD {jd:.6}");
            println!("RA {:.4} h  Dec {:+.4} deg", eq.ra_hours(), eq.dec_deg);
            println!("Azimuth {:.4} deg  Altitude {:+.4} deg", h.azimuth_deg, h.altitude_deg);
        }

        Commands::Moon { date, lon, lat } => {
            let jd = julian_day_of(&date);
            let observer = ObserverLocation::new(lat, lon);
            let h = checked::moon_position(jd, &observer).unwrap_or_else(|e| fail(e));
            let eq = moon_equatorial_position(jd);
            println!("JD {jd:.6}");
            println!("RA {:.4} h  Dec {:+.4} deg", eq.ra_hours(), eq.dec_deg);
            println!("Azimuth {:.4} deg  Altitude {:+.4} deg", h.azimuth_deg, h.altitude_deg);
            println!("Phase {:.3} ({})", moon_phase(jd), MoonPhaseName::at(jd));
        }

        Commands::Phase { date } => {
            let jd = julian_day_of(&date);
            let name = MoonPhaseName::at(jd);
            println!(
                "{name} - illuminated {:.1}%, elongation {:+.2} deg, {}",
                moon_phase(jd) * 100.0,
                moon_elongation_deg(jd),
                if name.is_waxing() { "waxing" } else { "not waxing" }
            );
        }

        Commands::Stars {
            date,
            lon,
            lat,
            count,
        } => {
            let jd = julian_day_of(&date);
            let observer = ObserverLocation::new(lat, lon);
            if let Err(e) = checked::check_observer(&observer) {
                fail(e);
            }
            let projector = StarProjector::new(jd, &observer);
            let stars = brightest(count);
            println!("{:<16} {:>6} {:>10} {:>10}", "Star", "Mag", "Az", "Alt");
            for p in projector.project_all(&stars) {
                println!(
                    "{:<16} {:>6.2} {:>10.3} {:>+10.3}{}",
                    p.entry.name,
                    p.entry.magnitude,
                    p.horizontal.azimuth_deg,
                    p.horizontal.altitude_deg,
                    if p.is_visible() { "" } else { "  (below horizon)" }
                );
            }
        }

        Commands::Simulate { config, steps, dt } => {
            let config = AkashConfig::load(&config).unwrap_or_else(|e| fail(e));
            let mut clock = config.build_clock().unwrap_or_else(|e| fail(e));
            let observer = config.observer;
            info!(
                "simulating {steps} steps of {dt} s at scale {}",
                clock.time_scale()
            );

            println!(
                "{:>5} {:<27} {:>10} {:>10} {:>7}",
                "step", "UTC", "Sun alt", "Moon alt", "Phase"
            );
            for step in 0..=steps {
                if step > 0 {
                    clock.update(dt);
                }
                let jd = clock.julian_day();
                let sun = checked::sun_position(jd, &observer).unwrap_or_else(|e| fail(e));
                let moon = checked::moon_position(jd, &observer).unwrap_or_else(|e| fail(e));
                println!(
                    "{step:>5} {:<27} {:>+10.3} {:>+10.3} {:>7.3}",
                    julian_day_to_gregorian_date_time(jd).to_string(),
                    sun.altitude_deg,
                    moon.altitude_deg,
                    moon_phase(jd)
                );
            }

            match serde_json::to_string_pretty(&clock.state()) {
                Ok(json) => println!("{json}"),
                Err(e) => fail(e),
            }
        }
    }
}
