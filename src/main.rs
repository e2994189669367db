mod cli;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use console::Style;

use cli::{Cli, Command};
use giglink::model::{Category, DocumentUpload, JobDraft, JobType, Location, Role};
use giglink::{Market, MarketConfig};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = MarketConfig::load()?;

    match cli.command {
        Command::Demo => run_demo(config, cli.verbose),
        Command::Config => {
            println!("otp_expiry_minutes = {}", config.otp_expiry_minutes);
            println!("otp_digits = {}", config.otp_digits);
            Ok(())
        }
    }
}

/// Walk the whole assignment flow once against a fresh in-memory
/// market, narrating each step.
fn run_demo(config: MarketConfig, verbose: bool) -> Result<()> {
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();
    let dim = Style::new().dim();
    let step = |msg: &str| println!("{} {msg}", green.apply_to("✓"));

    let market = Market::new(config);
    let staff = uuid::Uuid::new_v4();

    let poster = market.register("paula", Role::Poster, Some("+1555123".into()), None)?;
    let helper = market.register("hank", Role::Helper, None, None)?;
    step("registered poster 'paula' and helper 'hank'");

    let code = market.request_otp("+1555123")?;
    market.verify_otp("+1555123", &code)?;
    step("poster verified her phone via OTP");

    let job = market.post_job(
        poster,
        JobDraft {
            title: "Walk my dog".into(),
            description: "Morning and evening, one week".into(),
            location: Location {
                lat: 52.37,
                long: 4.89,
                address: "14 Canal Street".into(),
            },
            category: Category::Pet,
            job_type: JobType::Fixed,
            price: Some(10_000),
            hourly_rate: None,
            start_time: Utc::now(),
            end_time: None,
        },
    )?;
    step("posted fixed-price job 'Walk my dog'");

    let application = market.apply(job, helper, Some("I love dogs".into()))?;
    step("helper applied");

    match market.assign(job, application, poster) {
        Err(e) => println!(
            "{} assignment refused: {e} ({})",
            red.apply_to("✗"),
            dim.apply_to(format!("HTTP {}", e.http_status()))
        ),
        Ok(()) => unreachable!("helper is not verified yet"),
    }

    market.submit_documents(
        helper,
        DocumentUpload {
            identity_card: Some("id.pdf".into()),
            selfie: Some("selfie.jpg".into()),
            ..Default::default()
        },
    )?;
    market.approve_documents(helper, staff)?;
    step("helper submitted documents; staff approved them");

    market.assign(job, application, poster)?;
    step("job assigned to helper");

    market.complete(job, helper)?;
    step("helper marked the job complete");

    if verbose {
        for user in [poster, helper] {
            for n in market.notifications(user)? {
                println!("  {} {}", dim.apply_to("→"), n.message);
            }
        }
    }

    market.submit_review(poster, helper, 5, "Punctual and kind")?;
    let summary = market.rating_summary(helper)?;
    step(&format!(
        "poster left a review (avg {:.1} over {} review(s))",
        summary.avg_rating, summary.review_count
    ));

    Ok(())
}
