//! Dexern - composition root binary.
//!
//! Usage: `dexern <command> [args]`
//!
//! Commands: `show`, `resolve <id>`, `adopt <id>`, `clear`, `shiny <on|off>`,
//! `detail <id>`, `list [region] [pages]`, `trainer [name] [region]`.

use std::process::ExitCode;

use anyhow::{bail, Context};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dexern_domain::{Creature, LookupIdentifier, Region};
use dexern_player::{CollectionPage, LookupError, PlayerConfig, ResolveOutcome, Services};

const USAGE: &str = "usage: dexern <show | resolve <id> | adopt <id> | clear | shiny <on|off> | detail <id> | list [region] [pages] | trainer [name] [region]>";

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    load_dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dexern_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = PlayerConfig::from_env();
    let services = Services::from_config(&config).await?;
    services.partners().load_saved_partner().await;

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();

    match run(&services, &args).await {
        Ok(()) => Ok(ExitCode::SUCCESS),
        Err(e) => match e.downcast_ref::<LookupError>() {
            Some(lookup) => {
                eprintln!("{}", lookup.user_message());
                tracing::debug!(error = %lookup, "Command failed");
                Ok(ExitCode::FAILURE)
            }
            None => {
                eprintln!("{:#}", e);
                Ok(ExitCode::FAILURE)
            }
        },
    }
}

async fn run(services: &Services, args: &[&str]) -> anyhow::Result<()> {
    let partners = services.partners();

    match args {
        [] | ["show"] => {
            let snapshot = partners.snapshot().await;
            let trainer = &snapshot.trainer;
            if !trainer.name().is_empty() {
                println!("Trainer {} of {}", trainer.name(), trainer.region());
            }
            match &snapshot.partner {
                Some(creature) => print_creature(creature, snapshot.shiny),
                None => println!("No partner chosen yet."),
            }
        }
        ["resolve", input] => match partners.resolve(input).await? {
            ResolveOutcome::Applied(creature) => {
                print_creature(&creature, partners.shiny().await)
            }
            ResolveOutcome::Superseded(_) => println!("A newer request replaced this one."),
            ResolveOutcome::EmptyIdentifier => bail!("an identifier is required"),
        },
        ["adopt", input] => {
            let Some(result) = services.search().search(input).await? else {
                bail!("an identifier is required");
            };
            if result.is_partner {
                println!("{} is already your partner.", result.creature.name());
            } else {
                services.search().toggle_partner().await;
                println!("{} is now your partner.", result.creature.name());
            }
        }
        ["clear"] => {
            partners.clear_partner().await;
            println!("Partner cleared.");
        }
        ["shiny", flag] => {
            let value = match *flag {
                "on" | "true" => true,
                "off" | "false" => false,
                other => bail!("expected on or off, got '{}'", other),
            };
            partners.set_shiny_preference(value).await;
            println!("Shiny artwork {}.", if value { "on" } else { "off" });
        }
        ["detail", input] => {
            let identifier =
                LookupIdentifier::new(input).context("an identifier is required")?;
            let detail = services.lookup().detail(&identifier).await?;
            print_creature(&detail.creature, partners.shiny().await);
            println!("  height {}  weight {}", detail.height, detail.weight);
            for stat in &detail.stats {
                println!("  {:<16}{:>4}", stat.name, stat.value);
            }
            println!("  {:<16}{:>4}", "total", detail.base_stat_total());
        }
        ["list", rest @ ..] if rest.len() <= 2 => {
            let region = match rest.first() {
                Some(raw) => raw.parse::<Region>()?,
                None => partners.trainer().await.region(),
            };
            let pages = match rest.get(1) {
                Some(raw) => raw
                    .parse::<u32>()
                    .with_context(|| format!("invalid page count '{}'", raw))?,
                None => 1,
            };

            let browser = services.collection(region);
            let mut page = browser.refresh().await?;
            for _ in 1..pages {
                match browser.load_more().await {
                    Some(next) => page = next?,
                    None => break,
                }
            }
            print_page(&page);
        }
        ["trainer", rest @ ..] if rest.len() <= 2 => {
            if let Some(name) = rest.first() {
                partners.set_trainer_name(name).await;
            }
            if let Some(raw) = rest.get(1) {
                partners.set_trainer_region(raw.parse()?).await;
            }
            let trainer = partners.trainer().await;
            println!("Trainer {} of {}", trainer.name(), trainer.region());
        }
        _ => bail!(USAGE),
    }

    Ok(())
}

fn print_creature(creature: &Creature, shiny: bool) {
    println!(
        "#{:04} {} [{}]",
        creature.external_id(),
        creature.name(),
        creature.categories().join("/")
    );
    println!("  {}", creature.artwork_url(shiny));
}

fn print_page(page: &CollectionPage) {
    println!(
        "{} ({} of {})",
        page.cursor.region(),
        page.entries.len(),
        page.cursor.region().size()
    );
    for entry in &page.entries {
        println!("  {:<16}{}", entry.name, entry.categories.join("/"));
    }
}

fn load_dotenv() {
    // Prefer local overrides.
    for filename in [".env.local", ".env"] {
        let path = std::path::Path::new(filename);
        if path.exists() {
            let _ = dotenvy::from_path(path);
        }
    }
}
