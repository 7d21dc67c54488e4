//! Look up a school and its most rated professor matching a name
//!
//! Run with `RUST_LOG=ratemyprof_core=debug` to see every request.

use ratemyprof_core::{Professor, RmpScraper};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "lookup=info,ratemyprof_core=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut args = std::env::args().skip(1);
    let school_query = args.next().unwrap_or_else(|| "Case Western Reserve".to_string());
    let professor_query = args.next().unwrap_or_else(|| "Smith".to_string());

    let scraper = RmpScraper::new()?;

    let Some(school) = scraper.find_school(&school_query).await? else {
        println!("No school matches {:?}", school_query);
        return Ok(());
    };
    println!("School: {} (sid={})", school.name, school.id);

    let partials = scraper.fast_find_professors(&school, &professor_query).await?;
    println!("\n=== {} candidates from the search page ===\n", partials.len());
    for professor in &partials {
        println!(
            "{:>8}  {:<30} {:>4} ratings  quality {:?}",
            professor.id(),
            professor.name(),
            professor.num_ratings(),
            professor.rating()
        );
    }

    let Some(best) = ratemyprof_core::most_rated(partials) else {
        return Ok(());
    };

    if let Professor::Full(full) = best.upgrade(&scraper).await? {
        println!(
            "\n=== {} {} ({}) ===\n",
            full.first_name,
            full.last_name,
            full.department.as_deref().unwrap_or("no department")
        );
        for rating in &full.ratings {
            println!("[{}] {} {}", rating.date, rating.class_name, rating.comment);
        }
    }

    Ok(())
}
