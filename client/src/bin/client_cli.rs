//! Run catalog operations against a configured endpoint and print the
//! results as `key=value` lines.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use client::catalog::NoVariables;
use client::catalog::address::{ReverseGeocodeVariables, SearchAddressVariables};
use client::catalog::analytics::Analytics;
use client::catalog::search::{SearchEventsVariables, SearchGroupsVariables};
use client::catalog::tags::Tags;
use client::composition::{
    LoadOutcome, execute_operation, fetch_tags, use_reverse_geocode, use_search_address,
    use_search_events, use_search_groups, use_statistics,
};
use client::config::{AnalyticsSettings, ClientSettings};
use client::domain::ports::GraphqlTransport;
use client::domain::{Address, GeoPoint, PageRequest, Tag};
use client::formatting::{Locale, list_short_conjunction};
use client::outbound::graphql::HttpGraphqlTransport;
use client::telemetry;
use color_eyre::eyre::{Context, Report, Result, eyre};
use ortho_config::OrthoConfig;
use pagination::DEFAULT_LIMIT;
use tokio::runtime::Builder;

/// `client-cli` command arguments.
#[derive(Debug, Parser)]
#[command(
    name = "client-cli",
    about = "Query a federated events instance through its GraphQL API",
    version
)]
struct CliArgs {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Search events by free-text term.
    SearchEvents {
        term: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Search groups by free-text term.
    SearchGroups {
        term: String,
        #[arg(long, default_value_t = 1)]
        page: u32,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Print instance statistics.
    Statistics,
    /// List tags, optionally filtered by prefix.
    Tags {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Find addresses at a coordinate.
    #[command(allow_negative_numbers = true)]
    ReverseGeocode {
        latitude: f64,
        longitude: f64,
        #[arg(long)]
        zoom: Option<u8>,
    },
    /// Geocode a free-text address.
    Address { query: String },
    /// Print the option map forwarded to the selected analytics provider.
    Analytics,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    telemetry::init();
    let args = CliArgs::parse();

    let program = [OsString::from("client-cli")];
    let settings = ClientSettings::load_from_iter(program.clone())
        .map_err(|error| eyre!("failed to load client settings: {error}"))?;
    let analytics = AnalyticsSettings::load_from_iter(program)
        .map_err(|error| eyre!("failed to load analytics settings: {error}"))?;

    let transport = HttpGraphqlTransport::with_identity(
        settings.endpoint().wrap_err("invalid CLIENT_ENDPOINT")?,
        settings.timeout(),
        settings.identity(),
    )
    .wrap_err("failed to build HTTP client")?;

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .wrap_err("failed to build Tokio runtime")?;
    runtime.block_on(run(args.command, Arc::new(transport), &settings, &analytics))
}

async fn run(
    command: Command,
    transport: Arc<dyn GraphqlTransport>,
    settings: &ClientSettings,
    analytics: &AnalyticsSettings,
) -> Result<()> {
    let locale = settings.locale();
    match command {
        Command::SearchEvents { term, page, limit } => {
            let page = PageRequest::new(page, limit).map_err(Report::new)?;
            let variables = SearchEventsVariables::term(term).with_page(page);
            let data = applied(use_search_events(transport).load(variables).await)?;
            let results = data.search_events;
            println!("total={}", results.total());
            for event in &results {
                println!(
                    "event={} title={} begins_on={} tags={}",
                    event.uuid,
                    event.title,
                    event.begins_on.to_rfc3339(),
                    tag_list(&event.tags, locale)
                );
            }
            println!("has_next={}", page.has_next(results.total()));
        }
        Command::SearchGroups { term, page, limit } => {
            let page = PageRequest::new(page, limit).map_err(Report::new)?;
            let variables = SearchGroupsVariables::term(term).with_page(page);
            let data = applied(use_search_groups(transport).load(variables).await)?;
            let results = data.search_groups;
            println!("total={}", results.total());
            for group in &results {
                println!(
                    "group={} name={}",
                    group.actor.username_with_domain(),
                    group.actor.display_name()
                );
            }
            println!("has_next={}", page.has_next(results.total()));
        }
        Command::Statistics => {
            let data = applied(use_statistics(transport).load(NoVariables {}).await)?;
            let stats = data.statistics;
            println!("users={}", stats.number_of_users);
            println!("local_events={}", stats.number_of_local_events);
            println!("remote_events={}", stats.number_of_remote_events());
            println!("local_groups={}", stats.number_of_local_groups);
            println!("remote_groups={}", stats.number_of_remote_groups());
            println!("comments={}", stats.number_of_comments);
            println!("instance_followers={}", stats.number_of_instance_followers);
            println!("instance_followings={}", stats.number_of_instance_followings);
        }
        Command::Tags { filter } => {
            let tags = match filter {
                Some(filter) => fetch_tags(transport.as_ref(), &filter).await,
                None => {
                    execute_operation::<Tags>(transport.as_ref(), &NoVariables {})
                        .await?
                        .tags
                }
            };
            for tag in &tags {
                println!(
                    "tag={} title={} related={}",
                    tag.slug,
                    tag.title,
                    tag_list(&tag.related, locale)
                );
            }
        }
        Command::ReverseGeocode {
            latitude,
            longitude,
            zoom,
        } => {
            let variables = ReverseGeocodeVariables {
                latitude,
                longitude,
                zoom,
                locale: locale.code().map(str::to_owned),
            };
            let data = applied(use_reverse_geocode(transport).load(variables).await)?;
            print_addresses(&data.reverse_geocode);
        }
        Command::Address { query } => {
            let variables = SearchAddressVariables {
                query,
                locale: locale.code().map(str::to_owned),
                search_type: None,
            };
            let data = applied(use_search_address(transport).load(variables).await)?;
            print_addresses(&data.search_address);
        }
        Command::Analytics => {
            let data = execute_operation::<Analytics>(transport.as_ref(), &NoVariables {}).await?;
            match analytics.select(&data.config.analytics) {
                Some(provider) => {
                    println!("provider={}", provider.id);
                    for (key, value) in provider.options() {
                        println!("{key}={value}");
                    }
                }
                None => println!("provider="),
            }
        }
    }
    Ok(())
}

fn applied<T>(outcome: LoadOutcome<T>) -> Result<T> {
    match outcome {
        LoadOutcome::Completed(result) => Ok(result?),
        LoadOutcome::Superseded { sequence, latest } => Err(eyre!(
            "request {sequence} was superseded by request {latest}"
        )),
    }
}

fn tag_list(tags: &[Tag], locale: Locale) -> String {
    let titles: Vec<&str> = tags.iter().map(|tag| tag.title.as_str()).collect();
    list_short_conjunction(&titles, locale)
}

fn print_addresses(addresses: &[Address]) {
    for address in addresses {
        let point = address
            .geom
            .as_ref()
            .map(GeoPoint::to_wire)
            .unwrap_or_default();
        println!("address={} geom={point}", address.full_label());
    }
}
