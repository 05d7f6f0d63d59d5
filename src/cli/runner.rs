//! CLI runner - executes commands

use crate::catalog::{paginate_items, Category, Listing, ListingFilter};
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::cli::server::{self, AppState};
use crate::config::AppConfig;
use crate::control::{self, ControlOptions, PaginationControl, QueryHref};
use crate::error::Result;
use crate::pagination::{compute_page_window, compute_range, PaginationState};
use serde_json::json;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        match &self.cli.command {
            Commands::Window { current, total } => self.window(*current, *total),
            Commands::Range {
                current,
                per_page,
                total_items,
            } => self.range(*current, *per_page, *total_items),
            Commands::Render {
                current,
                total,
                total_items,
                per_page,
                theme,
                no_info,
                base_url,
            } => {
                let config = self.load_config()?;
                let mut options = ControlOptions::new(*current, *total)
                    .with_show_info(!*no_info && config.pagination.show_info)
                    .with_theme(theme.unwrap_or(config.pagination.theme));
                options.total_items = *total_items;
                options.items_per_page = *per_page;
                self.render(options, base_url)
            }
            Commands::Listings {
                city,
                category,
                page,
                per_page,
            } => self.listings(city.as_deref(), category.as_deref(), *page, *per_page),
            Commands::Serve { port, host } => {
                let mut config = self.load_config()?;
                if let Some(port) = port {
                    config.server.port = *port;
                }
                if let Some(host) = host {
                    config.server.host.clone_from(host);
                }
                config.validate()?;
                let state = AppState::from_config(config)?;
                server::serve(state).await
            }
        }
    }

    /// Load configuration, falling back to defaults without `--config`
    fn load_config(&self) -> Result<AppConfig> {
        match &self.cli.config {
            Some(path) => {
                tracing::debug!(path = %path.display(), "loading config");
                AppConfig::from_file(path)
            }
            None => Ok(AppConfig::default()),
        }
    }

    /// Print the page window
    fn window(&self, current: usize, total: usize) -> Result<()> {
        let tokens = compute_page_window(current, total);
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&tokens)?),
            OutputFormat::Pretty => {
                let line: Vec<String> = tokens
                    .iter()
                    .map(|token| match token.page() {
                        Some(page) if page == current => format!("[{page}]"),
                        _ => token.to_string(),
                    })
                    .collect();
                println!("{}", line.join(" "));
            }
        }
        Ok(())
    }

    /// Print the item range
    fn range(&self, current: usize, per_page: usize, total_items: usize) -> Result<()> {
        let range = compute_range(current, per_page, total_items);
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(&range)?),
            OutputFormat::Pretty => {
                if range.is_empty() {
                    println!("No items on page {current}");
                } else {
                    println!("{}", range.describe(total_items));
                }
            }
        }
        Ok(())
    }

    /// Print the rendered control
    fn render(&self, options: ControlOptions, base_url: &str) -> Result<()> {
        let control = PaginationControl::display(options);
        let html = control::render(&control, &QueryHref::new(base_url))?;

        match self.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string(&json!({ "view": control.view(), "html": html }))?
            ),
            OutputFormat::Pretty => {
                if html.is_empty() {
                    eprintln!("Nothing to render: {} page(s)", options.total_pages);
                } else {
                    println!("{html}");
                }
            }
        }
        Ok(())
    }

    /// Print one page of listings
    fn listings(
        &self,
        city: Option<&str>,
        category: Option<&str>,
        page: Option<usize>,
        per_page: Option<usize>,
    ) -> Result<()> {
        let app = AppState::from_config(self.load_config()?)?;
        let category = category.map(str::parse::<Category>).transpose()?;
        let filter = ListingFilter::new()
            .with_city(city)
            .with_category(category);

        let per_page = per_page.unwrap_or(app.config.pagination.items_per_page);
        let (listings, state) = paginate_items(app.catalog.search(&filter), page, per_page);

        match self.cli.format {
            OutputFormat::Json => println!(
                "{}",
                serde_json::to_string_pretty(&json!({
                    "listings": listings,
                    "pagination": state,
                    "range": state.range(),
                }))?
            ),
            OutputFormat::Pretty => print_listings(&listings, &state),
        }
        Ok(())
    }
}

fn print_listings(listings: &[&Listing], state: &PaginationState) {
    if listings.is_empty() {
        println!("No spaces match these filters.");
        return;
    }

    for listing in listings {
        println!(
            "{:<28} {:<10} {:<15} {:>7}/month  {} seat(s)",
            listing.name,
            listing.city,
            listing.category.slug(),
            listing.price_per_month,
            listing.capacity
        );
    }

    if let Some(range) = state.range() {
        println!();
        println!(
            "{} (page {} of {})",
            range.describe(state.total_items.unwrap_or_default()),
            state.current_page,
            state.total_pages
        );
    }
}
