use crate::infra::{seed_drivers, InMemoryDriverRepository};
use clap::Args;
use fleet_admin::config::{AppConfig, DriverAdminConfig};
use fleet_admin::drivers::{DriverAdminService, DriverListParams, DriverListing, DriverView};
use fleet_admin::error::AppError;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DriverListArgs {
    /// Status filter: approved, pending, or rejected. Other values list everyone.
    #[arg(long)]
    pub(crate) status: Option<String>,
    /// Case-insensitive search across name, email, and phone
    #[arg(long)]
    pub(crate) search: Option<String>,
    /// Page number (defaults to 1)
    #[arg(long)]
    pub(crate) page: Option<usize>,
}

impl DriverListArgs {
    fn params(&self) -> DriverListParams {
        let params = DriverListParams::new(self.status.as_deref(), self.search.as_deref());
        match self.page {
            Some(page) => params.with_page(page),
            None => params,
        }
    }
}

pub(crate) fn run_driver_listing(args: DriverListArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let listing = seeded_listing(&args, config.drivers)?;
    for line in render_listing(&listing) {
        println!("{line}");
    }
    Ok(())
}

fn seeded_listing(
    args: &DriverListArgs,
    config: DriverAdminConfig,
) -> Result<DriverListing, AppError> {
    let repository = Arc::new(InMemoryDriverRepository::seeded(seed_drivers()));
    let service = DriverAdminService::new(repository, config);
    Ok(service.list(&args.params())?)
}

pub(crate) fn render_listing(listing: &DriverListing) -> Vec<String> {
    let page = &listing.drivers;
    let mut lines = vec![format!(
        "Drivers: {} match | page {} of {} | status={} search={}",
        page.total_count,
        page.page,
        listing.total_pages.max(1),
        listing.filters.status.as_deref().unwrap_or("all"),
        listing.filters.search.as_deref().unwrap_or("-"),
    )];

    if page.items.is_empty() {
        lines.push("  No drivers found.".to_string());
        return lines;
    }

    lines.extend(page.items.iter().map(render_row));
    lines
}

fn render_row(view: &DriverView) -> String {
    let mut status = view.display_status.label().to_string();
    if view.is_suspended {
        status.push_str(" (suspended)");
    }
    let actions = if view.enabled_actions.is_empty() {
        "-".to_string()
    } else {
        view.enabled_actions
            .iter()
            .map(|action| action.label())
            .collect::<Vec<_>>()
            .join("/")
    };

    format!(
        "  #{:<4} {:<20} {:<30} {:<16} {:<20} docs {:>2} | vehicles {:>2} | {} {} | {}",
        view.id.0,
        view.name,
        view.email,
        view.phone.as_deref().unwrap_or("—"),
        status,
        view.documents_count,
        view.vehicles_count,
        stars(view.rating_stars),
        view.rating_label,
        actions,
    )
}

fn stars(filled: u8) -> String {
    let filled = usize::from(filled.min(5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}
