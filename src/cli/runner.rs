//! CLI runner - executes commands

use crate::api::{ApiClient, OffsetPage, PageParams, TEMPLATES_PATH};
use crate::cli::commands::{CampaignCommand, Cli, Commands, ListCommand, OutputFormat, TemplateCommand};
use crate::config::ClientConfig;
use crate::delete::{ConfirmDelete, DeleteCoordinator};
use crate::error::{Error, Result, ResultExt};
use crate::fetch::{FetchController, FetchState};
use crate::listing::{HttpListingSource, TemplateMeta};
use crate::pagination::Navigator;
use crate::view::{ListingView, Route, RowAction};
use serde::Serialize;
use serde_json::json;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

/// Empty-state message of the templates screen
pub const EMPTY_TEMPLATES: &str = "Create your first template.";

type TemplateNavigator = Navigator<HttpListingSource<TemplateMeta>>;

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
        let api = ApiClient::new(self.client_config()?)?;
        info!("Using API at {}", api.config().base_url);

        match &self.cli.command {
            Commands::Templates { action } => match action {
                TemplateCommand::List { pages } => self.list_templates(&api, *pages).await,
                TemplateCommand::Browse => self.browse_templates(&api).await,
                TemplateCommand::Delete { name } => {
                    api.templates().delete(name).await?;
                    println!("Deleted template {name}");
                    Ok(())
                }
            },
            Commands::Lists { action } => match action {
                ListCommand::List { page, per_page } => {
                    let params = match per_page {
                        Some(per_page) => PageParams::new(*page, *per_page),
                        None => api.page(*page),
                    };
                    let lists = api.lists().all(params).await?;
                    self.print_offset_page(&lists, |l| format!("{:>6}  {}", l.id, l.name))
                }
                ListCommand::Subscribers { id, page } => {
                    let subs = api.lists().subscribers(*id, api.page(*page)).await?;
                    self.print_offset_page(&subs, |s| format!("{:>6}  {}  {}", s.id, s.email, s.name))
                }
                ListCommand::Import { id, file } => {
                    let contents = tokio::fs::read(file)
                        .await
                        .with_context(|| format!("Failed to read {}", file.display()))?;
                    let file_name = file
                        .file_name()
                        .map_or_else(|| "subscribers.csv".to_string(), |n| n.to_string_lossy().into_owned());
                    let result = api.lists().create_subscribers(*id, file_name, contents).await?;
                    println!("{}", result.message.unwrap_or_else(|| "Import started".to_string()));
                    Ok(())
                }
            },
            Commands::Campaigns { action } => match action {
                CampaignCommand::List { page } => {
                    let campaigns = api.campaigns().all(*page).await?;
                    self.print_offset_page(&campaigns, |c| {
                        format!("{:>6}  {:<30}  {:?}", c.id, c.name, c.status)
                    })
                }
                CampaignCommand::Delete { id } => {
                    api.campaigns().delete(*id).await?;
                    println!("Deleted campaign {id}");
                    Ok(())
                }
            },
        }
    }

    /// Resolve configuration: --config file, then --url, then environment
    fn client_config(&self) -> Result<ClientConfig> {
        let mut config = match (&self.cli.config, &self.cli.url) {
            (Some(path), _) => ClientConfig::from_file(path)?,
            (None, Some(url)) => ClientConfig::new(url.clone()).validate()?,
            (None, None) => ClientConfig::from_env()?,
        };

        if let (Some(_), Some(url)) = (&self.cli.config, &self.cli.url) {
            config.base_url = url.clone();
            config = config.validate()?;
        }

        Ok(config)
    }

    fn template_navigator(api: &ApiClient) -> TemplateNavigator {
        let controller = FetchController::new(api.templates().listing_source());
        Navigator::new(controller, TEMPLATES_PATH)
    }

    /// Print up to `pages` pages, following next tokens
    async fn list_templates(&self, api: &ApiClient, pages: usize) -> Result<()> {
        let mut nav = Self::template_navigator(api);
        nav.load();

        for page in 0..pages.max(1) {
            let state = settled_ok(&nav).await?;
            self.print_template_page(page, &state, &nav);

            if page + 1 == pages || nav.next().is_none() {
                break;
            }
        }
        Ok(())
    }

    /// Interactive pager over templates, driven by stdin
    async fn browse_templates(&self, api: &ApiClient) -> Result<()> {
        let mut nav = Self::template_navigator(api);
        let coordinator = DeleteCoordinator::new(api.templates().deleter());
        let mut dialog = ConfirmDelete::new();
        let collection_route = api.config().dashboard_path("templates");
        let mut routes: Vec<Route> = Vec::new();

        nav.load();
        self.render(&nav).await?;
        print_help();

        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await? {
            let mut parts = line.split_whitespace();
            match (parts.next(), parts.next()) {
                (Some("n"), _) => {
                    if nav.next().is_none() {
                        println!("No next page.");
                        continue;
                    }
                }
                (Some("p"), _) => {
                    if nav.previous().is_none() {
                        println!("Already on the first page.");
                        continue;
                    }
                }
                (Some("r"), _) => {
                    nav.refresh();
                }
                (Some("e"), Some(name)) => {
                    RowAction::Edit.apply(name, &collection_route, &mut routes, &mut dialog);
                    if let Some(route) = routes.last() {
                        println!("-> {route}");
                    }
                    continue;
                }
                (Some("d"), Some(name)) => {
                    RowAction::Delete.apply(name, &collection_route, &mut routes, &mut dialog);
                    if let Some(title) = dialog.title("template") {
                        println!("{title}");
                    }
                    if let Err(e) = coordinator.delete_then_refresh(&mut dialog, &nav).await {
                        eprintln!("Delete failed: {e}");
                        dialog.close();
                        continue;
                    }
                }
                (Some("c"), _) => {
                    println!("-> {}", Route::new_item(&collection_route));
                    continue;
                }
                (Some("q"), _) => break,
                _ => {
                    print_help();
                    continue;
                }
            }
            self.render(&nav).await?;
        }
        Ok(())
    }

    /// Wait for the outstanding fetch and print the screen
    async fn render(&self, nav: &TemplateNavigator) -> Result<()> {
        let state = nav.controller().settled().await?;
        if let Some(error) = &state.error {
            eprintln!("Failed to load templates: {error}");
        }

        match ListingView::build(&state, nav.state(), EMPTY_TEMPLATES) {
            ListingView::Loading { .. } => println!("Loading..."),
            ListingView::Empty { message } => println!("{message}"),
            ListingView::Table { items, controls } => {
                for item in items {
                    println!("{:<40}  {}", item.name, item.display_date());
                }
                println!(
                    "[{}Previous]  [{}Next]",
                    if controls.previous_enabled { "" } else { "x " },
                    if controls.next_enabled { "" } else { "x " },
                );
            }
        }
        Ok(())
    }

    fn print_template_page(
        &self,
        page: usize,
        state: &FetchState<TemplateMeta>,
        nav: &TemplateNavigator,
    ) {
        match self.cli.format {
            OutputFormat::Json => {
                let doc = json!({
                    "page": page,
                    "collection": state.data.items,
                    "next_token": state.data.next_token,
                });
                println!("{doc}");
            }
            OutputFormat::Pretty => {
                println!("-- page {} --", page + 1);
                match ListingView::build(state, nav.state(), EMPTY_TEMPLATES) {
                    ListingView::Table { items, .. } => {
                        for item in items {
                            println!("{:<40}  {}", item.name, item.display_date());
                        }
                    }
                    ListingView::Empty { message } => println!("{message}"),
                    ListingView::Loading { .. } => {}
                }
            }
        }
    }

    fn print_offset_page<T: Serialize>(
        &self,
        page: &OffsetPage<T>,
        row: impl Fn(&T) -> String,
    ) -> Result<()> {
        match self.cli.format {
            OutputFormat::Json => println!("{}", serde_json::to_string(page)?),
            OutputFormat::Pretty => {
                if page.collection.is_empty() {
                    println!("Nothing here yet.");
                }
                for item in &page.collection {
                    println!("{}", row(item));
                }
                if page.has_more() {
                    println!("(more on page {})", page.page + 1);
                }
            }
        }
        Ok(())
    }
}

/// Wait for the navigator's fetch and turn a recorded failure into an error
async fn settled_ok(nav: &TemplateNavigator) -> Result<FetchState<TemplateMeta>> {
    let state = nav.controller().settled().await?;
    if let Some(error) = &state.error {
        return Err(Error::Other(error.to_string())).context("Failed to load templates");
    }
    Ok(state)
}

fn print_help() {
    println!("Commands: n(ext)  p(revious)  r(efresh)  e <name>  d <name>  c(reate)  q(uit)");
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_settled_ok_reports_failed_page() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path(TEMPLATES_PATH))
            .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
            .mount(&server)
            .await;

        let api = ApiClient::new(ClientConfig::new(server.uri())).unwrap();
        let nav = Runner::template_navigator(&api);
        nav.load();

        let err = settled_ok(&nav).await.unwrap_err();
        assert_eq!(err.to_string(), "Failed to load templates: HTTP 500: boom");
    }
}
