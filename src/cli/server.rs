//! HTTP server mode: listing pages and a JSON API over the page math

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use minijinja::context;
use serde_json::json;
use std::net::SocketAddr;
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{paginate_items, Catalog, Category, Listing, ListingFilter};
use crate::config::AppConfig;
use crate::control::html::ControlContext;
use crate::control::{ControlOptions, PageHref, PaginationControl, QueryHref};
use crate::error::{Error, Result};
use crate::pagination::{
    compute_page_window, compute_range, parse_page_param, PageRange, PaginationState,
};
use crate::templates::render_template;
use crate::types::Theme;

/// App state shared across handlers
#[derive(Debug, Clone)]
pub struct AppState {
    /// Loaded configuration
    pub config: AppConfig,
    /// Listings served by the pages
    pub catalog: Catalog,
}

impl AppState {
    /// Create state from parts
    pub fn new(config: AppConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    /// Load the catalogue named in the config, or the built-in one
    pub fn from_config(config: AppConfig) -> Result<Self> {
        let catalog = match &config.catalog.path {
            Some(path) => Catalog::from_file(path)?,
            None => Catalog::builtin()?,
        };
        Ok(Self::new(config, catalog))
    }
}

/// Response wrapper
#[derive(Debug, Serialize)]
struct ApiResponse<T> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<T: Serialize> ApiResponse<T> {
    fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    fn error(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(msg.into()),
        }
    }
}

/// Crate errors rendered as JSON API responses
struct ApiError(Error);

impl From<Error> for ApiError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

fn status_for(err: &Error) -> StatusCode {
    if err.is_client_error() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "request failed");
        }
        (status, Json(ApiResponse::<()>::error(self.0.to_string()))).into_response()
    }
}

/// Crate errors rendered as HTML pages
struct PageError(Error);

impl From<Error> for PageError {
    fn from(err: Error) -> Self {
        Self(err)
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = status_for(&self.0);
        if status.is_server_error() {
            tracing::error!(error = %self.0, "page failed");
        }
        let message = self.0.to_string();
        match render_template("error.html", context! { message => &message }) {
            Ok(body) => (status, Html(body)).into_response(),
            Err(err) => {
                tracing::error!(error = %err, "error page failed to render");
                (status, message).into_response()
            }
        }
    }
}

/// Unwrap a query extractor, turning rejections into client errors
fn query_params<T>(extracted: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    extracted
        .map(|Query(query)| query)
        .map_err(|rejection| Error::invalid_query(rejection.body_text()))
}

/// Build the application router
pub fn router(state: AppState) -> Router {
    // Build CORS layer - allow all origins for development
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health))
        .route("/api/pagination/window", get(window))
        .route("/api/pagination/range", get(range))
        .route("/api/pagination/control", get(control_view))
        .route("/api/listings", get(list_listings))
        .route("/spaces", get(spaces_page))
        .route("/spaces/:category", get(category_page))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(Arc::new(state))
}

/// Start the HTTP server
pub async fn serve(state: AppState) -> Result<()> {
    let addr: SocketAddr = format!("{}:{}", state.config.server.host, state.config.server.port)
        .parse()
        .map_err(|e| Error::config(format!("Invalid listen address: {e}")))?;
    let listings = state.catalog.len();
    let app = router(state);

    tracing::info!(%addr, listings, "Starting HTTP server on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|e| Error::server(format!("Failed to bind to {addr}: {e}")))?;

    axum::serve(listener, app)
        .await
        .map_err(|e| Error::server(format!("Server error: {e}")))?;

    Ok(())
}

// ============================================================================
// JSON API
// ============================================================================

/// Health check endpoint
async fn health() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

#[derive(Debug, Deserialize)]
struct WindowQuery {
    current: usize,
    total: usize,
}

/// Page tokens for a page position
async fn window(
    extracted: std::result::Result<Query<WindowQuery>, QueryRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let query = query_params(extracted)?;
    Ok(Json(ApiResponse::success(compute_page_window(
        query.current,
        query.total,
    ))))
}

#[derive(Debug, Deserialize)]
struct RangeQuery {
    current: usize,
    per_page: usize,
    total_items: usize,
}

/// Item range for a page
async fn range(
    extracted: std::result::Result<Query<RangeQuery>, QueryRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let query = query_params(extracted)?;
    Ok(Json(ApiResponse::<PageRange>::success(compute_range(
        query.current,
        query.per_page,
        query.total_items,
    ))))
}

#[derive(Debug, Deserialize)]
struct ControlQuery {
    current: usize,
    total: usize,
    total_items: Option<usize>,
    per_page: Option<usize>,
    theme: Option<Theme>,
    show_info: Option<bool>,
}

/// Render model of the control; `data` is null when nothing renders
async fn control_view(
    State(state): State<Arc<AppState>>,
    extracted: std::result::Result<Query<ControlQuery>, QueryRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let query = query_params(extracted)?;
    let defaults = &state.config.pagination;
    let options = ControlOptions {
        current_page: query.current,
        total_pages: query.total,
        total_items: query.total_items,
        items_per_page: query.per_page,
        show_info: query.show_info.unwrap_or(defaults.show_info),
        theme: query.theme.unwrap_or(defaults.theme),
    };
    let view = PaginationControl::display(options).view();
    Ok(Json(json!({ "success": true, "data": view })))
}

#[derive(Debug, Default, Deserialize)]
struct ListingQuery {
    city: Option<String>,
    category: Option<String>,
    page: Option<String>,
    per_page: Option<usize>,
}

#[derive(Debug, Serialize)]
struct ListingPage {
    listings: Vec<Listing>,
    pagination: PaginationState,
    #[serde(skip_serializing_if = "Option::is_none")]
    range: Option<PageRange>,
}

/// One page of listings
async fn list_listings(
    State(state): State<Arc<AppState>>,
    extracted: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> std::result::Result<impl IntoResponse, ApiError> {
    let query = query_params(extracted)?;
    let category = query
        .category
        .as_deref()
        .filter(|c| !c.trim().is_empty())
        .map(str::parse::<Category>)
        .transpose()?;
    let page = parse_page_param(query.page.as_deref())?;
    let per_page = query
        .per_page
        .unwrap_or(state.config.pagination.items_per_page);

    let filter = ListingFilter::new()
        .with_city(query.city.as_deref())
        .with_category(category);
    let (listings, pagination) = paginate_items(state.catalog.search(&filter), Some(page), per_page);

    Ok(Json(ApiResponse::success(ListingPage {
        listings: listings.into_iter().cloned().collect(),
        pagination,
        range: pagination.range(),
    })))
}

// ============================================================================
// HTML Pages
// ============================================================================

/// Link shown in the category and city menus
#[derive(Debug, Serialize)]
struct MenuLink {
    href: String,
    label: String,
}

/// Template context for `listings.html`
#[derive(Debug, Serialize)]
struct ListingsContext<'a> {
    heading: String,
    categories: Vec<MenuLink>,
    cities: Vec<MenuLink>,
    listings: Vec<&'a Listing>,
    control: Option<ControlContext>,
}

/// All listings
async fn spaces_page(
    State(state): State<Arc<AppState>>,
    extracted: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> std::result::Result<Html<String>, PageError> {
    let query = query_params(extracted)?;
    Ok(Html(render_listing_page(&state, None, &query)?))
}

/// Listings of one category
async fn category_page(
    State(state): State<Arc<AppState>>,
    Path(slug): Path<String>,
    extracted: std::result::Result<Query<ListingQuery>, QueryRejection>,
) -> std::result::Result<Html<String>, PageError> {
    let category = slug.parse::<Category>()?;
    let query = query_params(extracted)?;
    Ok(Html(render_listing_page(&state, Some(category), &query)?))
}

fn render_listing_page(
    state: &AppState,
    category: Option<Category>,
    query: &ListingQuery,
) -> Result<String> {
    let settings = &state.config.pagination;
    let page = parse_page_param(query.page.as_deref())?;
    let per_page = query.per_page.unwrap_or(settings.items_per_page);
    let filter = ListingFilter::new()
        .with_city(query.city.as_deref())
        .with_category(category);
    let (listings, pagination) =
        paginate_items(state.catalog.search(&filter), Some(page), per_page);

    let base = match category {
        Some(category) => format!("/spaces/{}", category.slug()),
        None => "/spaces".to_string(),
    };
    // Page links keep the city and an explicit page size
    let links = |city: Option<&str>| {
        let mut hrefs = QueryHref::new(base.as_str());
        if let Some(city) = city {
            hrefs = hrefs.with_param("city", city);
        }
        if let Some(per_page) = query.per_page {
            hrefs = hrefs.with_param("per_page", per_page.to_string());
        }
        hrefs
    };

    let options = ControlOptions::from_state(&pagination)
        .with_show_info(settings.show_info)
        .with_theme(settings.theme);
    let hrefs = links(filter.city.as_deref());
    let control = PaginationControl::display(options)
        .view()
        .map(|view| ControlContext::new(&view, &hrefs));

    let heading = match (category, &filter.city) {
        (Some(category), Some(city)) => format!("{} in {}", category.title(), city),
        (Some(category), None) => category.title().to_string(),
        (None, Some(city)) => format!("Spaces in {city}"),
        (None, None) => "All Spaces".to_string(),
    };

    let categories = Category::ALL
        .iter()
        .map(|c| MenuLink {
            href: format!("/spaces/{}", c.slug()),
            label: c.title().to_string(),
        })
        .collect();
    let cities = state
        .catalog
        .cities()
        .into_iter()
        .map(|city| MenuLink {
            href: links(Some(city)).href(1),
            label: city.to_string(),
        })
        .collect();

    render_template(
        "listings.html",
        ListingsContext {
            heading,
            categories,
            cities,
            listings,
            control,
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::Request;
    use tower::ServiceExt;

    fn test_state() -> AppState {
        let catalog = Catalog::from_yaml_str(
            r#"
listings:
  - { id: p1, name: "Desk <One>", city: Pune, category: coworking, price_per_month: 5000 }
  - { id: p2, name: "Desk Two", city: Pune, category: coworking, price_per_month: 5200 }
  - { id: d1, name: "Room Three", city: Delhi, category: meeting-room, price_per_month: 900 }
"#,
        )
        .unwrap();
        let mut config = AppConfig::default();
        config.pagination.items_per_page = 1;
        AppState::new(config, catalog)
    }

    async fn get(uri: &str) -> (StatusCode, String) {
        let response = router(test_state())
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    #[test]
    fn test_client_errors_map_to_bad_request() {
        assert_eq!(
            status_for(&Error::invalid_page("abc")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::invalid_query("abc")),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            status_for(&Error::server("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_listings_api_returns_owned_page() {
        let (status, body) = get("/api/listings?city=pune&page=2").await;
        assert_eq!(status, StatusCode::OK);

        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["listings"][0]["id"], "p2");
        assert_eq!(body["data"]["pagination"]["total_pages"], 2);
        assert_eq!(body["data"]["range"]["start"], 2);
    }

    #[tokio::test]
    async fn test_bad_query_uses_json_envelope() {
        let (status, body) = get("/api/pagination/window?current=x&total=10").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid query"));
    }

    #[tokio::test]
    async fn test_bad_query_on_page_renders_error_page() {
        let (status, body) = get("/spaces?per_page=lots").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("<h1>Something went wrong</h1>"));
        assert!(body.contains("Invalid query"));
    }

    #[tokio::test]
    async fn test_spaces_page_escapes_and_paginates() {
        let (status, body) = get("/spaces?page=1").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Desk &lt;One&gt;"));
        assert!(!body.contains("Desk Two"));
        assert!(body.contains("Showing 1 to 1 of 3"));
        assert!(body.contains(r#"spaces?page=2" rel="next""#));
        assert!(body.contains(r#"aria-current="page" data-page="1">1</span>"#));
        assert!(body.contains("scrollTo"));
    }

    #[tokio::test]
    async fn test_category_page_keeps_city_in_links() {
        let (status, body) = get("/spaces/coworking?city=Pune&page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("<h1>Coworking Spaces in Pune</h1>"));
        assert!(body.contains("Desk Two"));
        assert!(body.contains(r#"city=Pune&amp;page=1" rel="prev""#));
    }

    #[tokio::test]
    async fn test_page_size_from_query_is_honoured_and_carried() {
        let (status, body) = get("/spaces?per_page=2").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Desk &lt;One&gt;"));
        assert!(body.contains("Desk Two"));
        assert!(!body.contains("Room Three"));
        assert!(body.contains("Showing 1 to 2 of 3"));
        assert!(body.contains(r#"per_page=2&amp;page=2" rel="next""#));
        assert!(body.contains("city=Delhi&amp;per_page=2&amp;page=1"));
    }

    #[tokio::test]
    async fn test_single_page_renders_no_control() {
        let (status, body) = get("/spaces/meeting-room").await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.contains("Room Three"));
        assert!(!body.contains("aria-label=\"Pagination\""));
    }

    #[tokio::test]
    async fn test_empty_filter_message() {
        let (_, body) = get("/spaces?city=Chennai").await;
        assert!(body.contains("No spaces match these filters."));
    }

    #[tokio::test]
    async fn test_unknown_category_page_is_bad_request() {
        let (status, body) = get("/spaces/garage").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body.contains("garage"));
    }
}
