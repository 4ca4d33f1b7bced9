use anyhow::Result;
use rmcp::{
    handler::server::{wrapper::Parameters, ServerHandler, tool::ToolRouter},
    model::{CallToolResult, Content, Implementation, ProtocolVersion, ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router,
    ErrorData as McpError,
};

use crate::config::ForecastConfig;
use crate::constants::DEFAULT_FORECAST_DAYS;
use crate::daily::{detailed_analysis, group_by_day};
use crate::error::ForecastError;
use crate::fetcher::{clamp_days, ForecastClient};
use crate::formatters::{
    format_detailed, format_heading, format_location_not_found, format_metrics,
    format_quick_locations, format_sky, format_temperature_trend,
};
use crate::metrics::{summarize, temperature_trend};
use crate::models::{ForecastView, GetForecastViewRequest};

/// Forecast dashboard exposed as MCP tools
#[derive(Clone)]
pub struct ForecastDashboard {
    client: ForecastClient,
    tool_router: ToolRouter<Self>,
}

impl ForecastDashboard {
    /// Creates a new dashboard service instance
    pub fn new(config: ForecastConfig) -> Result<Self> {
        Ok(Self {
            client: ForecastClient::new(config)?,
            tool_router: Self::tool_router(),
        })
    }

    /// Fetches the forecast and renders the requested view.
    ///
    /// Shaping only runs once the fetch succeeded with at least one sample.
    pub async fn render_view(&self, request: &GetForecastViewRequest) -> Result<String, ForecastError> {
        let place = request
            .resolved_location()
            .ok_or(ForecastError::EmptyLocation)?;
        let requested_days = request.days.unwrap_or(DEFAULT_FORECAST_DAYS);
        let view = request.view.unwrap_or_default();

        // fetch clamps (and logs) on its own; the heading shows the clamped window
        let series = self.client.fetch(place, requested_days).await?;
        if series.is_empty() {
            return Err(ForecastError::EmptySeries);
        }

        let mut output = format_heading(view, clamp_days(requested_days), place);

        if request.show_metrics.unwrap_or(true) {
            output.push_str(&format_metrics(&summarize(&series)?));
        }

        let body = match view {
            ForecastView::Temperature => format_temperature_trend(&temperature_trend(&series)),
            ForecastView::Sky => format_sky(&group_by_day(&series)),
            ForecastView::DetailedAnalysis => format_detailed(&detailed_analysis(&series)),
        };
        output.push_str(&body);

        Ok(output)
    }

    fn to_mcp_error(err: ForecastError) -> McpError {
        match err {
            ForecastError::EmptyLocation => McpError::invalid_params(
                "Please enter a location or choose one of the quick locations.",
                None,
            ),
            ForecastError::LocationNotFound(place) => {
                McpError::invalid_params(format_location_not_found(&place), None)
            }
            ForecastError::EmptySeries => {
                McpError::internal_error("No data available for this location", None)
            }
            ForecastError::Provider(detail) => McpError::internal_error(
                format!("An unexpected error occurred: {}", detail),
                None,
            ),
        }
    }
}

#[tool_handler]
impl ServerHandler for ForecastDashboard {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "mcp-forecast-dashboard".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                icons: None,
                title: None,
                website_url: None,
            },
            instructions: Some(
                "A weather forecast dashboard powered by OpenWeatherMap. \
                Renders temperature, sky and detailed analysis views for up to five days."
                    .to_string(),
            ),
        }
    }
}

#[tool_router]
impl ForecastDashboard {
    /// Renders one dashboard view for a location
    #[tool(description = "Get a weather forecast view for a named location. Provide a location (e.g., 'London') or a quick_location, the number of days (1-5, default 3), and a view: 'Temperature', 'Sky' or 'DetailedAnalysis'. Set show_metrics to false to hide the key metrics panel.")]
    async fn get_forecast_view(
        &self,
        Parameters(request): Parameters<GetForecastViewRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "Getting {:?} view for location: {:?}",
            request.view.unwrap_or_default(),
            request.resolved_location()
        );

        let formatted = self.render_view(&request).await.map_err(Self::to_mcp_error)?;

        Ok(CallToolResult::success(vec![Content::text(formatted)]))
    }

    /// Lists the one-click locations
    #[tool(description = "List the quick locations that can be passed as quick_location.")]
    async fn list_quick_locations(&self) -> Result<CallToolResult, McpError> {
        Ok(CallToolResult::success(vec![Content::text(
            format_quick_locations(),
        )]))
    }
}
