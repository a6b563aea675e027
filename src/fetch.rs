use std::time::Duration;

use chrono::NaiveDate;

use crate::{
    calendar::{ContributionCalendar, ContributionDay, ContributionWeek},
    error::{InvadersError, InvadersResult},
};

pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const CONTRIBUTIONS_QUERY: &str = r#"
query($username: String!) {
  user(login: $username) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}
"#;

#[derive(Clone, Debug)]
pub struct FetchOptions {
    pub endpoint: String,
    pub timeout: Duration,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            endpoint: GITHUB_GRAPHQL_URL.to_string(),
            timeout: Duration::from_secs(20),
        }
    }
}

/// Fetch a user's contribution calendar from the GitHub GraphQL API.
///
/// One request, no retry. The credential is passed in explicitly; this
/// module never reads the process environment. Every failure mode maps onto
/// the crate error taxonomy: bad inputs are configuration errors raised
/// before any network activity, network/HTTP failures are transport errors,
/// an error payload inside a 200 response is an api error, and an
/// unexpected response shape is a serialization or validation error.
#[tracing::instrument(skip(token, options))]
pub fn fetch_contributions(
    login: &str,
    token: &str,
    options: &FetchOptions,
) -> InvadersResult<ContributionCalendar> {
    if login.trim().is_empty() {
        return Err(InvadersError::config("login must be non-empty"));
    }
    if token.trim().is_empty() {
        return Err(InvadersError::config("credential must be non-empty"));
    }

    let client = reqwest::blocking::Client::builder()
        .timeout(options.timeout)
        .build()
        .map_err(|e| InvadersError::transport(format!("build http client: {e}")))?;

    let body = serde_json::json!({
        "query": CONTRIBUTIONS_QUERY,
        "variables": { "username": login },
    });

    tracing::debug!(endpoint = %options.endpoint, "requesting contribution calendar");

    let response = client
        .post(&options.endpoint)
        .bearer_auth(token)
        .header(
            reqwest::header::USER_AGENT,
            concat!("contrib-invaders/", env!("CARGO_PKG_VERSION")),
        )
        .json(&body)
        .send()
        .map_err(|e| InvadersError::transport(format!("graphql request failed: {e}")))?;

    let status = response.status();
    if !status.is_success() {
        let text = response.text().unwrap_or_else(|_| "<empty body>".to_string());
        return Err(InvadersError::transport(format!(
            "graphql request returned {status}: {}",
            text.trim()
        )));
    }

    let parsed: GraphQlResponse = response
        .json()
        .map_err(|e| InvadersError::serde(format!("decode graphql response: {e}")))?;

    let calendar = calendar_from_response(parsed, login)?;
    tracing::info!(
        total = calendar.total,
        weeks = calendar.weeks.len(),
        "fetched contribution calendar"
    );
    Ok(calendar)
}

#[derive(Debug, serde::Deserialize)]
struct GraphQlResponse {
    #[serde(default)]
    data: Option<ResponseData>,
    #[serde(default)]
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Debug, serde::Deserialize)]
struct GraphQlError {
    message: String,
}

#[derive(Debug, serde::Deserialize)]
struct ResponseData {
    user: Option<WireUser>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireUser {
    contributions_collection: WireContributionsCollection,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireContributionsCollection {
    contribution_calendar: WireCalendar,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireCalendar {
    total_contributions: i64,
    weeks: Vec<WireWeek>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireWeek {
    contribution_days: Vec<WireDay>,
}

#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireDay {
    contribution_count: i64,
    date: NaiveDate,
}

/// Convert a decoded response into the calendar model, surfacing embedded
/// error payloads and rejecting counts/weeks that violate the data model.
fn calendar_from_response(
    response: GraphQlResponse,
    login: &str,
) -> InvadersResult<ContributionCalendar> {
    if let Some(errors) = &response.errors
        && !errors.is_empty()
    {
        let messages = errors
            .iter()
            .map(|e| e.message.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        return Err(InvadersError::api(format!(
            "graphql response reported errors: {messages}"
        )));
    }

    let user = response
        .data
        .and_then(|d| d.user)
        .ok_or_else(|| InvadersError::api(format!("no contribution data for user '{login}'")))?;

    let wire = user.contributions_collection.contribution_calendar;
    let total = checked_count(wire.total_contributions, "totalContributions")?;

    let mut weeks = Vec::with_capacity(wire.weeks.len());
    for week in wire.weeks {
        let mut days = Vec::with_capacity(week.contribution_days.len());
        for day in week.contribution_days {
            days.push(ContributionDay {
                date: day.date,
                count: checked_count(day.contribution_count, "contributionCount")?,
            });
        }
        weeks.push(ContributionWeek { days });
    }

    let calendar = ContributionCalendar { total, weeks };
    calendar.validate()?;
    Ok(calendar)
}

fn checked_count(value: i64, field: &str) -> InvadersResult<u32> {
    u32::try_from(value)
        .map_err(|_| InvadersError::validation(format!("{field} must be a non-negative count, got {value}")))
}
