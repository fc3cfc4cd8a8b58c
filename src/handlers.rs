use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Path, Query, State,
    },
    http::{header, HeaderMap},
    response::{IntoResponse, Json, Response},
};
use chrono::NaiveDate;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, warn};

use crate::api::AppState;
use crate::auth::{
    self, clear_refresh_cookie, issue_token, refresh_cookie, verify_token, AuthUser, TokenKind,
};
use crate::captcha::{self, Captcha};
use crate::enterprise::{self, EnterpriseQuery};
use crate::error::{AppError, AppResult};
use crate::fixtures::{Enterprise, Profile, User};
use crate::periods::{check_span, default_range, parse_date};
use crate::reports::{generate_report, EnterpriseEnergyReport, Report};
use crate::response::{success, ApiResponse, ListPage, PagedList};
use crate::roles::derive_roles;
use crate::types::ReportType;

type ApiResult<T> = AppResult<Json<ApiResponse<T>>>;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportQuery {
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub report_type: Option<String>,
    pub enterprise: Option<String>,
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|value| !value.is_empty())
}

// Credentials are compared untrimmed.
fn filled(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

impl ReportQuery {
    pub fn report_type(&self) -> AppResult<ReportType> {
        match present(&self.report_type) {
            Some(value) => value.parse().map_err(AppError::BadRequest),
            None => Ok(ReportType::default()),
        }
    }

    pub fn enterprise(&self) -> Option<&str> {
        present(&self.enterprise)
    }

    /// Explicit range, with each missing end taken from the default range.
    /// Ranges longer than `max_periods` rows are rejected.
    pub fn range(
        &self,
        report_type: ReportType,
        today: NaiveDate,
        max_periods: usize,
    ) -> AppResult<(NaiveDate, NaiveDate)> {
        let (default_start, default_end) = default_range(today, report_type);
        let start = present(&self.start_time).map(parse_date).transpose()?;
        let end = present(&self.end_time).map(parse_date).transpose()?;
        let (start, end) = (start.unwrap_or(default_start), end.unwrap_or(default_end));
        check_span(start, end, report_type, max_periods)?;
        Ok((start, end))
    }

    fn has_range(&self) -> bool {
        present(&self.start_time).is_some() && present(&self.end_time).is_some()
    }
}

fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Smoke test over the energy baseline table.
pub async fn test_energy(State(state): State<AppState>) -> Json<ApiResponse<serde_json::Value>> {
    let baseline = &state.fixtures.energy_baseline;
    let first_item = baseline
        .first()
        .map(|row| EnterpriseEnergyReport::from_baseline(row.date, row));

    success(json!({
        "message": "Test API works",
        "dataLength": baseline.len(),
        "firstItem": first_item,
    }))
}

pub async fn energy_report(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<ListPage<EnterpriseEnergyReport>> {
    let Query(query) = query?;
    let report_type = query.report_type()?;
    let baseline = &state.fixtures.energy_baseline;

    let items: Vec<EnterpriseEnergyReport> = if query.has_range() {
        let (start, end) = query.range(report_type, today(), state.config.mock.max_periods)?;
        generate_report(baseline.as_slice(), StdRng::from_entropy(), start, end, report_type)
    } else {
        baseline
            .iter()
            .map(|row| EnterpriseEnergyReport::from_baseline(row.date, row))
            .collect()
    };

    info!(
        "Energy report: {:?} {:?}..{:?} -> {} rows",
        report_type,
        query.start_time,
        query.end_time,
        items.len()
    );

    tokio::time::sleep(state.config.mock.latency()).await;
    Ok(success(ListPage::new(items)))
}

fn draw_income<T: Report<Source = ()>>(query: &ReportQuery, max_periods: usize) -> AppResult<Vec<T>> {
    let report_type = query.report_type()?;
    let (start, end) = query.range(report_type, today(), max_periods)?;
    Ok(generate_report(&(), StdRng::from_entropy(), start, end, report_type))
}

/// Any income report. Requests without an enterprise get an empty page.
pub async fn income_report<T>(
    State(state): State<AppState>,
    query: Result<Query<ReportQuery>, QueryRejection>,
) -> ApiResult<ListPage<T>>
where
    T: Report<Source = ()> + Send + 'static,
{
    let Query(query) = query?;
    let report = T::NAME;

    let Some(enterprise) = query.enterprise() else {
        info!("{}: no enterprise selected", report);
        return Ok(success(ListPage::empty()));
    };

    let items = draw_income::<T>(&query, state.config.mock.max_periods)?;
    info!(
        "{} for {}: {:?}..{:?} -> {} rows",
        report,
        enterprise,
        query.start_time,
        query.end_time,
        items.len()
    );

    tokio::time::sleep(state.config.mock.latency()).await;
    Ok(success(ListPage::new(items)))
}

pub async fn list_enterprises(
    State(state): State<AppState>,
    query: Result<Query<EnterpriseQuery>, QueryRejection>,
) -> ApiResult<PagedList<Enterprise>> {
    let Query(query) = query?;
    let page = enterprise::search(&state.fixtures.enterprises, &query);
    info!("Enterprise search: {} matched, page {}", page.total, page.page);

    tokio::time::sleep(state.config.mock.enterprise_latency()).await;
    Ok(success(page))
}

pub async fn get_enterprise(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Enterprise> {
    let enterprise = state
        .fixtures
        .enterprise(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Enterprise {} not found", id)))?;

    tokio::time::sleep(state.config.mock.enterprise_latency()).await;
    Ok(success(enterprise))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub account: Option<String>,
    pub password: Option<String>,
    pub code: Option<String>,
    pub code_id: Option<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResult {
    #[serde(flatten)]
    pub user: User,
    pub access_token: String,
}

pub async fn login(
    State(state): State<AppState>,
    request: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<Response> {
    let Json(request) = request?;
    let (Some(account), Some(password)) = (filled(&request.account), filled(&request.password)) else {
        return Err(AppError::BadRequest("Account and password are required".to_string()));
    };

    let Some(user) = state.fixtures.find_user(account, password) else {
        warn!("Rejected login for {}", account);
        let rejection = AppError::Forbidden("Account or password is incorrect.".to_string());
        return Ok(([(header::SET_COOKIE, clear_refresh_cookie())], rejection).into_response());
    };

    let access_token = issue_token(&state.config.auth, user, TokenKind::Access)?;
    let refresh_token = issue_token(&state.config.auth, user, TokenKind::Refresh)?;
    let cookie = refresh_cookie(&refresh_token, state.config.auth.cookie_max_age_secs);
    info!("User {} logged in", user.username);

    let body = success(LoginResult {
        user: user.clone(),
        access_token,
    });
    Ok(([(header::SET_COOKIE, cookie)], body).into_response())
}

pub async fn logout() -> impl IntoResponse {
    ([(header::SET_COOKIE, clear_refresh_cookie())], success(""))
}

/// Issues a fresh access token from the refresh cookie. Any failure is a 403.
pub async fn refresh_token(State(state): State<AppState>, headers: HeaderMap) -> AppResult<Response> {
    let forbidden = || AppError::Forbidden("Invalid refresh token".to_string());

    let token = auth::cookie(&headers, auth::REFRESH_COOKIE).ok_or_else(forbidden)?;
    let claims = verify_token(&state.config.auth, token, TokenKind::Refresh).map_err(|_| forbidden())?;
    let user = state.fixtures.user(&claims.username).ok_or_else(forbidden)?;

    let access_token = issue_token(&state.config.auth, user, TokenKind::Access)?;
    let refresh_token = issue_token(&state.config.auth, user, TokenKind::Refresh)?;
    let cookie = refresh_cookie(&refresh_token, state.config.auth.cookie_max_age_secs);
    info!("Refreshed access token for {}", user.username);

    Ok(([(header::SET_COOKIE, cookie)], access_token).into_response())
}

#[derive(Debug, Serialize)]
pub struct UserInfo {
    #[serde(flatten)]
    pub profile: Profile,
    pub roles: Vec<String>,
}

pub async fn user_info(State(state): State<AppState>, AuthUser(user): AuthUser) -> ApiResult<UserInfo> {
    let profile = state
        .fixtures
        .profile(&user.username)
        .cloned()
        .ok_or(AppError::Unauthorized)?;
    let roles = derive_roles(profile.buttons.as_slice());

    Ok(success(UserInfo { profile, roles }))
}

pub async fn captcha() -> Json<ApiResponse<Captcha>> {
    let mut rng = StdRng::from_entropy();
    success(captcha::generate(&mut rng, chrono::Utc::now().timestamp_millis()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::test_support::date;

    const MAX_PERIODS: usize = 366;

    fn query(start: Option<&str>, end: Option<&str>, report_type: Option<&str>) -> ReportQuery {
        ReportQuery {
            start_time: start.map(String::from),
            end_time: end.map(String::from),
            report_type: report_type.map(String::from),
            enterprise: None,
        }
    }

    #[test]
    fn report_type_defaults_to_monthly() {
        assert_eq!(query(None, None, None).report_type().unwrap(), ReportType::Monthly);
        assert_eq!(query(None, None, Some("")).report_type().unwrap(), ReportType::Monthly);
        assert_eq!(query(None, None, Some("yearly")).report_type().unwrap(), ReportType::Yearly);
        assert!(query(None, None, Some("weekly")).report_type().is_err());
    }

    #[test]
    fn missing_ends_fall_back_to_defaults() {
        let today = date("2024-05-20");
        let (start, end) = query(Some("2024-05-01"), None, None)
            .range(ReportType::Monthly, today, MAX_PERIODS)
            .unwrap();
        assert_eq!(start, date("2024-05-01"));
        assert_eq!(end, today);

        let (start, end) = query(None, None, None).range(ReportType::Yearly, today, MAX_PERIODS).unwrap();
        assert_eq!(start, date("2023-06-01"));
        assert_eq!(end, today);
    }

    #[test]
    fn unparseable_dates_are_rejected() {
        let result = query(Some("yesterday"), Some("2024-01-01"), None).range(
            ReportType::Monthly,
            date("2024-01-02"),
            MAX_PERIODS,
        );
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }

    #[test]
    fn oversized_ranges_are_rejected() {
        let today = date("2024-01-02");
        let huge = query(Some("0001-01-01"), Some("9999-12-31"), None);
        assert!(matches!(
            huge.range(ReportType::Monthly, today, MAX_PERIODS),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            huge.range(ReportType::Yearly, today, MAX_PERIODS),
            Err(AppError::BadRequest(_))
        ));

        let leap_year = query(Some("2024-01-01"), Some("2024-12-31"), None);
        assert!(leap_year.range(ReportType::Monthly, today, MAX_PERIODS).is_ok());
        assert!(leap_year.range(ReportType::Monthly, today, 365).is_err());
    }

    #[test]
    fn blank_enterprise_is_absent() {
        let mut q = query(None, None, None);
        assert_eq!(q.enterprise(), None);
        q.enterprise = Some("  ".into());
        assert_eq!(q.enterprise(), None);
        q.enterprise = Some("enterprise_001".into());
        assert_eq!(q.enterprise(), Some("enterprise_001"));
    }
}
