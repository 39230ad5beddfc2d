//! Live adapter for the `CatalogSource` port using the catalog HTTP API.

use std::env;

use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;

use crate::catalog::dto::{CourseDto, DegreeDto, ScheduleDto};
use crate::catalog::normalize;
use crate::domain::{Course, Degree, Shift};
use crate::ports::catalog::{CatalogFuture, CatalogSource};

/// Environment variable naming the catalog API base URL.
pub const CATALOG_URL_VAR: &str = "TIMETABLER_CATALOG_URL";

/// Live catalog client talking to the university catalog API.
pub struct LiveCatalog {
    client: Client,
    base_url: String,
}

impl LiveCatalog {
    /// Creates a client for the given base URL (no trailing slash).
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self { client: Client::new(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Creates a client from the `TIMETABLER_CATALOG_URL` environment
    /// variable.
    ///
    /// # Errors
    ///
    /// Returns an error string when the variable is not set.
    pub fn from_env() -> Result<Self, String> {
        let base_url = env::var(CATALOG_URL_VAR)
            .map_err(|_| format!("{CATALOG_URL_VAR} environment variable not set"))?;
        Ok(Self::new(&base_url))
    }

    fn url(&self, path: &str, term: &str) -> String {
        format!("{}{path}?academicTerm={}", self.base_url, urlencoding::encode(term))
    }
}

impl CatalogSource for LiveCatalog {
    fn degrees(&self, term: &str) -> CatalogFuture<'_, Vec<Degree>> {
        let url = self.url("/api/degrees", term);
        Box::pin(async move {
            let dtos: Vec<DegreeDto> = fetch_json(&self.client, &url).await?;
            let mut degrees: Vec<Degree> =
                dtos.into_iter().map(normalize::degree_from_dto).collect();
            degrees.sort_by(Degree::compare);
            Ok(degrees)
        })
    }

    fn courses(&self, degree: &Degree, term: &str) -> CatalogFuture<'_, Vec<Course>> {
        let url = self.url(&format!("/api/degrees/{}/courses", degree.id), term);
        let degree_acronym = degree.acronym.clone();
        Box::pin(async move {
            let dtos: Vec<CourseDto> = fetch_json(&self.client, &url).await?;
            let mut courses: Vec<Course> = dtos
                .into_iter()
                .map(|dto| normalize::course_from_dto(dto, &degree_acronym))
                .collect();
            courses.sort_by(Course::compare);
            Ok(courses)
        })
    }

    fn course(&self, course_id: &str, term: &str) -> CatalogFuture<'_, Option<Course>> {
        let url = self.url(&format!("/api/courses/{course_id}"), term);
        let course_id = course_id.to_string();
        Box::pin(async move {
            let Some(mut dto) = fetch_optional_json::<CourseDto>(&self.client, &url).await? else {
                return Ok(None);
            };
            // The standalone course route omits the id; pin the one we
            // asked for so identity survives the round trip.
            dto.id = course_id;
            let acronyms = normalize::competence_acronyms(&dto);
            Ok(Some(normalize::course_from_dto(dto, &acronyms)))
        })
    }

    fn course_schedules(
        &self,
        course: &Course,
        term: &str,
    ) -> CatalogFuture<'_, Option<Vec<Shift>>> {
        let url = self.url(&format!("/api/courses/{}/schedule", course.id), term);
        let course = course.clone();
        Box::pin(async move {
            let Some(dto) = fetch_optional_json::<ScheduleDto>(&self.client, &url).await? else {
                return Ok(None);
            };
            let (shifts, errors) = normalize::schedule_shifts(&dto, &course);
            for error in errors {
                eprintln!("{error}");
            }
            Ok(Some(shifts))
        })
    }
}

async fn fetch_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<T, Box<dyn std::error::Error + Send + Sync>> {
    fetch_optional_json(client, url)
        .await?
        .ok_or_else(|| format!("catalog has no resource at {url}").into())
}

async fn fetch_optional_json<T: DeserializeOwned>(
    client: &Client,
    url: &str,
) -> Result<Option<T>, Box<dyn std::error::Error + Send + Sync>> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("catalog request failed: {e}").into()
        })?;
    let status = response.status();
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }
    if !status.is_success() {
        return Err(format!("catalog returned {}", status.as_u16()).into());
    }
    let value = response.json::<T>().await.map_err(
        |e| -> Box<dyn std::error::Error + Send + Sync> {
            format!("failed to parse catalog response: {e}").into()
        },
    )?;
    Ok(Some(value))
}
