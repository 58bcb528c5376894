use anyhow::Context as _;
use chrono::NaiveDate;
use serde::Deserialize;

use afritrace_domain::certification::CertificationStatus;
use afritrace_domain::compliance::RegionalCompliance;

use crate::domain::repository::RemaRegistryPort;
use crate::domain::types::RemaCompany;
use crate::error::RegistryServiceError;

/// Where the REMA company list comes from.
///
/// The regulator has not published its API yet, so the built-in list is used
/// unless `REMA_API_URL` points at a compatible endpoint.
#[derive(Clone)]
pub enum RemaRegistry {
    Static,
    Http { client: reqwest::Client, url: String },
}

impl RemaRegistry {
    pub fn from_url(url: Option<String>) -> Self {
        match url {
            Some(url) => Self::Http {
                client: reqwest::Client::new(),
                url,
            },
            None => Self::Static,
        }
    }
}

impl RemaRegistryPort for RemaRegistry {
    async fn fetch_companies(&self) -> Result<Vec<RemaCompany>, RegistryServiceError> {
        let records = match self {
            Self::Static => static_records(),
            Self::Http { client, url } => client
                .get(url)
                .send()
                .await
                .and_then(reqwest::Response::error_for_status)
                .context("request REMA company list")?
                .json::<Vec<RemaCompanyRecord>>()
                .await
                .context("decode REMA company list")?,
        };
        Ok(records.into_iter().map(RemaCompany::from).collect())
    }
}

/// Wire format of one company in the REMA registry.
#[derive(Debug, Clone, Deserialize)]
pub struct RemaCompanyRecord {
    pub name: String,
    pub registration_number: String,
    #[serde(default)]
    pub contact_email: Option<String>,
    #[serde(default)]
    pub contact_phone: Option<String>,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub mine_location_lat: Option<f64>,
    #[serde(default)]
    pub mine_location_lng: Option<f64>,
    pub certification_status: String,
    #[serde(default)]
    pub certification_start_date: Option<NaiveDate>,
    #[serde(default)]
    pub certification_end_date: Option<NaiveDate>,
    #[serde(default)]
    pub regional_compliance: RegionalCompliance,
}

impl From<RemaCompanyRecord> for RemaCompany {
    fn from(r: RemaCompanyRecord) -> Self {
        Self {
            name: r.name,
            registration_number: r.registration_number,
            contact_email: r.contact_email,
            contact_phone: r.contact_phone,
            address: r.address,
            mine_location_lat: r.mine_location_lat,
            mine_location_lng: r.mine_location_lng,
            certification_status: r.certification_status,
            certification_start_date: r.certification_start_date,
            certification_end_date: r.certification_end_date,
            regional_compliance: r.regional_compliance,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn record(
    name: &str,
    registration_number: &str,
    contact_email: &str,
    contact_phone: &str,
    address: &str,
    (lat, lng): (f64, f64),
    (start, end): (NaiveDate, NaiveDate),
    (au, rema, icglr, comesa): (bool, bool, bool, bool),
) -> RemaCompanyRecord {
    RemaCompanyRecord {
        name: name.to_owned(),
        registration_number: registration_number.to_owned(),
        contact_email: Some(contact_email.to_owned()),
        contact_phone: Some(contact_phone.to_owned()),
        address: Some(address.to_owned()),
        mine_location_lat: Some(lat),
        mine_location_lng: Some(lng),
        certification_status: CertificationStatus::Active.as_str().to_owned(),
        certification_start_date: Some(start),
        certification_end_date: Some(end),
        regional_compliance: RegionalCompliance {
            au,
            rema,
            icglr,
            comesa,
        },
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or(NaiveDate::MIN)
}

/// Companies REMA has certified, served until the live API is available.
fn static_records() -> Vec<RemaCompanyRecord> {
    vec![
        record(
            "REMA Certified Mining Co.",
            "REMA-2024-101",
            "info@remacertified.rw",
            "+250788456789",
            "Kigali City, Rwanda",
            (-1.9536, 30.0605),
            (date(2024, 1, 15), date(2026, 1, 15)),
            (true, true, true, true),
        ),
        record(
            "Northern Rwanda Minerals",
            "REMA-2024-102",
            "contact@nrminerals.rw",
            "+250788567890",
            "Musanze, Northern Province",
            (-1.4984, 29.6363),
            (date(2024, 2, 1), date(2025, 8, 31)),
            (false, true, true, true),
        ),
        record(
            "Southern Mining Operations Ltd",
            "REMA-2024-103",
            "admin@southernmining.rw",
            "+250788678901",
            "Huye, Southern Province",
            (-2.5962, 29.7396),
            (date(2024, 3, 10), date(2025, 12, 31)),
            (true, true, false, true),
        ),
        record(
            "Western Province Gold Mines",
            "REMA-2024-104",
            "info@westerngold.rw",
            "+250788789012",
            "Karongi, Western Province",
            (-2.0108, 29.2768),
            (date(2024, 1, 20), date(2026, 6, 30)),
            (true, true, true, false),
        ),
    ]
}
