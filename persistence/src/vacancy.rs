use std::cmp::Ordering;
use std::fmt::{self, Display};

use job_scraper::hh::Posting;

use crate::error::{Error, Result};

/// A validated job posting.
///
/// Salary bounds are optional and non-negative, nothing ties `salary_from` to `salary_to`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vacancy {
    title: String,
    url: String,
    salary_from: Option<u64>,
    salary_to: Option<u64>,
    description: String,
}

impl Vacancy {
    pub fn new(
        title: impl Into<String>,
        url: impl Into<String>,
        salary_from: Option<i64>,
        salary_to: Option<i64>,
        description: impl Into<String>,
    ) -> Result<Self> {
        Ok(Self {
            title: title.into(),
            url: url.into(),
            salary_from: validate_salary(salary_from)?,
            salary_to: validate_salary(salary_to)?,
            description: description.into(),
        })
    }

    /// Builds a vacancy out of user-entered text, blank salary fields mean unspecified
    pub fn from_form(
        title: &str,
        url: &str,
        salary_from: &str,
        salary_to: &str,
        description: &str,
    ) -> Result<Self> {
        Ok(Self {
            title: title.trim().to_owned(),
            url: url.trim().to_owned(),
            salary_from: Self::parse_salary(salary_from)?,
            salary_to: Self::parse_salary(salary_to)?,
            description: description.trim().to_owned(),
        })
    }

    pub fn parse_salary(raw: &str) -> Result<Option<u64>> {
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(None);
        }
        let salary = raw
            .parse::<i64>()
            .map_err(|_| Error::InvalidSalary(raw.to_owned()))?;
        validate_salary(Some(salary))
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn salary_from(&self) -> Option<u64> {
        self.salary_from
    }

    pub fn salary_to(&self) -> Option<u64> {
        self.salary_to
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Upper salary bound used for ranking, an absent bound counts as 0
    pub fn effective_salary_to(&self) -> u64 {
        effective_salary_to(self.salary_to)
    }

    pub fn compare_by_salary(&self, other: &Vacancy) -> Ordering {
        self.effective_salary_to().cmp(&other.effective_salary_to())
    }
}

impl Display for Vacancy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}-{}",
            self.title,
            SalaryBound(self.salary_from),
            SalaryBound(self.salary_to)
        )
    }
}

impl TryFrom<Posting> for Vacancy {
    type Error = Error;

    fn try_from(posting: Posting) -> Result<Self> {
        let salary_from = posting.salary_from();
        let salary_to = posting.salary_to();
        let description = posting.responsibility().unwrap_or_default().to_owned();
        Vacancy::new(
            posting.name,
            posting.alternate_url,
            salary_from,
            salary_to,
            description,
        )
    }
}

pub(crate) fn effective_salary_to(salary_to: Option<u64>) -> u64 {
    salary_to.unwrap_or(0)
}

fn validate_salary(salary: Option<i64>) -> Result<Option<u64>> {
    match salary {
        None => Ok(None),
        Some(value) if value < 0 => Err(Error::NegativeSalary(value)),
        Some(value) => Ok(Some(value as u64)),
    }
}

/// Renders an optional salary bound, `n/a` when the employer left it out
pub struct SalaryBound(pub Option<u64>);

impl Display for SalaryBound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(value) => write!(f, "{}", value),
            None => f.write_str("n/a"),
        }
    }
}
