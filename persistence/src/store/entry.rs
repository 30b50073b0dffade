use std::collections::BTreeMap;
use std::fmt::{self, Display};
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};
use crate::vacancy::{effective_salary_to, SalaryBound, Vacancy};

/// The stored projection of a [`Vacancy`], one object of the backing JSON array
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VacancyEntry {
    pub title: String,
    pub url: String,
    pub salary_from: Option<u64>,
    pub salary_to: Option<u64>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub description: String,
}

/// Postings without a responsibility snippet were stored with a `null` description
fn null_as_empty<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl VacancyEntry {
    pub fn effective_salary_to(&self) -> u64 {
        effective_salary_to(self.salary_to)
    }

    pub fn value_of(&self, field: Field) -> Value {
        match field {
            Field::Title => Value::String(self.title.clone()),
            Field::Url => Value::String(self.url.clone()),
            Field::SalaryFrom => salary_value(self.salary_from),
            Field::SalaryTo => salary_value(self.salary_to),
            Field::Description => Value::String(self.description.clone()),
        }
    }

    pub fn salary_range(&self) -> String {
        format!(
            "{}-{}",
            SalaryBound(self.salary_from),
            SalaryBound(self.salary_to)
        )
    }
}

impl From<&Vacancy> for VacancyEntry {
    fn from(vacancy: &Vacancy) -> Self {
        Self {
            title: vacancy.title().to_owned(),
            url: vacancy.url().to_owned(),
            salary_from: vacancy.salary_from(),
            salary_to: vacancy.salary_to(),
            description: vacancy.description().to_owned(),
        }
    }
}

fn salary_value(salary: Option<u64>) -> Value {
    match salary {
        Some(value) => Value::from(value),
        None => Value::Null,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Title,
    Url,
    SalaryFrom,
    SalaryTo,
    Description,
}

impl Field {
    pub fn name(&self) -> &'static str {
        match self {
            Field::Title => "title",
            Field::Url => "url",
            Field::SalaryFrom => "salary_from",
            Field::SalaryTo => "salary_to",
            Field::Description => "description",
        }
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "title" => Ok(Field::Title),
            "url" => Ok(Field::Url),
            "salary_from" => Ok(Field::SalaryFrom),
            "salary_to" => Ok(Field::SalaryTo),
            "description" => Ok(Field::Description),
            _ => Err(Error::UnknownField(s.to_owned())),
        }
    }
}

impl Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Exact-equality filter over stored fields, every criterion has to hold.
///
/// Values compare as JSON, so `5000` never equals `"5000"` and `null` matches an absent bound.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Criteria {
    fields: BTreeMap<Field, Value>,
}

impl Criteria {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, field: Field, value: impl Into<Value>) -> Self {
        self.fields.insert(field, value.into());
        self
    }

    /// Adds a criterion from text, e.g. a `field=value` pair typed by a user.
    ///
    /// Salary values are read as JSON so `5000` and `null` compare as numbers and absent
    /// bounds, every other field takes the text as is.
    pub fn insert_named(&mut self, name: &str, raw: &str) -> Result<()> {
        let field = name.parse::<Field>()?;
        let value = match field {
            Field::SalaryFrom | Field::SalaryTo => {
                serde_json::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_owned()))
            }
            _ => Value::String(raw.to_owned()),
        };
        self.fields.insert(field, value);
        Ok(())
    }

    pub fn matches(&self, entry: &VacancyEntry) -> bool {
        self.fields
            .iter()
            .all(|(field, expected)| entry.value_of(*field) == *expected)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    fn entry() -> VacancyEntry {
        VacancyEntry {
            title: "Rust developer".to_owned(),
            url: "https://hh.ru/vacancy/1".to_owned(),
            salary_from: Some(1000),
            salary_to: None,
            description: "Senior Rust".to_owned(),
        }
    }

    #[test]
    fn test_field_names() {
        for name in ["title", "url", "salary_from", "salary_to", "description"] {
            let field: Field = name.parse().unwrap();
            assert_eq!(field.name(), name);
        }
        assert!(matches!(
            "salary".parse::<Field>().unwrap_err(),
            Error::UnknownField(name) if name == "salary"
        ));
        assert!("Title".parse::<Field>().is_err());
    }

    #[test]
    fn test_criteria_exact_match() {
        let entry = entry();
        assert!(Criteria::new().matches(&entry));
        assert!(Criteria::new().with(Field::Title, "Rust developer").matches(&entry));
        assert!(!Criteria::new().with(Field::Title, "rust developer").matches(&entry));
        assert!(!Criteria::new().with(Field::Title, "Rust").matches(&entry));
        assert!(Criteria::new().with(Field::SalaryFrom, 1000).matches(&entry));
        assert!(!Criteria::new().with(Field::SalaryFrom, "1000").matches(&entry));
        assert!(Criteria::new().with(Field::SalaryTo, Value::Null).matches(&entry));
    }

    #[test]
    fn test_criteria_all_must_hold() {
        let entry = entry();
        let criteria = Criteria::new()
            .with(Field::Url, "https://hh.ru/vacancy/1")
            .with(Field::SalaryFrom, 1000);
        assert!(criteria.matches(&entry));
        let criteria = criteria.with(Field::Description, "Junior");
        assert!(!criteria.matches(&entry));
    }

    #[test]
    fn test_insert_named_rejects_unknown_field() {
        let mut criteria = Criteria::new();
        let err = criteria.insert_named("company", "Yandex").unwrap_err();
        assert!(matches!(err, Error::UnknownField(_)));
        assert_eq!(criteria, Criteria::new());
    }

    #[test]
    fn test_insert_named_types_values_by_field() {
        let entry = entry();
        let mut criteria = Criteria::new();
        criteria.insert_named("salary_from", "1000").unwrap();
        criteria.insert_named("salary_to", "null").unwrap();
        assert_eq!(
            criteria,
            Criteria::new()
                .with(Field::SalaryFrom, 1000)
                .with(Field::SalaryTo, Value::Null)
        );
        assert!(criteria.matches(&entry));

        let mut criteria = Criteria::new();
        criteria.insert_named("title", "1000").unwrap();
        assert_eq!(criteria, Criteria::new().with(Field::Title, "1000"));
        assert!(!criteria.matches(&entry));
    }

    #[test]
    fn test_null_description_reads_as_empty() {
        let entry: VacancyEntry = serde_json::from_value(json!({
            "title": "QA",
            "url": "https://hh.ru/vacancy/3",
            "salary_from": null,
            "salary_to": null,
            "description": null
        }))
        .unwrap();
        assert_eq!(entry.description, "");
    }

    #[test]
    fn test_entry_without_description_defaults_to_empty() {
        let entry: VacancyEntry = serde_json::from_value(json!({
            "title": "QA",
            "url": "https://hh.ru/vacancy/2",
            "salary_from": null,
            "salary_to": 3000
        }))
        .unwrap();
        assert_eq!(entry.description, "");
        assert_eq!(entry.effective_salary_to(), 3000);
        assert_eq!(entry.salary_range(), "n/a-3000");
    }
}
