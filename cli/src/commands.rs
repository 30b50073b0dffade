use std::io::Write;

use persistence::{query, Criteria, Vacancy, VacancyStore};

use crate::render::print_vacancies;
use crate::Result;

pub fn top(store: &impl VacancyStore, n: usize, out: &mut impl Write) -> Result<()> {
    let entries = query::top_by_salary(store.all()?, n);
    print_vacancies(out, &entries)?;
    Ok(())
}

pub fn grep(store: &impl VacancyStore, keyword: &str, out: &mut impl Write) -> Result<()> {
    let entries = query::filter_by_description(store.all()?, keyword);
    print_vacancies(out, &entries)?;
    Ok(())
}

pub fn list(
    store: &impl VacancyStore,
    criteria: &[(String, String)],
    out: &mut impl Write,
) -> Result<()> {
    let criteria = build_criteria(criteria)?;
    let entries = store.get(&criteria)?;
    print_vacancies(out, &entries)?;
    Ok(())
}

pub fn add(store: &mut impl VacancyStore, vacancy: &Vacancy, out: &mut impl Write) -> Result<()> {
    store.save(vacancy)?;
    writeln!(out, "Вакансия сохранена: {}", vacancy)?;
    Ok(())
}

pub fn delete(store: &mut impl VacancyStore, url: &str, out: &mut impl Write) -> Result<()> {
    let removed = store.delete(url)?;
    writeln!(out, "{} вакансий удалено.", removed)?;
    Ok(())
}

fn build_criteria(raw: &[(String, String)]) -> Result<Criteria> {
    let mut criteria = Criteria::new();
    for (name, value) in raw {
        criteria.insert_named(name, value)?;
    }
    Ok(criteria)
}

/// Parses a `field=value` pair given on the command line
pub fn parse_criterion(s: &str) -> std::result::Result<(String, String), String> {
    s.split_once('=')
        .map(|(field, value)| (field.trim().to_owned(), value.to_owned()))
        .ok_or_else(|| format!("expected field=value, got '{}'", s))
}
