use std::io::Write;

use persistence::VacancyEntry;

pub fn vacancy_line(entry: &VacancyEntry) -> String {
    format!(
        "{} - {} руб. ({})",
        entry.title,
        entry.salary_range(),
        entry.url
    )
}

pub fn print_vacancies(out: &mut impl Write, entries: &[VacancyEntry]) -> std::io::Result<()> {
    if entries.is_empty() {
        writeln!(out, "Вакансии не найдены.")?;
    }
    for entry in entries {
        writeln!(out, "{}", vacancy_line(entry))?;
    }
    Ok(())
}
