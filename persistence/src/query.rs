use crate::store::VacancyEntry;

/// The `n` best paid entries by upper salary bound, ties keep insertion order
pub fn top_by_salary(mut entries: Vec<VacancyEntry>, n: usize) -> Vec<VacancyEntry> {
    // sort_by is stable
    entries.sort_by(|a, b| b.effective_salary_to().cmp(&a.effective_salary_to()));
    entries.truncate(n);
    entries
}

/// Entries whose description contains `keyword`, ignoring case
pub fn filter_by_description(entries: Vec<VacancyEntry>, keyword: &str) -> Vec<VacancyEntry> {
    let keyword = keyword.to_lowercase();
    entries
        .into_iter()
        .filter(|entry| entry.description.to_lowercase().contains(&keyword))
        .collect()
}

#[cfg(test)]
mod test {
    use super::*;

    fn entry(title: &str, salary_to: Option<u64>, description: &str) -> VacancyEntry {
        VacancyEntry {
            title: title.to_owned(),
            url: format!("https://hh.ru/vacancy/{}", title),
            salary_from: None,
            salary_to,
            description: description.to_owned(),
        }
    }

    fn titles(entries: &[VacancyEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.title.as_str()).collect()
    }

    #[test]
    fn test_top_by_salary() {
        let entries = vec![
            entry("a", Some(5000), ""),
            entry("b", Some(10000), ""),
            entry("c", None, ""),
        ];
        let top = top_by_salary(entries, 2);
        assert_eq!(titles(&top), vec!["b", "a"]);
    }

    #[test]
    fn test_top_by_salary_ties_keep_insertion_order() {
        let entries = vec![
            entry("none", None, ""),
            entry("first", Some(3000), ""),
            entry("zero", Some(0), ""),
            entry("second", Some(3000), ""),
            entry("high", Some(9000), ""),
        ];
        let top = top_by_salary(entries, 10);
        assert_eq!(titles(&top), vec!["high", "first", "second", "none", "zero"]);
    }

    #[test]
    fn test_top_by_salary_zero() {
        assert!(top_by_salary(vec![entry("a", Some(1), "")], 0).is_empty());
    }

    #[test]
    fn test_filter_by_description() {
        let entries = vec![
            entry("senior", None, "Senior Python developer"),
            entry("empty", None, ""),
            entry("java", None, "Java backend"),
            entry("upper", None, "PYTHON scripts"),
        ];
        let found = filter_by_description(entries, "python");
        assert_eq!(titles(&found), vec!["senior", "upper"]);
    }

    #[test]
    fn test_filter_by_description_cyrillic() {
        let entries = vec![entry("ru", None, "Разработка на Python"), entry("en", None, "Go")];
        let found = filter_by_description(entries, "РАЗРАБОТКА");
        assert_eq!(titles(&found), vec!["ru"]);
    }
}
