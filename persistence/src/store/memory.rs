use super::{Criteria, VacancyEntry, VacancyStore};
use crate::error::Result;
use crate::vacancy::Vacancy;

#[derive(Debug, Default)]
pub struct InMemoryStore {
    entries: Vec<VacancyEntry>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VacancyStore for InMemoryStore {
    fn save(&mut self, vacancy: &Vacancy) -> Result<()> {
        self.entries.push(VacancyEntry::from(vacancy));
        Ok(())
    }

    fn get(&self, criteria: &Criteria) -> Result<Vec<VacancyEntry>> {
        Ok(self
            .entries
            .iter()
            .filter(|entry| criteria.matches(entry))
            .cloned()
            .collect())
    }

    fn delete(&mut self, url: &str) -> Result<usize> {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.url != url);
        Ok(before - self.entries.len())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::store::Field;

    #[test]
    fn test_save_get_delete() {
        let mut store = InMemoryStore::new();
        let a = Vacancy::new("A", "http://example.com/a", None, Some(10), "").unwrap();
        let b = Vacancy::new("B", "http://example.com/b", None, Some(20), "").unwrap();
        store.save(&a).unwrap();
        store.save(&b).unwrap();
        store.save(&a).unwrap();

        assert_eq!(store.all().unwrap().len(), 3);
        let only_a = store
            .get(&Criteria::new().with(Field::Url, "http://example.com/a"))
            .unwrap();
        assert_eq!(only_a.len(), 2);

        assert_eq!(store.delete("http://example.com/a").unwrap(), 2);
        let rest = store.all().unwrap();
        assert_eq!(rest, vec![VacancyEntry::from(&b)]);
        assert_eq!(store.delete("http://example.com/missing").unwrap(), 0);
    }
}
