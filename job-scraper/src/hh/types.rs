use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PostingSalary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    pub currency: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub requirement: Option<String>,
    pub responsibility: Option<String>,
}

/// A vacancy as returned by the hh.ru search endpoint, only the fields we consume
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Posting {
    pub name: String,
    pub alternate_url: String,
    pub salary: Option<PostingSalary>,
    pub snippet: Option<Snippet>,
}

impl Posting {
    pub fn salary_from(&self) -> Option<i64> {
        self.salary.as_ref().and_then(|salary| salary.from)
    }

    pub fn salary_to(&self) -> Option<i64> {
        self.salary.as_ref().and_then(|salary| salary.to)
    }

    pub fn responsibility(&self) -> Option<&str> {
        self.snippet
            .as_ref()
            .and_then(|snippet| snippet.responsibility.as_deref())
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct SearchResponse {
    pub items: Vec<Posting>,
    pub found: u32,
    pub pages: u32,
    pub page: u32,
    pub per_page: u32,
}
