use std::io::{BufRead, Write};

use job_scraper::{hh::Posting, SearchQuery, VacancySource};
use persistence::VacancyStore;

use crate::{commands, scrape, Error, Result};

const MENU: &str = "
1. Ввести поисковый запрос для запроса вакансий из hh.ru
2. Получить топ N вакансий по зарплате
3. Получить вакансии с ключевым словом в описании
4. Выйти";

/// Prompt and read one line, `None` once the input is exhausted
fn prompt(input: &mut impl BufRead, out: &mut impl Write, text: &str) -> Result<Option<String>> {
    write!(out, "{}", text)?;
    out.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_owned()))
}

fn prompt_count(input: &mut impl BufRead, out: &mut impl Write) -> Result<Option<usize>> {
    loop {
        let Some(answer) = prompt(input, out, "Сколько вакансий вывести? ")? else {
            return Ok(None);
        };
        match answer.parse::<usize>() {
            Ok(n) => return Ok(Some(n)),
            Err(_) => writeln!(out, "Введите неотрицательное целое число.")?,
        }
    }
}

/// Runs the interactive menu until the user exits or the input ends.
///
/// Failures of a single action are reported and the menu is shown again.
pub async fn run<S, St>(
    source: &S,
    store: &mut St,
    search: &SearchQuery,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()>
where
    S: VacancySource<Posting> + Sync,
    S::E: 'static,
    St: VacancyStore,
{
    loop {
        writeln!(out, "{}", MENU)?;
        let Some(choice) = prompt(input, out, "Выберите действие: ")? else {
            break;
        };
        let result = match choice.as_str() {
            "1" => {
                let Some(keyword) = prompt(input, out, "Введите ключевое слово для поиска: ")?
                else {
                    break;
                };
                let query = SearchQuery {
                    keyword,
                    ..search.clone()
                };
                match scrape::search_and_store(source, store, &query).await {
                    Ok(saved) => {
                        writeln!(out, "{} вакансий сохранено.", saved)?;
                        Ok(())
                    }
                    Err(e) => Err(e),
                }
            }
            "2" => {
                let Some(n) = prompt_count(input, out)? else {
                    break;
                };
                commands::top(&*store, n, out)
            }
            "3" => {
                let Some(keyword) =
                    prompt(input, out, "Введите ключевое слово для поиска в описании: ")?
                else {
                    break;
                };
                commands::grep(&*store, &keyword, out)
            }
            "4" => break,
            other => {
                log::debug!("unknown menu choice: {}", other);
                Ok(())
            }
        };
        if let Err(e) = result {
            report(out, &e)?;
        }
    }
    Ok(())
}

fn report(out: &mut impl Write, e: &Error) -> Result<()> {
    log::error!("menu action failed: {}", e);
    writeln!(out, "Ошибка: {}", e)?;
    Ok(())
}
