use scraper::{ElementRef, Html, Selector};

use crate::error::ParseError;

/// Header labels plus row cells, exactly as they appear on the page,
/// whitespace-trimmed. Discarded after transformation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Locates the second table on the page and extracts its header and row
/// texts. Positional selection is deliberate: the page's first table is
/// unrelated content. Every row must have as many cells as the header.
pub fn parse_second_table(html: &str) -> Result<RawTable, ParseError> {
    let table_selector = Selector::parse("table").unwrap();
    let th_selector = Selector::parse("th").unwrap();
    let tr_selector = Selector::parse("tr").unwrap();
    let td_selector = Selector::parse("td").unwrap();

    let document = Html::parse_document(html);

    let tables: Vec<ElementRef> = document.select(&table_selector).collect();
    if tables.len() < 2 {
        log::error!("Expected at least 2 tables on the page, found {}", tables.len());
        return Err(ParseError::MissingTable {
            found: tables.len(),
        });
    }
    let table = tables[1];

    let headers: Vec<String> = table.select(&th_selector).map(element_text).collect();

    let mut rows = Vec::new();
    for (row, tr) in table.select(&tr_selector).skip(1).enumerate() {
        let cells: Vec<String> = tr.select(&td_selector).map(element_text).collect();
        if cells.len() != headers.len() {
            log::error!(
                "Row {} has {} cells but the header has {}",
                row,
                cells.len(),
                headers.len()
            );
            return Err(ParseError::RaggedRow {
                row,
                cells: cells.len(),
                headers: headers.len(),
            });
        }
        rows.push(cells);
    }

    log::info!("{} companies extracted successfully.", rows.len());
    Ok(RawTable { headers, rows })
}

fn element_text(element: ElementRef) -> String {
    element.text().collect::<String>().trim().to_string()
}
