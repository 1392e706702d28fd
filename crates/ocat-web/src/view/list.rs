//! List view model.
//!
//! The whole table state lives in [`ListState`], parsed from the query
//! string on every request. Header and pager links encode the next state,
//! so nothing is kept between requests.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use ocat_core::models::assessment::Assessment;

use super::format::{format_date, risk_color};

pub const PAGE_SIZES: [usize; 4] = [5, 10, 20, 50];
pub const DEFAULT_PAGE_SIZE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Id,
    CatName,
    CatDateOfBirth,
    InstrumentType,
    Score,
    RiskLevel,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Id,
        Column::CatName,
        Column::CatDateOfBirth,
        Column::InstrumentType,
        Column::Score,
        Column::RiskLevel,
    ];

    /// Query-string key, matching the wire field name.
    pub fn key(&self) -> &'static str {
        match self {
            Column::Id => "id",
            Column::CatName => "catName",
            Column::CatDateOfBirth => "catDateOfBirth",
            Column::InstrumentType => "instrumentType",
            Column::Score => "score",
            Column::RiskLevel => "riskLevel",
        }
    }

    pub fn header(&self) -> &'static str {
        match self {
            Column::Id => "ID",
            Column::CatName => "Cat Name",
            Column::CatDateOfBirth => "Date of Birth",
            Column::InstrumentType => "Instrument",
            Column::Score => "Score",
            Column::RiskLevel => "Risk",
        }
    }

    pub fn from_key(key: &str) -> Option<Column> {
        Column::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Ascending order for this column. Names compare case-insensitively,
    /// risk compares by tier.
    fn compare(&self, a: &Assessment, b: &Assessment) -> Ordering {
        match self {
            Column::Id => a.id.cmp(&b.id),
            Column::CatName => a
                .cat_name
                .to_lowercase()
                .cmp(&b.cat_name.to_lowercase()),
            Column::CatDateOfBirth => a.cat_date_of_birth.cmp(&b.cat_date_of_birth),
            Column::InstrumentType => a.instrument_type.cmp(&b.instrument_type),
            Column::Score => a.score.cmp(&b.score),
            Column::RiskLevel => a.risk_level.cmp(&b.risk_level),
        }
    }

    fn cell(&self, a: &Assessment) -> String {
        match self {
            Column::Id => a.id.to_string(),
            Column::CatName => a.cat_name.clone(),
            Column::CatDateOfBirth => format_date(Some(a.cat_date_of_birth)),
            Column::InstrumentType => a.instrument_type.to_string(),
            Column::Score => a.score.to_string(),
            Column::RiskLevel => a.risk_level.to_string(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sorting {
    pub column: Column,
    pub direction: SortDirection,
}

/// Raw query parameters. Everything is optional and parsed leniently;
/// junk values fall back to defaults instead of failing the page.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub desc: Option<String>,
    pub page: Option<String>,
    pub size: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListState {
    pub sorting: Option<Sorting>,
    /// Zero-based.
    pub page_index: usize,
    pub page_size: usize,
}

impl Default for ListState {
    fn default() -> Self {
        Self {
            sorting: None,
            page_index: 0,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl ListState {
    pub fn from_query(query: &ListQuery) -> Self {
        let sorting = query
            .sort
            .as_deref()
            .and_then(Column::from_key)
            .map(|column| Sorting {
                column,
                direction: match query.desc.as_deref() {
                    Some("true") | Some("1") => SortDirection::Desc,
                    _ => SortDirection::Asc,
                },
            });

        // The URL carries a 1-based page number.
        let page_index = query
            .page
            .as_deref()
            .and_then(|p| p.parse::<usize>().ok())
            .map(|p| p.saturating_sub(1))
            .unwrap_or(0);

        let page_size = query
            .size
            .as_deref()
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|s| PAGE_SIZES.contains(s))
            .unwrap_or(DEFAULT_PAGE_SIZE);

        Self {
            sorting,
            page_index,
            page_size,
        }
    }

    /// Next state after clicking `column`'s header: unsorted → ascending →
    /// descending → unsorted. Sorting another column starts at ascending.
    /// Any sort change returns to the first page.
    pub fn toggle_sort(&self, column: Column) -> Self {
        let sorting = match self.sorting {
            Some(Sorting {
                column: current,
                direction: SortDirection::Asc,
            }) if current == column => Some(Sorting {
                column,
                direction: SortDirection::Desc,
            }),
            Some(Sorting {
                column: current,
                direction: SortDirection::Desc,
            }) if current == column => None,
            _ => Some(Sorting {
                column,
                direction: SortDirection::Asc,
            }),
        };

        Self {
            sorting,
            page_index: 0,
            ..*self
        }
    }

    pub fn with_page(&self, page_index: usize) -> Self {
        Self {
            page_index,
            ..*self
        }
    }

    /// Change the page size, staying on the page that holds the current
    /// first row.
    pub fn with_page_size(&self, page_size: usize) -> Self {
        let top_row = self.page_index * self.page_size;
        Self {
            page_index: top_row / page_size.max(1),
            page_size,
            ..*self
        }
    }

    pub fn to_query(&self) -> String {
        let mut params = Vec::new();
        if let Some(sorting) = self.sorting {
            params.push(format!("sort={}", sorting.column.key()));
            if sorting.direction == SortDirection::Desc {
                params.push("desc=true".to_string());
            }
        }
        params.push(format!("page={}", self.page_index + 1));
        params.push(format!("size={}", self.page_size));
        format!("?{}", params.join("&"))
    }

    fn indicator(&self, column: Column) -> &'static str {
        match self.sorting {
            Some(s) if s.column == column => match s.direction {
                SortDirection::Asc => "↑",
                SortDirection::Desc => "↓",
            },
            _ => "⇅",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct HeaderCell {
    pub key: &'static str,
    pub label: &'static str,
    pub indicator: &'static str,
    pub href: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Cell {
    pub text: String,
    /// Only set on the risk column.
    pub background: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Row {
    pub id: i64,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PageSizeOption {
    pub size: usize,
    pub selected: bool,
    pub href: String,
}

/// Everything the list template needs, already formatted.
#[derive(Debug, Clone, Serialize)]
pub struct ListPage {
    pub is_empty: bool,
    pub headers: Vec<HeaderCell>,
    pub rows: Vec<Row>,
    /// 1-based.
    pub page_number: usize,
    pub page_count: usize,
    pub can_previous: bool,
    pub can_next: bool,
    pub first_href: String,
    pub previous_href: String,
    pub next_href: String,
    pub last_href: String,
    pub page_size: usize,
    pub page_sizes: Vec<PageSizeOption>,
}

/// Sort, paginate and format `assessments` (in service order) for `state`.
pub fn build_list_page(mut assessments: Vec<Assessment>, state: &ListState) -> ListPage {
    if let Some(sorting) = state.sorting {
        // Stable, so equal keys keep the service's newest-first order.
        match sorting.direction {
            SortDirection::Asc => assessments.sort_by(|a, b| sorting.column.compare(a, b)),
            SortDirection::Desc => assessments.sort_by(|a, b| sorting.column.compare(b, a)),
        }
    }

    let total = assessments.len();
    let page_count = total.div_ceil(state.page_size.max(1));
    let page_index = state.page_index.min(page_count.saturating_sub(1));
    let state = state.with_page(page_index);

    let rows = assessments
        .iter()
        .skip(page_index * state.page_size)
        .take(state.page_size)
        .map(|a| Row {
            id: a.id,
            cells: Column::ALL
                .iter()
                .map(|column| Cell {
                    text: column.cell(a),
                    background: (*column == Column::RiskLevel)
                        .then(|| risk_color(a.risk_level.as_str())),
                })
                .collect(),
        })
        .collect();

    let headers = Column::ALL
        .iter()
        .map(|&column| HeaderCell {
            key: column.key(),
            label: column.header(),
            indicator: state.indicator(column),
            href: state.toggle_sort(column).to_query(),
        })
        .collect();

    let last_index = page_count.saturating_sub(1);

    ListPage {
        is_empty: total == 0,
        headers,
        rows,
        page_number: page_index + 1,
        page_count,
        can_previous: page_index > 0,
        can_next: page_index < last_index,
        first_href: state.with_page(0).to_query(),
        previous_href: state.with_page(page_index.saturating_sub(1)).to_query(),
        next_href: state.with_page((page_index + 1).min(last_index)).to_query(),
        last_href: state.with_page(last_index).to_query(),
        page_size: state.page_size,
        page_sizes: PAGE_SIZES
            .iter()
            .map(|&size| PageSizeOption {
                size,
                selected: size == state.page_size,
                href: state.with_page_size(size).to_query(),
            })
            .collect(),
    }
}
