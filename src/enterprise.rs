use serde::Deserialize;

use crate::fixtures::Enterprise;
use crate::response::PagedList;

pub const DEFAULT_PAGE_SIZE: usize = 20;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnterpriseQuery {
    pub keyword: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub status: Option<String>,
    pub page: Option<usize>,
    pub page_size: Option<usize>,
}

impl EnterpriseQuery {
    /// Trimmed, lower-cased keyword; `None` when blank.
    pub fn keyword(&self) -> Option<String> {
        self.keyword
            .as_deref()
            .map(|keyword| keyword.trim().to_lowercase())
            .filter(|keyword| !keyword.is_empty())
    }

    pub fn page(&self) -> usize {
        self.page.unwrap_or(1).max(1)
    }

    pub fn page_size(&self) -> usize {
        self.page_size.filter(|size| *size > 0).unwrap_or(DEFAULT_PAGE_SIZE)
    }

    pub fn matches(&self, enterprise: &Enterprise) -> bool {
        let keyword_matches = self.keyword().map_or(true, |keyword| {
            [&enterprise.name, &enterprise.code, &enterprise.description]
                .iter()
                .any(|field| field.to_lowercase().contains(&keyword))
        });
        keyword_matches
            && exact(&self.kind, &enterprise.kind)
            && exact(&self.status, &enterprise.status)
    }
}

// Empty filter values are ignored.
fn exact(filter: &Option<String>, value: &str) -> bool {
    match filter.as_deref() {
        Some(wanted) if !wanted.is_empty() => wanted == value,
        _ => true,
    }
}

pub fn search(enterprises: &[Enterprise], query: &EnterpriseQuery) -> PagedList<Enterprise> {
    let filtered: Vec<&Enterprise> = enterprises.iter().filter(|e| query.matches(e)).collect();
    let page = query.page();
    let page_size = query.page_size();

    tracing::debug!(
        keyword = ?query.keyword(),
        matched = filtered.len(),
        page,
        page_size,
        "Filtered enterprises"
    );

    let items = filtered
        .iter()
        .skip((page - 1).saturating_mul(page_size))
        .take(page_size)
        .map(|enterprise| (*enterprise).clone())
        .collect();

    PagedList {
        items,
        total: filtered.len(),
        page,
        page_size,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::enterprises;

    fn query() -> EnterpriseQuery {
        EnterpriseQuery::default()
    }

    #[test]
    fn blank_keyword_returns_everything() {
        let all = enterprises();
        for keyword in ["", "   ", "\t"] {
            let result = search(&all, &EnterpriseQuery { keyword: Some(keyword.into()), ..query() });
            assert_eq!(result.total, 8);
            assert_eq!(result.items.len(), 8);
        }
    }

    #[test]
    fn keyword_matches_name_code_or_description() {
        let all = enterprises();
        let by_code = search(&all, &EnterpriseQuery { keyword: Some(" bjxny ".into()), ..query() });
        assert_eq!(by_code.total, 1);
        assert_eq!(by_code.items[0].id, "enterprise_001");

        let by_description = search(&all, &EnterpriseQuery { keyword: Some("储能".into()), ..query() });
        let ids: Vec<_> = by_description.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["enterprise_003", "enterprise_008"]);
    }

    #[test]
    fn type_and_status_are_exact() {
        let all = enterprises();
        let solar = search(&all, &EnterpriseQuery { kind: Some("solar".into()), ..query() });
        assert_eq!(solar.total, 3);

        let partial = search(&all, &EnterpriseQuery { kind: Some("sol".into()), ..query() });
        assert_eq!(partial.total, 0);

        let inactive = search(&all, &EnterpriseQuery { status: Some("inactive".into()), ..query() });
        assert_eq!(inactive.total, 0);

        let ignored = search(&all, &EnterpriseQuery { kind: Some(String::new()), ..query() });
        assert_eq!(ignored.total, 8);
    }

    #[test]
    fn pages_slice_the_filtered_rows() {
        let all = enterprises();
        let second = search(&all, &EnterpriseQuery { page: Some(2), page_size: Some(3), ..query() });
        assert_eq!(second.total, 8);
        assert_eq!(second.page, 2);
        assert_eq!(second.page_size, 3);
        let ids: Vec<_> = second.items.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["enterprise_004", "enterprise_005", "enterprise_006"]);

        let beyond = search(&all, &EnterpriseQuery { page: Some(9), page_size: Some(3), ..query() });
        assert!(beyond.items.is_empty());
        assert_eq!(beyond.total, 8);
    }

    #[test]
    fn page_zero_is_clamped() {
        let all = enterprises();
        let result = search(&all, &EnterpriseQuery { page: Some(0), ..query() });
        assert_eq!(result.page, 1);
        assert_eq!(result.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(result.items.len(), 8);
    }
}
