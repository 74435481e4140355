// src/columns/roles.rs

/// Semantic column meanings inferred from header text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Link,
    Timestamp,
    Author,
    Category,
}

/// Per-role synonym tables. Matching is case-insensitive and exact; the
/// Chinese entries cover the column names Google Forms emits for
/// Traditional Chinese forms. Table order is the per-header decision order.
static ROLE_SYNONYMS: &[(Role, &[&str])] = &[
    (Role::Link, &["作品連結", "連結", "link", "url"]),
    (Role::Timestamp, &["時間戳記", "timestamp", "日期", "時間"]),
    (Role::Author, &["作者名", "作者", "author", "name"]),
    (Role::Category, &["類別", "分類", "category", "type"]),
];

/// Which column index carries each role, if any.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub link: Option<usize>,
    pub timestamp: Option<usize>,
    pub author: Option<usize>,
    pub category: Option<usize>,
}

impl ColumnRoles {
    fn slot(&mut self, role: Role) -> &mut Option<usize> {
        match role {
            Role::Link => &mut self.link,
            Role::Timestamp => &mut self.timestamp,
            Role::Author => &mut self.author,
            Role::Category => &mut self.category,
        }
    }
}

/// Scan `headers` and assign at most one column index to each role.
///
/// Each header is consumed by the first synonym set it matches, so a header
/// never carries more than one role. The first header matching a role keeps
/// it; later matches for the same role are ignored.
pub fn resolve_roles(headers: &[String]) -> ColumnRoles {
    let mut roles = ColumnRoles::default();
    for (idx, header) in headers.iter().enumerate() {
        let name = header.to_lowercase();
        for (role, synonyms) in ROLE_SYNONYMS {
            if synonyms.contains(&name.as_str()) {
                let slot = roles.slot(*role);
                if slot.is_none() {
                    *slot = Some(idx);
                }
                break;
            }
        }
    }
    roles
}

/// Recompute role indices against a filtered header set.
///
/// Index arithmetic is wrong here: any number of columns may have been
/// removed ahead of a role's original position. Each assigned role is
/// re-located by header name instead (first occurrence); a role whose
/// column was filtered out resolves to `None`.
pub fn remap_roles(
    roles: &ColumnRoles,
    original_headers: &[String],
    filtered_headers: &[String],
) -> ColumnRoles {
    let relocate = |idx: Option<usize>| {
        idx.and_then(|i| original_headers.get(i))
            .and_then(|name| filtered_headers.iter().position(|h| h == name))
    };
    ColumnRoles {
        link: relocate(roles.link),
        timestamp: relocate(roles.timestamp),
        author: relocate(roles.author),
        category: relocate(roles.category),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn resolves_localized_and_english_names() {
        let roles = resolve_roles(&headers(&["標題", "作者", "連結", "時間戳記", "類別"]));
        assert_eq!(roles.author, Some(1));
        assert_eq!(roles.link, Some(2));
        assert_eq!(roles.timestamp, Some(3));
        assert_eq!(roles.category, Some(4));

        let roles = resolve_roles(&headers(&["Title", "Author", "URL", "Date", "Type"]));
        assert_eq!(roles.author, Some(1));
        assert_eq!(roles.link, Some(2));
        assert_eq!(roles.timestamp, Some(3));
        assert_eq!(roles.category, Some(4));
    }

    #[test]
    fn matching_is_case_insensitive() {
        let roles = resolve_roles(&headers(&["LINK", "Timestamp"]));
        assert_eq!(roles.link, Some(0));
        assert_eq!(roles.timestamp, Some(1));
    }

    #[test]
    fn first_header_wins_a_contested_role() {
        let roles = resolve_roles(&headers(&["link", "url", "連結"]));
        assert_eq!(roles.link, Some(0));
    }

    #[test]
    fn unmatched_headers_leave_roles_absent() {
        let roles = resolve_roles(&headers(&["標題", "備註"]));
        assert_eq!(roles, ColumnRoles::default());
    }

    #[test]
    fn remap_relocates_surviving_columns_by_name() {
        let original = headers(&["Author", "Email", "Link", "Timestamp"]);
        let filtered = headers(&["Author", "Link", "Timestamp"]);
        let roles = resolve_roles(&original);
        assert_eq!(roles.link, Some(2));

        let remapped = remap_roles(&roles, &original, &filtered);
        assert_eq!(remapped.author, Some(0));
        assert_eq!(remapped.link, Some(1));
        assert_eq!(remapped.timestamp, Some(2));
    }

    #[test]
    fn remap_drops_roles_whose_column_was_removed() {
        let original = headers(&["link", "author"]);
        let filtered = headers(&["author"]);
        let roles = resolve_roles(&original);

        let remapped = remap_roles(&roles, &original, &filtered);
        assert_eq!(remapped.link, None);
        assert_eq!(remapped.author, Some(0));
    }

    #[test]
    fn remap_keeps_absent_roles_absent() {
        let original = headers(&["標題"]);
        let remapped = remap_roles(&ColumnRoles::default(), &original, &original);
        assert_eq!(remapped, ColumnRoles::default());
    }

    #[test]
    fn remap_uses_first_occurrence_on_duplicate_names() {
        let original = headers(&["Email", "link", "link"]);
        let filtered = headers(&["link", "link"]);
        let roles = resolve_roles(&original);
        assert_eq!(roles.link, Some(1));

        let remapped = remap_roles(&roles, &original, &filtered);
        assert_eq!(remapped.link, Some(0));
    }
}
