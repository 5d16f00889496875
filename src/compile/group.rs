use super::{Operator, SpecFilter};

/// Filters after grouping: one constraint, or several accepted values for
/// the same attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum FilterGroup {
    Single(SpecFilter),
    /// `name = v1 OR name = v2 ...`; only "=" filters group.
    Grouped { name: String, values: Vec<String> },
}

impl FilterGroup {
    pub fn name(&self) -> &str {
        match self {
            FilterGroup::Single(filter) => &filter.name,
            FilterGroup::Grouped { name, .. } => name,
        }
    }

    pub fn operator(&self) -> Operator {
        match self {
            FilterGroup::Single(filter) => filter.operator,
            FilterGroup::Grouped { .. } => Operator::Eq,
        }
    }

    pub fn values(&self) -> Vec<&str> {
        match self {
            FilterGroup::Single(filter) => vec![filter.value.as_str()],
            FilterGroup::Grouped { values, .. } => values.iter().map(String::as_str).collect(),
        }
    }
}

/// Merge "=" filters that share an attribute name (case-insensitively)
/// into OR groups.
///
/// Order follows the first appearance of each name. Range filters always
/// stay single; repeated identical values collapse.
pub fn group_filters(filters: &[SpecFilter]) -> Vec<FilterGroup> {
    let mut groups: Vec<FilterGroup> = Vec::new();

    for filter in filters {
        if filter.operator != Operator::Eq {
            groups.push(FilterGroup::Single(filter.clone()));
            continue;
        }

        let existing = groups.iter_mut().find(|group| {
            group.operator() == Operator::Eq && group.name().eq_ignore_ascii_case(&filter.name)
        });

        match existing {
            None => groups.push(FilterGroup::Single(filter.clone())),
            Some(group) => {
                if group.values().iter().any(|v| v.eq_ignore_ascii_case(&filter.value)) {
                    continue;
                }
                let merged = match std::mem::replace(group, FilterGroup::Grouped { name: String::new(), values: vec![] })
                {
                    FilterGroup::Single(first) => {
                        FilterGroup::Grouped { name: first.name, values: vec![first.value, filter.value.clone()] }
                    }
                    FilterGroup::Grouped { name, mut values } => {
                        values.push(filter.value.clone());
                        FilterGroup::Grouped { name, values }
                    }
                };
                *group = merged;
            }
        }
    }

    groups
}
