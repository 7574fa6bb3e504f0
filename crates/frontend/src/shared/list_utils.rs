//! List helpers: local search and the search box

use leptos::prelude::*;

/// Types that can be filtered by the search box
pub trait Searchable {
    /// Text fields the page searches
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match; `filter` is already trimmed and non-empty
    fn matches_filter(&self, filter: &str) -> bool {
        let filter_lower = filter.to_lowercase();
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&filter_lower))
    }
}

/// Filters a list by the search query. An empty query returns everything.
pub fn filter_list<T: Searchable + Clone>(items: &[T], filter: &str) -> Vec<T> {
    let filter = filter.trim();
    if filter.is_empty() {
        return items.to_vec();
    }

    items
        .iter()
        .filter(|item| item.matches_filter(filter))
        .cloned()
        .collect()
}

/// Byte ranges of `text` that match `filter` case-insensitively.
///
/// Matching runs on the lowercased text; each lowercased byte is mapped back
/// to the source character it came from, so every range lies on char
/// boundaries of `text` even when lowercasing changes character widths.
pub fn match_ranges(text: &str, filter: &str) -> Vec<(usize, usize)> {
    let filter_lower = filter.trim().to_lowercase();
    if filter_lower.is_empty() {
        return Vec::new();
    }

    let mut lower = String::with_capacity(text.len());
    // (start in `lower`, start in `text`, end in `text`) per source char
    let mut origins: Vec<(usize, usize, usize)> = Vec::new();
    for (offset, ch) in text.char_indices() {
        origins.push((lower.len(), offset, offset + ch.len_utf8()));
        lower.extend(ch.to_lowercase());
    }

    let source_char = |lower_pos: usize| {
        let idx = origins.partition_point(|(start, _, _)| *start <= lower_pos);
        origins[idx - 1]
    };

    let mut ranges: Vec<(usize, usize)> = Vec::new();
    let mut from = 0;
    while let Some(pos) = lower[from..].find(&filter_lower) {
        let lower_start = from + pos;
        let lower_end = lower_start + filter_lower.len();
        let (_, start, _) = source_char(lower_start);
        let (_, _, end) = source_char(lower_end - 1);
        match ranges.last_mut() {
            Some(last) if start < last.1 => last.1 = last.1.max(end),
            _ => ranges.push((start, end)),
        }
        from = lower_end;
    }
    ranges
}

/// Highlights case-insensitive matches in the text
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let ranges = match_ranges(text, filter);
    if ranges.is_empty() {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    for (start, end) in ranges {
        if start > last_pos {
            parts.push(view! { <span>{text[last_pos..start].to_string()}</span> }.into_any());
        }
        parts.push(
            view! { <mark class="search-match">{text[start..end].to_string()}</mark> }.into_any(),
        );
        last_pos = end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with an icon and a clear button
#[component]
pub fn SearchInput(
    /// Filter value; the page filters on every change
    value: RwSignal<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "بحث...".to_string()
    } else {
        placeholder
    };

    view! {
        <div class="search-input">
            <span class="search-input__icon">{crate::shared::icons::icon("search")}</span>
            <input
                type="text"
                class="search-input__field"
                class:search-input__field--active=move || !value.get().trim().is_empty()
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            <Show when=move || !value.get().is_empty()>
                <button
                    class="search-input__clear"
                    title="مسح"
                    on:click=move |_| value.set(String::new())
                >
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Clone, Debug, PartialEq)]
    struct Row {
        name: String,
        area: Option<String>,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            let mut fields = vec![self.name.as_str()];
            if let Some(area) = &self.area {
                fields.push(area);
            }
            fields
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { name: "Block A".into(), area: Some("الرياض".into()) },
            Row { name: "block b".into(), area: None },
            Row { name: "مربع 3".into(), area: Some("النصر".into()) },
        ]
    }

    #[test]
    fn test_empty_filter_returns_everything() {
        assert_eq!(filter_list(&rows(), ""), rows());
        assert_eq!(filter_list(&rows(), "   "), rows());
    }

    #[test]
    fn test_case_insensitive_substring() {
        let found = filter_list(&rows(), "BLOCK");
        assert_eq!(found.len(), 2);
        let found = filter_list(&rows(), "ck a");
        assert_eq!(found, vec![rows()[0].clone()]);
    }

    #[test]
    fn test_matches_secondary_field() {
        let found = filter_list(&rows(), "النصر");
        assert_eq!(found, vec![rows()[2].clone()]);
    }

    #[test]
    fn test_query_is_trimmed() {
        assert_eq!(filter_list(&rows(), "  مربع ").len(), 1);
    }

    #[test]
    fn test_no_match() {
        assert!(filter_list(&rows(), "zzz").is_empty());
    }

    #[test]
    fn test_match_ranges_ascii_case_insensitive() {
        assert_eq!(match_ranges("Block b block", "BLOCK"), vec![(0, 5), (8, 13)]);
        assert!(match_ranges("Block", "  ").is_empty());
        assert!(match_ranges("Block", "zzz").is_empty());
    }

    #[test]
    fn test_match_ranges_arabic() {
        let text = "مربع 3 - النصر";
        let ranges = match_ranges(text, "النصر");
        assert_eq!(ranges.len(), 1);
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "النصر");
    }

    #[test]
    fn test_match_ranges_stay_on_char_boundaries() {
        // 'İ' lowercases to two chars and 'ẞ' to a narrower 'ß'.
        let text = "İẞa";
        let ranges = match_ranges(text, "ß");
        assert_eq!(ranges.len(), 1);
        for (start, end) in &ranges {
            assert!(text.is_char_boundary(*start));
            assert!(text.is_char_boundary(*end));
        }
        let (start, end) = ranges[0];
        assert_eq!(&text[start..end], "ẞ");

        let ranges = match_ranges("İstanbul", "i");
        assert_eq!(ranges, vec![(0, "İ".len())]);
    }
}
