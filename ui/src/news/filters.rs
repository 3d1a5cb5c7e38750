use api::Category;
use dioxus::prelude::*;

/// Value of the "All Categories" option.
const ALL_CATEGORIES: &str = "";

/// Map a `<select>` value back to a category filter; unknown values clear the filter.
pub fn category_from_value(value: &str) -> Option<Category> {
    if value == ALL_CATEGORIES {
        None
    } else {
        value.parse().ok()
    }
}

#[component]
pub fn NewsFilters(
    search: String,
    category: Option<Category>,
    on_search: EventHandler<String>,
    on_category: EventHandler<Option<Category>>,
) -> Element {
    let selected = category.map(Category::label).unwrap_or(ALL_CATEGORIES);

    rsx! {
        div { class: "news-filters",
            label { class: "news-filters__field",
                span { class: "news-filters__label", "Search" }
                span { class: "news-filters__input-wrap",
                    input {
                        r#type: "search",
                        class: "news-filters__input",
                        value: "{search}",
                        oninput: move |evt: FormEvent| on_search.call(evt.value()),
                    }
                    span { class: "news-filters__icon", aria_hidden: "true", "⌕" }
                }
            }

            label { class: "news-filters__field",
                span { class: "news-filters__label", "Category" }
                select {
                    class: "news-filters__select",
                    value: "{selected}",
                    onchange: move |evt: FormEvent| on_category.call(category_from_value(&evt.value())),
                    option { value: ALL_CATEGORIES, selected: category.is_none(), "All Categories" }
                    for choice in Category::ALL {
                        option {
                            key: "{choice.label()}",
                            value: choice.label(),
                            selected: category == Some(choice),
                            "{choice.label()}"
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_values_map_to_filters() {
        assert_eq!(category_from_value(""), None);
        assert_eq!(category_from_value("Health"), Some(Category::Health));
        assert_eq!(category_from_value("Weather"), None);
    }
}
