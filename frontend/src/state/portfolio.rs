/// The sentinel filter value that shows every item.
pub const ALL: &str = "all";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Filter {
    #[default]
    All,
    Category(String),
}

impl Filter {
    pub fn parse(value: &str) -> Self {
        if value == ALL {
            Filter::All
        } else {
            Filter::Category(value.to_string())
        }
    }

    pub fn value(&self) -> &str {
        match self {
            Filter::All => ALL,
            Filter::Category(category) => category,
        }
    }

    /// Whether the filter button carrying `value` is the active one.
    pub fn is_selected(&self, value: &str) -> bool {
        self.value() == value
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            Filter::All => true,
            Filter::Category(wanted) => wanted == category,
        }
    }
}

/// One portfolio entry.
#[derive(Debug, Clone, PartialEq)]
pub struct GalleryItem {
    pub category: String,
    pub image_src: String,
    pub image_alt: String,
    pub title: String,
    pub category_label: String,
}

/// Indices (into `items`) of the entries the filter lets through, in
/// document order.
pub fn visible_indices(items: &[GalleryItem], filter: &Filter) -> Vec<usize> {
    items
        .iter()
        .enumerate()
        .filter(|(_, item)| filter.matches(&item.category))
        .map(|(index, _)| index)
        .collect()
}

/// Position of `item_index` within the visible set, which is what the
/// lightbox navigates over.
pub fn visible_position(visible: &[usize], item_index: usize) -> Option<usize> {
    visible.iter().position(|&index| index == item_index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn item(category: &str, title: &str) -> GalleryItem {
        GalleryItem {
            category: category.to_string(),
            image_src: format!("assets/images/{title}.jpg"),
            image_alt: title.to_string(),
            title: title.to_string(),
            category_label: category.to_uppercase(),
        }
    }

    fn gallery() -> Vec<GalleryItem> {
        vec![
            item("interior", "living-room"),
            item("exterior", "facade"),
            item("interior", "kitchen"),
            item("furniture", "table"),
            item("exterior", "garden"),
        ]
    }

    #[rstest]
    #[case("all", vec![0, 1, 2, 3, 4])]
    #[case("interior", vec![0, 2])]
    #[case("exterior", vec![1, 4])]
    #[case("furniture", vec![3])]
    #[case("landscape", vec![])]
    fn filter_shows_matching_items_in_order(#[case] value: &str, #[case] expected: Vec<usize>) {
        assert_eq!(visible_indices(&gallery(), &Filter::parse(value)), expected);
    }

    #[test]
    fn every_item_visible_iff_rule_holds() {
        let items = gallery();
        for value in ["all", "interior", "exterior", "furniture", "nope"] {
            let filter = Filter::parse(value);
            let visible = visible_indices(&items, &filter);
            for (index, item) in items.iter().enumerate() {
                let expected = value == "all" || item.category == value;
                assert_eq!(visible.contains(&index), expected);
            }
        }
    }

    #[test]
    fn parse_round_trips_values() {
        assert_eq!(Filter::parse("all"), Filter::All);
        assert_eq!(Filter::parse("interior").value(), "interior");
        assert_eq!(Filter::default().value(), "all");
    }

    #[rstest]
    #[case("all")]
    #[case("interior")]
    #[case("exterior")]
    fn exactly_the_chosen_button_is_selected(#[case] chosen: &str) {
        let filter = Filter::parse(chosen);
        let selected: Vec<&str> = ["all", "interior", "exterior", "furniture"]
            .into_iter()
            .filter(|value| filter.is_selected(value))
            .collect();
        assert_eq!(selected, vec![chosen]);
    }

    #[test]
    fn position_is_relative_to_visible_set() {
        let visible = visible_indices(&gallery(), &Filter::parse("exterior"));
        assert_eq!(visible_position(&visible, 4), Some(1));
        assert_eq!(visible_position(&visible, 0), None);
    }
}
