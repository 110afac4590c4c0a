// Static copy for the company profile page.

use crate::state::portfolio::GalleryItem;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Service {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stat {
    pub id: &'static str,
    pub value: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { href: "#home", label: "Beranda" },
    NavLink { href: "#about", label: "Tentang" },
    NavLink { href: "#services", label: "Layanan" },
    NavLink { href: "#portfolio", label: "Portfolio" },
    NavLink { href: "#contact", label: "Kontak" },
];

pub const SERVICES: &[Service] = &[
    Service {
        icon: "fa-couch",
        title: "Desain Interior",
        description: "Perencanaan ruang hunian dan komersial yang nyaman, fungsional, dan berkarakter.",
    },
    Service {
        icon: "fa-building",
        title: "Desain Arsitektur",
        description: "Konsep bangunan dari sketsa awal hingga gambar kerja siap bangun.",
    },
    Service {
        icon: "fa-cube",
        title: "Visualisasi 3D",
        description: "Render realistis agar Anda bisa melihat hasil akhir sebelum pembangunan dimulai.",
    },
    Service {
        icon: "fa-hammer",
        title: "Build & Renovasi",
        description: "Pelaksanaan proyek dan renovasi dengan pengawasan tim kami di lapangan.",
    },
];

pub const PORTFOLIO_FILTERS: &[FilterOption] = &[
    FilterOption { value: "all", label: "Semua" },
    FilterOption { value: "interior", label: "Interior" },
    FilterOption { value: "exterior", label: "Eksterior" },
    FilterOption { value: "commercial", label: "Komersial" },
];

pub const STATS: &[Stat] = &[
    Stat { id: "projectCounter", value: "250+", label: "Proyek Selesai" },
    Stat { id: "clientCounter", value: "180+", label: "Klien Puas" },
    Stat { id: "experienceCounter", value: "10+", label: "Tahun Pengalaman" },
    Stat { id: "teamCounter", value: "25", label: "Anggota Tim" },
];

const PORTFOLIO: &[(&str, &str, &str)] = &[
    ("interior", "living-room", "Modern Living Room"),
    ("exterior", "tropical-house", "Tropical House Facade"),
    ("commercial", "coffee-shop", "Industrial Coffee Shop"),
    ("interior", "master-bedroom", "Minimalist Master Bedroom"),
    ("exterior", "garden-villa", "Garden Villa"),
    ("commercial", "boutique-office", "Boutique Office"),
    ("interior", "kitchen", "Scandinavian Kitchen"),
    ("commercial", "restaurant", "Family Restaurant"),
];

fn category_label(category: &str) -> &'static str {
    PORTFOLIO_FILTERS
        .iter()
        .find(|option| option.value == category)
        .map(|option| option.label)
        .unwrap_or("")
}

pub fn portfolio_items() -> Vec<GalleryItem> {
    PORTFOLIO
        .iter()
        .map(|&(category, slug, title)| GalleryItem {
            category: category.to_string(),
            image_src: format!("assets/images/portfolio/{}.jpg", slug),
            image_alt: title.to_string(),
            title: title.to_string(),
            category_label: category_label(category).to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::counter::CounterText;
    use crate::state::portfolio::Filter;

    #[test]
    fn every_item_has_a_filter_button() {
        for item in portfolio_items() {
            assert!(!item.category_label.is_empty(), "{} has no label", item.title);
        }
    }

    #[test]
    fn each_filter_marks_one_button() {
        for chosen in PORTFOLIO_FILTERS {
            let filter = Filter::parse(chosen.value);
            let active: Vec<&str> = PORTFOLIO_FILTERS
                .iter()
                .filter(|option| filter.is_selected(option.value))
                .map(|option| option.value)
                .collect();
            assert_eq!(active, vec![chosen.value]);
        }
    }

    #[test]
    fn stats_are_counters_with_numbers() {
        for stat in STATS {
            assert!(stat.id.ends_with("Counter"));
            assert!(CounterText::parse(stat.value).is_some());
        }
    }
}
